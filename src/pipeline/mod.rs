//! Chain update pipeline.
//!
//! Walks a branch chain through
//! `Init → Fetching → Resolving → Validating → Updating → Merging → Restoring → Done`.
//! Any failure moves the run to `Aborted`. Whatever the outcome, the branch
//! that was active at `Init` is switched back to before the run returns.
//!
//! Every branch is brought up to date before the first merge, so nothing stale
//! is merged forward. Nothing is retried: a non-fast-forward pull, a merge
//! conflict or a rejected push stops the run where it happened.

mod state;


pub use state::{PipelineRunState, Stage};

use crate::chain::{
    BranchCatalog, BranchChainSpec, ResolvedChain, Resolver, RunOptions, remote_for,
};
use crate::error::{ChainError, Result};
use crate::reporter::Reporter;
use crate::vcs::VersionControl;
use tracing::{info, warn};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub chain: ResolvedChain,
    /// Branches that were pulled from their remote.
    pub pulled: Vec<String>,
    /// Branches without a remote counterpart; switched to but not pulled.
    pub without_remote: Vec<String>,
    /// `(source, target)` pairs merged and pushed, in order.
    pub merged: Vec<(String, String)>,
}

/// One run of the pipeline against one repository.
pub struct ChainUpdate<'a> {
    vcs: &'a dyn VersionControl,
    reporter: &'a mut dyn Reporter,
    resolver: Resolver,
    state: PipelineRunState,
}

impl<'a> ChainUpdate<'a> {
    pub fn new(
        vcs: &'a dyn VersionControl,
        reporter: &'a mut dyn Reporter,
        resolver: Resolver,
        options: RunOptions,
    ) -> Self {
        Self {
            vcs,
            reporter,
            resolver,
            state: PipelineRunState::new(options),
        }
    }

    pub fn state(&self) -> &PipelineRunState {
        &self.state
    }

    /// Run the whole pipeline for `spec`.
    ///
    /// On failure the error of the failing step is returned after the
    /// original branch has been restored. A failed restoration is reported
    /// but never replaces the run's own outcome.
    pub fn run(&mut self, spec: &BranchChainSpec) -> Result<RunSummary> {
        match self.advance(spec) {
            Ok(summary) => {
                self.state.enter(Stage::Restoring);
                self.restore_original_branch();
                self.state.enter(Stage::Done);
                self.header("Finished");
                self.describe_summary(&summary);
                Ok(summary)
            }
            Err(err) => {
                self.state.abort();
                warn!(stage = ?self.state.failed_stage(), error = %err, "pipeline aborted");
                self.restore_original_branch();
                Err(err)
            }
        }
    }

    fn advance(&mut self, spec: &BranchChainSpec) -> Result<RunSummary> {
        self.capture_original_branch()?;

        self.state.enter(Stage::Fetching);
        self.header("Fetching branches");
        self.vcs.fetch()?;

        self.state.enter(Stage::Resolving);
        let remotes = self.vcs.list_remotes()?;
        let chain = self.resolve(spec, &remotes)?;

        self.state.enter(Stage::Validating);
        validate_chain(&chain)?;

        self.state.enter(Stage::Updating);
        let (pulled, without_remote) = self.update(&chain, &remotes)?;

        let merged = if self.state.options().update_only {
            self.reporter.description("Update only, skipping merge");
            Vec::new()
        } else {
            self.state.enter(Stage::Merging);
            self.merge_forward(&chain)?
        };

        Ok(RunSummary {
            chain,
            pulled,
            without_remote,
            merged,
        })
    }

    fn capture_original_branch(&mut self) -> Result<()> {
        let current = self.vcs.current_branch_name()?;
        let current = current.trim();
        if current.is_empty() {
            warn!("HEAD is detached, the original branch will not be restored");
            self.state.set_original_branch(None);
        } else {
            info!(branch = current, "captured original branch");
            self.state.set_original_branch(Some(current.to_string()));
        }
        Ok(())
    }

    fn resolve(&mut self, spec: &BranchChainSpec, remotes: &[String]) -> Result<ResolvedChain> {
        self.header("Convert args to full branch names");
        self.reporter
            .description("Getting all branch names (git branch -a)");
        let catalog = BranchCatalog::from_entries(self.vcs.list_all_branches()?)
            .with_remotes(remotes.iter().cloned());

        self.reporter.description("Mapping args to full branch names");
        let resolution = self.resolver.resolve(spec, &catalog)?;

        for ambiguity in &resolution.ambiguities {
            warn!(
                token = %ambiguity.token,
                chosen = %ambiguity.chosen,
                others = ?ambiguity.others,
                "ambiguous branch name"
            );
            self.reporter.description(&format!(
                "Warning: '{}' also matches {}; using {}",
                ambiguity.token,
                ambiguity.others.join(", "),
                ambiguity.chosen
            ));
        }

        for (token, branch) in spec.tokens().iter().zip(resolution.chain.branches()) {
            self.reporter
                .description(&format!("{} --> {}", token, branch));
        }

        Ok(resolution.chain)
    }

    fn update(
        &mut self,
        chain: &ResolvedChain,
        remotes: &[String],
    ) -> Result<(Vec<String>, Vec<String>)> {
        self.header("Updating branches to latest change");
        let remote_branches = self.vcs.list_remote_branches()?;

        let mut pulled = Vec::new();
        let mut without_remote = Vec::new();
        for branch in chain.branches() {
            let name = branch.as_str();
            self.reporter.description(&format!("Pulling branch: {}", name));
            self.vcs.switch(name)?;

            match remote_for(name, remotes, &remote_branches) {
                Some(remote) => {
                    self.vcs.pull(remote, name)?;
                    pulled.push(name.to_string());
                }
                None => {
                    self.reporter
                        .description("Branch not found in remote, skipping pull");
                    without_remote.push(name.to_string());
                }
            }
        }

        Ok((pulled, without_remote))
    }

    fn merge_forward(&mut self, chain: &ResolvedChain) -> Result<Vec<(String, String)>> {
        self.header("Merge dependent branches");

        let mut merged = Vec::new();
        for (source, target) in chain.merge_pairs() {
            self.reporter
                .description(&format!("Merging branch: {} --> {}", source, target));
            self.vcs.switch(target.as_str())?;
            self.vcs.merge(source.as_str())?;
            self.vcs.push()?;
            merged.push((source.to_string(), target.to_string()));
        }

        Ok(merged)
    }

    fn restore_original_branch(&mut self) {
        let Some(original) = self.state.original_branch().map(str::to_string) else {
            return;
        };

        self.reporter
            .description(&format!("Switching back to branch: {}", original));
        if let Err(err) = self.vcs.switch(&original) {
            warn!(branch = %original, error = %err, "failed to restore original branch");
            self.state.mark_restore_failed();
            self.reporter.error(
                &err,
                &format!("failed to switch back to original branch '{}'", original),
            );
        }
    }

    fn describe_summary(&mut self, summary: &RunSummary) {
        self.reporter
            .description(&format!("Chain: {}", summary.chain));
        for (source, target) in &summary.merged {
            self.reporter
                .description(&format!("Merged and pushed: {} --> {}", source, target));
        }
    }

    fn header(&mut self, title: &str) {
        let ordinal = self.state.next_header();
        self.reporter.header(ordinal, title);
    }
}

/// Gate between resolution and any mutating operation.
///
/// The chain must be non-empty and name each branch only once.
pub fn validate_chain(chain: &ResolvedChain) -> Result<()> {
    if chain.is_empty() {
        return Err(ChainError::Validation(
            "no branches were resolved".to_string(),
        ));
    }

    if let Some(duplicate) = chain.duplicates().first() {
        return Err(ChainError::Validation(format!(
            "branch '{}' appears more than once in the resolved chain ({})",
            duplicate, chain
        )));
    }

    Ok(())
}
