//! `VersionControl` backed by the `git` executable.

use super::VersionControl;
use crate::chain::catalog::{normalize_remote_entry, strip_remote_prefix};
use crate::error::Result;
use crate::git::run_git;
use std::path::PathBuf;
use tracing::debug;

/// Runs git commands inside one repository.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: PathBuf,
    remote: String,
    remotes: Vec<String>,
}

impl GitCli {
    /// Open the repository at `repo_root`, reading its remote names once.
    ///
    /// `remote` is the remote pushed to; it is also preferred for pulls when
    /// several remotes carry the same branch.
    pub fn open(repo_root: impl Into<PathBuf>, remote: impl Into<String>) -> Result<Self> {
        let repo_root = repo_root.into();
        let remote = remote.into();
        let output = run_git(&repo_root, "failed to list remotes", &["remote"])?;
        let mut remotes: Vec<String> = output
            .lines()
            .into_iter()
            .map(|line| line.trim().to_string())
            .collect();
        remotes.sort_by_key(|name| *name != remote);
        debug!(?remotes, "read remotes");
        Ok(Self::with_remotes(repo_root, remote, remotes))
    }

    fn with_remotes(
        repo_root: impl Into<PathBuf>,
        remote: impl Into<String>,
        remotes: Vec<String>,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            remote: remote.into(),
            remotes,
        }
    }

    /// Strip `remotes/<remote>/` or `<remote>/` for any known remote so git
    /// operates on the local branch.
    fn local_name<'a>(&self, branch: &'a str) -> &'a str {
        let branch = branch.strip_prefix("remotes/").unwrap_or(branch);
        strip_remote_prefix(branch, &self.remotes).unwrap_or(branch)
    }
}

impl VersionControl for GitCli {
    fn fetch(&self) -> Result<()> {
        run_git(&self.repo_root, "failed to fetch all branches", &["fetch", "--all"])?;
        Ok(())
    }

    fn switch(&self, branch: &str) -> Result<()> {
        let local = self.local_name(branch);
        run_git(
            &self.repo_root,
            &format!("failed to switch to branch: {}", local),
            &["switch", local],
        )?;
        Ok(())
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        let local = self.local_name(branch);
        run_git(
            &self.repo_root,
            &format!("failed to pull fast-forward: {}", local),
            &["pull", "--ff-only", remote, local],
        )?;
        Ok(())
    }

    fn merge(&self, branch: &str) -> Result<()> {
        let local = self.local_name(branch);
        run_git(
            &self.repo_root,
            &format!("failed to merge branch: {}", local),
            &["merge", "--no-edit", local],
        )?;
        Ok(())
    }

    fn push(&self) -> Result<()> {
        run_git(
            &self.repo_root,
            "failed to push",
            &["push", "-u", &self.remote, "HEAD"],
        )?;
        Ok(())
    }

    fn list_all_branches(&self) -> Result<Vec<String>> {
        let output = run_git(&self.repo_root, "failed to get all branches", &["branch", "-a"])?;
        Ok(output.lines().into_iter().map(str::to_string).collect())
    }

    fn list_remotes(&self) -> Result<Vec<String>> {
        Ok(self.remotes.clone())
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        let output = run_git(
            &self.repo_root,
            "failed to get remote branches",
            &["branch", "-r"],
        )?;
        Ok(output
            .lines()
            .into_iter()
            .filter_map(normalize_remote_entry)
            .collect())
    }

    fn current_branch_name(&self) -> Result<String> {
        let output = run_git(
            &self.repo_root,
            "failed to get current branch name",
            &["branch", "--show-current"],
        )?;
        Ok(output.stdout)
    }
}
