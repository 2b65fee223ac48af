//! Run-scoped pipeline state.

use crate::chain::RunOptions;
use std::fmt;
use tracing::debug;

/// Pipeline stages, in the order a successful run visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Fetching,
    Resolving,
    Validating,
    Updating,
    Merging,
    Restoring,
    Done,
    Aborted,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Aborted)
    }

    /// What the pipeline is doing in this stage, for error context.
    pub fn activity(self) -> &'static str {
        match self {
            Stage::Init => "reading the current branch",
            Stage::Fetching => "fetching branches",
            Stage::Resolving => "resolving branch names",
            Stage::Validating => "validating the branch chain",
            Stage::Updating => "updating branches",
            Stage::Merging => "merging dependent branches",
            Stage::Restoring => "restoring the original branch",
            Stage::Done => "finishing",
            Stage::Aborted => "aborting",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::Fetching => "fetching",
            Stage::Resolving => "resolving",
            Stage::Validating => "validating",
            Stage::Updating => "updating",
            Stage::Merging => "merging",
            Stage::Restoring => "restoring",
            Stage::Done => "done",
            Stage::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Everything one run knows about itself. Created per run, never shared.
#[derive(Debug)]
pub struct PipelineRunState {
    stage: Stage,
    failed_stage: Option<Stage>,
    options: RunOptions,
    original_branch: Option<String>,
    headers_shown: usize,
    restore_failed: bool,
}

impl PipelineRunState {
    pub fn new(options: RunOptions) -> Self {
        Self {
            stage: Stage::Init,
            failed_stage: None,
            options,
            original_branch: None,
            headers_shown: 0,
            restore_failed: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The stage that was active when the run aborted.
    pub fn failed_stage(&self) -> Option<Stage> {
        self.failed_stage
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    pub fn original_branch(&self) -> Option<&str> {
        self.original_branch.as_deref()
    }

    pub fn restore_failed(&self) -> bool {
        self.restore_failed
    }

    pub(super) fn enter(&mut self, stage: Stage) {
        debug!(from = %self.stage, to = %stage, "pipeline stage");
        self.stage = stage;
    }

    /// Move to `Aborted`, remembering where the failure happened.
    pub(super) fn abort(&mut self) {
        if self.stage.is_terminal() {
            return;
        }
        self.failed_stage = Some(self.stage);
        self.enter(Stage::Aborted);
    }

    pub(super) fn set_original_branch(&mut self, branch: Option<String>) {
        self.original_branch = branch;
    }

    pub(super) fn mark_restore_failed(&mut self) {
        self.restore_failed = true;
    }

    /// Ordinal for the next section header, starting at 1.
    pub(super) fn next_header(&mut self) -> usize {
        self.headers_shown += 1;
        self.headers_shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_in_init() {
        let state = PipelineRunState::new(RunOptions::default());
        assert_eq!(state.stage(), Stage::Init);
        assert_eq!(state.failed_stage(), None);
        assert_eq!(state.original_branch(), None);
        assert!(!state.restore_failed());
    }

    #[test]
    fn abort_records_failed_stage() {
        let mut state = PipelineRunState::new(RunOptions::default());
        state.enter(Stage::Merging);
        state.abort();
        assert_eq!(state.stage(), Stage::Aborted);
        assert_eq!(state.failed_stage(), Some(Stage::Merging));
    }

    #[test]
    fn abort_after_done_is_ignored() {
        let mut state = PipelineRunState::new(RunOptions::default());
        state.enter(Stage::Done);
        state.abort();
        assert_eq!(state.stage(), Stage::Done);
        assert_eq!(state.failed_stage(), None);
    }

    #[test]
    fn header_ordinals_increment_from_one() {
        let mut state = PipelineRunState::new(RunOptions::default());
        assert_eq!(state.next_header(), 1);
        assert_eq!(state.next_header(), 2);
        assert_eq!(state.next_header(), 3);
    }

    #[test]
    fn terminal_stages() {
        assert!(Stage::Done.is_terminal());
        assert!(Stage::Aborted.is_terminal());
        assert!(!Stage::Restoring.is_terminal());
        assert!(!Stage::Init.is_terminal());
    }
}
