//! In-memory `VersionControl` for deterministic pipeline tests.
//!
//! Records every operation in call order, tracks the active branch, and can
//! be told to fail specific operations.

use super::VersionControl;
use crate::chain::catalog::strip_remote_prefix;
use crate::error::{ChainError, Result};
use std::cell::RefCell;

/// An operation performed against the mock, as recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    Fetch,
    Switch(String),
    /// Pull of a branch from a remote: `(remote, branch)`.
    Pull(String, String),
    /// Merge of the given branch into the active one.
    Merge(String),
    /// Push of the active branch.
    Push(String),
    ListAllBranches,
    ListRemotes,
    ListRemoteBranches,
    CurrentBranchName,
}

#[derive(Debug)]
struct MockVcsInner {
    current: String,
    all_branches: Vec<String>,
    remotes: Vec<String>,
    remote_branches: Vec<String>,
    fail_on: Vec<MockOperation>,
    operations: Vec<MockOperation>,
}

/// Mock version control for testing.
#[derive(Debug)]
pub struct MockVcs {
    inner: RefCell<MockVcsInner>,
}

impl MockVcs {
    /// A repository whose active branch is `current`.
    pub fn new(current: &str) -> Self {
        Self {
            inner: RefCell::new(MockVcsInner {
                current: current.to_string(),
                all_branches: Vec::new(),
                remotes: vec!["origin".to_string()],
                remote_branches: Vec::new(),
                fail_on: Vec::new(),
                operations: Vec::new(),
            }),
        }
    }

    /// Raw `git branch -a` entries returned by `list_all_branches`.
    pub fn with_branches(self, branches: &[&str]) -> Self {
        self.inner.borrow_mut().all_branches = branches.iter().map(|b| b.to_string()).collect();
        self
    }

    /// Remote names returned by `list_remotes`; `origin` unless set.
    pub fn with_remotes(self, remotes: &[&str]) -> Self {
        self.inner.borrow_mut().remotes = remotes.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Remote-qualified entries returned by `list_remote_branches`.
    pub fn with_remote_branches(self, branches: &[&str]) -> Self {
        self.inner.borrow_mut().remote_branches =
            branches.iter().map(|b| b.to_string()).collect();
        self
    }

    /// Make the given operation fail when it is performed.
    pub fn fail_on(self, operation: MockOperation) -> Self {
        self.inner.borrow_mut().fail_on.push(operation);
        self
    }

    /// All recorded operations, in call order.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.borrow().operations.clone()
    }

    /// Only the mutating operations (no listings or branch-name reads).
    pub fn mutations(&self) -> Vec<MockOperation> {
        self.operations()
            .into_iter()
            .filter(|op| {
                !matches!(
                    op,
                    MockOperation::ListAllBranches
                        | MockOperation::ListRemotes
                        | MockOperation::ListRemoteBranches
                        | MockOperation::CurrentBranchName
                )
            })
            .collect()
    }

    pub fn current_branch(&self) -> String {
        self.inner.borrow().current.clone()
    }

    fn record(&self, operation: MockOperation) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.operations.push(operation.clone());
        if inner.fail_on.contains(&operation) {
            return Err(ChainError::Git {
                title: format!("simulated failure: {:?}", operation),
                command: "git (mock)".to_string(),
                output: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

impl VersionControl for MockVcs {
    fn fetch(&self) -> Result<()> {
        self.record(MockOperation::Fetch)
    }

    fn switch(&self, branch: &str) -> Result<()> {
        let remotes = self.inner.borrow().remotes.clone();
        let local = strip_remote_prefix(branch, &remotes).unwrap_or(branch);
        self.record(MockOperation::Switch(local.to_string()))?;
        self.inner.borrow_mut().current = local.to_string();
        Ok(())
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(MockOperation::Pull(remote.to_string(), branch.to_string()))
    }

    fn merge(&self, branch: &str) -> Result<()> {
        self.record(MockOperation::Merge(branch.to_string()))
    }

    fn push(&self) -> Result<()> {
        let current = self.current_branch();
        self.record(MockOperation::Push(current))
    }

    fn list_all_branches(&self) -> Result<Vec<String>> {
        self.record(MockOperation::ListAllBranches)?;
        Ok(self.inner.borrow().all_branches.clone())
    }

    fn list_remotes(&self) -> Result<Vec<String>> {
        self.record(MockOperation::ListRemotes)?;
        Ok(self.inner.borrow().remotes.clone())
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        self.record(MockOperation::ListRemoteBranches)?;
        Ok(self.inner.borrow().remote_branches.clone())
    }

    fn current_branch_name(&self) -> Result<String> {
        self.record(MockOperation::CurrentBranchName)?;
        Ok(self.current_branch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_tracks_active_branch() {
        let vcs = MockVcs::new("main");
        vcs.switch("origin/develop").unwrap();
        assert_eq!(vcs.current_branch(), "develop");
        assert_eq!(
            vcs.operations(),
            vec![MockOperation::Switch("develop".to_string())]
        );
    }

    #[test]
    fn failed_switch_keeps_active_branch() {
        let vcs = MockVcs::new("main").fail_on(MockOperation::Switch("develop".to_string()));
        assert!(vcs.switch("develop").is_err());
        assert_eq!(vcs.current_branch(), "main");
    }

    #[test]
    fn push_records_active_branch() {
        let vcs = MockVcs::new("feature-1");
        vcs.push().unwrap();
        assert_eq!(
            vcs.mutations(),
            vec![MockOperation::Push("feature-1".to_string())]
        );
    }
}
