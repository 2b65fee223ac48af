//! Version-control capabilities used by the chain pipeline.
//!
//! The pipeline only ever talks to a [`VersionControl`]. Production runs use
//! [`GitCli`], which shells out to `git`; tests use the in-memory
//! [`mock::MockVcs`].

mod git_cli;
#[cfg(test)]
pub mod mock;

pub use git_cli::GitCli;

use crate::error::Result;

/// Atomic, blocking version-control operations against one working tree.
pub trait VersionControl {
    /// Refresh remote-tracking state for all remotes.
    fn fetch(&self) -> Result<()>;

    /// Make `branch` the active branch. Accepts a remote-qualified name and
    /// operates on its local counterpart.
    fn switch(&self, branch: &str) -> Result<()>;

    /// Fast-forward-only update of the active `branch` from `remote`.
    /// Fails when a fast-forward is not possible.
    fn pull(&self, remote: &str, branch: &str) -> Result<()>;

    /// Merge `branch` into the active branch.
    fn merge(&self, branch: &str) -> Result<()>;

    /// Publish the active branch, creating its upstream when absent.
    fn push(&self) -> Result<()>;

    /// Raw `git branch -a` style listing of local and remote branches.
    fn list_all_branches(&self) -> Result<Vec<String>>;

    /// Configured remote names, preferred remote first.
    fn list_remotes(&self) -> Result<Vec<String>>;

    /// Remote branches as remote-qualified names (`origin/develop`).
    fn list_remote_branches(&self) -> Result<Vec<String>>;

    /// Name of the active branch; empty on a detached HEAD.
    fn current_branch_name(&self) -> Result<String>;
}
