//! Branch chain model: parsing, matching, resolution and remote lookup.
//!
//! Everything in here is pure; the pipeline feeds it listings obtained from
//! a [`crate::vcs::VersionControl`].

pub mod catalog;
pub mod matcher;
pub mod remote;
pub mod resolver;
pub mod spec;

pub use catalog::BranchCatalog;
pub use remote::{has_remote, remote_for};
pub use resolver::{Ambiguity, Resolution, ResolvedBranch, ResolvedChain, Resolver};
pub use spec::{BranchChainSpec, RunOptions};
