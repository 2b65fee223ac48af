//! Chainup: keep a chain of dependent git branches up to date.
//!
//! Given a chain such as `master/develop/NOVA-8823`, chainup resolves each
//! short token to a real branch, fast-forwards every branch from its remote,
//! merges each branch into the next one and pushes the result, then switches
//! back to the branch it started on.

pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod pipeline;
pub mod reporter;
pub mod vcs;

#[cfg(test)]
mod test_support;
