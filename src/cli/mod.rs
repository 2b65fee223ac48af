//! CLI argument parsing for chainup.
//!
//! Uses clap derive macros for declarative argument definitions. Chain and
//! option *validation* lives in [`crate::chain::spec`] so that it happens
//! before any git command runs.

use clap::Parser;
use std::path::PathBuf;

/// Chainup: update a chain of dependent branches and merge changes forward.
///
/// Every branch in the chain is fast-forwarded from its remote, then each
/// branch is merged into the next one and pushed:
/// `master/develop/NOVA-8823` merges master into develop and develop into the
/// NOVA-8823 branch. The branch you started on is checked out again at the end.
#[derive(Parser, Debug)]
#[command(name = "chainup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Branch chain, base first, separated by '/'.
    ///
    /// Each segment is a branch name, a ticket key (NOVA-8823) or a ticket
    /// number (8823) matched against `git branch -a`.
    pub chain: String,

    /// Run option. The only recognized value is `--update-only`, which skips
    /// the merge phase.
    #[arg(allow_hyphen_values = true)]
    pub option: Option<String>,

    /// Repository to operate on.
    #[arg(short = 'C', long = "repo", default_value = ".")]
    pub repo: PathBuf,

    /// Config file (default: `.chainup.yaml` at the repository root, if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
