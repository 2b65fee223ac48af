//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for chainup runs.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote to push to (default: "origin").
    ///
    /// Also the preferred remote to pull from when several remotes carry the
    /// same branch.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Policy when a token matches several distinct branches.
    #[serde(default)]
    pub ambiguous_match: AmbiguousMatch,

    /// Skip the merge phase unless the command line says otherwise.
    #[serde(default)]
    pub update_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            ambiguous_match: AmbiguousMatch::default(),
            update_only: false,
        }
    }
}
