//! Configuration types and defaults for chainup.

use serde::Deserialize;

/// What to do when a chain token matches several distinct branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguousMatch {
    /// Take the first match in listing order and warn about the others (default).
    #[default]
    First,
    /// Fail resolution and list every matching branch.
    Reject,
}

// Default value functions for serde
pub(crate) fn default_remote() -> String {
    "origin".to_string()
}
