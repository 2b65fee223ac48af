//! Parsing of the chain argument and the run option.

use crate::error::{ChainError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Separator between tokens in the chain argument.
pub const CHAIN_SEPARATOR: char = '/';

/// The only recognized run option.
pub const UPDATE_ONLY_OPTION: &str = "--update-only";

/// One or more word/hyphen segments joined by `/`, at least two segments.
static CHAIN_FORMAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(/[A-Za-z0-9_-]+)+$").expect("Invalid chain format regex")
});

/// Ordered, duplicate-free list of short branch tokens. Position 0 is the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchChainSpec {
    tokens: Vec<String>,
}

impl BranchChainSpec {
    /// Parse the CLI chain argument, e.g. `master/develop/NOVA-8823`.
    pub fn parse(raw: &str) -> Result<Self> {
        if !CHAIN_FORMAT_REGEX.is_match(raw) {
            return Err(ChainError::Usage(format!(
                "invalid chain format '{}', expected at least two branches joined by '{}' \
                 (e.g. 'master/develop/feature-1')",
                raw, CHAIN_SEPARATOR
            )));
        }

        Self::from_tokens(raw.split(CHAIN_SEPARATOR).map(str::to_string).collect())
    }

    /// Build a chain from already-split tokens.
    pub fn from_tokens(tokens: Vec<String>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(ChainError::Usage(
                "branch chain must contain at least one branch".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for token in &tokens {
            if token.trim().is_empty() {
                return Err(ChainError::Usage(
                    "branch chain contains an empty branch name".to_string(),
                ));
            }
            if !seen.insert(token.as_str()) {
                return Err(ChainError::Usage(format!(
                    "branch '{}' appears more than once in the chain",
                    token
                )));
            }
        }

        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

/// User-selected options for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Update every branch but skip the merge phase.
    pub update_only: bool,
}

impl RunOptions {
    /// Interpret the optional second positional argument.
    ///
    /// An empty string is treated as absent.
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        match arg {
            None | Some("") => Ok(Self::default()),
            Some(UPDATE_ONLY_OPTION) => Ok(Self { update_only: true }),
            Some(other) => Err(ChainError::Usage(format!(
                "invalid option provided: {}, do you mean {}?",
                other, UPDATE_ONLY_OPTION
            ))),
        }
    }
}
