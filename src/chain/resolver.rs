//! Resolution of chain tokens into full branch names.

use super::catalog::BranchCatalog;
use super::matcher::matches;
use super::spec::BranchChainSpec;
use crate::config::AmbiguousMatch;
use crate::error::{ChainError, Result};
use std::collections::HashSet;
use std::fmt;

/// A normalized branch name that existed in the catalog at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedBranch(String);

impl ResolvedBranch {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved branches in chain order, base first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedChain {
    branches: Vec<ResolvedBranch>,
}

impl ResolvedChain {
    pub fn branches(&self) -> &[ResolvedBranch] {
        &self.branches
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Branch names that appear more than once, in order of second appearance.
    pub fn duplicates(&self) -> Vec<&ResolvedBranch> {
        let mut seen = HashSet::new();
        self.branches
            .iter()
            .filter(|branch| !seen.insert(branch.as_str()))
            .collect()
    }

    /// Consecutive `(source, target)` pairs the merge phase walks.
    pub fn merge_pairs(&self) -> impl Iterator<Item = (&ResolvedBranch, &ResolvedBranch)> {
        self.branches.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

impl fmt::Display for ResolvedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.branches.iter().map(ResolvedBranch::as_str).collect();
        f.write_str(&names.join(" -> "))
    }
}

/// A token whose first match was chosen over other distinct matching branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambiguity {
    pub token: String,
    pub chosen: String,
    pub others: Vec<String>,
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub chain: ResolvedChain,
    pub ambiguities: Vec<Ambiguity>,
}

/// Maps chain tokens onto catalog entries.
#[derive(Debug, Clone)]
pub struct Resolver {
    ambiguous_match: AmbiguousMatch,
}

impl Resolver {
    pub fn new(ambiguous_match: AmbiguousMatch) -> Self {
        Self { ambiguous_match }
    }

    /// Resolve every token in chain order.
    ///
    /// Each token takes the first matching catalog entry. Resolution stops at
    /// the first token that matches nothing.
    pub fn resolve(&self, spec: &BranchChainSpec, catalog: &BranchCatalog) -> Result<Resolution> {
        let mut branches = Vec::with_capacity(spec.len());
        let mut ambiguities = Vec::new();

        for token in spec.tokens() {
            let (chosen, others) = self.resolve_token(token, catalog)?;
            if !others.is_empty() {
                ambiguities.push(Ambiguity {
                    token: token.clone(),
                    chosen: chosen.clone(),
                    others,
                });
            }
            branches.push(ResolvedBranch(chosen));
        }

        Ok(Resolution {
            chain: ResolvedChain { branches },
            ambiguities,
        })
    }

    fn resolve_token(&self, token: &str, catalog: &BranchCatalog) -> Result<(String, Vec<String>)> {
        let mut candidates: Vec<String> = Vec::new();
        for entry in catalog.entries() {
            if !matches(entry, token) {
                continue;
            }
            let name = catalog.branch_name(entry);
            if !candidates.contains(&name) {
                candidates.push(name);
            }
        }

        if candidates.is_empty() {
            return Err(ChainError::NoMatch {
                token: token.to_string(),
            });
        }

        if candidates.len() > 1 && self.ambiguous_match == AmbiguousMatch::Reject {
            return Err(ChainError::Ambiguous {
                token: token.to_string(),
                candidates,
            });
        }

        let chosen = candidates.remove(0);
        Ok((chosen, candidates))
    }
}
