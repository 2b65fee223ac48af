//! Snapshot of branch names as printed by `git branch -a` / `git branch -r`.

/// Prefix `git branch -a` puts in front of remote-tracking branches.
const REMOTES_PREFIX: &str = "remotes/";

/// Raw branch listing entries, in listing order, plus the repository's remote names.
///
/// Entries keep their raw form (`* main`, `remotes/origin/develop`) so that
/// matching sees exactly what git printed. Symbolic entries such as
/// `remotes/origin/HEAD -> origin/main` and detached-HEAD placeholders are
/// dropped because they do not name a branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchCatalog {
    entries: Vec<String>,
    remotes: Vec<String>,
}

impl BranchCatalog {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(Into::into)
                .filter(|entry| is_branch_entry(entry))
                .collect(),
            remotes: Vec::new(),
        }
    }

    /// Remote names whose `<remote>/` prefix is stripped during normalization.
    pub fn with_remotes<I, S>(mut self, remotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remotes = remotes.into_iter().map(Into::into).collect();
        self
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Local branch name for one of this catalog's entries.
    pub fn branch_name(&self, entry: &str) -> String {
        normalize_branch_name(entry, &self.remotes)
    }
}

fn is_branch_entry(entry: &str) -> bool {
    let name = strip_marker(entry);
    !name.is_empty() && !name.contains(" -> ") && !name.starts_with('(')
}

/// Strip surrounding whitespace and the `*` (current) or `+` (checked out in
/// another worktree) marker.
fn strip_marker(entry: &str) -> &str {
    let trimmed = entry.trim();
    trimmed
        .strip_prefix('*')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed)
        .trim()
}

/// Turn a raw listing entry into a local branch name.
///
/// `  remotes/upstream/feature/x` becomes `feature/x`, `* develop` becomes
/// `develop`. A bare `origin/x` entry is only stripped when `origin` is one of
/// `remotes`; under `remotes/` the first segment is always the remote.
pub fn normalize_branch_name<S: AsRef<str>>(entry: &str, remotes: &[S]) -> String {
    let name = strip_marker(entry);
    let name = match name.strip_prefix(REMOTES_PREFIX) {
        Some(tracking) => strip_remote_prefix(tracking, remotes)
            .or_else(|| tracking.split_once('/').map(|(_, rest)| rest))
            .unwrap_or(tracking),
        None => strip_remote_prefix(name, remotes).unwrap_or(name),
    };
    name.trim().to_string()
}

/// `name` without its leading `<remote>/`, if it starts with one of `remotes`.
pub fn strip_remote_prefix<'a, S: AsRef<str>>(name: &'a str, remotes: &[S]) -> Option<&'a str> {
    remotes.iter().find_map(|remote| {
        name.strip_prefix(remote.as_ref())
            .and_then(|rest| rest.strip_prefix('/'))
    })
}

/// Turn a raw `git branch -r` entry into its remote-qualified form
/// (`origin/develop`), or `None` for symbolic entries.
pub fn normalize_remote_entry(entry: &str) -> Option<String> {
    if !is_branch_entry(entry) {
        return None;
    }
    let name = strip_marker(entry);
    Some(name.strip_prefix(REMOTES_PREFIX).unwrap_or(name).to_string())
}
