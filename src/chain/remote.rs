//! Remote counterpart lookup.

/// Returns true if `branch` has a counterpart in `remote_branches`.
///
/// Entries are expected in `git branch -r` form (`origin/feature/x`); a match
/// is either the exact name or an entry ending in `/` + `branch`.
pub fn has_remote<S: AsRef<str>>(branch: &str, remote_branches: &[S]) -> bool {
    let qualified_suffix = format!("/{}", branch);
    remote_branches.iter().any(|entry| {
        let entry = entry.as_ref();
        entry == branch || entry.ends_with(&qualified_suffix)
    })
}

/// The remote to pull `branch` from, if it has a counterpart at all.
///
/// `remotes` is in preference order: the first remote holding
/// `<remote>/<branch>` wins, otherwise the first remote is used for a
/// counterpart that `has_remote` found under some other qualifier.
pub fn remote_for<'r, S: AsRef<str>>(
    branch: &str,
    remotes: &'r [String],
    remote_branches: &[S],
) -> Option<&'r str> {
    if !has_remote(branch, remote_branches) {
        return None;
    }
    remotes
        .iter()
        .find(|remote| {
            let qualified = format!("{}/{}", remote, branch);
            remote_branches.iter().any(|entry| entry.as_ref() == qualified)
        })
        .or_else(|| remotes.first())
        .map(String::as_str)
}
