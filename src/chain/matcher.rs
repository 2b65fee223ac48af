//! Matching of a short chain token against a full branch name.
//!
//! Tokens come in two shapes:
//!
//! - numeric (`8824`): compared against the **rightmost** whole-word number in
//!   the branch name, so `feature/NOVA-8823/partial/NOVA-8824/ui` is found by
//!   `8824` but not by its parent ticket `8823`;
//! - anything else (`NOVA-8823`, `develop`): must occur in the branch name as a
//!   whole word.
//!
//! Word boundaries are ASCII non-alphanumeric characters (`/`, `-`, `_`, `.`)
//! or either end of the name, so `88` never matches `8823`.

use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit run regex"));

/// Returns true if `token` identifies `candidate`.
///
/// An empty token never matches.
pub fn matches(candidate: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let candidate = candidate.trim();

    if is_numeric(token) {
        return rightmost_number(candidate) == Some(token);
    }

    contains_word(candidate, token)
}

fn is_numeric(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

/// The last whole-word run of digits in `name`, if any.
pub fn rightmost_number(name: &str) -> Option<&str> {
    DIGIT_RUN_REGEX
        .find_iter(name)
        .filter(|m| is_word_boundary(name, m.start(), m.end()))
        .last()
        .map(|m| m.as_str())
}

/// True if `word` occurs in `haystack` delimited by word boundaries.
fn contains_word(haystack: &str, word: &str) -> bool {
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(word) {
        let start = from + offset;
        let end = start + word.len();
        if is_word_boundary(haystack, start, end) {
            return true;
        }
        // Occurrences may overlap, so resume one character past this start.
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

fn is_word_boundary(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(|c| c.is_ascii_alphanumeric())
        && !after.is_some_and(|c| c.is_ascii_alphanumeric())
}
