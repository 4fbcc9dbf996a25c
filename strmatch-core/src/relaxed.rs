//! Relaxed, symbol-insensitive matching
//!
//! Both sides are reduced to their lowercase word characters before an
//! equality check, so `"Hello, World!"` and `"hello world"` compare equal.
//! A word character is any letter, any numeric character (`²` and `½`
//! included) or `_`. Combining marks are not word characters.

use std::sync::OnceLock;

use regex::Regex;

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{L}\p{N}_]+").expect("non-word pattern is valid"))
}

/// Remove every non-word character (whitespace included) and lowercase.
pub fn relaxed_normalize(text: &str) -> String {
    non_word().replace_all(text, "").to_lowercase()
}

/// Relaxed equality of a response and a single target.
pub fn relaxed_match(value: &str, target: &str) -> bool {
    relaxed_normalize(value) == relaxed_normalize(target)
}

/// Return the first target that relaxed-matches `value`, if any.
pub fn relaxed_match_any<'a, I>(value: &str, targets: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let value = relaxed_normalize(value);
    targets
        .into_iter()
        .find(|target| relaxed_normalize(target) == value)
}
