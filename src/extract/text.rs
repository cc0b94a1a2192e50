//! Whitespace normalization for text pulled out of listing cells

use regex::Regex;
use std::sync::LazyLock;

/// A newline run plus whatever indentation follows it
static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+\s*").expect("blank line pattern is valid"));

/// Normalizes raw cell text into a canonical multi-line string
///
/// Trims leading and trailing whitespace, then collapses every run of one or
/// more newlines (and any whitespace following it) into a single `\n`.
/// Text without such runs comes back trimmed but otherwise unchanged.
///
/// The function is idempotent: normalizing an already normalized string is a
/// no-op.
///
/// # Examples
///
/// ```
/// use aircraft_scrape::extract::normalize;
///
/// assert_eq!(normalize("  0001\n\n   N12AB\n"), "0001\nN12AB");
/// assert_eq!(normalize("plain"), "plain");
/// ```
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    BLANK_LINE_RUN.replace_all(trimmed, "\n").into_owned()
}
