//! Total classifiers over raw user input.
//!
//! These are deliberately literal checks. They do not parse SQL or HTML; they
//! recognise the handful of fixed shapes the lab teaches with, so every
//! verdict can be explained by pointing at the input.

use std::sync::LazyLock;

use regex::Regex;

use crate::escaped::SafeHtml;

/// The delimiter whose unbalanced use breaks the simulated query.
const QUOTE: char = '\'';

/// `' OR '1'='1`, case-insensitive, optional whitespace around `OR` and `=`.
static TAUTOLOGY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)'\s*or\s*'1'\s*=\s*'1").expect("tautology pattern is a valid regex")
});

/// Lowercase substrings that mark script-capable HTML.
const EXECUTABLE_MARKERS: &[&str] = &["<script", "onerror", "onload", "onclick"];

/// Returns `true` if `s` contains an odd number of single quotes.
///
/// An unbalanced quote leaves the concatenated query with an unterminated
/// string literal, which the naive backend reports as a syntax error.
///
/// # Examples
///
/// ```
/// use injection_lab::is_malformed;
///
/// assert!(is_malformed("O'Brien"));
/// assert!(!is_malformed("'quoted'"));
/// assert!(!is_malformed(""));
/// ```
pub fn is_malformed(s: &str) -> bool {
    s.chars().filter(|&c| c == QUOTE).count() % 2 == 1
}

/// Returns `true` if either input carries the always-true tautology payload.
///
/// # Examples
///
/// ```
/// use injection_lab::is_attack_pattern;
///
/// assert!(is_attack_pattern("' OR '1'='1", ""));
/// assert!(is_attack_pattern("alice", "'or'1' = '1"));
/// assert!(!is_attack_pattern("alice", "password123"));
/// ```
pub fn is_attack_pattern(a: &str, b: &str) -> bool {
    TAUTOLOGY.is_match(a) || TAUTOLOGY.is_match(b)
}

/// Escapes the five HTML-reserved characters to named entities.
///
/// `&` is replaced first so the entities introduced for the other characters
/// are not escaped again. Applying this twice double-escapes.
///
/// # Examples
///
/// ```
/// use injection_lab::neutralize;
///
/// assert_eq!(
///     neutralize(r#"<a href="x">Tom & 'Jerry'</a>"#).as_str(),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
/// );
/// ```
pub fn neutralize(s: &str) -> SafeHtml {
    let escaped = s
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;");
    SafeHtml::new_unchecked(escaped)
}

/// Returns `true` if `s` contains a script tag opener or an inline event
/// handler attribute, ignoring case.
///
/// # Examples
///
/// ```
/// use injection_lab::contains_executable_marker;
///
/// assert!(contains_executable_marker("<SCRIPT>alert(1)</SCRIPT>"));
/// assert!(contains_executable_marker("<img src=x OnError=alert(1)>"));
/// assert!(!contains_executable_marker("<b>bold</b>"));
/// ```
pub fn contains_executable_marker(s: &str) -> bool {
    let lowered = s.to_lowercase();
    EXECUTABLE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}
