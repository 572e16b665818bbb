//! Utility functions for text cleanup and string manipulation.
//!
//! This module provides the helpers used when mapping raw feed entries into
//! items:
//! - HTML tag stripping and entity decoding for summaries
//! - Whitespace normalization for titles
//! - Character-boundary-safe truncation
//! - String truncation for logging

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches HTML/XML tags in feed-provided summary text.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Maximum number of characters kept in a cleaned summary.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Clean a feed-provided summary for display.
///
/// Strips HTML tags, decodes HTML entities, collapses all runs of whitespace
/// (arXiv abstracts contain hard line breaks, news descriptions contain
/// markup), and truncates to `max` characters with a trailing ellipsis.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_summary("<p>Hello &amp; welcome</p>", 200), "Hello & welcome");
/// ```
pub fn clean_summary(raw: &str, max: usize) -> String {
    let stripped = TAG_RE.replace_all(raw, " ");
    let decoded = html_escape::decode_html_entities(&stripped);
    let collapsed = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > max {
        format!("{}...", truncate_chars(&collapsed, max))
    } else {
        collapsed
    }
}

/// Normalize a feed-provided title to a single line.
///
/// arXiv wraps long titles across lines inside the XML; the raw text arrives
/// with embedded newlines and indentation.
pub fn normalize_title(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string to at most `max` characters, respecting char boundaries.
///
/// Works on characters rather than bytes so multibyte text (translated
/// titles, CJK summaries) is never cut mid-codepoint.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and byte
/// count indicator appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head = truncate_chars(s, max);
        format!("{}…(+{} bytes)", head, s.len() - head.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_summary_strips_tags() {
        let raw = "<p>A <b>bold</b> claim about <a href=\"https://x.test\">markets</a>.</p>";
        assert_eq!(clean_summary(raw, 200), "A bold claim about markets .");
    }

    #[test]
    fn test_clean_summary_decodes_entities() {
        assert_eq!(clean_summary("risk &amp; reward &lt;analysis&gt;", 200), "risk & reward <analysis>");
    }

    #[test]
    fn test_clean_summary_collapses_whitespace() {
        let raw = "We study\n  deep hedging\n  under friction.";
        assert_eq!(clean_summary(raw, 200), "We study deep hedging under friction.");
    }

    #[test]
    fn test_clean_summary_truncates_with_ellipsis() {
        let raw = "a ".repeat(300);
        let cleaned = clean_summary(&raw, 10);
        assert!(cleaned.ends_with("..."));
        assert_eq!(cleaned.chars().count(), 13);
    }

    #[test]
    fn test_clean_summary_short_input_untouched() {
        assert_eq!(clean_summary("short", 200), "short");
    }

    #[test]
    fn test_normalize_title_joins_wrapped_lines() {
        let raw = "Reinforcement Learning\n  for Portfolio\n  Optimization";
        assert_eq!(normalize_title(raw), "Reinforcement Learning for Portfolio Optimization");
    }

    #[test]
    fn test_truncate_chars_multibyte_safe() {
        let s = "金融人工智能研究";
        assert_eq!(truncate_chars(s, 4), "金融人工");
        assert_eq!(truncate_chars(s, 100), s);
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }
}
