//! Shared text-cleaning primitive
//!
//! Every chunker runs its raw text through [`clean_text`] so that chunk
//! fingerprints and downstream length limits are computed over the same
//! representation regardless of source format.

use unicode_normalization::UnicodeNormalization;

/// Clean raw extracted text.
///
/// NFKC-normalizes, strips ASCII control characters (keeping tabs, newlines
/// and carriage returns out of the strip set), collapses runs of spaces and
/// tabs to a single space while preserving newlines, and trims the ends.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    let mut in_blank_run = false;
    for ch in text.nfkc() {
        let stripped = matches!(
            ch,
            '\u{00}'..='\u{08}' | '\u{0b}' | '\u{0c}' | '\u{0e}'..='\u{1f}' | '\u{7f}'
        );
        if stripped {
            continue;
        }
        if ch == ' ' || ch == '\t' {
            if !in_blank_run {
                out.push(' ');
            }
            in_blank_run = true;
        } else {
            in_blank_run = false;
            out.push(ch);
        }
    }
    out.trim().to_string()
}

/// Truncate to at most `max` characters, on a character boundary.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
