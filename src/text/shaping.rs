// ============================================================================
// Text Shaping
// Truncation, masking, width measurement, and tag stripping
// ============================================================================

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches one HTML tag: anything from `<` to the next `>`.
    static ref HTML_TAG: Regex = Regex::new("<[^>]*>").expect("valid pattern");
}

/// Truncate to at most `max_chars` characters, appending `ellipsis` when
/// anything was cut.
///
/// Lengths count characters, not bytes, so multibyte text never gets split
/// mid-character. The ellipsis is appended on top of the limit.
///
/// # Example
/// ```ignore
/// assert_eq!(truncate("hello world", 5, "..."), "hello...");
/// ```
pub fn truncate(text: &str, max_chars: usize, ellipsis: &str) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{}{}", kept, ellipsis)
}

/// Mask the middle of a string, keeping `start_visible` characters at the
/// front and `end_visible` at the back.
///
/// Strings short enough to have no middle are returned unchanged.
///
/// # Example
/// ```ignore
/// assert_eq!(mask("13812345678", 3, 4, '*'), "138****5678");
/// ```
pub fn mask(text: &str, start_visible: usize, end_visible: usize, mask_char: char) -> String {
    let length = text.chars().count();
    if length <= start_visible.saturating_add(end_visible) {
        return text.to_string();
    }

    let mut masked = String::with_capacity(text.len());
    for (position, ch) in text.chars().enumerate() {
        if position < start_visible || position >= length - end_visible {
            masked.push(ch);
        } else {
            masked.push(mask_char);
        }
    }
    masked
}

/// Number of characters in `text`.
///
/// This counts Unicode scalar values, so one CJK character or emoji counts
/// as one.
#[inline]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Approximate display columns: ASCII characters count 1, everything else
/// counts 2.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|ch| if ch.is_ascii() { 1 } else { 2 }).sum()
}

/// Remove HTML tags, keeping the text between them.
///
/// This is tag removal, not sanitization: entities are left as-is and the
/// result is not safe to re-embed as markup.
pub fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

/// Whether `text` is empty or contains only whitespace.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello world", 5, "..."), "hello...");
        assert_eq!(truncate("hello", 5, "..."), "hello");
        assert_eq!(truncate("hi", 5, "..."), "hi");
        assert_eq!(truncate("", 3, "..."), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("你好世界啊", 2, "…"), "你好…");
        assert_eq!(truncate("你好", 2, "…"), "你好");
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask("13812345678", 3, 4, '*'), "138****5678");
    }

    #[test]
    fn test_mask_short_strings_unchanged() {
        assert_eq!(mask("1234567", 3, 4, '*'), "1234567");
        assert_eq!(mask("ab", 3, 4, '*'), "ab");
        assert_eq!(mask("", 3, 4, '*'), "");
    }

    #[test]
    fn test_mask_edges_only() {
        assert_eq!(mask("secret", 0, 0, '#'), "######");
        assert_eq!(mask("secret", 1, 1, '#'), "s####t");
    }

    #[test]
    fn test_char_count_and_display_width() {
        assert_eq!(char_count("hello"), 5);
        assert_eq!(char_count("你好"), 2);
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("a你b"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>hello <b>world</b></p>"), "hello world");
        assert_eq!(strip_html("no tags"), "no tags");
        assert_eq!(strip_html("<br/>"), "");
        assert_eq!(strip_html("a < b > c"), "a  c");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" x "));
    }
}
