//! Shared text normalization helpers for tree content and toppers.

use unicode_segmentation::UnicodeSegmentation;

/// Return `true` for characters removed before layout.
///
/// Matches the JavaScript `\s` class: Unicode `White_Space` minus NEL
/// (U+0085), plus the byte-order mark.
pub fn is_layout_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

/// Remove every layout whitespace character from `content`.
pub fn strip_whitespace(content: &str) -> String {
    content
        .chars()
        .filter(|ch| !is_layout_whitespace(*ch))
        .collect()
}

/// Keep at most `max_chars` characters of `value`.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &value[..byte_offset],
        None => value,
    }
}

/// First extended grapheme cluster of `value`, or `""` when empty.
///
/// Keeps multi-codepoint emoji (ZWJ sequences, flags, skin tones) intact.
pub fn first_grapheme(value: &str) -> &str {
    value.graphemes(true).next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_whitespace_removes_unicode_and_bom() {
        assert_eq!(strip_whitespace("A B\nC"), "ABC");
        assert_eq!(strip_whitespace("\t圣\u{3000}诞\u{feff}\r\n"), "圣诞");
        assert_eq!(strip_whitespace("  \n\t "), "");
    }

    #[test]
    fn layout_whitespace_matches_javascript_class() {
        for ch in ['\u{a0}', '\u{1680}', '\u{2028}', '\u{2029}', '\u{202f}', '\u{feff}'] {
            assert!(is_layout_whitespace(ch), "{:?} should be stripped", ch);
        }
        assert!(!is_layout_whitespace('\u{85}'));
        assert!(!is_layout_whitespace('\u{200b}'));
        assert_eq!(strip_whitespace("A\u{85}B"), "A\u{85}B");
    }

    #[test]
    fn truncate_chars_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("圣诞快乐", 2), "圣诞");
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn first_grapheme_keeps_emoji_sequences_whole() {
        assert_eq!(first_grapheme("⭐🎄"), "⭐");
        assert_eq!(first_grapheme("👨‍👩‍👧 family"), "👨‍👩‍👧");
        assert_eq!(first_grapheme("🇨🇳🇺🇸"), "🇨🇳");
        assert_eq!(first_grapheme(""), "");
    }
}
