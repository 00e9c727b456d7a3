//! Text utilities for TUI rendering.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Truncates a string to `max_width` terminal columns, ending with `…`.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return ELLIPSIS.to_string();
    }

    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push(ELLIPSIS);
    truncated
}

/// Strips escape bytes and carriage returns and expands tabs to four spaces.
///
/// Applied to pasted text so terminal control sequences never reach the
/// input buffer.
pub fn sanitize_for_display(s: &str) -> Cow<'_, str> {
    if s.contains(['\x1b', '\t', '\r']) {
        Cow::Owned(
            s.replace("\r\n", "\n")
                .replace(['\x1b', '\r'], "")
                .replace('\t', "    "),
        )
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char takes two columns.
        assert_eq!(truncate_with_ellipsis("中文test", 6), "中文t…");
    }

    #[test]
    fn test_sanitize_paste() {
        assert_eq!(
            sanitize_for_display("\x1b[31mgreat\x1b[0m\tproduct\r\n"),
            "[31mgreat[0m    product\n"
        );
    }

    #[test]
    fn test_sanitize_clean_text_is_borrowed() {
        assert!(matches!(
            sanitize_for_display("plain text"),
            Cow::Borrowed("plain text")
        ));
    }
}
