//! Newline escaping for line-based corpus storage.
//!
//! Review texts can span several lines. To store one review per physical line,
//! newlines are replaced by the two-character sequence `\n`.
//!
//! Note that a literal backslash is never escaped: a text that already contains
//! the two characters `\` and `n` will not survive a round trip.

/// Literal newline.
const NEWLINE: &str = "\n";
/// Two-character escaped newline (backslash, `n`).
const ESCAPED_NEWLINE: &str = "\\n";

/// Replace every newline with `\n` (two characters).
pub fn escape(text: &str) -> String {
    text.replace(NEWLINE, ESCAPED_NEWLINE)
}

/// Replace every two-character `\n` with a newline.
pub fn unescape(line: &str) -> String {
    line.replace(ESCAPED_NEWLINE, NEWLINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_newlines() {
        assert_eq!(escape("Great food!\nWould return."), "Great food!\\nWould return.");
        assert_eq!(escape("a\n\nb\n"), "a\\n\\nb\\n");
        assert!(!escape("a\nb\nc").contains('\n'));
    }

    #[test]
    fn unescape_newlines() {
        assert_eq!(unescape("Great food!\\nWould return."), "Great food!\nWould return.");
    }

    #[test]
    fn round_trip() {
        let texts = [
            "",
            "no newline",
            "one\nnewline",
            "\n\nleading and trailing\n",
            "unicode: café\nthé",
            "backslash \\ alone, and \\t tab",
            "carriage\r\nreturn",
        ];
        for text in texts.iter() {
            assert_eq!(&unescape(&escape(text)), text);
        }
    }

    #[test]
    fn literal_sequence_is_not_preserved() {
        // known limitation
        let text = "path C:\\new";
        assert_ne!(unescape(&escape(text)), text);
    }
}
