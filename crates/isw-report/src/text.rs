//! Whitespace normalization

/// Canonical form of extracted text.
///
/// Non-breaking spaces become regular spaces, every whitespace run (newlines
/// and tabs included) collapses to one space, and the ends are trimmed.
/// Idempotent.
pub fn normalize(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  hello   world  "), "hello world");
        assert_eq!(normalize("a\n\t b\r\nc"), "a b c");
    }

    #[test]
    fn test_replaces_nbsp() {
        assert_eq!(normalize("hello\u{a0}world"), "hello world");
        assert_eq!(normalize("\u{a0}\u{a0}x\u{a0} \u{a0}y"), "x y");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\u{a0}\t "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "plain",
            "  lead\u{a0}\u{a0}and  trail \n",
            "tabs\tand\nnewlines\r\n",
            "unicode\u{2003}em\u{3000}space",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }
}
