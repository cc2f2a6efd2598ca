/// Characters Tesseract is allowed to emit.
///
/// `)` is in the set because the game font's stylized 9 is regularly read as
/// a closing parenthesis; see `normalize_text`.
pub const CHAR_WHITELIST: &str = "0123456789)";

/// Trims OCR output and maps the misread `)` back to `9`.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().replace(')', "9")
}

/// Parses normalized OCR text as a non-negative base-10 integer.
///
/// Returns `None` for empty, garbled, multi-line or out-of-range text.
pub fn parse_value(text: &str) -> Option<u32> {
    text.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text(")45"), "945");
        assert_eq!(normalize_text("  1)) \n\x0c"), "199");
        assert_eq!(normalize_text("123"), "123");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("945"), Some(945));
        assert_eq!(parse_value("0"), Some(0));
        assert_eq!(parse_value("007"), Some(7));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("12\n34"), None);
        assert_eq!(parse_value("1 2"), None);
        assert_eq!(parse_value("-5"), None);
        assert_eq!(parse_value("99999999999"), None);
    }

    #[test]
    fn test_paren_then_parse() {
        assert_eq!(parse_value(&normalize_text(")45")), Some(945));
        assert_eq!(parse_value(&normalize_text(")")), Some(9));
    }
}
