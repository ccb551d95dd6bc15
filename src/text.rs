//! # Text Module
//!
//! Normalization helpers applied to every extracted field.

/// Removes every newline and trims surrounding whitespace.
///
/// ```rust
/// use ddgrs::text::clean;
/// assert_eq!(clean("\n   www.example.com/\n  "), "www.example.com/");
/// ```
pub fn clean(text: &str) -> String {
    text.replace('\n', "").trim().to_string()
}

/// Parses a base-10 integer, falling back to `0` on any failure.
pub fn to_int(text: &str) -> i64 {
    text.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_newlines_and_trims() {
        assert_eq!(clean("\n  Come se fosse\n antani \n"), "Come se fosse antani");
        assert_eq!(clean(""), "");
        assert_eq!(clean("\n\n"), "");
        assert_eq!(clean("a\r\nb"), "a\rb");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let inputs = [
            "",
            "plain",
            "  padded  ",
            "\n lead",
            "trail \n",
            " \n \t mixed \n whitespace \t\n ",
            "inner\n\nnewlines",
            "\u{a0}nbsp\u{a0}",
        ];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int("0"), 0);
        assert_eq!(to_int("16"), 16);
        assert_eq!(to_int("-3"), -3);
        assert_eq!(to_int(""), 0);
        assert_eq!(to_int("abc"), 0);
        assert_eq!(to_int("16px"), 0);
        assert_eq!(to_int(" 16"), 0);
        assert_eq!(to_int("99999999999999999999999"), 0);
    }
}
