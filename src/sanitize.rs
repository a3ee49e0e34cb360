//! Filename sanitization for download destinations.

/// Characters that are unsafe in file names on at least one common filesystem.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maximum length of a sanitized path component, in characters.
const MAX_COMPONENT_LEN: usize = 200;

/// Sanitize a raw title or artist name into a filesystem-safe path component.
///
/// Strips characters that are invalid on common filesystems, replaces spaces
/// with underscores, and truncates the result to 200 characters. Distinct
/// inputs can collide after truncation; that is accepted. The function is
/// total and idempotent. An empty input yields an empty output, which callers
/// must guard against before building a path from it.
///
/// # Examples
///
/// ```rust
/// use soundcloud_backup::sanitize;
///
/// assert_eq!(sanitize("My/Song: Final?"), "MySong_Final");
/// assert_eq!(sanitize("DJ Test"), "DJ_Test");
/// ```
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !INVALID_CHARS.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .take(MAX_COMPONENT_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_invalid_characters() {
        assert_eq!(sanitize("My/Song: Final?"), "MySong_Final");
        assert_eq!(sanitize(r#"a<b>c:d"e/f\g|h?i*j"#), "abcdefghij");
    }

    #[test]
    fn test_replaces_spaces_with_underscores() {
        assert_eq!(sanitize("DJ Test"), "DJ_Test");
        assert_eq!(sanitize("  padded  "), "__padded__");
    }

    #[test]
    fn test_truncates_to_limit() {
        let long = "a".repeat(500);
        assert_eq!(sanitize(&long).chars().count(), 200);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("???"), "");
    }

    #[test]
    fn test_is_idempotent() {
        let inputs = [
            "My/Song: Final?",
            "DJ Test",
            "plain",
            "tr*ick | name",
            "  spaces  everywhere  ",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_contains_no_forbidden_characters() {
        let nasty = r#"<<>>::""//\\||??** and some text"#;
        let cleaned = sanitize(nasty);
        assert!(!cleaned.contains(' '));
        for c in ['<', '>', ':', '"', '/', '\\', '|', '?', '*'] {
            assert!(!cleaned.contains(c), "found {c:?} in {cleaned:?}");
        }
        assert!(cleaned.chars().count() <= 200);
    }
}
