//! Free-text normalization helpers.

/// Trims the value and maps blank or missing input to `None`.
///
/// Used for optional text columns (phone numbers, venues, memos) which must be stored as NULL
/// rather than an empty string.
///
/// # Example
/// ```ignore
/// assert_eq!(non_blank(Some("  010-1234-5678 ")), Some("010-1234-5678".to_string()));
/// assert_eq!(non_blank(Some("   ")), None);
/// assert_eq!(non_blank(None), None);
/// ```
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            non_blank(Some("  010-1234-5678 ")),
            Some("010-1234-5678".to_string())
        );
    }

    #[test]
    fn maps_blank_and_missing_to_none() {
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some(" \t ")), None);
        assert_eq!(non_blank(None), None);
    }
}
