//! Language-Prefix Table
//!
//! Static mapping from version-code prefixes to display language names,
//! used when synthesizing metadata for a version that shipped without a
//! metadata document. Unrecognized prefixes map to "Unknown".

/// Sentinel language for unrecognized prefixes
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

const LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("en", "English"),
    ("eng", "English"),
    ("es", "Spanish"),
    ("ar", "Arabic"),
    ("el", "Greek"),
    ("he", "Hebrew"),
    ("ru", "Russian"),
    ("my", "Burmese"),
];

/// Display language name for a version-code prefix
pub fn language_for_prefix(prefix: &str) -> &'static str {
    LANGUAGE_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == prefix)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_LANGUAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefixes() {
        assert_eq!(language_for_prefix("eng"), "English");
        assert_eq!(language_for_prefix("en"), "English");
        assert_eq!(language_for_prefix("he"), "Hebrew");
    }

    #[test]
    fn test_unknown_prefix_is_sentinel() {
        assert_eq!(language_for_prefix("xx"), UNKNOWN_LANGUAGE);
        assert_eq!(language_for_prefix(""), UNKNOWN_LANGUAGE);
    }
}
