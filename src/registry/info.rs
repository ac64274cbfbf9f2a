//! Version Metadata
//!
//! Per-version metadata as shipped in `{code}/version.json`, plus the
//! synthesized default used when that document is missing or malformed.
//! The fallback trades presentation fidelity (generic name and
//! abbreviation) for availability: a version is never dropped from the
//! registry merely because its metadata document is absent.

use serde::{Deserialize, Serialize};

use super::language::language_for_prefix;

/// Text flow direction of a version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left-to-right
    #[default]
    Ltr,
    /// Right-to-left
    Rtl,
}

/// Metadata for one version (translation/edition)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version code; always matches the manifest entry that produced it
    pub code: String,

    /// Full display name
    pub name: String,

    /// Short display abbreviation
    pub abbreviation: String,

    /// Display language name; groups versions in the registry
    pub language: String,

    /// Text flow direction
    #[serde(default)]
    pub direction: TextDirection,

    /// Preferred font family, "default" when unspecified
    #[serde(default = "default_font")]
    pub font: String,

    /// Book ids this version covers; empty means unknown/all
    #[serde(default)]
    pub books: Vec<String>,
}

fn default_font() -> String {
    "default".to_string()
}

impl VersionInfo {
    /// Synthesize metadata for a version whose document is unavailable.
    ///
    /// Language is derived from the code prefix, abbreviation from the
    /// upper-cased code suffix (or the whole code when there is no
    /// underscore), and the name mirrors the abbreviation.
    pub fn fallback(code: &str) -> Self {
        let mut parts = code.splitn(2, '_');
        let prefix = match parts.next() {
            Some(prefix) if !prefix.is_empty() => prefix,
            _ => "en",
        };
        let abbreviation = match parts.next() {
            Some(suffix) if !suffix.is_empty() => suffix.to_uppercase(),
            _ => code.to_uppercase(),
        };

        Self {
            code: code.to_string(),
            name: abbreviation.clone(),
            abbreviation,
            language: language_for_prefix(prefix).to_string(),
            direction: TextDirection::default(),
            font: default_font(),
            books: Vec::new(),
        }
    }

    /// "ABBR - Name" label used by grouped listings
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.abbreviation, self.name)
    }
}
