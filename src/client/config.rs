//! Content Endpoint Configuration
//!
//! Where the content-delivery endpoint lives. Everything this crate
//! fetches (manifest, per-version metadata, chapter fragments) is
//! addressed relative to one base URL.

use serde::{Deserialize, Serialize};

/// Content-delivery endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Base URL of the content root (default:
    /// "http://localhost:8000/app/content/bibles")
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/app/content/bibles".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ContentConfig {
    /// Create a config for a specific content root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for a path relative to the content root
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_relative_path() {
        let config = ContentConfig::with_base_url("http://cdn.example.org/bibles");
        assert_eq!(
            config.url_for("versions.json"),
            "http://cdn.example.org/bibles/versions.json"
        );
    }

    #[test]
    fn test_url_for_normalizes_slashes() {
        let config = ContentConfig::with_base_url("http://cdn.example.org/bibles/");
        assert_eq!(
            config.url_for("/eng_kjv/version.json"),
            "http://cdn.example.org/bibles/eng_kjv/version.json"
        );
    }

    #[test]
    fn test_default_base_url_from_empty_document() {
        let config: ContentConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, default_base_url());
    }
}
