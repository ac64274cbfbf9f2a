//! Registry Cache
//!
//! The populated registry state: versions grouped by language in
//! first-seen manifest order, a by-code index, and a lexicographically
//! sorted flat code list for stable iteration. Built once by the
//! registry loader and shared read-only behind an `Arc` afterwards.

use std::collections::HashMap;

use super::info::VersionInfo;

/// Versions of one language, in manifest order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageGroup {
    /// Display language name as carried by the first version seen
    pub language: String,
    /// Versions in this language, in manifest order
    pub versions: Vec<VersionInfo>,
}

/// One selectable version in a grouped listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOption {
    /// Version code
    pub value: String,
    /// "ABBR - Name" display label
    pub label: String,
}

/// One language group in a grouped listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGroup {
    /// Display language name
    pub label: String,
    /// Selectable versions, in manifest order
    pub options: Vec<VersionOption>,
}

/// Immutable snapshot of every known version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryCache {
    groups: Vec<LanguageGroup>,
    by_code: HashMap<String, VersionInfo>,
    codes: Vec<String>,
}

impl RegistryCache {
    /// Build the cache from versions in manifest order.
    ///
    /// Grouping key is the lower-cased language name; group order is
    /// first-seen. A code appearing twice replaces its earlier entry
    /// (last write wins per key), matching the by-code index.
    pub fn from_versions(versions: Vec<VersionInfo>) -> Self {
        let mut cache = Self::default();

        for info in versions {
            let key = info.language.to_lowercase();

            let position = cache
                .groups
                .iter()
                .position(|group| group.language.to_lowercase() == key);
            let position = match position {
                Some(position) => position,
                None => {
                    cache.groups.push(LanguageGroup {
                        language: info.language.clone(),
                        versions: Vec::new(),
                    });
                    cache.groups.len() - 1
                }
            };

            let group = &mut cache.groups[position];
            match group.versions.iter().position(|v| v.code == info.code) {
                Some(existing) => group.versions[existing] = info.clone(),
                None => group.versions.push(info.clone()),
            }

            cache.codes.push(info.code.clone());
            cache.by_code.insert(info.code.clone(), info);
        }

        cache.codes.sort();
        cache
    }

    /// Look up a version by code
    pub fn get(&self, code: &str) -> Option<&VersionInfo> {
        self.by_code.get(code)
    }

    /// All codes, sorted lexicographically
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Language groups in first-seen manifest order
    pub fn groups(&self) -> &[LanguageGroup] {
        &self.groups
    }

    /// Number of distinct versions
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// True when no versions are known
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Grouped listing for version selection.
    ///
    /// Groups with zero options are skipped; the grouping invariant
    /// should make that impossible, but a partially corrupt cache must
    /// not produce an empty selector group.
    pub fn list_grouped(&self) -> Vec<VersionGroup> {
        self.groups
            .iter()
            .filter(|group| !group.versions.is_empty())
            .map(|group| VersionGroup {
                label: group.language.clone(),
                options: group
                    .versions
                    .iter()
                    .map(|info| VersionOption {
                        value: info.code.clone(),
                        label: info.option_label(),
                    })
                    .collect(),
            })
            .collect()
    }
}
