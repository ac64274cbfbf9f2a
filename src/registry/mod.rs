//! # Version Registry
//!
//! Discovers version codes from the manifest, loads and normalizes each
//! version's metadata, groups them by language, and caches the result
//! for the process lifetime.
//!
//! ## Invariants
//!
//! - A missing or malformed metadata document never drops a version:
//!   the entry degrades to synthesized defaults and loading continues.
//! - Metadata loads run one at a time in manifest order, so cache
//!   population order is deterministic.
//! - The cache is populated exactly once. Concurrent `load_all` callers
//!   during the initial load await the same in-flight result instead of
//!   issuing duplicate fetches.

pub mod cache;
pub mod info;
pub mod language;

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::{watch, Mutex};

use crate::client::{ContentTransport, TransportError};
use crate::observability::Logger;

pub use cache::{LanguageGroup, RegistryCache, VersionGroup, VersionOption};
pub use info::{TextDirection, VersionInfo};

/// Manifest path relative to the content root
const MANIFEST_PATH: &str = "versions.json";

/// Shape of the `versions.json` manifest document
#[derive(Debug, Deserialize)]
struct ManifestDocument {
    #[serde(default)]
    versions: Vec<String>,
}

/// Registry load state.
///
/// `Loading` holds the receiving half of a completion channel; waiters
/// clone it and await the loader's signal.
enum LoadState {
    Empty,
    Loading(watch::Receiver<bool>),
    Ready(Arc<RegistryCache>),
}

/// What one `load_all` caller does after inspecting the state: lead the
/// load, or wait for the caller already leading it.
enum Flight {
    Lead(watch::Sender<bool>),
    Wait(watch::Receiver<bool>),
}

/// Process-wide version registry with a single-flight lazy cache
pub struct VersionRegistry<T: ContentTransport> {
    transport: T,
    state: Mutex<LoadState>,
}

impl<T: ContentTransport> VersionRegistry<T> {
    /// Create an empty registry over the given transport
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: Mutex::new(LoadState::Empty),
        }
    }

    /// Load every version, populating the cache on first call.
    ///
    /// Idempotent: later calls return the cached snapshot without any
    /// network traffic. Concurrent callers during the initial load all
    /// receive the same snapshot from a single set of fetches. The
    /// returned value is safely ignorable by callers that only wanted
    /// to trigger the load.
    pub async fn load_all(&self) -> Arc<RegistryCache> {
        loop {
            let flight = {
                let mut state = self.state.lock().await;
                match &*state {
                    LoadState::Ready(snapshot) => return Arc::clone(snapshot),
                    LoadState::Loading(receiver) => Flight::Wait(receiver.clone()),
                    LoadState::Empty => {
                        let (sender, receiver) = watch::channel(false);
                        *state = LoadState::Loading(receiver);
                        Flight::Lead(sender)
                    }
                }
            };

            match flight {
                Flight::Lead(sender) => {
                    let snapshot = Arc::new(self.load_uncached().await);
                    *self.state.lock().await = LoadState::Ready(Arc::clone(&snapshot));
                    let _ = sender.send(true);
                    return snapshot;
                }
                Flight::Wait(mut receiver) => {
                    if receiver.changed().await.is_err() {
                        // The loading task was dropped mid-flight;
                        // reclaim the slot so this caller can retry as
                        // the loader.
                        let mut state = self.state.lock().await;
                        if matches!(&*state, LoadState::Loading(_)) {
                            *state = LoadState::Empty;
                        }
                    }
                }
            }
        }
    }

    /// Fetch the version manifest.
    ///
    /// Empty on any failure: "no versions available" is a valid state,
    /// not an error.
    pub async fn load_manifest(&self) -> Vec<String> {
        let body = match self.transport.fetch(MANIFEST_PATH).await {
            Ok(body) => body,
            Err(err) => {
                let detail = err.to_string();
                Logger::warn("version_manifest_unavailable", &[("detail", &detail)]);
                return Vec::new();
            }
        };

        match serde_json::from_str::<ManifestDocument>(&body) {
            Ok(document) => document.versions,
            Err(err) => {
                let detail = err.to_string();
                Logger::warn("version_manifest_malformed", &[("detail", &detail)]);
                Vec::new()
            }
        }
    }

    /// Fetch metadata for one version, degrading to synthesized
    /// defaults when the document is missing or malformed.
    pub async fn load_version_info(&self, code: &str) -> VersionInfo {
        let path = format!("{}/version.json", code);

        match self.transport.fetch(&path).await {
            Ok(body) => match serde_json::from_str::<VersionInfo>(&body) {
                Ok(mut info) => {
                    // The manifest entry is authoritative for the code,
                    // whatever the document says
                    info.code = code.to_string();
                    info
                }
                Err(err) => {
                    let detail = err.to_string();
                    Logger::warn(
                        "version_info_malformed",
                        &[("code", code), ("detail", &detail)],
                    );
                    VersionInfo::fallback(code)
                }
            },
            // A version shipping without version.json is a designed
            // degrade path, not a failure; fall back silently.
            Err(TransportError::Status { .. }) => VersionInfo::fallback(code),
            Err(err) => {
                let detail = err.to_string();
                Logger::warn(
                    "version_info_unavailable",
                    &[("code", code), ("detail", &detail)],
                );
                VersionInfo::fallback(code)
            }
        }
    }

    /// Look up a loaded version by code; `None` until `load_all` has
    /// completed or when the code never appeared in the manifest.
    pub async fn get(&self, code: &str) -> Option<VersionInfo> {
        match &*self.state.lock().await {
            LoadState::Ready(snapshot) => snapshot.get(code).cloned(),
            _ => None,
        }
    }

    /// The cached snapshot, if the initial load has completed
    pub async fn snapshot(&self) -> Option<Arc<RegistryCache>> {
        match &*self.state.lock().await {
            LoadState::Ready(snapshot) => Some(Arc::clone(snapshot)),
            _ => None,
        }
    }

    /// Grouped listing for version selection; empty until loaded
    pub async fn list_grouped(&self) -> Vec<VersionGroup> {
        match self.snapshot().await {
            Some(snapshot) => snapshot.list_grouped(),
            None => Vec::new(),
        }
    }

    async fn load_uncached(&self) -> RegistryCache {
        let codes = self.load_manifest().await;

        // Sequential awaits in manifest order keep population order
        // deterministic
        let mut versions = Vec::with_capacity(codes.len());
        for code in &codes {
            versions.push(self.load_version_info(code).await);
        }

        let snapshot = RegistryCache::from_versions(versions);

        let total = snapshot.len().to_string();
        let languages = snapshot.groups().len().to_string();
        Logger::info(
            "versions_loaded",
            &[("languages", &languages), ("total", &total)],
        );

        snapshot
    }
}
