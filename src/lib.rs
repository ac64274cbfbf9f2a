//! inscript - version registry and chapter window resolution for a
//! multi-version scripture reader
//!
//! The presentation layer renders pre-built HTML fragments served by a
//! content-delivery endpoint; this crate owns everything between that
//! endpoint and the view: discovering which versions exist, normalizing
//! their metadata, and resolving a reference into the ordered window of
//! chapter fragments to display.
//!
//! ## Design principles
//!
//! - Availability over completeness: a missing metadata document degrades
//!   to synthesized defaults, a failed chapter fetch degrades to a
//!   placeholder fragment. No fetch failure is fatal.
//! - The registry cache is populated once per process behind a
//!   single-flight guard; concurrent callers await the same load.
//! - Window resolution is recomputed wholesale on every change and is
//!   ordered by chapter number, never by fetch completion.

pub mod client;
pub mod content;
pub mod observability;
pub mod reference;
pub mod registry;
pub mod topology;

pub use client::{ContentConfig, ContentTransport, HttpTransport, TransportError};
pub use content::{ChapterFetcher, ChapterFragment, ChapterWindowEntry, WindowResolver};
pub use reference::Reference;
pub use registry::{RegistryCache, VersionGroup, VersionInfo, VersionOption, VersionRegistry};
pub use topology::{BookEntry, BookLookup, Topology};
