//! # Chapter Content
//!
//! Fetching pre-rendered chapter fragments and resolving a reference
//! into the ordered window of chapters to display. Fragments are
//! opaque markup blobs: nothing here parses, sanitizes, or transforms
//! them.

pub mod fetcher;
pub mod window;

pub use fetcher::{ChapterFetcher, ChapterFragment, CHAPTER_PLACEHOLDER};
pub use window::{ChapterWindowEntry, WindowResolver};
