//! Chapter Window Resolver
//!
//! Resolves a reference into the bounded, ordered window of chapters to
//! display: the current chapter plus its neighbors, clipped to the
//! book's bounds, with fragments fetched for one or two versions.
//!
//! The window is recomputed wholesale on every reference or version
//! change; there is no partial reuse of a previous window. The result
//! is safely ignorable, so a caller that navigated away mid-resolution
//! simply discards it.

use std::sync::Arc;

use futures_util::future::{join, join_all};

use crate::client::ContentTransport;
use crate::content::fetcher::{ChapterFetcher, ChapterFragment};
use crate::reference::Reference;
use crate::topology::Topology;

/// One chapter of the resolved window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterWindowEntry {
    /// 1-based chapter number
    pub chapter: u32,

    /// `Book.chapter` composite key
    pub key: String,

    /// Fragments aligned to the requested version slots: primary first,
    /// then the secondary when one was requested
    pub fragments: Vec<ChapterFragment>,
}

/// Resolver for chapter windows over a fixed topology
#[derive(Debug, Clone)]
pub struct WindowResolver<T: ContentTransport> {
    fetcher: ChapterFetcher<T>,
    topology: Arc<Topology>,
}

impl<T: ContentTransport> WindowResolver<T> {
    /// Create a resolver over the given fetcher and topology
    pub fn new(fetcher: ChapterFetcher<T>, topology: Arc<Topology>) -> Self {
        Self { fetcher, topology }
    }

    /// Resolve the window for a reference: chapters `current ± 1`
    /// clipped to `[1, chapter_count]`, ascending.
    ///
    /// An unknown book has chapter count 0 and collapses the window to
    /// empty, as does a current chapter beyond the end of the book.
    /// Per-chapter fetches for the two versions run concurrently; the
    /// result order comes from construction, not completion timing.
    pub async fn resolve_window(
        &self,
        reference: &Reference,
        primary: &str,
        secondary: Option<&str>,
    ) -> Vec<ChapterWindowEntry> {
        let chapter_count = self.topology.lookup(&reference.book).chapter_count();

        let first = reference.chapter.saturating_sub(1).max(1);
        let last = reference.chapter.saturating_add(1).min(chapter_count);
        if first > last {
            return Vec::new();
        }

        let entries = (first..=last)
            .map(|chapter| self.resolve_entry(&reference.book, chapter, primary, secondary));
        join_all(entries).await
    }

    async fn resolve_entry(
        &self,
        book: &str,
        chapter: u32,
        primary: &str,
        secondary: Option<&str>,
    ) -> ChapterWindowEntry {
        let fragments = match secondary {
            Some(secondary_code) => {
                let (primary_fragment, secondary_fragment) = join(
                    self.fetcher.fetch_chapter(book, chapter, primary),
                    self.fetcher.fetch_chapter(book, chapter, secondary_code),
                )
                .await;
                vec![primary_fragment, secondary_fragment]
            }
            None => vec![self.fetcher.fetch_chapter(book, chapter, primary).await],
        };

        ChapterWindowEntry {
            chapter,
            key: format!("{}.{}", book, chapter),
            fragments,
        }
    }
}
