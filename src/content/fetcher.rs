//! Chapter Fragment Fetcher
//!
//! Fetches one pre-rendered chapter fragment per (book, chapter,
//! version). Total over all failures: any non-success status or
//! transport error yields the fixed placeholder fragment, so callers
//! can always treat the result as present.

use crate::client::ContentTransport;
use crate::observability::Logger;

/// Fragment body used when a chapter cannot be fetched
pub const CHAPTER_PLACEHOLDER: &str = r#"<div class="chapter-error">Chapter not available</div>"#;

/// One chapter of one version, as pre-rendered markup.
///
/// Ephemeral: lives only as long as the window displaying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFragment {
    /// Book identifier
    pub book: String,

    /// 1-based chapter number
    pub chapter: u32,

    /// Version the markup belongs to
    pub version_code: String,

    /// Opaque pre-rendered markup, or the placeholder
    pub html: String,
}

impl ChapterFragment {
    /// False when the fragment is the unavailability placeholder
    pub fn is_available(&self) -> bool {
        self.html != CHAPTER_PLACEHOLDER
    }
}

/// Fetcher for pre-rendered chapter fragments
#[derive(Debug, Clone)]
pub struct ChapterFetcher<T: ContentTransport> {
    transport: T,
}

impl<T: ContentTransport> ChapterFetcher<T> {
    /// Create a fetcher over the given transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the fragment for one chapter of one version.
    ///
    /// Never fails: the markup is returned verbatim on success and the
    /// placeholder fragment stands in on any failure.
    pub async fn fetch_chapter(
        &self,
        book: &str,
        chapter: u32,
        version_code: &str,
    ) -> ChapterFragment {
        let path = format!("{}/{}_{}.html", version_code, book, chapter);

        let html = match self.transport.fetch(&path).await {
            Ok(body) => body,
            Err(err) => {
                let detail = err.to_string();
                Logger::warn(
                    "chapter_unavailable",
                    &[("detail", &detail), ("path", &path)],
                );
                CHAPTER_PLACEHOLDER.to_string()
            }
        };

        ChapterFragment {
            book: book.to_string(),
            chapter,
            version_code: version_code.to_string(),
            html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_fragment_is_not_available() {
        let fragment = ChapterFragment {
            book: "John".to_string(),
            chapter: 3,
            version_code: "eng_kjv".to_string(),
            html: CHAPTER_PLACEHOLDER.to_string(),
        };
        assert!(!fragment.is_available());
    }

    #[test]
    fn test_real_fragment_is_available() {
        let fragment = ChapterFragment {
            book: "John".to_string(),
            chapter: 3,
            version_code: "eng_kjv".to_string(),
            html: "<p>For God so loved the world...</p>".to_string(),
        };
        assert!(fragment.is_available());
    }
}
