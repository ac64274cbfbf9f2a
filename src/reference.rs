//! Scripture References
//!
//! Parsing of `Book.chapter.verse` reference strings. Parsing never
//! fails: the book token is taken verbatim (validation against the
//! topology is the lookup's job) and missing or non-numeric coordinates
//! default to 1.

/// A parsed scripture coordinate.
///
/// Ephemeral: constructed per navigation action, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Book identifier, verbatim from the input (may be unknown or empty)
    pub book: String,

    /// 1-based chapter number, never zero
    pub chapter: u32,

    /// 1-based verse number, never zero
    pub verse: u32,
}

impl Reference {
    /// Parse a `Book.chapter.verse` string.
    ///
    /// Total over all inputs: malformed references degrade to
    /// `{book: first-token-or-empty, chapter: 1, verse: 1}`.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.splitn(3, '.');
        let book = parts.next().unwrap_or_default().to_string();
        let chapter = parse_coordinate(parts.next());
        let verse = parse_coordinate(parts.next());

        Self { book, chapter, verse }
    }

    /// Render the `Book.chapter` composite key for this reference.
    pub fn osis(&self) -> String {
        format!("{}.{}", self.book, self.chapter)
    }
}

/// Parse one coordinate token, defaulting to 1.
///
/// Zero and negative values are treated as absent: coordinates are
/// 1-based everywhere downstream.
fn parse_coordinate(token: Option<&str>) -> u32 {
    token
        .and_then(|t| t.trim().parse::<u32>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}
