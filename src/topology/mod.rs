//! # Book Topology
//!
//! Read-only accessor over the external book/chapter topology table:
//! canonical book order, localized display names, and chapter counts.
//! The table itself ships with the content bundle; this module only
//! deserializes and indexes it.
//!
//! Canonical ordering is authoritative. The Old/New Testament partition
//! is derived purely from list position (first 39 books vs the rest),
//! never from inspecting book identifiers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Number of leading books in the Old Testament partition
pub const OLD_TESTAMENT_BOOKS: usize = 39;

/// One book in the canonical topology table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookEntry {
    /// Canonical book identifier (e.g. "John")
    pub id: String,

    /// Localized display names keyed by language code; an "eng" list is
    /// expected but its absence degrades to the id
    pub names: HashMap<String, Vec<String>>,

    /// Per-chapter verse counts; the chapter count is the length
    pub chapters: Vec<u32>,
}

impl BookEntry {
    /// English display name, falling back to the id when the table has
    /// no "eng" entry.
    pub fn display_name(&self) -> &str {
        self.names
            .get("eng")
            .and_then(|names| names.first())
            .map(String::as_str)
            .unwrap_or(&self.id)
    }

    /// Number of chapters in this book
    pub fn chapter_count(&self) -> u32 {
        self.chapters.len() as u32
    }
}

/// Result of a topology lookup.
///
/// Unknown books resolve to a sentinel with display name "Unknown" and
/// chapter count 0, so downstream components render gracefully instead
/// of failing. A zero chapter count collapses any chapter window to
/// empty.
#[derive(Debug, Clone, Copy)]
pub enum BookLookup<'a> {
    /// The book exists in the canonical table
    Known(&'a BookEntry),
    /// The book is absent from the table
    Unknown,
}

impl BookLookup<'_> {
    /// Display name for rendering
    pub fn display_name(&self) -> &str {
        match self {
            Self::Known(entry) => entry.display_name(),
            Self::Unknown => "Unknown",
        }
    }

    /// Chapter count; zero for unknown books
    pub fn chapter_count(&self) -> u32 {
        match self {
            Self::Known(entry) => entry.chapter_count(),
            Self::Unknown => 0,
        }
    }
}

/// The canonical topology table, indexed by book id.
///
/// Immutable after construction and shared read-only by all consumers.
#[derive(Debug, Clone)]
pub struct Topology {
    books: Vec<BookEntry>,
    index: HashMap<String, usize>,
}

impl Topology {
    /// Build a topology from entries already in canonical order.
    pub fn new(books: Vec<BookEntry>) -> Self {
        let index = books
            .iter()
            .enumerate()
            .map(|(position, book)| (book.id.clone(), position))
            .collect();

        Self { books, index }
    }

    /// Deserialize the topology table document.
    ///
    /// The wire format is a JSON array of entries: ordering carries the
    /// canonical book order, so an object keyed by id would not do.
    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        let books: Vec<BookEntry> = serde_json::from_str(document)?;
        Ok(Self::new(books))
    }

    /// Look up a book by id, yielding the Unknown sentinel when absent.
    pub fn lookup(&self, book_id: &str) -> BookLookup<'_> {
        match self.index.get(book_id) {
            Some(&position) => BookLookup::Known(&self.books[position]),
            None => BookLookup::Unknown,
        }
    }

    /// All book ids in canonical order
    pub fn ordered_book_ids(&self) -> impl Iterator<Item = &str> {
        self.books.iter().map(|book| book.id.as_str())
    }

    /// Partition the canonical list into (Old Testament, New Testament)
    /// by position: the first 39 entries and the rest.
    pub fn testaments(&self) -> (&[BookEntry], &[BookEntry]) {
        let split = OLD_TESTAMENT_BOOKS.min(self.books.len());
        self.books.split_at(split)
    }

    /// Number of books in the table
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when the table holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_topology() -> Topology {
        let mut names = HashMap::new();
        names.insert("eng".to_string(), vec!["John".to_string()]);
        let john = BookEntry {
            id: "John".to_string(),
            names,
            chapters: vec![51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25],
        };

        let mut names = HashMap::new();
        names.insert("eng".to_string(), vec!["Jude".to_string()]);
        let jude = BookEntry {
            id: "Jude".to_string(),
            names,
            chapters: vec![25],
        };

        Topology::new(vec![john, jude])
    }

    #[test]
    fn test_lookup_known_book() {
        let topology = sample_topology();
        let lookup = topology.lookup("John");
        assert_eq!(lookup.display_name(), "John");
        assert_eq!(lookup.chapter_count(), 21);
    }

    #[test]
    fn test_lookup_unknown_book_is_sentinel() {
        let topology = sample_topology();
        let lookup = topology.lookup("Atlantis");
        assert_eq!(lookup.display_name(), "Unknown");
        assert_eq!(lookup.chapter_count(), 0);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let entry = BookEntry {
            id: "Obad".to_string(),
            names: HashMap::new(),
            chapters: vec![21],
        };
        assert_eq!(entry.display_name(), "Obad");
    }

    #[test]
    fn test_ordered_book_ids_preserve_canonical_order() {
        let topology = sample_topology();
        let ids: Vec<&str> = topology.ordered_book_ids().collect();
        assert_eq!(ids, vec!["John", "Jude"]);
    }

    #[test]
    fn test_testament_split_is_positional() {
        let books: Vec<BookEntry> = (0..66)
            .map(|n| BookEntry {
                id: format!("B{}", n),
                names: HashMap::new(),
                chapters: vec![1],
            })
            .collect();
        let topology = Topology::new(books);

        let (old, new) = topology.testaments();
        assert_eq!(old.len(), 39);
        assert_eq!(new.len(), 27);
        assert_eq!(old[0].id, "B0");
        assert_eq!(new[0].id, "B39");
    }

    #[test]
    fn test_testament_split_with_short_table() {
        let topology = sample_topology();
        let (old, new) = topology.testaments();
        assert_eq!(old.len(), 2);
        assert!(new.is_empty());
    }

    #[test]
    fn test_from_json_round() {
        let document = r#"[
            {"id": "Gen", "names": {"eng": ["Genesis"]}, "chapters": [31, 25, 24]},
            {"id": "Exod", "names": {"eng": ["Exodus"]}, "chapters": [22]}
        ]"#;
        let topology = Topology::from_json(document).unwrap();
        assert_eq!(topology.len(), 2);
        assert_eq!(topology.lookup("Gen").chapter_count(), 3);
        assert_eq!(topology.lookup("Gen").display_name(), "Genesis");
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        assert!(Topology::from_json("{\"Gen\": 31}").is_err());
        assert!(Topology::from_json("not json").is_err());
    }
}
