use std::collections::HashMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// BookDetails is the metadata a catalog lookup can fill in for a new book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
}

impl BookDetails {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

/// Looks up title and author for an isbn.
///
/// A lookup never fails: timeouts, transport errors and unusable payloads all come back as
/// `None`, the same as an isbn the catalog does not know.
#[async_trait]
pub trait CatalogLookup: Sync + Send {
    async fn lookup(&self, isbn: &str) -> Option<BookDetails>;
}

// StaticLookup answers from a fixed table, used when running offline.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    entries: HashMap<String, BookDetails>,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(mut self, isbn: &str, title: &str, author: &str) -> Self {
        self.entries.insert(isbn.to_string(), BookDetails::new(title, author));
        self
    }
}

#[async_trait]
impl CatalogLookup for StaticLookup {
    async fn lookup(&self, isbn: &str) -> Option<BookDetails> {
        if isbn.trim().is_empty() {
            return None;
        }
        self.entries.get(isbn).cloned()
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::lookup::{BookDetails, CatalogLookup, StaticLookup};

    #[tokio::test]
    async fn test_should_lookup_static_entries() {
        let lookup = StaticLookup::new().with_book("9780140328721", "Matilda", "Roald Dahl");
        assert_eq!(Some(BookDetails::new("Matilda", "Roald Dahl")), lookup.lookup("9780140328721").await);
        assert_eq!(None, lookup.lookup("0000000000").await);
        assert_eq!(None, lookup.lookup("   ").await);
    }
}
