pub mod json_file_repository;

use crate::books::domain::model::BookEntity;

pub const DEFAULT_LIBRARY_NAME: &str = "Library";

// Library is the in-memory store of books, kept in insertion order. It does not enforce
// unique isbns, callers that need uniqueness check find_book_by_isbn before adding.
#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    name: String,
    books: Vec<BookEntity>,
}

impl Library {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            books: vec![],
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn add_book(&mut self, book: BookEntity) {
        self.books.push(book);
    }

    // case-insensitive exact match on title
    pub fn find_book(&self, title: &str) -> Option<&BookEntity> {
        let title = title.to_lowercase();
        self.books.iter().find(|b| b.title.to_lowercase() == title)
    }

    pub fn find_book_by_isbn(&self, isbn: &str) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    pub fn remove_book_by_isbn(&mut self, isbn: &str) -> bool {
        match self.books.iter().position(|b| b.isbn == isbn) {
            Some(ndx) => {
                self.books.remove(ndx);
                true
            }
            None => false,
        }
    }

    pub fn list_books(&self) -> Vec<BookEntity> {
        self.books.clone()
    }

    pub fn total_books(&self) -> usize {
        self.books.len()
    }
}
