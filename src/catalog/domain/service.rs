use std::path::PathBuf;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::Library;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::lookup::CatalogLookup;

pub struct CatalogServiceImpl {
    data_file: PathBuf,
    library: Arc<Mutex<Library>>,
    lookup: Arc<dyn CatalogLookup>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, library: Arc<Mutex<Library>>,
               lookup: Arc<dyn CatalogLookup>) -> Self {
        Self {
            data_file: config.data_file.clone(),
            library,
            lookup,
        }
    }
}

fn validate_isbn(isbn: &str) -> LibraryResult<&str> {
    let isbn = isbn.trim();
    if isbn.is_empty() {
        return Err(LibraryError::validation("ISBN cannot be empty", Some("400".to_string())));
    }
    Ok(isbn)
}

fn already_exists(isbn: &str) -> LibraryError {
    LibraryError::duplicate_key(format!("Book with ISBN {} already exists in library", isbn).as_str())
}

fn not_in_library(isbn: &str) -> LibraryError {
    LibraryError::not_found(format!("Book with ISBN {} not found in library", isbn).as_str())
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn library_name(&self) -> String {
        self.library.lock().await.name().to_string()
    }

    async fn total_books(&self) -> usize {
        self.library.lock().await.total_books()
    }

    async fn list_books(&self) -> Vec<BookDto> {
        self.library.lock().await.list_books().iter().map(BookDto::from).collect()
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        let isbn = validate_isbn(isbn)?;
        self.library.lock().await.find_book_by_isbn(isbn)
            .map(BookDto::from)
            .ok_or_else(|| not_in_library(isbn))
    }

    async fn add_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        let isbn = validate_isbn(isbn)?;
        if self.library.lock().await.find_book_by_isbn(isbn).is_some() {
            return Err(already_exists(isbn));
        }

        // the lock is not held while waiting on the catalog
        let details = self.lookup.lookup(isbn).await.ok_or_else(|| LibraryError::not_found(
            format!("Book with ISBN {} not found in Open Library", isbn).as_str()))?;

        let mut library = self.library.lock().await;
        if library.find_book_by_isbn(isbn).is_some() {
            return Err(already_exists(isbn));
        }
        let book = BookEntity::new(details.title.as_str(), details.author.as_str(), isbn);
        library.add_book(book.clone());
        library.persist(&self.data_file);
        info!(isbn = %book.id(), title = %book.title, "added book");
        Ok(BookDto::from(&book))
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        let isbn = validate_isbn(isbn)?;
        let mut library = self.library.lock().await;
        if !library.remove_book_by_isbn(isbn) {
            return Err(not_in_library(isbn));
        }
        library.persist(&self.data_file);
        info!(isbn, "removed book");
        Ok(())
    }
}
