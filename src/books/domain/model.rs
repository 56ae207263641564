use crate::core::domain::Identifiable;
use crate::core::library::{BookKind, LibraryError, LibraryResult};

// BookFormat carries what differs between a printed book, an e-book and an audio book.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BookFormat {
    Print,
    Electronic {
        file_format: String,
    },
    Audio {
        duration_minutes: i64,
    },
}

// BookEntity abstracts a single catalog entry identified by its isbn. The isbn is opaque and
// never checked for checksum correctness.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub is_borrowed: bool,
    pub format: BookFormat,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self::build(title, author, isbn, BookFormat::Print)
    }

    pub fn ebook(title: &str, author: &str, isbn: &str, file_format: &str) -> Self {
        Self::build(title, author, isbn, BookFormat::Electronic { file_format: file_format.to_string() })
    }

    pub fn audio_book(title: &str, author: &str, isbn: &str, duration_minutes: i64) -> Self {
        Self::build(title, author, isbn, BookFormat::Audio { duration_minutes })
    }

    fn build(title: &str, author: &str, isbn: &str, format: BookFormat) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            is_borrowed: false,
            format,
        }
    }

    pub fn kind(&self) -> BookKind {
        match self.format {
            BookFormat::Print => BookKind::Book,
            BookFormat::Electronic { .. } => BookKind::EBook,
            BookFormat::Audio { .. } => BookKind::AudioBook,
        }
    }

    pub fn file_format(&self) -> Option<&str> {
        match &self.format {
            BookFormat::Electronic { file_format } => Some(file_format.as_str()),
            _ => None,
        }
    }

    pub fn duration_minutes(&self) -> Option<i64> {
        match self.format {
            BookFormat::Audio { duration_minutes } => Some(duration_minutes),
            _ => None,
        }
    }

    pub fn borrow(&mut self) -> LibraryResult<()> {
        if self.is_borrowed {
            return Err(LibraryError::already_borrowed(
                format!("'{}' is already borrowed.", self.title).as_str()));
        }
        self.is_borrowed = true;
        Ok(())
    }

    pub fn return_book(&mut self) -> LibraryResult<()> {
        if !self.is_borrowed {
            return Err(LibraryError::not_borrowed(
                format!("'{}' was not borrowed.", self.title).as_str()));
        }
        self.is_borrowed = false;
        Ok(())
    }

    pub fn describe(&self) -> String {
        let base = format!("'{}' by {}", self.title, self.author);
        match &self.format {
            BookFormat::Print => base,
            BookFormat::Electronic { file_format } => format!("{} [Format: {}]", base, file_format),
            BookFormat::Audio { duration_minutes } => format!("{} [Duration: {} mins]", base, duration_minutes),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}
