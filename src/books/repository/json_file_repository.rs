use std::fs;
use std::path::Path;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};
use crate::books::domain::model::{BookEntity, BookFormat};
use crate::books::repository::{Library, DEFAULT_LIBRARY_NAME};
use crate::core::library::{BookKind, LibraryError, LibraryResult};
use crate::utils::json::{parse_bool_field, parse_number_field, parse_string_field};

// LibraryDocument is the on-disk shape of a library: {"name": ..., "books": [...]}
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryDocument {
    pub name: String,
    pub books: Vec<BookEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum BookEntry {
    Book {
        title: String,
        author: String,
        isbn: String,
        is_borrowed: bool,
    },
    EBook {
        title: String,
        author: String,
        isbn: String,
        is_borrowed: bool,
        file_format: String,
    },
    AudioBook {
        title: String,
        author: String,
        isbn: String,
        is_borrowed: bool,
        duration: i64,
    },
}

impl From<&BookEntity> for BookEntry {
    fn from(other: &BookEntity) -> Self {
        let title = other.title.to_string();
        let author = other.author.to_string();
        let isbn = other.isbn.to_string();
        let is_borrowed = other.is_borrowed;
        match &other.format {
            BookFormat::Print => BookEntry::Book { title, author, isbn, is_borrowed },
            BookFormat::Electronic { file_format } => {
                BookEntry::EBook { title, author, isbn, is_borrowed, file_format: file_format.to_string() }
            }
            BookFormat::Audio { duration_minutes } => {
                BookEntry::AudioBook { title, author, isbn, is_borrowed, duration: *duration_minutes }
            }
        }
    }
}

impl Library {
    pub fn to_document(&self) -> LibraryDocument {
        LibraryDocument {
            name: self.name.to_string(),
            books: self.books.iter().map(BookEntry::from).collect(),
        }
    }

    // Rebuilds a library from a stored document. Entries that cannot be read are skipped,
    // only a document that is not an object with a books list is rejected as a whole.
    pub fn from_document(value: &Value) -> LibraryResult<Library> {
        let map = value.as_object()
            .ok_or_else(|| LibraryError::serialization("library document is not an object"))?;
        let name = match map.get("name") {
            Some(Value::String(name)) => name.as_str(),
            _ => DEFAULT_LIBRARY_NAME,
        };
        let mut library = Library::new(name);
        match map.get("books") {
            None | Some(Value::Null) => {}
            Some(Value::Array(entries)) => {
                for entry in entries {
                    match map_to_book(entry) {
                        Ok(book) => library.add_book(book),
                        Err(err) => warn!(error = %err, "skipping unreadable book entry"),
                    }
                }
            }
            Some(_) => {
                return Err(LibraryError::serialization("library document books is not a list"));
            }
        }
        Ok(library)
    }

    pub fn save_to_file(&self, path: &Path) -> LibraryResult<()> {
        let json = serde_json::to_string_pretty(&self.to_document())?;
        fs::write(path, json)?;
        Ok(())
    }

    // Writes the library and keeps going if the write fails; the in-memory library stays
    // authoritative for the rest of the process.
    pub fn persist(&self, path: &Path) {
        if let Err(err) = self.save_to_file(path) {
            warn!(path = %path.display(), error = %err, "failed to persist library");
        }
    }

    // Loads a library, falling back to an empty one named default_name when the file is
    // missing or cannot be read as a library document.
    pub fn load_from_file(path: &Path, default_name: &str) -> Library {
        if !path.exists() {
            info!(path = %path.display(), "no library file, starting empty");
            return Library::new(default_name);
        }
        match read_document(path).and_then(|value| Library::from_document(&value)) {
            Ok(library) => {
                info!(path = %path.display(), books = library.total_books(), "loaded library");
                library
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unreadable library file, starting empty");
                Library::new(default_name)
            }
        }
    }
}

fn read_document(path: &Path) -> LibraryResult<Value> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(contents.as_str())?)
}

fn map_to_book(entry: &Value) -> LibraryResult<BookEntity> {
    let map: &Map<String, Value> = entry.as_object()
        .ok_or_else(|| LibraryError::serialization(format!("book entry is not an object {}", entry).as_str()))?;
    let kind = match map.get("kind") {
        Some(Value::String(kind)) => BookKind::from(kind.as_str()),
        _ => BookKind::Book,
    };
    let title = parse_string_field("title", map)?;
    let author = parse_string_field("author", map)?;
    let isbn = parse_string_field("isbn", map)?;
    let mut book = match kind {
        BookKind::Book => BookEntity::new(&title, &author, &isbn),
        BookKind::EBook => {
            let file_format = parse_string_field("file_format", map)?;
            BookEntity::ebook(&title, &author, &isbn, &file_format)
        }
        BookKind::AudioBook => {
            let duration = parse_number_field("duration", map)?;
            BookEntity::audio_book(&title, &author, &isbn, duration)
        }
    };
    book.is_borrowed = parse_bool_field("is_borrowed", map)?;
    Ok(book)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use serde_json::json;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::Library;

    fn mixed_library() -> Library {
        let mut library = Library::new("Şehir Kütüphanesi");
        library.add_book(BookEntity::new("The Lord of the Rings", "J.R.R. Tolkien", "978-0618640157"));
        let mut ebook = BookEntity::ebook("1984", "George Orwell", "978-0451524935", "EPUB");
        ebook.borrow().expect("should borrow");
        library.add_book(ebook);
        library.add_book(BookEntity::audio_book("Becoming", "Michelle Obama", "978-1524763138", 780));
        library.add_book(BookEntity::new("Dune", "Frank Herbert", "978-0441013593"));
        library
    }

    #[test]
    fn test_should_serialize_document_shape() {
        let value = serde_json::to_value(mixed_library().to_document()).expect("should serialize");
        assert_eq!(json!({
            "name": "Şehir Kütüphanesi",
            "books": [
                {"kind": "Book", "title": "The Lord of the Rings", "author": "J.R.R. Tolkien",
                 "isbn": "978-0618640157", "is_borrowed": false},
                {"kind": "EBook", "title": "1984", "author": "George Orwell",
                 "isbn": "978-0451524935", "is_borrowed": true, "file_format": "EPUB"},
                {"kind": "AudioBook", "title": "Becoming", "author": "Michelle Obama",
                 "isbn": "978-1524763138", "is_borrowed": false, "duration": 780},
                {"kind": "Book", "title": "Dune", "author": "Frank Herbert",
                 "isbn": "978-0441013593", "is_borrowed": false},
            ]
        }), value);
    }

    #[test]
    fn test_should_round_trip_document() {
        let library = mixed_library();
        let value = serde_json::to_value(library.to_document()).expect("should serialize");
        let loaded = Library::from_document(&value).expect("should deserialize");
        assert_eq!(library, loaded);
    }

    #[test]
    fn test_should_round_trip_file() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("library_data.json");
        let library = mixed_library();
        library.save_to_file(&path).expect("should save");

        let contents = fs::read_to_string(&path).expect("should read");
        assert!(contents.contains("Şehir Kütüphanesi"));
        assert!(contents.contains("\n  \"books\""));

        let loaded = Library::load_from_file(&path, "Other");
        assert_eq!(library, loaded);
    }

    #[test]
    fn test_should_apply_defaults_when_reading() {
        let value = json!({
            "books": [
                {"title": "No Kind", "author": "A", "isbn": "1"},
                {"kind": "Pamphlet", "title": "Unknown Kind", "isbn": "2", "is_borrowed": true},
                {"kind": "EBook", "title": "No Format", "author": "B", "isbn": "3"},
                {"kind": "AudioBook", "title": "No Duration", "author": "C", "isbn": "4"},
            ]
        });
        let library = Library::from_document(&value).expect("should deserialize");
        assert_eq!("Library", library.name());
        let books = library.list_books();
        assert_eq!(4, books.len());
        assert_eq!(BookEntity::new("No Kind", "A", "1"), books[0]);
        let mut unknown = BookEntity::new("Unknown Kind", "", "2");
        unknown.is_borrowed = true;
        assert_eq!(unknown, books[1]);
        assert_eq!(BookEntity::ebook("No Format", "B", "3", ""), books[2]);
        assert_eq!(BookEntity::audio_book("No Duration", "C", "4", 0), books[3]);
    }

    #[test]
    fn test_should_skip_malformed_entries() {
        let value = json!({
            "name": "Partial",
            "books": [
                {"kind": "AudioBook", "title": "Bad Duration", "author": "A", "isbn": "1", "duration": "long"},
                "not a book",
                {"kind": "Book", "title": 42, "author": "B", "isbn": "2"},
                {"kind": "Book", "title": "Bad Flag", "author": "C", "isbn": "3", "is_borrowed": "yes"},
                {"kind": "AudioBook", "title": "Good", "author": "D", "isbn": "4", "duration": 60},
            ]
        });
        let library = Library::from_document(&value).expect("should deserialize");
        assert_eq!("Partial", library.name());
        assert_eq!(1, library.total_books());
        assert_eq!(Some(60), library.find_book_by_isbn("4").expect("should find").duration_minutes());
    }

    #[test]
    fn test_should_reject_malformed_documents() {
        assert!(Library::from_document(&json!([])).is_err());
        assert!(Library::from_document(&json!({"name": "x", "books": {"a": 1}})).is_err());
        assert_eq!(0, Library::from_document(&json!({"name": "x"})).expect("should deserialize").total_books());
    }

    #[test]
    fn test_should_load_default_when_missing() {
        let dir = tempfile::tempdir().expect("should create dir");
        let library = Library::load_from_file(&dir.path().join("missing.json"), "My Library");
        assert_eq!("My Library", library.name());
        assert_eq!(0, library.total_books());
    }

    #[test]
    fn test_should_load_default_when_invalid_json() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ this is not json").expect("should write");
        let library = Library::load_from_file(&path, "My Library");
        assert_eq!("My Library", library.name());
        assert_eq!(0, library.total_books());

        fs::write(&path, "[1, 2, 3]").expect("should write");
        assert_eq!("My Library", Library::load_from_file(&path, "My Library").name());
    }

    #[test]
    fn test_should_swallow_persist_failure() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("no-such-dir").join("library.json");
        let library = mixed_library();
        assert!(library.save_to_file(&path).is_err());
        library.persist(&path);
        assert!(!path.exists());
        assert_eq!(4, library.total_books());
    }
}
