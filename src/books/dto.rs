use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::BookKind;

// BookDto is the display form of a book returned by the catalog api. The kind-specific
// fields are null for kinds that do not have them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub is_borrowed: bool,
    pub book_type: BookKind,
    pub file_format: Option<String>,
    pub duration: Option<i64>,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            is_borrowed: other.is_borrowed,
            book_type: other.kind(),
            file_format: other.file_format().map(str::to_string),
            duration: other.duration_minutes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::core::library::BookKind;

    #[test]
    fn test_should_build_dto_from_book() {
        let book = BookEntity::new("Test Book Title", "Test Author", "9780140328721");
        let dto = BookDto::from(&book);
        assert_eq!(BookKind::Book, dto.book_type);
        assert_eq!(json!({
            "title": "Test Book Title",
            "author": "Test Author",
            "isbn": "9780140328721",
            "is_borrowed": false,
            "book_type": "Book",
            "file_format": null,
            "duration": null,
        }), serde_json::to_value(&dto).expect("should serialize"));
    }

    #[test]
    fn test_should_carry_kind_specific_fields() {
        let dto = BookDto::from(&BookEntity::ebook("1984", "George Orwell", "978-0451524935", "EPUB"));
        assert_eq!(BookKind::EBook, dto.book_type);
        assert_eq!(Some("EPUB".to_string()), dto.file_format);
        assert_eq!(None, dto.duration);

        let mut audio = BookEntity::audio_book("Becoming", "Michelle Obama", "978-1524763138", 780);
        audio.borrow().expect("should borrow");
        let dto = BookDto::from(&audio);
        assert_eq!("AudioBook", serde_json::to_value(&dto).expect("should serialize")["book_type"]);
        assert_eq!(Some(780), dto.duration);
        assert!(dto.is_borrowed);
    }
}
