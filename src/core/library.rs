use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    // The book is already lent out and cannot be borrowed again until it is returned.
    AlreadyBorrowed {
        message: String,
    },
    // The book is on the shelf, so there is nothing to return.
    NotBorrowed {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn already_borrowed(message: &str) -> LibraryError {
        LibraryError::AlreadyBorrowed { message: message.to_string() }
    }

    pub fn not_borrowed(message: &str) -> LibraryError {
        LibraryError::NotBorrowed { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message, .. } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::DuplicateKey { message } => { message }
            LibraryError::AlreadyBorrowed { message } => { message }
            LibraryError::NotBorrowed { message } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library store and catalog services.
pub type LibraryResult<T> = Result<T, LibraryError>;

// BookKind is the tag that tells the three kinds of books apart, both in the persisted
// document ("kind") and in the api responses ("book_type").
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookKind {
    Book,
    EBook,
    AudioBook,
}

impl From<String> for BookKind {
    fn from(s: String) -> Self {
        BookKind::from(s.as_str())
    }
}

impl From<&str> for BookKind {
    fn from(s: &str) -> Self {
        match s {
            "EBook" => BookKind::EBook,
            "AudioBook" => BookKind::AudioBook,
            _ => BookKind::Book,
        }
    }
}

impl Display for BookKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookKind::Book => write!(f, "Book"),
            BookKind::EBook => write!(f, "EBook"),
            BookKind::AudioBook => write!(f, "AudioBook"),
        }
    }
}
