use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    AlreadyBorrowed {
        message: String,
    },
    NotBorrowed {
        message: String,
    },
    // The book is borrowed, but by a different member than the one returning it.
    OwnershipMismatch {
        message: String,
    },
    Validation {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_borrowed(message: &str) -> LibraryError {
        LibraryError::AlreadyBorrowed { message: message.to_string() }
    }

    pub fn not_borrowed(message: &str) -> LibraryError {
        LibraryError::NotBorrowed { message: message.to_string() }
    }

    pub fn ownership_mismatch(message: &str) -> LibraryError {
        LibraryError::OwnershipMismatch { message: message.to_string() }
    }

    pub fn validation(message: &str) -> LibraryError {
        LibraryError::Validation { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str) -> LibraryError {
        LibraryError::Runtime { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::DuplicateKey { message } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::AlreadyBorrowed { message } => { message }
            LibraryError::NotBorrowed { message } => { message }
            LibraryError::OwnershipMismatch { message } => { message }
            LibraryError::Validation { message } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message } => { message }
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        LibraryError::runtime(
            format!("http {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Borrowed" => BookStatus::Borrowed,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookStatus, LibraryError};

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_borrow_errors() {
        assert!(matches!(LibraryError::already_borrowed("test"), LibraryError::AlreadyBorrowed{ message: _ }));
        assert!(matches!(LibraryError::not_borrowed("test"), LibraryError::NotBorrowed{ message: _ }));
        assert!(matches!(LibraryError::ownership_mismatch("test"), LibraryError::OwnershipMismatch{ message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test"), LibraryError::Validation{ message: _ }));
    }

    #[test]
    fn test_should_convert_json_error() {
        let err = serde_json::from_str::<Vec<i32>>("{").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_display_message() {
        let err = LibraryError::not_found("Book with ISBN 1 not found.");
        assert_eq!("Book with ISBN 1 not found.", err.to_string());
    }

    #[test]
    fn test_should_format_book_status() {
        for status in [BookStatus::Available, BookStatus::Borrowed] {
            let str = status.to_string();
            assert_eq!(status, BookStatus::from(str));
        }
        assert_eq!(BookStatus::Available, BookStatus::from("Unknown".to_string()));
    }
}
