//! Page store
//!
//! Read access to the bundled scripture database. The host-facing code only
//! sees the [`QuranStore`] trait; the SQLite implementation is built for
//! native targets, where the database file is opened directly.

use thiserror::Error;
use crate::models::{Chapter, Page, Part, Quarter, Verse};

#[cfg(not(target_arch = "wasm32"))]
pub mod schema;
#[cfg(not(target_arch = "wasm32"))]
pub mod sqlite;

#[cfg(not(target_arch = "wasm32"))]
pub use sqlite::SqliteStore;

/// Errors from store reads
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The requested record does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// The database could not be read
    #[error("Store read failed: {0}")]
    Backend(String),

    /// A row holds a value the model cannot represent
    #[error("Corrupt row: {0}")]
    Corrupt(String),
}

impl StoreError {
    /// Distinguishes "nothing there" from a failed read, for the retry UI
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound("row".to_string()),
            rusqlite::Error::FromSqlConversionFailure(col, ty, err) => {
                StoreError::Corrupt(format!("column {} ({}): {}", col, ty, err))
            }
            rusqlite::Error::IntegralValueOutOfRange(col, value) => {
                StoreError::Corrupt(format!("column {} out of range: {}", col, value))
            }
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Query contract of the scripture database
pub trait QuranStore {
    /// Page with its headers and verses for both standards
    fn page_by_number(&self, number: u32) -> Result<Option<Page>, StoreError>;

    fn chapter_by_number(&self, number: u32) -> Result<Option<Chapter>, StoreError>;

    /// Verses of a chapter ordered by verse number
    fn verses_by_chapter(&self, chapter_number: u32) -> Result<Vec<Verse>, StoreError>;

    /// Verses whose searchable text contains `query` (at most 100)
    fn search_verses(&self, query: &str) -> Result<Vec<Verse>, StoreError>;

    fn part_by_id(&self, identifier: u32) -> Result<Option<Part>, StoreError>;

    fn quarter_by_id(&self, identifier: u32) -> Result<Option<Quarter>, StoreError>;

    /// Like [`QuranStore::page_by_number`] but a missing page is an error
    fn require_page(&self, number: u32) -> Result<Page, StoreError> {
        self.page_by_number(number)?
            .ok_or_else(|| StoreError::NotFound(format!("page {}", number)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyStore;

    impl QuranStore for EmptyStore {
        fn page_by_number(&self, _: u32) -> Result<Option<Page>, StoreError> {
            Ok(None)
        }
        fn chapter_by_number(&self, _: u32) -> Result<Option<Chapter>, StoreError> {
            Ok(None)
        }
        fn verses_by_chapter(&self, _: u32) -> Result<Vec<Verse>, StoreError> {
            Ok(Vec::new())
        }
        fn search_verses(&self, _: &str) -> Result<Vec<Verse>, StoreError> {
            Ok(Vec::new())
        }
        fn part_by_id(&self, _: u32) -> Result<Option<Part>, StoreError> {
            Ok(None)
        }
        fn quarter_by_id(&self, _: u32) -> Result<Option<Quarter>, StoreError> {
            Ok(None)
        }
    }

    #[test]
    fn test_require_page_reports_not_found() {
        let err = EmptyStore.require_page(605).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "page 605 not found");
    }

    #[test]
    fn test_backend_error_is_not_not_found() {
        assert!(!StoreError::Backend("disk I/O error".into()).is_not_found());
    }
}
