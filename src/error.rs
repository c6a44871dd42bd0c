//! Listing Errors

use thiserror::Error;

pub type ListingResult<T> = Result<T, ListingError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("unknown filter category: {0}")]
    UnknownCategory(String),
    #[error("unknown option '{value}' for filter category '{category}'")]
    UnknownOption { category: String, value: String },
    #[error("spot {0} not found")]
    SpotNotFound(u32),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        ListingError::InvalidData(err.to_string())
    }
}
