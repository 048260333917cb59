// errors.rs
use thiserror::Error;

/// Everything that can go wrong while building a search, fetching a page,
/// or reading a listing back out of it.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("JSON parse error: {0}")]
    Parse(String),
    #[error("Page boundary: {0}")]
    Boundary(String),
    #[error("Search has not been executed yet")]
    NotStarted,
    #[error("Field not found: {0}")]
    FieldNotFound(String),
    #[error("Deserialize error: {0}")]
    Deserialize(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
