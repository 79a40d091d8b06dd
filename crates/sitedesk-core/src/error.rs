//! Error types for store and facade operations

use thiserror::Error;

/// Failure conditions surfaced by the mock data store.
///
/// Every variant is a not-found condition: operations otherwise always
/// succeed, matching the demo contract of the mocked backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Timeline event not found: {0}")]
    EventNotFound(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
