//! Error types for page-update generation

use thiserror::Error;

/// Error raised by a view-context collaborator (URL resolution, templates)
pub type ContextError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for rjs operations
#[derive(Debug, Error)]
pub enum RjsError {
    /// The JSON encoder rejected a value
    #[error("JSON encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
    /// A value without a JSON form reached the strict encoder
    #[error("value has no JSON representation: {0}")]
    Unencodable(String),
    /// Error propagated unchanged from the view context
    #[error("view context error: {0}")]
    Context(ContextError),
}

impl RjsError {
    /// Wrap a collaborator error
    pub fn context(err: impl Into<ContextError>) -> Self {
        Self::Context(err.into())
    }
}

impl From<ContextError> for RjsError {
    fn from(err: ContextError) -> Self {
        Self::Context(err)
    }
}

/// Convenience Result type for rjs operations
pub type Result<T> = std::result::Result<T, RjsError>;
