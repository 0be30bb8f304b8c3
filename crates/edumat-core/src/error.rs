//! Error type shared across EduMat crates.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, EdumatError>;

/// All errors the EduMat service surfaces.
#[derive(Debug, Error)]
pub enum EdumatError {
    /// An operation required a registered activity that does not exist.
    /// Reads of unknown activities return `None` instead; only mutations
    /// surface this.
    #[error("activity '{0}' not found")]
    NotFound(String),

    /// Configuration could not be read, parsed, or written.
    #[error("config error: {0}")]
    Config(String),

    /// An analytics sink failed to record an event.
    #[error("analytics error: {0}")]
    Analytics(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdumatError {
    /// Whether this error maps to a 404 at the HTTP boundary.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EdumatError::NotFound(_))
    }
}
