use crate::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(#[source] serde_json::Error),

    #[error("Path type mismatch at {path}: expected {expected}, found {found}")]
    PathTypeMismatch {
        path: Path,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Index {index} out of bounds (len: {len}) at {path}")]
    IndexOutOfBounds { path: Path, index: usize, len: usize },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EditError {
    /// True when the error came from user-entered text rather than a stale path.
    pub fn is_user_input(&self) -> bool {
        matches!(self, EditError::InvalidJson(_))
    }
}
