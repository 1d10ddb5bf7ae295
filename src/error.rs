//! Error types for xml-datatree.

use thiserror::Error;

/// Result type for xml-datatree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading markup into a simplified tree.
///
/// A node whose tag cannot be extracted is not an error: it is reported as a
/// [`crate::Diagnostic`] and conversion carries on.
#[derive(Error, Debug)]
pub enum Error {
    /// The markup parser rejected the document.
    #[error("Failed to parse XML: {0}")]
    Parse(#[from] roxmltree::Error),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source tree is nested deeper than the configured limit.
    #[error("Document nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// Error occurred while rendering a tree.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(err.to_string())
    }
}
