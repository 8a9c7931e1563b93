//! Error types for quarry-ingest.

use std::path::PathBuf;

/// Errors that can occur while resolving, loading, or writing documents.
///
/// `InputNotFound` and write-side failures are fatal; loader errors are
/// recoverable per document and collected into the batch report.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// IO error reading a document or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A literal input path argument does not exist.
    #[error("input path not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// A document exceeds the loader's size limit.
    #[error("file too large: {0} bytes")]
    FileTooLarge(u64),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `IngestError`.
pub type Result<T> = std::result::Result<T, IngestError>;
