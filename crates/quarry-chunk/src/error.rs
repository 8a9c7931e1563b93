//! Error types for quarry-chunk.

/// Errors raised when a splitter configuration is rejected.
///
/// Splitting itself is infallible; only construction can fail.
#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    /// A zero chunk size can never hold content.
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,

    /// The overlap must leave room for fresh content in every chunk.
    #[error("chunk_overlap ({overlap}) must be smaller than chunk_size ({size})")]
    OverlapExceedsSize { overlap: usize, size: usize },
}
