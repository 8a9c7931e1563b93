//! Newline-delimited JSON output.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::Result;
use crate::types::ChunkRecord;

/// Append-only JSONL writer: one record per line, newline-terminated,
/// single pass, no backtracking over already-written records.
pub struct JsonlWriter {
    inner: BufWriter<File>,
}

impl JsonlWriter {
    /// Creates (or truncates) the destination file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub async fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).await?;
        Ok(Self {
            inner: BufWriter::new(file),
        })
    }

    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    pub async fn write_record(&mut self, record: &ChunkRecord) -> Result<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        self.inner.write_all(&line).await?;
        Ok(())
    }

    /// Flushes buffered records to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub async fn flush(&mut self) -> Result<()> {
        self.inner.flush().await?;
        Ok(())
    }
}
