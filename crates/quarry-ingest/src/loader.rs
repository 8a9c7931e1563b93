//! Reads a document from disk and reduces it to cleaned text plus metadata.

use std::path::Path;

use quarry_html::{clean_html, extract_metadata};

use crate::error::{IngestError, Result};
use crate::types::{DocMetadata, Document};

/// Default maximum file size: 50 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

pub struct DocumentLoader {
    pub max_file_size: u64,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl DocumentLoader {
    /// Loads one HTML file. Bytes are decoded lossily so an odd encoding
    /// never fails a document; the filename becomes part of its metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or exceeds the size
    /// limit. Both are per-document failures the pipeline recovers from.
    pub async fn load(&self, path: &Path) -> Result<Document> {
        let meta = tokio::fs::metadata(path).await?;
        if meta.len() > self.max_file_size {
            return Err(IngestError::FileTooLarge(meta.len()));
        }

        let bytes = tokio::fs::read(path).await?;
        let raw = String::from_utf8_lossy(&bytes);

        let content = clean_html(&raw);
        let page = extract_metadata(&raw);
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Document {
            content,
            metadata: DocMetadata {
                filename,
                title: page.title,
                author: page.author,
                date: page.date,
            },
        })
    }
}
