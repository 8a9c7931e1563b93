//! Per-document processing loop: load → split → write, with failure isolation.

use std::path::PathBuf;

use quarry_chunk::TextSplitter;

use crate::error::Result;
use crate::loader::DocumentLoader;
use crate::types::ChunkRecord;
use crate::writer::JsonlWriter;

/// Summary of one batch run.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub chunks_written: usize,
    pub errors: Vec<String>,
    pub duration_ms: u64,
}

pub struct Pipeline {
    loader: DocumentLoader,
    splitter: TextSplitter,
}

impl Pipeline {
    #[must_use]
    pub fn new(loader: DocumentLoader, splitter: TextSplitter) -> Self {
        Self { loader, splitter }
    }

    /// Processes documents in the given order, appending one record per
    /// chunk. Chunk indices restart at 0 for every document.
    ///
    /// A document that fails to load is recorded in the report and skipped;
    /// the batch continues. A document that cleans down to nothing produces
    /// zero records and is counted as skipped, not failed.
    ///
    /// # Errors
    ///
    /// Returns an error only when a record cannot be written: output
    /// failures are fatal, document failures are not.
    pub async fn run(&self, files: &[PathBuf], writer: &mut JsonlWriter) -> Result<IngestReport> {
        let start = std::time::Instant::now();
        let mut report = IngestReport::default();
        let total = files.len();

        for (i, path) in files.iter().enumerate() {
            let document = match self.loader.load(path).await {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::warn!(file = %path.display(), "skipping document: {e}");
                    report.errors.push(format!("{}: {e}", path.display()));
                    continue;
                }
            };

            if document.content.is_empty() {
                tracing::info!(file = %path.display(), "no content extracted");
                report.files_skipped += 1;
                continue;
            }

            let chunks = self.splitter.split(&document.content);
            let written = chunks.len();
            for (index, chunk) in chunks.into_iter().enumerate() {
                let record = ChunkRecord::new(chunk, document.metadata.clone(), index);
                writer.write_record(&record).await?;
            }

            report.files_processed += 1;
            report.chunks_written += written;
            tracing::info!(
                file = %path.display(),
                progress = format_args!("{}/{total}", i + 1),
                chunks = written,
            );
        }

        writer.flush().await?;
        report.duration_ms = start.elapsed().as_millis().try_into().unwrap_or(u64::MAX);
        Ok(report)
    }
}
