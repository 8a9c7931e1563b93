use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use quarry_chunk::{SplitterConfig, TextSplitter};
use quarry_ingest::{DocumentLoader, JsonlWriter, Pipeline, resolve_inputs};

/// Clean, chunk, and flatten HTML corpora into JSONL for retrieval pipelines.
#[derive(Debug, Parser)]
#[command(name = "quarry", version, about)]
struct Cli {
    /// Input HTML file or directory (repeatable).
    #[arg(short, long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Output JSONL file.
    #[arg(short, long, default_value = "output.jsonl")]
    output: PathBuf,

    /// Maximum chunk length in characters.
    #[arg(long = "chunk_size", default_value_t = 1000)]
    chunk_size: usize,

    /// Characters of overlap between consecutive chunks.
    #[arg(long = "chunk_overlap", default_value_t = 200)]
    chunk_overlap: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber();

    let cli = Cli::parse();

    // Invalid size/overlap combinations abort before any file is touched.
    let splitter = TextSplitter::new(SplitterConfig {
        chunk_size: cli.chunk_size,
        chunk_overlap: cli.chunk_overlap,
    })?;

    let files = resolve_inputs(&cli.input)?;
    if files.is_empty() {
        bail!("no input documents found");
    }
    tracing::info!(documents = files.len(), "inputs resolved");

    let mut writer = JsonlWriter::create(&cli.output)
        .await
        .with_context(|| format!("failed to open output file {}", cli.output.display()))?;

    let pipeline = Pipeline::new(DocumentLoader::default(), splitter);
    let report = pipeline.run(&files, &mut writer).await?;

    tracing::info!(
        processed = report.files_processed,
        skipped = report.files_skipped,
        chunks = report.chunks_written,
        ms = report.duration_ms,
        output = %cli.output.display(),
        "done"
    );

    if !report.errors.is_empty() {
        bail!("{} document(s) failed", report.errors.len());
    }

    Ok(())
}

fn init_subscriber() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
