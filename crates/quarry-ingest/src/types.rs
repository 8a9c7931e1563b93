use serde::Serialize;

/// Metadata for one source document. `filename` is always present; the
/// optional fields are omitted from serialized records when absent.
#[derive(Debug, Clone, Serialize)]
pub struct DocMetadata {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// One loaded document: cleaned plain text plus its metadata.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    pub metadata: DocMetadata,
}

/// One output line: a chunk of content with a copy of the document metadata
/// and the chunk's 0-based position.
#[derive(Debug, Serialize)]
pub struct ChunkRecord {
    pub content: String,
    pub metadata: RecordMetadata,
}

#[derive(Debug, Serialize)]
pub struct RecordMetadata {
    #[serde(flatten)]
    pub doc: DocMetadata,
    pub chunk: usize,
}

impl ChunkRecord {
    #[must_use]
    pub fn new(content: String, metadata: DocMetadata, chunk: usize) -> Self {
        Self {
            content,
            metadata: RecordMetadata {
                doc: metadata,
                chunk,
            },
        }
    }
}
