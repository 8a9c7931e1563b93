//! Recursive multi-separator splitting with greedy merge and overlap backfill.

use std::collections::VecDeque;

use crate::error::ChunkError;

/// Separator hierarchy, coarsest first. The empty separator is the
/// character-level base case, so recursion always terminates.
const SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

#[derive(Debug, Clone)]
pub struct SplitterConfig {
    /// Maximum chunk length in characters (default: 1000).
    pub chunk_size: usize,
    /// Characters of trailing context repeated at the start of the next
    /// chunk, best-effort (default: 200).
    pub chunk_overlap: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}

impl SplitterConfig {
    /// # Errors
    ///
    /// Rejects a zero chunk size or an overlap that does not leave room for
    /// fresh content. Invalid configurations are never clamped.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.chunk_size == 0 {
            return Err(ChunkError::ZeroChunkSize);
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkError::OverlapExceedsSize {
                overlap: self.chunk_overlap,
                size: self.chunk_size,
            });
        }
        Ok(())
    }
}

pub struct TextSplitter {
    config: SplitterConfig,
}

impl TextSplitter {
    /// # Errors
    ///
    /// Returns a [`ChunkError`] if the configuration is invalid, so an
    /// invalid splitter can never be constructed.
    pub fn new(config: SplitterConfig) -> Result<Self, ChunkError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Splits cleaned text into ordered, bounded, overlapping chunks.
    ///
    /// Prefers paragraph boundaries, then lines, then words; only a run with
    /// no separator at all is cut between characters. Consecutive chunks
    /// share up to `chunk_overlap` trailing characters of context. All
    /// lengths are counted in characters, not bytes.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.split_with(text, &SEPARATORS)
    }

    fn split_with(&self, text: &str, separators: &[&str]) -> Vec<String> {
        let (separator, finer) = select_separator(text, separators);
        let pieces = partition(text, separator);

        let mut chunks = Vec::new();
        let mut run: Vec<&str> = Vec::new();

        for piece in pieces {
            if piece.chars().count() <= self.config.chunk_size {
                run.push(piece);
                continue;
            }
            // Oversized piece: flush what accumulated so far, then split it
            // again at the next finer granularity.
            self.merge_run(&run, separator, &mut chunks);
            run.clear();
            if finer.is_empty() {
                // Atomic unit with no remaining separator level: emitted
                // whole even though it exceeds the budget.
                chunks.push(piece.to_owned());
            } else {
                chunks.extend(self.split_with(piece, finer));
            }
        }

        self.merge_run(&run, separator, &mut chunks);
        chunks
    }

    /// Greedily packs pieces into chunks of at most `chunk_size` characters,
    /// re-inserting the separator between joined pieces. When a window
    /// flushes, trailing pieces totalling at most `chunk_overlap` characters
    /// are retained as the start of the next window.
    fn merge_run(&self, pieces: &[&str], separator: &str, out: &mut Vec<String>) {
        let sep_len = separator.chars().count();
        let mut window: VecDeque<&str> = VecDeque::new();
        let mut total = 0usize;

        for &piece in pieces {
            let len = piece.chars().count();
            if !window.is_empty() && total + len + sep_len > self.config.chunk_size {
                push_joined(&window, separator, out);
                // Backfill: drop from the front until the remainder fits the
                // overlap budget and leaves room for the incoming piece.
                while total > self.config.chunk_overlap
                    || (total + len + sep_len > self.config.chunk_size && total > 0)
                {
                    let Some(front) = window.pop_front() else {
                        break;
                    };
                    total -= front.chars().count();
                    if !window.is_empty() {
                        total -= sep_len;
                    }
                }
            }
            if !window.is_empty() {
                total += sep_len;
            }
            window.push_back(piece);
            total += len;
        }

        push_joined(&window, separator, out);
    }
}

/// Picks the first separator that occurs in the text; the empty separator
/// always matches. Returns the chosen separator and the finer levels left.
fn select_separator<'a>(text: &str, separators: &'a [&'a str]) -> (&'a str, &'a [&'a str]) {
    for (i, sep) in separators.iter().enumerate() {
        if sep.is_empty() || text.contains(sep) {
            return (sep, &separators[i + 1..]);
        }
    }
    ("", &[])
}

/// Partitions text at every occurrence of the separator, dropping empty and
/// whitespace-only fragments (separator artifacts). The empty separator
/// yields one piece per character, all of which are kept: at that level the
/// characters are the content.
fn partition<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }
    text.split(separator)
        .filter(|piece| !piece.trim().is_empty())
        .collect()
}

fn push_joined(window: &VecDeque<&str>, separator: &str, out: &mut Vec<String>) {
    if window.is_empty() {
        return;
    }
    let joined = window
        .iter()
        .copied()
        .collect::<Vec<_>>()
        .join(separator);
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_owned());
    }
}
