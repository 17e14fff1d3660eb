//! Fixed-size chunking for summarization.
//!
//! Whole-document summaries are produced chunk by chunk, since a long document does not fit in
//! one completion request. Chunks are consecutive windows of the text with no overlap.

use std::num::NonZeroUsize;

/// Cuts `text` into consecutive chunks of at most `chunk_size` characters.
///
/// Cuts fall on character boundaries, so multi-byte characters are never split. Every chunk
/// except possibly the last has exactly `chunk_size` characters; empty text yields no chunks.
pub fn chunk_text(text: &str, chunk_size: NonZeroUsize) -> Vec<&str> {
    let size = chunk_size.get();
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == size {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}
