//! Shared helpers for command implementations.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use thiserror::Error;

/// Source name that reads the document from stdin.
pub const STDIN_SOURCE: &str = "-";

/// Bytes inspected when sniffing for binary content.
const BINARY_SNIFF_LEN: usize = 8000;

/// Errors that can occur when loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The file or stdin could not be read.
    #[error("failed to read {source_name}: {source}")]
    Read {
        /// File path or `stdin`.
        source_name: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The content looks like binary data.
    #[error("{0} appears to be a binary file")]
    Binary(String),

    /// The content is not valid UTF-8.
    #[error("{0} is not valid UTF-8 text")]
    InvalidUtf8(String),
}

/// Reads a document from a file path, or from stdin when the source is `-`.
pub fn load_document(source: &str) -> Result<String, DocumentError> {
    let (name, bytes) = if source == STDIN_SOURCE {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|e| DocumentError::Read {
                source_name: "stdin".to_string(),
                source: e,
            })?;
        ("stdin".to_string(), bytes)
    } else {
        let path = Path::new(source);
        if !path.exists() {
            return Err(DocumentError::NotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path).map_err(|e| DocumentError::Read {
            source_name: source.to_string(),
            source: e,
        })?;
        (source.to_string(), bytes)
    };

    tracing::debug!(source = %name, bytes = bytes.len(), "loaded document");
    decode_text(name, bytes)
}

/// Decodes document bytes, rejecting binary content.
fn decode_text(name: String, bytes: Vec<u8>) -> Result<String, DocumentError> {
    let sniff = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    if sniff.contains(&0) {
        return Err(DocumentError::Binary(name));
    }
    String::from_utf8(bytes).map_err(|_| DocumentError::InvalidUtf8(name))
}

/// Loads a document or exits with a consistent error.
pub fn load_document_or_failure(source: &str) -> Result<String, ExitCode> {
    load_document(source).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}

/// Joins query words given as separate arguments.
pub fn joined_query(words: &[String]) -> String {
    words.join(" ")
}
