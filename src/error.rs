//! Error types for building and running a text coder.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the coder and its document reader.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// The document holds no symbols, so there is nothing to build a tree from.
    #[error("cannot encode an empty document")]
    EmptyInput,

    /// The input source could not be opened or read as text.
    #[error("could not read {}: {source}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bit stream ended part-way through a code.
    #[error("bit stream ends inside a code after {consumed} bits")]
    IncompleteCode { consumed: usize },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
