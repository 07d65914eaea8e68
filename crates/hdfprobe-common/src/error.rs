//! Error types for hdfprobe-common.

use std::path::PathBuf;

use thiserror::Error;

/// Common error type for byte source operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A read asked for more bytes than the source holds.
    #[error(
        "unexpected end of data: needed {needed} bytes at offset {offset} but only {available} available"
    )]
    UnexpectedEof {
        offset: u64,
        needed: usize,
        available: u64,
    },

    /// An integer read asked for a width outside 1..=8 bytes.
    #[error("unsupported integer width {width} at offset {offset}")]
    InvalidWidth { offset: u64, width: usize },

    /// The byte source could not be obtained.
    #[error("source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading an already opened source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnexpectedEof { .. } => ErrorKind::UnexpectedEndOfData,
            Error::InvalidWidth { .. } => ErrorKind::Decode,
            Error::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Coarse failure classes shared by every hdfprobe crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The file is missing or unreadable.
    SourceUnavailable,
    /// A read ran past the end of the source.
    UnexpectedEndOfData,
    /// The leading bytes are not the format signature.
    NotFormatMatch,
    /// A field held a value the decoder cannot accept.
    Decode,
    /// Any other I/O failure.
    Io,
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
