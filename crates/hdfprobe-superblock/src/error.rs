//! Error types for signature validation and superblock decoding.

use hdfprobe_common::ErrorKind;
use thiserror::Error;

/// Errors that can occur when validating or decoding a superblock.
#[derive(Debug, Error)]
pub enum Error {
    /// Byte source error (truncation, I/O, unavailable file).
    #[error("{0}")]
    Common(#[from] hdfprobe_common::Error),

    /// The leading bytes are not the HDF5 signature.
    #[error("input file is not in HDF5 format: {label} (signature {actual:02x?})")]
    NotFormatMatch { label: String, actual: [u8; 8] },

    /// A field could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Common(e) => e.kind(),
            Error::NotFormatMatch { .. } => ErrorKind::NotFormatMatch,
            Error::Decode(_) => ErrorKind::Decode,
        }
    }
}

/// Malformed or unsupported field values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Superblock version this crate has no layout for.
    #[error("unsupported superblock version: {0}")]
    UnsupportedVersion(u8),

    /// A size field holds a value the format does not allow.
    #[error("invalid {field}: {size} (expected 2, 4, 8, 16 or 32)")]
    InvalidSize { field: &'static str, size: u8 },

    /// A size field is valid but too wide to decode into 64 bits.
    #[error("unsupported {field}: {size} bytes")]
    UnsupportedSize { field: &'static str, size: u8 },

    /// A B-tree K value is zero.
    #[error("{0} must be greater than zero")]
    ZeroNodeK(&'static str),

    /// A required address holds the undefined address.
    #[error("{0} is undefined")]
    UndefinedAddress(&'static str),

    /// Symbol table entry cache type outside 0..=2.
    #[error("invalid symbol table entry cache type: {0}")]
    InvalidCacheType(u32),

    /// A field table row has a width no integer decode supports.
    #[error("field at offset {offset} has unsupported width {width}")]
    FieldWidth { offset: u64, width: usize },

    /// A table did not assign every field of the record.
    #[error("field {0} was not decoded")]
    MissingField(&'static str),

    /// Stored checksum does not match the superblock bytes.
    #[error("checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch { stored: u32, computed: u32 },
}

/// Result type for superblock operations.
pub type Result<T> = std::result::Result<T, Error>;
