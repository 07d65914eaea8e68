//! Common utilities for hdfprobe.
//!
//! This crate provides the foundational pieces the header decoders build on:
//!
//! - [`ByteSource`] - Exact-length reads at absolute offsets over a finite blob
//! - [`FileSource`], [`MmapSource`] - File-handle and memory-mapped backings
//! - [`Window`] - A source view rebased at an offset (user blocks)
//! - [`SourceReader`] - Positioned little-endian reading on top of a source
//! - [`checksum`] - Jenkins lookup3, as used by newer superblocks

mod error;
mod reader;
mod source;

pub mod checksum;

pub use error::{Error, ErrorKind, Result};
pub use reader::SourceReader;
pub use source::{load_file, ByteSource, ByteSourceExt, FileSource, MmapSource, Window};

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
