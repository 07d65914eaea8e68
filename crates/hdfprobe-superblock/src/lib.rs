//! HDF5 signature validation and superblock decoding.
//!
//! An HDF5 file starts with an 8-byte signature followed by the superblock,
//! a fixed-layout block describing format versions and the widths used for
//! addresses and lengths elsewhere in the file. This crate checks the
//! signature and decodes the superblock without touching the object graph.
//!
//! Two decoders are provided:
//!
//! - [`Superblock`] walks the base field table: six 2-byte big-endian fields
//!   at fixed offsets.
//! - [`SuperblockLayout`] dispatches on the version byte and decodes the full
//!   version 0/1 or version 2/3 layout.
//!
//! Both are all-or-nothing: on error no record is returned.
//!
//! # Example
//!
//! ```no_run
//! use hdfprobe_superblock::Superblock;
//!
//! let data = std::fs::read("sample.h5")?;
//! let superblock = Superblock::read(&data, "sample.h5")?;
//! println!("offsets are {} bytes wide", superblock.size_of_offsets);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod base;
mod error;
mod field;
mod layout;

pub mod signature;

pub use base::{BaseField, Superblock, BASE_FIELD_TABLE, BASE_HEADER_LEN};
pub use error::{DecodeError, Error, Result};
pub use field::{decode_uint, read_uint, ByteOrder, FieldSpec};
pub use layout::{
    CompactSuperblock, LegacySuperblock, ScratchPad, SuperblockLayout, SuperblockVersion,
    SymbolTableEntry, SCRATCH_PAD_LEN, VERSION_OFFSET,
};
pub use signature::{is_hdf5, locate, validate, SIGNATURE, SIGNATURE_LEN};
