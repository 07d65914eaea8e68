//! Field tables: fixed (offset, width) rows decoded as unsigned integers.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use hdfprobe_common::ByteSource;

use crate::{DecodeError, Result};

/// Byte order of a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// One row of a field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<F> {
    /// The record field this row fills.
    pub field: F,
    /// Absolute offset from the start of the signature.
    pub offset: u64,
    /// Width in bytes (1..=8).
    pub width: usize,
    /// Byte order of the stored value.
    pub order: ByteOrder,
}

impl<F> FieldSpec<F> {
    /// Create a big-endian row.
    pub const fn big_endian(field: F, offset: u64, width: usize) -> Self {
        Self {
            field,
            offset,
            width,
            order: ByteOrder::Big,
        }
    }

    /// Read this row's value from a source.
    #[inline]
    pub fn read<S: ByteSource + ?Sized>(&self, source: &S) -> Result<u64> {
        read_uint(source, self.offset, self.width, self.order)
    }
}

/// Decode an unsigned integer from exactly `bytes.len()` bytes.
///
/// The value is zero-extended into a `u64`: missing high-order bytes are
/// zero, never sign bits.
pub fn decode_uint(bytes: &[u8], order: ByteOrder) -> u64 {
    debug_assert!((1..=8).contains(&bytes.len()));
    match order {
        ByteOrder::Big => BigEndian::read_uint(bytes, bytes.len()),
        ByteOrder::Little => LittleEndian::read_uint(bytes, bytes.len()),
    }
}

/// Read `width` bytes at `offset` and decode them as an unsigned integer.
pub fn read_uint<S: ByteSource + ?Sized>(
    source: &S,
    offset: u64,
    width: usize,
    order: ByteOrder,
) -> Result<u64> {
    if !(1..=8).contains(&width) {
        return Err(DecodeError::FieldWidth { offset, width }.into());
    }

    let mut buf = [0u8; 8];
    let bytes = &mut buf[..width];
    source.read_exact_at(offset, bytes)?;
    Ok(decode_uint(bytes, order))
}
