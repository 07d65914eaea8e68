//! Positioned reader over a byte source.
//!
//! This module provides [`SourceReader`], a cursor-like type that walks a
//! [`ByteSource`] sequentially. The position lives in the reader, never in
//! the source, so a decoder can own one privately while the source itself
//! stays offset-addressed.

use byteorder::{ByteOrder, LittleEndian};
use zerocopy::FromBytes;

use crate::source::ByteSourceExt;
use crate::{ByteSource, Error, Result};

/// A little-endian reader that tracks its own position in a [`ByteSource`].
///
/// # Example
///
/// ```
/// use hdfprobe_common::SourceReader;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
/// let mut reader = SourceReader::new(&data[..]);
///
/// assert_eq!(reader.read_u16().unwrap(), 0x0201);
/// assert_eq!(reader.read_uint(4).unwrap(), 0x06050403);
/// assert_eq!(reader.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct SourceReader<'a, S: ByteSource + ?Sized> {
    source: &'a S,
    position: u64,
}

impl<'a, S: ByteSource + ?Sized> SourceReader<'a, S> {
    /// Create a new reader at the start of the source.
    #[inline]
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Create a new reader starting at a specific position.
    #[inline]
    pub fn new_at(source: &'a S, position: u64) -> Self {
        Self { source, position }
    }

    /// Get the current position in the source.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.source.len().saturating_sub(self.position)
    }

    /// Advance the position by a number of bytes.
    #[inline]
    pub fn advance(&mut self, count: u64) {
        self.position = self.position.saturating_add(count);
    }

    /// Read bytes into `buf` and advance the position.
    #[inline]
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.source.read_exact_at(self.position, buf)?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Read a number of bytes into a new vector.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let bytes = self.source.read_vec(self.position, count)?;
        self.position += count as u64;
        Ok(bytes)
    }

    /// Read a fixed-size array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.source.read_array::<N>(self.position)?;
        self.position += N as u64;
        Ok(bytes)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_array::<1>().map(|b| b[0])
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_array::<2>().map(u16::from_le_bytes)
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }

    /// Read a little-endian unsigned integer `width` bytes wide.
    ///
    /// The value is zero-extended into a `u64`. A width outside `1..=8`
    /// fails with [`Error::InvalidWidth`] without consuming anything.
    pub fn read_uint(&mut self, width: usize) -> Result<u64> {
        if !(1..=8).contains(&width) {
            return Err(Error::InvalidWidth {
                offset: self.position,
                width,
            });
        }

        let mut buf = [0u8; 8];
        let buf = &mut buf[..width];
        self.read_exact(buf)?;
        Ok(LittleEndian::read_uint(buf, width))
    }

    /// Read a struct using zerocopy.
    ///
    /// The struct must implement `FromBytes` from the zerocopy crate.
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(&bytes).map_err(|_| Error::UnexpectedEof {
            offset: self.position - size as u64,
            needed: size,
            available: bytes.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use zerocopy::{FromBytes, Immutable, KnownLayout};

    use super::*;

    #[derive(Debug, FromBytes, Immutable, KnownLayout)]
    #[repr(C, packed)]
    struct Pair {
        tag: u8,
        value: [u8; 2],
    }

    #[test]
    fn test_read_primitives() {
        let data = [
            0x7Fu8, // u8
            0x34, 0x12, // u16: 0x1234
            0xFF, 0xFF, 0xFF, 0xFF, // u32: 0xFFFFFFFF
        ];
        let mut reader = SourceReader::new(&data[..]);

        assert_eq!(reader.read_u8().unwrap(), 0x7F);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 0xFFFFFFFF);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_read_uint_zero_extends() {
        let data = [0xFFu8, 0xFF, 0x01, 0x02, 0x03];
        let mut reader = SourceReader::new(&data[..]);

        assert_eq!(reader.read_uint(2).unwrap(), 0xFFFF);
        assert_eq!(reader.read_uint(3).unwrap(), 0x030201);
        assert_eq!(reader.position(), 5);
    }

    #[test]
    fn test_advance_and_struct() {
        let data = [0u8, 0, 9, 0x01, 0x02];
        let mut reader = SourceReader::new_at(&data[..], 1);
        reader.advance(1);

        let pair: Pair = reader.read_struct().unwrap();
        assert_eq!(pair.tag, 9);
        assert_eq!(pair.value, [0x01, 0x02]);
        assert_eq!(reader.position(), 5);
    }

    #[test]
    fn test_read_uint_rejects_bad_width() {
        let data = [0xAAu8; 16];
        let mut reader = SourceReader::new_at(&data[..], 3);

        for width in [0, 9, 16] {
            match reader.read_uint(width) {
                Err(Error::InvalidWidth { offset, width: got }) => {
                    assert_eq!(offset, 3);
                    assert_eq!(got, width);
                }
                other => panic!("expected InvalidWidth, got {:?}", other),
            }
        }
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.read_uint(8).unwrap(), 0xAAAA_AAAA_AAAA_AAAA);
    }

    #[test]
    fn test_eof_does_not_advance() {
        let data = [0x01u8, 0x02];
        let mut reader = SourceReader::new(&data[..]);

        assert!(reader.read_u32().is_err());
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u16().unwrap(), 0x0201);
    }
}
