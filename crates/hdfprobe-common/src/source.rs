//! Byte sources with exact-length reads at absolute offsets.
//!
//! A [`ByteSource`] never exposes a cursor: every read names its offset and
//! either fills the whole buffer or fails. Short reads are not observable.
//! In-memory buffers, file handles and memory maps all implement the same
//! contract, so decoders cannot tell them apart except through I/O failures.

use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use memmap2::Mmap;
use parking_lot::Mutex;

use crate::{Error, Result};

/// A finite, randomly addressable binary blob.
pub trait ByteSource {
    /// Total length of the source in bytes.
    fn len(&self) -> u64;

    /// Check if the source holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fill `buf` with the bytes starting at `offset`.
    ///
    /// Fails with [`Error::UnexpectedEof`] if fewer than `buf.len()` bytes
    /// are available; `buf` contents are unspecified in that case.
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()>;

    /// Read exactly `len` bytes at `offset` into a new vector.
    fn read_vec(&self, offset: u64, len: usize) -> Result<Vec<u8>> {
        check_range(self.len(), offset, len)?;
        let mut buf = vec![0u8; len];
        self.read_exact_at(offset, &mut buf)?;
        Ok(buf)
    }
}

/// Fixed-size reads for any [`ByteSource`].
pub trait ByteSourceExt: ByteSource {
    /// Read exactly `N` bytes at `offset`.
    #[inline]
    fn read_array<const N: usize>(&self, offset: u64) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact_at(offset, &mut buf)?;
        Ok(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSourceExt for S {}

/// Check that `needed` bytes starting at `offset` fit in `len` bytes.
#[inline]
pub(crate) fn check_range(len: u64, offset: u64, needed: usize) -> Result<()> {
    match offset.checked_add(needed as u64) {
        Some(end) if end <= len => Ok(()),
        _ => Err(Error::UnexpectedEof {
            offset,
            needed,
            available: len.saturating_sub(offset),
        }),
    }
}

impl ByteSource for [u8] {
    #[inline]
    fn len(&self) -> u64 {
        <[u8]>::len(self) as u64
    }

    #[inline]
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        check_range(ByteSource::len(self), offset, buf.len())?;
        // In range, so the offset fits in usize.
        let start = offset as usize;
        buf.copy_from_slice(&self[start..start + buf.len()]);
        Ok(())
    }
}

impl ByteSource for Vec<u8> {
    #[inline]
    fn len(&self) -> u64 {
        ByteSource::len(self.as_slice())
    }

    #[inline]
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        self.as_slice().read_exact_at(offset, buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    #[inline]
    fn len(&self) -> u64 {
        (**self).len()
    }

    #[inline]
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        (**self).read_exact_at(offset, buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    #[inline]
    fn len(&self) -> u64 {
        (**self).len()
    }

    #[inline]
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        (**self).read_exact_at(offset, buf)
    }
}

fn unavailable(path: &Path, source: io::Error) -> Error {
    Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

fn not_a_file() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "not a regular file")
}

/// Load a whole file into memory.
///
/// Missing, unreadable and non-regular paths fail with
/// [`Error::SourceUnavailable`].
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| unavailable(path, e))?;
    if !metadata.is_file() {
        return Err(unavailable(path, not_a_file()));
    }

    let data = fs::read(path).map_err(|e| unavailable(path, e))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "loaded file");
    Ok(data)
}

/// A source backed by an open file handle.
///
/// Nothing is loaded up front; each read seeks and reads under a lock.
/// The length is captured at open time and reads are bounds-checked
/// against it, so a short file reports [`Error::UnexpectedEof`].
#[derive(Debug)]
pub struct FileSource {
    file: Mutex<File>,
    len: u64,
}

impl FileSource {
    /// Open a file for random access.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| unavailable(path, e))?;
        let metadata = file.metadata().map_err(|e| unavailable(path, e))?;
        if !metadata.is_file() {
            return Err(unavailable(path, not_a_file()));
        }

        tracing::debug!(path = %path.display(), len = metadata.len(), "opened file source");

        Ok(Self {
            file: Mutex::new(file),
            len: metadata.len(),
        })
    }
}

impl ByteSource for FileSource {
    #[inline]
    fn len(&self) -> u64 {
        self.len
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        check_range(self.len, offset, buf.len())?;

        let needed = buf.len();
        let mut file = self.file.lock();
        file.seek(SeekFrom::Start(offset))?;
        file.read_exact(buf).map_err(|e| match e.kind() {
            // The file shrank after it was opened.
            io::ErrorKind::UnexpectedEof => Error::UnexpectedEof {
                offset,
                needed,
                available: 0,
            },
            _ => Error::Io(e),
        })
    }
}

/// A source backed by a read-only memory map.
#[derive(Debug)]
pub struct MmapSource {
    mmap: Mmap,
}

impl MmapSource {
    /// Map a file into memory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| unavailable(path, e))?;
        let metadata = file.metadata().map_err(|e| unavailable(path, e))?;
        if !metadata.is_file() {
            return Err(unavailable(path, not_a_file()));
        }

        // SAFETY: the map is read-only; concurrent truncation by another
        // process is outside what this crate can guard against.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| unavailable(path, e))?;

        tracing::debug!(path = %path.display(), len = mmap.len(), "mapped file source");

        Ok(Self { mmap })
    }

    /// Get the mapped bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }
}

impl ByteSource for MmapSource {
    #[inline]
    fn len(&self) -> u64 {
        ByteSource::len(self.as_bytes())
    }

    #[inline]
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        self.as_bytes().read_exact_at(offset, buf)
    }
}

/// A view of a source that starts at `base`.
///
/// Offset 0 of the window is offset `base` of the inner source. Used when
/// the signature sits behind a user block.
#[derive(Debug, Clone, Copy)]
pub struct Window<S> {
    inner: S,
    base: u64,
}

impl<S: ByteSource> Window<S> {
    /// Create a window over `inner` starting at `base`.
    pub fn new(inner: S, base: u64) -> Self {
        Self { inner, base }
    }
}

impl<S: ByteSource> ByteSource for Window<S> {
    #[inline]
    fn len(&self) -> u64 {
        self.inner.len().saturating_sub(self.base)
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        check_range(self.len(), offset, buf.len())?;
        self.inner.read_exact_at(self.base + offset, buf)
    }
}
