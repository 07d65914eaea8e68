//! Format signature validation.

use hdfprobe_common::{ByteSource, ByteSourceExt};

use crate::{Error, Result};

/// The 8-byte HDF5 format signature: `\x89HDF\r\n\x1a\n`.
pub const SIGNATURE: [u8; 8] = [137, 72, 68, 70, 13, 10, 26, 10];

/// Length of the signature in bytes.
pub const SIGNATURE_LEN: usize = 8;

/// First non-zero offset a user block may push the signature to.
const FIRST_USER_BLOCK_OFFSET: u64 = 512;

/// Check if data starts with the HDF5 signature.
pub fn is_hdf5(data: &[u8]) -> bool {
    data.len() >= SIGNATURE_LEN && data[..SIGNATURE_LEN] == SIGNATURE
}

/// Validate that `source` starts with the HDF5 signature.
///
/// `label` (usually the file name) is carried in the
/// [`Error::NotFormatMatch`] error. A source shorter than the signature
/// fails with the underlying end-of-data error instead.
pub fn validate<S: ByteSource + ?Sized>(source: &S, label: &str) -> Result<()> {
    let actual = source.read_array::<SIGNATURE_LEN>(0)?;

    if actual != SIGNATURE {
        tracing::debug!(label, ?actual, "signature mismatch");
        return Err(Error::NotFormatMatch {
            label: label.to_string(),
            actual,
        });
    }

    tracing::trace!(label, "signature ok");
    Ok(())
}

/// Find the signature, allowing for a user block in front of it.
///
/// The signature may sit at offset 0, 512, 1024, 2048 and so on. Returns
/// the first offset holding it, or `None` if no candidate does.
pub fn locate<S: ByteSource + ?Sized>(source: &S) -> Result<Option<u64>> {
    let len = source.len();
    let mut offset = 0u64;

    while offset
        .checked_add(SIGNATURE_LEN as u64)
        .is_some_and(|end| end <= len)
    {
        if source.read_array::<SIGNATURE_LEN>(offset)? == SIGNATURE {
            tracing::debug!(offset, "signature located");
            return Ok(Some(offset));
        }

        offset = match offset {
            0 => FIRST_USER_BLOCK_OFFSET,
            _ => match offset.checked_mul(2) {
                Some(next) => next,
                None => break,
            },
        };
    }

    Ok(None)
}
