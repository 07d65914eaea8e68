//! Per-version superblock layouts.
//!
//! The version byte right after the signature selects the layout:
//!
//! - versions 0 and 1 share the [`LegacySuperblock`] layout (version 1 adds
//!   the indexed storage internal node K), followed by four addresses and
//!   the root group symbol table entry;
//! - versions 2 and 3 share the [`CompactSuperblock`] layout, which ends in
//!   a lookup3 checksum over every preceding superblock byte.
//!
//! All multi-byte values are little-endian. Address fields are
//! `size_of_offsets` bytes wide; an all-ones address is undefined.

use byteorder::{ByteOrder as _, LittleEndian};
use hdfprobe_common::{checksum, ByteSource, ByteSourceExt, SourceReader};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::field::{decode_uint, ByteOrder};
use crate::{signature, DecodeError, Result};

/// Offset of the version byte, right after the signature.
pub const VERSION_OFFSET: u64 = 8;

/// Superblock format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SuperblockVersion {
    V0 = 0,
    V1 = 1,
    V2 = 2,
    V3 = 3,
}

impl SuperblockVersion {
    /// Get the on-disk version number.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Read the version byte that follows the signature.
    pub fn read<S: ByteSource + ?Sized>(source: &S) -> Result<Self> {
        let [raw] = source.read_array::<1>(VERSION_OFFSET)?;
        Ok(Self::try_from(raw)?)
    }
}

impl TryFrom<u8> for SuperblockVersion {
    type Error = DecodeError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::V0),
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            other => Err(DecodeError::UnsupportedVersion(other)),
        }
    }
}

/// Fixed part of a version 0/1 superblock, starting at the version byte.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
struct LegacyPrefix {
    version: u8,
    free_space_version: u8,
    root_group_symbol_table_version: u8,
    _reserved0: u8,
    shared_header_message_version: u8,
    size_of_offsets: u8,
    size_of_lengths: u8,
    _reserved1: u8,
    group_leaf_node_k: [u8; 2],
    group_internal_node_k: [u8; 2],
    file_consistency_flags: [u8; 4],
}

/// Fixed part of a version 2/3 superblock, starting at the version byte.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
struct CompactPrefix {
    version: u8,
    size_of_offsets: u8,
    size_of_lengths: u8,
    file_consistency_flags: u8,
}

/// Cached data in a symbol table entry's scratch pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScratchPad {
    /// Nothing cached.
    Empty,
    /// The entry is a group; its B-tree and local heap are cached.
    Group {
        btree_address: u64,
        local_heap_address: u64,
    },
    /// The entry is a soft link.
    SymbolicLink { link_value_offset: u32 },
}

/// Size of a symbol table entry's scratch pad in bytes.
pub const SCRATCH_PAD_LEN: usize = 16;

/// Root group symbol table entry of a version 0/1 superblock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SymbolTableEntry {
    pub link_name_offset: u64,
    pub object_header_address: u64,
    pub scratch_pad: ScratchPad,
}

impl SymbolTableEntry {
    fn read<S: ByteSource + ?Sized>(reader: &mut SourceReader<'_, S>, width: usize) -> Result<Self> {
        let link_name_offset = reader.read_uint(width)?;
        let object_header_address =
            required_address(reader, width, "root group object header address")?;
        let cache_type = reader.read_u32()?;
        reader.advance(4); // reserved
        let scratch: [u8; SCRATCH_PAD_LEN] = reader.read_array()?;

        let scratch_pad = match cache_type {
            0 => ScratchPad::Empty,
            1 => ScratchPad::Group {
                btree_address: decode_uint(&scratch[..width], ByteOrder::Little),
                local_heap_address: decode_uint(&scratch[width..2 * width], ByteOrder::Little),
            },
            2 => ScratchPad::SymbolicLink {
                link_value_offset: LittleEndian::read_u32(&scratch[..4]),
            },
            other => return Err(DecodeError::InvalidCacheType(other).into()),
        };

        Ok(Self {
            link_name_offset,
            object_header_address,
            scratch_pad,
        })
    }
}

/// A version 0 or 1 superblock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LegacySuperblock {
    pub version: SuperblockVersion,
    pub free_space_version: u8,
    pub root_group_symbol_table_version: u8,
    pub shared_header_message_version: u8,
    pub size_of_offsets: u8,
    pub size_of_lengths: u8,
    pub group_leaf_node_k: u16,
    pub group_internal_node_k: u16,
    pub file_consistency_flags: u32,
    /// Present in version 1 only.
    pub indexed_storage_internal_node_k: Option<u16>,
    pub base_address: u64,
    pub free_space_info_address: Option<u64>,
    pub end_of_file_address: u64,
    pub driver_info_address: Option<u64>,
    pub root_group: SymbolTableEntry,
}

impl LegacySuperblock {
    fn parse<S: ByteSource + ?Sized>(source: &S, version: SuperblockVersion) -> Result<Self> {
        let mut reader = SourceReader::new_at(source, VERSION_OFFSET);
        let prefix: LegacyPrefix = reader.read_struct()?;
        debug_assert_eq!(prefix.version, version.as_u8());

        let width = offset_width(prefix.size_of_offsets)?;
        check_size("size of lengths", prefix.size_of_lengths)?;
        let group_leaf_node_k = node_k(
            "group leaf node K",
            LittleEndian::read_u16(&prefix.group_leaf_node_k),
        )?;
        let group_internal_node_k = node_k(
            "group internal node K",
            LittleEndian::read_u16(&prefix.group_internal_node_k),
        )?;

        let indexed_storage_internal_node_k = match version {
            SuperblockVersion::V1 => {
                let k = node_k("indexed storage internal node K", reader.read_u16()?)?;
                reader.advance(2); // reserved
                Some(k)
            }
            _ => None,
        };

        let base_address = required_address(&mut reader, width, "base address")?;
        let free_space_info_address = read_address(&mut reader, width)?;
        let end_of_file_address = required_address(&mut reader, width, "end of file address")?;
        let driver_info_address = read_address(&mut reader, width)?;
        let root_group = SymbolTableEntry::read(&mut reader, width)?;

        Ok(Self {
            version,
            free_space_version: prefix.free_space_version,
            root_group_symbol_table_version: prefix.root_group_symbol_table_version,
            shared_header_message_version: prefix.shared_header_message_version,
            size_of_offsets: prefix.size_of_offsets,
            size_of_lengths: prefix.size_of_lengths,
            group_leaf_node_k,
            group_internal_node_k,
            file_consistency_flags: LittleEndian::read_u32(&prefix.file_consistency_flags),
            indexed_storage_internal_node_k,
            base_address,
            free_space_info_address,
            end_of_file_address,
            driver_info_address,
            root_group,
        })
    }
}

/// A version 2 or 3 superblock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompactSuperblock {
    pub version: SuperblockVersion,
    pub size_of_offsets: u8,
    pub size_of_lengths: u8,
    pub file_consistency_flags: u8,
    pub base_address: u64,
    pub extension_address: Option<u64>,
    pub end_of_file_address: u64,
    pub root_object_header_address: u64,
    /// Verified lookup3 checksum.
    pub checksum: u32,
}

impl CompactSuperblock {
    fn parse<S: ByteSource + ?Sized>(source: &S, version: SuperblockVersion) -> Result<Self> {
        let mut reader = SourceReader::new_at(source, VERSION_OFFSET);
        let prefix: CompactPrefix = reader.read_struct()?;
        debug_assert_eq!(prefix.version, version.as_u8());

        let width = offset_width(prefix.size_of_offsets)?;
        check_size("size of lengths", prefix.size_of_lengths)?;

        let base_address = required_address(&mut reader, width, "base address")?;
        let extension_address = read_address(&mut reader, width)?;
        let end_of_file_address = required_address(&mut reader, width, "end of file address")?;
        let root_object_header_address =
            required_address(&mut reader, width, "root group object header address")?;

        let checked_len = reader.position();
        let stored = reader.read_u32()?;
        let computed = checksum::lookup3(&source.read_vec(0, checked_len as usize)?);
        if stored != computed {
            return Err(DecodeError::ChecksumMismatch { stored, computed }.into());
        }

        Ok(Self {
            version,
            size_of_offsets: prefix.size_of_offsets,
            size_of_lengths: prefix.size_of_lengths,
            file_consistency_flags: prefix.file_consistency_flags,
            base_address,
            extension_address,
            end_of_file_address,
            root_object_header_address,
            checksum: stored,
        })
    }
}

/// A superblock decoded with the layout its version selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SuperblockLayout {
    /// Version 0 or 1.
    Legacy(LegacySuperblock),
    /// Version 2 or 3.
    Compact(CompactSuperblock),
}

impl SuperblockLayout {
    /// Read the version byte and decode the matching layout.
    ///
    /// Expects the signature at offset 0 of `source`; use
    /// [`hdfprobe_common::Window`] when it sits behind a user block.
    pub fn parse<S: ByteSource + ?Sized>(source: &S) -> Result<Self> {
        Self::parse_version(source, SuperblockVersion::read(source)?)
    }

    /// Decode the layout for an already read version.
    pub fn parse_version<S: ByteSource + ?Sized>(
        source: &S,
        version: SuperblockVersion,
    ) -> Result<Self> {
        tracing::debug!(version = version.as_u8(), "decoding superblock layout");

        Ok(match version {
            SuperblockVersion::V0 | SuperblockVersion::V1 => {
                SuperblockLayout::Legacy(LegacySuperblock::parse(source, version)?)
            }
            SuperblockVersion::V2 | SuperblockVersion::V3 => {
                SuperblockLayout::Compact(CompactSuperblock::parse(source, version)?)
            }
        })
    }

    /// Validate the signature, then decode the layout.
    pub fn read<S: ByteSource + ?Sized>(source: &S, label: &str) -> Result<Self> {
        signature::validate(source, label)?;
        Self::parse(source)
    }

    /// Get the superblock version.
    pub fn version(&self) -> SuperblockVersion {
        match self {
            SuperblockLayout::Legacy(sb) => sb.version,
            SuperblockLayout::Compact(sb) => sb.version,
        }
    }

    /// Get the byte width of addresses.
    pub fn size_of_offsets(&self) -> u8 {
        match self {
            SuperblockLayout::Legacy(sb) => sb.size_of_offsets,
            SuperblockLayout::Compact(sb) => sb.size_of_offsets,
        }
    }

    /// Get the byte width of lengths.
    pub fn size_of_lengths(&self) -> u8 {
        match self {
            SuperblockLayout::Legacy(sb) => sb.size_of_lengths,
            SuperblockLayout::Compact(sb) => sb.size_of_lengths,
        }
    }

    /// Get the absolute base address other addresses are relative to.
    pub fn base_address(&self) -> u64 {
        match self {
            SuperblockLayout::Legacy(sb) => sb.base_address,
            SuperblockLayout::Compact(sb) => sb.base_address,
        }
    }

    /// Get the end of file address.
    pub fn end_of_file_address(&self) -> u64 {
        match self {
            SuperblockLayout::Legacy(sb) => sb.end_of_file_address,
            SuperblockLayout::Compact(sb) => sb.end_of_file_address,
        }
    }

    /// Get the address of the root group's object header.
    pub fn root_object_header_address(&self) -> u64 {
        match self {
            SuperblockLayout::Legacy(sb) => sb.root_group.object_header_address,
            SuperblockLayout::Compact(sb) => sb.root_object_header_address,
        }
    }
}

fn check_size(field: &'static str, size: u8) -> std::result::Result<u8, DecodeError> {
    match size {
        2 | 4 | 8 | 16 | 32 => Ok(size),
        _ => Err(DecodeError::InvalidSize { field, size }),
    }
}

/// Validate the size of offsets and return it as a decode width.
fn offset_width(size: u8) -> std::result::Result<usize, DecodeError> {
    let field = "size of offsets";
    match check_size(field, size)? {
        size @ (2 | 4 | 8) => Ok(usize::from(size)),
        size => Err(DecodeError::UnsupportedSize { field, size }),
    }
}

fn node_k(field: &'static str, k: u16) -> std::result::Result<u16, DecodeError> {
    match k {
        0 => Err(DecodeError::ZeroNodeK(field)),
        k => Ok(k),
    }
}

/// The all-ones address of the given width.
#[inline]
fn undefined_address(width: usize) -> u64 {
    u64::MAX >> (64 - 8 * width)
}

fn read_address<S: ByteSource + ?Sized>(
    reader: &mut SourceReader<'_, S>,
    width: usize,
) -> Result<Option<u64>> {
    let raw = reader.read_uint(width)?;
    Ok((raw != undefined_address(width)).then_some(raw))
}

fn required_address<S: ByteSource + ?Sized>(
    reader: &mut SourceReader<'_, S>,
    width: usize,
    field: &'static str,
) -> Result<u64> {
    read_address(reader, width)?.ok_or_else(|| DecodeError::UndefinedAddress(field).into())
}

#[cfg(test)]
mod tests {
    use hdfprobe_common::{ErrorKind, Window};

    use super::*;
    use crate::{Error, SIGNATURE};

    const EOF_ADDRESS: u64 = 0x1000;
    const ROOT_HEADER: u64 = 0x60;
    const BTREE: u64 = 0x88;
    const HEAP: u64 = 0x2A8;

    fn push_uint(data: &mut Vec<u8>, value: u64, width: usize) {
        data.extend_from_slice(&value.to_le_bytes()[..width]);
    }

    fn legacy_image(version: u8, size_of_offsets: u8) -> Vec<u8> {
        let w = usize::from(size_of_offsets);
        let prefix = LegacyPrefix {
            version,
            free_space_version: 0,
            root_group_symbol_table_version: 0,
            _reserved0: 0,
            shared_header_message_version: 0,
            size_of_offsets,
            size_of_lengths: 8,
            _reserved1: 0,
            group_leaf_node_k: 4u16.to_le_bytes(),
            group_internal_node_k: 16u16.to_le_bytes(),
            file_consistency_flags: [0; 4],
        };

        let mut data = SIGNATURE.to_vec();
        data.extend_from_slice(prefix.as_bytes());
        if version == 1 {
            data.extend_from_slice(&32u16.to_le_bytes());
            data.extend_from_slice(&[0, 0]);
        }

        push_uint(&mut data, 0, w); // base
        push_uint(&mut data, u64::MAX, w); // free-space info
        push_uint(&mut data, EOF_ADDRESS, w);
        push_uint(&mut data, u64::MAX, w); // driver info

        push_uint(&mut data, 0, w); // link name offset
        push_uint(&mut data, ROOT_HEADER, w);
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&[0; 4]);
        let mut scratch = [0u8; SCRATCH_PAD_LEN];
        scratch[..w].copy_from_slice(&BTREE.to_le_bytes()[..w]);
        scratch[w..2 * w].copy_from_slice(&HEAP.to_le_bytes()[..w]);
        data.extend_from_slice(&scratch);

        data
    }

    /// Offset of the cache type field in a version 0 image with 8-byte offsets.
    const V0_CACHE_TYPE_OFFSET: usize = 24 + 4 * 8 + 2 * 8;

    fn compact_image(version: u8) -> Vec<u8> {
        let prefix = CompactPrefix {
            version,
            size_of_offsets: 8,
            size_of_lengths: 8,
            file_consistency_flags: 0,
        };

        let mut data = SIGNATURE.to_vec();
        data.extend_from_slice(prefix.as_bytes());
        for address in [0, u64::MAX, EOF_ADDRESS, ROOT_HEADER] {
            push_uint(&mut data, address, 8);
        }
        let checksum = checksum::lookup3(&data);
        data.extend_from_slice(&checksum.to_le_bytes());
        data
    }

    #[test]
    fn test_version_0() {
        let data = legacy_image(0, 8);
        let layout = SuperblockLayout::read(&data, "v0.h5").unwrap();

        let SuperblockLayout::Legacy(sb) = layout else {
            panic!("expected legacy layout, got {:?}", layout);
        };
        assert_eq!(sb.version, SuperblockVersion::V0);
        assert_eq!(sb.size_of_offsets, 8);
        assert_eq!(sb.size_of_lengths, 8);
        assert_eq!(sb.group_leaf_node_k, 4);
        assert_eq!(sb.group_internal_node_k, 16);
        assert_eq!(sb.indexed_storage_internal_node_k, None);
        assert_eq!(sb.base_address, 0);
        assert_eq!(sb.free_space_info_address, None);
        assert_eq!(sb.end_of_file_address, EOF_ADDRESS);
        assert_eq!(sb.driver_info_address, None);
        assert_eq!(
            sb.root_group,
            SymbolTableEntry {
                link_name_offset: 0,
                object_header_address: ROOT_HEADER,
                scratch_pad: ScratchPad::Group {
                    btree_address: BTREE,
                    local_heap_address: HEAP,
                },
            }
        );
        assert_eq!(layout.root_object_header_address(), ROOT_HEADER);
    }

    #[test]
    fn test_version_1_with_narrow_offsets() {
        let data = legacy_image(1, 4);
        let layout = SuperblockLayout::parse(&data).unwrap();

        assert_eq!(layout.version(), SuperblockVersion::V1);
        assert_eq!(layout.size_of_offsets(), 4);
        assert_eq!(layout.end_of_file_address(), EOF_ADDRESS);
        match layout {
            SuperblockLayout::Legacy(sb) => {
                assert_eq!(sb.indexed_storage_internal_node_k, Some(32));
                assert_eq!(
                    sb.root_group.scratch_pad,
                    ScratchPad::Group {
                        btree_address: BTREE,
                        local_heap_address: HEAP,
                    }
                );
            }
            other => panic!("expected legacy layout, got {:?}", other),
        }
    }

    #[test]
    fn test_symbolic_link_scratch_pad() {
        let mut data = legacy_image(0, 8);
        data[V0_CACHE_TYPE_OFFSET..V0_CACHE_TYPE_OFFSET + 4].copy_from_slice(&2u32.to_le_bytes());
        data[V0_CACHE_TYPE_OFFSET + 8..V0_CACHE_TYPE_OFFSET + 12]
            .copy_from_slice(&0x40u32.to_le_bytes());

        match SuperblockLayout::parse(&data).unwrap() {
            SuperblockLayout::Legacy(sb) => assert_eq!(
                sb.root_group.scratch_pad,
                ScratchPad::SymbolicLink {
                    link_value_offset: 0x40
                }
            ),
            other => panic!("expected legacy layout, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_cache_type() {
        let mut data = legacy_image(0, 8);
        data[V0_CACHE_TYPE_OFFSET..V0_CACHE_TYPE_OFFSET + 4].copy_from_slice(&7u32.to_le_bytes());

        assert!(matches!(
            SuperblockLayout::parse(&data),
            Err(Error::Decode(DecodeError::InvalidCacheType(7)))
        ));
    }

    #[test]
    fn test_versions_2_and_3() {
        for (raw, version) in [(2, SuperblockVersion::V2), (3, SuperblockVersion::V3)] {
            let data = compact_image(raw);
            let layout = SuperblockLayout::read(&data, "v2.h5").unwrap();

            let SuperblockLayout::Compact(sb) = layout else {
                panic!("expected compact layout, got {:?}", layout);
            };
            assert_eq!(sb.version, version);
            assert_eq!(sb.base_address, 0);
            assert_eq!(sb.extension_address, None);
            assert_eq!(sb.end_of_file_address, EOF_ADDRESS);
            assert_eq!(sb.root_object_header_address, ROOT_HEADER);
            assert_eq!(sb.checksum, checksum::lookup3(&data[..data.len() - 4]));
        }
    }

    #[test]
    fn test_checksum_mismatch() {
        let mut data = compact_image(2);
        data[13] ^= 0x01; // inside the base address

        assert!(matches!(
            SuperblockLayout::parse(&data),
            Err(Error::Decode(DecodeError::ChecksumMismatch { .. }))
        ));
    }

    #[test]
    fn test_unsupported_version() {
        let mut data = compact_image(2);
        data[8] = 4;

        let err = SuperblockLayout::parse(&data).unwrap_err();
        assert!(matches!(err, Error::Decode(DecodeError::UnsupportedVersion(4))));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_read_version() {
        assert_eq!(
            SuperblockVersion::read(&legacy_image(1, 8)).unwrap(),
            SuperblockVersion::V1
        );
        assert_eq!(
            SuperblockVersion::read(&compact_image(3)).unwrap(),
            SuperblockVersion::V3
        );

        let err = SuperblockVersion::read(&SIGNATURE[..]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfData);
    }

    #[test]
    fn test_size_checks() {
        let mut data = legacy_image(0, 8);
        data[13] = 3;
        assert!(matches!(
            SuperblockLayout::parse(&data),
            Err(Error::Decode(DecodeError::InvalidSize { size: 3, .. }))
        ));

        data[13] = 16;
        assert!(matches!(
            SuperblockLayout::parse(&data),
            Err(Error::Decode(DecodeError::UnsupportedSize { size: 16, .. }))
        ));

        let mut data = compact_image(3);
        data[10] = 0;
        assert!(matches!(
            SuperblockLayout::parse(&data),
            Err(Error::Decode(DecodeError::InvalidSize {
                field: "size of lengths",
                size: 0
            }))
        ));
    }

    #[test]
    fn test_zero_node_k() {
        let mut data = legacy_image(0, 8);
        data[16..18].copy_from_slice(&[0, 0]);

        assert!(matches!(
            SuperblockLayout::parse(&data),
            Err(Error::Decode(DecodeError::ZeroNodeK("group leaf node K")))
        ));
    }

    #[test]
    fn test_undefined_end_of_file() {
        let mut data = legacy_image(0, 8);
        data[40..48].copy_from_slice(&[0xFF; 8]);

        assert!(matches!(
            SuperblockLayout::parse(&data),
            Err(Error::Decode(DecodeError::UndefinedAddress("end of file address")))
        ));
    }

    #[test]
    fn test_truncated_layouts() {
        let legacy = legacy_image(0, 8);
        let compact = compact_image(2);

        for data in [&legacy[..legacy.len() - 1], &compact[..compact.len() - 1], &legacy[..9]] {
            let err = SuperblockLayout::parse(data).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfData);
        }
    }

    #[test]
    fn test_behind_user_block() {
        let mut data = vec![0u8; 512];
        data.extend_from_slice(&compact_image(2));

        let window = Window::new(&data, 512);
        let layout = SuperblockLayout::read(&window, "ub.h5").unwrap();
        assert_eq!(layout.version(), SuperblockVersion::V2);
    }

    #[test]
    fn test_undefined_address_widths() {
        assert_eq!(undefined_address(2), 0xFFFF);
        assert_eq!(undefined_address(4), 0xFFFF_FFFF);
        assert_eq!(undefined_address(8), u64::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_layout() {
        let layout = SuperblockLayout::parse(&compact_image(2)).unwrap();
        let json = serde_json::to_value(layout).unwrap();
        assert_eq!(json["Compact"]["end_of_file_address"], EOF_ADDRESS);
    }
}
