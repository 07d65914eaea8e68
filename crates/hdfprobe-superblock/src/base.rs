//! Base superblock: the version-0 field table.
//!
//! Six fields at fixed offsets, each stored as a 2-byte big-endian unsigned
//! integer:
//!
//! | field                             | offset | width |
//! |-----------------------------------|--------|-------|
//! | superblock version                | 8      | 2     |
//! | free-space storage version        | 10     | 2     |
//! | root group symbol table version   | 12     | 2     |
//! | shared header message version     | 16     | 2     |
//! | size of offsets                   | 18     | 2     |
//! | size of lengths                   | 20     | 2     |
//!
//! Bytes 14..16 are not part of the table and are skipped. The table only
//! describes version 0 headers: [`Superblock::read`] refuses any other
//! version byte, and [`crate::SuperblockLayout`] decodes the per-version
//! layouts.

use hdfprobe_common::ByteSource;

use crate::field::FieldSpec;
use crate::{signature, DecodeError, Result, SuperblockVersion};

/// Number of bytes the base table needs, signature included.
pub const BASE_HEADER_LEN: u64 = 22;

/// A field of the base superblock record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseField {
    SuperblockVersion,
    FreeSpaceStorageVersion,
    RootGroupSymbolTableVersion,
    SharedHeaderMessageVersion,
    SizeOfOffsets,
    SizeOfLengths,
}

impl BaseField {
    /// Number of fields in the record.
    pub const COUNT: usize = 6;

    /// All fields in table order.
    pub const ALL: [BaseField; Self::COUNT] = [
        BaseField::SuperblockVersion,
        BaseField::FreeSpaceStorageVersion,
        BaseField::RootGroupSymbolTableVersion,
        BaseField::SharedHeaderMessageVersion,
        BaseField::SizeOfOffsets,
        BaseField::SizeOfLengths,
    ];

    /// Field name, for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            BaseField::SuperblockVersion => "superblock version",
            BaseField::FreeSpaceStorageVersion => "free-space storage version",
            BaseField::RootGroupSymbolTableVersion => "root group symbol table version",
            BaseField::SharedHeaderMessageVersion => "shared header message version",
            BaseField::SizeOfOffsets => "size of offsets",
            BaseField::SizeOfLengths => "size of lengths",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// The base field table, in decode order.
pub const BASE_FIELD_TABLE: [FieldSpec<BaseField>; BaseField::COUNT] = [
    FieldSpec::big_endian(BaseField::SuperblockVersion, 8, 2),
    FieldSpec::big_endian(BaseField::FreeSpaceStorageVersion, 10, 2),
    FieldSpec::big_endian(BaseField::RootGroupSymbolTableVersion, 12, 2),
    FieldSpec::big_endian(BaseField::SharedHeaderMessageVersion, 16, 2),
    FieldSpec::big_endian(BaseField::SizeOfOffsets, 18, 2),
    FieldSpec::big_endian(BaseField::SizeOfLengths, 20, 2),
];

/// Decoded base superblock.
///
/// Only ever built complete: if any field fails to decode, no value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Superblock {
    /// Format revision of this header.
    pub superblock_version: u32,
    /// Version of free-space bookkeeping.
    pub free_space_storage_version: u32,
    /// Version of the root entry layout.
    pub root_group_symbol_table_version: u32,
    /// Version of the shared message format.
    pub shared_header_message_version: u32,
    /// Byte width of address fields elsewhere in the file.
    pub size_of_offsets: u32,
    /// Byte width of length fields elsewhere in the file.
    pub size_of_lengths: u32,
}

impl Superblock {
    /// Decode the base field table from a source.
    ///
    /// Rows are read in table order. The first failing row aborts the whole
    /// decode; nothing partially decoded is returned.
    pub fn parse<S: ByteSource + ?Sized>(source: &S) -> Result<Self> {
        let mut staging = Staging::default();

        for row in &BASE_FIELD_TABLE {
            let raw = row.read(source)?;
            // Two bytes always fit; a wider row would need a wider record.
            let value = u16::try_from(raw).map_err(|_| DecodeError::FieldWidth {
                offset: row.offset,
                width: row.width,
            })?;
            tracing::trace!(field = row.field.name(), offset = row.offset, value, "decoded field");
            staging.set(row.field, u32::from(value));
        }

        staging.freeze()
    }

    /// Validate the signature, check for a version 0 header, then decode
    /// the base field table.
    ///
    /// Any other version fails with [`DecodeError::UnsupportedVersion`]
    /// before a field is read.
    pub fn read<S: ByteSource + ?Sized>(source: &S, label: &str) -> Result<Self> {
        signature::validate(source, label)?;
        match SuperblockVersion::read(source)? {
            SuperblockVersion::V0 => Self::parse(source),
            other => Err(DecodeError::UnsupportedVersion(other.as_u8()).into()),
        }
    }

    /// Get a field by name.
    pub fn get(&self, field: BaseField) -> u32 {
        match field {
            BaseField::SuperblockVersion => self.superblock_version,
            BaseField::FreeSpaceStorageVersion => self.free_space_storage_version,
            BaseField::RootGroupSymbolTableVersion => self.root_group_symbol_table_version,
            BaseField::SharedHeaderMessageVersion => self.shared_header_message_version,
            BaseField::SizeOfOffsets => self.size_of_offsets,
            BaseField::SizeOfLengths => self.size_of_lengths,
        }
    }
}

/// Private staging area for a decode in progress.
#[derive(Default)]
struct Staging {
    values: [Option<u32>; BaseField::COUNT],
}

impl Staging {
    #[inline]
    fn set(&mut self, field: BaseField, value: u32) {
        self.values[field.index()] = Some(value);
    }

    fn take(&self, field: BaseField) -> Result<u32> {
        self.values[field.index()].ok_or_else(|| DecodeError::MissingField(field.name()).into())
    }

    fn freeze(self) -> Result<Superblock> {
        Ok(Superblock {
            superblock_version: self.take(BaseField::SuperblockVersion)?,
            free_space_storage_version: self.take(BaseField::FreeSpaceStorageVersion)?,
            root_group_symbol_table_version: self.take(BaseField::RootGroupSymbolTableVersion)?,
            shared_header_message_version: self.take(BaseField::SharedHeaderMessageVersion)?,
            size_of_offsets: self.take(BaseField::SizeOfOffsets)?,
            size_of_lengths: self.take(BaseField::SizeOfLengths)?,
        })
    }
}
