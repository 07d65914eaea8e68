//! Probe orchestration: byte source, signature, superblock.

use std::path::Path;

use hdfprobe_common::{load_file, ByteSource, FileSource, MmapSource, Window};
use hdfprobe_superblock::{
    locate, validate, Result, Superblock, SuperblockLayout, SuperblockVersion,
};

/// How a path is turned into a byte source.
///
/// Results are identical across backings; only I/O behavior differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backing {
    /// Read the whole file into memory first.
    #[default]
    Memory,
    /// Seek and read through an open file handle.
    File,
    /// Memory-map the file.
    Mmap,
}

/// Probe configuration.
#[derive(Debug, Clone, Default)]
pub struct ProbeOptions {
    /// Byte source backing used by [`probe_file`].
    pub backing: Backing,
    /// Search for the signature behind a user block (offsets 512, 1024, ...).
    pub locate_signature: bool,
    /// Also decode the per-version superblock layout.
    pub decode_layout: bool,
}

impl ProbeOptions {
    /// Set the byte source backing.
    pub fn backing(mut self, backing: Backing) -> Self {
        self.backing = backing;
        self
    }

    /// Enable or disable the user block search.
    pub fn locate_signature(mut self, enabled: bool) -> Self {
        self.locate_signature = enabled;
        self
    }

    /// Enable or disable layout decoding.
    pub fn decode_layout(mut self, enabled: bool) -> Self {
        self.decode_layout = enabled;
        self
    }
}

/// Result of a successful probe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Probe {
    /// Label used in diagnostics, usually the file path.
    pub label: String,
    /// Offset of the signature in the source.
    pub signature_offset: u64,
    /// Version byte that selected the decoders.
    pub version: SuperblockVersion,
    /// Base field table values; only version 0 headers carry them.
    pub superblock: Option<Superblock>,
    /// Per-version layout, if requested.
    pub layout: Option<SuperblockLayout>,
}

/// Probe an already opened byte source.
///
/// Runs the signature check and reads the version byte. A version 0 header
/// then gets the base field table decode, and the layout decode runs if
/// enabled. An unknown version or the first failure ends the probe.
pub fn probe_source<S: ByteSource + ?Sized>(
    source: &S,
    label: &str,
    options: &ProbeOptions,
) -> Result<Probe> {
    // Without a hit, validate at 0 so the error reflects the leading bytes.
    let signature_offset = if options.locate_signature {
        locate(source)?.unwrap_or(0)
    } else {
        0
    };
    let view = Window::new(source, signature_offset);

    validate(&view, label)?;
    let version = SuperblockVersion::read(&view)?;
    let superblock = match version {
        SuperblockVersion::V0 => Some(Superblock::parse(&view)?),
        _ => None,
    };
    let layout = if options.decode_layout {
        Some(SuperblockLayout::parse_version(&view, version)?)
    } else {
        None
    };

    tracing::debug!(
        label,
        signature_offset,
        version = version.as_u8(),
        base = superblock.is_some(),
        layout = layout.is_some(),
        "probed superblock"
    );

    Ok(Probe {
        label: label.to_string(),
        signature_offset,
        version,
        superblock,
        layout,
    })
}

/// Open a file with the configured backing and probe it.
///
/// The displayed path is used as the label.
pub fn probe_file<P: AsRef<Path>>(path: P, options: &ProbeOptions) -> Result<Probe> {
    let path = path.as_ref();
    let label = path.display().to_string();

    match options.backing {
        Backing::Memory => probe_source(&load_file(path)?, &label, options),
        Backing::File => probe_source(&FileSource::open(path)?, &label, options),
        Backing::Mmap => probe_source(&MmapSource::open(path)?, &label, options),
    }
}
