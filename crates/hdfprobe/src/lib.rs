//! hdfprobe - HDF5 header introspection.
//!
//! This crate ties the hdfprobe crates together: it turns a path into a byte
//! source, checks the HDF5 signature and decodes the superblock, without
//! linking the HDF5 reference library.
//!
//! # Crates
//!
//! - [`hdfprobe_common`] - Byte sources, positioned reading, lookup3
//! - [`hdfprobe_superblock`] - Signature check, base and versioned superblocks
//!
//! # Example
//!
//! ```no_run
//! use hdfprobe::prelude::*;
//!
//! let options = ProbeOptions::default().decode_layout(true);
//! let probe = probe_file("sample/e300.h5", &options)?;
//!
//! println!("superblock version: {}", probe.version.as_u8());
//! if let Some(base) = probe.superblock {
//!     println!("size of offsets: {}", base.size_of_offsets);
//! }
//! if let Some(layout) = probe.layout {
//!     println!("end of file: {:#x}", layout.end_of_file_address());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use hdfprobe_common as common;
pub use hdfprobe_superblock as superblock;

pub mod logging;
mod probe;

pub use probe::{probe_file, probe_source, Backing, Probe, ProbeOptions};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::logging::init_logging;
    pub use crate::{probe_file, probe_source, Backing, Probe, ProbeOptions};
    pub use hdfprobe_common::{load_file, ByteSource, ErrorKind, FileSource, MmapSource, Window};
    pub use hdfprobe_superblock::{
        locate, validate, Superblock, SuperblockLayout, SuperblockVersion,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
