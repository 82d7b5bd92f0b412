//! Rafsuite - League of Legends RAF cache entry and texture decoding library.
//!
//! This crate provides a unified interface to the Rafsuite library ecosystem.
//!
//! # Crates
//!
//! - [`rafsuite_common`] - Common utilities (binary reading)
//! - [`rafsuite_archive`] - Cache entry records, path lists, entry kinds
//! - [`rafsuite_dds`] - DDS header parsing and DXT1/DXT3/DXT5 decompression
//!
//! # Example
//!
//! ```no_run
//! use rafsuite::prelude::*;
//!
//! let bytes = std::fs::read("Annie.dds")?;
//! let texture = decode(&bytes)?;
//!
//! println!("{} {}x{}", texture.format, texture.header.width, texture.header.height);
//! if let Some(image) = texture.image {
//!     if let Some(rgba) = image.into_rgba_image() {
//!         rgba.save("Annie.png")?;
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use rafsuite_archive as archive;
pub use rafsuite_common as common;
pub use rafsuite_dds as dds;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rafsuite_archive::{CacheEntryRecord, DecodedEntry, Entry, EntryHistory, EntryKind, PathList};
    pub use rafsuite_common::BinaryReader;
    pub use rafsuite_dds::{
        decode, DdsHeader, DecodedImage, DecodedTexture, Diagnostic, FormatError, TextureFormat,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
