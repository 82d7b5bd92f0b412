//! DDS texture decoding for League of Legends cache entries.
//!
//! A DDS file is a 128-byte little-endian header followed by pixel data.
//! This crate parses the header, resolves the pixel format, sizes the mip
//! chain and decompresses level 0 of DXT1/DXT3/DXT5 textures to RGBA8.
//!
//! # Example
//!
//! ```no_run
//! let bytes = std::fs::read("texture.dds")?;
//! let texture = rafsuite_dds::decode(&bytes)?;
//!
//! for diagnostic in &texture.diagnostics {
//!     eprintln!("warning: {diagnostic}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod block;
mod decode;
mod diagnostic;
mod error;
mod flags;
mod format;
mod header;
mod mipmap;
mod surface;

#[cfg(test)]
mod test_support;

pub use block::{color_palette, interpolated_alpha, rgb565_to_rgb888, BlockFormat, BlockTexels, Texel};
pub use decode::{decode, DecodedTexture};
pub use diagnostic::Diagnostic;
pub use error::{FormatError, Result};
pub use flags::{Caps2Flags, CapsFlags, HeaderFlags, PixelFormatFlags};
pub use format::TextureFormat;
pub use header::{
    expected_mipmap_count, ChannelMasks, DdsHeader, FourCC, ParsedHeader, PixelFormat, DDS_MAGIC,
    HEADER_LEN,
};
pub use mipmap::MipmapSizeTable;
pub use surface::DecodedImage;
