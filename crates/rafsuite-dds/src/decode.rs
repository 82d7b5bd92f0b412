//! The full decode pipeline: header, format, mip table, level-0 pixels.

use rafsuite_common::BinaryReader;

use crate::diagnostic::Diagnostic;
use crate::format::TextureFormat;
use crate::header::{DdsHeader, ParsedHeader, HEADER_LEN};
use crate::mipmap::MipmapSizeTable;
use crate::surface::DecodedImage;
use crate::Result;

/// Everything recovered from one DDS buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTexture {
    /// The reconciled header.
    pub header: DdsHeader,
    /// The resolved texture format.
    pub format: TextureFormat,
    /// Byte size of each mip level.
    pub mipmap_sizes: MipmapSizeTable,
    /// Level 0 pixels, present when the format has a block decompressor.
    pub image: Option<DecodedImage>,
    /// Inconsistencies found in the header.
    pub diagnostics: Vec<Diagnostic>,
}

impl DecodedTexture {
    /// Split into the header and the optional image.
    pub fn into_parts(self) -> (DdsHeader, Option<DecodedImage>) {
        (self.header, self.image)
    }
}

/// Decode one DDS file held in memory.
///
/// Fatal problems (bad magic, bad pixel format size, missing TEXTURE cap,
/// short buffer) abort with an error. Pixel data is decoded only for
/// DXT1/DXT3/DXT5; other formats return the header without an image.
///
/// # Example
///
/// ```no_run
/// let bytes = std::fs::read("texture.dds")?;
/// let texture = rafsuite_dds::decode(&bytes)?;
///
/// if let Some(image) = &texture.image {
///     println!("{}x{} {}", image.width(), image.height(), texture.format);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(len = data.len()))]
pub fn decode(data: &[u8]) -> Result<DecodedTexture> {
    let mut reader = BinaryReader::new(data);
    let ParsedHeader {
        header,
        format,
        diagnostics,
    } = DdsHeader::parse(&mut reader)?;
    debug_assert_eq!(reader.position(), HEADER_LEN);

    let mipmap_sizes = MipmapSizeTable::new(
        header.width,
        header.height,
        header.mipmap_count,
        header.pixel_format.is_compressed(),
        header.pixel_format.rgb_bit_count,
    );

    let image = match format.block_format() {
        Some(block_format) => Some(block_format.decompress(
            reader.remaining_bytes(),
            header.width,
            header.height,
        )?),
        None => {
            tracing::debug!(%format, "no decompressor, pixel data left undecoded");
            None
        }
    };

    Ok(DecodedTexture {
        header,
        format,
        mipmap_sizes,
        image,
        diagnostics,
    })
}
