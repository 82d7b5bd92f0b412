//! Texture format resolution.

use std::fmt;

use crate::block::BlockFormat;
use crate::flags::PixelFormatFlags;
use crate::header::FourCC;

/// The pixel layout a DDS header resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    Dxt1,
    Dxt3,
    Dxt5,
    Rgb8,
    Rgba8,
    Luminance4,
    Luminance8,
    Luminance12,
    Luminance16,
    Alpha4,
    Alpha8,
    Alpha12,
    Alpha16,
    Unknown,
}

impl TextureFormat {
    /// Resolve a format from the pixel format flags, FourCC and bit count.
    ///
    /// FourCC codes other than DXT1/DXT3/DXT5, and flag combinations with
    /// no matching layout, resolve to [`TextureFormat::Unknown`].
    pub fn resolve(flags: PixelFormatFlags, four_cc: Option<FourCC>, rgb_bit_count: u32) -> Self {
        if flags.contains(PixelFormatFlags::FOURCC) {
            return match four_cc {
                Some(FourCC::DXT1) => Self::Dxt1,
                Some(FourCC::DXT3) => Self::Dxt3,
                Some(FourCC::DXT5) => Self::Dxt5,
                _ => Self::Unknown,
            };
        }

        if flags.contains(PixelFormatFlags::RGB) {
            if flags.contains(PixelFormatFlags::ALPHAPIXELS) {
                Self::Rgba8
            } else {
                Self::Rgb8
            }
        } else if flags.contains(PixelFormatFlags::LUMINANCE) {
            match rgb_bit_count {
                4 => Self::Luminance4,
                8 => Self::Luminance8,
                12 => Self::Luminance12,
                16 => Self::Luminance16,
                _ => Self::Unknown,
            }
        } else if flags.contains(PixelFormatFlags::ALPHA) {
            match rgb_bit_count {
                4 => Self::Alpha4,
                8 => Self::Alpha8,
                12 => Self::Alpha12,
                16 => Self::Alpha16,
                _ => Self::Unknown,
            }
        } else {
            Self::Unknown
        }
    }

    /// The block decompressor for this format, if pixel decoding is supported.
    pub fn block_format(self) -> Option<BlockFormat> {
        match self {
            Self::Dxt1 => Some(BlockFormat::Dxt1),
            Self::Dxt3 => Some(BlockFormat::Dxt3),
            Self::Dxt5 => Some(BlockFormat::Dxt5),
            _ => None,
        }
    }

    /// The bit count used in linear size arithmetic for block formats.
    ///
    /// Doubled, this is the byte size of one 4x4 block.
    pub fn compressed_bit_count(self) -> Option<u32> {
        match self {
            Self::Dxt1 => Some(4),
            Self::Dxt3 | Self::Dxt5 => Some(8),
            _ => None,
        }
    }

    /// Whether the texture stores a single luminance or alpha channel.
    pub fn is_grayscale_or_alpha(self) -> bool {
        matches!(
            self,
            Self::Luminance4
                | Self::Luminance8
                | Self::Luminance12
                | Self::Luminance16
                | Self::Alpha4
                | Self::Alpha8
                | Self::Alpha12
                | Self::Alpha16
        )
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dxt1 => "DXT1",
            Self::Dxt3 => "DXT3",
            Self::Dxt5 => "DXT5",
            Self::Rgb8 => "RGB8",
            Self::Rgba8 => "RGBA8",
            Self::Luminance4 => "LUMINANCE4",
            Self::Luminance8 => "LUMINANCE8",
            Self::Luminance12 => "LUMINANCE12",
            Self::Luminance16 => "LUMINANCE16",
            Self::Alpha4 => "ALPHA4",
            Self::Alpha8 => "ALPHA8",
            Self::Alpha12 => "ALPHA12",
            Self::Alpha16 => "ALPHA16",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourcc_formats() {
        let flags = PixelFormatFlags::FOURCC;
        assert_eq!(TextureFormat::resolve(flags, Some(FourCC::DXT1), 0), TextureFormat::Dxt1);
        assert_eq!(TextureFormat::resolve(flags, Some(FourCC::DXT3), 0), TextureFormat::Dxt3);
        assert_eq!(TextureFormat::resolve(flags, Some(FourCC::DXT5), 0), TextureFormat::Dxt5);

        // DXT1 with the alpha flag is still DXT1.
        assert_eq!(
            TextureFormat::resolve(flags | PixelFormatFlags::ALPHAPIXELS, Some(FourCC::DXT1), 0),
            TextureFormat::Dxt1
        );
    }

    #[test]
    fn test_unknown_fourcc() {
        let format = TextureFormat::resolve(PixelFormatFlags::FOURCC, Some(FourCC(*b"ATI2")), 0);
        assert_eq!(format, TextureFormat::Unknown);
        assert!(format.block_format().is_none());
    }

    #[test]
    fn test_uncompressed_formats() {
        let rgb = PixelFormatFlags::RGB;
        assert_eq!(TextureFormat::resolve(rgb, None, 24), TextureFormat::Rgb8);
        assert_eq!(
            TextureFormat::resolve(rgb | PixelFormatFlags::ALPHAPIXELS, None, 32),
            TextureFormat::Rgba8
        );
        assert_eq!(
            TextureFormat::resolve(PixelFormatFlags::LUMINANCE, None, 8),
            TextureFormat::Luminance8
        );
        assert_eq!(
            TextureFormat::resolve(PixelFormatFlags::ALPHA, None, 16),
            TextureFormat::Alpha16
        );
    }

    #[test]
    fn test_unmatched_combinations() {
        assert_eq!(
            TextureFormat::resolve(PixelFormatFlags::LUMINANCE, None, 24),
            TextureFormat::Unknown
        );
        assert_eq!(
            TextureFormat::resolve(PixelFormatFlags::YUV, None, 16),
            TextureFormat::Unknown
        );
        assert_eq!(
            TextureFormat::resolve(PixelFormatFlags::empty(), None, 0),
            TextureFormat::Unknown
        );
    }

    #[test]
    fn test_grayscale_or_alpha() {
        assert!(TextureFormat::Luminance12.is_grayscale_or_alpha());
        assert!(TextureFormat::Alpha4.is_grayscale_or_alpha());
        assert!(!TextureFormat::Rgba8.is_grayscale_or_alpha());
        assert!(!TextureFormat::Dxt5.is_grayscale_or_alpha());
    }

    #[test]
    fn test_compressed_bit_count() {
        assert_eq!(TextureFormat::Dxt1.compressed_bit_count(), Some(4));
        assert_eq!(TextureFormat::Dxt5.compressed_bit_count(), Some(8));
        assert_eq!(TextureFormat::Rgb8.compressed_bit_count(), None);
    }
}
