//! DDS header structures.
//!
//! The header is read field by field from a [`BinaryReader`] in the fixed
//! little-endian order below, 128 bytes in total:
//!
//! | Offset | Field |
//! |--------|-------|
//! | 0 | magic `"DDS "` |
//! | 4 | size (124) |
//! | 8 | flags |
//! | 12 | width |
//! | 16 | height |
//! | 20 | pitch or linear size |
//! | 24 | depth |
//! | 28 | mipmap count |
//! | 32 | 44 reserved bytes |
//! | 76 | pixel format (32 bytes) |
//! | 108 | caps |
//! | 112 | caps2 |
//! | 116 | 12 reserved bytes |

use std::fmt;

use rafsuite_common::BinaryReader;

use crate::diagnostic::{report, Diagnostic};
use crate::flags::{Caps2Flags, CapsFlags, HeaderFlags, PixelFormatFlags};
use crate::format::TextureFormat;
use crate::{FormatError, Result};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: [u8; 4] = *b"DDS ";

/// Bytes consumed by [`DdsHeader::parse`], magic included.
pub const HEADER_LEN: usize = 128;

const RESERVED1_LEN: usize = 44;
const RESERVED2_LEN: usize = 12;

/// Four-character code for compression type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// DXT1 compression (0x31545844).
    pub const DXT1: Self = Self(*b"DXT1");
    /// DXT3 compression (0x33545844).
    pub const DXT3: Self = Self(*b"DXT3");
    /// DXT5 compression (0x35545844).
    pub const DXT5: Self = Self(*b"DXT5");

    /// Build a code from its little-endian integer form.
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    /// The little-endian integer form of this code.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in &self.0 {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}

/// Channel masks of an uncompressed pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelMasks {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

/// DDS pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    /// Structure size (always 32 once parsed).
    pub size: u32,
    /// Pixel format flags.
    pub flags: PixelFormatFlags,
    /// Compression code, present iff the FOURCC flag is set.
    pub four_cc: Option<FourCC>,
    /// Bits per pixel. For DXT formats this is preset to 4 (DXT1) or 8
    /// (DXT3/DXT5) for linear size arithmetic.
    pub rgb_bit_count: u32,
    /// Channel masks, present only for uncompressed formats.
    pub masks: Option<ChannelMasks>,
}

impl PixelFormat {
    /// Expected structure size.
    pub const SIZE: u32 = 32;

    /// Whether the pixel data is block compressed (FourCC branch).
    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.four_cc.is_some()
    }

    /// Read the 32-byte pixel format block and resolve its texture format.
    fn parse(reader: &mut BinaryReader<'_>) -> Result<(Self, TextureFormat)> {
        let size = reader.read_u32()?;
        if size != Self::SIZE {
            return Err(FormatError::BadPixelFormatSize(size));
        }

        let flags = PixelFormatFlags::from_bits_retain(reader.read_u32()?);

        if flags.contains(PixelFormatFlags::FOURCC) {
            let four_cc = FourCC::from_u32(reader.read_u32()?);
            reader.skip(20)?;

            let format = TextureFormat::resolve(flags, Some(four_cc), 0);
            let pixel_format = Self {
                size,
                flags,
                four_cc: Some(four_cc),
                rgb_bit_count: format.compressed_bit_count().unwrap_or(0),
                masks: None,
            };
            tracing::debug!(%four_cc, %format, "compressed pixel format");
            Ok((pixel_format, format))
        } else {
            reader.skip(4)?;
            let rgb_bit_count = reader.read_u32()?;
            let masks = ChannelMasks {
                r: reader.read_u32()?,
                g: reader.read_u32()?,
                b: reader.read_u32()?,
                a: reader.read_u32()?,
            };

            let format = TextureFormat::resolve(flags, None, rgb_bit_count);
            let pixel_format = Self {
                size,
                flags,
                four_cc: None,
                rgb_bit_count,
                masks: Some(masks),
            };
            tracing::debug!(rgb_bit_count, %format, "uncompressed pixel format");
            Ok((pixel_format, format))
        }
    }

    /// The pitch or linear size a header with these dimensions should carry.
    ///
    /// Compressed: total level-0 size. Uncompressed: one row in bytes.
    pub fn expected_pitch(&self, width: u32, height: u32) -> u32 {
        let size = if self.is_compressed() {
            u64::from(width.div_ceil(4))
                .saturating_mul(u64::from(height.div_ceil(4)))
                .saturating_mul(u64::from(self.rgb_bit_count))
                .saturating_mul(2)
        } else {
            u64::from(self.rgb_bit_count / 8) * u64::from(width)
        };
        u32::try_from(size).unwrap_or(u32::MAX)
    }
}

/// DDS file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeader {
    /// Magic tag, always `"DDS "` (0x20534444) once parsed.
    pub magic: u32,
    /// Header size (should be 124, not validated).
    pub size: u32,
    /// Header flags.
    pub flags: HeaderFlags,
    /// Image width.
    pub width: u32,
    /// Image height.
    pub height: u32,
    /// Pitch or linear size, filled in when the file stored zero.
    pub pitch_or_linear_size: u32,
    /// Depth (for volume textures).
    pub depth: u32,
    /// Number of mipmap levels after reconciliation.
    pub mipmap_count: u32,
    /// Pixel format.
    pub pixel_format: PixelFormat,
    /// Surface capabilities.
    pub caps: u32,
    /// Surface capabilities 2.
    pub caps2: u32,
}

/// A parsed header together with what was derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub header: DdsHeader,
    pub format: TextureFormat,
    pub diagnostics: Vec<Diagnostic>,
}

impl DdsHeader {
    /// Expected header size.
    pub const SIZE: u32 = 124;

    /// Parse the 128-byte header at the reader's position.
    ///
    /// On success the reader sits at the first byte of pixel data. Pitch and
    /// mipmap count are reconciled against the dimensions; disagreements
    /// are returned as diagnostics rather than errors.
    pub fn parse(reader: &mut BinaryReader<'_>) -> Result<ParsedHeader> {
        let magic = reader.read_array::<4>()?;
        if magic != DDS_MAGIC {
            return Err(FormatError::BadMagic(magic));
        }

        let size = reader.read_u32()?;
        let flags = HeaderFlags::from_bits_retain(reader.read_u32()?);
        let width = reader.read_u32()?;
        let height = reader.read_u32()?;
        let pitch_or_linear_size = reader.read_u32()?;
        let depth = reader.read_u32()?;
        let mipmap_count = reader.read_u32()?;
        reader.skip(RESERVED1_LEN)?;

        tracing::debug!(size, ?flags, width, height, mipmap_count, "DDS header");

        let (pixel_format, format) = PixelFormat::parse(reader)?;

        let caps = reader.read_u32()?;
        let caps2 = reader.read_u32()?;
        reader.skip(RESERVED2_LEN)?;

        if !CapsFlags::from_bits_retain(caps).contains(CapsFlags::TEXTURE) {
            return Err(FormatError::UnsupportedCaps(caps));
        }

        let builder = HeaderBuilder {
            magic: u32::from_le_bytes(magic),
            size,
            flags,
            width,
            height,
            pitch_or_linear_size,
            depth,
            mipmap_count,
            pixel_format,
            format,
            caps,
            caps2,
        };
        Ok(builder.build())
    }

    /// Capability flags derived from `caps`.
    #[inline]
    pub fn caps_flags(&self) -> CapsFlags {
        CapsFlags::from_bits_retain(self.caps)
    }

    /// Capability flags derived from `caps2`.
    #[inline]
    pub fn caps2_flags(&self) -> Caps2Flags {
        Caps2Flags::from_bits_retain(self.caps2)
    }

    /// Check if this is a cubemap.
    pub fn is_cubemap(&self) -> bool {
        self.caps2_flags().contains(Caps2Flags::CUBEMAP)
    }
}

/// Full mip chain length for the given dimensions:
/// `1 + ceil(log2(max(width, height)))`, or 1 for an empty surface.
pub fn expected_mipmap_count(width: u32, height: u32) -> u32 {
    let largest = width.max(height);
    if largest <= 1 {
        1
    } else {
        1 + (u32::BITS - (largest - 1).leading_zeros())
    }
}

/// Raw header values read from the buffer, not yet reconciled.
struct HeaderBuilder {
    magic: u32,
    size: u32,
    flags: HeaderFlags,
    width: u32,
    height: u32,
    pitch_or_linear_size: u32,
    depth: u32,
    mipmap_count: u32,
    pixel_format: PixelFormat,
    format: TextureFormat,
    caps: u32,
    caps2: u32,
}

impl HeaderBuilder {
    fn build(self) -> ParsedHeader {
        let mut diagnostics = Vec::new();

        if self.format == TextureFormat::Unknown {
            report(
                &mut diagnostics,
                Diagnostic::UnknownFormat {
                    four_cc: self.pixel_format.four_cc,
                    flags: self.pixel_format.flags,
                },
            );
        }

        let mut pitch_or_linear_size = self.pitch_or_linear_size;
        if self.flags.contains(HeaderFlags::LINEARSIZE) {
            let expected = self.pixel_format.expected_pitch(self.width, self.height);
            if pitch_or_linear_size == 0 {
                pitch_or_linear_size = expected;
            } else if pitch_or_linear_size != expected {
                report(
                    &mut diagnostics,
                    Diagnostic::PitchMismatch {
                        stored: pitch_or_linear_size,
                        expected,
                    },
                );
            }
        }

        // A MIPMAP capability forces a single level.
        let expected = expected_mipmap_count(self.width, self.height);
        let mipmap_count = if CapsFlags::from_bits_retain(self.caps).contains(CapsFlags::MIPMAP) {
            1
        } else if !self.flags.contains(HeaderFlags::MIPMAPCOUNT) {
            expected
        } else {
            if self.mipmap_count != expected {
                report(
                    &mut diagnostics,
                    Diagnostic::MipMapCountMismatch {
                        declared: self.mipmap_count,
                        expected,
                    },
                );
            }
            self.mipmap_count
        };

        let header = DdsHeader {
            magic: self.magic,
            size: self.size,
            flags: self.flags,
            width: self.width,
            height: self.height,
            pitch_or_linear_size,
            depth: self.depth,
            mipmap_count,
            pixel_format: self.pixel_format,
            caps: self.caps,
            caps2: self.caps2,
        };

        ParsedHeader {
            header,
            format: self.format,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::HeaderBytes;

    fn parse(bytes: &[u8]) -> Result<ParsedHeader> {
        DdsHeader::parse(&mut BinaryReader::new(bytes))
    }

    #[test]
    fn test_fields_at_fixed_offsets() {
        let bytes = HeaderBytes::dxt(FourCC::DXT1, 64, 32)
            .mipmaps(7)
            .build();
        let parsed = parse(&bytes).unwrap();

        let read = |offset: usize| u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap());
        assert_eq!(parsed.header.width, read(12));
        assert_eq!(parsed.header.height, read(16));
        assert_eq!(parsed.header.mipmap_count, read(28));
        assert_eq!(parsed.header.magic, 0x20534444);
        assert_eq!(parsed.header.size, DdsHeader::SIZE);
        assert_eq!(parsed.format, TextureFormat::Dxt1);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_reader_ends_after_header() {
        let mut bytes = HeaderBytes::dxt(FourCC::DXT5, 4, 4).build();
        bytes.extend_from_slice(&[0xAA; 16]);

        let mut reader = BinaryReader::new(&bytes);
        DdsHeader::parse(&mut reader).unwrap();
        assert_eq!(reader.position(), HEADER_LEN);
        assert_eq!(reader.remaining(), 16);
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = HeaderBytes::dxt(FourCC::DXT1, 4, 4).build();
        bytes[..4].copy_from_slice(b"PNG ");
        assert!(matches!(parse(&bytes), Err(FormatError::BadMagic(m)) if &m == b"PNG "));
    }

    #[test]
    fn test_bad_pixel_format_size() {
        let bytes = HeaderBytes::dxt(FourCC::DXT1, 4, 4)
            .pixel_format_size(16)
            .build();
        assert!(matches!(
            parse(&bytes),
            Err(FormatError::BadPixelFormatSize(16))
        ));
    }

    #[test]
    fn test_texture_cap_required() {
        let bytes = HeaderBytes::dxt(FourCC::DXT1, 4, 4).caps(0).build();
        assert!(matches!(parse(&bytes), Err(FormatError::UnsupportedCaps(0))));
    }

    #[test]
    fn test_truncated_header() {
        let bytes = HeaderBytes::dxt(FourCC::DXT1, 4, 4).build();
        for len in [0, 3, 20, 80, 127] {
            assert!(
                matches!(
                    parse(&bytes[..len]),
                    Err(FormatError::BufferTooShort { .. })
                ),
                "length {len} should be too short"
            );
        }
    }

    #[test]
    fn test_linear_size_written_back() {
        let bytes = HeaderBytes::dxt(FourCC::DXT5, 10, 6)
            .flags(HeaderFlags::LINEARSIZE)
            .build();
        let parsed = parse(&bytes).unwrap();

        // ceil(10/4) * ceil(6/4) blocks of 16 bytes
        assert_eq!(parsed.header.pitch_or_linear_size, 3 * 2 * 16);
        assert_eq!(parsed.header.pixel_format.rgb_bit_count, 8);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_linear_size_saturates() {
        let bytes = HeaderBytes::dxt(FourCC::DXT5, u32::MAX, u32::MAX)
            .flags(HeaderFlags::LINEARSIZE)
            .build();
        let parsed = parse(&bytes).unwrap();

        assert_eq!(parsed.header.pitch_or_linear_size, u32::MAX);
        assert_eq!(parsed.header.mipmap_count, 33);
    }

    #[test]
    fn test_linear_size_mismatch_is_kept() {
        let bytes = HeaderBytes::dxt(FourCC::DXT1, 8, 8)
            .flags(HeaderFlags::LINEARSIZE)
            .pitch(999)
            .build();
        let parsed = parse(&bytes).unwrap();

        assert_eq!(parsed.header.pitch_or_linear_size, 999);
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::PitchMismatch {
                stored: 999,
                expected: 32
            }]
        );
    }

    #[test]
    fn test_uncompressed_row_pitch() {
        let bytes = HeaderBytes::uncompressed(PixelFormatFlags::RGB | PixelFormatFlags::ALPHAPIXELS, 32, 16, 16)
            .flags(HeaderFlags::LINEARSIZE)
            .build();
        let parsed = parse(&bytes).unwrap();

        assert_eq!(parsed.format, TextureFormat::Rgba8);
        assert_eq!(parsed.header.pitch_or_linear_size, 64);
        assert_eq!(
            parsed.header.pixel_format.masks,
            Some(ChannelMasks {
                r: 0x00FF_0000,
                g: 0x0000_FF00,
                b: 0x0000_00FF,
                a: 0xFF00_0000,
            })
        );
    }

    #[test]
    fn test_mipmap_count_computed_when_undeclared() {
        let bytes = HeaderBytes::dxt(FourCC::DXT1, 256, 64).mipmaps(0).build();
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.header.mipmap_count, 9);
    }

    #[test]
    fn test_declared_mipmap_count_mismatch_is_kept() {
        let bytes = HeaderBytes::dxt(FourCC::DXT1, 256, 256)
            .flags(HeaderFlags::MIPMAPCOUNT)
            .mipmaps(4)
            .build();
        let parsed = parse(&bytes).unwrap();

        assert_eq!(parsed.header.mipmap_count, 4);
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::MipMapCountMismatch {
                declared: 4,
                expected: 9
            }]
        );
    }

    #[test]
    fn test_mipmap_cap_forces_single_level() {
        let bytes = HeaderBytes::dxt(FourCC::DXT1, 256, 256)
            .flags(HeaderFlags::MIPMAPCOUNT)
            .mipmaps(9)
            .caps((CapsFlags::TEXTURE | CapsFlags::MIPMAP | CapsFlags::COMPLEX).bits())
            .build();
        let parsed = parse(&bytes).unwrap();

        assert_eq!(parsed.header.mipmap_count, 1);
        assert!(parsed.header.caps_flags().contains(CapsFlags::MIPMAP));
    }

    #[test]
    fn test_unknown_fourcc_is_not_fatal() {
        let bytes = HeaderBytes::dxt(FourCC(*b"ATI2"), 16, 16).build();
        let parsed = parse(&bytes).unwrap();

        assert_eq!(parsed.format, TextureFormat::Unknown);
        assert_eq!(parsed.header.width, 16);
        assert!(matches!(
            parsed.diagnostics.as_slice(),
            [Diagnostic::UnknownFormat {
                four_cc: Some(FourCC(code)),
                ..
            }] if code == b"ATI2"
        ));
    }

    #[test]
    fn test_expected_mipmap_count() {
        assert_eq!(expected_mipmap_count(0, 0), 1);
        assert_eq!(expected_mipmap_count(1, 1), 1);
        assert_eq!(expected_mipmap_count(2, 1), 2);
        assert_eq!(expected_mipmap_count(5, 5), 4);
        assert_eq!(expected_mipmap_count(512, 256), 10);
        assert_eq!(expected_mipmap_count(513, 1), 11);
    }

    #[test]
    fn test_fourcc_display() {
        assert_eq!(FourCC::DXT1.to_string(), "DXT1");
        assert_eq!(FourCC::DXT5.as_u32(), 0x35545844);
        assert_eq!(FourCC::from_u32(0x33545844), FourCC::DXT3);
        assert_eq!(FourCC([b'A', 0, b'B', 0xFF]).to_string(), "A\\x00B\\xff");
    }
}
