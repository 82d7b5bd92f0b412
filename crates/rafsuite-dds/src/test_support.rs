//! Byte fixtures for unit tests.

use crate::flags::{CapsFlags, HeaderFlags, PixelFormatFlags};
use crate::header::FourCC;

/// Builds a 128-byte DDS header field by field.
pub(crate) struct HeaderBytes {
    flags: HeaderFlags,
    width: u32,
    height: u32,
    pitch: u32,
    mipmaps: u32,
    pf_size: u32,
    pf_flags: PixelFormatFlags,
    four_cc: FourCC,
    rgb_bit_count: u32,
    caps: u32,
}

impl HeaderBytes {
    pub(crate) fn dxt(four_cc: FourCC, width: u32, height: u32) -> Self {
        Self {
            flags: HeaderFlags::CAPS
                | HeaderFlags::HEIGHT
                | HeaderFlags::WIDTH
                | HeaderFlags::PIXELFORMAT,
            width,
            height,
            pitch: 0,
            mipmaps: 0,
            pf_size: 32,
            pf_flags: PixelFormatFlags::FOURCC,
            four_cc,
            rgb_bit_count: 0,
            caps: CapsFlags::TEXTURE.bits(),
        }
    }

    pub(crate) fn uncompressed(
        pf_flags: PixelFormatFlags,
        rgb_bit_count: u32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            pf_flags,
            rgb_bit_count,
            four_cc: FourCC([0; 4]),
            ..Self::dxt(FourCC([0; 4]), width, height)
        }
    }

    pub(crate) fn flags(mut self, flags: HeaderFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub(crate) fn pitch(mut self, pitch: u32) -> Self {
        self.pitch = pitch;
        self
    }

    pub(crate) fn mipmaps(mut self, mipmaps: u32) -> Self {
        self.mipmaps = mipmaps;
        self
    }

    pub(crate) fn pixel_format_size(mut self, size: u32) -> Self {
        self.pf_size = size;
        self
    }

    pub(crate) fn caps(mut self, caps: u32) -> Self {
        self.caps = caps;
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(128);
        out.extend_from_slice(b"DDS ");
        for value in [
            124,
            self.flags.bits(),
            self.width,
            self.height,
            self.pitch,
            0,
            self.mipmaps,
        ] {
            out.extend_from_slice(&value.to_le_bytes());
        }
        out.extend_from_slice(&[0; 44]);

        out.extend_from_slice(&self.pf_size.to_le_bytes());
        out.extend_from_slice(&self.pf_flags.bits().to_le_bytes());
        out.extend_from_slice(&self.four_cc.0);
        let masks: [u32; 4] = if self.pf_flags.contains(PixelFormatFlags::FOURCC) {
            [0; 4]
        } else {
            [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000]
        };
        out.extend_from_slice(&self.rgb_bit_count.to_le_bytes());
        for mask in masks {
            out.extend_from_slice(&mask.to_le_bytes());
        }

        out.extend_from_slice(&self.caps.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&[0; 12]);
        out
    }
}
