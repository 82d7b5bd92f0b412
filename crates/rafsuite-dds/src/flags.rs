//! Bit-flag sets for the DDS header, pixel format and caps fields.
//!
//! Each set decodes from its raw integer with `from_bits_retain` and encodes
//! back with `bits()`, so unknown bits survive a round trip.

use bitflags::bitflags;

bitflags! {
    /// `DDS_HEADER.dwFlags`: which header members hold valid data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HeaderFlags: u32 {
        const CAPS = 0x1;
        const HEIGHT = 0x2;
        const WIDTH = 0x4;
        const PITCH = 0x8;
        const PIXELFORMAT = 0x1000;
        const MIPMAPCOUNT = 0x20000;
        const LINEARSIZE = 0x80000;
        const DEPTH = 0x800000;
    }
}

bitflags! {
    /// `DDS_PIXELFORMAT.dwFlags`: how the pixel data is described.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PixelFormatFlags: u32 {
        const ALPHAPIXELS = 0x1;
        const ALPHA = 0x2;
        const FOURCC = 0x4;
        const RGB = 0x40;
        const YUV = 0x200;
        const LUMINANCE = 0x20000;
    }
}

bitflags! {
    /// `DDS_HEADER.dwCaps`: complexity of the stored surfaces.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CapsFlags: u32 {
        const COMPLEX = 0x8;
        const TEXTURE = 0x1000;
        const MIPMAP = 0x400000;
    }
}

bitflags! {
    /// `DDS_HEADER.dwCaps2`: cubemap and volume details.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Caps2Flags: u32 {
        const CUBEMAP = 0x200;
        const CUBEMAP_POSITIVEX = 0x400;
        const CUBEMAP_NEGATIVEX = 0x800;
        const CUBEMAP_POSITIVEY = 0x1000;
        const CUBEMAP_NEGATIVEY = 0x2000;
        const CUBEMAP_POSITIVEZ = 0x4000;
        const CUBEMAP_NEGATIVEZ = 0x8000;
        const VOLUME = 0x200000;
    }
}
