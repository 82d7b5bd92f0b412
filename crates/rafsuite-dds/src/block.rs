//! DXT1/DXT3/DXT5 block decompression.
//!
//! Every format stores 4x4 texel blocks. The color half is shared:
//! - 2 bytes: color0 (RGB565)
//! - 2 bytes: color1 (RGB565)
//! - 4 bytes: 16 2-bit palette indices, row-major, low bits first
//!
//! DXT3 and DXT5 prefix it with 8 bytes of alpha: 16 explicit 4-bit values
//! (DXT3) or two 8-bit endpoints plus 16 3-bit ramp indices (DXT5).

use crate::surface::DecodedImage;
use crate::{FormatError, Result};

/// One RGBA8 texel.
pub type Texel = [u8; 4];

/// The 16 texels of one block, row-major.
pub type BlockTexels = [Texel; 16];

/// Block compression variants with a decompressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormat {
    /// Color with optional 1-bit alpha, 8 bytes per block.
    Dxt1,
    /// Explicit 4-bit alpha, 16 bytes per block.
    Dxt3,
    /// Interpolated alpha, 16 bytes per block.
    Dxt5,
}

impl BlockFormat {
    /// Bytes per 4x4 block.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Dxt1 => 8,
            Self::Dxt3 | Self::Dxt5 => 16,
        }
    }

    /// Decode one block into 16 texels.
    ///
    /// Only the first [`block_size`](Self::block_size) bytes are used; a
    /// shorter slice fails with [`FormatError::BlockDataTooShort`].
    pub fn decode_block(self, block: &[u8]) -> Result<BlockTexels> {
        let needed = self.block_size();
        let Some(block) = block.get(..needed) else {
            return Err(FormatError::BlockDataTooShort {
                needed,
                available: block.len(),
            });
        };

        let texels = match self {
            Self::Dxt1 => decode_color_block(&half(block, 0), true),
            Self::Dxt3 => {
                let alpha = half(block, 0);
                let mut texels = decode_color_block(&half(block, 8), false);
                for (index, texel) in texels.iter_mut().enumerate() {
                    texel[3] = explicit_alpha(&alpha, index);
                }
                texels
            }
            Self::Dxt5 => {
                let mut texels = decode_color_block(&half(block, 8), false);
                let (palette, indices) = interpolated_alpha(&half(block, 0));
                for (index, texel) in texels.iter_mut().enumerate() {
                    texel[3] = palette[((indices >> (3 * index)) & 0x7) as usize];
                }
                texels
            }
        };
        Ok(texels)
    }

    /// Decompress a whole surface of `width x height` texels.
    ///
    /// `data` must hold at least `ceil(width/4) * ceil(height/4)` blocks;
    /// trailing bytes (smaller mip levels) are ignored. Texels of edge
    /// blocks that fall outside the surface are dropped.
    pub fn decompress(self, data: &[u8], width: u32, height: u32) -> Result<DecodedImage> {
        let blocks_x = width.div_ceil(4) as usize;
        let blocks_y = height.div_ceil(4) as usize;
        let pitch = blocks_x * self.block_size();
        let needed = pitch.checked_mul(blocks_y).unwrap_or(usize::MAX);

        if data.len() < needed {
            return Err(FormatError::BlockDataTooShort {
                needed,
                available: data.len(),
            });
        }

        tracing::debug!(format = ?self, width, height, pitch, needed, "decompressing blocks");

        let mut image = DecodedImage::new(width, height);
        if needed == 0 {
            return Ok(image);
        }

        for (block_y, row) in data[..needed].chunks_exact(pitch).enumerate() {
            for (block_x, block) in row.chunks_exact(self.block_size()).enumerate() {
                let texels = self.decode_block(block)?;
                for (index, texel) in texels.iter().enumerate() {
                    let x = (block_x * 4 + index % 4) as u32;
                    let y = (block_y * 4 + index / 4) as u32;
                    image.put_pixel(x, y, *texel);
                }
            }
        }

        Ok(image)
    }
}

/// The 8 bytes of `block` starting at `offset`. The caller has checked the
/// block length.
#[inline]
fn half(block: &[u8], offset: usize) -> [u8; 8] {
    let mut out = [0u8; 8];
    out.copy_from_slice(&block[offset..offset + 8]);
    out
}

/// Expand an RGB565 color to 8 bits per channel by bit replication.
#[inline]
pub fn rgb565_to_rgb888(color: u16) -> [u8; 3] {
    let r = ((color >> 11) & 0x1F) as u8;
    let g = ((color >> 5) & 0x3F) as u8;
    let b = (color & 0x1F) as u8;
    [(r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2)]
}

/// Weighted per-channel mix of two colors, fully opaque.
#[inline]
fn blend(c0: [u8; 3], c1: [u8; 3], w0: u16, w1: u16) -> Texel {
    let mix = |a: u8, b: u8| ((w0 * u16::from(a) + w1 * u16::from(b)) / (w0 + w1)) as u8;
    [mix(c0[0], c1[0]), mix(c0[1], c1[1]), mix(c0[2], c1[2]), 255]
}

/// Build the 4-entry palette for a color block.
///
/// With `one_bit_alpha` (DXT1 only) and `c0 <= c1`, entry 2 is the midpoint
/// and entry 3 is transparent black.
pub fn color_palette(c0: u16, c1: u16, one_bit_alpha: bool) -> [Texel; 4] {
    let rgb0 = rgb565_to_rgb888(c0);
    let rgb1 = rgb565_to_rgb888(c1);

    let first = [rgb0[0], rgb0[1], rgb0[2], 255];
    let second = [rgb1[0], rgb1[1], rgb1[2], 255];

    if one_bit_alpha && c0 <= c1 {
        [first, second, blend(rgb0, rgb1, 1, 1), [0, 0, 0, 0]]
    } else {
        [first, second, blend(rgb0, rgb1, 2, 1), blend(rgb0, rgb1, 1, 2)]
    }
}

/// Decode the 8-byte color half of a block.
fn decode_color_block(block: &[u8; 8], one_bit_alpha: bool) -> BlockTexels {
    let c0 = u16::from_le_bytes([block[0], block[1]]);
    let c1 = u16::from_le_bytes([block[2], block[3]]);
    let indices = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

    let palette = color_palette(c0, c1, one_bit_alpha);
    let mut texels = [[0u8; 4]; 16];
    for (index, texel) in texels.iter_mut().enumerate() {
        *texel = palette[((indices >> (2 * index)) & 0x3) as usize];
    }
    texels
}

/// The explicit 4-bit alpha of texel `index`, scaled to 0-255.
#[inline]
fn explicit_alpha(alpha_block: &[u8; 8], index: usize) -> u8 {
    let nibble = (alpha_block[index / 2] >> ((index % 2) * 4)) & 0xF;
    nibble * 17
}

/// Build the 8-entry alpha ramp and return it with the packed 48-bit indices.
pub fn interpolated_alpha(alpha_block: &[u8; 8]) -> ([u8; 8], u64) {
    let a0 = u32::from(alpha_block[0]);
    let a1 = u32::from(alpha_block[1]);

    let mut palette = [0u8; 8];
    palette[0] = a0 as u8;
    palette[1] = a1 as u8;
    if a0 > a1 {
        for k in 2..8u32 {
            palette[k as usize] = (((8 - k) * a0 + (k - 1) * a1) / 7) as u8;
        }
    } else {
        for k in 2..6u32 {
            palette[k as usize] = (((6 - k) * a0 + (k - 1) * a1) / 5) as u8;
        }
        palette[6] = 0;
        palette[7] = 255;
    }

    let indices = alpha_block[2..8]
        .iter()
        .enumerate()
        .fold(0u64, |bits, (i, &byte)| bits | (u64::from(byte) << (8 * i)));

    (palette, indices)
}
