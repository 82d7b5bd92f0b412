//! Per-level mipmap byte sizes.

/// Byte sizes of each mipmap level of a texture.
///
/// Entry `i` sizes level `i` at `max(width >> i, 1) x max(height >> i, 1)`,
/// rounded up to a multiple of 4 bytes. Sizes are computed on access so a
/// header declaring an absurd level count costs nothing until iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipmapSizeTable {
    width: u32,
    height: u32,
    count: u32,
    compressed: bool,
    rgb_bit_count: u32,
}

impl MipmapSizeTable {
    /// Describe the table for a texture.
    pub fn new(width: u32, height: u32, count: u32, compressed: bool, rgb_bit_count: u32) -> Self {
        Self {
            width,
            height,
            count,
            compressed,
            rgb_bit_count,
        }
    }

    /// Number of levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Check if the table has no levels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Byte size of level `level`, or `None` past the last level.
    pub fn get(&self, level: usize) -> Option<u64> {
        if level >= self.len() {
            return None;
        }
        let shift = u32::try_from(level).unwrap_or(u32::MAX);
        let width = self.width.checked_shr(shift).unwrap_or(0).max(1);
        let height = self.height.checked_shr(shift).unwrap_or(0).max(1);
        Some(self.level_size(width, height))
    }

    /// Iterate over the level sizes, largest level first.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len()).filter_map(move |level| self.get(level))
    }

    /// Collect all level sizes.
    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }

    /// Sizes that do not fit in a `u64` saturate to `u64::MAX`.
    fn level_size(&self, width: u32, height: u32) -> u64 {
        let bits = u64::from(self.rgb_bit_count);
        let size = if self.compressed {
            u64::from(width.div_ceil(4))
                .checked_mul(u64::from(height.div_ceil(4)))
                .and_then(|blocks| blocks.checked_mul(bits))
                .and_then(|size| size.checked_mul(2))
        } else {
            u64::from(width)
                .checked_mul(u64::from(height))
                .and_then(|texels| texels.checked_mul(bits))
                .map(|size| size / 8)
        };
        size.map_or(u64::MAX, |size| size.div_ceil(4).saturating_mul(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dxt1_chain() {
        let table = MipmapSizeTable::new(16, 8, 5, true, 4);
        assert_eq!(table.len(), 5);
        // 16x8, 8x4, 4x2, 2x1, 1x1
        assert_eq!(table.to_vec(), vec![64, 16, 8, 8, 8]);
    }

    #[test]
    fn test_dxt5_sizes_are_block_multiples() {
        let table = MipmapSizeTable::new(100, 60, 7, true, 8);
        let sizes = table.to_vec();

        assert_eq!(sizes.len(), 7);
        assert_eq!(sizes[0], 25 * 15 * 16);
        assert!(sizes.iter().all(|size| size % 4 == 0));
        assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_uncompressed_rounds_to_four() {
        // 3x3 at 24 bpp = 27 bytes, padded to 28
        let table = MipmapSizeTable::new(3, 3, 2, false, 24);
        assert_eq!(table.to_vec(), vec![28, 4]);
    }

    #[test]
    fn test_length_matches_count_past_one_pixel() {
        let table = MipmapSizeTable::new(4, 4, 40, true, 8);
        assert_eq!(table.iter().count(), 40);
        assert_eq!(table.get(39), Some(16));
        assert_eq!(table.get(40), None);
    }

    #[test]
    fn test_huge_uncompressed_level_saturates() {
        let table = MipmapSizeTable::new(u32::MAX, u32::MAX, 1, false, u32::MAX);
        assert_eq!(table.to_vec(), vec![u64::MAX]);
    }

    #[test]
    fn test_huge_dxt5_level_saturates() {
        // 2^30 x 2^30 blocks of 16 bytes is exactly 2^64.
        let table = MipmapSizeTable::new(u32::MAX, u32::MAX, 33, true, 8);
        assert_eq!(table.get(0), Some(u64::MAX));
        assert_eq!(table.get(1), Some(1 << 62));
        assert_eq!(table.get(32), Some(16));
    }

    #[test]
    fn test_empty_table() {
        let table = MipmapSizeTable::new(64, 64, 0, true, 4);
        assert!(table.is_empty());
        assert!(table.to_vec().is_empty());
    }
}
