//! Decoded RGBA8 images.

use image::RgbaImage;

/// A decoded texture surface: row-major RGBA8, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Bytes per texel.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Create a fully transparent black image.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * Self::BYTES_PER_PIXEL;
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    /// Image width in texels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in texels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 pixel bytes, `width * height * 4` long.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL)
    }

    /// The texel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let mut texel = [0u8; 4];
        texel.copy_from_slice(&self.pixels[offset..offset + Self::BYTES_PER_PIXEL]);
        Some(texel)
    }

    /// Write the texel at `(x, y)`. Coordinates outside the image are
    /// ignored, which clips partial edge blocks.
    #[inline]
    pub(crate) fn put_pixel(&mut self, x: u32, y: u32, texel: [u8; 4]) {
        if let Some(offset) = self.offset(x, y) {
            self.pixels[offset..offset + Self::BYTES_PER_PIXEL].copy_from_slice(&texel);
        }
    }

    /// Convert into an [`RgbaImage`] for encoding with the `image` crate.
    ///
    /// Returns `None` only if the pixel buffer does not match the
    /// dimensions, which a decoded image never does.
    pub fn into_rgba_image(self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels)
    }
}
