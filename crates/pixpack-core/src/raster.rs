//! RGBA raster input for the codec.
//!
//! A [`Raster`] borrows caller-owned pixel memory. The codec only reads through
//! it, so one raster can be handed to several encoders (or threads) at once.

use crate::error::CodecError;

/// Bytes per pixel in the input raster (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// The pixel count of every raster must be a multiple of this, so that
/// 1-bit and 2-bit groups never straddle the end of the buffer.
pub const PIXEL_ALIGNMENT: usize = 8;

/// A single RGBA pixel read from a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Carried along for completeness; no encoder looks at it.
    pub a: u8,
}

impl Pixel {
    /// Build a pixel from an `[r, g, b, a]` quadruple.
    #[inline]
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba;
        Self { r, g, b, a }
    }

    /// True if any color channel is strictly below `threshold`.
    #[inline]
    pub fn is_dark(self, threshold: u8) -> bool {
        self.r < threshold || self.g < threshold || self.b < threshold
    }

    /// Unweighted channel average, rounded to the nearest integer.
    ///
    /// `sum / 3` can only have a fractional part of 0, 1/3 or 2/3, so adding
    /// one before the integer division rounds exactly.
    #[inline]
    pub fn gray(self) -> u8 {
        let sum = u16::from(self.r) + u16::from(self.g) + u16::from(self.b);
        ((sum + 1) / 3) as u8
    }
}

/// A borrowed, row-major RGBA raster.
///
/// Construction validates the shape once; every accessor after that is
/// infallible for in-range indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raster<'a> {
    width: u32,
    height: u32,
    pixels: &'a [u8],
}

impl<'a> Raster<'a> {
    /// Wrap an RGBA byte slice.
    ///
    /// # Errors
    /// - [`CodecError::InvalidDimensions`] if width or height is zero, or if
    ///   `width * height` is not a multiple of [`PIXEL_ALIGNMENT`].
    /// - [`CodecError::InvalidPixelData`] if `pixels.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: &'a [u8]) -> Result<Self, CodecError> {
        let invalid = CodecError::InvalidDimensions { width, height };

        if width == 0 || height == 0 {
            return Err(invalid);
        }

        let pixel_count = (width as usize)
            .checked_mul(height as usize)
            .ok_or(invalid.clone())?;
        if pixel_count % PIXEL_ALIGNMENT != 0 {
            return Err(invalid);
        }

        let expected = pixel_count
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(invalid)?;
        if pixels.len() != expected {
            return Err(CodecError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Borrow the pixel data of an `image::RgbaImage`.
    pub fn from_rgba_image(img: &'a image::RgbaImage) -> Result<Self, CodecError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.as_raw().as_slice())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    /// The raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.pixels
    }

    /// Pixel at a flat row-major index.
    pub fn pixel(&self, index: usize) -> Option<Pixel> {
        let start = index.checked_mul(BYTES_PER_PIXEL)?;
        let end = start.checked_add(BYTES_PER_PIXEL)?;
        let bytes = self.pixels.get(start..end)?;
        Some(Pixel::from_rgba([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixel(y as usize * self.width as usize + x as usize)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = Pixel> + 'a {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| Pixel::from_rgba([px[0], px[1], px[2], px[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let pixels = vec![0u8; 16 * 2 * 4];
        let raster = Raster::new(16, 2, &pixels).unwrap();

        assert_eq!(raster.width(), 16);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.pixel_count(), 32);
        assert_eq!(raster.as_bytes().len(), 128);
    }

    #[test]
    fn test_raster_zero_dimensions() {
        assert_eq!(
            Raster::new(0, 8, &[]),
            Err(CodecError::InvalidDimensions {
                width: 0,
                height: 8
            })
        );
        assert!(matches!(
            Raster::new(8, 0, &[]),
            Err(CodecError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_raster_unaligned_pixel_count() {
        // 3x3 = 9 pixels, not a multiple of 8
        let pixels = vec![0u8; 3 * 3 * 4];
        assert!(matches!(
            Raster::new(3, 3, &pixels),
            Err(CodecError::InvalidDimensions { .. })
        ));

        // 4x2 = 8 pixels is fine even though no row is byte-wide
        let pixels = vec![0u8; 4 * 2 * 4];
        assert!(Raster::new(4, 2, &pixels).is_ok());
    }

    #[test]
    fn test_raster_wrong_pixel_length() {
        let pixels = vec![0u8; 8 * 4 - 1];
        assert_eq!(
            Raster::new(8, 1, &pixels),
            Err(CodecError::InvalidPixelData {
                expected: 32,
                actual: 31
            })
        );

        let pixels = vec![0u8; 8 * 4 + 4];
        assert!(matches!(
            Raster::new(8, 1, &pixels),
            Err(CodecError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_pixel_accessors() {
        let mut pixels = vec![0u8; 8 * 2 * 4];
        // Pixel (x=3, y=1) -> index 11
        pixels[11 * 4..12 * 4].copy_from_slice(&[10, 20, 30, 40]);
        let raster = Raster::new(8, 2, &pixels).unwrap();

        let expected = Pixel::from_rgba([10, 20, 30, 40]);
        assert_eq!(raster.pixel(11), Some(expected));
        assert_eq!(raster.pixel_at(3, 1), Some(expected));
        assert_eq!(raster.pixel(16), None);
        assert_eq!(raster.pixel_at(8, 0), None);
        assert_eq!(raster.pixel_at(0, 2), None);
        assert_eq!(raster.pixels().len(), 16);
        assert_eq!(raster.pixels().nth(11), Some(expected));
    }

    #[test]
    fn test_from_rgba_image() {
        let img = image::RgbaImage::from_pixel(8, 4, image::Rgba([1, 2, 3, 4]));
        let raster = Raster::from_rgba_image(&img).unwrap();

        assert_eq!(raster.width(), 8);
        assert_eq!(raster.height(), 4);
        assert_eq!(raster.pixel(31), Some(Pixel::from_rgba([1, 2, 3, 4])));
    }

    #[test]
    fn test_from_rgba_image_unaligned() {
        let img = image::RgbaImage::new(5, 5);
        assert!(matches!(
            Raster::from_rgba_image(&img),
            Err(CodecError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_pixel_is_dark_boundary() {
        assert!(!Pixel::from_rgba([150, 255, 255, 255]).is_dark(150));
        assert!(Pixel::from_rgba([149, 255, 255, 255]).is_dark(150));
        assert!(Pixel::from_rgba([255, 149, 255, 255]).is_dark(150));
        assert!(Pixel::from_rgba([255, 255, 149, 255]).is_dark(150));
        // Alpha never counts
        assert!(!Pixel::from_rgba([255, 255, 255, 0]).is_dark(150));
    }

    #[test]
    fn test_pixel_gray_rounding() {
        assert_eq!(Pixel::from_rgba([0, 0, 0, 255]).gray(), 0);
        assert_eq!(Pixel::from_rgba([255, 255, 255, 255]).gray(), 255);
        // 1/3 rounds down, 2/3 rounds up
        assert_eq!(Pixel::from_rgba([1, 0, 0, 255]).gray(), 0);
        assert_eq!(Pixel::from_rgba([1, 1, 0, 255]).gray(), 1);
        // (100 + 101 + 101) / 3 = 100.67
        assert_eq!(Pixel::from_rgba([100, 101, 101, 255]).gray(), 101);
        // (255 + 255 + 0) / 3 = 170
        assert_eq!(Pixel::from_rgba([255, 255, 0, 255]).gray(), 170);
    }
}
