//! Packed output buffers and their size law.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::raster::Raster;

/// Bit depth of a packed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BitDepth {
    /// 1 bit per pixel, 1 = black.
    Mono = 1,
    /// 2 bits per pixel, level 0 (black) to 3 (white).
    Gray2 = 2,
    /// 8 bits per pixel.
    Gray8 = 8,
}

impl BitDepth {
    /// Bits per pixel.
    #[inline]
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// How many pixels share one output byte.
    #[inline]
    pub fn pixels_per_byte(self) -> usize {
        8 / self.bits() as usize
    }

    /// Exact output length for `pixel_count` pixels: `ceil(pixel_count * bpp / 8)`.
    #[inline]
    pub fn buffer_len(self, pixel_count: usize) -> usize {
        pixel_count.div_ceil(self.pixels_per_byte())
    }

    /// Parse a bits-per-pixel value (1, 2 or 8).
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            1 => Some(BitDepth::Mono),
            2 => Some(BitDepth::Gray2),
            8 => Some(BitDepth::Gray8),
            _ => None,
        }
    }
}

/// An owned, packed device buffer.
///
/// The bytes carry no header; width and height travel alongside so the
/// consumer can recover row boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    width: u32,
    height: u32,
    depth: BitDepth,
    data: Vec<u8>,
}

impl PackedBuffer {
    /// Zero-filled buffer sized for a raster.
    ///
    /// The raster's pixel count was range-checked when it was constructed.
    pub(crate) fn zeroed(raster: &Raster<'_>, depth: BitDepth) -> Self {
        Self {
            width: raster.width(),
            height: raster.height(),
            depth,
            data: vec![0u8; depth.buffer_len(raster.pixel_count())],
        }
    }

    /// Wrap bytes received from elsewhere, checking them against the size law.
    pub fn from_raw(
        width: u32,
        height: u32,
        depth: BitDepth,
        data: Vec<u8>,
    ) -> Result<Self, CodecError> {
        let pixel_count = (width as usize)
            .checked_mul(height as usize)
            .filter(|&count| count > 0)
            .ok_or(CodecError::InvalidDimensions { width, height })?;

        let expected = depth.buffer_len(pixel_count);
        if data.len() != expected {
            return Err(CodecError::InvalidPackedData {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            depth,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Bits per pixel of the packed data.
    pub fn bits_per_pixel(&self) -> u32 {
        self.depth.bits()
    }

    /// Number of pixels the buffer describes.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for PackedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
