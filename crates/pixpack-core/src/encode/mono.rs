//! 1-bit monochrome encoding.
//!
//! Pixels are thresholded per channel (any of R, G, B below the threshold
//! makes the pixel black) and packed eight to a byte, first pixel in the MSB.
//! A set bit means "print a dot".

use tracing::debug;

use super::packing::pack_levels;
use crate::buffer::{BitDepth, PackedBuffer};
use crate::options::MonoOptions;
use crate::raster::Raster;

/// Encode a raster as a 1-bit bitmap with the default threshold (150).
pub fn encode_mono(raster: &Raster<'_>) -> PackedBuffer {
    encode_mono_with(raster, &MonoOptions::default())
}

/// Encode a raster as a 1-bit bitmap with a custom threshold.
pub fn encode_mono_with(raster: &Raster<'_>, options: &MonoOptions) -> PackedBuffer {
    let (width, height) = (raster.width(), raster.height());
    let threshold = options.threshold;
    debug!(width, height, bpp = 1, threshold, "Encoding 1-bit monochrome");

    let mut output = PackedBuffer::zeroed(raster, BitDepth::Mono);
    let bits = raster
        .pixels()
        .map(|pixel| u8::from(pixel.is_dark(threshold)));
    pack_levels(bits, BitDepth::Mono, output.as_mut_bytes());
    output
}
