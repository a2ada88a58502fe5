//! 2-bit (4-level) grayscale encoding.
//!
//! Re-quantizes the 8-bit grayscale buffer through a threshold table and packs
//! four levels per byte, first pixel in the two most-significant bits.

use tracing::debug;

use super::gray8::encode_gray8;
use super::packing::pack_levels;
use crate::buffer::{BitDepth, PackedBuffer};
use crate::options::{Gray2Lut, Gray2Thresholds};
use crate::raster::Raster;

/// Encode a raster as 2-bit grayscale with the default 64/128/192 cut points.
pub fn encode_gray2(raster: &Raster<'_>) -> PackedBuffer {
    encode_gray2_lut(raster, &Gray2Lut::default())
}

/// Encode a raster as 2-bit grayscale with custom cut points.
///
/// The thresholds are used as given; call [`Gray2Thresholds::validate`] first
/// if they come from untrusted input.
pub fn encode_gray2_with(raster: &Raster<'_>, thresholds: &Gray2Thresholds) -> PackedBuffer {
    encode_gray2_lut(raster, &Gray2Lut::from_thresholds(thresholds))
}

fn encode_gray2_lut(raster: &Raster<'_>, lut: &Gray2Lut) -> PackedBuffer {
    let (width, height) = (raster.width(), raster.height());
    debug!(width, height, bpp = 2, "Encoding 2-bit grayscale");

    let gray = encode_gray8(raster);
    let mut output = PackedBuffer::zeroed(raster, BitDepth::Gray2);
    let levels = gray.as_bytes().iter().map(|&value| lut.level(value));
    pack_levels(levels, BitDepth::Gray2, output.as_mut_bytes());
    output
}
