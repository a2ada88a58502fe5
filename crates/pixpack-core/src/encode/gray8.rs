//! 8-bit grayscale encoding.

use tracing::debug;

use crate::buffer::{BitDepth, PackedBuffer};
use crate::raster::Raster;

/// Encode a raster as one gray byte per pixel.
///
/// Each byte is the rounded average of R, G and B. Alpha is ignored.
pub fn encode_gray8(raster: &Raster<'_>) -> PackedBuffer {
    let (width, height) = (raster.width(), raster.height());
    debug!(width, height, bpp = 8, "Encoding 8-bit grayscale");

    let mut output = PackedBuffer::zeroed(raster, BitDepth::Gray8);
    for (byte, pixel) in output.as_mut_bytes().iter_mut().zip(raster.pixels()) {
        *byte = pixel.gray();
    }
    output
}
