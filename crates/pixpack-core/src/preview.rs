//! Expand packed buffers back into viewable pixels.
//!
//! Useful for checking what a printer or panel will actually show before
//! sending it bytes. Saving the resulting image is up to the caller.

use image::{GrayImage, Luma};

use crate::buffer::{BitDepth, PackedBuffer};
use crate::encode::packing::unpack_byte;

/// Gray step between adjacent 2-bit levels (0, 85, 170, 255).
const GRAY2_STEP: u8 = 85;

/// Unpack a buffer into one level per pixel, in raster order.
///
/// Levels are `0..=1` for mono (1 = black), `0..=3` for 2-bit and the raw gray
/// value for 8-bit.
pub fn unpack_levels(buffer: &PackedBuffer) -> Vec<u8> {
    let depth = buffer.depth();
    let mut levels: Vec<u8> = buffer
        .as_bytes()
        .iter()
        .flat_map(|&byte| unpack_byte(byte, depth))
        .collect();
    levels.truncate(buffer.pixel_count());
    levels
}

/// Map a level back to an 8-bit gray value for display.
#[inline]
fn level_to_gray(level: u8, depth: BitDepth) -> u8 {
    match depth {
        BitDepth::Mono => {
            if level == 1 {
                0
            } else {
                255
            }
        }
        BitDepth::Gray2 => level * GRAY2_STEP,
        BitDepth::Gray8 => level,
    }
}

/// Render a packed buffer as an 8-bit grayscale image.
pub fn to_gray_image(buffer: &PackedBuffer) -> GrayImage {
    let depth = buffer.depth();
    let mut img = GrayImage::new(buffer.width(), buffer.height());

    for (pixel, level) in img.pixels_mut().zip(unpack_levels(buffer)) {
        *pixel = Luma([level_to_gray(level, depth)]);
    }

    img
}
