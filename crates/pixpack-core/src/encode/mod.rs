//! Raster to device-buffer encoders.
//!
//! This module provides:
//! - 1-bit monochrome bitmaps ([`encode_mono`])
//! - 8-bit grayscale ([`encode_gray8`])
//! - 2-bit, 4-level grayscale ([`encode_gray2`]), built on the 8-bit output
//!
//! # Architecture
//!
//! Every encoder is a pure, single-pass transform. Each call allocates a fresh
//! [`PackedBuffer`] and keeps no reference to the input raster afterwards, so
//! encoders can run concurrently on the same raster.
//!
//! # Examples
//!
//! ```ignore
//! use pixpack_core::{encode_mono, Raster};
//!
//! let rgba = vec![255u8; 384 * 100 * 4]; // White label
//! let raster = Raster::new(384, 100, &rgba).unwrap();
//! let bitmap = encode_mono(&raster);
//! assert_eq!(bitmap.len(), 384 * 100 / 8);
//! ```

mod gray2;
mod gray8;
mod mono;
pub(crate) mod packing;

pub use gray2::{encode_gray2, encode_gray2_with};
pub use gray8::encode_gray8;
pub use mono::{encode_mono, encode_mono_with};

use crate::buffer::{BitDepth, PackedBuffer};
use crate::error::CodecError;
use crate::options::EncodeOptions;
use crate::raster::Raster;

/// Encode a raster at the given bit depth with default settings.
pub fn encode(raster: &Raster<'_>, depth: BitDepth) -> PackedBuffer {
    match depth {
        BitDepth::Mono => encode_mono(raster),
        BitDepth::Gray2 => encode_gray2(raster),
        BitDepth::Gray8 => encode_gray8(raster),
    }
}

/// Encode a raster at the given bit depth with custom settings.
///
/// # Errors
/// Returns [`CodecError::InvalidThresholds`] if the 2-bit cut points are not
/// strictly ascending, regardless of `depth`.
pub fn encode_with(
    raster: &Raster<'_>,
    depth: BitDepth,
    options: &EncodeOptions,
) -> Result<PackedBuffer, CodecError> {
    options.validate()?;

    Ok(match depth {
        BitDepth::Mono => encode_mono_with(raster, &options.mono),
        BitDepth::Gray2 => encode_gray2_with(raster, &options.gray2),
        BitDepth::Gray8 => encode_gray8(raster),
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
