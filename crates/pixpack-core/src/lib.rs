//! Pixpack Core - packed pixel codec
//!
//! This crate converts rendered RGBA rasters into the compact buffers that
//! low-memory output devices expect: 1-bit bitmaps for thermal and label
//! printers, and 2-bit or 8-bit grayscale for e-paper panels.

pub mod buffer;
pub mod encode;
pub mod error;
pub mod options;
pub mod preview;
pub mod raster;

pub use buffer::{BitDepth, PackedBuffer};
pub use encode::{
    encode, encode_gray2, encode_gray2_with, encode_gray8, encode_mono, encode_mono_with,
    encode_with,
};
pub use error::CodecError;
pub use options::{EncodeOptions, Gray2Lut, Gray2Thresholds, MonoOptions};
pub use preview::{to_gray_image, unpack_levels};
pub use raster::{Pixel, Raster};
