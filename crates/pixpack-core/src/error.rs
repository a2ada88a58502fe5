//! Error types for raster construction and codec configuration.

use thiserror::Error;

/// Errors that can occur before any encoding takes place.
///
/// The encoders themselves are total: once a [`Raster`](crate::Raster) has been
/// constructed, every encoder produces a fully populated buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Width or height is zero, or the pixel count is not byte-aligned.
    #[error(
        "Invalid dimensions: {width}x{height} must be non-zero with a pixel count divisible by 8"
    )]
    InvalidDimensions { width: u32, height: u32 },

    /// RGBA slice length doesn't match the dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Packed byte length doesn't match the dimensions and bit depth.
    #[error("Invalid packed data: expected {expected} bytes, got {actual}")]
    InvalidPackedData { expected: usize, actual: usize },

    /// Grayscale-2 cut points are not strictly ascending.
    #[error("Invalid 2-bit thresholds: expected dark < mid < light, got {dark}/{mid}/{light}")]
    InvalidThresholds { dark: u8, mid: u8, light: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_display() {
        let err = CodecError::InvalidDimensions {
            width: 3,
            height: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: 3x3 must be non-zero with a pixel count divisible by 8"
        );

        let err = CodecError::InvalidPixelData {
            expected: 256,
            actual: 255,
        };
        assert_eq!(
            err.to_string(),
            "Invalid pixel data: expected 256 bytes (width * height * 4), got 255"
        );

        let err = CodecError::InvalidThresholds {
            dark: 128,
            mid: 64,
            light: 192,
        };
        assert_eq!(
            err.to_string(),
            "Invalid 2-bit thresholds: expected dark < mid < light, got 128/64/192"
        );
    }
}
