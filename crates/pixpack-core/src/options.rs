//! Encoder settings.
//!
//! The defaults reproduce the fixed device thresholds: a monochrome cut at 150
//! and 2-bit cut points at 64/128/192. All settings round-trip through serde so
//! hosts can keep them in JSON config or pass them from JavaScript.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Default monochrome threshold: a channel below this makes the pixel black.
pub const DEFAULT_MONO_THRESHOLD: u8 = 150;

/// Settings for the 1-bit encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonoOptions {
    /// A pixel is black if R, G or B is strictly below this value.
    pub threshold: u8,
}

impl Default for MonoOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MONO_THRESHOLD,
        }
    }
}

/// Cut points for the 2-bit encoder.
///
/// A gray value `v` maps to:
/// - level 3 if `v > light`
/// - level 2 if `v > mid`
/// - level 1 if `v > dark`
/// - level 0 otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gray2Thresholds {
    pub dark: u8,
    pub mid: u8,
    pub light: u8,
}

impl Default for Gray2Thresholds {
    fn default() -> Self {
        Self {
            dark: 64,
            mid: 128,
            light: 192,
        }
    }
}

impl Gray2Thresholds {
    /// Check that the cut points are strictly ascending.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.dark < self.mid && self.mid < self.light {
            Ok(())
        } else {
            Err(CodecError::InvalidThresholds {
                dark: self.dark,
                mid: self.mid,
                light: self.light,
            })
        }
    }

    /// Quantize a single gray value to a level in `0..=3`.
    #[inline]
    pub fn level(&self, gray: u8) -> u8 {
        if gray > self.light {
            3
        } else if gray > self.mid {
            2
        } else if gray > self.dark {
            1
        } else {
            0
        }
    }
}

/// Pre-computed 256-entry table mapping gray values to 2-bit levels.
#[derive(Debug, Clone)]
pub struct Gray2Lut {
    /// `lut[gray] = level`
    pub lut: [u8; 256],
}

impl Gray2Lut {
    /// Build the table for a set of cut points.
    pub fn from_thresholds(thresholds: &Gray2Thresholds) -> Self {
        let mut lut = [0u8; 256];
        for (gray, level) in lut.iter_mut().enumerate() {
            *level = thresholds.level(gray as u8);
        }
        Self { lut }
    }

    #[inline]
    pub fn level(&self, gray: u8) -> u8 {
        self.lut[gray as usize]
    }
}

impl Default for Gray2Lut {
    fn default() -> Self {
        Self::from_thresholds(&Gray2Thresholds::default())
    }
}

/// Combined settings for [`encode_with`](crate::encode::encode_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    pub mono: MonoOptions,
    pub gray2: Gray2Thresholds,
}

impl EncodeOptions {
    pub fn validate(&self) -> Result<(), CodecError> {
        self.gray2.validate()
    }
}
