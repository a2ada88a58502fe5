//! Encoding WASM bindings.
//!
//! Exposes the pixpack-core encoders to JavaScript in two flavors:
//!
//! - [`encode_mono`], [`encode_gray8`], [`encode_gray2`] and
//!   [`encode_with_options`] take a [`JsRaster`] and return a [`JsPackedBuffer`]
//! - [`to_binary_image`], [`to_8bit_grayscale`] and [`to_2bit_grayscale`] take
//!   raw `ImageData` fields and return the packed bytes directly
//!
//! # Example
//!
//! ```typescript
//! import { JsRaster, encode_mono, to_2bit_grayscale } from '@pixpack/wasm';
//!
//! const data = ctx.getImageData(0, 0, 384, 120);
//! const raster = new JsRaster(data.width, data.height, new Uint8Array(data.data.buffer));
//! const bitmap = encode_mono(raster);
//! await printer.write(bitmap.bytes());
//!
//! // Or without the wrapper
//! const panel = to_2bit_grayscale(new Uint8Array(data.data.buffer), 384, 120);
//! ```

use crate::types::{JsPackedBuffer, JsRaster};
use pixpack_core::{encode, BitDepth, CodecError, EncodeOptions, Raster};
use wasm_bindgen::prelude::*;

fn encode_raster(raster: &JsRaster, depth: BitDepth) -> Result<JsPackedBuffer, CodecError> {
    let raster = raster.as_raster()?;
    Ok(JsPackedBuffer::from_packed(encode::encode(&raster, depth)))
}

fn encode_pixels(
    pixels: &[u8],
    width: u32,
    height: u32,
    depth: BitDepth,
) -> Result<Vec<u8>, CodecError> {
    let raster = Raster::new(width, height, pixels)?;
    Ok(encode::encode(&raster, depth).into_bytes())
}

fn parse_options(options: JsValue) -> Result<EncodeOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(EncodeOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid encode options: {}", e)))
}

/// Encode a raster as a 1-bit bitmap (1 = black, first pixel in the MSB).
#[wasm_bindgen]
pub fn encode_mono(raster: &JsRaster) -> Result<JsPackedBuffer, JsValue> {
    encode_raster(raster, BitDepth::Mono).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a raster as 8-bit grayscale (rounded channel average).
#[wasm_bindgen]
pub fn encode_gray8(raster: &JsRaster) -> Result<JsPackedBuffer, JsValue> {
    encode_raster(raster, BitDepth::Gray8).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a raster as 2-bit grayscale (4 pixels per byte).
#[wasm_bindgen]
pub fn encode_gray2(raster: &JsRaster) -> Result<JsPackedBuffer, JsValue> {
    encode_raster(raster, BitDepth::Gray2).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a raster with custom thresholds.
///
/// # Arguments
/// * `raster` - Source raster
/// * `bits_per_pixel` - 1, 2 or 8
/// * `options` - `{ mono?: { threshold?: number }, gray2?: { dark?, mid?, light? } }`,
///   or `undefined` for the defaults. Omitted fields keep their defaults.
///
/// # Errors
/// Returns an error for an unsupported bit depth, malformed options, or 2-bit
/// cut points that are not strictly ascending.
#[wasm_bindgen]
pub fn encode_with_options(
    raster: &JsRaster,
    bits_per_pixel: u8,
    options: JsValue,
) -> Result<JsPackedBuffer, JsValue> {
    let depth = BitDepth::from_bits(bits_per_pixel).ok_or_else(|| {
        JsValue::from_str(&format!(
            "Unsupported bit depth: {} (expected 1, 2 or 8)",
            bits_per_pixel
        ))
    })?;
    let options = parse_options(options)?;

    let core_raster = raster
        .as_raster()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    encode::encode_with(&core_raster, depth, &options)
        .map(JsPackedBuffer::from_packed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert RGBA `ImageData` pixels to a 1-bit bitmap.
#[wasm_bindgen]
pub fn to_binary_image(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode_pixels(pixels, width, height, BitDepth::Mono)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert RGBA `ImageData` pixels to 8-bit grayscale.
#[wasm_bindgen]
pub fn to_8bit_grayscale(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode_pixels(pixels, width, height, BitDepth::Gray8)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert RGBA `ImageData` pixels to 2-bit grayscale.
#[wasm_bindgen]
pub fn to_2bit_grayscale(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode_pixels(pixels, width, height, BitDepth::Gray2)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_to_binary_image() {
        let pixels = [[0u8, 0, 0, 255], [255, 255, 255, 255]].concat().repeat(4);
        let bitmap = to_binary_image(&pixels, 8, 1).unwrap();
        assert_eq!(bitmap, vec![0xAA]);
    }

    #[wasm_bindgen_test]
    fn test_to_2bit_grayscale_all_white() {
        let pixels = vec![255u8; 8 * 8 * 4];
        let packed = to_2bit_grayscale(&pixels, 8, 8).unwrap();
        assert_eq!(packed, vec![0xFF; 16]);
    }

    #[wasm_bindgen_test]
    fn test_to_8bit_grayscale_invalid_dimensions() {
        let pixels = vec![0u8; 9 * 4];
        assert!(to_8bit_grayscale(&pixels, 3, 3).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_with_options_undefined_uses_defaults() {
        let raster = JsRaster::new(8, 1, vec![120u8; 32]).unwrap();
        let packed = encode_with_options(&raster, 1, JsValue::UNDEFINED).unwrap();
        assert_eq!(packed.bytes(), vec![0xFF]);
    }

    #[wasm_bindgen_test]
    fn test_encode_with_options_custom_threshold() {
        let raster = JsRaster::new(8, 1, vec![120u8; 32]).unwrap();
        let options = serde_wasm_bindgen::to_value(&EncodeOptions {
            mono: pixpack_core::MonoOptions { threshold: 100 },
            ..Default::default()
        })
        .unwrap();

        let packed = encode_with_options(&raster, 1, options).unwrap();
        assert_eq!(packed.bytes(), vec![0x00]);
    }

    #[wasm_bindgen_test]
    fn test_encode_with_options_bad_depth() {
        let raster = JsRaster::new(8, 1, vec![0u8; 32]).unwrap();
        assert!(encode_with_options(&raster, 4, JsValue::UNDEFINED).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_with_options_unordered_thresholds() {
        let raster = JsRaster::new(8, 1, vec![0u8; 32]).unwrap();
        let options = serde_wasm_bindgen::to_value(&EncodeOptions {
            gray2: pixpack_core::Gray2Thresholds {
                dark: 200,
                mid: 100,
                light: 50,
            },
            ..Default::default()
        })
        .unwrap();

        assert!(encode_with_options(&raster, 2, options).is_err());
    }
}
