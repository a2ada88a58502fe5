//! Pixpack WASM - WebAssembly bindings for Pixpack
//!
//! This crate exposes the pixpack-core codec to JavaScript/TypeScript, where
//! labels and panel frames are usually drawn on a canvas first.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for rasters and packed buffers
//! - `encode` - 1-bit, 2-bit and 8-bit encoder bindings
//! - `preview` - Expand packed buffers back to displayable pixels
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRaster, encode_mono } from '@pixpack/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const data = ctx.getImageData(0, 0, canvas.width, canvas.height);
//! const raster = new JsRaster(data.width, data.height, new Uint8Array(data.data.buffer));
//! const bitmap = encode_mono(raster);
//! console.log(`Packed ${bitmap.byte_length} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod preview;
mod types;

// Re-export public types
pub use encode::{
    encode_gray2, encode_gray8, encode_mono, encode_with_options, to_2bit_grayscale,
    to_8bit_grayscale, to_binary_image,
};
pub use preview::{preview_gray, preview_levels, preview_rgba};
pub use types::{JsPackedBuffer, JsRaster};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
