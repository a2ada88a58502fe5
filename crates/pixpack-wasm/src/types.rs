//! WASM-compatible wrapper types for rasters and packed buffers.
//!
//! This module provides JavaScript-friendly types that wrap the core Pixpack types,
//! handling the conversion between Rust and JavaScript data representations.

use pixpack_core::{CodecError, PackedBuffer, Raster};
use wasm_bindgen::prelude::*;

/// An RGBA raster owned by WASM memory.
///
/// Typically built from a canvas `ImageData`:
///
/// ```typescript
/// const data = ctx.getImageData(0, 0, width, height);
/// const raster = new JsRaster(data.width, data.height, new Uint8Array(data.data.buffer));
/// ```
///
/// The constructor rejects zero dimensions, pixel counts that are not a
/// multiple of 8, and pixel arrays whose length is not `width * height * 4`.
#[wasm_bindgen]
pub struct JsRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a new JsRaster from dimensions and RGBA pixel data.
    ///
    /// # Arguments
    /// * `width` - Raster width in pixels
    /// * `height` - Raster height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRaster, JsValue> {
        Self::try_new(width, height, pixels).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the raster width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRaster {
    /// Validating constructor usable from native code and tests.
    pub(crate) fn try_new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CodecError> {
        Raster::new(width, height, &pixels)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Borrow as a core raster.
    pub(crate) fn as_raster(&self) -> Result<Raster<'_>, CodecError> {
        Raster::new(self.width, self.height, &self.pixels)
    }
}

/// A packed device buffer for JavaScript.
///
/// Carries the bit depth and original dimensions alongside the bytes, since
/// the bytes themselves have no header.
#[wasm_bindgen]
pub struct JsPackedBuffer {
    inner: PackedBuffer,
}

#[wasm_bindgen]
impl JsPackedBuffer {
    /// Get the width of the encoded raster in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the height of the encoded raster in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Bits per pixel: 1, 2 or 8
    #[wasm_bindgen(getter)]
    pub fn bits_per_pixel(&self) -> u32 {
        self.inner.bits_per_pixel()
    }

    /// Number of packed bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.len()
    }

    /// Returns the packed bytes as Uint8Array (a copy).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.as_bytes().to_vec()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPackedBuffer {
    pub(crate) fn from_packed(inner: PackedBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn packed(&self) -> &PackedBuffer {
        &self.inner
    }
}
