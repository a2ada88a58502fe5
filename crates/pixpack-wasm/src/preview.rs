//! Preview WASM bindings.
//!
//! Expands a packed buffer back into displayable pixels so the web UI can show
//! exactly what the device will render.

use crate::types::JsPackedBuffer;
use pixpack_core::preview::{to_gray_image, unpack_levels};
use wasm_bindgen::prelude::*;

/// Expand a packed buffer to 8-bit gray pixels (width * height bytes).
///
/// Mono renders as 0 (black) / 255 (white); 2-bit levels render as 0, 85, 170, 255.
#[wasm_bindgen]
pub fn preview_gray(buffer: &JsPackedBuffer) -> Vec<u8> {
    to_gray_image(buffer.packed()).into_raw()
}

/// Expand a packed buffer to RGBA pixels ready for `new ImageData(...)`.
///
/// # Example (TypeScript)
/// ```typescript
/// const rgba = preview_rgba(bitmap);
/// const image = new ImageData(new Uint8ClampedArray(rgba), bitmap.width, bitmap.height);
/// previewCtx.putImageData(image, 0, 0);
/// ```
#[wasm_bindgen]
pub fn preview_rgba(buffer: &JsPackedBuffer) -> Vec<u8> {
    to_gray_image(buffer.packed())
        .into_raw()
        .into_iter()
        .flat_map(|gray| [gray, gray, gray, 255])
        .collect()
}

/// Unpack a buffer to one quantization level per pixel.
///
/// Levels are 0/1 for mono (1 = black), 0-3 for 2-bit and raw gray for 8-bit.
#[wasm_bindgen]
pub fn preview_levels(buffer: &JsPackedBuffer) -> Vec<u8> {
    unpack_levels(buffer.packed())
}
