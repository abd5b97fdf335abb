//! WASM bindings for fsname-core.
//!
//! Exposes `encode`, `decode`, and `isLegal` as `#[wasm_bindgen]` functions that
//! can be called from JavaScript/TypeScript.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p fsname-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/fsname-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/fsname_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Encode arbitrary text into a filesystem-legal file name.
#[wasm_bindgen]
pub fn encode(text: &str) -> String {
    fsname_core::encode(text)
}

/// Decode a file name back into text. Accepts any string.
#[wasm_bindgen]
pub fn decode(name: &str) -> String {
    fsname_core::decode(name)
}

/// Decode a file name, throwing a JS error if it contains forbidden characters.
#[wasm_bindgen(js_name = decodeStrict)]
pub fn decode_strict(name: &str) -> std::result::Result<String, JsValue> {
    fsname_core::FileName::parse(name)
        .map(|name| name.to_text())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Whether `name` contains no forbidden file-name characters.
#[wasm_bindgen(js_name = isLegal)]
pub fn is_legal(name: &str) -> bool {
    fsname_core::is_legal(name)
}
