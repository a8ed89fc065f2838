//! Browser console output

use wasm_bindgen::JsValue;
use web_sys::console;

pub fn debug(message: &str) {
    console::debug_1(&JsValue::from_str(message));
}

pub fn warn(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}

/// Warns with a JS value (usually a caught error) alongside the message
pub fn warn_value(message: &str, value: &JsValue) {
    console::warn_2(&JsValue::from_str(message), value);
}
