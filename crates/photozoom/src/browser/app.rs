//! WASM entry points and console helpers.

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Report a swallowed failure on the browser console.
pub(crate) fn log_error(context: &str, error: &dyn std::fmt::Display) {
    web_sys::console::error_1(&JsValue::from_str(&format!("photozoom: {context}: {error}")));
}

/// Report a JavaScript exception thrown by a user callback.
pub(crate) fn log_exception(context: &str, exception: &JsValue) {
    web_sys::console::error_2(&JsValue::from_str(&format!("photozoom: {context}")), exception);
}
