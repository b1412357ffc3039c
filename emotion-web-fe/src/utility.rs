// Console logging for emotion-web-fe

use wasm_bindgen::JsValue;
use web_sys::console;

pub fn log<T: Into<String>>(message: T) {
    let message: String = message.into();
    console::log_1(&JsValue::from_str(message.as_str()));
}

/// Diagnostic entry for transport failures.
pub fn log_error<T: Into<String>>(message: T) {
    let message: String = message.into();
    console::error_1(&JsValue::from_str(message.as_str()));
}
