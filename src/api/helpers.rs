//! Shared plumbing for the exported functions: console output, JS value
//! conversion and argument checks.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

/// Console channel a message is written to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Tag every console line so mushaf output is easy to filter
pub fn console_line(level: ConsoleLevel, msg: &str) -> String {
    match level {
        ConsoleLevel::Warn => format!("[mushaf] warning: {}", msg),
        ConsoleLevel::Error => format!("[mushaf] error: {}", msg),
        ConsoleLevel::Debug | ConsoleLevel::Info => format!("[mushaf] {}", msg),
    }
}

pub fn console(level: ConsoleLevel, msg: &str) {
    let line = console_line(level, msg);
    match level {
        ConsoleLevel::Debug => console_log(&line),
        ConsoleLevel::Info => console_info(&line),
        ConsoleLevel::Warn => console_warn(&line),
        ConsoleLevel::Error => console_error(&line),
    }
}

#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Warn, &format!($($arg)*))
    };
}

/// Report a failure to the browser console
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Error, &format!($($arg)*))
    };
}

fn js_error(msg: String) -> JsValue {
    console(ConsoleLevel::Error, &msg);
    JsValue::from_str(&msg)
}

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

/// Deserialize an optional argument; `undefined` and `null` give the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

/// Validate a printed page number
pub fn validate_page_number(page_number: u32) -> Result<(), String> {
    if page_number == 0 || page_number > crate::models::PAGE_COUNT {
        return Err(format!(
            "Page number {} out of range (1-{})",
            page_number,
            crate::models::PAGE_COUNT
        ));
    }
    Ok(())
}

/// Validate a layout standard code
pub fn standard_from_code(code: u16) -> Result<crate::models::LayoutStandard, String> {
    crate::models::LayoutStandard::from_code(code)
        .ok_or_else(|| format!("Invalid layout standard: {} (must be 1441 or 1405)", code))
}

/// Reject a bad argument with a readable message
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    js_error(msg.into())
}
