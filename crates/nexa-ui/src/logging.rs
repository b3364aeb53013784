//! Browser console logging
//!
//! Thin wrappers over `web_sys::console`. Off `wasm32` (native unit tests)
//! the calls are dropped, since wasm-bindgen imports cannot run there.

/// Log an informational message to the browser console
pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a warning to the browser console
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log an error to the browser console
pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
