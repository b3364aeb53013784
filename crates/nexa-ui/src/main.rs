//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM; it mounts [`App`] to the document body.

use leptos::prelude::*;
use nexa_ui::App;

fn main() {
    // Route panics to the browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
