//! page-interactions - interactive behavior for the landing page
//!
//! Mobile menu, smooth anchor scrolling, contact form validation and
//! scroll-triggered reveal animations, compiled to WebAssembly and attached
//! to the server-rendered markup.

pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = browser::start(None) {
        leptos::logging::error!("Page interactions failed to start: {}", e);
    }
}

/// Like [`hydrate`], with the configuration passed from JavaScript
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate_with_config(config: wasm_bindgen::JsValue) {
    console_error_panic_hook::set_once();
    let started = browser::config_from_js(config).and_then(|config| browser::start(Some(config)));
    if let Err(e) = started {
        leptos::logging::error!("Page interactions failed to start: {}", e);
    }
}
