/// Tab Switcher - Chrome Extension popup listing every open tab
/// Built with Rust + WASM + Yew

pub mod chrome;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod host;
pub mod operations;
pub mod tab_data;
pub mod table;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::config::PopupConfig;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export domain extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_domain(url: &str) -> String {
    domain::extract_domain(url)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

/// Start the popup with a partial `PopupConfig` override object
#[wasm_bindgen]
pub fn start_popup_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: PopupConfig = serde_wasm_bindgen::from_value(config)?;
    yew::Renderer::<ui::popup::App>::with_props(ui::popup::AppProps { config }).render();
    Ok(())
}
