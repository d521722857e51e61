/// `TabHost` backed by the extension's `chrome.windows` / `chrome.tabs` APIs

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::HostError;
use crate::host::TabHost;
use crate::tab_data::{HostTab, HostWindow};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getAllWindows() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getCurrentWindowId() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn focusWindow(window_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn activateTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTab(tab_id: i32) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromeHost;

impl TabHost for ChromeHost {
    async fn all_windows(&self) -> Result<Vec<HostWindow>, HostError> {
        let windows_js = getAllWindows().await.map_err(|e| call_error("windows.getAll", e))?;
        decode("windows.getAll", windows_js)
    }

    async fn active_tab(&self) -> Result<HostTab, HostError> {
        let tab_js = getActiveTab().await.map_err(|e| call_error("tabs.query", e))?;
        if tab_js.is_null() || tab_js.is_undefined() {
            return Err(HostError::NoActiveTab);
        }
        decode("tabs.query", tab_js)
    }

    async fn current_window_id(&self) -> Result<i32, HostError> {
        let id_js = getCurrentWindowId()
            .await
            .map_err(|e| call_error("windows.getCurrent", e))?;
        decode("windows.getCurrent", id_js)
    }

    async fn focus_window(&self, window_id: i32) -> Result<(), HostError> {
        focusWindow(window_id).await.map_err(|e| call_error("windows.update", e))
    }

    async fn activate_tab(&self, tab_id: i32) -> Result<(), HostError> {
        activateTab(tab_id).await.map_err(|e| call_error("tabs.update", e))
    }

    async fn remove_tab(&self, tab_id: i32) -> Result<(), HostError> {
        removeTab(tab_id).await.map_err(|e| call_error("tabs.remove", e))
    }
}

fn decode<T: serde::de::DeserializeOwned>(call: &'static str, value: JsValue) -> Result<T, HostError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| HostError::Decode {
        call,
        message: e.to_string(),
    })
}

/// Chrome rejects with `Error` objects; keep their message rather than the
/// debug form of the whole value.
fn call_error(call: &'static str, error: JsValue) -> HostError {
    let message = match error.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", error),
    };
    HostError::Call { call, message }
}
