// SPDX-License-Identifier: MIT OR Apache-2.0

use passin_client::PassInApiClient;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Runtime configuration injected by the hosting page as `window.__APP_CONFIG`.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "debugLogs")]
    #[serde(default)]
    pub debug_logs: Option<String>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No global window object".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Returns `true` for `"true"` or `"1"`, case-insensitively.
pub fn truthy(s: Option<&str>) -> bool {
    s.is_some_and(|s| s.eq_ignore_ascii_case("true") || s == "1")
}

pub fn api_base_url() -> Result<String, String> {
    app_config().map(|c| c.api_base_url)
}

pub fn default_event_id() -> Result<String, String> {
    app_config().map(|c| c.event_id)
}

pub fn debug_logs_enabled() -> bool {
    app_config()
        .map(|c| truthy(c.debug_logs.as_deref()))
        .unwrap_or(false)
}

pub fn api_client() -> Result<PassInApiClient, String> {
    let base_url = api_base_url()?;
    Ok(PassInApiClient::new(&base_url))
}
