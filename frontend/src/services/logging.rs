use gloo::net::http::Request;
use shared::LogEntry;
use wasm_bindgen_futures::spawn_local;

use crate::services::api::configured_base_url;

/// Forwards log lines to the API's `/logs` endpoint and mirrors them to the browser console
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let line = format!("[{}] {}", component.as_deref().unwrap_or("app"), message);
        match level {
            "error" => gloo::console::error!(line),
            "warn" => gloo::console::warn!(line),
            "debug" => gloo::console::debug!(line),
            _ => gloo::console::info!(line),
        }

        let entry = LogEntry {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        // Fire and forget; a lost log line must never surface to the user
        spawn_local(async move {
            let url = format!("{}/logs", configured_base_url());
            if let Ok(request) = Request::post(&url).json(&entry) {
                let _ = request.send().await;
            }
        });
    }
}
