//! Application Configuration
//!
//! The API base URL is baked in at build time since a WASM bundle has no
//! process environment to read at runtime.

use serde::Deserialize;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
const DEFAULT_TOAST_SECONDS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub api_base_url: String,
    /// How long error toasts stay visible
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u32,
}

fn default_toast_seconds() -> u32 {
    DEFAULT_TOAST_SECONDS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            toast_seconds: DEFAULT_TOAST_SECONDS,
        }
    }
}

impl AppConfig {
    /// Read `TASKBOARD_API_BASE_URL` captured at compile time.
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("TASKBOARD_API_BASE_URL"))
    }

    fn with_base_url(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self {
                api_base_url: url.to_string(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }
}
