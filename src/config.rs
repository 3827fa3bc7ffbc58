use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/ghassan.json";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_HISTORY_LIMIT: usize = 50;
/// Environment variable that overrides `backendUrl` from the file.
pub const BACKEND_URL_ENV: &str = "GHASSAN_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Send chat turns to `/chat/message-advanced`.
    #[serde(default)]
    pub advanced_chat: bool,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// TTF/OTF font with Arabic glyphs; egui's bundled fonts have none.
    #[serde(default)]
    pub font_path: Option<String>,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            advanced_chat: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
            font_path: None,
        }
    }
}

impl AppConfig {
    /// Applies `GHASSAN_BACKEND_URL` when set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_backend_override(env::var(BACKEND_URL_ENV).ok())
    }

    pub fn with_backend_override(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url.filter(|url| !url.trim().is_empty()) {
            self.backend_url = url.trim().to_string();
        }
        self
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
