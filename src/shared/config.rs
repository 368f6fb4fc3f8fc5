//! Application configuration. API base URL.

use serde::Deserialize;

/// JSONPlaceholder, the public fake REST API the directory lives on.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory API root. Read from TODO_PROGRESS_BASE_URL.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl AppConfig {
    /// Load from `TODO_PROGRESS_*` env vars (and `.env`), plus the file named by TODO_PROGRESS_CONFIG if set.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("TODO_PROGRESS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("TODO_PROGRESS"));
        c.build()?.try_deserialize()
    }

    /// Apply a command-line base URL. Blank values are ignored.
    pub fn override_base_url(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|s| !s.trim().is_empty()) {
            self.base_url = Some(url);
        }
    }

    /// Returns the API base URL without trailing slashes. Defaults to DEFAULT_BASE_URL.
    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }
}
