//! Endpoint configuration for the listing server.

use std::time::Duration;

/// Server used when nothing overrides it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:7000";

/// Path of the "create post" endpoint, relative to the base URL.
pub const POSTS_PATH: &str = "/api/posts";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
///
/// Read at runtime on native targets and at compile time on WASM.
pub const BASE_URL_ENV: &str = "RENTOORA_API_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub posts_path: String,
    /// Only honoured on native targets; the browser owns request lifetimes on WASM.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            posts_path: POSTS_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Defaults, with the base URL taken from [`BASE_URL_ENV`] when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url_override() {
            config.base_url = url;
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Absolute URL of the "create post" endpoint.
    pub fn posts_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.posts_path.trim_start_matches('/')
        )
    }
}

#[cfg(target_arch = "wasm32")]
fn base_url_override() -> Option<String> {
    option_env!("RENTOORA_API_URL")
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url_override() -> Option<String> {
    std::env::var(BASE_URL_ENV)
        .ok()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let config = ApiConfig::default();
        assert_eq!(config.posts_url(), "http://localhost:7000/api/posts");
    }

    #[test]
    fn posts_url_normalises_slashes() {
        let config = ApiConfig::default().with_base_url("https://rentoora.example/");
        assert_eq!(config.posts_url(), "https://rentoora.example/api/posts");

        let config = ApiConfig {
            posts_path: "api/posts".into(),
            ..ApiConfig::default().with_base_url("http://127.0.0.1:9000")
        };
        assert_eq!(config.posts_url(), "http://127.0.0.1:9000/api/posts");
    }
}
