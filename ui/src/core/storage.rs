//! Read-only access to the bearer token left behind by the login flow.
//!
//! The web build reads `localStorage["token"]`. Native builds read
//! `RENTOORA_TOKEN` first, then a `token` file in the platform data dir.
//! Nothing in this crate ever writes the token.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Local-storage key (and native file name) holding the token.
pub const TOKEN_KEY: &str = "token";

/// Environment override for native builds.
pub const TOKEN_ENV: &str = "RENTOORA_TOKEN";

/// Stored bearer token, if the user has signed in on this device.
pub fn load_token() -> Option<String> {
    read_raw().and_then(normalise)
}

#[cfg(target_arch = "wasm32")]
fn read_raw() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw() -> Option<String> {
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        return Some(token);
    }
    std::fs::read_to_string(token_path()?).ok()
}

/// Location of the token file on native platforms.
#[cfg(not(target_arch = "wasm32"))]
pub fn token_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "Rentoora", "Rentoora")
        .map(|dirs| dirs.data_dir().join(TOKEN_KEY))
}

fn normalise(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    // Browsers stringify a missing value as "null" when it is stored carelessly.
    if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
        None
    } else {
        Some(trimmed.to_string())
    }
}
