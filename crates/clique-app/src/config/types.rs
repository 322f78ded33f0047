//! Configuration types for Clique
//!
//! Defines:
//! - `Settings` - Application settings (`.clique/config.toml`)
//! - `BackendSettings`, `MediaSettings`, `UiSettings` - Per-section settings

use std::time::Duration;

use clique_client::{MediaEncoding, MediaPlatform};
use serde::{Deserialize, Serialize};

use crate::screens::ScreenKind;

/// Application settings (.clique/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub media: MediaSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Root URL of the Clique backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MediaSettings {
    /// Body format used when a submission carries media
    #[serde(default)]
    pub encoding: MediaEncoding,

    /// How media handles are resolved to bytes
    #[serde(default)]
    pub platform: MediaPlatform,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Screen shown at startup
    #[serde(default = "default_initial_screen")]
    pub initial_screen: ScreenKind,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            initial_screen: default_initial_screen(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_initial_screen() -> ScreenKind {
    ScreenKind::Login
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.backend.base_url, "http://127.0.0.1:8080");
        assert_eq!(settings.backend.request_timeout_secs, 30);
        assert_eq!(settings.media.encoding, MediaEncoding::Base64);
        assert_eq!(settings.media.platform, MediaPlatform::Native);
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert_eq!(settings.ui.initial_screen, ScreenKind::Login);
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[media]
encoding = "multipart"

[ui]
initial_screen = "create_post"
"#,
        )
        .unwrap();

        assert_eq!(settings.media.encoding, MediaEncoding::Multipart);
        assert_eq!(settings.media.platform, MediaPlatform::Native);
        assert_eq!(settings.ui.initial_screen, ScreenKind::CreatePost);
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert_eq!(settings.backend, BackendSettings::default());
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let backend = BackendSettings {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(backend.request_timeout(), Duration::from_secs(1));
    }
}
