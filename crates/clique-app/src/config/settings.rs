//! Settings parser for .clique/config.toml

use std::path::{Path, PathBuf};

use clique_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CLIQUE_DIR: &str = ".clique";

/// Project-local config path: `<project>/.clique/config.toml`
pub fn project_config_path(project_path: &Path) -> PathBuf {
    project_path.join(CLIQUE_DIR).join(CONFIG_FILENAME)
}

/// Per-user config path: `<config_dir>/clique/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("clique").join(CONFIG_FILENAME))
}

/// Load settings from the project directory, then the user config
/// directory, falling back to defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let mut candidates = vec![project_config_path(project_path)];
    candidates.extend(user_config_path());
    load_first(&candidates)
}

/// Load the first existing file among `candidates`.
///
/// A file that cannot be read or parsed logs a warning and yields defaults.
fn load_first(candidates: &[PathBuf]) -> Settings {
    let Some(config_path) = candidates.iter().find(|p| p.exists()) else {
        debug!("No config file found, using defaults");
        return Settings::default();
    };

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write settings to `<project>/.clique/config.toml`.
pub fn save_settings(project_path: &Path, settings: &Settings) -> Result<PathBuf> {
    let clique_dir = project_path.join(CLIQUE_DIR);

    if !clique_dir.exists() {
        std::fs::create_dir_all(&clique_dir)
            .map_err(|e| Error::config(format!("Failed to create .clique dir: {}", e)))?;
    }

    let config_path = clique_dir.join(CONFIG_FILENAME);
    let temp_path = clique_dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    // Write to a temp file, then rename
    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(config_path)
}

/// Create `.clique/config.toml` with defaults unless it already exists.
///
/// Returns the config path and whether a new file was written.
pub fn init_config_dir(project_path: &Path) -> Result<(PathBuf, bool)> {
    let config_path = project_config_path(project_path);
    if config_path.exists() {
        return Ok((config_path, false));
    }
    let path = save_settings(project_path, &Settings::default())?;
    Ok((path, true))
}

fn generate_config_header() -> String {
    r#"# Clique Configuration
#
# [backend] base_url, request_timeout_secs
# [media]   encoding = "base64" | "multipart", platform = "native" | "web"
# [ui]      tick_rate_ms, initial_screen

"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clique_client::MediaEncoding;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_first(&[project_config_path(temp.path())]);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let clique_dir = temp.path().join(".clique");
        std::fs::create_dir_all(&clique_dir).unwrap();

        let config = r#"
[backend]
base_url = "https://clique.example.edu"
request_timeout_secs = 5

[media]
encoding = "multipart"
"#;
        std::fs::write(clique_dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.backend.base_url, "https://clique.example.edu");
        assert_eq!(settings.backend.request_timeout_secs, 5);
        assert_eq!(settings.media.encoding, MediaEncoding::Multipart);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let clique_dir = temp.path().join(".clique");
        std::fs::create_dir_all(&clique_dir).unwrap();
        std::fs::write(clique_dir.join("config.toml"), "[backend\nbase_url = ").unwrap();

        let settings = load_first(&[project_config_path(temp.path())]);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_falls_back_to_second_candidate() {
        let temp = tempdir().unwrap();
        let user_file = temp.path().join("user.toml");
        std::fs::write(&user_file, "[ui]\ntick_rate_ms = 100\n").unwrap();

        let settings = load_first(&[temp.path().join("missing.toml"), user_file]);
        assert_eq!(settings.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_save_and_reload() {
        let temp = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.backend.base_url = "http://10.0.0.2:9000".to_string();

        let path = save_settings(temp.path(), &settings).unwrap();
        assert!(path.exists());
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .starts_with("# Clique Configuration"));

        let loaded = load_first(&[path]);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_init_config_dir_does_not_overwrite() {
        let temp = tempdir().unwrap();

        let (path, created) = init_config_dir(temp.path()).unwrap();
        assert!(created);
        std::fs::write(&path, "[ui]\ntick_rate_ms = 75\n").unwrap();

        let (_, created_again) = init_config_dir(temp.path()).unwrap();
        assert!(!created_again);
        assert_eq!(load_first(&[path]).ui.tick_rate_ms, 75);
    }
}
