//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use arca_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "arca-console";

/// Environment variable overriding `[api] base_url`.
pub const API_URL_ENV: &str = "ARCA_API_URL";

const DEFAULT_CONFIG: &str = r#"# ARCA Console Configuration

[api]
base_url = "http://localhost:8000"   # Overridden by ARCA_API_URL or --api-url
timeout_secs = 0                     # 0 = wait as long as the analysis takes

[export]
directory = "."                      # Where exported reports are written

[ui]
icons = "unicode"                    # "unicode" or "nerd_fonts"
"#;

/// `<config_dir>/arca-console/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

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

/// Write a commented default config to `config_path`.
///
/// Never overwrites. Returns whether a file was created.
pub fn init_config(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}

/// Apply API URL overrides: flag > env > file.
///
/// The winning URL is validated and normalized.
pub fn apply_overrides(
    mut settings: Settings,
    env_api_url: Option<String>,
    flag_api_url: Option<&str>,
) -> Result<Settings> {
    let env_api_url = env_api_url.filter(|url| !url.trim().is_empty());

    if let Some(url) = flag_api_url {
        debug!("API URL from --api-url");
        settings.api.base_url = url.to_string();
    } else if let Some(url) = env_api_url {
        debug!("API URL from {}", API_URL_ENV);
        settings.api.base_url = url;
    }

    settings.api.base_url = arca_client::validate_base_url(&settings.api.base_url)?;
    Ok(settings)
}

/// Load the effective settings for this run.
///
/// `config_path` of `None` uses [`default_config_path`].
pub fn resolve_settings(config_path: Option<&Path>, flag_api_url: Option<&str>) -> Result<Settings> {
    let settings = match config_path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_settings(&path),
        None => Settings::default(),
    };

    apply_overrides(settings, std::env::var(API_URL_ENV).ok(), flag_api_url)
}
