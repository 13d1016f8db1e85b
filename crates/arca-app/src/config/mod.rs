//! Configuration file parsing for the ARCA console
//!
//! Supports `<config_dir>/arca-console/config.toml`, an explicit `--config`
//! path, and the `ARCA_API_URL` environment override.

pub mod settings;
pub mod types;

pub use settings::{
    apply_overrides, default_config_path, init_config, load_settings, resolve_settings,
    API_URL_ENV,
};
pub use types::*;
