//! Polyedit Settings Crate
//!
//! Handles editor configuration, validation and configuration files.

pub mod config;
pub mod error;

pub use config::{
    config_dir, default_config_path, CreationTrigger, EditorConfig, EventHistorySettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
