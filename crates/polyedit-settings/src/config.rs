//! Editor configuration for polyedit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension.
//!
//! Configuration is organized into:
//! - Drag rate limiting
//! - Creation and removal vertex counts
//! - Midpoint geometry and creation trigger
//! - Notification history

use polyedit_core::geometry::MidpointPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "polyedit";

/// File name of the default configuration file.
pub const CONFIG_FILE_NAME: &str = "editor.toml";

/// How a new polygon is started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreationTrigger {
    /// A tap on empty map while idle starts a draft.
    #[default]
    Tap,
    /// Taps only accumulate after `start_polygon()`.
    Explicit,
}

impl std::fmt::Display for CreationTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tap => write!(f, "tap"),
            Self::Explicit => write!(f, "explicit"),
        }
    }
}

/// Notification history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventHistorySettings {
    /// Keep published events in memory
    pub enabled: bool,
    /// Maximum events retained
    pub max_size: usize,
}

impl Default for EventHistorySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            max_size: 1000,
        }
    }
}

/// Complete editor configuration
///
/// Every field has a default, so partial files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Drag rate-limit window in milliseconds; 0 applies drags immediately
    pub drag_rate_limit_ms: u64,
    /// Taps needed to complete a new polygon
    pub creation_vertex_count: usize,
    /// A vertex removal leaving fewer vertices than this deletes the polygon
    pub removal_floor: usize,
    /// Geometry used for midpoint handles
    pub midpoint_policy: MidpointPolicy,
    /// How creation starts
    pub creation_trigger: CreationTrigger,
    /// Whether an idle tap inside a polygon selects it
    pub select_on_idle_tap: bool,
    /// Notification history
    pub event_history: EventHistorySettings,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            drag_rate_limit_ms: 25,
            creation_vertex_count: 3,
            removal_floor: 4,
            midpoint_policy: MidpointPolicy::default(),
            creation_trigger: CreationTrigger::default(),
            select_on_idle_tap: false,
            event_history: EventHistorySettings::default(),
        }
    }
}

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Validate and write the configuration to `path`
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Saved editor config to {}", path.display());
        Ok(())
    }

    /// Load `path` if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> SettingsResult<()> {
        if self.creation_vertex_count < 3 {
            return Err(ConfigError::out_of_range(
                "creation_vertex_count",
                self.creation_vertex_count,
            )
            .into());
        }

        if self.removal_floor < 3 {
            return Err(SettingsError::InvalidSetting {
                key: "removal_floor".to_string(),
                reason: format!("must be at least 3, got {}", self.removal_floor),
            });
        }

        if self.event_history.max_size == 0 {
            return Err(ConfigError::out_of_range("event_history.max_size", 0).into());
        }

        Ok(())
    }

    /// Drag window as a duration
    pub fn drag_rate_limit(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.drag_rate_limit_ms)
    }
}

/// Platform config directory for polyedit
pub fn config_dir() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|p| p.join(CONFIG_DIR_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no config or home directory available".to_string())
        })
}

/// Path of the default configuration file
pub fn default_config_path() -> SettingsResult<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}
