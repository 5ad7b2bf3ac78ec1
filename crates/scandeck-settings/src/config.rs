//! Configuration file handling and validation.
//!
//! Settings live in platform-specific directories and are stored as
//! TOML (JSON is also accepted for hand-written files).

use scandeck_capture::{ColorMode, PaperSize};
use scandeck_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow system preference
    #[default]
    System,
    /// Force light theme
    Light,
    /// Force dark theme
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "System"),
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

/// Scan acquisition defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Default scan resolution in dots per inch
    pub resolution_dpi: u32,
    /// Default pixel interpretation
    pub color_mode: ColorMode,
    /// Default page size
    pub paper_size: PaperSize,
    /// Scan both sides of each sheet
    pub duplex: bool,
    /// Show the device's own acquisition UI when scanning
    pub interactive_ui: bool,
    /// Preferred scanner name; the device default is used when unset
    pub preferred_scanner: Option<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            resolution_dpi: 200,
            color_mode: ColorMode::Rgb,
            paper_size: PaperSize::A4,
            duplex: false,
            interactive_ui: true,
            preferred_scanner: None,
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Theme preference
    pub theme: Theme,
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Ask for confirmation before deleting a page
    pub confirm_on_delete: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            window_width: 1280,
            window_height: 800,
            confirm_on_delete: true,
        }
    }
}

/// Storage and archive settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory the document archive lives in
    pub data_dir: PathBuf,
    /// Number of manifest backups to retain
    pub backup_retention: usize,
    /// Persist the document after every successful mutation
    pub autosave: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("scandeck"),
            backup_retention: 5,
            autosave: true,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Scan acquisition defaults
    pub scan: ScanSettings,
    /// UI preferences
    pub ui: UiSettings,
    /// Storage and archive settings
    pub storage: StorageSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform-specific default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scandeck")
            .join("config.toml")
    }

    /// Load config from file (TOML or JSON)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .toml or .json".to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (TOML or JSON)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .toml or .json".to_string(),
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::other(format!("Failed to create config directory: {}", e)))?;
        }
        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Load from the default location, falling back to defaults when
    /// no config file exists yet.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if path.exists() {
            match Self::load_from_file(&path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("ignoring invalid config file: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.scan.resolution_dpi == 0 {
            return Err(Error::other("Scan resolution must be > 0".to_string()));
        }

        if self.ui.window_width == 0 || self.ui.window_height == 0 {
            return Err(Error::other("Window dimensions must be > 0".to_string()));
        }

        if self.storage.backup_retention == 0 {
            return Err(Error::other("Backup retention must be > 0".to_string()));
        }

        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(Error::other("Data directory must be set".to_string()));
        }

        Ok(())
    }
}
