//! Analysis settings persistence.
//!
//! The only required input is the log path. It defaults to `kuka_robot.log`
//! next to the executable and can be overridden in `settings.json` inside the
//! platform config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log file looked up next to the program when no override is configured
pub const DEFAULT_LOG_FILENAME: &str = "kuka_robot.log";

/// Maximum points rendered per joint chart
pub const DEFAULT_MAX_CHART_POINTS: usize = 2000;

/// Settings for a single analysis run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Explicit log file location; `None` uses the default next to the executable
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    #[serde(default = "default_max_chart_points")]
    pub max_chart_points: usize,
}

fn default_version() -> u32 {
    1
}

fn default_max_chart_points() -> usize {
    DEFAULT_MAX_CHART_POINTS
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            version: 1,
            log_path: None,
            max_chart_points: DEFAULT_MAX_CHART_POINTS,
        }
    }
}

impl AnalysisSettings {
    /// Get the config directory path for jointlog
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jointlog"))
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file: {}", e))?;
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse settings: {}", e))
    }

    /// Effective input log path
    pub fn log_path(&self) -> PathBuf {
        match &self.log_path {
            Some(path) => path.clone(),
            None => Self::default_log_path(),
        }
    }

    /// `kuka_robot.log` in the executable's directory, or the working directory
    /// if the executable location is unknown
    pub fn default_log_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_LOG_FILENAME)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILENAME))
    }
}
