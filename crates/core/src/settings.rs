//! Platform settings
//!
//! Settings are loaded once per deployment from a TOML file and injected
//! through the window; nothing in the lower layers reads configuration from
//! the environment directly.

use crate::error::{NagoError, NagoResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Settings
// ============================================================================

/// Deployment-level defaults the presentation layer falls back to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Page size used when a model is built with page size zero
    pub default_page_size: usize,

    /// Date display format for date and time-frame fields
    pub date_format: String,

    /// Maximum number of options rendered inline before a select collapses
    /// into a dropdown
    pub max_inline_options: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            date_format: "%Y-%m-%d".to_string(),
            max_inline_options: 12,
        }
    }
}

impl Settings {
    /// Create settings with the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the settings values
    pub fn validate(&self) -> NagoResult<()> {
        if self.default_page_size == 0 {
            return Err(NagoError::InvalidSettings(
                "default_page_size must be non-zero".to_string(),
            ));
        }
        if self.date_format.is_empty() {
            return Err(NagoError::InvalidSettings(
                "date_format cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate settings from a TOML file
    pub fn load_from_file(path: &Path) -> NagoResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NagoError::SettingsRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let settings: Settings =
            toml::from_str(&content).map_err(|e| NagoError::SettingsParse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings to a TOML file
    pub fn save_to_file(&self, path: &Path) -> NagoResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NagoError::SettingsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| NagoError::SettingsWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
