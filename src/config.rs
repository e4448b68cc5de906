//! Configuration management for droplist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BORDER_COLOR, DEFAULT_HOVER_COLOR, DEFAULT_SEPARATOR_COLOR,
    DEFAULT_TEXT_COLOR, DEFAULT_TOGGLE_LABEL,
};
use crate::utils::color;
use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Stock palette, used when a hand-built theme value fails to parse.
// Values loaded from a file have already passed validation.
const FALLBACK_BORDER: Color = Color::Rgb(0x20, 0xCC, 0x20);
const FALLBACK_HOVER: Color = Color::Rgb(0x20, 0xCC, 0xCC);
const FALLBACK_SEPARATOR: Color = Color::Rgb(0xCC, 0xCC, 0xCC);
const FALLBACK_TEXT: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Label shown on the toggle-only variant's button
    pub default_label: String,
}

/// Widget colors, as `#RRGGBB` strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Frame color for the toggle button and the list container
    pub border_color: String,
    /// Background of the item row under the pointer
    pub hover_color: String,
    /// Rule between the toggle button and the first item
    pub separator_color: String,
    /// Foreground for the button label and item text
    pub text_color: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            default_label: DEFAULT_TOGGLE_LABEL.to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            hover_color: DEFAULT_HOVER_COLOR.to_string(),
            separator_color: DEFAULT_SEPARATOR_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parsed frame color
    #[must_use]
    pub fn border(&self) -> Color {
        color::parse_hex_color(&self.border_color).unwrap_or(FALLBACK_BORDER)
    }

    /// Parsed hover background
    #[must_use]
    pub fn hover(&self) -> Color {
        color::parse_hex_color(&self.hover_color).unwrap_or(FALLBACK_HOVER)
    }

    /// Parsed separator rule color
    #[must_use]
    pub fn separator(&self) -> Color {
        color::parse_hex_color(&self.separator_color).unwrap_or(FALLBACK_SEPARATOR)
    }

    /// Parsed text color
    #[must_use]
    pub fn text(&self) -> Color {
        color::parse_hex_color(&self.text_color).unwrap_or(FALLBACK_TEXT)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::find_config_file() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.default_label.is_empty() {
            anyhow::bail!("default_label must not be empty");
        }

        let colors = [
            ("border_color", &self.theme.border_color),
            ("hover_color", &self.theme.hover_color),
            ("separator_color", &self.theme.separator_color),
            ("text_color", &self.theme.text_color),
        ];
        for (name, value) in colors {
            if let Err(e) = color::parse_hex_color(value) {
                anyhow::bail!("Invalid {name} '{value}': {e}");
            }
        }

        Ok(())
    }
}
