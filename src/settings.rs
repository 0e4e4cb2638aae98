//! Persisted appearance and motion preferences
//!
//! Stored as JSON in the platform config directory. Widget state itself is
//! never persisted; only how the controls look and move.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::animation::{SpringParams, Timing};
use crate::theme::{self, Palette};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Dark mode enabled
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Optional overrides of the palette colors
    #[serde(default)]
    pub palette: PaletteOverride,
    /// Animation settings
    #[serde(default)]
    pub motion: MotionSettings,
}

/// Hex color overrides, e.g. `"#3d5afe"`; invalid entries are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<String>,
}

impl PaletteOverride {
    /// Apply the overrides on top of `base`
    pub fn apply(&self, base: Palette) -> Palette {
        let pick = |hex: &Option<String>, fallback| {
            hex.as_deref()
                .and_then(|hex| {
                    let color = theme::parse_hex(hex);
                    if color.is_none() {
                        warn!(hex, "ignoring invalid palette color");
                    }
                    color
                })
                .unwrap_or(fallback)
        };

        Palette {
            primary: pick(&self.primary, base.primary),
            tertiary: pick(&self.tertiary, base.tertiary),
            disabled: pick(&self.disabled, base.disabled),
            ..base
        }
    }
}

/// Animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionSettings {
    /// Spring behind the button press scale
    #[serde(default = "default_press_spring")]
    pub press_spring: SpringParams,
    /// Spring behind checkbox and radio fades
    #[serde(default = "default_fade_spring")]
    pub fade_spring: SpringParams,
    /// Button color blend duration in milliseconds
    #[serde(default = "default_color_duration_ms")]
    pub color_duration_ms: u64,
    /// Disable animations and jump to final values
    #[serde(default)]
    pub reduce_motion: bool,
}

fn default_true() -> bool {
    true
}

fn default_press_spring() -> SpringParams {
    SpringParams::PRESS
}

fn default_fade_spring() -> SpringParams {
    SpringParams::FADE
}

fn default_color_duration_ms() -> u64 {
    crate::animation::COLOR_DURATION.as_millis() as u64
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            palette: PaletteOverride::default(),
            motion: MotionSettings::default(),
        }
    }
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            press_spring: default_press_spring(),
            fade_spring: default_fade_spring(),
            color_duration_ms: default_color_duration_ms(),
            reduce_motion: false,
        }
    }
}

impl MotionSettings {
    pub fn timing(&self) -> Timing {
        Timing {
            press: self.press_spring.sanitized(),
            fade: self.fade_spring.sanitized(),
            color_duration: Duration::from_millis(self.color_duration_ms),
            reduce_motion: self.reduce_motion,
        }
    }
}

impl Settings {
    /// iced theme selected by `dark_mode`
    pub fn theme(&self) -> iced::Theme {
        if self.dark_mode {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// Palette for the current theme with overrides applied
    pub fn palette(&self) -> Palette {
        self.palette.apply(Palette::for_theme(&self.theme()))
    }

    pub fn timing(&self) -> Timing {
        self.motion.timing()
    }

    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "zephyr", "Zephyr")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("zephyr-settings-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = temp_path("round-trip");
        let settings = Settings {
            dark_mode: false,
            palette: PaletteOverride {
                primary: Some("#ff0000".to_string()),
                ..PaletteOverride::default()
            },
            motion: MotionSettings {
                reduce_motion: true,
                color_duration_ms: 90,
                ..MotionSettings::default()
            },
        };

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "dark_mode": false }"#).unwrap();

        assert!(!settings.dark_mode);
        assert_eq!(settings.motion, MotionSettings::default());
        assert_eq!(settings.palette, PaletteOverride::default());

        let empty: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Settings::load_from_file(&temp_path("missing"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = temp_path("malformed");
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).unwrap();
        }
        std::fs::write(&path, "{ not json").unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_palette_overrides() {
        let overrides = PaletteOverride {
            primary: Some("#000000".to_string()),
            tertiary: Some("not a color".to_string()),
            disabled: None,
        };
        let palette = overrides.apply(Palette::DARK);

        assert_eq!(palette.primary, Color::BLACK);
        assert_eq!(palette.tertiary, Palette::DARK.tertiary);
        assert_eq!(palette.disabled, Palette::DARK.disabled);
    }

    #[test]
    fn test_theme_and_palette_follow_dark_mode() {
        let light = Settings {
            dark_mode: false,
            ..Settings::default()
        };

        assert_eq!(light.theme(), iced::Theme::Light);
        assert_eq!(light.palette(), Palette::LIGHT);
        assert_eq!(Settings::default().palette(), Palette::DARK);
    }

    #[test]
    fn test_motion_timing() {
        let motion = MotionSettings {
            press_spring: SpringParams {
                mass: -1.0,
                damping: 10.0,
                stiffness: 100.0,
            },
            color_duration_ms: 0,
            reduce_motion: true,
            ..MotionSettings::default()
        };
        let timing = motion.timing();

        assert_eq!(timing.press.mass, 1.0);
        assert_eq!(timing.press.damping, 10.0);
        assert_eq!(timing.color_duration, Duration::ZERO);
        assert!(timing.reduce_motion);
        assert_eq!(MotionSettings::default().timing(), Timing::default());
    }
}
