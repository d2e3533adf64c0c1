//! Overlay timing and geometry configuration.
//!
//! Every field has a default matching the stock browser chrome, so an empty
//! TOML document is a valid configuration. The binary reads the file named by
//! `OVERLAY_CHROME_CONFIG` and falls back to defaults when it is absent.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming the TOML config file.
pub const CONFIG_ENV_VAR: &str = "OVERLAY_CHROME_CONFIG";

/// Error while loading an [`OverlayConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Length of every entrance/exit animation.
    pub animation_duration_ms: u64,
    /// Height of a toast; also the slide distance for toasts and notifications.
    pub toast_height: f32,
    /// How long a toast stays up before it dismisses itself.
    pub toast_display_time_ms: u64,
    /// Drag distance a toast tolerates before it starts to fade.
    pub toast_drag_threshold: f32,
    /// Slide distance of the back/forward list.
    pub back_forward_offset: f32,
    /// Exit slide distance of a full-screen modal.
    pub full_screen_offset: f32,
    /// Drag distance that moves a sheet to a new position.
    pub sheet_slide_threshold: f32,
    /// Backdrop opacity behind an open sheet.
    pub sheet_backdrop_max_opacity: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: 200,
            toast_height: 53.0,
            toast_display_time_ms: 4500,
            toast_drag_threshold: 15.0,
            back_forward_offset: 100.0,
            full_screen_offset: 100.0,
            sheet_slide_threshold: 100.0,
            sheet_backdrop_max_opacity: 0.2,
        }
    }
}

impl OverlayConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "animation_duration_ms must be greater than zero".into(),
            ));
        }
        let lengths = [
            ("toast_height", self.toast_height),
            ("toast_drag_threshold", self.toast_drag_threshold),
            ("back_forward_offset", self.back_forward_offset),
            ("full_screen_offset", self.full_screen_offset),
            ("sheet_slide_threshold", self.sheet_slide_threshold),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive length, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.sheet_backdrop_max_opacity) {
            return Err(ConfigError::Invalid(format!(
                "sheet_backdrop_max_opacity must be within [0, 1], got {}",
                self.sheet_backdrop_max_opacity
            )));
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub fn toast_display_time(&self) -> Duration {
        Duration::from_millis(self.toast_display_time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = OverlayConfig::from_toml_str("").unwrap();
        assert_eq!(config, OverlayConfig::default());
        assert_eq!(config.animation_duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_partial_override() {
        let config =
            OverlayConfig::from_toml_str("toast_height = 60.0\nanimation_duration_ms = 350\n")
                .unwrap();
        assert!((config.toast_height - 60.0).abs() < 1e-6);
        assert_eq!(config.animation_duration_ms, 350);
        assert_eq!(config.toast_display_time_ms, 4500);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = OverlayConfig::from_toml_str("toast_colour = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = OverlayConfig::from_toml_str("animation_duration_ms = 0").unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("animation_duration_ms")),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_backdrop_opacity_range() {
        let err = OverlayConfig::from_toml_str("sheet_backdrop_max_opacity = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = OverlayConfig::load("/nonexistent/overlay-chrome.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
