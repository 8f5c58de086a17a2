#![forbid(unsafe_code)]

//! Tunable carousel parameters as data.
//!
//! [`CarouselConfig`] captures every timing and geometry constant the
//! controller uses so hosts can adjust them without code changes. The
//! defaults reproduce the team view exactly.
//!
//! # Loading
//!
//! ```toml
//! # carousel.toml
//! auto_advance_ms = 4000
//! settle_ms = 350
//! swipe_threshold_px = 40.0
//! ```
//!
//! ```rust,ignore
//! let config = CarouselConfig::from_toml_file("carousel.toml")?;
//! let config = CarouselConfig::from_json_str(json)?;
//! ```
//!
//! Missing fields fall back to their defaults.

#[cfg(feature = "config-files")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use web_time::Duration;

/// Period of the auto-advance timer.
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 3000;
/// Length of the slide animation; the transition lock is held this long.
pub const DEFAULT_SETTLE_MS: u64 = 500;
/// Horizontal travel (logical pixels) that turns a touch into a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;
/// Viewports narrower than this are mobile.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;
/// Leading items repeated after the second full copy in the extended sequence.
pub const DEFAULT_CLONE_TAIL: usize = 3;

/// Carousel timing and geometry parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Auto-advance period in milliseconds.
    pub auto_advance_ms: u64,
    /// Transition lock duration in milliseconds.
    pub settle_ms: u64,
    /// Minimum horizontal swipe distance in logical pixels.
    pub swipe_threshold_px: f64,
    /// Width below which the viewport is considered mobile.
    pub mobile_breakpoint_px: u32,
    /// Number of leading items appended after the repeated copy.
    pub clone_tail: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: DEFAULT_AUTO_ADVANCE_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            clone_tail: DEFAULT_CLONE_TAIL,
        }
    }
}

impl CarouselConfig {
    /// Auto-advance period.
    #[must_use]
    pub fn auto_advance_interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }

    /// Transition lock duration.
    #[must_use]
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-files")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-files")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-files")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-files")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.auto_advance_ms == 0 {
            errors.push("auto_advance_ms must be > 0".into());
        }
        if self.settle_ms == 0 {
            errors.push("settle_ms must be > 0".into());
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px <= 0.0 {
            errors.push(format!(
                "swipe_threshold_px must be finite and > 0, got {}",
                self.swipe_threshold_px
            ));
        }
        if self.mobile_breakpoint_px == 0 {
            errors.push("mobile_breakpoint_px must be > 0".into());
        }

        errors
    }

    #[cfg(feature = "config-files")]
    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a carousel configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config-files")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config-files")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config-files")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config-files")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config-files")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config-files")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_team_view() {
        let config = CarouselConfig::default();
        assert_eq!(config.auto_advance_interval(), Duration::from_millis(3000));
        assert_eq!(config.settle_duration(), Duration::from_millis(500));
        assert_eq!(config.swipe_threshold_px, 50.0);
        assert_eq!(config.mobile_breakpoint_px, 768);
        assert_eq!(config.clone_tail, 3);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn validate_reports_every_bad_field() {
        let config = CarouselConfig {
            auto_advance_ms: 0,
            settle_ms: 0,
            swipe_threshold_px: f64::NAN,
            mobile_breakpoint_px: 0,
            clone_tail: 0,
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 4, "{errors:?}");
        assert!(errors.iter().any(|e| e.contains("swipe_threshold_px")));
    }

    #[test]
    fn zero_clone_tail_is_allowed() {
        let config = CarouselConfig {
            clone_tail: 0,
            ..CarouselConfig::default()
        };
        assert!(config.validate().is_empty());
    }

    #[test]
    fn validation_error_display() {
        let err = ConfigError::Validation(vec!["x".into(), "y".into()]);
        assert_eq!(err.to_string(), "validation errors: x; y");
    }

    #[cfg(feature = "config-files")]
    #[test]
    fn toml_partial_uses_defaults() {
        let config = CarouselConfig::from_toml_str("settle_ms = 250\n").expect("valid toml");
        assert_eq!(config.settle_ms, 250);
        assert_eq!(config.auto_advance_ms, DEFAULT_AUTO_ADVANCE_MS);
    }

    #[cfg(feature = "config-files")]
    #[test]
    fn json_rejects_invalid_values() {
        let err = CarouselConfig::from_json_str(r#"{"auto_advance_ms": 0}"#)
            .expect_err("zero interval must be rejected");
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[cfg(feature = "config-files")]
    #[test]
    fn toml_file_round_trip() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "auto_advance_ms = 1200\nmobile_breakpoint_px = 600").expect("write");
        let config = CarouselConfig::from_toml_file(file.path()).expect("load");
        assert_eq!(config.auto_advance_ms, 1200);
        assert_eq!(config.mobile_breakpoint_px, 600);
    }

    #[cfg(feature = "config-files")]
    #[test]
    fn missing_file_is_io_error() {
        let err = CarouselConfig::from_toml_file("/nonexistent/carousel.toml")
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
