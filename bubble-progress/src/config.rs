//! Widget configuration
//!
//! Every constant the widget draws or animates with. Defaults reproduce the
//! stock look: red background, black/white track, white bubble.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::{self, Color};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Track stroke width in pixels.
    pub stroke_width: f32,
    /// Horizontal padding, applied on both sides of the track.
    pub padding: i32,
    /// Duration of a zero-distance transition.
    pub base_duration_ms: u64,
    /// Lower bound for any transition duration.
    pub min_duration_ms: u64,
    pub background_color: Color,
    pub track_filled_color: Color,
    pub track_remaining_color: Color,
    pub bubble_color: Color,
    /// Bubble corner radius.
    pub corner_radius: i32,
    pub bubble_width: i32,
    pub bubble_height: i32,
    /// Strength of the decelerating ease; 1.0 is a quadratic ease-out.
    pub decelerate_factor: f32,
    /// Anchor the bubble's arrow tip above the split point instead of the
    /// surface origin.
    pub bubble_follows_marker: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            stroke_width: 10.0,
            padding: 50,
            base_duration_ms: 1150,
            min_duration_ms: 150,
            background_color: theme::BACKGROUND,
            track_filled_color: theme::BLACK,
            track_remaining_color: theme::WHITE,
            bubble_color: theme::WHITE,
            corner_radius: 8,
            bubble_width: 85,
            bubble_height: 70,
            decelerate_factor: 1.0,
            bubble_follows_marker: true,
        }
    }
}

impl WidgetConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stroke_width > 0.0) || !self.stroke_width.is_finite() {
            return Err(invalid(format!("stroke_width must be positive, got {}", self.stroke_width)));
        }
        if self.padding < 0 {
            return Err(invalid(format!("padding must be non-negative, got {}", self.padding)));
        }
        if self.min_duration_ms > self.base_duration_ms {
            return Err(invalid(format!(
                "min_duration_ms ({}) exceeds base_duration_ms ({})",
                self.min_duration_ms, self.base_duration_ms
            )));
        }
        if !(self.decelerate_factor > 0.0) || !self.decelerate_factor.is_finite() {
            return Err(invalid(format!(
                "decelerate_factor must be positive, got {}",
                self.decelerate_factor
            )));
        }
        if self.corner_radius < 0 {
            return Err(invalid(format!("corner_radius must be non-negative, got {}", self.corner_radius)));
        }
        // Corners on both sides plus the arrow must fit in the bubble.
        let arrow_height = self.bubble_width / 3 / 2;
        if self.bubble_width < 2 * self.corner_radius
            || self.bubble_height < 2 * self.corner_radius + arrow_height
        {
            return Err(invalid(format!(
                "bubble {}x{} too small for corner radius {}",
                self.bubble_width, self.bubble_height, self.corner_radius
            )));
        }
        Ok(())
    }

    pub fn base_duration(&self) -> Duration {
        Duration::from_millis(self.base_duration_ms)
    }

    pub fn min_duration(&self) -> Duration {
        Duration::from_millis(self.min_duration_ms)
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        WidgetConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = WidgetConfig::from_json_str(r##"{ "padding": 20, "bubble_color": "#112233" }"##).unwrap();
        assert_eq!(config.padding, 20);
        assert_eq!(config.bubble_color, Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(config.base_duration_ms, 1150);
        assert_eq!(config.background_color, theme::BACKGROUND);
    }

    #[test]
    fn serializes_colors_as_hex() {
        let json = serde_json::to_string(&WidgetConfig::default()).unwrap();
        assert!(json.contains(r##""background_color":"#EC5745""##), "{json}");
        let back = WidgetConfig::from_json_str(&json).unwrap();
        assert_eq!(back, WidgetConfig::default());
    }

    #[test]
    fn rejects_bad_color() {
        let err = WidgetConfig::from_json_str(r#"{ "bubble_color": "white" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn rejects_inconsistent_values() {
        for json in [
            r#"{ "stroke_width": 0 }"#,
            r#"{ "padding": -1 }"#,
            r#"{ "min_duration_ms": 2000 }"#,
            r#"{ "decelerate_factor": 0 }"#,
            r#"{ "bubble_width": 10 }"#,
        ] {
            let err = WidgetConfig::from_json_str(json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{json}: {err}");
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "base_duration_ms": 900, "min_duration_ms": 100 }}"#).unwrap();

        let config = WidgetConfig::load(file.path()).unwrap();
        assert_eq!(config.base_duration(), Duration::from_millis(900));
        assert_eq!(config.min_duration(), Duration::from_millis(100));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WidgetConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
