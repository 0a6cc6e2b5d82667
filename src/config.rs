//! Configuration management for the hand control session

use crate::constants::{
    DEFAULT_ANGLE_MAX, DEFAULT_ANGLE_MIN, DEFAULT_BOX_COUNT, DEFAULT_BOX_HEIGHT, DEFAULT_BOX_SPACING,
    DEFAULT_BOX_WIDTH, DEFAULT_DISTANCE_MAX, DEFAULT_DISTANCE_MIN, DEFAULT_LABEL_GAP, DEFAULT_NEUTRAL_VALUE,
    DEFAULT_SMOOTHING_ALPHA, DEFAULT_TOGGLE_COOLDOWN_SECS, DEFAULT_UI_MARGIN, INDEX_FINGER_TIP_ID,
    LITTLE_FINGER_TIP_ID, NUM_HAND_LANDMARKS, SMOOTHING_ALPHA_MAX, SMOOTHING_ALPHA_MIN, THUMB_TIP_ID,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Session configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pinch distance smoothing
    pub smoothing: SmoothingConfig,

    /// Distance to control value mapping
    pub mapping: MappingConfig,

    /// Toggle box layout and debounce
    pub toggle: ToggleConfig,

    /// Detector landmark IDs
    pub landmarks: LandmarkConfig,

    /// Session-wide output behaviour
    pub session: SessionConfig,
}

/// Exponential smoothing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Weight of the newest sample, in (0, 1]
    pub alpha: f64,
}

/// Range mapping parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Pinch distance mapped to `output_min`, in pixels
    pub distance_min: f64,

    /// Pinch distance mapped to `output_max`, in pixels
    pub distance_max: f64,

    /// Control value at `distance_min`
    pub output_min: f64,

    /// Control value at `distance_max`
    pub output_max: f64,

    /// Saturate the output at the range bounds instead of extrapolating
    pub clamp: bool,
}

/// Toggle box parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Minimum seconds between two toggles of the same box
    pub cooldown_secs: f64,

    /// Boxes per hand side
    pub box_count: usize,

    /// Box width in pixels
    pub box_width: i32,

    /// Box height in pixels
    pub box_height: i32,

    /// Vertical gap between boxes in pixels
    pub box_spacing: i32,

    /// Distance from the frame edge in pixels
    pub margin: i32,

    /// Gap above the first box, reserved for the hand label
    pub label_gap: i32,
}

/// Detector landmark IDs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkConfig {
    /// Landmarks per detected hand
    pub count: usize,

    /// Thumb tip ID, one end of the pinch
    pub thumb_tip: usize,

    /// Index fingertip ID, other end of the pinch
    pub index_tip: usize,

    /// Fingertip used for box hover
    pub tracked_tip: usize,

    /// Mirror x coordinates for detectors fed un-flipped camera frames
    pub mirror_x: bool,
}

/// Output behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Control value reported for a side that has never been seen
    pub neutral_value: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_SMOOTHING_ALPHA,
        }
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            distance_min: DEFAULT_DISTANCE_MIN,
            distance_max: DEFAULT_DISTANCE_MAX,
            output_min: DEFAULT_ANGLE_MIN,
            output_max: DEFAULT_ANGLE_MAX,
            clamp: false,
        }
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: DEFAULT_TOGGLE_COOLDOWN_SECS,
            box_count: DEFAULT_BOX_COUNT,
            box_width: DEFAULT_BOX_WIDTH,
            box_height: DEFAULT_BOX_HEIGHT,
            box_spacing: DEFAULT_BOX_SPACING,
            margin: DEFAULT_UI_MARGIN,
            label_gap: DEFAULT_LABEL_GAP,
        }
    }
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        Self {
            count: NUM_HAND_LANDMARKS,
            thumb_tip: THUMB_TIP_ID,
            index_tip: INDEX_FINGER_TIP_ID,
            tracked_tip: LITTLE_FINGER_TIP_ID,
            mirror_x: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            neutral_value: DEFAULT_NEUTRAL_VALUE,
        }
    }
}

impl ToggleConfig {
    /// Cooldown as a [`Duration`]; zero if the configured value is unusable
    #[must_use]
    pub fn cooldown(&self) -> Duration {
        Duration::try_from_secs_f64(self.cooldown_secs).unwrap_or(Duration::ZERO)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_yaml()?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Smoothing
        let alpha = self.smoothing.alpha;
        if !(alpha > SMOOTHING_ALPHA_MIN && alpha <= SMOOTHING_ALPHA_MAX) {
            return Err(Error::ConfigError(format!(
                "Smoothing alpha must be in (0, 1], got {alpha}"
            )));
        }

        // Mapping
        let mapping = &self.mapping;
        if ![mapping.distance_min, mapping.distance_max, mapping.output_min, mapping.output_max]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(Error::ConfigError("Mapping bounds must be finite".to_string()));
        }
        if mapping.distance_min >= mapping.distance_max {
            return Err(Error::ConfigError(format!(
                "Distance min ({}) must be less than distance max ({})",
                mapping.distance_min, mapping.distance_max
            )));
        }

        // Toggle boxes
        let toggle = &self.toggle;
        if !toggle.cooldown_secs.is_finite() || toggle.cooldown_secs <= 0.0 {
            return Err(Error::ConfigError(format!(
                "Toggle cooldown must be a positive number of seconds, got {}",
                toggle.cooldown_secs
            )));
        }
        if toggle.box_count == 0 {
            return Err(Error::ConfigError("Box count must be greater than 0".to_string()));
        }
        if toggle.box_width <= 0 || toggle.box_height <= 0 {
            return Err(Error::ConfigError("Box width and height must be greater than 0".to_string()));
        }
        if toggle.box_spacing < 0 || toggle.margin < 0 || toggle.label_gap < 0 {
            return Err(Error::ConfigError(
                "Box spacing, margin and label gap must not be negative".to_string(),
            ));
        }
        let column_bottom = i64::try_from(toggle.box_count)
            .ok()
            .and_then(|count| count.checked_mul(i64::from(toggle.box_height) + i64::from(toggle.box_spacing)))
            .and_then(|boxes| boxes.checked_add(i64::from(toggle.margin) + i64::from(toggle.label_gap)));
        if !matches!(column_bottom, Some(bottom) if bottom <= i64::from(i32::MAX)) {
            return Err(Error::ConfigError(format!(
                "Box count {} makes the box column exceed pixel range",
                toggle.box_count
            )));
        }

        // Landmark IDs
        let landmarks = &self.landmarks;
        for (name, id) in [
            ("thumb_tip", landmarks.thumb_tip),
            ("index_tip", landmarks.index_tip),
            ("tracked_tip", landmarks.tracked_tip),
        ] {
            if id >= landmarks.count {
                return Err(Error::ConfigError(format!(
                    "Landmark {name} ({id}) is outside the detector's {} landmarks",
                    landmarks.count
                )));
            }
        }
        for (a, b) in [
            (("thumb_tip", landmarks.thumb_tip), ("index_tip", landmarks.index_tip)),
            (("thumb_tip", landmarks.thumb_tip), ("tracked_tip", landmarks.tracked_tip)),
            (("index_tip", landmarks.index_tip), ("tracked_tip", landmarks.tracked_tip)),
        ] {
            if a.1 == b.1 {
                return Err(Error::ConfigError(format!(
                    "Landmarks {} and {} must differ, both are {}",
                    a.0, b.0, a.1
                )));
            }
        }

        if !self.session.neutral_value.is_finite() {
            return Err(Error::ConfigError("Neutral value must be finite".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Control Configuration

# Pinch distance smoothing (weight of the newest sample)
smoothing:
  alpha: 0.3

# Pinch distance (pixels) to control value (servo degrees)
mapping:
  distance_min: 20.0
  distance_max: 200.0
  output_min: 0.0
  output_max: 180.0
  clamp: false

# Hover toggle boxes
toggle:
  cooldown_secs: 0.5
  box_count: 5
  box_width: 30
  box_height: 30
  box_spacing: 40
  margin: 15
  label_gap: 40

# Detector landmark IDs
landmarks:
  count: 21
  thumb_tip: 4
  index_tip: 8
  tracked_tip: 20
  mirror_x: false

# Output behaviour
session:
  neutral_value: 90.0
"#;
