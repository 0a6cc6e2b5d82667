//! Constants used throughout the library

/// Landmarks per hand in the detector's numbering scheme
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Detector landmark IDs
pub const THUMB_TIP_ID: usize = 4;
pub const INDEX_FINGER_TIP_ID: usize = 8;
pub const LITTLE_FINGER_TIP_ID: usize = 20;

/// Default exponential smoothing factor
pub const DEFAULT_SMOOTHING_ALPHA: f64 = 0.3;

/// Smoothing factor bounds, exclusive lower and inclusive upper
pub const SMOOTHING_ALPHA_MIN: f64 = 0.0;
pub const SMOOTHING_ALPHA_MAX: f64 = 1.0;

/// Default pinch distance domain in pixels
pub const DEFAULT_DISTANCE_MIN: f64 = 20.0;
pub const DEFAULT_DISTANCE_MAX: f64 = 200.0;

/// Default output range in servo degrees
pub const DEFAULT_ANGLE_MIN: f64 = 0.0;
pub const DEFAULT_ANGLE_MAX: f64 = 180.0;

/// Control value reported for a side that has never been observed
pub const DEFAULT_NEUTRAL_VALUE: f64 = 90.0;

/// Minimum seconds between two toggles of the same box
pub const DEFAULT_TOGGLE_COOLDOWN_SECS: f64 = 0.5;

/// Toggle box layout defaults in pixels
pub const DEFAULT_BOX_COUNT: usize = 5;
pub const DEFAULT_BOX_WIDTH: i32 = 30;
pub const DEFAULT_BOX_HEIGHT: i32 = 30;
pub const DEFAULT_BOX_SPACING: i32 = 40;
pub const DEFAULT_UI_MARGIN: i32 = 15;

/// Vertical gap between the margin and the first box, left for the hand label
pub const DEFAULT_LABEL_GAP: i32 = 40;
