//! Hand identities and the detector-facing observation types.
//!
//! The landmark detector itself lives outside this crate. Its per-frame output
//! is described here as plain data so any detector binding can feed the
//! tracking session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::time::Duration;

/// Which hand a detection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandSide {
    #[serde(alias = "left")]
    Left,
    #[serde(alias = "right")]
    Right,
}

impl HandSide {
    /// Both sides in output order.
    pub const ALL: [HandSide; 2] = [HandSide::Left, HandSide::Right];

    /// Label as reported by the detector's handedness classifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }

    /// Parse a handedness label, ignoring case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for HandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total mapping from [`HandSide`] to a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerSide<T> {
    pub left: T,
    pub right: T,
}

impl<T> PerSide<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// Build both entries from a per-side constructor.
    pub fn from_fn(mut f: impl FnMut(HandSide) -> T) -> Self {
        Self {
            left: f(HandSide::Left),
            right: f(HandSide::Right),
        }
    }

    /// Iterate entries in [`HandSide::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (HandSide, &T)> {
        [(HandSide::Left, &self.left), (HandSide::Right, &self.right)].into_iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(HandSide, &T) -> U) -> PerSide<U> {
        PerSide {
            left: f(HandSide::Left, &self.left),
            right: f(HandSide::Right, &self.right),
        }
    }
}

impl<T> Index<HandSide> for PerSide<T> {
    type Output = T;

    fn index(&self, side: HandSide) -> &T {
        match side {
            HandSide::Left => &self.left,
            HandSide::Right => &self.right,
        }
    }
}

impl<T> IndexMut<HandSide> for PerSide<T> {
    fn index_mut(&mut self, side: HandSide) -> &mut T {
        match side {
            HandSide::Left => &mut self.left,
            HandSide::Right => &mut self.right,
        }
    }
}

/// A landmark in normalized image coordinates (0.0 to 1.0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
}

impl LandmarkPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One hand reported by the detector for a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    pub side: HandSide,
    /// Landmarks indexed by the detector's landmark ID
    pub landmarks: Vec<LandmarkPoint>,
}

impl HandObservation {
    pub fn new(side: HandSide, landmarks: Vec<LandmarkPoint>) -> Self {
        Self { side, landmarks }
    }
}

/// Everything the detector reported for one frame, in report order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameObservation {
    pub hands: Vec<HandObservation>,
}

impl FrameObservation {
    pub fn new(hands: Vec<HandObservation>) -> Self {
        Self { hands }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

/// A successfully acquired frame together with its detector output.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFrame {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Capture time relative to the start of the session
    pub timestamp: Duration,
    pub observation: FrameObservation,
}

impl CapturedFrame {
    pub fn new(width: u32, height: u32, timestamp: Duration, observation: FrameObservation) -> Self {
        Self {
            width,
            height,
            timestamp,
            observation,
        }
    }
}
