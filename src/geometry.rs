//! Landmark geometry: normalized detector coordinates to pixel measurements.

use crate::{
    config::LandmarkConfig,
    error::{Error, Result},
    hand::LandmarkPoint,
    utils::safe_cast::{f64_to_i32, f64_to_u32_floor},
};
use serde::Serialize;

/// A point in integer pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, floored to whole pixels
    ///
    /// # Errors
    ///
    /// Only fails if the distance does not fit in u32
    pub fn distance_to(&self, other: PixelPoint) -> Result<u32> {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        f64_to_u32_floor(dx.hypot(dy))
    }
}

/// Scale a normalized landmark to the frame and truncate to pixels
///
/// # Errors
///
/// Returns an error if a coordinate is not finite or falls outside i32 range
pub fn to_pixel(point: LandmarkPoint, width: u32, height: u32) -> Result<PixelPoint> {
    Ok(PixelPoint {
        x: f64_to_i32(point.x * f64::from(width))?,
        y: f64_to_i32(point.y * f64::from(height))?,
    })
}

/// Look up a landmark by detector ID
///
/// # Errors
///
/// Returns [`Error::MissingLandmark`] when the detector reported fewer points
pub fn landmark(landmarks: &[LandmarkPoint], index: usize) -> Result<LandmarkPoint> {
    landmarks.get(index).copied().ok_or(Error::MissingLandmark {
        index,
        len: landmarks.len(),
    })
}

/// Pixel measurements taken from one hand in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandGeometry {
    pub thumb_tip: PixelPoint,
    pub index_tip: PixelPoint,
    /// Point tested against the toggle boxes
    pub tracked: PixelPoint,
    /// Thumb-to-index distance in pixels
    pub pinch_distance: u32,
}

/// Converts landmark sequences into [`HandGeometry`] using the configured IDs.
#[derive(Debug, Clone)]
pub struct GeometryExtractor {
    landmarks: LandmarkConfig,
}

impl GeometryExtractor {
    #[must_use]
    pub fn new(landmarks: LandmarkConfig) -> Self {
        Self { landmarks }
    }

    /// Measure one hand in a `width` x `height` frame
    ///
    /// # Errors
    ///
    /// Fails if a configured landmark is missing or has non-finite coordinates
    pub fn extract(&self, landmarks: &[LandmarkPoint], width: u32, height: u32) -> Result<HandGeometry> {
        let thumb_tip = self.pixel(landmarks, self.landmarks.thumb_tip, width, height)?;
        let index_tip = self.pixel(landmarks, self.landmarks.index_tip, width, height)?;
        let tracked = self.pixel(landmarks, self.landmarks.tracked_tip, width, height)?;
        let pinch_distance = thumb_tip.distance_to(index_tip)?;

        Ok(HandGeometry {
            thumb_tip,
            index_tip,
            tracked,
            pinch_distance,
        })
    }

    fn pixel(&self, landmarks: &[LandmarkPoint], index: usize, width: u32, height: u32) -> Result<PixelPoint> {
        let mut point = landmark(landmarks, index)?;
        if self.landmarks.mirror_x {
            point.x = 1.0 - point.x;
        }
        to_pixel(point, width, height)
    }
}
