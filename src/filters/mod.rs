//! Signal filtering for the pinch distance.
//!
//! Detector landmarks jitter by a few pixels from frame to frame. The filters
//! here damp that jitter before the distance is mapped to a control value.

/// Exponential filter for responsive smoothing
pub mod exponential;

/// Trait for single-channel smoothing filters
pub trait SignalFilter: Send + Sync {
    /// Feed a new sample and return the filtered value
    fn apply(&mut self, value: f64) -> f64;

    /// Last filtered value, if any sample has been applied
    fn current(&self) -> Option<f64>;

    /// Reset filter state
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}
