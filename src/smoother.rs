//! Per-hand smoothing of the pinch distance.

use crate::{
    filters::{exponential::ExponentialFilter, SignalFilter},
    hand::{HandSide, PerSide},
    Result,
};
use log::debug;

/// One exponential filter per hand side.
///
/// A side's value is absent until its first sample and is never cleared by
/// missing detections, so a hand that drops out for a few frames resumes from
/// where it left off.
#[derive(Debug, Clone)]
pub struct HandSmoother {
    filters: PerSide<ExponentialFilter>,
}

impl HandSmoother {
    /// Create a smoother with the given smoothing factor
    ///
    /// # Errors
    ///
    /// Returns a configuration error when alpha is not in (0, 1]
    pub fn new(alpha: f64) -> Result<Self> {
        let filter = ExponentialFilter::try_new(alpha)?;
        Ok(Self {
            filters: PerSide::new(filter.clone(), filter),
        })
    }

    /// Blend a raw distance into the side's running value and return it
    pub fn update(&mut self, side: HandSide, raw: f64) -> f64 {
        let smoothed = self.filters[side].apply(raw);
        debug!("{side} smoothing: raw {raw:.1} -> {smoothed:.2}");
        smoothed
    }

    /// Current smoothed value for `side`
    #[must_use]
    pub fn value(&self, side: HandSide) -> Option<f64> {
        self.filters[side].current()
    }

    /// Forget the running value of one side
    pub fn reset(&mut self, side: HandSide) {
        self.filters[side].reset();
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.filters.left.alpha()
    }
}
