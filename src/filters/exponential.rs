use super::SignalFilter;
use crate::constants::{SMOOTHING_ALPHA_MAX, SMOOTHING_ALPHA_MIN};
use crate::{Error, Result};

/// Single-pole exponential smoothing filter
///
/// The first sample passes through unchanged; later samples are blended as
/// `raw * alpha + previous * (1 - alpha)`.
#[derive(Debug, Clone)]
pub struct ExponentialFilter {
    alpha: f64,
    last: Option<f64>,
}

impl ExponentialFilter {
    /// Create a filter, panicking on an alpha outside (0, 1]
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        assert!(Self::alpha_in_range(alpha), "Alpha must be in (0, 1]");
        Self { alpha, last: None }
    }

    /// Create a filter, reporting an out-of-range alpha as a configuration error
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] when alpha is not in (0, 1]
    pub fn try_new(alpha: f64) -> Result<Self> {
        if Self::alpha_in_range(alpha) {
            Ok(Self { alpha, last: None })
        } else {
            Err(Error::ConfigError(format!(
                "Smoothing alpha must be in (0, 1], got {alpha}"
            )))
        }
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    fn alpha_in_range(alpha: f64) -> bool {
        alpha > SMOOTHING_ALPHA_MIN && alpha <= SMOOTHING_ALPHA_MAX
    }
}

impl SignalFilter for ExponentialFilter {
    fn apply(&mut self, value: f64) -> f64 {
        let filtered = match self.last {
            Some(last) => value * self.alpha + last * (1.0 - self.alpha),
            None => value,
        };
        self.last = Some(filtered);
        filtered
    }

    fn current(&self) -> Option<f64> {
        self.last
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn name(&self) -> &str {
        "ExponentialFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_filter() {
        let mut filter = ExponentialFilter::new(0.5);

        // First value passes through
        assert_eq!(filter.apply(10.0), 10.0);

        // Second value is smoothed
        assert_eq!(filter.apply(20.0), 15.0); // 0.5 * 20 + 0.5 * 10
        assert_eq!(filter.current(), Some(15.0));
    }

    #[test]
    fn test_alpha_bounds() {
        // High alpha = less smoothing
        let mut filter1 = ExponentialFilter::new(0.9);
        filter1.apply(10.0);
        assert!((filter1.apply(20.0) - 19.0).abs() < 0.001);

        // Low alpha = more smoothing
        let mut filter2 = ExponentialFilter::new(0.1);
        filter2.apply(10.0);
        assert!((filter2.apply(20.0) - 11.0).abs() < 0.001);

        // Alpha of one disables smoothing
        let mut filter3 = ExponentialFilter::new(1.0);
        filter3.apply(10.0);
        assert_eq!(filter3.apply(20.0), 20.0);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(ExponentialFilter::try_new(0.0).is_err());
        assert!(ExponentialFilter::try_new(1.5).is_err());
        assert!(ExponentialFilter::try_new(f64::NAN).is_err());
        assert!(ExponentialFilter::try_new(0.3).is_ok());
    }

    #[test]
    fn test_reset_restarts_from_next_sample() {
        let mut filter = ExponentialFilter::new(0.3);
        filter.apply(100.0);
        filter.apply(50.0);
        filter.reset();
        assert_eq!(filter.current(), None);
        assert_eq!(filter.apply(42.0), 42.0);
    }
}
