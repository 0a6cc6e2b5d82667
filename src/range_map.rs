//! Linear mapping from a pixel distance domain to a control range.

use crate::{config::MappingConfig, Error, Result};

/// Linearly map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values outside the input domain extrapolate along the same line.
#[must_use]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

/// Validated range mapping with optional output saturation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMapper {
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    clamp: bool,
}

impl RangeMapper {
    /// # Errors
    ///
    /// Returns a configuration error if a bound is not finite or the input
    /// domain is empty or inverted
    pub fn new(in_min: f64, in_max: f64, out_min: f64, out_max: f64, clamp: bool) -> Result<Self> {
        if ![in_min, in_max, out_min, out_max].iter().all(|v| v.is_finite()) {
            return Err(Error::ConfigError("Mapping bounds must be finite".to_string()));
        }
        if in_min >= in_max {
            return Err(Error::ConfigError(format!(
                "Distance min ({in_min}) must be less than distance max ({in_max})"
            )));
        }
        Ok(Self {
            in_min,
            in_max,
            out_min,
            out_max,
            clamp,
        })
    }

    /// # Errors
    ///
    /// See [`RangeMapper::new`]
    pub fn from_config(config: &MappingConfig) -> Result<Self> {
        Self::new(
            config.distance_min,
            config.distance_max,
            config.output_min,
            config.output_max,
            config.clamp,
        )
    }

    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let mapped = map_range(value, self.in_min, self.in_max, self.out_min, self.out_max);
        if self.clamp {
            mapped.clamp(self.out_min.min(self.out_max), self.out_min.max(self.out_max))
        } else {
            mapped
        }
    }
}
