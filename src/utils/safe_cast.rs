//! Checked numeric conversions between detector floats and pixel integers

use crate::{Error, Result};

/// Convert a box index to a pixel multiplier
///
/// # Errors
///
/// Returns an error if the value exceeds i32::MAX
pub fn usize_to_i32(value: usize) -> Result<i32> {
    value
        .try_into()
        .map_err(|_| Error::InvalidInput(format!("Box index {value} out of pixel range")))
}

/// Convert a frame dimension to signed pixel space
///
/// # Errors
///
/// Returns an error if the value exceeds i32::MAX
pub fn u32_to_i32(value: u32) -> Result<i32> {
    value
        .try_into()
        .map_err(|_| Error::InvalidInput(format!("Frame dimension {value} too large to fit in i32")))
}

/// Truncate a scaled coordinate to an integer pixel
///
/// # Errors
///
/// Returns an error if the value is not finite or outside i32 range
#[allow(clippy::cast_possible_truncation)] // Truncation toward zero is the pixel conversion
pub fn f64_to_i32(value: f64) -> Result<i32> {
    let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value);
    if !in_range {
        return Err(Error::InvalidInput(format!("Coordinate {value} is not a representable pixel")));
    }
    Ok(value as i32)
}

/// Floor a non-negative measurement to whole pixels
///
/// # Errors
///
/// Returns an error if the value is negative, not finite, or above u32::MAX
#[allow(clippy::cast_possible_truncation)] // floor() already removed the fraction
#[allow(clippy::cast_sign_loss)] // Negative values are rejected above
pub fn f64_to_u32_floor(value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) {
        Ok(value.floor() as u32)
    } else {
        Err(Error::InvalidInput(format!(
            "Distance {value} cannot be safely converted to u32"
        )))
    }
}

#[cfg(test)]
mod box_and_pixel_casts {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn box_index_fits() {
        assert_eq!(usize_to_i32(4).unwrap(), 4);
        if usize::BITS > 32 {
            assert!(usize_to_i32(1 << 31).is_err());
        }
    }

    #[test]
    fn frame_width_fits() {
        assert_eq!(u32_to_i32(640).unwrap(), 640);
        assert!(u32_to_i32(1 << 31).is_err());
    }

    #[test]
    fn scaled_coordinate_truncates_toward_zero() {
        assert_eq!(f64_to_i32(399.99).unwrap(), 399);
        assert_eq!(f64_to_i32(-63.5).unwrap(), -63);
        assert!(f64_to_i32(f64::NEG_INFINITY).is_err());
        assert!(f64_to_i32(1e10).is_err());
    }

    #[test]
    fn pinch_distance_floors() {
        assert_eq!(f64_to_u32_floor(20.999).unwrap(), 20);
        assert_eq!(f64_to_u32_floor(0.0).unwrap(), 0);
        assert!(f64_to_u32_floor(-0.5).is_err());
        assert!(f64_to_u32_floor(f64::NAN).is_err());
        assert!(f64_to_u32_floor(5e9).is_err());
    }

    proptest! {
        #[test]
        fn whole_pixels_survive_truncation(px in -100_000i32..100_000) {
            prop_assert_eq!(f64_to_i32(f64::from(px) + 0.5).unwrap(), if px < 0 { px + 1 } else { px });
        }

        #[test]
        fn floored_distance_within_one_pixel(value in 0.0f64..1.0e9) {
            let floored = f64_to_u32_floor(value).unwrap();
            prop_assert!(f64::from(floored) <= value);
            prop_assert!(value - f64::from(floored) < 1.0);
        }
    }
}
