//! Easing curves over normalized time
//!
//! All curves accept t in [0, 1] only. Out-of-range input is an error, not
//! clamped: callers normalize with `normalized()` first.

use thiserror::Error;

/// Invalid easing input
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EasingError {
    #[error("normalized time {0} is outside [0, 1]")]
    OutOfRange(f32),
}

#[inline]
fn check(t: f32) -> Result<f32, EasingError> {
    if (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(EasingError::OutOfRange(t))
    }
}

/// Quadratic ease-in: `t²`
pub fn ease_in(t: f32) -> Result<f32, EasingError> {
    let t = check(t)?;
    Ok(t * t)
}

/// Quadratic ease-out: `1 - (1 - t)²`
pub fn ease_out(t: f32) -> Result<f32, EasingError> {
    let t = check(t)?;
    Ok(1.0 - (1.0 - t) * (1.0 - t))
}

/// Symmetric quadratic ease-in-out
pub fn ease_in_out(t: f32) -> Result<f32, EasingError> {
    let t = check(t)?;
    if t < 0.5 {
        Ok(2.0 * t * t)
    } else {
        let u = -2.0 * t + 2.0;
        Ok(1.0 - u * u / 2.0)
    }
}

/// Progress fraction `elapsed / duration`, clamped to [0, 1].
/// A non-positive duration counts as finished.
pub fn normalized(elapsed_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ease_in_out_landmarks() {
        assert_eq!(ease_in_out(0.0), Ok(0.0));
        assert_eq!(ease_in_out(1.0), Ok(1.0));
        assert_eq!(ease_in_out(0.5), Ok(0.5));
    }

    #[test]
    fn test_ease_in_and_out() {
        assert_eq!(ease_in(0.5), Ok(0.25));
        assert_eq!(ease_out(0.5), Ok(0.75));
        assert_eq!(ease_out(0.0), Ok(0.0));
        assert_eq!(ease_out(1.0), Ok(1.0));
    }

    #[test]
    fn test_out_of_range_fails() {
        for t in [-0.01, 1.01] {
            assert_eq!(ease_in(t), Err(EasingError::OutOfRange(t)));
            assert_eq!(ease_out(t), Err(EasingError::OutOfRange(t)));
            assert_eq!(ease_in_out(t), Err(EasingError::OutOfRange(t)));
        }
        assert!(ease_in_out(f32::NAN).is_err());
    }

    #[test]
    fn test_normalized_clamps() {
        assert_eq!(normalized(-5.0, 500.0), 0.0);
        assert_eq!(normalized(250.0, 500.0), 0.5);
        assert_eq!(normalized(900.0, 500.0), 1.0);
        assert_eq!(normalized(0.0, 0.0), 1.0);
    }

    proptest! {
        #[test]
        fn prop_ease_in_is_square(t in 0.0f32..=1.0) {
            prop_assert!((ease_in(t).unwrap() - t * t).abs() < 1e-6);
        }

        #[test]
        fn prop_ease_out_formula(t in 0.0f32..=1.0) {
            let expected = 1.0 - (1.0 - t) * (1.0 - t);
            prop_assert!((ease_out(t).unwrap() - expected).abs() < 1e-6);
        }

        #[test]
        fn prop_curves_stay_in_unit_range(t in 0.0f32..=1.0) {
            for v in [ease_in(t).unwrap(), ease_out(t).unwrap(), ease_in_out(t).unwrap()] {
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }

        #[test]
        fn prop_ease_in_out_is_monotonic(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_out(lo).unwrap() <= ease_in_out(hi).unwrap() + 1e-6);
        }

        #[test]
        fn prop_normalized_always_accepted(elapsed in -1e6f64..1e6, duration in 1.0f64..1e5) {
            let t = normalized(elapsed, duration);
            prop_assert!(ease_in_out(t).is_ok());
        }
    }
}
