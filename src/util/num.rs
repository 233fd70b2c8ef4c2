/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `i64` to the nearest `f64`.
///
/// Values up to `MAX_SAFE_I64_INT` in magnitude convert exactly; larger ones
/// are rounded.
///
/// # Example
/// ```
/// use sage::util::num::{MAX_SAFE_I64_INT, i64_to_f64};
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-MAX_SAFE_I64_INT), -9_007_199_254_740_991.0);
/// assert_eq!(i64_to_f64(i64::MAX), 9_223_372_036_854_775_808.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64` if the value is finite, integral and exactly
/// representable; returns `None` otherwise.
///
/// # Example
/// ```
/// use sage::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}
