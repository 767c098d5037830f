use std::time::Duration;

/// Largest index accepted as a jump target (`i32::MAX`).
pub const MAX_JUMP_TARGET: i64 = i32::MAX as i64;

/// Promotes an `i64` to `f64` for mixed integer/float arithmetic.
///
/// Integers beyond `2^53` lose precision, exactly like an implicit numeric
/// promotion would.
///
/// ## Example
/// ```
/// use bna::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}
/// Converts an `f64` to `i64`, truncating toward zero and saturating at the
/// bounds of `i64`. `NaN` becomes `0`.
///
/// ## Example
/// ```
/// use bna::util::num::f64_to_i64_saturating;
///
/// assert_eq!(f64_to_i64_saturating(3.0), 3);
/// assert_eq!(f64_to_i64_saturating(1e300), i64::MAX);
/// assert_eq!(f64_to_i64_saturating(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_i64_saturating(value: f64) -> i64 {
    value as i64
}
/// Converts a length to `i64`, saturating at `i64::MAX`.
#[must_use]
pub fn usize_to_i64_saturating(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
/// Safely converts an `i64` to a `usize` if and only if it can be represented
/// exactly.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds the maximum
/// representable `usize`.
///
/// ## Parameters
/// - `value`: The integer value to convert.
/// - `error`: The error to return if the conversion fails.
///
/// ## Example
/// ```
/// use bna::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(42, "negative"), Ok(42));
/// assert_eq!(i64_to_usize_checked(-1, "negative"), Err("negative"));
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}
/// Converts a number of seconds into a [`Duration`].
///
/// ## Returns
/// - `Some(Duration)`: For finite, non-negative values that fit a `Duration`.
/// - `None`: For negative, infinite or `NaN` values.
///
/// ## Example
/// ```
/// use std::time::Duration;
///
/// use bna::util::num::seconds_to_duration;
///
/// assert_eq!(seconds_to_duration(1.5), Some(Duration::from_millis(1500)));
/// assert_eq!(seconds_to_duration(0.0), Some(Duration::ZERO));
/// assert_eq!(seconds_to_duration(-1.0), None);
/// assert_eq!(seconds_to_duration(f64::NAN), None);
/// ```
#[must_use]
pub fn seconds_to_duration(seconds: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(seconds).ok()
}
