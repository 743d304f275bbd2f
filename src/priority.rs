//! Integer priorities for schedulers.
//!
//! Schedulers consume small integer priorities where a **lower value means
//! higher priority**. Scores and load figures are mapped onto `0..=100`;
//! [`NO_DELEGATE_PRIORITY`] marks targets that must not receive work.

/// Lowest (least preferred) priority a usable target can get.
pub const MAX_PRIORITY: u32 = 100;

/// Priority of a target that is unreachable or cannot host the service.
pub const NO_DELEGATE_PRIORITY: u32 = MAX_PRIORITY + 1;

/// Linearly maps `value` from `[in_min, in_max]` onto `[out_max, out_min]`.
///
/// `in_min` maps to `out_max` and `in_max` maps to `out_min`. The result is
/// truncated toward zero and clamped to `[out_min, out_max]`. An empty input
/// range or a non-finite value maps to `out_max`.
///
/// # Examples
///
/// ```
/// use u_topsis::priority::map_to_priority;
///
/// // 3000 of 4000 free millicores -> priority 25.
/// assert_eq!(map_to_priority(3000.0, 0.0, 4000.0, 100, 0), 25);
/// // Out-of-range values are clamped.
/// assert_eq!(map_to_priority(9000.0, 0.0, 4000.0, 100, 0), 0);
/// ```
pub fn map_to_priority(value: f64, in_min: f64, in_max: f64, out_max: u32, out_min: u32) -> u32 {
    let span = in_max - in_min;
    if !value.is_finite() || span.is_nan() || span <= 0.0 {
        return out_max;
    }

    let hi = f64::from(out_max);
    let lo = f64::from(out_min);
    let mapped = (hi - (hi - lo) * (value - in_min) / span).trunc();
    mapped.max(lo).min(hi) as u32
}

/// Maps a preference score in `[0, 1]` to a priority in `0..=100`.
///
/// A perfect score of 1 becomes priority 0.
pub fn preference_priority(score: f64) -> u32 {
    map_to_priority(score, 0.0, 1.0, MAX_PRIORITY, 0)
}
