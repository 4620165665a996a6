use crate::math::Real;

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    a + (b - a) * t
}

/// Locates `time` among `num_keys` keys evenly spaced over `[0, 1]`.
///
/// Returns the index of the first bracketing key and the interpolation factor towards the next
/// one. `time` is clamped to `[0, 1]`, and `time == 1` maps to the end of the last segment.
/// `num_keys` must be at least 2.
#[inline]
pub fn motion_segment(num_keys: usize, time: Real) -> (usize, Real) {
    debug_assert!(num_keys >= 2, "motion data needs at least two keys");
    let max_step = (num_keys - 1) as Real;
    let scaled = time.clamp(0.0, 1.0) * max_step;
    let step = (scaled as usize).min(num_keys - 2);
    (step, scaled - step as Real)
}
