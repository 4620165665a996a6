use crate::math::{Real, Vector};

/// The inverse of `val`, or zero if `val` is zero.
#[inline]
pub fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

/// Component-wise [`inv`] of a vector, e.g. the inverse of a non-uniform scale.
#[inline]
pub fn inv_components(v: &Vector<Real>) -> Vector<Real> {
    v.map(inv)
}
