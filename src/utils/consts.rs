use crate::math::Real;

/// Smallest magnitude a ray direction component may have before traversal clamps it.
///
/// Keeps `1 / dir` finite so slab tests never multiply zero by infinity.
pub(crate) const DIR_CLAMP_EPSILON: Real = 8.271806E-25;
