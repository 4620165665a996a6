//! The ray given to traversal queries.

use crate::math::{Point, Real, Vector};

/// A ray for volume traversal queries.
///
/// Points along the ray are `origin + dir * t` for `t` in `[0, tmax]`. The direction does not
/// need to be normalized: hit distances are expressed in units of `dir`.
///
/// `time` selects the motion-blur sample, in `[0, 1]`, used to interpolate moving objects and
/// motion triangles. It is ignored by traversal variants compiled without motion support.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction vector of the ray.
    pub dir: Vector<Real>,
    /// Largest parametric distance at which a hit is reported.
    pub tmax: Real,
    /// Motion-blur time sample in `[0, 1]`.
    pub time: Real,
}

impl Ray {
    /// Creates a new ray at time `0.0`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>, tmax: Real) -> Ray {
        Ray {
            origin,
            dir,
            tmax,
            time: 0.0,
        }
    }

    /// Returns a copy of this ray sampling the motion-blur time `time`.
    #[must_use]
    pub fn with_time(mut self, time: Real) -> Self {
        self.time = time;
        self
    }

    /// Computes the point at the given parameter on this ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }

    /// Can this ray be traced at all?
    ///
    /// Rays with a non-finite origin or direction, a zero-length direction, a NaN extent or a NaN
    /// time are rejected by [`crate::query::intersect_volume_all`] before any traversal happens.
    pub fn is_valid(&self) -> bool {
        self.origin.iter().all(|e| e.is_finite())
            && self.dir.iter().all(|e| e.is_finite())
            && self.dir.norm_squared() != 0.0
            && !self.tmax.is_nan()
            && !self.time.is_nan()
    }
}
