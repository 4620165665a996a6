//! Axis Aligned Bounding Box.

use crate::math::{Affine, Point, Real, Vector};
use crate::query::TraversalRay;
use num::Bounded;

/// An Axis Aligned Bounding Box.
///
/// Inner nodes of the hierarchy store one of these per child. The box is closed: a ray grazing
/// one of its faces counts as a hit.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates contained by this box.
    pub mins: Point<Real>,
    /// The point with the largest coordinates contained by this box.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new Aabb.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid `Aabb` with `mins` components set to `Real::max_value` and `maxs`
    /// components set to `-Real::max_value`.
    ///
    /// This is often used as the initial values of some `Aabb` merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Computes the smallest `Aabb` containing every point of `pts`.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(pt);
        }
        result
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this `Aabb`, i.e., `self.maxs - self.mins`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// The smallest `Aabb` containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// The eight corners of this `Aabb`.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// The `Aabb` bounding `self` once transformed by `m`.
    pub fn transform_by(&self, m: &Affine<Real>) -> Self {
        Self::from_points(self.vertices().into_iter().map(|pt| m * pt))
    }

    /// Clips the traversal ray against this box with the slab method.
    ///
    /// Returns the entry distance, clamped to be non-negative, when the clipped segment
    /// `[near, far]` is not empty with `far <= max_toi`. The ray's inverse direction must be
    /// finite, which the traversal ray guarantees by clamping tiny direction components.
    #[inline]
    pub fn clip_traversal_ray(&self, ray: &TraversalRay, max_toi: Real) -> Option<Real> {
        let lo = (self.mins - ray.origin).component_mul(&ray.inv_dir);
        let hi = (self.maxs - ray.origin).component_mul(&ray.inv_dir);
        let near = lo.inf(&hi).max().max(0.0);
        let far = lo.sup(&hi).min().min(max_toi);

        (far >= near).then_some(near)
    }
}
