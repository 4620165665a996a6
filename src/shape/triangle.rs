//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Affine, Point, Real};
use crate::utils;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The `Aabb` of this triangle.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices())
    }

    /// Transforms each vertex of this triangle by `m`.
    pub fn transformed(&self, m: &Affine<Real>) -> Self {
        Triangle::new(m * self.a, m * self.b, m * self.c)
    }

    /// Per-vertex linear interpolation between `self` (at `t = 0`) and `other` (at `t = 1`).
    pub fn lerp(&self, other: &Triangle, t: Real) -> Self {
        let lerp_pt = |a: &Point<Real>, b: &Point<Real>| {
            Point::new(
                utils::lerp(a.x, b.x, t),
                utils::lerp(a.y, b.y, t),
                utils::lerp(a.z, b.z, t),
            )
        };
        Triangle::new(
            lerp_pt(&self.a, &other.a),
            lerp_pt(&self.b, &other.b),
            lerp_pt(&self.c, &other.c),
        )
    }

    /// The point of this triangle with the given barycentric weights for `b` and `c`.
    #[inline]
    pub fn point_at(&self, u: Real, v: Real) -> Point<Real> {
        Point::from(self.a.coords * (1.0 - u - v) + self.b.coords * u + self.c.coords * v)
    }
}
