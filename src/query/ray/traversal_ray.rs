use crate::math::{Affine, Point, Real, Vector};
use crate::query::Ray;
use crate::utils::DIR_CLAMP_EPSILON;

/// Replaces direction components smaller than a tiny epsilon by that epsilon, keeping their sign.
///
/// This keeps the inverse direction finite, so slab tests never compute `0 * inf`.
#[inline]
pub fn clamp_direction(dir: &Vector<Real>) -> Vector<Real> {
    dir.map(|e| {
        if e.abs() > DIR_CLAMP_EPSILON {
            e
        } else {
            DIR_CLAMP_EPSILON.copysign(e)
        }
    })
}

/// Component-wise inverse of an already clamped direction.
#[inline]
pub fn inverse_direction(dir: &Vector<Real>) -> Vector<Real> {
    dir.map(|e| 1.0 / e)
}

/// The ray state carried by the traversal loop in the current coordinate frame.
///
/// A new value is produced each time traversal enters or leaves an instance; it is never
/// patched in place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraversalRay {
    /// Origin of the ray in the current frame.
    pub origin: Point<Real>,
    /// Clamped direction of the ray in the current frame.
    pub dir: Vector<Real>,
    /// Component-wise inverse of `dir`.
    pub inv_dir: Vector<Real>,
}

impl TraversalRay {
    /// Builds a traversal ray from an origin and a direction, clamping the direction.
    #[inline]
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Self {
        let dir = clamp_direction(&dir);
        Self {
            origin,
            dir,
            inv_dir: inverse_direction(&dir),
        }
    }

    /// The traversal ray of `ray` in world space.
    #[inline]
    pub fn from_world(ray: &Ray) -> Self {
        Self::new(ray.origin, ray.dir)
    }

    /// The traversal ray of `ray` in the space of an object with the given world-to-object
    /// transform.
    ///
    /// The local direction is normalized; the second returned value is its length before
    /// normalization. Multiplying a world-space ray parameter by this length gives the matching
    /// local parameter, and dividing a local parameter by it gives back the world parameter.
    #[inline]
    pub fn to_local(ray: &Ray, inverse_transform: &Affine<Real>) -> (Self, Real) {
        let origin = inverse_transform * ray.origin;
        let dir = inverse_transform * ray.dir;
        let len = dir.norm();
        let dir = if len > 0.0 { dir / len } else { dir };
        (Self::new(origin, dir), len)
    }

    /// Re-expresses this ray in another space, without renormalizing its direction.
    ///
    /// Ray parameters are preserved: the point at `t` maps to the transformed point at `t`.
    #[inline]
    pub fn transform_by(&self, m: &Affine<Real>) -> Self {
        Self::new(m * self.origin, m * self.dir)
    }
}
