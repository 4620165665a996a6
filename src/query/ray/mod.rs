//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::Ray;
pub use self::ray_triangle::{ray_triangle_intersection, TriangleHit};
pub use self::traversal_ray::{clamp_direction, inverse_direction, TraversalRay};

#[doc(hidden)]
pub mod ray;
mod ray_triangle;
mod traversal_ray;
