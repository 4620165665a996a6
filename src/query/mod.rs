//! Ray queries against the volumetric objects of a scene.
//!
//! The main entry point is [`intersect_volume_all`], which finds every hit of a ray with the
//! primitives of volumetric objects. It picks the traversal variant matching the
//! [`SceneFeatures`](crate::scene::SceneFeatures) of the scene; the generic kernel is
//! [`crate::partitioning::volume_all`].

pub use self::intersection::Intersection;
pub use self::ray::{
    clamp_direction, inverse_direction, ray_triangle_intersection, Ray, TraversalRay, TriangleHit,
};
pub use self::volume_query::{intersect_volume_all, intersect_volume_all_batch};

mod intersection;
mod ray;
mod volume_query;
