/*!
volray3d
========

**volray3d** finds every intersection between a ray and the geometry of volumetric objects,
walking a two-level bounding volume hierarchy (top-level instances, bottom-level primitives)
with an explicit stack. It is the traversal kernel behind volume shadowing: instead of the
nearest hit, it returns up to `max_hits` hit records in discovery order.

The kernel is generic over a small closed set of capability flags (hair nodes, motion blur)
so each variant is monomorphized separately. See [`partitioning::volume_all`] for the kernel
and [`query::intersect_volume_all`] for the dispatching entry point.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod motion;
pub mod partitioning;
pub mod query;
pub mod scene;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Affine3, Matrix4, Point3, Translation3, UnitQuaternion, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The affine transformation type used for object and node spaces.
    pub use Affine3 as Affine;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;

    /// The homogeneous matrix type.
    pub use Matrix4 as Matrix;
}
