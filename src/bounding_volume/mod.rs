//! Bounding volumes tested by the traversal kernel.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
pub use crate::bounding_volume::unit_box_space::unit_box_space;

#[doc(hidden)]
pub mod aabb;
mod unit_box_space;
