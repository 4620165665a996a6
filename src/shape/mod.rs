//! Primitive geometry intersected by the traversal kernel.

pub use self::motion_triangle::MotionTriangle;
pub use self::triangle::Triangle;

mod motion_triangle;
mod triangle;
