//! Time-keyed object transforms for motion blur.

pub use self::motion_transform::{DecomposedTransform, MotionTransform};

mod motion_transform;
