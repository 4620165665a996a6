//! The read-only scene data consumed by traversal.

pub use self::error::SceneError;
pub use self::flags::{ObjectFlags, PrimitiveType, Visibility};
pub use self::object::{ObjectData, OBJECT_NONE};
pub use self::scene_buffers::{SceneBuffers, SceneFeatures, PRIM_NONE};

mod error;
mod flags;
mod object;
mod scene_buffers;
