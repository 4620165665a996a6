//! Various unsorted geometrical and logical operators.

pub(crate) use self::consts::*;
pub(crate) use self::inv::{inv, inv_components};
pub use self::lerp::{lerp, motion_segment};

mod consts;
mod inv;
mod lerp;
