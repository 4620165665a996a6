use crate::math::Real;
use crate::scene::{PrimitiveType, OBJECT_NONE, PRIM_NONE};

/// A hit recorded by a volume query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// World-space ray parameter of the hit.
    pub t: Real,
    /// Barycentric weight of the primitive's second vertex.
    pub u: Real,
    /// Barycentric weight of the primitive's third vertex.
    pub v: Real,
    /// Primitive slot of the hit primitive.
    pub prim: u32,
    /// Object owning the hit primitive. For instanced geometry, this is the instanced object.
    pub object: u32,
    /// Type of the hit primitive.
    pub prim_type: PrimitiveType,
}

impl Default for Intersection {
    fn default() -> Self {
        Self {
            t: Real::MAX,
            u: 0.0,
            v: 0.0,
            prim: PRIM_NONE,
            object: OBJECT_NONE,
            prim_type: PrimitiveType::empty(),
        }
    }
}

impl Intersection {
    /// Does this record describe an actual hit?
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.prim != PRIM_NONE
    }
}
