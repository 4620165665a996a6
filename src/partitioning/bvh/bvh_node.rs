use crate::bounding_volume::Aabb;
use crate::math::{Affine, Real};
use crate::partitioning::NodeRef;
use crate::scene::{PrimitiveType, Visibility};
use std::ops::Range;

/// The bounds of the two children of an inner node.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ChildBounds {
    /// Axis-aligned boxes, in the space of the hierarchy.
    Aligned([Aabb; 2]),
    /// Oriented boxes, each given as the transform mapping the hierarchy space to the unit cube
    /// `[0, 1]³` spanned by the box.
    ///
    /// These are produced for hair geometry and only traversed with hair support enabled.
    Unaligned([Affine<Real>; 2]),
}

/// An inner node of a binary hierarchy.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BvhInnerNode {
    /// The two children.
    pub children: [NodeRef; 2],
    /// The visibility of the subtree below each child.
    pub visibility: [Visibility; 2],
    /// The bounds of each child.
    pub bounds: ChildBounds,
}

impl BvhInnerNode {
    /// An inner node with axis-aligned child boxes.
    pub fn aligned(children: [NodeRef; 2], visibility: [Visibility; 2], aabbs: [Aabb; 2]) -> Self {
        Self {
            children,
            visibility,
            bounds: ChildBounds::Aligned(aabbs),
        }
    }

    /// An inner node with oriented child boxes.
    pub fn unaligned(
        children: [NodeRef; 2],
        visibility: [Visibility; 2],
        spaces: [Affine<Real>; 2],
    ) -> Self {
        Self {
            children,
            visibility,
            bounds: ChildBounds::Unaligned(spaces),
        }
    }

    /// Are the child bounds of this node oriented boxes?
    #[inline]
    pub fn is_unaligned(&self) -> bool {
        matches!(self.bounds, ChildBounds::Unaligned(_))
    }
}

/// A packed leaf node.
///
/// `prim_start..prim_end` is the range of primitive slots of the leaf, all of type
/// `prim_type`. A negative `prim_start` turns the leaf into an instance of the object
/// `-(prim_start + 1)`; `prim_end` and `prim_type` are then unused.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "bytemuck-serialize",
    derive(bytemuck::Pod, bytemuck::Zeroable)
)]
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BvhLeafNode {
    /// First primitive slot, or the encoded instanced object if negative.
    pub prim_start: i32,
    /// One past the last primitive slot.
    pub prim_end: i32,
    /// Raw [`Visibility`] bits of the leaf.
    pub visibility: u32,
    /// Raw [`PrimitiveType`] bits of the leaf primitives.
    pub prim_type: u32,
}

static_assertions::assert_eq_size!(BvhLeafNode, [u32; 4]);

/// The decoded content of a [`BvhLeafNode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeafContent {
    /// A range of primitive slots sharing a single type.
    Primitives {
        /// The primitive slots.
        range: Range<u32>,
        /// Their type.
        prim_type: PrimitiveType,
    },
    /// An instance of an object hierarchy.
    Instance {
        /// The instanced object.
        object: u32,
    },
}

impl BvhLeafNode {
    /// A leaf referencing a range of primitive slots.
    pub fn primitives(range: Range<u32>, prim_type: PrimitiveType, visibility: Visibility) -> Self {
        debug_assert!(range.end <= i32::MAX as u32);
        Self {
            prim_start: range.start as i32,
            prim_end: range.end as i32,
            visibility: visibility.bits(),
            prim_type: prim_type.bits(),
        }
    }

    /// A leaf instancing the hierarchy of `object`.
    pub fn instance(object: u32, visibility: Visibility) -> Self {
        debug_assert!(object < i32::MAX as u32);
        Self {
            prim_start: -(object as i32) - 1,
            prim_end: 0,
            visibility: visibility.bits(),
            prim_type: 0,
        }
    }

    /// Is this leaf an instance?
    #[inline]
    pub fn is_instance(&self) -> bool {
        self.prim_start < 0
    }

    /// The visibility of this leaf.
    #[inline]
    pub fn visibility(&self) -> Visibility {
        Visibility::from_bits_retain(self.visibility)
    }

    /// Decodes the content of this leaf.
    #[inline]
    pub fn decode(&self) -> LeafContent {
        if self.prim_start < 0 {
            LeafContent::Instance {
                object: (-(self.prim_start + 1)) as u32,
            }
        } else {
            LeafContent::Primitives {
                range: self.prim_start as u32..self.prim_end.max(self.prim_start) as u32,
                prim_type: PrimitiveType::from_bits_retain(self.prim_type),
            }
        }
    }
}
