/// Raw address of the sentinel that marks the bottom of a traversal frame.
pub const ENTRYPOINT_SENTINEL: i32 = 0x7654_3210;

/// A reference to a node of a hierarchy, or to the traversal sentinel.
///
/// Packed node arrays address nodes with a single signed integer: non-negative values are inner
/// nodes, `-(i + 1)` is the leaf `i`, and [`ENTRYPOINT_SENTINEL`] is the sentinel. This encoding
/// only exists at the boundary, through [`NodeRef::from_raw`] and [`NodeRef::to_raw`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum NodeRef {
    /// The inner node with the given index.
    Internal(u32),
    /// The leaf node with the given index.
    Leaf(u32),
    /// No node: there is no parent to return to.
    #[default]
    Sentinel,
}

static_assertions::assert_eq_size!(NodeRef, [u32; 2]);

impl NodeRef {
    /// Decodes a raw signed node address.
    #[inline]
    pub fn from_raw(raw: i32) -> Self {
        if raw == ENTRYPOINT_SENTINEL {
            NodeRef::Sentinel
        } else if raw >= 0 {
            NodeRef::Internal(raw as u32)
        } else {
            NodeRef::Leaf((-(raw + 1)) as u32)
        }
    }

    /// Encodes this reference as a raw signed node address.
    ///
    /// Inner node indices must stay below [`ENTRYPOINT_SENTINEL`], and leaf indices must fit in
    /// an `i32`.
    #[inline]
    pub fn to_raw(self) -> i32 {
        match self {
            NodeRef::Internal(i) => {
                debug_assert!(
                    i < ENTRYPOINT_SENTINEL as u32,
                    "inner node index {i} collides with the sentinel"
                );
                i as i32
            }
            NodeRef::Leaf(i) => {
                debug_assert!(i <= i32::MAX as u32, "leaf index {i} overflows");
                -(i as i32) - 1
            }
            NodeRef::Sentinel => ENTRYPOINT_SENTINEL,
        }
    }

    /// Is this an inner node?
    #[inline]
    pub fn is_internal(self) -> bool {
        matches!(self, NodeRef::Internal(_))
    }

    /// Is this a leaf node?
    #[inline]
    pub fn is_leaf(self) -> bool {
        matches!(self, NodeRef::Leaf(_))
    }

    /// Is this the sentinel?
    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == NodeRef::Sentinel
    }
}
