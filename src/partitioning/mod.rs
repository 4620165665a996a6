//! Bounding volume hierarchies and their traversal.

pub use self::bvh::{
    intersect_children, volume_all, BvhFeatures, BvhHair, BvhHairMotion, BvhInnerNode,
    BvhLeafNode, BvhMotion, BvhStatic, ChildBounds, ChildHits, LeafContent, NodeRef, SceneStats,
    TraversalStack, BVH_STACK_SIZE, ENTRYPOINT_SENTINEL,
};

mod bvh;
