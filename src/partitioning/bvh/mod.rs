pub use bvh_features::{BvhFeatures, BvhHair, BvhHairMotion, BvhMotion, BvhStatic};
pub use bvh_node::{BvhInnerNode, BvhLeafNode, ChildBounds, LeafContent};
pub use bvh_traverse::volume_all;
pub use bvh_validation::SceneStats;
pub use node_intersect::{intersect_children, ChildHits};
pub use node_ref::{NodeRef, ENTRYPOINT_SENTINEL};
pub use traversal_stack::{TraversalStack, BVH_STACK_SIZE};

mod bvh_features;
mod bvh_node;
mod bvh_traverse;
mod bvh_validation;
mod node_intersect;
mod node_ref;
mod traversal_stack;
