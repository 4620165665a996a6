use crate::partitioning::{BvhInnerNode, BvhLeafNode, NodeRef};
use crate::scene::{ObjectData, ObjectFlags, PrimitiveType, Visibility};
use crate::shape::{MotionTriangle, Triangle};
use std::ops::Range;

/// Primitive index marking the absence of a primitive.
pub const PRIM_NONE: u32 = u32::MAX;

/// The traversal capabilities a scene needs.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SceneFeatures {
    /// The scene contains inner nodes with oriented (unaligned) bounds.
    pub hair: bool,
    /// The scene contains moving objects or keyed primitives.
    pub motion: bool,
}

/// The read-only arrays traversed by volume queries.
///
/// This bundles both levels of the hierarchy: the top-level nodes reached from
/// [`SceneBuffers::root`], and the per-object hierarchies reached through instance leaves. The
/// primitive arrays are parallel: the primitive slot `prim_addr` has a type, an owning object,
/// a geometry index and a visibility mask.
///
/// Building the hierarchies themselves is up to the caller. The `push_*` methods only append to
/// the arrays and keep track of the [`SceneFeatures`] the data requires.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct SceneBuffers {
    inner_nodes: Vec<BvhInnerNode>,
    leaf_nodes: Vec<BvhLeafNode>,
    prim_type: Vec<PrimitiveType>,
    prim_object: Vec<u32>,
    prim_index: Vec<u32>,
    prim_visibility: Vec<Visibility>,
    triangles: Vec<Triangle>,
    motion_triangles: Vec<MotionTriangle>,
    objects: Vec<ObjectData>,
    root: NodeRef,
    features: SceneFeatures,
}

static_assertions::assert_impl_all!(SceneBuffers: Send, Sync);

impl SceneBuffers {
    /// An empty scene.
    ///
    /// Its root is [`NodeRef::Sentinel`], so every query on it reports no hit.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root of the top-level hierarchy.
    #[inline]
    pub fn root(&self) -> NodeRef {
        self.root
    }

    /// Sets the root of the top-level hierarchy.
    pub fn set_root(&mut self, root: NodeRef) {
        self.root = root;
    }

    /// The traversal capabilities required by the data pushed so far.
    #[inline]
    pub fn features(&self) -> SceneFeatures {
        self.features
    }

    /// Overrides the traversal capabilities derived from the pushed data.
    ///
    /// Queries dispatch on these features, so disabling one the data needs changes results:
    /// disabling motion makes moving objects use their pose at the shutter opening and hides
    /// motion triangles. [`SceneBuffers::validate`] rejects scenes with unaligned nodes and no
    /// hair feature.
    pub fn set_features(&mut self, features: SceneFeatures) {
        if features != self.features {
            log::debug!(
                "overriding scene features {:?} with {:?}",
                self.features,
                features
            );
        }
        self.features = features;
    }

    /// Appends an inner node, returning its reference.
    pub fn push_inner_node(&mut self, node: BvhInnerNode) -> NodeRef {
        self.features.hair |= node.is_unaligned();
        self.inner_nodes.push(node);
        NodeRef::Internal(self.inner_nodes.len() as u32 - 1)
    }

    /// Appends a leaf node, returning its reference.
    pub fn push_leaf_node(&mut self, leaf: BvhLeafNode) -> NodeRef {
        self.leaf_nodes.push(leaf);
        NodeRef::Leaf(self.leaf_nodes.len() as u32 - 1)
    }

    /// Appends a static triangle owned by `object`, returning its primitive slot.
    pub fn push_triangle(&mut self, object: u32, triangle: Triangle, visibility: Visibility) -> u32 {
        self.triangles.push(triangle);
        let index = self.triangles.len() as u32 - 1;
        self.push_primitive(PrimitiveType::TRIANGLE, object, index, visibility)
    }

    /// Appends a keyed triangle owned by `object`, returning its primitive slot.
    pub fn push_motion_triangle(
        &mut self,
        object: u32,
        triangle: MotionTriangle,
        visibility: Visibility,
    ) -> u32 {
        self.motion_triangles.push(triangle);
        self.features.motion = true;
        let index = self.motion_triangles.len() as u32 - 1;
        self.push_primitive(PrimitiveType::MOTION_TRIANGLE, object, index, visibility)
    }

    /// Appends a primitive slot whose geometry is stored elsewhere, e.g. curves or points.
    ///
    /// Volume queries skip these primitives, but leaves may still reference them.
    pub fn push_primitive(
        &mut self,
        prim_type: PrimitiveType,
        object: u32,
        index: u32,
        visibility: Visibility,
    ) -> u32 {
        debug_assert!(prim_type.is_single(), "a primitive has exactly one type");
        self.features.motion |= prim_type.intersects(PrimitiveType::ALL_MOTION);
        self.prim_type.push(prim_type);
        self.prim_object.push(object);
        self.prim_index.push(index);
        self.prim_visibility.push(visibility);
        self.prim_type.len() as u32 - 1
    }

    /// Appends an object, returning its index.
    pub fn push_object(&mut self, object: ObjectData) -> u32 {
        self.features.motion |= object.flags().contains(ObjectFlags::HAS_MOTION);
        self.objects.push(object);
        self.objects.len() as u32 - 1
    }

    /// Mutable access to an object, e.g. to set its root once its hierarchy is built.
    pub fn object_mut(&mut self, object: u32) -> &mut ObjectData {
        &mut self.objects[object as usize]
    }

    /// The range of primitive slots that will be assigned to the next `count` pushed primitives.
    pub fn next_prim_range(&self, count: usize) -> Range<u32> {
        let start = self.prim_type.len() as u32;
        start..start + count as u32
    }

    /// The inner nodes of every hierarchy.
    #[inline]
    pub fn inner_nodes(&self) -> &[BvhInnerNode] {
        &self.inner_nodes
    }

    /// The leaf nodes of every hierarchy.
    #[inline]
    pub fn leaf_nodes(&self) -> &[BvhLeafNode] {
        &self.leaf_nodes
    }

    /// The objects of this scene.
    #[inline]
    pub fn objects(&self) -> &[ObjectData] {
        &self.objects
    }

    /// The number of primitive slots.
    #[inline]
    pub fn num_primitives(&self) -> usize {
        self.prim_type.len()
    }

    /// The number of static triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// The number of keyed triangles.
    #[inline]
    pub fn num_motion_triangles(&self) -> usize {
        self.motion_triangles.len()
    }

    /// The inner node with the given index.
    #[inline]
    pub fn inner_node(&self, node: u32) -> &BvhInnerNode {
        &self.inner_nodes[node as usize]
    }

    /// The leaf node with the given index.
    #[inline]
    pub fn leaf_node(&self, leaf: u32) -> &BvhLeafNode {
        &self.leaf_nodes[leaf as usize]
    }

    /// The type of the primitive at `prim_addr`.
    #[inline]
    pub fn prim_type(&self, prim_addr: u32) -> PrimitiveType {
        self.prim_type[prim_addr as usize]
    }

    /// The object owning the primitive at `prim_addr`.
    #[inline]
    pub fn prim_object(&self, prim_addr: u32) -> u32 {
        self.prim_object[prim_addr as usize]
    }

    /// The geometry index of the primitive at `prim_addr`.
    #[inline]
    pub fn prim_index(&self, prim_addr: u32) -> u32 {
        self.prim_index[prim_addr as usize]
    }

    /// The visibility of the primitive at `prim_addr`.
    #[inline]
    pub fn prim_visibility(&self, prim_addr: u32) -> Visibility {
        self.prim_visibility[prim_addr as usize]
    }

    /// The static triangle with the given geometry index.
    #[inline]
    pub fn triangle(&self, index: u32) -> &Triangle {
        &self.triangles[index as usize]
    }

    /// The keyed triangle with the given geometry index.
    #[inline]
    pub fn motion_triangle(&self, index: u32) -> &MotionTriangle {
        &self.motion_triangles[index as usize]
    }

    /// The object with the given index.
    #[inline]
    pub fn object(&self, object: u32) -> &ObjectData {
        &self.objects[object as usize]
    }
}
