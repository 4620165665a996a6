use crate::partitioning::NodeRef;
use crate::scene::PrimitiveType;

/// An inconsistency found while assembling or validating scene data.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// An object transform has no inverse.
    #[error("the object transform is not invertible.")]
    NonInvertibleTransform,
    /// Keyed motion data needs at least two keys.
    #[error("motion data needs at least two keys, found {found}.")]
    NotEnoughMotionKeys {
        /// The number of keys given.
        found: usize,
    },
    /// A node reference points outside of the node arrays.
    #[error("the node {0:?} is referenced but does not exist.")]
    DanglingNode(NodeRef),
    /// A leaf references primitive slots that do not exist.
    #[error("the leaf {leaf} references the primitives {start}..{end} but only {len} exist.")]
    PrimitiveRangeOutOfBounds {
        /// The offending leaf.
        leaf: u32,
        /// The first referenced primitive slot.
        start: i32,
        /// One past the last referenced primitive slot.
        end: i32,
        /// The number of primitive slots in the scene.
        len: usize,
    },
    /// A primitive references geometry that does not exist.
    #[error("the primitive {prim} references missing geometry {index}.")]
    GeometryOutOfBounds {
        /// The offending primitive slot.
        prim: u32,
        /// Its geometry index.
        index: u32,
    },
    /// A leaf holds primitives of a type different from its own.
    #[error("the primitive {prim} has type {found:?} but its leaf {leaf} holds {expected:?}.")]
    PrimitiveTypeMismatch {
        /// The offending leaf.
        leaf: u32,
        /// The offending primitive slot.
        prim: u32,
        /// The type declared by the leaf.
        expected: PrimitiveType,
        /// The type of the primitive.
        found: PrimitiveType,
    },
    /// An object index points outside of the object array.
    #[error("the object {object} is referenced but only {len} exist.")]
    ObjectOutOfBounds {
        /// The referenced object.
        object: u32,
        /// The number of objects in the scene.
        len: usize,
    },
    /// An instance leaf was found inside an instanced hierarchy.
    #[error("the object {object} is instanced from inside another instance.")]
    NestedInstance {
        /// The object of the nested instance.
        object: u32,
    },
    /// An inner node with oriented bounds in a scene traversed without hair support.
    #[error("the inner node {node} has unaligned bounds but the scene has no hair feature.")]
    UnalignedNodeWithoutHair {
        /// The offending inner node.
        node: u32,
    },
    /// A hierarchy is too deep for the fixed-size traversal stack.
    #[error("traversal needs a stack of {required} entries but only {capacity} are available.")]
    StackTooShallow {
        /// The worst-case number of stack entries.
        required: usize,
        /// The traversal stack capacity.
        capacity: usize,
    },
}
