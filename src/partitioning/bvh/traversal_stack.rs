use crate::partitioning::NodeRef;
use arrayvec::ArrayVec;

/// Default capacity of the traversal stack.
pub const BVH_STACK_SIZE: usize = 192;

/// The explicit stack of deferred nodes used by traversal.
///
/// It starts out holding a single [`NodeRef::Sentinel`] marking the bottom of the world-space
/// frame. Entering an instance pushes another sentinel, so popping a sentinel while entries
/// remain means traversal must leave the current instance.
///
/// The capacity is fixed. Overflowing it is a violation of the depth constraint checked by
/// [`crate::scene::SceneBuffers::validate`] and panics.
#[derive(Clone, Debug)]
pub struct TraversalStack<const N: usize = BVH_STACK_SIZE> {
    entries: ArrayVec<NodeRef, N>,
}

impl<const N: usize> Default for TraversalStack<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TraversalStack<N> {
    /// A stack holding only the bottom sentinel.
    #[inline]
    pub fn new() -> Self {
        let mut entries = ArrayVec::new();
        entries.push(NodeRef::Sentinel);
        Self { entries }
    }

    /// Defers the traversal of `node`.
    #[inline]
    pub fn push(&mut self, node: NodeRef) {
        debug_assert!(
            !self.entries.is_full(),
            "traversal stack overflow: the hierarchy is deeper than {N} entries"
        );
        self.entries.push(node);
    }

    /// Takes the most recently deferred node.
    ///
    /// Popping past the bottom sentinel is a logic error; release builds then keep returning
    /// the sentinel.
    #[inline]
    pub fn pop(&mut self) -> NodeRef {
        debug_assert!(!self.entries.is_empty(), "traversal stack underflow");
        self.entries.pop().unwrap_or(NodeRef::Sentinel)
    }

    /// The number of entries, sentinels included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Are there no entries left, i.e., was the bottom sentinel popped?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The maximum number of entries.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }
}
