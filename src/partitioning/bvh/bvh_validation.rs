use crate::partitioning::{ChildBounds, LeafContent, NodeRef, BVH_STACK_SIZE};
use crate::scene::{PrimitiveType, SceneBuffers, SceneError};

/// Summary of a successfully validated scene.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    /// Number of inner nodes, over every hierarchy.
    pub num_inner_nodes: usize,
    /// Number of leaf nodes, over every hierarchy.
    pub num_leaves: usize,
    /// Number of primitive slots.
    pub num_primitives: usize,
    /// Number of instance leaves reachable from the top-level root.
    pub num_instances: usize,
    /// Worst-case number of traversal stack entries, sentinels included.
    pub stack_depth: usize,
}

impl SceneBuffers {
    /// Checks that every hierarchy reachable from the root is consistent with the scene arrays.
    ///
    /// Traversal itself only debug-asserts these properties. This walks the whole scene once,
    /// following instances, and reports the first inconsistency found.
    pub fn validate(&self) -> Result<SceneStats, SceneError> {
        let mut stats = SceneStats {
            num_inner_nodes: self.inner_nodes().len(),
            num_leaves: self.leaf_nodes().len(),
            num_primitives: self.num_primitives(),
            ..SceneStats::default()
        };

        let result = if self.root().is_sentinel() {
            Ok(stats)
        } else {
            self.validate_recurse(self.root(), false, 1, &mut stats)
                .and_then(|need| {
                    // The bottom sentinel takes one more entry.
                    stats.stack_depth = need + 1;
                    self.check_stack_depth(stats.stack_depth)?;
                    Ok(stats)
                })
        };

        match &result {
            Ok(stats) => log::debug!("validated scene: {stats:?}"),
            Err(err) => log::debug!("invalid scene: {err}"),
        }

        result
    }

    fn check_stack_depth(&self, required: usize) -> Result<(), SceneError> {
        if required > BVH_STACK_SIZE {
            Err(SceneError::StackTooShallow {
                required,
                capacity: BVH_STACK_SIZE,
            })
        } else {
            Ok(())
        }
    }

    /// Validates the subtree at `node` and returns the number of stack entries its traversal
    /// may push.
    ///
    /// `depth` counts the nodes on the path from the root. It bounds the recursion, which also
    /// catches cyclic hierarchies.
    fn validate_recurse(
        &self,
        node: NodeRef,
        in_instance: bool,
        depth: usize,
        stats: &mut SceneStats,
    ) -> Result<usize, SceneError> {
        self.check_stack_depth(depth)?;

        match node {
            NodeRef::Sentinel => Err(SceneError::DanglingNode(node)),
            NodeRef::Internal(id) => {
                let inner = self
                    .inner_nodes()
                    .get(id as usize)
                    .ok_or(SceneError::DanglingNode(node))?;

                if let ChildBounds::Unaligned(_) = inner.bounds {
                    if !self.features().hair {
                        return Err(SceneError::UnalignedNodeWithoutHair { node: id });
                    }
                }

                let mut need = 0;
                for child in inner.children {
                    need = need.max(self.validate_recurse(child, in_instance, depth + 1, stats)?);
                }

                // The far child is pushed while the near one is traversed.
                Ok(need + 1)
            }
            NodeRef::Leaf(id) => {
                let leaf = self
                    .leaf_nodes()
                    .get(id as usize)
                    .ok_or(SceneError::DanglingNode(node))?;

                match leaf.decode() {
                    LeafContent::Primitives { range, prim_type } => {
                        if leaf.prim_end < leaf.prim_start
                            || range.end as usize > self.num_primitives()
                        {
                            return Err(SceneError::PrimitiveRangeOutOfBounds {
                                leaf: id,
                                start: leaf.prim_start,
                                end: leaf.prim_end,
                                len: self.num_primitives(),
                            });
                        }

                        for prim in range {
                            self.validate_primitive(id, prim, prim_type)?;
                        }

                        Ok(0)
                    }
                    LeafContent::Instance { object } => {
                        let data = self.objects().get(object as usize).ok_or(
                            SceneError::ObjectOutOfBounds {
                                object,
                                len: self.objects().len(),
                            },
                        )?;

                        if in_instance {
                            return Err(SceneError::NestedInstance { object });
                        }

                        stats.num_instances += 1;
                        let need = self.validate_recurse(data.root(), true, depth + 1, stats)?;

                        // The instance sentinel.
                        Ok(need + 1)
                    }
                }
            }
        }
    }

    fn validate_primitive(
        &self,
        leaf: u32,
        prim: u32,
        expected: PrimitiveType,
    ) -> Result<(), SceneError> {
        let found = self.prim_type(prim);
        if found != expected {
            return Err(SceneError::PrimitiveTypeMismatch {
                leaf,
                prim,
                expected,
                found,
            });
        }

        let object = self.prim_object(prim);
        if object as usize >= self.objects().len() {
            return Err(SceneError::ObjectOutOfBounds {
                object,
                len: self.objects().len(),
            });
        }

        let index = self.prim_index(prim);
        let num_geometry = if found == PrimitiveType::TRIANGLE {
            self.num_triangles()
        } else if found == PrimitiveType::MOTION_TRIANGLE {
            self.num_motion_triangles()
        } else {
            // Geometry of other primitive types is not stored here.
            usize::MAX
        };

        if index as usize >= num_geometry {
            return Err(SceneError::GeometryOutOfBounds { prim, index });
        }

        Ok(())
    }
}
