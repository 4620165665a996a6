use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::{BvhFeatures, BvhInnerNode, ChildBounds};
use crate::query::TraversalRay;
use crate::scene::Visibility;

/// The children of an inner node entered by a ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChildHits {
    /// Bit `i` is set if the ray enters the child `i`.
    pub mask: u32,
    /// The entry distance into each child, only meaningful if its bit is set in `mask`.
    pub dist: [Real; 2],
}

impl ChildHits {
    const NONE: Self = Self {
        mask: 0,
        dist: [0.0; 2],
    };

    #[inline]
    fn set(&mut self, child: usize, near: Real) {
        self.mask |= 1 << child;
        self.dist[child] = near;
    }
}

/// Tests the ray against both children of `node`.
///
/// A child is entered if its visibility shares a bit with `visibility` and the ray overlaps its
/// bounds within `[0, tmax]`. Unaligned nodes are only tested when `F::HAIR` is set; other
/// variants report no hit for them.
#[inline]
pub fn intersect_children<F: BvhFeatures>(
    node: &BvhInnerNode,
    ray: &TraversalRay,
    tmax: Real,
    visibility: Visibility,
) -> ChildHits {
    let mut hits = ChildHits::NONE;

    match &node.bounds {
        ChildBounds::Aligned(aabbs) => {
            for (i, aabb) in aabbs.iter().enumerate() {
                if node.visibility[i].intersects(visibility) {
                    if let Some(near) = aabb.clip_traversal_ray(ray, tmax) {
                        hits.set(i, near);
                    }
                }
            }
        }
        ChildBounds::Unaligned(spaces) => {
            debug_assert!(F::HAIR, "unaligned node traversed without hair support");

            if F::HAIR {
                let unit_box = Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0));

                for (i, space) in spaces.iter().enumerate() {
                    if node.visibility[i].intersects(visibility) {
                        let local_ray = ray.transform_by(space);
                        if let Some(near) = unit_box.clip_traversal_ray(&local_ray, tmax) {
                            hits.set(i, near);
                        }
                    }
                }
            }
        }
    }

    hits
}
