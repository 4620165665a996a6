use crate::math::Real;
use crate::partitioning::{
    intersect_children, BvhFeatures, LeafContent, NodeRef, TraversalStack, BVH_STACK_SIZE,
};
use crate::query::{ray_triangle_intersection, Intersection, Ray, TraversalRay};
use crate::scene::{PrimitiveType, SceneBuffers, Visibility, OBJECT_NONE};
use crate::utils;

/// The instance currently traversed.
#[derive(Copy, Clone, Debug)]
struct InstanceFrame {
    object: u32,
    /// Length of the world ray direction once expressed in object space.
    len: Real,
}

impl InstanceFrame {
    /// Brings the parameters of the last `count` hits in `isects[..end]` back to world space.
    #[inline]
    fn rescale_hits(&self, isects: &mut [Intersection], end: usize, count: usize) {
        let t_fac = utils::inv(self.len);
        for isect in &mut isects[end - count..end] {
            isect.t *= t_fac;
        }
    }
}

/// Finds every intersection between `ray` and the primitives of volumetric objects.
///
/// Up to `max_hits` records are written into `isects`, in traversal order. Records are not
/// sorted by distance, and which of two equally distant children is visited first is
/// unspecified. Only primitives whose object has [`crate::scene::ObjectFlags::HAS_VOLUME`] and
/// whose visibility shares a bit with `visibility` are reported. Hits are not used to shorten
/// the ray: every hit in `(0, ray.tmax)` counts.
///
/// The record following the last hit has its `t` set to the world-space bound `ray.tmax` when it
/// fits in `isects`, so with no hit at all `isects[0].t == ray.tmax`.
///
/// Returns the number of records written. `isects` must hold at least `max_hits` records and
/// `max_hits` must be at least one.
pub fn volume_all<F: BvhFeatures>(
    scene: &SceneBuffers,
    ray: &Ray,
    isects: &mut [Intersection],
    max_hits: usize,
    visibility: Visibility,
) -> usize {
    debug_assert!(max_hits >= 1, "a volume query needs room for at least one hit");
    debug_assert!(
        isects.len() >= max_hits,
        "{} intersection records for up to {max_hits} hits",
        isects.len()
    );
    let max_hits = max_hits.min(isects.len());

    let tmax = ray.tmax;
    let mut isect_t = tmax;
    if let Some(first) = isects.first_mut() {
        first.t = tmax;
    }

    let mut node = scene.root();
    if node.is_sentinel() || max_hits == 0 {
        return 0;
    }

    let mut stack = TraversalStack::<BVH_STACK_SIZE>::new();
    let mut traversal_ray = TraversalRay::from_world(ray);
    let mut instance: Option<InstanceFrame> = None;
    let mut num_hits = 0;
    let mut num_hits_in_instance = 0;

    loop {
        loop {
            while let NodeRef::Internal(id) = node {
                let inner = scene.inner_node(id);
                let hits = intersect_children::<F>(inner, &traversal_ray, isect_t, visibility);

                node = match hits.mask {
                    0 => stack.pop(),
                    1 => inner.children[0],
                    2 => inner.children[1],
                    _ => {
                        let (near, far) = if hits.dist[1] < hits.dist[0] {
                            (1, 0)
                        } else {
                            (0, 1)
                        };
                        stack.push(inner.children[far]);
                        inner.children[near]
                    }
                };
            }

            if let NodeRef::Leaf(id) = node {
                match scene.leaf_node(id).decode() {
                    LeafContent::Primitives { range, prim_type } => {
                        node = stack.pop();

                        for prim_addr in range {
                            let Some(hit) = intersect_primitive::<F>(
                                scene,
                                ray,
                                &traversal_ray,
                                prim_addr,
                                prim_type,
                                instance.map(|frame| frame.object),
                                isect_t,
                                visibility,
                            ) else {
                                continue;
                            };

                            isects[num_hits] = hit;
                            num_hits += 1;
                            num_hits_in_instance += 1;

                            if let Some(next) = isects.get_mut(num_hits) {
                                next.t = tmax;
                            }

                            if num_hits == max_hits {
                                if let Some(frame) = &instance {
                                    frame.rescale_hits(isects, num_hits, num_hits_in_instance);
                                }
                                return num_hits;
                            }
                        }
                    }
                    LeafContent::Instance { object } => {
                        debug_assert!(
                            instance.is_none(),
                            "object {object} is instanced from inside another instance"
                        );
                        let data = scene.object(object);

                        if data.has_volume() && !data.root().is_sentinel() {
                            let inverse = data.inverse_transform_at_time(ray.time, F::MOTION);
                            let (local_ray, len) = TraversalRay::to_local(ray, &inverse);

                            traversal_ray = local_ray;
                            if isect_t < Real::MAX {
                                isect_t *= len;
                            }
                            num_hits_in_instance = 0;
                            instance = Some(InstanceFrame { object, len });

                            stack.push(NodeRef::Sentinel);
                            node = data.root();
                        } else {
                            instance = None;
                            node = stack.pop();
                        }
                    }
                }
            }

            if node.is_sentinel() {
                break;
            }
        }

        if stack.is_empty() {
            break;
        }

        // Leaving an instance.
        debug_assert!(instance.is_some(), "sentinel popped outside of an instance");
        if let Some(frame) = instance.take() {
            if num_hits_in_instance > 0 {
                frame.rescale_hits(isects, num_hits, num_hits_in_instance);
            }
        }

        isect_t = tmax;
        traversal_ray = TraversalRay::from_world(ray);
        node = stack.pop();

        if node.is_sentinel() {
            break;
        }
    }

    num_hits
}

/// Intersects the primitive at `prim_addr` with the ray in the current frame.
///
/// `instance` is the object of the instance being traversed, if any.
#[inline]
fn intersect_primitive<F: BvhFeatures>(
    scene: &SceneBuffers,
    ray: &Ray,
    traversal_ray: &TraversalRay,
    prim_addr: u32,
    leaf_type: PrimitiveType,
    instance: Option<u32>,
    isect_t: Real,
    visibility: Visibility,
) -> Option<Intersection> {
    debug_assert_eq!(
        scene.prim_type(prim_addr),
        leaf_type,
        "primitive {prim_addr} does not match the type of its leaf"
    );

    let object = instance.unwrap_or_else(|| scene.prim_object(prim_addr));
    if !scene.object(object).has_volume() {
        return None;
    }

    if !scene.prim_visibility(prim_addr).intersects(visibility) {
        return None;
    }

    let index = scene.prim_index(prim_addr);
    let triangle = if leaf_type == PrimitiveType::TRIANGLE {
        *scene.triangle(index)
    } else if F::MOTION && leaf_type == PrimitiveType::MOTION_TRIANGLE {
        scene.motion_triangle(index).at_time(ray.time)
    } else {
        // Curves and points never bound a volume.
        return None;
    };

    let hit = ray_triangle_intersection(
        &triangle,
        &traversal_ray.origin,
        &traversal_ray.dir,
        isect_t,
    )?;

    debug_assert_ne!(object, OBJECT_NONE);
    Some(Intersection {
        t: hit.t,
        u: hit.u,
        v: hit.v,
        prim: prim_addr,
        object,
        prim_type: leaf_type,
    })
}
