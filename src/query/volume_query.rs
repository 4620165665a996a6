use crate::partitioning::{volume_all, BvhHair, BvhHairMotion, BvhMotion, BvhStatic};
use crate::query::{Intersection, Ray};
use crate::scene::{SceneBuffers, SceneFeatures, Visibility};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Finds every intersection between `ray` and the primitives of volumetric objects in `scene`.
///
/// Dispatches to the [`volume_all`] variant compiled for the features of the scene. Invalid rays
/// (see [`Ray::is_valid`]) are rejected and report no hit without touching `isects`.
///
/// Returns the number of records written into `isects`, at most `max_hits`.
pub fn intersect_volume_all(
    scene: &SceneBuffers,
    ray: &Ray,
    isects: &mut [Intersection],
    max_hits: usize,
    visibility: Visibility,
) -> usize {
    if !ray.is_valid() {
        log::trace!("skipping invalid ray {ray:?}");
        return 0;
    }

    match scene.features() {
        SceneFeatures {
            hair: false,
            motion: false,
        } => volume_all::<BvhStatic>(scene, ray, isects, max_hits, visibility),
        SceneFeatures {
            hair: true,
            motion: false,
        } => volume_all::<BvhHair>(scene, ray, isects, max_hits, visibility),
        SceneFeatures {
            hair: false,
            motion: true,
        } => volume_all::<BvhMotion>(scene, ray, isects, max_hits, visibility),
        SceneFeatures {
            hair: true,
            motion: true,
        } => volume_all::<BvhHairMotion>(scene, ray, isects, max_hits, visibility),
    }
}

/// Runs [`intersect_volume_all`] for each ray of `rays`.
///
/// The records of the ray `i` are written into `isects[i * max_hits..(i + 1) * max_hits]`, and
/// the returned vector holds the number of hits of each ray. With the `parallel` feature, rays
/// are traced concurrently; results do not depend on it.
///
/// # Panics
/// If `isects` holds fewer than `rays.len() * max_hits` records.
pub fn intersect_volume_all_batch(
    scene: &SceneBuffers,
    rays: &[Ray],
    isects: &mut [Intersection],
    max_hits: usize,
    visibility: Visibility,
) -> Vec<usize> {
    assert!(
        isects.len() >= rays.len() * max_hits,
        "{} intersection records for {} rays with up to {max_hits} hits each",
        isects.len(),
        rays.len()
    );

    if max_hits == 0 {
        return vec![0; rays.len()];
    }

    let isects = &mut isects[..rays.len() * max_hits];

    #[cfg(feature = "parallel")]
    {
        rays.par_iter()
            .zip(isects.par_chunks_mut(max_hits))
            .map(|(ray, chunk)| intersect_volume_all(scene, ray, chunk, max_hits, visibility))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        rays.iter()
            .zip(isects.chunks_mut(max_hits))
            .map(|(ray, chunk)| intersect_volume_all(scene, ray, chunk, max_hits, visibility))
            .collect()
    }
}
