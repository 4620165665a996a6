use crate::common::{
    records, scaled_translation, sorted_distances, translation, uv_sphere, z_ray, Item,
    SceneAssembler,
};
use approx::assert_relative_eq;
use volray3d::math::{Affine, Point, Real, Vector};
use volray3d::query::{intersect_volume_all, Ray};
use volray3d::scene::{ObjectFlags, SceneBuffers, Visibility};
use volray3d::shape::Triangle;

/// Places one shared unit sphere hierarchy under each of the given transforms.
fn instanced_spheres(transforms: &[(Affine<Real>, ObjectFlags)]) -> (SceneBuffers, Vec<u32>) {
    let mut assembler = SceneAssembler::new();
    let objects: Vec<u32> = transforms
        .iter()
        .map(|(transform, flags)| assembler.add_object(*transform, *flags))
        .collect();

    let local_aabb = assembler.build_object(objects[0], &uv_sphere(1.0));
    for object in &objects[1..] {
        assembler.share_object(*object, objects[0]);
    }

    let items = objects
        .iter()
        .map(|object| assembler.instance(*object, &local_aabb))
        .collect();
    (assembler.finish(items), objects)
}

#[test]
fn shared_hierarchy_yields_independent_hits() {
    let (scene, objects) = instanced_spheres(&[
        (Affine::identity(), ObjectFlags::HAS_VOLUME),
        (
            scaled_translation(2.0, Vector::new(0.0, 0.0, 10.0)),
            ObjectFlags::HAS_VOLUME,
        ),
    ]);
    let mut isects = records(8);

    let num_hits = intersect_volume_all(&scene, &z_ray(), &mut isects, 8, Visibility::ALL);
    assert_eq!(num_hits, 4);
    assert_eq!(isects[num_hits].t, 100.0);

    let mut hits: Vec<(u32, Real)> = isects[..num_hits]
        .iter()
        .map(|isect| (isect.object, isect.t))
        .collect();
    hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());

    let expected = [
        (objects[0], 4.0),
        (objects[0], 6.0),
        (objects[1], 13.0),
        (objects[1], 17.0),
    ];
    for ((object, t), (expected_object, expected_t)) in hits.iter().zip(expected) {
        assert_eq!(*object, expected_object);
        assert_relative_eq!(*t, expected_t, epsilon = 0.1);
    }
}

#[test]
fn capped_instance_hits_are_in_world_space() {
    let (scene, _) = instanced_spheres(&[(
        scaled_translation(2.0, Vector::new(0.0, 0.0, 10.0)),
        ObjectFlags::HAS_VOLUME,
    )]);
    let mut isects = records(1);
    // A non-unit direction: world distances are expressed in units of it.
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::z() * 2.0, 100.0);

    let num_hits = intersect_volume_all(&scene, &ray, &mut isects, 1, Visibility::ALL);
    assert_eq!(num_hits, 1);
    let hit = ray.point_at(isects[0].t);
    assert!(
        (hit.z - 8.0).abs() < 0.1 || (hit.z - 12.0).abs() < 0.1,
        "hit at {hit:?}"
    );
}

#[test]
fn instance_hits_match_baked_geometry() {
    let transform = scaled_translation(3.0, Vector::new(1.0, -0.5, 20.0));
    let (instanced, _) = instanced_spheres(&[(transform, ObjectFlags::HAS_VOLUME)]);

    let mut assembler = SceneAssembler::new();
    let object = assembler.add_object(
        Affine::identity(),
        ObjectFlags::HAS_VOLUME,
    );
    let items = uv_sphere(1.0)
        .iter()
        .map(|triangle: &Triangle| Item::triangle(object, triangle.transformed(&transform)))
        .collect();
    let baked = assembler.finish(items);

    let ray = Ray::new(Point::new(1.2, -0.3, -5.0), Vector::new(0.0, 0.01, 0.5), 1000.0);
    let mut a = records(4);
    let mut b = records(4);
    let na = intersect_volume_all(&instanced, &ray, &mut a, 4, Visibility::ALL);
    let nb = intersect_volume_all(&baked, &ray, &mut b, 4, Visibility::ALL);
    assert_eq!(na, 2);
    assert_eq!(nb, 2);

    for (ta, tb) in sorted_distances(&a, na)
        .into_iter()
        .zip(sorted_distances(&b, nb))
    {
        assert_relative_eq!(ta, tb, epsilon = 1.0e-2);
    }
}

#[test]
fn non_volume_instances_are_skipped() {
    let (scene, objects) = instanced_spheres(&[
        (Affine::identity(), ObjectFlags::HAS_VOLUME),
        (translation(0.0, 0.0, 10.0), ObjectFlags::empty()),
    ]);
    let mut isects = records(8);

    let num_hits = intersect_volume_all(&scene, &z_ray(), &mut isects, 8, Visibility::ALL);
    assert_eq!(num_hits, 2);
    assert!(isects[..2].iter().all(|isect| isect.object == objects[0]));
}

#[test]
fn top_level_geometry_after_instance() {
    let mut assembler = SceneAssembler::new();
    let sphere = assembler.add_object(
        scaled_translation(0.5, Vector::zeros()),
        ObjectFlags::HAS_VOLUME,
    );
    let local_aabb = assembler.build_object(sphere, &uv_sphere(1.0));
    let wall = assembler.add_object(
        Affine::identity(),
        ObjectFlags::HAS_VOLUME,
    );

    let wall_triangle = Triangle::new(
        Point::new(-1.0, -1.0, 20.0),
        Point::new(2.0, -1.0, 20.0),
        Point::new(-1.0, 2.0, 20.0),
    );
    let items = vec![
        assembler.instance(sphere, &local_aabb),
        Item::triangle(wall, wall_triangle),
    ];
    let scene = assembler.finish(items);

    // The bound is rescaled inside the sphere instance and must be restored when leaving it.
    let mut isects = records(8);
    let num_hits = intersect_volume_all(&scene, &z_ray(), &mut isects, 8, Visibility::ALL);
    assert_eq!(num_hits, 3);

    let ts = sorted_distances(&isects, num_hits);
    assert_relative_eq!(ts[0], 4.5, epsilon = 0.05);
    assert_relative_eq!(ts[1], 5.5, epsilon = 0.05);
    assert_relative_eq!(ts[2], 25.0, epsilon = 1.0e-3);
}

#[test]
fn capping_inside_an_instance_keeps_earlier_hits() {
    let mut assembler = SceneAssembler::new();
    let sphere = assembler.add_object(
        scaled_translation(2.0, Vector::new(0.0, 0.0, 10.0)),
        ObjectFlags::HAS_VOLUME,
    );
    let local_aabb = assembler.build_object(sphere, &uv_sphere(1.0));
    let wall = assembler.add_object(Affine::identity(), ObjectFlags::HAS_VOLUME);

    let wall_triangle = Triangle::new(
        Point::new(-1.0, -1.0, -1.0),
        Point::new(2.0, -1.0, -1.0),
        Point::new(-1.0, 2.0, -1.0),
    );
    let items = vec![
        assembler.instance(sphere, &local_aabb),
        Item::triangle(wall, wall_triangle),
    ];
    let scene = assembler.finish(items);

    // The wall is hit before the instance is entered; only hits found inside the instance are
    // brought back to world space when the cap is reached there.
    for max_hits in 1..=3 {
        let mut isects = records(max_hits);
        let num_hits =
            intersect_volume_all(&scene, &z_ray(), &mut isects, max_hits, Visibility::ALL);
        assert_eq!(num_hits, max_hits);

        assert_eq!(isects[0].object, wall);
        assert_relative_eq!(isects[0].t, 4.0, epsilon = 1.0e-4);

        for isect in &isects[1..num_hits] {
            assert_eq!(isect.object, sphere);
            assert!(
                (isect.t - 13.0).abs() < 0.1 || (isect.t - 17.0).abs() < 0.1,
                "max_hits {max_hits}: {isect:?}"
            );
        }
    }

    let mut isects = records(3);
    let num_hits = intersect_volume_all(&scene, &z_ray(), &mut isects, 3, Visibility::ALL);
    let ts = sorted_distances(&isects, num_hits);
    assert_relative_eq!(ts[0], 4.0, epsilon = 1.0e-4);
    assert_relative_eq!(ts[1], 13.0, epsilon = 0.1);
    assert_relative_eq!(ts[2], 17.0, epsilon = 0.1);
}
