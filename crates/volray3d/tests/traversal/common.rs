//! Test-only scene assembly: a median-split hierarchy builder and a sphere mesh.

use volray3d::bounding_volume::{unit_box_space, Aabb};
use volray3d::math::{Affine, Point, Real, Rotation, Vector};
use volray3d::motion::MotionTransform;
use volray3d::partitioning::{BvhInnerNode, BvhLeafNode, NodeRef};
use volray3d::query::{Intersection, Ray};
use volray3d::scene::{ObjectData, ObjectFlags, PrimitiveType, SceneBuffers, Visibility};
use volray3d::shape::{MotionTriangle, Triangle};

const MAX_LEAF_SIZE: usize = 4;

/// Something the hierarchy builder puts into a leaf.
#[derive(Clone, Debug)]
pub enum Item {
    Triangle {
        object: u32,
        triangle: Triangle,
        visibility: Visibility,
    },
    MotionTriangle {
        object: u32,
        triangle: MotionTriangle,
        visibility: Visibility,
    },
    Instance {
        object: u32,
        aabb: Aabb,
    },
}

impl Item {
    pub fn triangle(object: u32, triangle: Triangle) -> Self {
        Item::Triangle {
            object,
            triangle,
            visibility: Visibility::ALL,
        }
    }

    fn aabb(&self) -> Aabb {
        match self {
            Item::Triangle { triangle, .. } => triangle.local_aabb(),
            Item::MotionTriangle { triangle, .. } => triangle.local_aabb(),
            Item::Instance { aabb, .. } => *aabb,
        }
    }

    fn prim_type(&self) -> Option<PrimitiveType> {
        match self {
            Item::Triangle { .. } => Some(PrimitiveType::TRIANGLE),
            Item::MotionTriangle { .. } => Some(PrimitiveType::MOTION_TRIANGLE),
            Item::Instance { .. } => None,
        }
    }

    fn visibility(&self) -> Visibility {
        match self {
            Item::Triangle { visibility, .. } | Item::MotionTriangle { visibility, .. } => {
                *visibility
            }
            Item::Instance { .. } => Visibility::ALL,
        }
    }
}

/// Assembles scenes with median-split hierarchies.
///
/// With `unaligned` set, every inner node stores oriented child boxes expressed in a rotated
/// frame instead of axis-aligned ones.
#[derive(Default)]
pub struct SceneAssembler {
    pub scene: SceneBuffers,
    pub unaligned: bool,
}

impl SceneAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unaligned_nodes() -> Self {
        Self {
            scene: SceneBuffers::new(),
            unaligned: true,
        }
    }

    pub fn add_object(&mut self, transform: Affine<Real>, flags: ObjectFlags) -> u32 {
        self.scene
            .push_object(ObjectData::new(transform, flags, NodeRef::Sentinel).unwrap())
    }

    pub fn add_moving_object(&mut self, motion: MotionTransform, flags: ObjectFlags) -> u32 {
        self.scene
            .push_object(ObjectData::with_motion(motion, flags, NodeRef::Sentinel))
    }

    /// Builds a hierarchy over `items` and returns its root and bounds.
    pub fn build(&mut self, mut items: Vec<Item>) -> (NodeRef, Aabb) {
        assert!(!items.is_empty());
        self.build_recurse(&mut items)
    }

    /// Builds the own hierarchy of `object` over its local-space triangles.
    ///
    /// Returns the local bounds of the hierarchy.
    pub fn build_object(&mut self, object: u32, triangles: &[Triangle]) -> Aabb {
        let items = triangles
            .iter()
            .map(|triangle| Item::triangle(object, *triangle))
            .collect();
        let (root, aabb) = self.build(items);
        self.scene.object_mut(object).set_root(root);
        aabb
    }

    /// Shares the hierarchy of `source` with `object`.
    pub fn share_object(&mut self, object: u32, source: u32) {
        let root = self.scene.object(source).root();
        self.scene.object_mut(object).set_root(root);
    }

    /// An instance item for `object`, bounded over its whole motion.
    pub fn instance(&self, object: u32, local_aabb: &Aabb) -> Item {
        let data = self.scene.object(object);
        let aabb = match data.motion() {
            Some(motion) => (0..=16).fold(Aabb::new_invalid(), |acc, i| {
                let time = i as Real / 16.0;
                acc.merged(&local_aabb.transform_by(&motion.transform_at_time(time)))
            }),
            None => local_aabb.transform_by(data.transform()),
        };
        Item::Instance { object, aabb }
    }

    /// Builds the top-level hierarchy and returns the finished scene.
    pub fn finish(mut self, top_level: Vec<Item>) -> SceneBuffers {
        let (root, _) = self.build(top_level);
        self.scene.set_root(root);
        self.scene
    }

    fn build_recurse(&mut self, items: &mut [Item]) -> (NodeRef, Aabb) {
        let aabb = items
            .iter()
            .fold(Aabb::new_invalid(), |acc, item| acc.merged(&item.aabb()));

        if let Some(leaf) = self.try_leaf(items, &aabb) {
            return leaf;
        }

        let centers = Aabb::from_points(items.iter().map(|item| item.aabb().center()));
        let axis = centers.extents().imax();
        items.sort_by(|a, b| {
            a.aabb().center()[axis]
                .partial_cmp(&b.aabb().center()[axis])
                .unwrap()
        });

        let (left, right) = items.split_at_mut(items.len() / 2);
        let (left_node, left_aabb) = self.build_recurse(left);
        let (right_node, right_aabb) = self.build_recurse(right);
        let visibility = [
            left.iter().fold(Visibility::empty(), |acc, item| acc | item.visibility()),
            right.iter().fold(Visibility::empty(), |acc, item| acc | item.visibility()),
        ];

        let node = if self.unaligned {
            let frame = Rotation::from_euler_angles(0.4, -0.2, 0.7);
            let inv_frame = Affine::from_matrix_unchecked(frame.inverse().to_homogeneous());
            let space =
                |aabb: &Aabb| unit_box_space(&frame, &loosened(&aabb.transform_by(&inv_frame)));
            BvhInnerNode::unaligned(
                [left_node, right_node],
                visibility,
                [space(&left_aabb), space(&right_aabb)],
            )
        } else {
            BvhInnerNode::aligned(
                [left_node, right_node],
                visibility,
                [left_aabb, right_aabb],
            )
        };

        (self.scene.push_inner_node(node), aabb)
    }

    fn try_leaf(&mut self, items: &[Item], aabb: &Aabb) -> Option<(NodeRef, Aabb)> {
        if let [Item::Instance { object, .. }] = items {
            let leaf = BvhLeafNode::instance(*object, Visibility::ALL);
            return Some((self.scene.push_leaf_node(leaf), *aabb));
        }

        let prim_type = items[0].prim_type()?;
        let uniform = items.iter().all(|item| item.prim_type() == Some(prim_type));
        if items.len() > MAX_LEAF_SIZE || !uniform {
            return None;
        }

        let range = self.scene.next_prim_range(items.len());
        let mut visibility = Visibility::empty();

        for item in items {
            visibility |= item.visibility();
            let _ = match item.clone() {
                Item::Triangle {
                    object,
                    triangle,
                    visibility,
                } => self.scene.push_triangle(object, triangle, visibility),
                Item::MotionTriangle {
                    object,
                    triangle,
                    visibility,
                } => self.scene.push_motion_triangle(object, triangle, visibility),
                Item::Instance { .. } => unreachable!(),
            };
        }

        let leaf = BvhLeafNode::primitives(range, prim_type, visibility);
        Some((self.scene.push_leaf_node(leaf), *aabb))
    }
}

/// Grows a box slightly so rounding in the unit-box transform never clips geometry.
fn loosened(aabb: &Aabb) -> Aabb {
    let margin = Vector::repeat(1.0e-3);
    Aabb::new(aabb.mins - margin, aabb.maxs + margin)
}

/// A UV sphere centered at the origin with its poles on the y axis.
///
/// The odd number of stacks and the longitude offset keep the z axis away from every edge and
/// vertex of the mesh.
pub fn uv_sphere(radius: Real) -> Vec<Triangle> {
    const STACKS: usize = 9;
    const SLICES: usize = 16;
    const LONGITUDE_OFFSET: Real = 0.3;
    let pi = std::f64::consts::PI as Real;

    let vertex = |stack: usize, slice: usize| {
        if stack == 0 {
            return Point::new(0.0, -radius, 0.0);
        } else if stack == STACKS {
            return Point::new(0.0, radius, 0.0);
        }

        let lat = -pi / 2.0 + pi * stack as Real / STACKS as Real;
        let lon = LONGITUDE_OFFSET + 2.0 * pi * slice as Real / SLICES as Real;
        Point::new(
            radius * lat.cos() * lon.cos(),
            radius * lat.sin(),
            radius * lat.cos() * lon.sin(),
        )
    };

    let mut triangles = Vec::new();
    for stack in 0..STACKS {
        for slice in 0..SLICES {
            let a = vertex(stack, slice);
            let b = vertex(stack, slice + 1);
            let c = vertex(stack + 1, slice + 1);
            let d = vertex(stack + 1, slice);

            if a != b {
                triangles.push(Triangle::new(a, b, c));
            }
            if c != d {
                triangles.push(Triangle::new(a, c, d));
            }
        }
    }

    triangles
}

/// A translation by `(x, y, z)`.
pub fn translation(x: Real, y: Real, z: Real) -> Affine<Real> {
    Affine::from_matrix_unchecked(volray3d::math::Matrix::new_translation(&Vector::new(x, y, z)))
}

/// A uniform scaling followed by a translation.
pub fn scaled_translation(scale: Real, offset: Vector<Real>) -> Affine<Real> {
    Affine::from_matrix_unchecked(
        volray3d::math::Matrix::new_translation(&offset)
            * volray3d::math::Matrix::new_scaling(scale),
    )
}

pub fn z_ray() -> Ray {
    Ray::new(Point::new(0.0, 0.0, -5.0), Vector::z(), 100.0)
}

pub fn records(len: usize) -> Vec<Intersection> {
    vec![Intersection::default(); len]
}

/// The sorted distances of the first `num_hits` records.
pub fn sorted_distances(isects: &[Intersection], num_hits: usize) -> Vec<Real> {
    let mut ts: Vec<Real> = isects[..num_hits].iter().map(|isect| isect.t).collect();
    ts.sort_by(|a, b| a.partial_cmp(b).unwrap());
    ts
}

/// A random ray starting outside of the unit sphere, roughly aimed at the origin.
pub fn random_ray(rng: &mut oorandom::Rand32) -> Ray {
    let mut rand = || rng.rand_float() as Real * 2.0 - 1.0;
    let dir = Vector::new(rand(), rand(), rand());
    let origin = Point::from(dir.normalize() * -6.0);
    let jitter = Vector::new(rand(), rand(), rand()) * 0.5;
    Ray::new(origin, -origin.coords + jitter, 100.0).with_time((rand() + 1.0) * 0.5)
}
