use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::scene::SceneError;
use crate::shape::Triangle;
use crate::utils;
use smallvec::SmallVec;

/// A triangle whose vertices are keyed over the shutter interval.
///
/// The keys are evenly spaced over `time ∈ [0, 1]`: the first key is the triangle at the shutter
/// opening, the last one at its closing.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct MotionTriangle {
    keys: SmallVec<[Triangle; 3]>,
}

impl MotionTriangle {
    /// Creates a motion triangle from at least two vertex keys.
    pub fn new(keys: impl IntoIterator<Item = Triangle>) -> Result<Self, SceneError> {
        let keys: SmallVec<[Triangle; 3]> = keys.into_iter().collect();

        if keys.len() < 2 {
            return Err(SceneError::NotEnoughMotionKeys { found: keys.len() });
        }

        Ok(Self { keys })
    }

    /// The vertex keys of this triangle.
    #[inline]
    pub fn keys(&self) -> &[Triangle] {
        &self.keys
    }

    /// The triangle at the given shutter time.
    ///
    /// `time` is clamped to `[0, 1]`.
    #[inline]
    pub fn at_time(&self, time: Real) -> Triangle {
        let (step, frac) = utils::motion_segment(self.keys.len(), time);
        self.keys[step].lerp(&self.keys[step + 1], frac)
    }

    /// The `Aabb` enclosing this triangle over the whole shutter interval.
    pub fn local_aabb(&self) -> Aabb {
        self.keys
            .iter()
            .fold(Aabb::new_invalid(), |acc, key| acc.merged(&key.local_aabb()))
    }
}
