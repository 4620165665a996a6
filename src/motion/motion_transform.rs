use crate::math::{Affine, Matrix, Real, Rotation, Vector, DEFAULT_EPSILON};
use crate::scene::SceneError;
use crate::utils;
use smallvec::SmallVec;

/// An affine transform split into a translation, a rotation, and a non-uniform scale.
///
/// The represented transform is `T · R · S`: points are scaled first, then rotated, then
/// translated. Keeping the parts separate lets motion keys be interpolated without shearing.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecomposedTransform {
    /// The translational part.
    pub translation: Vector<Real>,
    /// The rotational part.
    pub rotation: Rotation<Real>,
    /// The per-axis scaling factors.
    pub scale: Vector<Real>,
}

impl Default for DecomposedTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl DecomposedTransform {
    /// Creates a transform from its three parts.
    pub fn new(translation: Vector<Real>, rotation: Rotation<Real>, scale: Vector<Real>) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self::new(Vector::zeros(), Rotation::identity(), Vector::repeat(1.0))
    }

    /// A pure translation.
    pub fn from_translation(translation: Vector<Real>) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    /// The object-to-world transform described by these parts.
    pub fn to_affine(&self) -> Affine<Real> {
        Affine::from_matrix_unchecked(
            Matrix::new_translation(&self.translation)
                * self.rotation.to_homogeneous()
                * Matrix::new_nonuniform_scaling(&self.scale),
        )
    }

    /// The world-to-object transform, composed directly from the parts as `S⁻¹ · Rᵀ · T⁻¹`.
    ///
    /// A zero scale component maps to a zero inverse scale instead of an infinity.
    pub fn inverse_affine(&self) -> Affine<Real> {
        Affine::from_matrix_unchecked(
            Matrix::new_nonuniform_scaling(&utils::inv_components(&self.scale))
                * self.rotation.inverse().to_homogeneous()
                * Matrix::new_translation(&-self.translation),
        )
    }

    /// Interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// Translation and scale are interpolated linearly, the rotation spherically. Rotations
    /// too far apart for a well-defined slerp fall back to a normalized linear interpolation.
    pub fn interpolate(&self, other: &Self, t: Real) -> Self {
        let rotation = self
            .rotation
            .try_slerp(&other.rotation, t, DEFAULT_EPSILON)
            .unwrap_or_else(|| self.rotation.nlerp(&other.rotation, t));

        Self {
            translation: self.translation.lerp(&other.translation, t),
            rotation,
            scale: self.scale.lerp(&other.scale, t),
        }
    }
}

/// The keyed transform of a moving object.
///
/// Keys are evenly spaced over the shutter interval `time ∈ [0, 1]`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MotionTransform {
    keys: SmallVec<[DecomposedTransform; 3]>,
}

impl MotionTransform {
    /// Creates a motion transform from at least two keys.
    pub fn new(keys: impl IntoIterator<Item = DecomposedTransform>) -> Result<Self, SceneError> {
        let keys: SmallVec<[DecomposedTransform; 3]> = keys.into_iter().collect();

        if keys.len() < 2 {
            return Err(SceneError::NotEnoughMotionKeys { found: keys.len() });
        }

        Ok(Self { keys })
    }

    /// The keys of this motion.
    #[inline]
    pub fn keys(&self) -> &[DecomposedTransform] {
        &self.keys
    }

    /// The decomposed transform at the given time, clamped to `[0, 1]`.
    pub fn decomposed_at_time(&self, time: Real) -> DecomposedTransform {
        let (step, frac) = utils::motion_segment(self.keys.len(), time);
        self.keys[step].interpolate(&self.keys[step + 1], frac)
    }

    /// The object-to-world transform at the given time.
    #[inline]
    pub fn transform_at_time(&self, time: Real) -> Affine<Real> {
        self.decomposed_at_time(time).to_affine()
    }

    /// The world-to-object transform at the given time.
    #[inline]
    pub fn inverse_at_time(&self, time: Real) -> Affine<Real> {
        self.decomposed_at_time(time).inverse_affine()
    }
}
