use crate::math::{Affine, Real};
use crate::motion::MotionTransform;
use crate::partitioning::NodeRef;
use crate::scene::{ObjectFlags, SceneError};

/// Object index marking the absence of an object, e.g. outside of any instance.
pub const OBJECT_NONE: u32 = u32::MAX;

/// The per-object data read by traversal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectData {
    transform: Affine<Real>,
    inverse_transform: Affine<Real>,
    motion: Option<MotionTransform>,
    flags: ObjectFlags,
    root: NodeRef,
}

impl ObjectData {
    /// A static object with the given object-to-world transform.
    ///
    /// `root` is the root of the object's own hierarchy, used when the object is instanced. It
    /// may be [`NodeRef::Sentinel`] for objects whose primitives live in the top-level hierarchy.
    pub fn new(
        transform: Affine<Real>,
        flags: ObjectFlags,
        root: NodeRef,
    ) -> Result<Self, SceneError> {
        let inverse_transform = transform
            .try_inverse()
            .ok_or(SceneError::NonInvertibleTransform)?;

        Ok(Self {
            transform,
            inverse_transform,
            motion: None,
            flags: flags - ObjectFlags::HAS_MOTION,
            root,
        })
    }

    /// A moving object.
    ///
    /// The static transform, used by traversal without motion support, is the pose at the
    /// shutter opening.
    pub fn with_motion(motion: MotionTransform, flags: ObjectFlags, root: NodeRef) -> Self {
        Self {
            transform: motion.transform_at_time(0.0),
            inverse_transform: motion.inverse_at_time(0.0),
            motion: Some(motion),
            flags: flags | ObjectFlags::HAS_MOTION,
            root,
        }
    }

    /// The object-to-world transform.
    #[inline]
    pub fn transform(&self) -> &Affine<Real> {
        &self.transform
    }

    /// The world-to-object transform.
    #[inline]
    pub fn inverse_transform(&self) -> &Affine<Real> {
        &self.inverse_transform
    }

    /// The keyed transform of a moving object.
    #[inline]
    pub fn motion(&self) -> Option<&MotionTransform> {
        self.motion.as_ref()
    }

    /// The world-to-object transform at the given shutter time.
    ///
    /// Falls back to the static inverse transform unless `motion_blur` is set and the object
    /// moves.
    #[inline]
    pub fn inverse_transform_at_time(&self, time: Real, motion_blur: bool) -> Affine<Real> {
        match &self.motion {
            Some(motion) if motion_blur => motion.inverse_at_time(time),
            _ => self.inverse_transform,
        }
    }

    /// The properties of this object.
    #[inline]
    pub fn flags(&self) -> ObjectFlags {
        self.flags
    }

    /// Does this object participate in volume queries?
    #[inline]
    pub fn has_volume(&self) -> bool {
        self.flags.contains(ObjectFlags::HAS_VOLUME)
    }

    /// The root of this object's own hierarchy.
    #[inline]
    pub fn root(&self) -> NodeRef {
        self.root
    }

    /// Sets the root of this object's own hierarchy.
    #[inline]
    pub fn set_root(&mut self, root: NodeRef) {
        self.root = root;
    }
}
