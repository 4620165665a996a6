/// The capabilities a traversal variant is compiled with.
///
/// Each implementor is a zero-sized marker. The kernel branches on the associated constants,
/// and each variant is monomorphized separately so disabled branches cost nothing.
///
/// This trait is sealed: the four variants below are the only ones.
pub trait BvhFeatures: sealed::Sealed + Copy + Send + Sync + 'static {
    /// Traverse inner nodes with unaligned (oriented) child bounds.
    const HAIR: bool;
    /// Interpolate moving objects and keyed primitives at the ray time.
    const MOTION: bool;
}

mod sealed {
    pub trait Sealed {}
}

/// Traversal of static scenes with axis-aligned nodes only.
#[derive(Copy, Clone, Debug, Default)]
pub struct BvhStatic;

/// Traversal of static scenes that may contain unaligned nodes.
#[derive(Copy, Clone, Debug, Default)]
pub struct BvhHair;

/// Traversal with motion blur and axis-aligned nodes only.
#[derive(Copy, Clone, Debug, Default)]
pub struct BvhMotion;

/// Traversal with motion blur and unaligned nodes.
#[derive(Copy, Clone, Debug, Default)]
pub struct BvhHairMotion;

macro_rules! impl_bvh_features(
    ($($T: ident => ($hair: expr, $motion: expr)),* $(,)*) => {$(
        impl sealed::Sealed for $T {}

        impl BvhFeatures for $T {
            const HAIR: bool = $hair;
            const MOTION: bool = $motion;
        }
    )*}
);

impl_bvh_features!(
    BvhStatic => (false, false),
    BvhHair => (true, false),
    BvhMotion => (false, true),
    BvhHairMotion => (true, true),
);
