#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// The set of ray types that can see a node or a primitive.
///
/// A node or primitive is considered by a query only if its mask shares at least one bit with
/// the query mask.
pub struct Visibility(u32);

bitflags::bitflags! {
    impl Visibility: u32 {
        /// Rays leaving the camera.
        const CAMERA = 1;
        /// Rays reflected off a surface.
        const REFLECT = 1 << 1;
        /// Rays transmitted through a surface.
        const TRANSMIT = 1 << 2;
        /// Diffuse bounces.
        const DIFFUSE = 1 << 3;
        /// Glossy bounces.
        const GLOSSY = 1 << 4;
        /// Perfectly specular bounces.
        const SINGULAR = 1 << 5;
        /// Rays passing through transparent surfaces.
        const TRANSPARENT = 1 << 6;
        /// Rays scattered inside a volume.
        const VOLUME_SCATTER = 1 << 7;
        /// Shadow rays stopped by any hit.
        const SHADOW_OPAQUE = 1 << 8;
        /// Shadow rays accumulating transparency.
        const SHADOW_TRANSPARENT = 1 << 9;
        /// Every shadow ray.
        const SHADOW = Self::SHADOW_OPAQUE.bits() | Self::SHADOW_TRANSPARENT.bits();
        /// Every ray type, including those not named above.
        const ALL = u32::MAX;
    }
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// The geometric type of a primitive.
///
/// Each primitive has exactly one of these bits set; leaves group primitives of a single type.
pub struct PrimitiveType(u32);

bitflags::bitflags! {
    impl PrimitiveType: u32 {
        /// A static triangle.
        const TRIANGLE = 1;
        /// A triangle with keyed vertices.
        const MOTION_TRIANGLE = 1 << 1;
        /// A thick curve segment.
        const CURVE_THICK = 1 << 2;
        /// A thick curve segment with keyed control points.
        const MOTION_CURVE_THICK = 1 << 3;
        /// A flat curve ribbon.
        const CURVE_RIBBON = 1 << 4;
        /// A flat curve ribbon with keyed control points.
        const MOTION_CURVE_RIBBON = 1 << 5;
        /// A point cloud sphere.
        const POINT = 1 << 6;
        /// A point cloud sphere with keyed positions.
        const MOTION_POINT = 1 << 7;

        /// Every triangle type.
        const ALL_TRIANGLE = Self::TRIANGLE.bits() | Self::MOTION_TRIANGLE.bits();
        /// Every curve type.
        const ALL_CURVE = Self::CURVE_THICK.bits()
            | Self::MOTION_CURVE_THICK.bits()
            | Self::CURVE_RIBBON.bits()
            | Self::MOTION_CURVE_RIBBON.bits();
        /// Every point type.
        const ALL_POINT = Self::POINT.bits() | Self::MOTION_POINT.bits();
        /// Every primitive type with keyed geometry.
        const ALL_MOTION = Self::MOTION_TRIANGLE.bits()
            | Self::MOTION_CURVE_THICK.bits()
            | Self::MOTION_CURVE_RIBBON.bits()
            | Self::MOTION_POINT.bits();
        /// Every primitive type.
        const ALL = Self::ALL_TRIANGLE.bits() | Self::ALL_CURVE.bits() | Self::ALL_POINT.bits();
    }
}

impl PrimitiveType {
    /// Is this exactly one primitive type?
    #[inline]
    pub fn is_single(self) -> bool {
        self.bits().count_ones() == 1 && Self::ALL.contains(self)
    }
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// Per-object properties relevant to traversal.
pub struct ObjectFlags(u32);

bitflags::bitflags! {
    impl ObjectFlags: u32 {
        /// The object carries a volume and participates in volume queries.
        const HAS_VOLUME = 1;
        /// The object transform is keyed over the shutter interval.
        const HAS_MOTION = 1 << 1;
    }
}
