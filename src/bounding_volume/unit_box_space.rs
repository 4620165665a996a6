use crate::bounding_volume::Aabb;
use crate::math::{Affine, Matrix, Real, Rotation};
use crate::utils;

/// Computes the transform mapping world-space points into the unit cube of an oriented box.
///
/// The oriented box is `local_aabb` expressed in the frame rotated by `frame`. Points inside the
/// box are mapped into `[0, 1]^3`. Degenerate extents map to zero along their axis so the
/// resulting slab always has a finite thickness of zero rather than dividing by zero.
pub fn unit_box_space(frame: &Rotation<Real>, local_aabb: &Aabb) -> Affine<Real> {
    let inv_extents = utils::inv_components(&local_aabb.extents());

    let m = Matrix::new_nonuniform_scaling(&inv_extents)
        * Matrix::new_translation(&-local_aabb.mins.coords)
        * frame.inverse().to_homogeneous();
    Affine::from_matrix_unchecked(m)
}
