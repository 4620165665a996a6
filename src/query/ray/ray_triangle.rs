use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;

/// A ray/triangle intersection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleHit {
    /// Ray parameter of the hit.
    pub t: Real,
    /// Barycentric weight of the triangle's second vertex.
    pub u: Real,
    /// Barycentric weight of the triangle's third vertex.
    pub v: Real,
}

/// Computes the intersection between a triangle and a ray, from either side of the triangle.
///
/// A hit is reported only when its ray parameter lies in the open interval `(0, max_toi)`.
/// The returned barycentric coordinates satisfy `hit = (1 - u - v) * a + u * b + v * c`.
pub fn ray_triangle_intersection(
    triangle: &Triangle,
    origin: &Point<Real>,
    dir: &Vector<Real>,
    max_toi: Real,
) -> Option<TriangleHit> {
    let ab = triangle.b - triangle.a;
    let ac = triangle.c - triangle.a;

    // normal
    let n = ab.cross(&ac);
    let d = n.dot(dir);

    // the normal and the ray direction are parallel
    if d == 0.0 {
        return None;
    }

    let ap = origin - triangle.a;
    let t = ap.dot(&n);

    // the ray does not intersect the halfspace defined by the triangle
    if (t < 0.0 && d < 0.0) || (t > 0.0 && d > 0.0) {
        return None;
    }

    let d = d.abs();

    //
    // intersection: compute barycentric coordinates
    //
    let e = -dir.cross(&ap);

    let v;
    let w;
    let toi;

    if t < 0.0 {
        v = -ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        w = ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        toi = -t / d;
    } else {
        v = ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        w = -ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        toi = t / d;
    }

    if toi > 0.0 && toi < max_toi {
        let invd = 1.0 / d;
        Some(TriangleHit {
            t: toi,
            u: v * invd,
            v: w * invd,
        })
    } else {
        None
    }
}
