use crate::math::{Point2d, Real};

/// Tests if the given point is inside a convex polygon with arbitrary orientation.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge. Points lying on the boundary, up to `epsilon`, are
/// considered inside.
pub fn point_in_convex_poly2d(
    pt: &Point2d<Real>,
    poly: &[Point2d<Real>],
    epsilon: Real,
) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut sign: Real = 0.0;

    for i1 in 0..poly.len() {
        let i2 = (i1 + 1) % poly.len();
        let seg_dir = poly[i2] - poly[i1];
        let dpt = pt - poly[i1];
        let perp = dpt.perp(&seg_dir);

        if perp.abs() <= epsilon * seg_dir.norm() {
            continue;
        }

        if sign == 0.0 {
            sign = perp;
        } else if sign * perp < 0.0 {
            return false;
        }
    }

    true
}
