use crate::math::{Point, Real};

/// Projects `pt` on the segment `[a, b]`, returning the projection and its parameter along
/// the segment.
pub fn project_point_on_segment(
    a: &Point<Real>,
    b: &Point<Real>,
    pt: &Point<Real>,
) -> (Point<Real>, Real) {
    let ab = b - a;
    let len2 = ab.norm_squared();

    if len2 <= Real::EPSILON {
        return (*a, 0.0);
    }

    let t = ((pt - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (a + ab * t, t)
}

/// Computes the parameters `(s, t)` of the closest points between the segments `[a1, b1]`
/// and `[a2, b2]`.
///
/// When the segments are parallel, the returned pair is one of the infinitely many solutions.
pub fn closest_points_segment_segment(
    a1: &Point<Real>,
    b1: &Point<Real>,
    a2: &Point<Real>,
    b2: &Point<Real>,
) -> (Real, Real) {
    let d1 = b1 - a1;
    let d2 = b2 - a2;
    let r = a1 - a2;
    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    if a <= Real::EPSILON && e <= Real::EPSILON {
        return (0.0, 0.0);
    }

    if a <= Real::EPSILON {
        return (0.0, (f / e).clamp(0.0, 1.0));
    }

    let c = d1.dot(&r);

    if e <= Real::EPSILON {
        return ((-c / a).clamp(0.0, 1.0), 0.0);
    }

    let b = d1.dot(&d2);
    let denom = a * e - b * b;

    let mut s = if denom > Real::EPSILON * a * e {
        ((b * f - c * e) / denom).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut t = (b * s + f) / e;

    if t < 0.0 {
        t = 0.0;
        s = (-c / a).clamp(0.0, 1.0);
    } else if t > 1.0 {
        t = 1.0;
        s = ((b - c) / a).clamp(0.0, 1.0);
    }

    (s, t)
}
