use arrayvec::ArrayVec;

use crate::math::{Point2d, Real};

/// Computes the intersection between the segments `[a, b]` and `[c, d]`.
///
/// Each intersection is returned as a pair of parameters `(s, t)` such that the intersection
/// point is `a + (b - a) * s == c + (d - c) * t`. Crossing segments yield a single
/// intersection; collinear overlapping segments yield the two end-points of the overlap.
pub fn segments_intersection2d(
    a: &Point2d<Real>,
    b: &Point2d<Real>,
    c: &Point2d<Real>,
    d: &Point2d<Real>,
    epsilon: Real,
) -> ArrayVec<(Real, Real), 2> {
    let mut result = ArrayVec::new();
    let ab = b - a;
    let cd = d - c;
    let ac = c - a;
    let denom = ab.perp(&cd);

    // If denom is zero, then segments are parallel: handle separately.
    if denom.abs() <= epsilon * ab.norm() * cd.norm() || ulps_eq!(denom, 0.0) {
        parallel_intersection(a, b, c, d, epsilon, &mut result);
        return result;
    }

    let s = ac.perp(&cd) / denom;
    let t = ac.perp(&ab) / denom;

    if (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t) {
        result.push((s, t));
    }

    result
}

fn parallel_intersection(
    a: &Point2d<Real>,
    b: &Point2d<Real>,
    c: &Point2d<Real>,
    d: &Point2d<Real>,
    epsilon: Real,
    out: &mut ArrayVec<(Real, Real), 2>,
) {
    let ab = b - a;
    let cd = d - c;
    let ab_len2 = ab.norm_squared();
    let cd_len2 = cd.norm_squared();

    if ab_len2 <= epsilon * epsilon || cd_len2 <= epsilon * epsilon {
        return;
    }

    // Not collinear.
    if (c - a).perp(&ab).abs() > epsilon * ab_len2.sqrt() {
        return;
    }

    // Parameters of `c` and `d` along `ab`.
    let sc = (c - a).dot(&ab) / ab_len2;
    let sd = (d - a).dot(&ab) / ab_len2;
    let (s_min, s_max) = if sc <= sd { (sc, sd) } else { (sd, sc) };
    let s0 = s_min.max(0.0);
    let s1 = s_max.min(1.0);

    if s0 > s1 {
        return;
    }

    let param_on_cd = |s: Real| {
        let p = a + ab * s;
        ((p - c).dot(&cd) / cd_len2).clamp(0.0, 1.0)
    };

    out.push((s0, param_on_cd(s0)));

    if s1 - s0 > epsilon {
        out.push((s1, param_on_cd(s1)));
    }
}
