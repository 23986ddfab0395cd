use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::math::{Point2d, Real};

/// Computes the convex hull of a set of 2D points, writing the indices of its vertices to `out`.
///
/// The hull is counter-clockwise. Collinear and duplicate points are dropped so a set of
/// collinear points yields its two extremities, and a set of coincident points yields one.
pub fn convex_hull2d_idx(points: &[Point2d<Real>], out: &mut SmallVec<[usize; 8]>) {
    out.clear();

    if points.is_empty() {
        return;
    }

    let mut sorted: SmallVec<[usize; 16]> = (0..points.len()).collect();
    sorted.sort_by_key(|i| (OrderedFloat(points[*i].x), OrderedFloat(points[*i].y)));

    let turn =
        |o: usize, a: usize, b: usize| (points[a] - points[o]).perp(&(points[b] - points[o]));
    let mut hull: SmallVec<[usize; 16]> = SmallVec::new();

    // Lower hull.
    for &i in &sorted {
        while hull.len() >= 2 && turn(hull[hull.len() - 2], hull[hull.len() - 1], i) <= 0.0 {
            let _ = hull.pop();
        }
        hull.push(i);
    }

    // Upper hull.
    let lower_len = hull.len() + 1;
    for &i in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && turn(hull[hull.len() - 2], hull[hull.len() - 1], i) <= 0.0
        {
            let _ = hull.pop();
        }
        hull.push(i);
    }

    // The last point is the first one.
    let _ = hull.pop();

    if hull.is_empty() {
        out.push(sorted[0]);
        return;
    }

    // Coincident points collapse to one.
    if hull.len() == 2 && points[hull[0]] == points[hull[1]] {
        out.push(hull[0]);
        return;
    }

    out.extend(hull);
}
