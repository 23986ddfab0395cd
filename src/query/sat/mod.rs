//! Application of the Separating Axis Theorem (SAT) to pairs of convex shapes.
//!
//! Two convex shapes are disjoint iff there exists an axis onto which their projections do
//! not overlap. Every axis gives a lower bound of the distance between the shapes: the
//! separation of their projections. The axis with the greatest separation is the contact
//! normal, and its separation is the distance between the shapes if positive, or an
//! approximation of their penetration depth otherwise.
//!
//! The candidate axes are:
//!
//! - the face normals of both shapes,
//! - the cross products between the edge directions of both shapes,
//! - for shapes with a margin, the directions between the closest points of the vertices and
//!   edges of their cores,
//! - for curved shapes, the directions from the other shape’s vertices and edges to the curved
//!   surface, refined by a local search.
//!
//! Degenerate candidates (near-zero cross products or coincident points) are skipped. All
//! positions are expressed in a common frame, and axes point from the second shape toward
//! the first one.

use smallvec::SmallVec;

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::PolygonalFeatureMap;
use crate::utils::{
    closest_points_segment_segment, lerp, orthonormal_basis, project_point_on_segment,
};

const DEGENERATE_AXIS_EPSILON: Real = 1.0e-6;
const REFINEMENT_INITIAL_STEP: Real = 0.1;
const REFINEMENT_MIN_STEP: Real = 1.0e-4;
const REFINEMENT_MAX_ITERATIONS: usize = 32;

/// The separation between the two shapes along the unit `axis`, pointing from the second
/// shape toward the first one.
///
/// Margins are taken into account: this is the separation between the actual surfaces of
/// the shapes, not between their cores.
pub fn pfm_pfm_compute_separation<G1, G2>(
    g1: &G1,
    pos1: &Isometry<Real>,
    g2: &G2,
    pos2: &Isometry<Real>,
    axis: &Vector<Real>,
) -> Real
where
    G1: PolygonalFeatureMap,
    G2: PolygonalFeatureMap,
{
    -g1.support_projection(pos1, &-axis)
        - g2.support_projection(pos2, axis)
        - g1.margin()
        - g2.margin()
}

struct AxisSearch<'a, G1, G2> {
    g1: &'a G1,
    pos1: &'a Isometry<Real>,
    g2: &'a G2,
    pos2: &'a Isometry<Real>,
    best: Option<(Vector<Real>, Real)>,
}

impl<G1: PolygonalFeatureMap, G2: PolygonalFeatureMap> AxisSearch<'_, G1, G2> {
    fn separation(&self, axis: &Vector<Real>) -> Real {
        pfm_pfm_compute_separation(self.g1, self.pos1, self.g2, self.pos2, axis)
    }

    fn test(&mut self, axis: Vector<Real>) {
        let separation = self.separation(&axis);

        if self.best.map_or(true, |(_, best)| separation > best) {
            self.best = Some((axis, separation));
        }
    }

    // Tests both orientations of a non-normalized direction.
    fn test_dir(&mut self, dir: Vector<Real>) {
        if let Some(axis) = dir.try_normalize(DEGENERATE_AXIS_EPSILON) {
            self.test(axis);
            self.test(-axis);
        }
    }

    // Hill-climbing on the unit sphere around the best axis.
    fn refine(&mut self) {
        let Some((mut axis, mut separation)) = self.best else {
            return;
        };
        let mut step = REFINEMENT_INITIAL_STEP;

        for _ in 0..REFINEMENT_MAX_ITERATIONS {
            if step < REFINEMENT_MIN_STEP {
                break;
            }

            let [t1, t2] = orthonormal_basis(&axis);
            let improvement = [t1, -t1, t2, -t2].into_iter().find_map(|tangent| {
                let candidate = (axis + tangent * step).normalize();
                let candidate_separation = self.separation(&candidate);
                (candidate_separation > separation).then_some((candidate, candidate_separation))
            });

            match improvement {
                Some((new_axis, new_separation)) => {
                    axis = new_axis;
                    separation = new_separation;
                }
                None => step *= 0.5,
            }
        }

        self.best = Some((axis, separation));
    }
}

/// Finds the axis with the greatest separation between two convex shapes.
///
/// Returns the unit axis, pointing from the second shape toward the first one, and the
/// separation along it.
pub fn pfm_pfm_find_separating_axis<G1, G2>(
    g1: &G1,
    pos1: &Isometry<Real>,
    g2: &G2,
    pos2: &Isometry<Real>,
) -> (Vector<Real>, Real)
where
    G1: PolygonalFeatureMap,
    G2: PolygonalFeatureMap,
{
    let mut search = AxisSearch {
        g1,
        pos1,
        g2,
        pos2,
        best: None,
    };

    g1.for_each_face_normal(pos1, |n| search.test(-n));
    g2.for_each_face_normal(pos2, |n| search.test(n));

    let mut dirs1: SmallVec<[Vector<Real>; 16]> = SmallVec::new();
    g1.for_each_edge_dir(pos1, |dir| dirs1.push(dir));
    g2.for_each_edge_dir(pos2, |dir2| {
        for dir1 in &dirs1 {
            search.test_dir(dir1.cross(&dir2));
        }
    });

    let curved = g1.is_curved() || g2.is_curved();

    if curved || g1.margin() > 0.0 || g2.margin() > 0.0 {
        let mut vertices1: SmallVec<[Point<Real>; 16]> = SmallVec::new();
        let mut vertices2: SmallVec<[Point<Real>; 16]> = SmallVec::new();
        let mut edges1: SmallVec<[[Point<Real>; 2]; 16]> = SmallVec::new();
        let mut edges2: SmallVec<[[Point<Real>; 2]; 16]> = SmallVec::new();
        g1.for_each_vertex(pos1, |pt| vertices1.push(pt));
        g2.for_each_vertex(pos2, |pt| vertices2.push(pt));
        g1.for_each_edge(pos1, |a, b| edges1.push([a, b]));
        g2.for_each_edge(pos2, |a, b| edges2.push([a, b]));

        for v1 in &vertices1 {
            for v2 in &vertices2 {
                search.test_dir(v1 - v2);
            }

            for [a2, b2] in &edges2 {
                let (proj, _) = project_point_on_segment(a2, b2, v1);
                search.test_dir(v1 - proj);
            }
        }

        for [a1, b1] in &edges1 {
            for v2 in &vertices2 {
                let (proj, _) = project_point_on_segment(a1, b1, v2);
                search.test_dir(proj - v2);
            }

            for [a2, b2] in &edges2 {
                let (s, t) = closest_points_segment_segment(a1, b1, a2, b2);
                search.test_dir(lerp(a1, b1, s) - lerp(a2, b2, t));
            }
        }

        if g2.is_curved() {
            for v1 in &vertices1 {
                if let Some(proj) = g2.project_point(pos2, v1) {
                    search.test_dir(v1 - proj);
                }
            }

            for [a1, b1] in &edges1 {
                for [a2, b2] in &edges2 {
                    let (s, _) = closest_points_segment_segment(a1, b1, a2, b2);
                    let pt1 = lerp(a1, b1, s);
                    if let Some(proj) = g2.project_point(pos2, &pt1) {
                        search.test_dir(pt1 - proj);
                    }
                }
            }
        }

        if g1.is_curved() {
            for v2 in &vertices2 {
                if let Some(proj) = g1.project_point(pos1, v2) {
                    search.test_dir(proj - v2);
                }
            }

            for [a2, b2] in &edges2 {
                for [a1, b1] in &edges1 {
                    let (_, t) = closest_points_segment_segment(a1, b1, a2, b2);
                    let pt2 = lerp(a2, b2, t);
                    if let Some(proj) = g1.project_point(pos1, &pt2) {
                        search.test_dir(proj - pt2);
                    }
                }
            }
        }
    }

    if curved {
        search.refine();
    }

    search.best.unwrap_or_else(|| {
        log::trace!("no usable separating axis candidate, falling back to the y axis");
        let axis = Vector::y();
        (axis, search.separation(&axis))
    })
}
