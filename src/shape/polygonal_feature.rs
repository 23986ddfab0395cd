use smallvec::SmallVec;

use crate::math::{Point, Point2d, Real, Vector};
use crate::shape::FeatureId;
use crate::utils::{convex_hull2d_idx, orthonormal_basis};

/// A polygonal feature representing the local polygonal approximation of
/// a vertex, edge, or face of a convex shape, as seen along some direction.
///
/// Vertices are ordered along the boundary of the polygon. The edge `i` joins the vertices
/// `i` and `i + 1` (modulo the number of vertices).
#[derive(Debug, Clone, Default)]
pub struct PolygonalFeature {
    /// The vertices forming this polygonal feature.
    pub vertices: SmallVec<[Point<Real>; 8]>,
    /// The feature IDs of this polygon's vertices.
    pub vids: SmallVec<[FeatureId; 8]>,
    /// The feature IDs of this polygon's edges.
    pub eids: SmallVec<[FeatureId; 8]>,
    /// The feature ID of this polygonal feature as a whole.
    pub fid: FeatureId,
}

impl PolygonalFeature {
    /// Creates an empty polygonal feature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all the vertices of this feature.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.vids.clear();
        self.eids.clear();
        self.fid = FeatureId::Unknown;
    }

    /// The number of vertices of this feature.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Does this feature have no vertex?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The number of distinct edges of this feature: none for a vertex, one for a segment.
    #[inline]
    pub fn num_edges(&self) -> usize {
        match self.len() {
            0 | 1 => 0,
            2 => 1,
            n => n,
        }
    }

    /// Adds a vertex to this feature. The edge starting at this vertex gets an unknown id.
    pub fn push(&mut self, pt: Point<Real>, vid: FeatureId) {
        self.vertices.push(pt);
        self.vids.push(vid);
        self.eids.push(FeatureId::Unknown);
    }

    /// Sets the id of the edge joining the vertex `i` to the next one.
    pub fn set_edge_id(&mut self, i: usize, eid: FeatureId) {
        self.eids[i] = eid;
    }

    /// The end-points of the `i`-th edge.
    #[inline]
    pub fn edge(&self, i: usize) -> (usize, usize) {
        (i, (i + 1) % self.len())
    }

    /// Fills this feature with the points of `candidates` which are within `tolerance` of the
    /// maximum projection along `dir`.
    ///
    /// When more than two points are selected, only the vertices of their convex hull (seen
    /// along `dir`) are kept. Edge and feature ids are left unknown, except for single-vertex
    /// features whose feature id is the vertex id.
    pub fn set_from_point_cloud(
        &mut self,
        candidates: &[(Point<Real>, FeatureId)],
        dir: &Vector<Real>,
        tolerance: Real,
    ) {
        self.clear();

        let max_proj = candidates
            .iter()
            .map(|(pt, _)| pt.coords.dot(dir))
            .fold(-Real::MAX, Real::max);
        let selected: SmallVec<[usize; 8]> = (0..candidates.len())
            .filter(|i| candidates[*i].0.coords.dot(dir) >= max_proj - tolerance)
            .collect();

        if selected.len() <= 2 {
            for i in &selected {
                self.push(candidates[*i].0, candidates[*i].1);
            }
        } else {
            let [t1, t2] = orthonormal_basis(dir);
            let projected: SmallVec<[Point2d<Real>; 8]> = selected
                .iter()
                .map(|i| {
                    let pt = &candidates[*i].0.coords;
                    Point2d::new(pt.dot(&t1), pt.dot(&t2))
                })
                .collect();
            let mut hull = SmallVec::new();
            convex_hull2d_idx(&projected, &mut hull);

            for h in hull {
                let (pt, vid) = candidates[selected[h]];
                self.push(pt, vid);
            }
        }

        if self.len() == 1 {
            self.fid = self.vids[0];
        }
    }
}
