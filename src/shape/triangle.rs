//! Definition of the triangle shape.

use smallvec::SmallVec;

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{FeatureId, PolygonalFeature, PolygonalFeatureMap};

/// A triangle shape.
///
/// Vertex `i` has the id `Vertex(i)`, the edge joining the vertex `i` to the vertex `i + 1`
/// has the id `Edge(i)`. As a contact shape, a triangle is one-sided: its only face normal
/// is the one given by its counter-clockwise winding.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Reference to an array containing the three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The normal of this triangle assuming it is oriented ccw, or `None` if it is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Vector<Real>> {
        (self.b - self.a)
            .cross(&(self.c - self.a))
            .try_normalize(Real::EPSILON)
    }

    /// The local index of the edge joining the local vertices `i` and `j`.
    #[inline]
    pub fn edge_index(i: u32, j: u32) -> u32 {
        if j == (i + 1) % 3 {
            i
        } else {
            j
        }
    }
}

impl PolygonalFeatureMap for Triangle {
    fn support_projection(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Real {
        self.vertices()
            .iter()
            .map(|pt| (pos * pt).coords.dot(dir))
            .fold(-Real::MAX, Real::max)
    }

    fn support_feature(
        &self,
        pos: &Isometry<Real>,
        dir: &Vector<Real>,
        tolerance: Real,
        out: &mut PolygonalFeature,
    ) {
        let candidates: SmallVec<[(Point<Real>, FeatureId); 8]> = self
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, pt)| (pos * pt, FeatureId::Vertex(i as u32)))
            .collect();
        out.set_from_point_cloud(&candidates, dir, tolerance);

        for i in 0..out.num_edges() {
            let (a, b) = out.edge(i);
            let eid = Self::edge_index(out.vids[a].unwrap_vertex(), out.vids[b].unwrap_vertex());
            out.set_edge_id(i, FeatureId::Edge(eid));
        }

        match out.len() {
            1 => {}
            2 => out.fid = out.eids[0],
            _ => out.fid = FeatureId::Face(0),
        }
    }

    fn for_each_face_normal(&self, pos: &Isometry<Real>, mut f: impl FnMut(Vector<Real>)) {
        if let Some(normal) = self.normal() {
            f(pos * normal)
        }
    }

    fn for_each_edge_dir(&self, pos: &Isometry<Real>, mut f: impl FnMut(Vector<Real>)) {
        f(pos * (self.b - self.a));
        f(pos * (self.c - self.b));
        f(pos * (self.a - self.c));
    }

    fn for_each_vertex(&self, pos: &Isometry<Real>, mut f: impl FnMut(Point<Real>)) {
        for pt in self.vertices() {
            f(pos * pt)
        }
    }

    fn for_each_edge(&self, pos: &Isometry<Real>, mut f: impl FnMut(Point<Real>, Point<Real>)) {
        f(pos * self.a, pos * self.b);
        f(pos * self.b, pos * self.c);
        f(pos * self.c, pos * self.a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_support_features() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, -1.0),
        );
        assert_relative_eq!(tri.normal().unwrap(), Vector::y(), epsilon = 1.0e-6);

        let mut feature = PolygonalFeature::new();
        tri.support_feature(&Isometry::identity(), &Vector::y(), 0.01, &mut feature);
        assert_eq!(feature.fid, FeatureId::Face(0));

        tri.support_feature(&Isometry::identity(), &Vector::z(), 0.01, &mut feature);
        assert_eq!(feature.len(), 2);
        assert_eq!(feature.fid, FeatureId::Edge(0));

        tri.support_feature(&Isometry::identity(), &Vector::x(), 0.01, &mut feature);
        assert_eq!(feature.fid, FeatureId::Vertex(1));
    }
}
