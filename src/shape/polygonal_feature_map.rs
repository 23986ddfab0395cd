use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::PolygonalFeature;

/// Trait implemented by convex shapes that the generic contact generator can handle.
///
/// A shape is described by a polytope or curved "core" optionally inflated by a constant
/// margin: a sphere is a point with a margin equal to its radius, a capsule a segment.
/// Every query takes the position `pos` of the shape in the frame where the contact
/// computation happens and returns results expressed in that same frame.
pub trait PolygonalFeatureMap {
    /// The radius of the sphere swept around the core of this shape.
    fn margin(&self) -> Real {
        0.0
    }

    /// Does this shape have a curved surface that no finite set of faces and edges describes?
    fn is_curved(&self) -> bool {
        false
    }

    /// The maximum of `dir · x` for all points `x` of the core of this shape.
    fn support_projection(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Real;

    /// Computes the feature of the core of this shape that lies within `tolerance` of its
    /// maximal projection along the unit vector `dir`.
    fn support_feature(
        &self,
        pos: &Isometry<Real>,
        dir: &Vector<Real>,
        tolerance: Real,
        out: &mut PolygonalFeature,
    );

    /// Calls `f` with the outward normal of each face of the core of this shape.
    fn for_each_face_normal(&self, pos: &Isometry<Real>, f: impl FnMut(Vector<Real>));

    /// Calls `f` with the direction of each distinct edge of the core of this shape.
    fn for_each_edge_dir(&self, pos: &Isometry<Real>, f: impl FnMut(Vector<Real>));

    /// Calls `f` with each vertex of the core of this shape.
    fn for_each_vertex(&self, pos: &Isometry<Real>, f: impl FnMut(Point<Real>));

    /// Calls `f` with the end-points of each segment of the core of this shape.
    fn for_each_edge(&self, pos: &Isometry<Real>, f: impl FnMut(Point<Real>, Point<Real>));

    /// Projects `pt` on the solid core of this shape.
    ///
    /// Returns `None` if the point is inside of the core. Only curved shapes need to implement
    /// this: it is used to generate candidate axes that no face or edge yields.
    fn project_point(&self, _pos: &Isometry<Real>, _pt: &Point<Real>) -> Option<Point<Real>> {
        None
    }
}
