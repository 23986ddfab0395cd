use crate::bounding_volume::Aabb;
use crate::math::{consts, AngularInertia, Isometry, Point, Real, Vector};
use crate::shape::{FeatureId, PolygonalFeature, PolygonalFeatureMap};

/// A sphere shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    /// The radius of the sphere.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Sphere {
        Sphere { radius }
    }

    /// The local-space AABB of this sphere.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), Vector::repeat(self.radius))
    }

    /// The volume of this sphere.
    #[inline]
    pub fn volume(&self) -> Real {
        4.0 / 3.0 * consts::PI * self.radius * self.radius * self.radius
    }

    /// The angular inertia of a solid sphere of the given mass.
    pub fn inertia(&self, mass: Real) -> AngularInertia<Real> {
        let i = 2.0 / 5.0 * mass * self.radius * self.radius;
        AngularInertia::from_diagonal_element(i)
    }
}

impl PolygonalFeatureMap for Sphere {
    fn margin(&self) -> Real {
        self.radius
    }

    fn support_projection(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Real {
        pos.translation.vector.dot(dir)
    }

    fn support_feature(
        &self,
        pos: &Isometry<Real>,
        _: &Vector<Real>,
        _: Real,
        out: &mut PolygonalFeature,
    ) {
        out.clear();
        out.push(pos.translation.vector.into(), FeatureId::Face(0));
        out.fid = FeatureId::Face(0);
    }

    fn for_each_face_normal(&self, _: &Isometry<Real>, _: impl FnMut(Vector<Real>)) {}

    fn for_each_edge_dir(&self, _: &Isometry<Real>, _: impl FnMut(Vector<Real>)) {}

    fn for_each_vertex(&self, pos: &Isometry<Real>, mut f: impl FnMut(Point<Real>)) {
        f(pos.translation.vector.into())
    }

    fn for_each_edge(&self, _: &Isometry<Real>, _: impl FnMut(Point<Real>, Point<Real>)) {}
}
