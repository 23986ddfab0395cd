use crate::bounding_volume::Aabb;
use crate::math::{consts, AngularInertia, Isometry, Point, Real, Vector};
use crate::shape::{FeatureId, PolygonalFeature, PolygonalFeatureMap};

/// A capsule shape, i.e., a segment inflated by a radius.
///
/// The segment is aligned with the local `y` axis and centered at the origin. Its top
/// end-point has the vertex id 0, its bottom end-point the vertex id 1.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// Half the length of the segment of this capsule.
    pub half_height: Real,
    /// The radius of this capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule aligned with the `y` axis.
    #[inline]
    pub fn new(half_height: Real, radius: Real) -> Self {
        Capsule {
            half_height,
            radius,
        }
    }

    /// The end-points of the segment of this capsule, in local-space.
    #[inline]
    pub fn segment(&self) -> [Point<Real>; 2] {
        [
            Point::new(0.0, self.half_height, 0.0),
            Point::new(0.0, -self.half_height, 0.0),
        ]
    }

    /// The local-space AABB of this capsule.
    pub fn local_aabb(&self) -> Aabb {
        let he = Vector::new(self.radius, self.half_height + self.radius, self.radius);
        Aabb::from_half_extents(Point::origin(), he)
    }

    /// The volume of this capsule.
    pub fn volume(&self) -> Real {
        let r2 = self.radius * self.radius;
        consts::PI * r2 * (2.0 * self.half_height + 4.0 / 3.0 * self.radius)
    }

    /// The angular inertia of a solid capsule of the given mass.
    ///
    /// The mass is split between the cylindrical part and the two hemispheres proportionally to
    /// their volumes.
    pub fn inertia(&self, mass: Real) -> AngularInertia<Real> {
        let r = self.radius;
        let h = 2.0 * self.half_height;
        let cyl_volume = consts::PI * r * r * h;
        let sphere_volume = 4.0 / 3.0 * consts::PI * r * r * r;
        let total = cyl_volume + sphere_volume;
        let cyl_mass = mass * cyl_volume / total;
        let sphere_mass = mass * sphere_volume / total;

        let iy = cyl_mass * r * r / 2.0 + sphere_mass * 2.0 / 5.0 * r * r;
        let ixz = cyl_mass * (3.0 * r * r + h * h) / 12.0
            + sphere_mass * (2.0 / 5.0 * r * r + h * h / 4.0 + 3.0 * h * r / 8.0);

        AngularInertia::from_diagonal(&Vector::new(ixz, iy, ixz))
    }
}

impl PolygonalFeatureMap for Capsule {
    fn margin(&self) -> Real {
        self.radius
    }

    fn support_projection(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Real {
        let axis = pos.rotation * Vector::y();
        pos.translation.vector.dot(dir) + self.half_height * axis.dot(dir).abs()
    }

    fn support_feature(
        &self,
        pos: &Isometry<Real>,
        dir: &Vector<Real>,
        tolerance: Real,
        out: &mut PolygonalFeature,
    ) {
        out.clear();
        let [a, b] = self.segment().map(|pt| pos * pt);
        let proj_a = a.coords.dot(dir);
        let proj_b = b.coords.dot(dir);

        if (proj_a - proj_b).abs() <= tolerance {
            out.push(a, FeatureId::Vertex(0));
            out.push(b, FeatureId::Vertex(1));
            out.set_edge_id(0, FeatureId::Edge(0));
            out.set_edge_id(1, FeatureId::Edge(0));
            out.fid = FeatureId::Edge(0);
        } else if proj_a > proj_b {
            out.push(a, FeatureId::Vertex(0));
            out.fid = FeatureId::Vertex(0);
        } else {
            out.push(b, FeatureId::Vertex(1));
            out.fid = FeatureId::Vertex(1);
        }
    }

    fn for_each_face_normal(&self, _: &Isometry<Real>, _: impl FnMut(Vector<Real>)) {}

    fn for_each_edge_dir(&self, pos: &Isometry<Real>, mut f: impl FnMut(Vector<Real>)) {
        f(pos.rotation * Vector::y())
    }

    fn for_each_vertex(&self, pos: &Isometry<Real>, mut f: impl FnMut(Point<Real>)) {
        for pt in self.segment() {
            f(pos * pt)
        }
    }

    fn for_each_edge(&self, pos: &Isometry<Real>, mut f: impl FnMut(Point<Real>, Point<Real>)) {
        let [a, b] = self.segment();
        f(pos * a, pos * b)
    }
}
