//! Cylinder shape.

use crate::bounding_volume::Aabb;
use crate::math::{consts, AngularInertia, Isometry, Point, Real, Vector};
use crate::shape::{FeatureId, PolygonalFeature, PolygonalFeatureMap};
use crate::utils::CYLINDER_DISC_VERTICES;

/// Cylinder shape with its principal axis aligned with the `y` axis.
///
/// Feature ids: `Face(0)` and `Face(1)` are the top and bottom caps, `Face(2)` the lateral
/// surface, `Edge(0)` and `Edge(1)` the top and bottom rims.
///
/// Caps are approximated by regular polygons fixed in the local frame of the cylinder. The
/// `k`-th corner of the top cap is `Vertex(k)` and the side from it to the next corner is
/// `Edge(2 + k)`. Bottom cap ids follow, offset by the number of corners of a cap.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The half-height of the cylinder.
    pub half_height: Real,
    /// The radius of the cylinder.
    pub radius: Real,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cylinder along the `y` axis.
    /// * `radius` - the length of the cylinder along all other axis.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        assert!(half_height.is_sign_positive() && radius.is_sign_positive());

        Cylinder {
            half_height,
            radius,
        }
    }

    /// The local-space AABB of this cylinder.
    pub fn local_aabb(&self) -> Aabb {
        let he = Vector::new(self.radius, self.half_height, self.radius);
        Aabb::from_half_extents(Point::origin(), he)
    }

    /// The volume of this cylinder.
    pub fn volume(&self) -> Real {
        consts::PI * self.radius * self.radius * 2.0 * self.half_height
    }

    /// The angular inertia of a solid cylinder of the given mass.
    pub fn inertia(&self, mass: Real) -> AngularInertia<Real> {
        let r2 = self.radius * self.radius;
        let h = 2.0 * self.half_height;
        let iy = mass * r2 / 2.0;
        let ixz = mass * (3.0 * r2 + h * h) / 12.0;
        AngularInertia::from_diagonal(&Vector::new(ixz, iy, ixz))
    }
}

impl PolygonalFeatureMap for Cylinder {
    fn is_curved(&self) -> bool {
        true
    }

    fn support_projection(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Real {
        let axis = pos.rotation * Vector::y();
        let dot = axis.dot(dir);
        let radial = (1.0 - dot * dot).max(0.0).sqrt();
        pos.translation.vector.dot(dir) + self.half_height * dot.abs() + self.radius * radial
    }

    fn support_feature(
        &self,
        pos: &Isometry<Real>,
        dir: &Vector<Real>,
        tolerance: Real,
        out: &mut PolygonalFeature,
    ) {
        out.clear();

        let axis = pos.rotation * Vector::y();
        let dot = axis.dot(dir);
        let (sign, cap_id) = if dot >= 0.0 { (1.0, 0) } else { (-1.0, 1) };
        let cap_center = Point::from(pos.translation.vector + axis * (self.half_height * sign));
        let radial = dir - axis * dot;
        let radial_len = radial.norm();

        // The whole cap projects within the tolerance: use a polygonal approximation of the disc.
        if 2.0 * self.radius * radial_len <= tolerance {
            let first_id = cap_id * CYLINDER_DISC_VERTICES as u32;

            for k in 0..CYLINDER_DISC_VERTICES {
                let angle = consts::TAU * k as Real / CYLINDER_DISC_VERTICES as Real;
                let local = Point::new(
                    self.radius * angle.cos(),
                    self.half_height * sign,
                    -self.radius * angle.sin() * sign,
                );
                out.push(pos * local, FeatureId::Vertex(first_id + k as u32));
                out.set_edge_id(k, FeatureId::Edge(2 + first_id + k as u32));
            }
            out.fid = FeatureId::Face(cap_id);
            return;
        }

        let radial_dir = radial / radial_len;
        let rim_offset = radial_dir * self.radius;

        if 2.0 * self.half_height * dot.abs() <= tolerance {
            let center = pos.translation.vector;
            let top = Point::from(center + axis * self.half_height + rim_offset);
            let bottom = Point::from(center - axis * self.half_height + rim_offset);
            out.push(top, FeatureId::Edge(0));
            out.push(bottom, FeatureId::Edge(1));
            out.set_edge_id(0, FeatureId::Face(2));
            out.set_edge_id(1, FeatureId::Face(2));
            out.fid = FeatureId::Face(2);
        } else {
            out.push(cap_center + rim_offset, FeatureId::Edge(cap_id));
            out.fid = FeatureId::Edge(cap_id);
        }
    }

    fn for_each_face_normal(&self, pos: &Isometry<Real>, mut f: impl FnMut(Vector<Real>)) {
        let axis = pos.rotation * Vector::y();
        f(axis);
        f(-axis);
    }

    fn for_each_edge_dir(&self, pos: &Isometry<Real>, mut f: impl FnMut(Vector<Real>)) {
        f(pos.rotation * Vector::y())
    }

    fn for_each_vertex(&self, _: &Isometry<Real>, _: impl FnMut(Point<Real>)) {}

    // The principal axis, used to derive radial directions.
    fn for_each_edge(&self, pos: &Isometry<Real>, mut f: impl FnMut(Point<Real>, Point<Real>)) {
        let a = Point::new(0.0, self.half_height, 0.0);
        let b = Point::new(0.0, -self.half_height, 0.0);
        f(pos * a, pos * b)
    }

    fn project_point(&self, pos: &Isometry<Real>, pt: &Point<Real>) -> Option<Point<Real>> {
        let local = pos.inverse_transform_point(pt);
        let planar = Vector::new(local.x, 0.0, local.z);
        let planar_len = planar.norm();

        if local.y.abs() <= self.half_height && planar_len <= self.radius {
            return None;
        }

        let y = local.y.clamp(-self.half_height, self.half_height);
        let planar = if planar_len > self.radius {
            planar * (self.radius / planar_len)
        } else {
            planar
        };

        Some(pos * Point::new(planar.x, y, planar.z))
    }
}
