//! Support mapping based Cuboid shape.

use smallvec::SmallVec;

use crate::bounding_volume::Aabb;
use crate::math::{AngularInertia, Isometry, Point, Real, Vector, DIM};
use crate::shape::{FeatureId, PolygonalFeature, PolygonalFeatureMap};

/// Shape of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

// NOTE: format of the cuboid feature id:
//
// FeatureId::Vertex(id): the i-th bit of `id` is set to 1 iff. the i-th component of the vertex is negative.
// FeatureId::Edge(id): the part `id & 0b11` contains a number in [0,2] to indicate the axis (x, y, z).
//                      the part `id >> 2` follow the same rule as the vertex id.
// FeatureId::Face(id): if `id` lies in [0, 2] indicates the axis (x, y, z) corresponding to the face normal.
//                      If `id` is greater than 2, then the negative axis (-x, -y, -z) is given by `id - 3`.
impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The local-space AABB of this cuboid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), self.half_extents)
    }

    /// The volume of this cuboid.
    #[inline]
    pub fn volume(&self) -> Real {
        8.0 * self.half_extents.x * self.half_extents.y * self.half_extents.z
    }

    /// The angular inertia of a solid cuboid of the given mass.
    pub fn inertia(&self, mass: Real) -> AngularInertia<Real> {
        let he2 = self.half_extents.component_mul(&self.half_extents);
        let k = mass / 3.0;
        AngularInertia::from_diagonal(&Vector::new(
            k * (he2.y + he2.z),
            k * (he2.x + he2.z),
            k * (he2.x + he2.y),
        ))
    }

    /// The local-space vertex identified by `vid`.
    pub fn vertex(&self, vid: u32) -> Point<Real> {
        let mut res = self.half_extents;

        for i in 0..DIM {
            if vid & (1 << i) != 0 {
                res[i] = -res[i]
            }
        }

        Point::from(res)
    }

    /// The id of the edge joining the vertices `vid1` and `vid2`, if they are adjacent.
    pub fn edge_id(vid1: u32, vid2: u32) -> Option<u32> {
        let diff = vid1 ^ vid2;

        if diff.count_ones() != 1 {
            return None;
        }

        let axis = diff.trailing_zeros();
        Some(axis | ((vid1 & !diff) << 2))
    }

    /// The id of the face containing all the given vertices, if any.
    pub fn face_id(vids: &[u32]) -> Option<u32> {
        let first = *vids.first()?;

        (0..DIM as u32).find_map(|axis| {
            let bit = first & (1 << axis);
            vids.iter()
                .all(|vid| vid & (1 << axis) == bit)
                .then_some(if bit == 0 { axis } else { axis + 3 })
        })
    }
}

impl PolygonalFeatureMap for Cuboid {
    fn support_projection(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Real {
        let local_dir = pos.inverse_transform_vector(dir);
        pos.translation.vector.dot(dir) + self.half_extents.dot(&local_dir.abs())
    }

    fn support_feature(
        &self,
        pos: &Isometry<Real>,
        dir: &Vector<Real>,
        tolerance: Real,
        out: &mut PolygonalFeature,
    ) {
        let candidates: SmallVec<[(Point<Real>, FeatureId); 8]> = (0..8)
            .map(|vid| (pos * self.vertex(vid), FeatureId::Vertex(vid)))
            .collect();
        out.set_from_point_cloud(&candidates, dir, tolerance);

        let vids: SmallVec<[u32; 8]> = out.vids.iter().map(|vid| vid.unwrap_vertex()).collect();

        for i in 0..out.num_edges() {
            let (a, b) = out.edge(i);
            if let Some(eid) = Self::edge_id(vids[a], vids[b]) {
                out.set_edge_id(i, FeatureId::Edge(eid));
            }
        }

        match vids.len() {
            1 => {}
            2 => out.fid = out.eids[0],
            _ => out.fid = Self::face_id(&vids).map_or(FeatureId::Unknown, FeatureId::Face),
        }
    }

    fn for_each_face_normal(&self, pos: &Isometry<Real>, mut f: impl FnMut(Vector<Real>)) {
        for i in 0..DIM {
            let axis = pos.rotation * Vector::ith(i, 1.0);
            f(axis);
            f(-axis);
        }
    }

    fn for_each_edge_dir(&self, pos: &Isometry<Real>, mut f: impl FnMut(Vector<Real>)) {
        for i in 0..DIM {
            f(pos.rotation * Vector::ith(i, 1.0))
        }
    }

    fn for_each_vertex(&self, pos: &Isometry<Real>, mut f: impl FnMut(Point<Real>)) {
        for vid in 0..8 {
            f(pos * self.vertex(vid))
        }
    }

    fn for_each_edge(&self, pos: &Isometry<Real>, mut f: impl FnMut(Point<Real>, Point<Real>)) {
        for axis in 0..DIM as u32 {
            for vid in 0..8u32 {
                if vid & (1 << axis) == 0 {
                    f(pos * self.vertex(vid), pos * self.vertex(vid | (1 << axis)))
                }
            }
        }
    }
}
