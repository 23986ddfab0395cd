use std::sync::Arc;

use smallvec::SmallVec;

use crate::bounding_volume::Aabb;
use crate::math::{AngularInertia, Isometry, Point, Real, Rotation, Vector};
use crate::shape::{ConvexMesh, Cuboid, FeatureId, PolygonalFeature, PolygonalFeatureMap};

/// The vertices, face normals and edge directions of a [`ConvexMesh`] rotated by the current
/// orientation of the body owning it.
///
/// This is a cache owned by the [`ConvexPolyhedron`]: it is written by the owner of the shape
/// through [`ConvexPolyhedron::update_rotation`] and only read by the contact generators.
#[derive(Clone, Debug)]
pub struct RotatedConvexMesh {
    /// The rotation the data of this cache was computed with.
    pub rotation: Rotation<Real>,
    /// The rotated vertices.
    pub vertices: Vec<Point<Real>>,
    /// The rotated normals of the relevant faces.
    pub relevant_normals: Vec<Vector<Real>>,
    /// The rotated directions of the relevant edges.
    pub relevant_edges: Vec<Vector<Real>>,
}

impl RotatedConvexMesh {
    /// Computes the rotated data of `mesh`.
    pub fn new(mesh: &ConvexMesh, rotation: Rotation<Real>) -> Self {
        let mut result = RotatedConvexMesh {
            rotation,
            vertices: Vec::with_capacity(mesh.vertices().len()),
            relevant_normals: Vec::with_capacity(mesh.relevant_faces().len()),
            relevant_edges: Vec::with_capacity(mesh.relevant_edges().len()),
        };
        result.update(mesh, rotation);
        result
    }

    /// Recomputes the rotated data of `mesh` for a new rotation.
    pub fn update(&mut self, mesh: &ConvexMesh, rotation: Rotation<Real>) {
        self.rotation = rotation;
        self.vertices.clear();
        self.vertices
            .extend(mesh.vertices().iter().map(|pt| rotation * pt));
        self.relevant_normals.clear();
        self.relevant_normals.extend(
            mesh.relevant_faces()
                .iter()
                .map(|i| rotation * mesh.normals()[*i as usize].into_inner()),
        );
        self.relevant_edges.clear();
        self.relevant_edges.extend(
            mesh.relevant_edges()
                .iter()
                .map(|i| rotation * mesh.edge_dir(*i)),
        );
    }

    fn matches(&self, rotation: &Rotation<Real>) -> bool {
        let (a, b) = (self.rotation.coords, rotation.coords);
        (a - b).amax() <= 1.0e-6 || (a + b).amax() <= 1.0e-6
    }
}

/// A convex polyhedron: a shared [`ConvexMesh`] plus the rotated data of its owner.
#[derive(Clone, Debug)]
pub struct ConvexPolyhedron {
    mesh: Arc<ConvexMesh>,
    rotated: RotatedConvexMesh,
}

impl ConvexPolyhedron {
    /// Creates a convex polyhedron with an identity rotation cache.
    pub fn new(mesh: Arc<ConvexMesh>) -> Self {
        let rotated = RotatedConvexMesh::new(&mesh, Rotation::identity());
        ConvexPolyhedron { mesh, rotated }
    }

    /// The geometry of this polyhedron.
    #[inline]
    pub fn mesh(&self) -> &ConvexMesh {
        &self.mesh
    }

    /// The rotation cache of this polyhedron.
    #[inline]
    pub fn rotated(&self) -> &RotatedConvexMesh {
        &self.rotated
    }

    /// Recomputes the rotation cache. Must be called by the owner of this shape whenever the
    /// orientation of its body changes, before the shape is read by any contact query.
    pub fn update_rotation(&mut self, rotation: &Rotation<Real>) {
        self.rotated.update(&self.mesh, *rotation);
    }

    /// The local-space AABB of this polyhedron.
    pub fn local_aabb(&self) -> Aabb {
        self.mesh.local_aabb()
    }

    /// The volume of the local AABB of this polyhedron, used to distribute mass in compounds.
    pub fn volume(&self) -> Real {
        self.local_aabb().volume()
    }

    /// An approximation of the angular inertia of this polyhedron: the inertia of its local AABB.
    pub fn inertia(&self, mass: Real) -> AngularInertia<Real> {
        Cuboid::new(self.local_aabb().half_extents()).inertia(mass)
    }

    // Calls `f` with every vertex rotated by `pos.rotation`, using the cache if it matches.
    fn for_each_rotated_vertex(&self, pos: &Isometry<Real>, mut f: impl FnMut(u32, Point<Real>)) {
        if self.rotated.matches(&pos.rotation) {
            for (i, pt) in self.rotated.vertices.iter().enumerate() {
                f(i as u32, *pt)
            }
        } else {
            for (i, pt) in self.mesh.vertices().iter().enumerate() {
                f(i as u32, pos.rotation * pt)
            }
        }
    }
}

impl PolygonalFeatureMap for ConvexPolyhedron {
    fn support_projection(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Real {
        let mut best = -Real::MAX;
        self.for_each_rotated_vertex(pos, |_, pt| best = best.max(pt.coords.dot(dir)));
        best + pos.translation.vector.dot(dir)
    }

    fn support_feature(
        &self,
        pos: &Isometry<Real>,
        dir: &Vector<Real>,
        tolerance: Real,
        out: &mut PolygonalFeature,
    ) {
        let max_proj = self.support_projection(pos, dir) - pos.translation.vector.dot(dir);
        let mut candidates: SmallVec<[(Point<Real>, FeatureId); 8]> = SmallVec::new();
        self.for_each_rotated_vertex(pos, |i, pt| {
            if pt.coords.dot(dir) >= max_proj - tolerance {
                candidates.push((pt + pos.translation.vector, FeatureId::Vertex(i)));
            }
        });
        out.set_from_point_cloud(&candidates, dir, tolerance);

        for i in 0..out.num_edges() {
            let (a, b) = out.edge(i);
            let vid_a = out.vids[a].unwrap_vertex();
            let vid_b = out.vids[b].unwrap_vertex();
            if let Some(eid) = self.mesh.edge_id(vid_a, vid_b) {
                out.set_edge_id(i, FeatureId::Edge(eid));
            }
        }

        match out.len() {
            1 => {}
            2 => out.fid = out.eids[0],
            _ => {
                let local_dir = pos.rotation.inverse_transform_vector(dir);
                let best_face = self
                    .mesh
                    .normals()
                    .iter()
                    .map(|n| n.dot(&local_dir))
                    .enumerate()
                    .fold((0, -Real::MAX), |best, (i, dot)| {
                        if dot > best.1 {
                            (i, dot)
                        } else {
                            best
                        }
                    });
                out.fid = FeatureId::Face(best_face.0 as u32);
            }
        }
    }

    fn for_each_face_normal(&self, pos: &Isometry<Real>, mut f: impl FnMut(Vector<Real>)) {
        if self.rotated.matches(&pos.rotation) {
            self.rotated.relevant_normals.iter().for_each(|n| f(*n));
        } else {
            for i in self.mesh.relevant_faces() {
                f(pos.rotation * self.mesh.normals()[*i as usize].into_inner())
            }
        }
    }

    fn for_each_edge_dir(&self, pos: &Isometry<Real>, mut f: impl FnMut(Vector<Real>)) {
        if self.rotated.matches(&pos.rotation) {
            self.rotated.relevant_edges.iter().for_each(|e| f(*e));
        } else {
            for i in self.mesh.relevant_edges() {
                f(pos.rotation * self.mesh.edge_dir(*i))
            }
        }
    }

    fn for_each_vertex(&self, pos: &Isometry<Real>, mut f: impl FnMut(Point<Real>)) {
        self.for_each_rotated_vertex(pos, |_, pt| f(pt + pos.translation.vector));
    }

    fn for_each_edge(&self, pos: &Isometry<Real>, mut f: impl FnMut(Point<Real>, Point<Real>)) {
        for [a, b] in self.mesh.edges() {
            f(
                pos * self.mesh.vertices()[*a as usize],
                pos * self.mesh.vertices()[*b as usize],
            )
        }
    }
}
