//! Static triangle meshes and their adjacency information.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, UnitVector, Vector};
use crate::partitioning::AabbTree;
use crate::shape::{FeatureId, NormalCone, Triangle, TriangleNormalCones};
use crate::utils::SortedPair;

/// Marker stored in [`TriMesh::edge_triangles`] for the missing neighbor of a boundary edge.
pub const NO_TRIANGLE: u32 = u32::MAX;

// Two adjacent faces with normals closer than this are coplanar.
const FLAT_EDGE_COS: Real = 1.0 - 1.0e-6;

/// Error returned when building an invalid [`TriMesh`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshError {
    /// A triangle mesh must contain at least one triangle.
    #[error("a triangle mesh must contain at least one triangle.")]
    Empty,
    /// A triangle references a vertex that doesn’t exist.
    #[error("the triangle {0} references an out-of-bounds vertex.")]
    InvalidIndex(usize),
    /// A triangle has a zero area.
    #[error("the triangle {0} is degenerate.")]
    DegenerateTriangle(usize),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EdgeKind {
    Boundary,
    Flat,
    Concave,
    Convex,
}

/// A static triangle mesh.
///
/// Triangles are counter-clockwise when seen from the side their normal points to, and only
/// that side generates contacts. At construction, the mesh computes its unique edges, the
/// triangles adjacent to each edge, and the normal cones bounding the contact normals each
/// feature of each triangle may produce.
#[derive(Clone, Debug)]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    normals: Vec<UnitVector<Real>>,
    edges: Vec<[u32; 2]>,
    edge_triangles: Vec<[u32; 2]>,
    triangle_edges: Vec<[u32; 3]>,
    normal_cones: Vec<TriangleNormalCones>,
    tree: AabbTree,
    aabb: Aabb,
}

impl TriMesh {
    /// Builds a triangle mesh and its adjacency information.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Result<Self, TriMeshError> {
        if indices.is_empty() {
            return Err(TriMeshError::Empty);
        }

        let mut normals = Vec::with_capacity(indices.len());
        for (i, idx) in indices.iter().enumerate() {
            if idx.iter().any(|vid| *vid as usize >= vertices.len()) {
                return Err(TriMeshError::InvalidIndex(i));
            }

            let tri = Triangle::new(
                vertices[idx[0] as usize],
                vertices[idx[1] as usize],
                vertices[idx[2] as usize],
            );
            let normal = tri
                .normal()
                .ok_or(TriMeshError::DegenerateTriangle(i))?;
            normals.push(UnitVector::new_unchecked(normal));
        }

        let mut edges = vec![];
        let mut edge_triangles: Vec<[u32; 2]> = vec![];
        let mut triangle_edges = Vec::with_capacity(indices.len());
        let mut edge_ids: HashMap<SortedPair<u32>, u32> = HashMap::new();

        for (t, idx) in indices.iter().enumerate() {
            let mut tri_edges = [0; 3];

            for k in 0..3 {
                let (a, b) = (idx[k], idx[(k + 1) % 3]);
                let eid = *edge_ids.entry(SortedPair::new(a, b)).or_insert_with(|| {
                    edges.push([a, b]);
                    edge_triangles.push([NO_TRIANGLE; 2]);
                    edges.len() as u32 - 1
                });

                let adjacent = &mut edge_triangles[eid as usize];
                if adjacent[0] == NO_TRIANGLE {
                    adjacent[0] = t as u32;
                } else if adjacent[1] == NO_TRIANGLE {
                    adjacent[1] = t as u32;
                } else {
                    log::debug!("edge {:?} is shared by more than two triangles", (a, b));
                }

                tri_edges[k] = eid;
            }

            triangle_edges.push(tri_edges);
        }

        let tree = AabbTree::new(indices.iter().map(|idx| {
            Aabb::from_points(idx.iter().map(|vid| &vertices[*vid as usize]))
        }));
        let aabb = Aabb::from_points(&vertices);

        let mut mesh = TriMesh {
            vertices,
            indices,
            normals,
            edges,
            edge_triangles,
            triangle_edges,
            normal_cones: vec![],
            tree,
            aabb,
        };
        mesh.normal_cones = mesh.compute_normal_cones();
        Ok(mesh)
    }

    fn edge_kind(&self, edge: u32) -> EdgeKind {
        let [t1, t2] = self.edge_triangles[edge as usize];
        if t1 == NO_TRIANGLE || t2 == NO_TRIANGLE {
            return EdgeKind::Boundary;
        }

        let n1 = self.normals[t1 as usize];
        let n2 = self.normals[t2 as usize];
        if n1.dot(n2.as_ref()) >= FLAT_EDGE_COS {
            return EdgeKind::Flat;
        }

        // The vertex of the second triangle opposite to the edge is behind the plane of the
        // first one iff the edge is convex.
        let [a, b] = self.edges[edge as usize];
        let Some(opposite) = self.indices[t2 as usize]
            .iter()
            .find(|vid| **vid != a && **vid != b)
        else {
            return EdgeKind::Boundary;
        };
        let v0 = self.vertices[a as usize];
        let side = (self.vertices[*opposite as usize] - v0).dot(n1.as_ref());

        if side < 0.0 {
            EdgeKind::Convex
        } else {
            EdgeKind::Concave
        }
    }

    fn compute_normal_cones(&self) -> Vec<TriangleNormalCones> {
        let edge_kinds: Vec<_> = (0..self.edges.len() as u32)
            .map(|e| self.edge_kind(e))
            .collect();

        let mut vertex_edges: Vec<SmallVec<[u32; 8]>> = vec![SmallVec::new(); self.vertices.len()];
        for (e, [a, b]) in self.edges.iter().enumerate() {
            vertex_edges[*a as usize].push(e as u32);
            vertex_edges[*b as usize].push(e as u32);
        }

        let mut vertex_triangles: Vec<SmallVec<[u32; 8]>> =
            vec![SmallVec::new(); self.vertices.len()];
        for (t, idx) in self.indices.iter().enumerate() {
            for vid in idx {
                vertex_triangles[*vid as usize].push(t as u32);
            }
        }

        // `None` means the vertex cone is the normal of the triangle it is looked at from.
        let vertex_cones: Vec<Option<NormalCone>> = (0..self.vertices.len())
            .map(|v| {
                let kinds = vertex_edges[v].iter().map(|e| edge_kinds[*e as usize]);

                if kinds.clone().any(|kind| kind == EdgeKind::Boundary) {
                    Some(NormalCone::free(Vector::y_axis()))
                } else if kinds.clone().any(|kind| kind == EdgeKind::Concave) {
                    None
                } else {
                    let incident = vertex_triangles[v]
                        .iter()
                        .map(|t| self.normals[*t as usize].into_inner());
                    let sum: Vector<Real> = incident.clone().sum();
                    let axis = UnitVector::try_new(sum, Real::EPSILON)?;
                    Some(NormalCone::enclosing(axis, incident))
                }
            })
            .collect();

        self.indices
            .iter()
            .enumerate()
            .map(|(t, idx)| {
                let normal = self.normals[t];
                let face = NormalCone::fixed(normal);

                let edges = self.triangle_edges[t].map(|e| match edge_kinds[e as usize] {
                    EdgeKind::Boundary => NormalCone::free(normal),
                    EdgeKind::Flat | EdgeKind::Concave => face,
                    EdgeKind::Convex => {
                        let [t1, t2] = self.edge_triangles[e as usize];
                        let other = if t1 as usize == t { t2 } else { t1 };
                        let bisector = normal.into_inner() + *self.normals[other as usize];

                        match UnitVector::try_new(bisector, 1.0e-6) {
                            Some(axis) => NormalCone {
                                axis,
                                cos_half_angle: normal.dot(axis.as_ref()),
                            },
                            // Two faces folded onto each other.
                            None => NormalCone::free(normal),
                        }
                    }
                });

                let vertices = (*idx).map(|vid| vertex_cones[vid as usize].unwrap_or(face));

                TriangleNormalCones {
                    face,
                    edges,
                    vertices,
                }
            })
            .collect()
    }

    /// The vertices of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The vertex indices of each triangle of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// The normal of the `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle_normal(&self, i: u32) -> UnitVector<Real> {
        self.normals[i as usize]
    }

    /// The unique edges of this mesh.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// The triangles adjacent to each edge, [`NO_TRIANGLE`] where an edge is on the boundary.
    #[inline]
    pub fn edge_triangles(&self) -> &[[u32; 2]] {
        &self.edge_triangles
    }

    /// The edge ids of the three edges of each triangle.
    ///
    /// The `k`-th edge of a triangle joins its vertices `k` and `k + 1`.
    #[inline]
    pub fn triangle_edges(&self) -> &[[u32; 3]] {
        &self.triangle_edges
    }

    /// The normal cones of the features of the `i`-th triangle, in the local frame of the mesh.
    #[inline]
    pub fn normal_cones(&self, i: u32) -> &TriangleNormalCones {
        &self.normal_cones[i as usize]
    }

    /// Converts the id of a feature of the `i`-th triangle, as returned by the
    /// [`Triangle`] shape, to the id of the same feature of this mesh.
    ///
    /// Vertices and edges map to the mesh-wide vertex and edge indices, the face to the
    /// triangle index. These ids are stable as long as the mesh isn’t modified.
    pub fn global_feature_id(&self, i: u32, local: FeatureId) -> FeatureId {
        match local {
            FeatureId::Vertex(k) => FeatureId::Vertex(self.indices[i as usize][k as usize]),
            FeatureId::Edge(k) => FeatureId::Edge(self.triangle_edges[i as usize][k as usize]),
            FeatureId::Face(_) => FeatureId::Face(i),
            FeatureId::Unknown => FeatureId::Unknown,
        }
    }

    /// The AABB of this mesh in its local frame.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.aabb
    }

    /// Calls `f` with the index of every triangle with an AABB intersecting `aabb`, in
    /// increasing order.
    pub fn visit_triangles(&self, aabb: &Aabb, f: impl FnMut(u32)) {
        if self.aabb.intersects(aabb) {
            self.tree.intersecting(aabb, f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two triangles sharing the edge (1, 2), folded along it by `height` at the vertex 3.
    fn folded(height: Real) -> TriMesh {
        let vertices = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, -1.0),
            Point::new(1.0, height, -1.0),
        ];
        TriMesh::new(vertices, vec![[0, 1, 2], [2, 1, 3]]).unwrap()
    }

    fn shared_edge_cone(mesh: &TriMesh) -> NormalCone {
        let k = mesh.triangle_edges()[0]
            .iter()
            .position(|e| mesh.edge_triangles()[*e as usize][1] != NO_TRIANGLE)
            .unwrap();
        mesh.normal_cones(0).edges[k]
    }

    #[test]
    fn mesh_adjacency() {
        let mesh = folded(0.0);
        assert_eq!(mesh.num_triangles(), 2);
        assert_eq!(mesh.edges().len(), 5);

        let shared = mesh.triangle_edges()[0][1];
        assert_eq!(mesh.triangle_edges()[1][0], shared);
        assert_eq!(mesh.edge_triangles()[shared as usize], [0, 1]);
        assert_eq!(mesh.global_feature_id(1, FeatureId::Edge(0)), FeatureId::Edge(shared));
        assert_eq!(mesh.global_feature_id(1, FeatureId::Vertex(2)), FeatureId::Vertex(3));
        assert_eq!(mesh.global_feature_id(1, FeatureId::Face(0)), FeatureId::Face(1));
    }

    #[test]
    fn edge_cones_follow_the_edge_convexity() {
        let flat = folded(0.0);
        assert_eq!(shared_edge_cone(&flat), NormalCone::fixed(Vector::y_axis()));
        assert_eq!(flat.normal_cones(0).edges[0].cos_half_angle, -1.0);

        let concave = folded(0.5);
        assert_eq!(shared_edge_cone(&concave), NormalCone::fixed(Vector::y_axis()));

        let convex = folded(-0.5);
        let cone = shared_edge_cone(&convex);
        assert!(cone.cos_half_angle < 1.0 && cone.cos_half_angle > 0.0);
        let n2 = convex.triangle_normal(1).into_inner();
        assert_relative_eq!(cone.project(&Vector::y()), Vector::y(), epsilon = 1.0e-5);
        assert_relative_eq!(cone.project(&n2), n2, epsilon = 1.0e-5);
    }

    #[test]
    fn invalid_meshes_are_rejected() {
        let vertices = vec![Point::origin(), Point::new(1.0, 0.0, 0.0)];
        assert_eq!(TriMesh::new(vertices.clone(), vec![]).err(), Some(TriMeshError::Empty));
        assert_eq!(
            TriMesh::new(vertices.clone(), vec![[0, 1, 2]]).err(),
            Some(TriMeshError::InvalidIndex(0))
        );
        assert_eq!(
            TriMesh::new(vertices, vec![[0, 1, 1]]).err(),
            Some(TriMeshError::DegenerateTriangle(0))
        );
    }

    #[test]
    fn visit_triangles_in_aabb() {
        let mesh = folded(0.5);
        let mut hits = vec![];
        mesh.visit_triangles(
            &Aabb::new(Point::new(0.9, 0.2, -1.1), Point::new(1.1, 0.3, -0.9)),
            |t| hits.push(t),
        );
        assert_eq!(hits, vec![1]);

        hits.clear();
        mesh.visit_triangles(
            &Aabb::new(Point::new(-0.1, -0.1, -0.1), Point::new(0.1, 0.1, 0.1)),
            |t| hits.push(t),
        );
        assert_eq!(hits, vec![0, 1]);
    }
}
