//! Geometry and topology of convex polyhedra.

use std::collections::HashMap;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector, Vector};
use crate::utils::SortedPair;

// Two unit vectors with a dot product above this are considered parallel.
const PARALLEL_COS: Real = 1.0 - 1.0e-5;

/// Error returned when building an invalid [`ConvexMesh`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexMeshError {
    /// A convex mesh must enclose a volume.
    #[error("a convex mesh needs at least four vertices and four faces.")]
    NotEnoughVertices,
    /// A face references a vertex that doesn’t exist.
    #[error("the face {0} references an out-of-bounds vertex.")]
    InvalidIndex(usize),
    /// A face has less than three vertices, or only collinear ones.
    #[error("the face {0} is degenerate.")]
    DegenerateFace(usize),
    /// The vertices of a face don’t lie on a common plane.
    #[error("the vertices of the face {0} are not coplanar.")]
    NonPlanarFace(usize),
    /// A vertex lies in front of the plane of a face.
    #[error("the vertex {vertex} lies in front of the face {face}.")]
    NonConvex {
        /// The face violating convexity.
        face: usize,
        /// The vertex in front of the face.
        vertex: usize,
    },
}

/// The geometry and topology of a convex polyhedron, in its local frame.
///
/// Faces are rings of vertex indices, counter-clockwise when seen from the outside. The
/// contact generators rely on the precomputed face normals, unique edges, and the
/// "relevant" subsets of them where parallel normals and edge directions appear only once.
#[derive(Clone, Debug)]
pub struct ConvexMesh {
    vertices: Vec<Point<Real>>,
    faces: Vec<Vec<u32>>,
    normals: Vec<UnitVector<Real>>,
    edges: Vec<[u32; 2]>,
    edge_ids: HashMap<SortedPair<u32>, u32>,
    relevant_faces: Vec<u32>,
    relevant_edges: Vec<u32>,
}

impl ConvexMesh {
    /// Builds and validates a convex mesh from its vertices and faces.
    pub fn new(vertices: Vec<Point<Real>>, faces: Vec<Vec<u32>>) -> Result<Self, ConvexMeshError> {
        if vertices.len() < 4 || faces.len() < 4 {
            return Err(ConvexMeshError::NotEnoughVertices);
        }

        for (i, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(ConvexMeshError::DegenerateFace(i));
            }

            if face.iter().any(|vid| *vid as usize >= vertices.len()) {
                return Err(ConvexMeshError::InvalidIndex(i));
            }
        }

        let normals = Self::compute_normals(&vertices, &faces)?;
        let (edges, edge_ids) = Self::compute_edges(&faces);

        let mut relevant_faces: Vec<u32> = vec![];
        for (i, normal) in normals.iter().enumerate() {
            if relevant_faces
                .iter()
                .all(|j| normals[*j as usize].dot(normal.as_ref()) < PARALLEL_COS)
            {
                relevant_faces.push(i as u32);
            }
        }

        let edge_dir = |e: &[u32; 2]| {
            (vertices[e[1] as usize] - vertices[e[0] as usize]).normalize()
        };
        let mut relevant_edges: Vec<u32> = vec![];
        for (i, edge) in edges.iter().enumerate() {
            let dir = edge_dir(edge);
            if relevant_edges
                .iter()
                .all(|j| edge_dir(&edges[*j as usize]).dot(&dir).abs() < PARALLEL_COS)
            {
                relevant_edges.push(i as u32);
            }
        }

        let mesh = ConvexMesh {
            vertices,
            faces,
            normals,
            edges,
            edge_ids,
            relevant_faces,
            relevant_edges,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// A convex mesh with the shape of a box with the given half-extents.
    pub fn cuboid(half_extents: &Vector<Real>) -> Result<Self, ConvexMeshError> {
        let vertices = Aabb::from_half_extents(Point::origin(), *half_extents)
            .vertices()
            .to_vec();
        let faces = vec![
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![3, 7, 6, 2],
            vec![0, 4, 7, 3],
            vec![1, 2, 6, 5],
        ];
        Self::new(vertices, faces)
    }

    // The normal of each face is given by its first edge and the next one that is not
    // collinear with it.
    fn compute_normals(
        vertices: &[Point<Real>],
        faces: &[Vec<u32>],
    ) -> Result<Vec<UnitVector<Real>>, ConvexMeshError> {
        faces
            .iter()
            .enumerate()
            .map(|(i, face)| {
                let v0 = vertices[face[0] as usize];
                let v1 = vertices[face[1] as usize];

                (1..face.len())
                    .find_map(|j| {
                        let v2 = vertices[face[j] as usize];
                        let v3 = vertices[face[(j + 1) % face.len()] as usize];
                        UnitVector::try_new((v1 - v0).cross(&(v3 - v2)), Real::EPSILON)
                    })
                    .ok_or(ConvexMeshError::DegenerateFace(i))
            })
            .collect()
    }

    fn compute_edges(faces: &[Vec<u32>]) -> (Vec<[u32; 2]>, HashMap<SortedPair<u32>, u32>) {
        let mut edges = vec![];
        let mut edge_ids = HashMap::new();

        for face in faces {
            for j in 0..face.len() {
                let i0 = face[j];
                let i1 = face[(j + 1) % face.len()];
                let _ = edge_ids.entry(SortedPair::new(i0, i1)).or_insert_with(|| {
                    edges.push([i0, i1]);
                    edges.len() as u32 - 1
                });
            }
        }

        (edges, edge_ids)
    }

    /// Checks that every face is planar and that every vertex lies behind every face.
    pub fn validate(&self) -> Result<(), ConvexMeshError> {
        let aabb = Aabb::from_points(&self.vertices);
        let tolerance = 1.0e-4 * (1.0 + aabb.extents().norm());

        for (i, face) in self.faces.iter().enumerate() {
            let normal: &Vector<Real> = &self.normals[i];
            let v0 = self.vertices[face[0] as usize];

            if face
                .iter()
                .any(|vid| (self.vertices[*vid as usize] - v0).dot(normal).abs() > tolerance)
            {
                return Err(ConvexMeshError::NonPlanarFace(i));
            }

            if let Some(vertex) = self
                .vertices
                .iter()
                .position(|vj| (vj - v0).dot(normal) > tolerance)
            {
                return Err(ConvexMeshError::NonConvex { face: i, vertex });
            }
        }

        Ok(())
    }

    /// The vertices of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The faces of this mesh, as rings of vertex indices.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// The outward normal of each face.
    #[inline]
    pub fn normals(&self) -> &[UnitVector<Real>] {
        &self.normals
    }

    /// The unique undirected edges of this mesh.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// The index of the edge joining two vertices, if they are adjacent.
    #[inline]
    pub fn edge_id(&self, vid1: u32, vid2: u32) -> Option<u32> {
        self.edge_ids.get(&SortedPair::new(vid1, vid2)).copied()
    }

    /// The faces with pairwise distinct normals.
    #[inline]
    pub fn relevant_faces(&self) -> &[u32] {
        &self.relevant_faces
    }

    /// The edges with pairwise non-parallel directions.
    #[inline]
    pub fn relevant_edges(&self) -> &[u32] {
        &self.relevant_edges
    }

    /// The direction of an edge, from its first to its second vertex.
    #[inline]
    pub fn edge_dir(&self, edge: u32) -> Vector<Real> {
        let [a, b] = self.edges[edge as usize];
        self.vertices[b as usize] - self.vertices[a as usize]
    }

    /// The local-space AABB of this mesh.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices)
    }
}
