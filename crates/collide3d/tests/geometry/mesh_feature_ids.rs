use std::sync::Arc;

use approx::assert_relative_eq;
use collide3d::math::{Isometry, Point, Real, Vector};
use collide3d::query::{self, CollisionContext, ContactResult};
use collide3d::shape::{ConvexMesh, ConvexPolyhedron, FeatureId, Shape, TriMesh};

fn ground_mesh() -> Shape {
    let mesh = TriMesh::new(
        vec![
            Point::new(-1.0, 0.0, -1.0),
            Point::new(-1.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(1.0, 0.0, -1.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
    .unwrap();
    Shape::TriMesh(Arc::new(mesh))
}

fn small_box() -> Shape {
    let mesh = ConvexMesh::cuboid(&Vector::repeat(0.25)).unwrap();
    Shape::ConvexPolyhedron(ConvexPolyhedron::new(Arc::new(mesh)))
}

fn resolve_on_ground(shape: &Shape, pos1: Isometry<Real>) -> ContactResult {
    let ground = ground_mesh();
    let ctx = CollisionContext::from_shapes(pos1, shape, Isometry::identity(), &ground, 0.02);
    query::resolve(shape, &ground, &ctx)
}

fn feature_pairs(result: &ContactResult) -> Vec<(FeatureId, FeatureId, u32)> {
    result
        .iter()
        .map(|pt| (pt.fid1, pt.fid2, pt.subshape2))
        .collect()
}

#[test]
fn polyhedron_resting_on_one_triangle() {
    let polyhedron = small_box();
    let result = resolve_on_ground(&polyhedron, Isometry::translation(0.5, 0.24, -0.5));

    assert_eq!(result.len(), 4);
    for pt in &result {
        assert_relative_eq!(pt.normal, Vector::y(), epsilon = 1.0e-5);
        assert_relative_eq!(pt.dist, -0.01, epsilon = 1.0e-5);
        assert_relative_eq!(pt.local_p1.y, -0.25, epsilon = 1.0e-5);
        assert!(matches!(pt.fid1, FeatureId::Vertex(_)));
        assert_eq!(pt.fid2, FeatureId::Face(1));
        assert_eq!(pt.subshape2, 1);
    }

    // Each corner of the bottom face is reported once.
    let pairs = feature_pairs(&result);
    for (i, a) in pairs.iter().enumerate() {
        assert!(pairs[i + 1..].iter().all(|b| b.0 != a.0));
    }
}

#[test]
fn feature_ids_are_stable_under_small_motions() {
    let polyhedron = small_box();
    let pos1 = Isometry::translation(0.5, 0.24, -0.5);
    let moved = Isometry::new(Vector::new(0.501, 0.239, -0.5), Vector::y() * 1.0e-3);

    let before = feature_pairs(&resolve_on_ground(&polyhedron, pos1));
    let after = feature_pairs(&resolve_on_ground(&polyhedron, moved));

    assert_eq!(before.len(), after.len());
    for pair in &before {
        assert!(after.contains(pair), "{:?} lost after a small motion", pair);
    }
}

#[test]
fn cached_rotation_matches_the_pose() {
    let mut polyhedron = ConvexPolyhedron::new(Arc::new(
        ConvexMesh::cuboid(&Vector::repeat(0.25)).unwrap(),
    ));
    let pos1 = Isometry::new(Vector::new(0.5, 0.24, -0.5), Vector::y() * 0.3);

    let uncached = resolve_on_ground(&Shape::ConvexPolyhedron(polyhedron.clone()), pos1);
    polyhedron.update_rotation(&pos1.rotation);
    let cached = resolve_on_ground(&Shape::ConvexPolyhedron(polyhedron), pos1);

    assert_eq!(uncached.len(), 4);
    assert_eq!(uncached.len(), cached.len());
    for a in &uncached {
        let b = cached
            .iter()
            .find(|b| (b.fid1, b.fid2) == (a.fid1, a.fid2))
            .expect("the cached rotation changed the contact features");
        assert_relative_eq!(a.local_p1, b.local_p1, epsilon = 1.0e-5);
        assert_relative_eq!(a.dist, b.dist, epsilon = 1.0e-5);
    }
}
