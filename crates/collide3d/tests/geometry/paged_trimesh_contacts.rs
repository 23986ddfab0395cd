use std::sync::Arc;

use approx::assert_relative_eq;
use collide3d::bounding_volume::Aabb;
use collide3d::math::{Isometry, Point, Real, Vector};
use collide3d::query::{self, CollisionContext, ContactResult};
use collide3d::shape::{FeatureId, PagedTriMesh, Shape, Sphere, TriMesh};

// The square [x - 1, x + 1] × [-1, 1] of the plane y = 0, facing up.
fn square(x: Real) -> Arc<TriMesh> {
    let mesh = TriMesh::new(
        vec![
            Point::new(x - 1.0, 0.0, -1.0),
            Point::new(x - 1.0, 0.0, 1.0),
            Point::new(x + 1.0, 0.0, 1.0),
            Point::new(x + 1.0, 0.0, -1.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
    .unwrap();
    Arc::new(mesh)
}

fn two_pages() -> PagedTriMesh {
    PagedTriMesh::new(vec![
        Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0)),
        Aabb::new(Point::new(1.0, -1.0, -1.0), Point::new(3.0, 1.0, 1.0)),
    ])
}

fn resolve_sphere(paged: &PagedTriMesh, pos1: Isometry<Real>) -> ContactResult {
    let sphere = Shape::Sphere(Sphere::new(0.5));
    let mesh = Shape::PagedTriMesh(paged.clone());
    let ctx = CollisionContext::from_shapes(pos1, &sphere, Isometry::identity(), &mesh, 0.02);
    query::resolve(&sphere, &mesh, &ctx)
}

#[test]
fn pages_generate_contacts_only_while_loaded() {
    let mut paged = two_pages();
    let pos1 = Isometry::translation(2.5, 0.45, -0.25);

    assert!(resolve_sphere(&paged, pos1).is_empty());

    assert!(paged.load_page(1, square(2.0)).is_none());
    let result = resolve_sphere(&paged, pos1);
    assert_eq!(result.len(), 1);

    let pt = &result.points()[0];
    assert_eq!(pt.subshape2, 1);
    assert_eq!(pt.fid2, FeatureId::Face(1));
    assert_relative_eq!(pt.normal, Vector::y(), epsilon = 1.0e-5);
    assert_relative_eq!(pt.dist, -0.05, epsilon = 1.0e-5);
    assert_relative_eq!(pt.local_p2, Point::new(2.5, 0.0, -0.25), epsilon = 1.0e-5);

    assert!(paged.unload_page(1).is_some());
    assert!(resolve_sphere(&paged, pos1).is_empty());
}

#[test]
fn only_the_page_under_the_shape_is_visited() {
    let mut paged = two_pages();
    let _ = paged.load_page(0, square(0.0));
    let _ = paged.load_page(1, square(2.0));

    let result = resolve_sphere(&paged, Isometry::translation(-0.5, 0.45, 0.25));
    assert_eq!(result.len(), 1);
    assert_eq!(result.points()[0].subshape2, 0);
    assert_eq!(result.points()[0].fid2, FeatureId::Face(0));
}

#[test]
fn unloaded_mesh_has_an_invalid_aabb() {
    let mut paged = two_pages();
    assert!(!paged.local_aabb().is_valid());

    let _ = paged.load_page(0, square(0.0));
    assert_eq!(paged.local_aabb(), paged.pages()[0].aabb);
}
