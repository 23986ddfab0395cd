use std::sync::Arc;

use collide3d::math::{Isometry, Point};
use collide3d::query::{self, CollisionContext, Unsupported};
use collide3d::shape::{Plane, Shape, ShapeType, TriMesh};

fn triangle_mesh() -> Shape {
    let mesh = TriMesh::new(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 0.0),
        ],
        vec![[0, 1, 2]],
    )
    .unwrap();
    Shape::TriMesh(Arc::new(mesh))
}

#[test]
fn static_pairs_have_no_contacts() {
    let plane = Shape::Plane(Plane::ground());
    let mesh = triangle_mesh();

    for (shape1, shape2) in [(&plane, &plane), (&plane, &mesh), (&mesh, &plane), (&mesh, &mesh)] {
        let ctx = CollisionContext::from_shapes(
            Isometry::identity(),
            shape1,
            Isometry::identity(),
            shape2,
            0.1,
        );

        assert_eq!(
            query::try_resolve(shape1, shape2, &ctx),
            Err(Unsupported {
                shape1: shape1.shape_type(),
                shape2: shape2.shape_type(),
            })
        );
        assert!(query::resolve(shape1, shape2, &ctx).is_empty());
    }
}

#[test]
fn unsupported_error_message() {
    let err = Unsupported {
        shape1: ShapeType::TriMesh,
        shape2: ShapeType::Plane,
    };
    assert_eq!(
        err.to_string(),
        "contact generation is not supported between TriMesh and Plane"
    );
}
