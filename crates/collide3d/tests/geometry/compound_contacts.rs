use std::sync::Arc;

use approx::assert_relative_eq;
use collide3d::math::{consts, Isometry, Point, Vector};
use collide3d::query::{self, CollisionContext};
use collide3d::shape::{Compound, Cuboid, Shape, Sphere};

fn two_boxes() -> Shape {
    let cuboid = Shape::Cuboid(Cuboid::new(Vector::repeat(0.5)));
    Shape::Compound(Arc::new(Compound::new(vec![
        (Isometry::translation(-2.0, 0.0, 0.0), cuboid.clone()),
        (Isometry::translation(2.0, 0.0, 0.0), cuboid),
    ])))
}

#[test]
fn sphere_resting_on_a_compound() {
    let compound = two_boxes();
    let sphere = Shape::Sphere(Sphere::new(0.5));
    let pos1 = Isometry::translation(-2.0, 0.95, 0.0);
    let ctx = CollisionContext::from_shapes(pos1, &sphere, Isometry::identity(), &compound, 0.02);

    let result = query::resolve(&sphere, &compound, &ctx);
    assert_eq!(result.len(), 1);

    let pt = &result.points()[0];
    assert_eq!(pt.subshape1, 0);
    assert_eq!(pt.subshape2, 0);
    assert_relative_eq!(pt.normal, Vector::y(), epsilon = 1.0e-5);
    assert_relative_eq!(pt.dist, -0.05, epsilon = 1.0e-5);
    assert_relative_eq!(pt.local_p1, Point::new(0.0, -0.5, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(pt.local_p2, Point::new(-2.0, 0.5, 0.0), epsilon = 1.0e-5);
}

#[test]
fn rotated_compound_reports_pivots_in_its_frame() {
    let compound = two_boxes();
    let sphere = Shape::Sphere(Sphere::new(0.5));
    let pos1 = Isometry::new(Vector::zeros(), Vector::y() * consts::FRAC_PI_2);
    // The second part lies at z = -2 once rotated.
    let pos2 = Isometry::translation(0.0, 0.95, -2.0);
    let ctx = CollisionContext::from_shapes(pos1, &compound, pos2, &sphere, 0.02);

    let result = query::resolve(&compound, &sphere, &ctx);
    assert_eq!(result.len(), 1);

    let pt = &result.points()[0];
    assert_eq!(pt.subshape1, 1);
    assert_relative_eq!(pt.normal, -Vector::y(), epsilon = 1.0e-5);
    assert_relative_eq!(pt.dist, -0.05, epsilon = 1.0e-5);
    assert_relative_eq!(pt.local_p1, Point::new(2.0, 0.5, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(pos1 * pt.local_p1, Point::new(0.0, 0.5, -2.0), epsilon = 1.0e-5);
}

#[test]
fn stacked_compounds() {
    let compound = two_boxes();
    let pos1 = Isometry::translation(0.0, 0.95, 0.0);
    let ctx = CollisionContext::from_shapes(pos1, &compound, Isometry::identity(), &compound, 0.02);

    let result = query::resolve(&compound, &compound, &ctx);
    assert_eq!(result.len(), 4);

    for pt in &result {
        assert_eq!(pt.subshape1, pt.subshape2);
        assert_relative_eq!(pt.normal, Vector::y(), epsilon = 1.0e-5);
        assert_relative_eq!(pt.dist, -0.05, epsilon = 1.0e-5);
    }
}

#[test]
fn shape_between_the_parts() {
    let compound = two_boxes();
    let sphere = Shape::Sphere(Sphere::new(0.5));
    let ctx = CollisionContext::from_shapes(
        Isometry::identity(),
        &sphere,
        Isometry::identity(),
        &compound,
        0.02,
    );

    assert!(query::resolve(&sphere, &compound, &ctx).is_empty());
}
