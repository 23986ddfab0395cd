use approx::assert_relative_eq;
use collide3d::math::{Isometry, Real, Vector};
use collide3d::query::{self, CollisionContext};
use collide3d::shape::{Cuboid, Plane, Shape, Sphere};

fn resolve_at(shape1: &Shape, pos1: Isometry<Real>, shape2: &Shape, threshold: Real) -> usize {
    let ctx = CollisionContext::from_shapes(pos1, shape1, Isometry::identity(), shape2, threshold);
    query::resolve(shape1, shape2, &ctx).len()
}

#[test]
fn spheres_separated_by_exactly_the_threshold() {
    let sphere = Shape::Sphere(Sphere::new(0.5));
    let pos1 = Isometry::translation(1.25, 0.0, 0.0);
    let ctx = CollisionContext::from_shapes(pos1, &sphere, Isometry::identity(), &sphere, 0.25);

    let result = query::resolve(&sphere, &sphere, &ctx);
    assert_eq!(result.len(), 1);
    assert_eq!(result.points()[0].dist, 0.25);
    assert_relative_eq!(result.points()[0].normal, Vector::x());

    assert_eq!(resolve_at(&sphere, pos1, &sphere, 0.2), 0);
}

#[test]
fn cuboids_separated_by_exactly_the_threshold() {
    let cuboid = Shape::Cuboid(Cuboid::new(Vector::repeat(0.5)));
    let pos1 = Isometry::translation(1.25, 0.0, 0.0);
    let ctx = CollisionContext::from_shapes(pos1, &cuboid, Isometry::identity(), &cuboid, 0.25);

    let result = query::resolve(&cuboid, &cuboid, &ctx);
    assert!(!result.is_empty());
    for pt in &result {
        assert_relative_eq!(pt.dist, 0.25, epsilon = 1.0e-6);
        assert_relative_eq!(pt.normal, Vector::x(), epsilon = 1.0e-6);
    }

    assert_eq!(resolve_at(&cuboid, Isometry::translation(1.3, 0.0, 0.0), &cuboid, 0.25), 0);
}

#[test]
fn sphere_above_the_ground_by_exactly_the_threshold() {
    let sphere = Shape::Sphere(Sphere::new(0.5));
    let ground = Shape::Plane(Plane::ground());

    assert_eq!(resolve_at(&sphere, Isometry::translation(0.0, 0.75, 0.0), &ground, 0.25), 1);
    assert_eq!(resolve_at(&sphere, Isometry::translation(0.0, 0.76, 0.0), &ground, 0.25), 0);
}

#[test]
fn touching_shapes_have_a_zero_distance() {
    let cuboid = Shape::Cuboid(Cuboid::new(Vector::repeat(0.5)));
    let sphere = Shape::Sphere(Sphere::new(0.5));
    let pos1 = Isometry::translation(0.0, 1.0, 0.0);

    for shape1 in [&cuboid, &sphere] {
        let ctx = CollisionContext::from_shapes(pos1, shape1, Isometry::identity(), &cuboid, 0.0);
        let result = query::resolve(shape1, &cuboid, &ctx);

        assert!(!result.is_empty());
        for pt in &result {
            assert_relative_eq!(pt.dist, 0.0, epsilon = 1.0e-5);
            assert_relative_eq!(pt.normal, Vector::y(), epsilon = 1.0e-5);
        }
    }
}

#[test]
fn negative_threshold_only_reports_penetrations() {
    let sphere = Shape::Sphere(Sphere::new(0.5));

    assert_eq!(resolve_at(&sphere, Isometry::translation(0.95, 0.0, 0.0), &sphere, -0.1), 0);
    assert_eq!(resolve_at(&sphere, Isometry::translation(0.85, 0.0, 0.0), &sphere, -0.1), 1);
}
