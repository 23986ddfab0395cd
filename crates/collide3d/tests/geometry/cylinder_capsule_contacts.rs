use approx::assert_relative_eq;
use collide3d::math::{consts, Isometry, Vector};
use collide3d::query::{self, CollisionContext};
use collide3d::shape::{Capsule, Cuboid, Cylinder, FeatureId, Plane, Shape};

#[test]
fn capsule_lying_on_a_cuboid() {
    let capsule = Shape::Capsule(Capsule::new(0.5, 0.25));
    let cuboid = Shape::Cuboid(Cuboid::new(Vector::new(2.0, 0.5, 2.0)));
    let pos1 = Isometry::new(Vector::new(0.0, 0.74, 0.0), Vector::z() * consts::FRAC_PI_2);
    let ctx = CollisionContext::from_shapes(pos1, &capsule, Isometry::identity(), &cuboid, 0.02);

    let result = query::resolve(&capsule, &cuboid, &ctx);
    assert_eq!(result.len(), 2);

    for pt in &result {
        assert_relative_eq!(pt.normal, Vector::y(), epsilon = 1.0e-3);
        assert_relative_eq!(pt.dist, -0.01, epsilon = 1.0e-3);
        assert_relative_eq!(pt.local_p1.x, -0.25, epsilon = 1.0e-3);
        assert_relative_eq!(pt.local_p1.y.abs(), 0.5, epsilon = 1.0e-3);
        assert_relative_eq!(pt.local_p2.y, 0.5, epsilon = 1.0e-3);
    }
}

#[test]
fn cylinder_on_its_side_on_the_ground() {
    let cylinder = Shape::Cylinder(Cylinder::new(0.5, 0.25));
    let ground = Shape::Plane(Plane::ground());
    let pos1 = Isometry::new(Vector::new(1.0, 0.24, 2.0), Vector::z() * consts::FRAC_PI_2);
    let ctx = CollisionContext::from_shapes(pos1, &cylinder, Isometry::identity(), &ground, 0.02);

    let result = query::resolve(&cylinder, &ground, &ctx);
    assert_eq!(result.len(), 2);

    let mut fids: Vec<_> = result.iter().map(|pt| pt.fid1).collect();
    fids.sort_by_key(|fid| fid.unwrap_edge());
    assert_eq!(fids, [FeatureId::Edge(0), FeatureId::Edge(1)]);

    for pt in &result {
        assert_relative_eq!(pt.normal, Vector::y(), epsilon = 1.0e-6);
        assert_relative_eq!(pt.dist, -0.01, epsilon = 1.0e-5);
        assert_relative_eq!(pt.local_p2.y, 0.0, epsilon = 1.0e-5);
        assert_eq!(pt.fid2, FeatureId::Face(0));
    }
}

#[test]
fn tilted_cylinder_touches_the_ground_with_its_rim() {
    let cylinder = Shape::Cylinder(Cylinder::new(0.5, 0.25));
    let ground = Shape::Plane(Plane::ground());
    let angle = consts::FRAC_PI_4;
    let lowest = 0.5 * angle.cos() + 0.25 * angle.sin();
    let pos1 = Isometry::new(Vector::new(0.0, lowest - 0.01, 0.0), Vector::z() * angle);
    let ctx = CollisionContext::from_shapes(pos1, &cylinder, Isometry::identity(), &ground, 0.0);

    let result = query::resolve(&ground, &cylinder, &ctx.swapped());
    assert_eq!(result.len(), 1);

    let pt = &result.points()[0];
    assert_relative_eq!(pt.normal, -Vector::y(), epsilon = 1.0e-6);
    assert_relative_eq!(pt.dist, -0.01, epsilon = 1.0e-5);
    assert!(matches!(pt.fid2, FeatureId::Edge(_)));
}
