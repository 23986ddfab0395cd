use approx::assert_relative_eq;
use collide3d::math::{Isometry, Point, Vector};
use collide3d::query::{self, CollisionContext, NormalAttachment};
use collide3d::shape::{Plane, Shape, Sphere};

#[test]
fn sphere_sinking_in_the_ground() {
    let sphere = Shape::Sphere(Sphere::new(0.5));
    let ground = Shape::Plane(Plane::ground());
    let pos1 = Isometry::translation(0.0, 0.4, 0.0);
    let ctx = CollisionContext::from_shapes(pos1, &sphere, Isometry::identity(), &ground, 0.02);

    let result = query::resolve(&sphere, &ground, &ctx);
    assert_eq!(result.len(), 1);

    let pt = &result.points()[0];
    assert_relative_eq!(pt.normal, Vector::y(), epsilon = 1.0e-6);
    assert_relative_eq!(pt.dist, -0.1, epsilon = 1.0e-6);
    assert_relative_eq!(pt.local_p1, Point::new(0.0, -0.5, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(pt.local_p2, Point::origin(), epsilon = 1.0e-6);
    assert_eq!(pt.normal_attachment, NormalAttachment::NormalOn2);
}

#[test]
fn ground_below_a_sphere() {
    let sphere = Shape::Sphere(Sphere::new(0.5));
    let ground = Shape::Plane(Plane::ground());
    let pos2 = Isometry::translation(0.0, 0.4, 0.0);
    let ctx = CollisionContext::from_shapes(Isometry::identity(), &ground, pos2, &sphere, 0.02);

    let result = query::resolve(&ground, &sphere, &ctx);
    assert_eq!(result.len(), 1);

    let pt = &result.points()[0];
    assert_relative_eq!(pt.normal, -Vector::y(), epsilon = 1.0e-6);
    assert_relative_eq!(pt.dist, -0.1, epsilon = 1.0e-6);
    assert_relative_eq!(pt.local_p2, Point::new(0.0, -0.5, 0.0), epsilon = 1.0e-6);
    assert_eq!(pt.normal_attachment, NormalAttachment::NormalOn1);
}
