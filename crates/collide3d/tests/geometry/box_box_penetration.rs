use approx::assert_relative_eq;
use collide3d::math::{consts, Isometry, Vector};
use collide3d::query::{self, CollisionContext, NormalAttachment};
use collide3d::shape::{Cuboid, Shape};
use collide3d::utils::MAX_CONTACTS;

#[test]
fn aligned_boxes_overlapping_along_x() {
    let cuboid = Shape::Cuboid(Cuboid::new(Vector::repeat(0.5)));
    let pos1 = Isometry::translation(0.9, 0.0, 0.0);
    let ctx = CollisionContext::from_shapes(pos1, &cuboid, Isometry::identity(), &cuboid, 0.0);

    let result = query::resolve(&cuboid, &cuboid, &ctx);
    assert_eq!(result.len(), 4);

    for pt in &result {
        assert_relative_eq!(pt.normal, Vector::x(), epsilon = 1.0e-6);
        assert_relative_eq!(pt.dist, -0.1, epsilon = 1.0e-5);
        assert_relative_eq!(pt.local_p1.x, -0.5, epsilon = 1.0e-5);
        assert_relative_eq!(pt.local_p2.x, 0.5, epsilon = 1.0e-5);
        assert_eq!(pt.normal_attachment, NormalAttachment::NormalOn2);
    }
}

#[test]
fn twisted_boxes_clip_to_an_octagon() {
    // The contact polygon has eight corners, only four of them can be kept.
    let cuboid = Shape::Cuboid(Cuboid::new(Vector::repeat(0.5)));
    let pos1 = Isometry::new(
        Vector::new(0.9, 0.0, 0.0),
        Vector::x() * consts::FRAC_PI_4,
    );
    let ctx = CollisionContext::from_shapes(pos1, &cuboid, Isometry::identity(), &cuboid, 0.0);

    let result = query::resolve(&cuboid, &cuboid, &ctx);
    assert_eq!(result.len(), MAX_CONTACTS);

    for pt in &result {
        assert_relative_eq!(pt.normal, Vector::x(), epsilon = 1.0e-5);
        assert_relative_eq!(pt.dist, -0.1, epsilon = 1.0e-5);
        assert_relative_eq!(pt.local_p2.x, 0.5, epsilon = 1.0e-5);
        assert!(pt.fid1.is_known() && pt.fid2.is_known());
    }
}
