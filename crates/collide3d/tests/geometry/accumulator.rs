use collide3d::math::{Isometry, Point, Real, Vector};
use collide3d::query::{self, CollisionContext, ContactPoint, ContactResult, NormalAttachment};
use collide3d::shape::{Cuboid, Cylinder, FeatureId, Shape};
use collide3d::utils::MAX_CONTACTS;

fn random_point(rng: &mut oorandom::Rand32, vid: u32) -> ContactPoint {
    let x = (rng.rand_float() * 2.0 - 1.0) as Real;
    let z = (rng.rand_float() * 2.0 - 1.0) as Real;
    ContactPoint {
        local_p1: Point::new(x, 0.0, z),
        local_p2: Point::new(x, 0.0, z),
        normal: Vector::y(),
        dist: -(rng.rand_float() as Real),
        fid1: FeatureId::Vertex(vid),
        fid2: FeatureId::Face(0),
        subshape1: 0,
        subshape2: 0,
        normal_attachment: NormalAttachment::NormalOn2,
    }
}

#[test]
fn result_stays_bounded_and_keeps_the_deepest_point() {
    let mut rng = oorandom::Rand32::new(42);
    let mut result = ContactResult::new();
    let mut deepest = Real::MAX;

    for vid in 0..1000 {
        let pt = random_point(&mut rng, vid);
        deepest = deepest.min(pt.dist);
        let _ = result.maybe_add_point(pt);

        assert!(result.len() <= MAX_CONTACTS);
        assert_eq!(result.deepest().map(|pt| pt.dist), Some(deepest));
    }

    assert_eq!(result.len(), MAX_CONTACTS);
}

#[test]
fn repeated_points_are_stored_once() {
    let mut rng = oorandom::Rand32::new(7);
    let pt = random_point(&mut rng, 0);
    let mut result = ContactResult::new();

    for _ in 0..10 {
        let _ = result.maybe_add_point(pt);
    }

    assert_eq!(result.len(), 1);
    assert_eq!(result.points()[0], pt);
}

#[test]
fn cylinder_cap_is_reduced_to_four_points() {
    let cylinder = Shape::Cylinder(Cylinder::new(0.5, 0.5));
    let cuboid = Shape::Cuboid(Cuboid::new(Vector::new(2.0, 0.5, 2.0)));
    let pos1 = Isometry::translation(0.0, 0.99, 0.0);
    let ctx = CollisionContext::from_shapes(pos1, &cylinder, Isometry::identity(), &cuboid, 0.02);

    let result = query::resolve(&cylinder, &cuboid, &ctx);
    assert!(result.len() >= 3 && result.len() <= MAX_CONTACTS);

    for (i, a) in result.iter().enumerate() {
        for b in &result.points()[i + 1..] {
            assert!((a.local_p1 - b.local_p1).norm() > 0.02);
        }
    }
}

#[test]
fn cylinder_cap_contacts_name_the_disc_corners() {
    let cylinder = Shape::Cylinder(Cylinder::new(0.5, 0.5));
    let cuboid = Shape::Cuboid(Cuboid::new(Vector::new(2.0, 0.5, 2.0)));
    let upright = Isometry::translation(0.0, 0.99, 0.0);
    let yawed = Isometry::new(Vector::new(0.0, 0.99, 0.0), Vector::y() * 0.01);
    let disc_corners = collide3d::utils::CYLINDER_DISC_VERTICES as u32;

    let contacts = |pos1: Isometry<Real>| {
        let ctx =
            CollisionContext::from_shapes(pos1, &cylinder, Isometry::identity(), &cuboid, 0.02);
        query::resolve(&cylinder, &cuboid, &ctx)
    };
    let first = contacts(upright);
    let second = contacts(yawed);
    assert!(!first.is_empty() && !second.is_empty());

    for result in [&first, &second] {
        for pt in result {
            // The bottom cap rests on the box.
            match pt.fid1 {
                FeatureId::Vertex(id) => assert!(id >= disc_corners && id < 2 * disc_corners),
                other => panic!("unexpected cylinder feature {:?}", other),
            }
            assert!(pt.fid2.is_known());
        }
    }

    for pt in &second {
        if let Some(same) = first.iter().find(|other| other.fid1 == pt.fid1) {
            assert!((same.local_p1 - pt.local_p1).norm() < 1.0e-4);
        }
    }
}
