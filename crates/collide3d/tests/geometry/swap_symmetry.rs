use std::sync::Arc;

use collide3d::bounding_volume::BoundingVolume;
use collide3d::math::{Isometry, Point, Real, Vector};
use collide3d::query::{self, pair_algorithm, CollisionContext, PairAlgorithm};
use collide3d::shape::{
    Capsule, Compound, ConvexMesh, ConvexPolyhedron, Cuboid, Cylinder, PagedTriMesh, Plane,
    Shape, Sphere, TriMesh,
};

fn random_pose(rng: &mut oorandom::Rand32) -> Isometry<Real> {
    let mut coord = || (rng.rand_float() * 2.0 - 1.0) as Real;
    let translation = Vector::new(coord(), coord(), coord());
    let axisangle = Vector::new(coord(), coord(), coord()) * 2.0;
    Isometry::new(translation, axisangle)
}

fn all_shapes() -> Vec<Shape> {
    let ground = Arc::new(
        TriMesh::new(
            vec![
                Point::new(-2.0, 0.0, -2.0),
                Point::new(-2.0, 0.0, 2.0),
                Point::new(2.0, 0.0, 2.0),
                Point::new(2.0, 0.0, -2.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
        .unwrap(),
    );
    let mut paged = PagedTriMesh::new(vec![ground.local_aabb().loosened(0.5)]);
    let _ = paged.load_page(0, ground.clone());
    let polyhedron = ConvexMesh::cuboid(&Vector::new(0.3, 0.4, 0.5)).unwrap();
    let compound = Compound::new(vec![
        (
            Isometry::translation(0.0, 0.3, 0.0),
            Shape::Sphere(Sphere::new(0.4)),
        ),
        (
            Isometry::translation(0.0, -0.3, 0.0),
            Shape::Cuboid(Cuboid::new(Vector::repeat(0.3))),
        ),
    ]);

    vec![
        Shape::Sphere(Sphere::new(0.5)),
        Shape::Plane(Plane::ground()),
        Shape::Cylinder(Cylinder::new(0.5, 0.3)),
        Shape::Capsule(Capsule::new(0.4, 0.3)),
        Shape::Cuboid(Cuboid::new(Vector::new(0.5, 0.3, 0.4))),
        Shape::ConvexPolyhedron(ConvexPolyhedron::new(Arc::new(polyhedron))),
        Shape::TriMesh(ground),
        Shape::PagedTriMesh(paged),
        Shape::Compound(Arc::new(compound)),
    ]
}

#[test]
fn reversed_pairs_report_swapped_contacts() {
    let mut rng = oorandom::Rand32::new(1234);
    let shapes = all_shapes();
    let mut num_contacts = 0;

    for _ in 0..50 {
        for shape1 in &shapes {
            for shape2 in &shapes {
                let (t1, t2) = (shape1.shape_type(), shape2.shape_type());
                if t1 == t2 || pair_algorithm(t1, t2) != PairAlgorithm::Direct {
                    continue;
                }

                let (pos1, pos2) = (random_pose(&mut rng), random_pose(&mut rng));
                let ctx = CollisionContext::from_shapes(pos1, shape1, pos2, shape2, 0.05);

                let forward = query::resolve(shape1, shape2, &ctx);
                let mut backward = query::resolve(shape2, shape1, &ctx.swapped());
                backward.swap();

                assert_eq!(forward, backward, "{:?} vs. {:?}", t1, t2);
                num_contacts += forward.len();
            }
        }
    }

    assert!(num_contacts > 0);
}

#[test]
fn same_type_pairs_agree_in_both_orders() {
    let mut rng = oorandom::Rand32::new(4321);
    let shapes = [
        Shape::Sphere(Sphere::new(0.5)),
        Shape::Cuboid(Cuboid::new(Vector::new(0.5, 0.3, 0.4))),
    ];
    let mut num_collisions = 0;

    for shape in &shapes {
        for _ in 0..200 {
            let (pos1, pos2) = (random_pose(&mut rng), random_pose(&mut rng));
            let ctx = CollisionContext::from_shapes(pos1, shape, pos2, shape, 0.05);

            let forward = query::resolve(shape, shape, &ctx);
            let mut backward = query::resolve(shape, shape, &ctx.swapped());
            backward.swap();

            assert_eq!(forward.is_empty(), backward.is_empty());

            if let (Some(a), Some(b)) = (forward.deepest(), backward.deepest()) {
                assert!((a.dist - b.dist).abs() <= 1.0e-3, "{} vs. {}", a.dist, b.dist);
                assert!(a.normal.dot(&b.normal) > 0.999);
                num_collisions += 1;
            }
        }
    }

    assert!(num_collisions > 0);
}
