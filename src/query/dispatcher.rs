use crate::query::details::{
    contact_compound_shape, contact_convex_convex, contact_convex_paged_trimesh,
    contact_convex_plane, contact_convex_trimesh, contact_sphere_sphere,
};
use crate::query::{CollisionContext, ContactResult, Unsupported};
use crate::shape::{Shape, ShapeType};

/// How the contacts between two kinds of shapes are computed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairAlgorithm {
    /// A contact generator exists for the pair in this order.
    Direct,
    /// The contact generator of the reversed pair is used, and its contacts swapped.
    Swapped,
    /// No contact generator exists for the pair, in either order.
    Unsupported,
}

/// The way contacts are computed between shapes of the types `shape1` and `shape2`.
pub fn pair_algorithm(shape1: ShapeType, shape2: ShapeType) -> PairAlgorithm {
    use ShapeType::*;

    match (shape1, shape2) {
        (Plane, Plane | TriMesh | PagedTriMesh)
        | (TriMesh | PagedTriMesh, Plane)
        | (TriMesh | PagedTriMesh, TriMesh | PagedTriMesh) => PairAlgorithm::Unsupported,
        (Compound, _) => PairAlgorithm::Direct,
        (_, Compound) => PairAlgorithm::Swapped,
        (Sphere, Sphere | Plane | Cuboid | ConvexPolyhedron | TriMesh | PagedTriMesh)
        | (
            Capsule,
            Capsule | Plane | Sphere | Cylinder | Cuboid | ConvexPolyhedron | TriMesh
            | PagedTriMesh,
        )
        | (
            Cylinder,
            Cylinder | Plane | Sphere | Cuboid | ConvexPolyhedron | TriMesh | PagedTriMesh,
        )
        | (Cuboid, Cuboid | Plane | ConvexPolyhedron | TriMesh | PagedTriMesh)
        | (ConvexPolyhedron, ConvexPolyhedron | Plane | TriMesh | PagedTriMesh) => {
            PairAlgorithm::Direct
        }
        _ => PairAlgorithm::Swapped,
    }
}

/// Computes the contacts between two shapes.
///
/// The contact normals point from `shape2` toward `shape1`. Pairs of shapes without a contact
/// generator, like two triangle meshes, yield no contact.
pub fn resolve(shape1: &Shape, shape2: &Shape, ctx: &CollisionContext) -> ContactResult {
    try_resolve(shape1, shape2, ctx).unwrap_or_else(|err| {
        log::trace!("{}", err);
        ContactResult::new()
    })
}

/// Computes the contacts between two shapes, or fails if no contact generator exists for
/// their pair of types.
pub fn try_resolve(
    shape1: &Shape,
    shape2: &Shape,
    ctx: &CollisionContext,
) -> Result<ContactResult, Unsupported> {
    let unsupported = Unsupported {
        shape1: shape1.shape_type(),
        shape2: shape2.shape_type(),
    };

    match pair_algorithm(unsupported.shape1, unsupported.shape2) {
        PairAlgorithm::Unsupported => Err(unsupported),
        PairAlgorithm::Swapped => {
            let mut result = try_resolve(shape2, shape1, &ctx.swapped())?;
            result.swap();
            Ok(result)
        }
        PairAlgorithm::Direct => {
            let mut result = ContactResult::new();

            match (shape1, shape2) {
                (Shape::Compound(compound1), _) => {
                    contact_compound_shape(compound1, shape2, ctx, &mut result)
                }
                (Shape::Sphere(sphere1), Shape::Sphere(sphere2)) => {
                    contact_sphere_sphere(sphere1, sphere2, ctx, &mut result)
                }
                (_, Shape::Plane(plane2)) => {
                    let convex1 = shape1.as_convex().ok_or(unsupported)?;
                    contact_convex_plane(&convex1, plane2, ctx, &mut result)
                }
                (_, Shape::TriMesh(mesh2)) => {
                    let convex1 = shape1.as_convex().ok_or(unsupported)?;
                    contact_convex_trimesh(&convex1, mesh2, ctx, &mut result)
                }
                (_, Shape::PagedTriMesh(mesh2)) => {
                    let convex1 = shape1.as_convex().ok_or(unsupported)?;
                    contact_convex_paged_trimesh(&convex1, mesh2, ctx, &mut result)
                }
                _ => {
                    let convex1 = shape1.as_convex().ok_or(unsupported)?;
                    let convex2 = shape2.as_convex().ok_or(unsupported)?;
                    contact_convex_convex(&convex1, &convex2, ctx, &mut result)
                }
            }

            Ok(result)
        }
    }
}
