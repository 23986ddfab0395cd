use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Real};
use crate::query::details::contacts_from_support_features;
use crate::query::sat;
use crate::query::{CollisionContext, ContactResult};
use crate::shape::{
    FeatureId, PagedTriMesh, PolygonalFeature, PolygonalFeatureMap, TriMesh, Triangle,
};
use crate::utils::SUPPORT_FEATURE_TOLERANCE;

/// Computes the contacts between a convex shape and a triangle mesh.
///
/// Only the triangles with an AABB intersecting the AABB of the convex shape, enlarged by the
/// threshold, are tested. Each contact has the triangle index as `subshape2`.
pub fn contact_convex_trimesh<G>(
    g1: &G,
    mesh2: &TriMesh,
    ctx: &CollisionContext,
    out: &mut ContactResult,
) where
    G: PolygonalFeatureMap,
{
    let query = local_query_aabb(ctx);
    let (pos1, pos2) = ctx.shifted_positions();

    mesh2.visit_triangles(&query, |i| {
        contact_convex_triangle(g1, &pos1, &pos2, mesh2, i, i, ctx, out)
    });
}

/// Computes the contacts between a convex shape and the loaded pages of a paged triangle mesh.
///
/// Each contact has the page index as `subshape2`, and mesh-global feature ids of that page.
pub fn contact_convex_paged_trimesh<G>(
    g1: &G,
    mesh2: &PagedTriMesh,
    ctx: &CollisionContext,
    out: &mut ContactResult,
) where
    G: PolygonalFeatureMap,
{
    let query = local_query_aabb(ctx);
    let (pos1, pos2) = ctx.shifted_positions();

    mesh2.visit_pages(&query, |page, mesh| {
        mesh.visit_triangles(&query, |i| {
            contact_convex_triangle(g1, &pos1, &pos2, mesh, i, page, ctx, out)
        })
    });
}

// The AABB of the first body in the local frame of the mesh.
fn local_query_aabb(ctx: &CollisionContext) -> Aabb {
    ctx.aabb1
        .transform_by(&ctx.pos2.inverse())
        .loosened(ctx.threshold.max(0.0))
}

fn contact_convex_triangle<G>(
    g1: &G,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
    mesh2: &TriMesh,
    triangle_id: u32,
    subshape2: u32,
    ctx: &CollisionContext,
    out: &mut ContactResult,
) where
    G: PolygonalFeatureMap,
{
    let tri = mesh2.triangle(triangle_id);
    let tri2 = Triangle::new(pos2 * tri.a, pos2 * tri.b, pos2 * tri.c);
    let identity = Isometry::identity();

    let (mut normal, mut separation) =
        sat::pfm_pfm_find_separating_axis(g1, pos1, &tri2, &identity);

    if separation > ctx.threshold {
        return;
    }

    // Triangles are one-sided.
    let triangle_normal = pos2.rotation * mesh2.triangle_normal(triangle_id).into_inner();
    if normal.dot(&triangle_normal) < 0.0 {
        return;
    }

    // The normal must be a normal the surface of the mesh can actually have at the
    // closest feature of the triangle.
    let mut feature2 = PolygonalFeature::new();
    tri2.support_feature(&identity, &normal, SUPPORT_FEATURE_TOLERANCE, &mut feature2);
    let cones = mesh2.normal_cones(triangle_id);
    let cone = match feature2.fid {
        FeatureId::Face(_) => cones.face,
        FeatureId::Edge(k) => cones.edges[k as usize],
        FeatureId::Vertex(k) => cones.vertices[k as usize],
        FeatureId::Unknown => {
            log::debug!("triangle {} has no support feature", triangle_id);
            return;
        }
    };
    let cone = cone.rotated(&pos2.rotation);
    let clipped = cone.project(&normal);

    if !relative_eq!(clipped, normal, epsilon = 1.0e-6) {
        if clipped.dot(&normal) <= 0.0 {
            return;
        }

        normal = clipped;
        separation = sat::pfm_pfm_compute_separation(g1, pos1, &tri2, &identity, &normal);

        if separation > ctx.threshold {
            log::debug!(
                "contact with triangle {} rejected after clipping its normal",
                triangle_id
            );
            return;
        }
    }

    contacts_from_support_features(
        g1,
        pos1,
        &tri2,
        &identity,
        &normal,
        separation,
        ctx,
        |mut pt| {
            pt.fid2 = mesh2.global_feature_id(triangle_id, pt.fid2);
            pt.subshape2 = subshape2;
            let _ = out.maybe_add_point(pt);
        },
    );
}
