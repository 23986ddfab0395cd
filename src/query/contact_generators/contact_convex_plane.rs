use crate::math::Real;
use crate::query::{CollisionContext, ContactPoint, ContactResult, NormalAttachment};
use crate::shape::{FeatureId, Plane, PolygonalFeature, PolygonalFeatureMap};

/// Computes the contacts between a convex shape and a plane.
///
/// Every vertex of the support feature of the convex shape closer to the plane than the
/// threshold yields one contact. The deepest vertices are always part of that feature.
pub fn contact_convex_plane<G>(
    g1: &G,
    plane2: &Plane,
    ctx: &CollisionContext,
    out: &mut ContactResult,
) where
    G: PolygonalFeatureMap,
{
    let (pos1, pos2) = ctx.shifted_positions();
    let normal = pos2.rotation * plane2.normal.into_inner();
    let offset = plane2.constant + normal.dot(&pos2.translation.vector);
    let margin1 = g1.margin();
    let separation = -g1.support_projection(&pos1, &-normal) - offset - margin1;

    if separation > ctx.threshold {
        return;
    }

    let shift = ctx.pos1.translation.vector;
    let mut feature1 = PolygonalFeature::new();

    // The deepest feature first: a wider tolerance may hide its vertices inside the
    // silhouette of the shallower ones.
    for tolerance in [0.0, ctx.threshold - separation] {
        g1.support_feature(&pos1, &-normal, tolerance, &mut feature1);

        for (pt, vid) in feature1.vertices.iter().zip(feature1.vids.iter()) {
            let dist = pt.coords.dot(&normal) - offset - margin1;

            if dist > ctx.threshold {
                continue;
            }

            let p1 = pt - normal * margin1;
            let p2 = p1 - normal * dist;

            let _ = out.maybe_add_point(ContactPoint {
                local_p1: ctx.pos1.inverse_transform_point(&(p1 + shift)),
                local_p2: ctx.pos2.inverse_transform_point(&(p2 + shift)),
                normal,
                dist,
                fid1: *vid,
                fid2: FeatureId::Face(0),
                subshape1: 0,
                subshape2: 0,
                normal_attachment: NormalAttachment::NormalOn2,
            });
        }

        if ctx.threshold - separation <= Real::EPSILON {
            break;
        }
    }
}
