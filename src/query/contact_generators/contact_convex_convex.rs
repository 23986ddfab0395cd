use smallvec::SmallVec;

use crate::math::{Isometry, Point, Point2d, Real, Vector};
use crate::query::sat;
use crate::query::{CollisionContext, ContactPoint, ContactResult, NormalAttachment};
use crate::shape::{FeatureId, PolygonalFeature, PolygonalFeatureMap};
use crate::utils::{
    lerp, orthonormal_basis, point_in_convex_poly2d, segments_intersection2d,
    SUPPORT_FEATURE_TOLERANCE,
};

const PROJECTION_EPSILON: Real = 1.0e-5;

/// Computes the contacts between two convex shapes.
pub fn contact_convex_convex<G1, G2>(
    g1: &G1,
    g2: &G2,
    ctx: &CollisionContext,
    out: &mut ContactResult,
) where
    G1: PolygonalFeatureMap,
    G2: PolygonalFeatureMap,
{
    let (pos1, pos2) = ctx.shifted_positions();
    let (normal, separation) = sat::pfm_pfm_find_separating_axis(g1, &pos1, g2, &pos2);

    if separation > ctx.threshold {
        return;
    }

    contacts_from_support_features(g1, &pos1, g2, &pos2, &normal, separation, ctx, |pt| {
        let _ = out.maybe_add_point(pt);
    });
}

/// Generates the contact points between the support features of two convex shapes along the
/// unit `normal`, pointing from the second shape toward the first one.
///
/// The positions `pos1` and `pos2` are expressed in the frame given by
/// [`CollisionContext::shifted_positions`]. Every generated point has the distance
/// `separation`, and its pivots are expressed in the local frames of the bodies of `ctx`.
pub fn contacts_from_support_features<G1, G2>(
    g1: &G1,
    pos1: &Isometry<Real>,
    g2: &G2,
    pos2: &Isometry<Real>,
    normal: &Vector<Real>,
    separation: Real,
    ctx: &CollisionContext,
    mut add: impl FnMut(ContactPoint),
) where
    G1: PolygonalFeatureMap,
    G2: PolygonalFeatureMap,
{
    let mut feature1 = PolygonalFeature::new();
    let mut feature2 = PolygonalFeature::new();
    g1.support_feature(pos1, &-normal, SUPPORT_FEATURE_TOLERANCE, &mut feature1);
    g2.support_feature(pos2, normal, SUPPORT_FEATURE_TOLERANCE, &mut feature2);

    if feature1.is_empty() || feature2.is_empty() {
        log::debug!("empty support feature, no contact generated");
        return;
    }

    let level1 = -g1.support_projection(pos1, &-normal);
    let level2 = g2.support_projection(pos2, normal);
    let (margin1, margin2) = (g1.margin(), g2.margin());
    let shift = ctx.pos1.translation.vector;

    let normal_attachment = if feature2.len() >= 3 {
        NormalAttachment::NormalOn2
    } else if feature1.len() >= 3 {
        NormalAttachment::NormalOn1
    } else {
        NormalAttachment::None
    };

    // Both pivots are the point `pt` moved along the normal onto the surface of each shape.
    let mut emit = |pt: &Point<Real>, fid1: FeatureId, fid2: FeatureId| {
        let proj = pt.coords.dot(normal);
        let p1 = pt + normal * (level1 - proj - margin1);
        let p2 = pt + normal * (level2 - proj + margin2);

        add(ContactPoint {
            local_p1: ctx.pos1.inverse_transform_point(&(p1 + shift)),
            local_p2: ctx.pos2.inverse_transform_point(&(p2 + shift)),
            normal: *normal,
            dist: separation,
            fid1,
            fid2,
            subshape1: 0,
            subshape2: 0,
            normal_attachment,
        });
    };

    let [t1, t2] = orthonormal_basis(normal);
    let to_2d = |pt: &Point<Real>| Point2d::new(pt.coords.dot(&t1), pt.coords.dot(&t2));
    let poly1: SmallVec<[Point2d<Real>; 8]> = feature1.vertices.iter().map(to_2d).collect();
    let poly2: SmallVec<[Point2d<Real>; 8]> = feature2.vertices.iter().map(to_2d).collect();
    let mut num_emitted = 0;

    if feature2.len() >= 3 {
        for (i, pt) in feature1.vertices.iter().enumerate() {
            if point_in_convex_poly2d(&poly1[i], &poly2, PROJECTION_EPSILON) {
                emit(pt, feature1.vids[i], feature2.fid);
                num_emitted += 1;
            }
        }
    }

    if feature1.len() >= 3 {
        for (j, pt) in feature2.vertices.iter().enumerate() {
            if point_in_convex_poly2d(&poly2[j], &poly1, PROJECTION_EPSILON) {
                emit(pt, feature1.fid, feature2.vids[j]);
                num_emitted += 1;
            }
        }
    }

    for e1 in 0..feature1.num_edges() {
        let (a1, b1) = feature1.edge(e1);

        for e2 in 0..feature2.num_edges() {
            let (a2, b2) = feature2.edge(e2);
            let hits = segments_intersection2d(
                &poly1[a1],
                &poly1[b1],
                &poly2[a2],
                &poly2[b2],
                PROJECTION_EPSILON,
            );

            for (s, t) in hits {
                let pt = lerp(&feature1.vertices[a1], &feature1.vertices[b1], s);
                emit(
                    &pt,
                    segment_feature_id(&feature1, e1, s),
                    segment_feature_id(&feature2, e2, t),
                );
                num_emitted += 1;
            }
        }
    }

    if num_emitted == 0 {
        if feature1.len() == 1 {
            emit(&feature1.vertices[0], feature1.fid, feature2.fid);
        } else if feature2.len() == 1 {
            emit(&feature2.vertices[0], feature1.fid, feature2.fid);
        } else {
            // Polygons touching only within the projection tolerance.
            log::debug!("disjoint support polygons, falling back to the closest vertex");
            let centroid2 = poly2.iter().fold(Vector::zeros().xy(), |acc, pt| acc + pt.coords)
                / poly2.len() as Real;
            let closest = (0..poly1.len())
                .min_by(|i, j| {
                    let di = (poly1[*i].coords - centroid2).norm_squared();
                    let dj = (poly1[*j].coords - centroid2).norm_squared();
                    di.total_cmp(&dj)
                })
                .unwrap_or(0);
            emit(&feature1.vertices[closest], feature1.vids[closest], feature2.fid);
        }
    }
}

// The feature at the parameter `param` along the edge `edge` of `feature`.
fn segment_feature_id(feature: &PolygonalFeature, edge: usize, param: Real) -> FeatureId {
    let (a, b) = feature.edge(edge);

    if param <= PROJECTION_EPSILON {
        feature.vids[a]
    } else if param >= 1.0 - PROJECTION_EPSILON {
        feature.vids[b]
    } else {
        feature.eids[edge]
    }
}
