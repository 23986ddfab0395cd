use crate::math::{Point, Vector, DEFAULT_EPSILON};
use crate::query::{CollisionContext, ContactPoint, ContactResult, NormalAttachment};
use crate::shape::{FeatureId, Sphere};

/// Computes the contact between two spheres.
///
/// If both centers coincide, the normal is arbitrarily set to the `y` axis.
pub fn contact_sphere_sphere(
    sphere1: &Sphere,
    sphere2: &Sphere,
    ctx: &CollisionContext,
    out: &mut ContactResult,
) {
    let center1 = Point::from(ctx.pos1.translation.vector);
    let center2 = Point::from(ctx.pos2.translation.vector);
    let delta = center1 - center2;
    let center_dist = delta.norm();
    let dist = center_dist - sphere1.radius - sphere2.radius;

    if dist > ctx.threshold {
        return;
    }

    let normal = if center_dist > DEFAULT_EPSILON {
        delta / center_dist
    } else {
        Vector::y()
    };

    let p1 = center1 - normal * sphere1.radius;
    let p2 = center2 + normal * sphere2.radius;

    let _ = out.maybe_add_point(ContactPoint {
        local_p1: ctx.pos1.inverse_transform_point(&p1),
        local_p2: ctx.pos2.inverse_transform_point(&p2),
        normal,
        dist,
        fid1: FeatureId::Face(0),
        fid2: FeatureId::Face(0),
        subshape1: 0,
        subshape2: 0,
        normal_attachment: NormalAttachment::None,
    });
}
