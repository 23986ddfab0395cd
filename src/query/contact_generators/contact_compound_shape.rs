use crate::bounding_volume::BoundingVolume;
use crate::query::{resolve, CollisionContext, ContactResult};
use crate::shape::{Compound, Shape};

/// Computes the contacts between a compound shape and any other shape.
///
/// Every part of the compound with an AABB intersecting the AABB of the other shape, enlarged
/// by the threshold, is resolved against it. The contacts of the part `i` have their first
/// pivot expressed in the local frame of the compound, and `i` as `subshape1`.
///
/// With the `parallel` feature, the parts are resolved in parallel. The contacts are merged in
/// the increasing order of the part indices either way.
pub fn contact_compound_shape(
    compound1: &Compound,
    shape2: &Shape,
    ctx: &CollisionContext,
    out: &mut ContactResult,
) {
    let query = ctx
        .aabb2
        .transform_by(&ctx.pos1.inverse())
        .loosened(ctx.threshold.max(0.0));
    let mut parts = Vec::new();
    compound1.visit_parts(&query, |i| parts.push(i));

    let resolve_part = |i: u32| {
        let (part_pos, part) = &compound1.shapes()[i as usize];
        let part_ctx = CollisionContext {
            pos1: ctx.pos1 * part_pos,
            aabb1: compound1.aabbs()[i as usize].transform_by(&ctx.pos1),
            ..*ctx
        };
        resolve(part, shape2, &part_ctx)
    };

    #[cfg(feature = "parallel")]
    let partials: Vec<ContactResult> = {
        use rayon::prelude::*;
        parts.par_iter().map(|i| resolve_part(*i)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let partials = parts.iter().map(|i| resolve_part(*i));

    for (i, partial) in parts.iter().zip(partials) {
        let part_pos = &compound1.shapes()[*i as usize].0;

        for pt in &partial {
            let mut pt = *pt;
            pt.local_p1 = part_pos * pt.local_p1;
            pt.subshape1 = *i;
            let _ = out.maybe_add_point(pt);
        }
    }
}
