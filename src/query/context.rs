use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real, Translation};
use crate::shape::Shape;

/// The inputs shared by every contact generator: the poses and world-space AABBs of both
/// bodies, and the contact threshold.
///
/// The threshold is the largest separation at which a contact is still reported. It is
/// usually a small positive value so that contacts are generated slightly before the shapes
/// touch (speculative contacts), but may be negative to only report penetrations.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionContext {
    /// The position of the first body.
    pub pos1: Isometry<Real>,
    /// The world-space AABB of the first body.
    pub aabb1: Aabb,
    /// The position of the second body.
    pub pos2: Isometry<Real>,
    /// The world-space AABB of the second body.
    pub aabb2: Aabb,
    /// The maximum separation at which contacts are reported.
    pub threshold: Real,
}

impl CollisionContext {
    /// Creates a new collision context.
    pub fn new(
        pos1: Isometry<Real>,
        aabb1: Aabb,
        pos2: Isometry<Real>,
        aabb2: Aabb,
        threshold: Real,
    ) -> Self {
        CollisionContext {
            pos1,
            aabb1,
            pos2,
            aabb2,
            threshold,
        }
    }

    /// Creates a collision context where the AABBs are computed from the shapes.
    pub fn from_shapes(
        pos1: Isometry<Real>,
        shape1: &Shape,
        pos2: Isometry<Real>,
        shape2: &Shape,
        threshold: Real,
    ) -> Self {
        Self::new(
            pos1,
            shape1.compute_aabb(&pos1),
            pos2,
            shape2.compute_aabb(&pos2),
            threshold,
        )
    }

    /// The same context with the roles of both bodies exchanged.
    ///
    /// This is an involution: `ctx.swapped().swapped() == ctx`.
    #[must_use]
    pub fn swapped(&self) -> Self {
        CollisionContext {
            pos1: self.pos2,
            aabb1: self.aabb2,
            pos2: self.pos1,
            aabb2: self.aabb1,
            threshold: self.threshold,
        }
    }

    /// The position of the second body relative to the first one.
    #[inline]
    pub fn pos12(&self) -> Isometry<Real> {
        self.pos1.inv_mul(&self.pos2)
    }

    /// The positions of both bodies in a frame with the orientation of the world and its
    /// origin at the position of the first body.
    ///
    /// Contact generators work in this frame, so that shapes caching data rotated in
    /// world-space can use it without any further rotation.
    pub fn shifted_positions(&self) -> (Isometry<Real>, Isometry<Real>) {
        let shift = self.pos2.translation.vector - self.pos1.translation.vector;
        (
            Isometry::from_parts(Translation::identity(), self.pos1.rotation),
            Isometry::from_parts(shift.into(), self.pos2.rotation),
        )
    }
}
