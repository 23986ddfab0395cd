use crate::math::{Point, Real};

/// Operations shared by the bounding volumes used to cull contact queries.
pub trait BoundingVolume {
    /// The center of this volume.
    fn center(&self) -> Point<Real>;

    /// Does this volume overlap `other`? Touching volumes overlap.
    fn intersects(&self, other: &Self) -> bool;

    /// Is `other` entirely inside this volume?
    fn contains(&self, other: &Self) -> bool;

    /// Grows this volume in-place so that it also covers `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume covering both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// This volume enlarged by `margin` in every direction.
    ///
    /// The margin must not be negative.
    fn loosened(&self, margin: Real) -> Self;
}
