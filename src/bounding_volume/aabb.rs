//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real, Vector};

/// An Axis Aligned Bounding Box.
///
/// Bodies hand their world-space AABBs to the narrow phase through the
/// [`CollisionContext`](crate::query::CollisionContext), and composite shapes use local-space
/// AABBs to cull the parts or triangles a query can reach.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates an AABB from its two extreme corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// An empty AABB, with `mins` greater than `maxs`.
    ///
    /// Merging anything into it yields that thing. It intersects nothing.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// An `Aabb` large enough to contain anything a simulation could reasonably reach.
    ///
    /// Used for unbounded shapes like planes. Its extents are finite so that it can still be
    /// transformed and loosened without producing NaNs.
    #[inline]
    pub fn new_huge() -> Self {
        let extent = Real::MAX / 8.0;
        Self::new(Vector::repeat(-extent).into(), Vector::repeat(extent).into())
    }

    /// Creates a new `Aabb` from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new `Aabb` from a set of points.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Aabb::new_invalid();

        for pt in pts {
            result.take_point(*pt);
        }

        result
    }

    /// Does this AABB cover at least one point?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// The half extents of this `Aabb`.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() / 2.0
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this `Aabb`.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// The eight corners of this `Aabb`.
    ///
    /// The first four lie on the `mins.z` face and the last four on the
    /// `maxs.z` face, both counter-clockwise when seen from `+z`.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// Computes the `Aabb` bounding `self` transformed by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let ls_center = self.center();
        let center = m * ls_center;
        let rot = m.rotation.to_rotation_matrix().into_inner().abs();
        let ws_half_extents = rot * self.half_extents();

        Aabb::new(center + (-ws_half_extents), center + ws_half_extents)
    }

    pub(crate) fn to_envelope(self) -> rstar::AABB<[Real; 3]> {
        rstar::AABB::from_corners(self.mins.coords.into(), self.maxs.coords.into())
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosened(&self, margin: Real) -> Aabb {
        assert!(margin >= 0.0, "an AABB cannot be loosened by a negative margin");
        let margin = Vector::repeat(margin);
        Aabb::new(self.mins - margin, self.maxs + margin)
    }
}
