use crate::math::{Point, Real, Vector};
use crate::shape::FeatureId;

/// Which body the normal of a contact is attached to.
///
/// When the normal is derived from a face of one body, a constraint solver may keep it
/// attached to that body as it moves.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NormalAttachment {
    /// The normal isn’t attached to either body.
    #[default]
    None,
    /// The normal is the normal of a face of the first body.
    NormalOn1,
    /// The normal is the normal of a face of the second body.
    NormalOn2,
}

impl NormalAttachment {
    /// The attachment seen from the other body.
    #[inline]
    #[must_use]
    pub fn swapped(self) -> Self {
        match self {
            NormalAttachment::None => NormalAttachment::None,
            NormalAttachment::NormalOn1 => NormalAttachment::NormalOn2,
            NormalAttachment::NormalOn2 => NormalAttachment::NormalOn1,
        }
    }
}

/// A contact point between two bodies.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactPoint {
    /// The contact point on the first body, in its local frame.
    pub local_p1: Point<Real>,
    /// The contact point on the second body, in its local frame.
    pub local_p2: Point<Real>,
    /// The world-space unit contact normal, pointing from the second body toward the first.
    pub normal: Vector<Real>,
    /// The signed distance between the two contact points along the normal.
    ///
    /// It is negative when the bodies are penetrating.
    pub dist: Real,
    /// The feature of the first body involved in this contact.
    pub fid1: FeatureId,
    /// The feature of the second body involved in this contact.
    pub fid2: FeatureId,
    /// The part of a compound, or triangle or page of a mesh, of the first body.
    ///
    /// This is `0` for simple shapes.
    pub subshape1: u32,
    /// The part of a compound, or triangle or page of a mesh, of the second body.
    pub subshape2: u32,
    /// Which body the normal is attached to.
    pub normal_attachment: NormalAttachment,
}

impl ContactPoint {
    /// This contact point seen from the second body.
    ///
    /// The per-body data are exchanged and the normal is negated so that it keeps pointing
    /// from the second body toward the first one. The distance is unchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        ContactPoint {
            local_p1: self.local_p2,
            local_p2: self.local_p1,
            normal: -self.normal,
            dist: self.dist,
            fid1: self.fid2,
            fid2: self.fid1,
            subshape1: self.subshape2,
            subshape2: self.subshape1,
            normal_attachment: self.normal_attachment.swapped(),
        }
    }
}
