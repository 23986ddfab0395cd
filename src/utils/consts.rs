//! Tolerances shared by the contact generators.

use crate::math::Real;

/// Maximum number of contact points kept per shape pair.
pub const MAX_CONTACTS: usize = 4;

/// Projection tolerance used to decide which vertices belong to a support feature.
///
/// Two vertices whose projections on the contact axis differ by less than this value are
/// considered part of the same face or edge.
pub const SUPPORT_FEATURE_TOLERANCE: Real = 0.01;

/// Distance under which two contact pivots are considered to be the same contact point.
pub const CONTACT_MERGE_DISTANCE: Real = 0.02;

/// Number of vertices of the polygon approximating a cylinder cap.
pub const CYLINDER_DISC_VERTICES: usize = 12;

