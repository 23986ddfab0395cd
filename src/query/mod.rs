//! Contact generation between pairs of shapes.
//!
//! The entry point is [`resolve`], which computes the contacts between two [`Shape`]s given a
//! [`CollisionContext`]. It selects a contact generator from the types of both shapes with
//! [`pair_algorithm`]: either a generator exists for the pair in this order, or one exists for
//! the reversed pair and its contacts are swapped, or the pair is not supported at all.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the contact generators of specific
//! pairs of shapes. They have the form `contact_[shape1]_[shape2]()`, where `convex` stands
//! for any shape implementing [`PolygonalFeatureMap`].
//!
//! [`Shape`]: crate::shape::Shape
//! [`PolygonalFeatureMap`]: crate::shape::PolygonalFeatureMap

pub use self::contact::{ContactPoint, NormalAttachment};
pub use self::contact_result::ContactResult;
pub use self::context::CollisionContext;
pub use self::dispatcher::{pair_algorithm, resolve, try_resolve, PairAlgorithm};
pub use self::error::Unsupported;

mod contact;
mod contact_generators;
mod contact_result;
mod context;
mod dispatcher;
mod error;
pub mod sat;

/// Contact generators dedicated to specific pairs of shapes.
pub mod details {
    pub use super::contact_generators::*;
}
