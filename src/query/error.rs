use crate::shape::ShapeType;

/// Error indicating that contact generation is not supported between two shape types.
///
/// Some pairs of shapes, like two planes or two triangle meshes, are never expected to
/// collide because they can only be attached to static bodies. No contact generator exists
/// for them, and asking for their contacts is reported with this error by
/// [`try_resolve`](crate::query::try_resolve). The infallible
/// [`resolve`](crate::query::resolve) returns an empty result instead.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("contact generation is not supported between {shape1:?} and {shape2:?}")]
pub struct Unsupported {
    /// The type of the first shape of the pair.
    pub shape1: ShapeType,
    /// The type of the second shape of the pair.
    pub shape2: ShapeType,
}
