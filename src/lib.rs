/*!
collide3d
========

**collide3d** is the narrow phase of a 3-dimensional rigid-body engine: given a
pair of shapes that a broad phase flagged as possibly overlapping, it computes
the contact points a constraint solver needs.

Every contact carries a pivot on each body (in the body's local frame), a unit
normal pointing from the second body toward the first, a signed distance
(negative when penetrating) and a feature id on each side so that a persistent
manifold can match points from one frame to the next.

The entry point is [`query::resolve`] which takes two [`shape::Shape`]s and a
[`query::CollisionContext`], and fills a bounded [`query::ContactResult`].
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![doc(html_root_url = "https://docs.rs/collide3d/0.1.0")]

#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!("the `f32` and `f64` features are mutually exclusive");

#[macro_use]
extern crate approx;
#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    use na::{
        Isometry3, Matrix3, Point2, Point3, Translation3, UnitQuaternion, UnitVector3, Vector2,
        Vector3,
    };

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub type Real = f64;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub type Real = f32;

    #[cfg(feature = "f64")]
    pub use core::f64::consts;
    #[cfg(feature = "f32")]
    pub use core::f32::consts;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point<N> = Point3<N>;

    /// The vector type.
    pub type Vector<N> = Vector3<N>;

    /// The unit vector type.
    pub type UnitVector<N> = UnitVector3<N>;

    /// The transformation matrix type.
    pub type Isometry<N> = Isometry3<N>;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub type Translation<N> = Translation3<N>;

    /// The angular inertia of a rigid body.
    pub type AngularInertia<N> = Matrix3<N>;

    /// A 2D point, used by the tangent-plane computations of the contact generators.
    pub type Point2d<N> = Point2<N>;

    /// A 2D vector, used by the tangent-plane computations of the contact generators.
    pub type Vector2d<N> = Vector2<N>;
}
