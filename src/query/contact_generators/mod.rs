//! Contact generators specialized for each pair of shape kinds.

pub use self::contact_compound_shape::contact_compound_shape;
pub use self::contact_convex_convex::{contact_convex_convex, contacts_from_support_features};
pub use self::contact_convex_plane::contact_convex_plane;
pub use self::contact_convex_trimesh::{contact_convex_paged_trimesh, contact_convex_trimesh};
pub use self::contact_sphere_sphere::contact_sphere_sphere;

mod contact_compound_shape;
mod contact_convex_convex;
mod contact_convex_plane;
mod contact_convex_trimesh;
mod contact_sphere_sphere;
