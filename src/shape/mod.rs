//! Shapes supported by collide3d.

pub use self::capsule::Capsule;
pub use self::compound::Compound;
pub use self::convex_mesh::{ConvexMesh, ConvexMeshError};
pub use self::convex_polyhedron::{ConvexPolyhedron, RotatedConvexMesh};
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::feature_id::FeatureId;
pub use self::normal_cone::{NormalCone, TriangleNormalCones};
pub use self::paged_trimesh::{MeshPage, PagedTriMesh};
pub use self::plane::Plane;
pub use self::polygonal_feature::PolygonalFeature;
pub use self::polygonal_feature_map::PolygonalFeatureMap;
#[doc(inline)]
pub use self::shape::{ConvexShapeRef, Shape, ShapeType};
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshError, NO_TRIANGLE};

mod capsule;
mod compound;
mod convex_mesh;
mod convex_polyhedron;
mod cuboid;
mod cylinder;
mod feature_id;
mod normal_cone;
mod paged_trimesh;
mod plane;
mod polygonal_feature;
mod polygonal_feature_map;
mod shape;
mod sphere;
mod triangle;
mod trimesh;
