//! Various unsorted geometrical and logical operators.

pub use self::closest_points::{closest_points_segment_segment, project_point_on_segment};
pub use self::consts::*;
pub use self::convex_hull2d::convex_hull2d_idx;
pub use self::point_in_poly2d::point_in_convex_poly2d;
pub use self::segments_intersection::segments_intersection2d;
pub use self::sorted_pair::SortedPair;
pub use self::wops::{lerp, orthonormal_basis};

mod closest_points;
mod consts;
mod convex_hull2d;
mod point_in_poly2d;
mod segments_intersection;
mod sorted_pair;
mod wops;
