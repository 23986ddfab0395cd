//! Spatial partitioning tools.

pub use self::aabb_tree::AabbTree;

mod aabb_tree;
