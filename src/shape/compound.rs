//! Rigid unions of simpler shapes.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Real};
use crate::partitioning::AabbTree;
use crate::shape::Shape;

/// A fixed union of shapes, each placed relative to the compound by its own isometry.
///
/// This is how concave bodies are built from convex parts. Parts are indexed by their
/// position in the list given to [`Compound::new`], and contacts report that index as
/// their subshape.
#[derive(Clone, Debug)]
pub struct Compound {
    shapes: Vec<(Isometry<Real>, Shape)>,
    tree: AabbTree,
    aabbs: Vec<Aabb>,
    aabb: Aabb,
}

impl Compound {
    /// Creates a compound from its parts.
    ///
    /// # Panics
    /// If `shapes` is empty, or if one of its parts is itself a compound.
    pub fn new(shapes: Vec<(Isometry<Real>, Shape)>) -> Compound {
        assert!(!shapes.is_empty(), "a compound needs at least one part");
        let mut aabbs = Vec::with_capacity(shapes.len());
        let mut aabb = Aabb::new_invalid();

        for (part_pos, part) in &shapes {
            assert!(!part.is_composite(), "compounds cannot be nested");
            let part_aabb = part.compute_aabb(part_pos);
            aabb.merge(&part_aabb);
            aabbs.push(part_aabb);
        }

        let tree = AabbTree::new(aabbs.iter().copied());

        Compound {
            shapes,
            tree,
            aabbs,
            aabb,
        }
    }

    /// The parts of this compound with their positions relative to it.
    #[inline]
    pub fn shapes(&self) -> &[(Isometry<Real>, Shape)] {
        &self.shapes[..]
    }

    /// The AABB of all the parts, in the local frame of this compound.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The AABB of each part, in the local frame of this compound.
    #[inline]
    pub fn aabbs(&self) -> &[Aabb] {
        &self.aabbs[..]
    }

    /// Calls `f` with the index of every part with an AABB intersecting `aabb`, given in the
    /// local-space of this compound, in increasing order.
    pub fn visit_parts(&self, aabb: &Aabb, f: impl FnMut(u32)) {
        if self.aabb.intersects(aabb) {
            self.tree.intersecting(aabb, f)
        }
    }
}
