use rstar::{Envelope, RTree, RTreeObject, SelectionFunction, AABB};

use crate::bounding_volume::Aabb;
use crate::math::Real;

#[derive(Clone, Debug)]
struct IndexedAabb {
    index: u32,
    envelope: AABB<[Real; 3]>,
}

impl RTreeObject for IndexedAabb {
    type Envelope = AABB<[Real; 3]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

struct IntersectingAabb(AABB<[Real; 3]>);

impl SelectionFunction<IndexedAabb> for IntersectingAabb {
    fn should_unpack_parent(&self, envelope: &AABB<[Real; 3]>) -> bool {
        self.0.intersects(envelope)
    }

    fn should_unpack_leaf(&self, leaf: &IndexedAabb) -> bool {
        self.0.intersects(&leaf.envelope)
    }
}

/// A static tree of indexed AABBs, answering which of them intersect a query AABB.
///
/// This is the acceleration structure of triangle meshes, paged meshes and compounds.
#[derive(Clone, Debug)]
pub struct AabbTree {
    tree: RTree<IndexedAabb>,
}

impl AabbTree {
    /// Builds a tree where the `i`-th AABB yielded by `aabbs` gets the index `i`.
    pub fn new(aabbs: impl IntoIterator<Item = Aabb>) -> Self {
        let leaves = aabbs
            .into_iter()
            .enumerate()
            .map(|(i, aabb)| IndexedAabb {
                index: i as u32,
                envelope: aabb.to_envelope(),
            })
            .collect();

        AabbTree {
            tree: RTree::bulk_load(leaves),
        }
    }

    /// The number of AABBs in this tree.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Is this tree empty?
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Calls `f` with the index of every AABB intersecting `aabb`, in increasing index order.
    pub fn intersecting(&self, aabb: &Aabb, mut f: impl FnMut(u32)) {
        let mut hits: Vec<u32> = self
            .tree
            .locate_with_selection_function(IntersectingAabb(aabb.to_envelope()))
            .map(|leaf| leaf.index)
            .collect();
        hits.sort_unstable();
        hits.into_iter().for_each(&mut f);
    }
}
