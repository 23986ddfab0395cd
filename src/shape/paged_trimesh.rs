//! Triangle meshes streamed in and out page by page.

use std::sync::Arc;

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::partitioning::AabbTree;
use crate::shape::TriMesh;

/// A page of a [`PagedTriMesh`].
#[derive(Clone, Debug)]
pub struct MeshPage {
    /// The region of space covered by this page, in the local frame of the paged mesh.
    pub aabb: Aabb,
    /// The geometry of this page, if it is currently loaded.
    pub mesh: Option<Arc<TriMesh>>,
}

/// A static triangle mesh split into a fixed set of pages that are loaded on demand.
///
/// Each page covers a fixed region of space and owns an independent [`TriMesh`] once it is
/// loaded. Pages that aren’t loaded generate no contact. Contacts generated by the page `i`
/// have their subshape index set to `i`.
#[derive(Clone, Debug)]
pub struct PagedTriMesh {
    pages: Vec<MeshPage>,
    tree: AabbTree,
}

impl PagedTriMesh {
    /// Creates a paged mesh with one unloaded page per region.
    pub fn new(page_aabbs: Vec<Aabb>) -> Self {
        let tree = AabbTree::new(page_aabbs.iter().copied());
        let pages = page_aabbs
            .into_iter()
            .map(|aabb| MeshPage { aabb, mesh: None })
            .collect();
        PagedTriMesh { pages, tree }
    }

    /// The pages of this mesh.
    #[inline]
    pub fn pages(&self) -> &[MeshPage] {
        &self.pages
    }

    /// The geometry of the `i`-th page, if it is loaded.
    #[inline]
    pub fn page(&self, i: u32) -> Option<&TriMesh> {
        self.pages.get(i as usize)?.mesh.as_deref()
    }

    /// Sets the geometry of the `i`-th page, returning the one it replaces.
    ///
    /// # Panics
    /// If `i` isn’t the index of a page.
    pub fn load_page(&mut self, i: u32, mesh: Arc<TriMesh>) -> Option<Arc<TriMesh>> {
        let page = &mut self.pages[i as usize];
        if !page.aabb.contains(&mesh.local_aabb()) {
            log::debug!("the geometry loaded in page {} exceeds its bounds", i);
        }
        page.mesh.replace(mesh)
    }

    /// Removes the geometry of the `i`-th page.
    ///
    /// # Panics
    /// If `i` isn’t the index of a page.
    pub fn unload_page(&mut self, i: u32) -> Option<Arc<TriMesh>> {
        self.pages[i as usize].mesh.take()
    }

    /// The AABB of the loaded pages, in the local frame of this mesh.
    ///
    /// This is an invalid AABB if no page is loaded.
    pub fn local_aabb(&self) -> Aabb {
        self.pages
            .iter()
            .filter(|page| page.mesh.is_some())
            .fold(Aabb::new_invalid(), |acc, page| acc.merged(&page.aabb))
    }

    /// Calls `f` with each loaded page intersecting `aabb`, in increasing page order.
    pub fn visit_pages(&self, aabb: &Aabb, mut f: impl FnMut(u32, &TriMesh)) {
        self.tree.intersecting(aabb, |i| match &self.pages[i as usize].mesh {
            Some(mesh) => f(i, mesh),
            None => log::trace!("skipping page {} which is not loaded", i),
        })
    }
}
