use arrayvec::ArrayVec;

use crate::math::{Point, Real};
use crate::query::ContactPoint;
use crate::utils::{CONTACT_MERGE_DISTANCE, MAX_CONTACTS};

// The eviction heuristic compares the areas spanned by four points.
static_assertions::const_assert_eq!(MAX_CONTACTS, 4);

/// The contact points generated for one pair of shapes.
///
/// Points are added with [`ContactResult::maybe_add_point`], which keeps at most
/// [`MAX_CONTACTS`] points and never stores two points describing the same contact.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactResult {
    points: ArrayVec<ContactPoint, MAX_CONTACTS>,
}

impl ContactResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// The contact points of this result.
    #[inline]
    pub fn points(&self) -> &[ContactPoint] {
        &self.points
    }

    /// Iterates through the contact points of this result.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ContactPoint> {
        self.points.iter()
    }

    /// The number of contact points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this result contain no contact point?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes every contact point.
    pub fn clear(&mut self) {
        self.points.clear()
    }

    /// The contact point with the smallest distance.
    pub fn deepest(&self) -> Option<&ContactPoint> {
        self.points
            .iter()
            .min_by(|a, b| a.dist.total_cmp(&b.dist))
    }

    /// Exchanges the roles of both bodies in every contact point.
    pub fn swap(&mut self) {
        for pt in &mut self.points {
            *pt = pt.swapped();
        }
    }

    /// Adds a contact point, unless it duplicates a point already stored or is the least
    /// useful one once the result is full.
    ///
    /// A point duplicates a stored one if they have the same known features on the same
    /// subshapes, or if both their contact points are within [`CONTACT_MERGE_DISTANCE`]. All
    /// the stored duplicates of a point collapse into a single slot, which keeps the deepest
    /// of them and the new point.
    ///
    /// Once [`MAX_CONTACTS`] points are stored, the deepest point is always kept, and the point
    /// dropped is the one whose removal leaves the remaining points covering the largest area.
    ///
    /// Returns `true` if the point was stored.
    pub fn maybe_add_point(&mut self, point: ContactPoint) -> bool {
        let duplicates: ArrayVec<usize, MAX_CONTACTS> = (0..self.points.len())
            .filter(|i| is_duplicate(&self.points[*i], &point))
            .collect();

        if let Some(&slot) = duplicates.first() {
            let deepest = duplicates
                .iter()
                .copied()
                .min_by(|i, j| self.points[*i].dist.total_cmp(&self.points[*j].dist))
                .unwrap_or(slot);
            let stored = point.dist <= self.points[deepest].dist;

            self.points[slot] = if stored { point } else { self.points[deepest] };

            for i in duplicates[1..].iter().rev() {
                let _ = self.points.remove(*i);
            }

            return stored;
        }

        if !self.points.is_full() {
            self.points.push(point);
            return true;
        }

        let evicted = {
            let mut candidates: ArrayVec<&ContactPoint, { MAX_CONTACTS + 1 }> =
                self.points.iter().collect();
            candidates.push(&point);

            let deepest = (0..candidates.len())
                .min_by(|i, j| candidates[*i].dist.total_cmp(&candidates[*j].dist))
                .unwrap_or(0);

            let mut evicted = MAX_CONTACTS;
            let mut best_area = -Real::MAX;

            for i in (0..candidates.len()).filter(|i| *i != deepest) {
                let remaining: ArrayVec<Point<Real>, { MAX_CONTACTS + 1 }> = candidates
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, pt)| pt.local_p1)
                    .collect();
                let area = quad_area(&remaining);

                if area > best_area {
                    best_area = area;
                    evicted = i;
                }
            }

            evicted
        };

        if evicted == MAX_CONTACTS {
            false
        } else {
            self.points[evicted] = point;
            true
        }
    }
}

impl<'a> IntoIterator for &'a ContactResult {
    type Item = &'a ContactPoint;
    type IntoIter = std::slice::Iter<'a, ContactPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn is_duplicate(a: &ContactPoint, b: &ContactPoint) -> bool {
    let same_features = a.fid1.is_known()
        && a.fid2.is_known()
        && a.fid1 == b.fid1
        && a.fid2 == b.fid2
        && a.subshape1 == b.subshape1
        && a.subshape2 == b.subshape2;
    let merge_dist2 = CONTACT_MERGE_DISTANCE * CONTACT_MERGE_DISTANCE;

    same_features
        || (na::distance_squared(&a.local_p1, &b.local_p1) <= merge_dist2
            && na::distance_squared(&a.local_p2, &b.local_p2) <= merge_dist2)
}

// Twice the area of the quadrilateral with the given four corners, in any order: the
// largest cross product between the diagonals of the three possible quadrilaterals.
fn quad_area(pts: &[Point<Real>]) -> Real {
    let [a, b, c, d] = [pts[0], pts[1], pts[2], pts[3]];
    [(a, c, b, d), (a, b, c, d), (a, d, b, c)]
        .iter()
        .map(|(p1, p2, q1, q2)| (p2 - p1).cross(&(q2 - q1)).norm())
        .fold(0.0, Real::max)
}
