//! R-tree neighbor index.
//!
//! An R-tree (via `rstar`) over the `previous` positions, bulk-loaded once
//! per frame.  A k-nearest query walks the tree's nearest-first iterator and
//! keeps collecting past the k-th hit while distances still tie, so the
//! final `(distance, index)` ordering matches [`LinearScan`] exactly even
//! when several boids sit at the cut-off distance.
//!
//! [`LinearScan`]: crate::LinearScan

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use boids_core::{BoidId, Vec3};
use boids_flock::Boid;

use crate::neighbors::{Neighbor, NeighborIndex, neighbor_order};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a boid's `[x, y, z]` position and its slot.
#[derive(Clone)]
struct BoidEntry {
    point: [f32; 3],
    id:    BoidId,
}

impl RTreeObject for BoidEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for BoidEntry {
    /// Same arithmetic as `Vec3::distance_squared`, so `sqrt` of this equals
    /// the distance `LinearScan` reports.
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        Vec3::from(*point).distance_squared(Vec3::from(self.point))
    }
}

// ── RTreeIndex ────────────────────────────────────────────────────────────────

/// Neighbor index backed by an `rstar` R-tree.
///
/// Worth it once the flock grows into the hundreds; below that the rebuild
/// cost outweighs the faster queries.
#[derive(Default)]
pub struct RTreeIndex {
    tree: RTree<BoidEntry>,
}

impl RTreeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of boids currently indexed.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl NeighborIndex for RTreeIndex {
    fn rebuild(&mut self, previous: &[Boid]) {
        let entries: Vec<BoidEntry> = previous
            .iter()
            .enumerate()
            .map(|(i, b)| BoidEntry {
                point: b.position.to_array(),
                id:    BoidId(i as u32),
            })
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    fn find_neighbors(
        &self,
        subject:   BoidId,
        position:  Vec3,
        _previous: &[Boid],
        k:         usize,
        out:       &mut Vec<Neighbor>,
    ) {
        out.clear();
        let query = position.to_array();
        let mut cutoff = f32::NEG_INFINITY;

        for entry in self.tree.nearest_neighbor_iter(&query) {
            if entry.id == subject {
                continue;
            }
            let distance = entry.distance_2(&query).sqrt();
            if out.len() >= k && distance > cutoff {
                break;
            }
            cutoff = cutoff.max(distance);
            out.push(Neighbor { distance, index: entry.id });
        }

        out.sort_by(neighbor_order);
        out.truncate(k);
    }
}
