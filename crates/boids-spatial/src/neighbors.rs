//! Nearest-neighbor records, the index trait, and the exhaustive scan.
//!
//! # Ordering contract
//!
//! Every [`NeighborIndex`] returns exactly `k` records (for `k < N`) sorted
//! by ascending distance, ties broken by ascending slot index, with the
//! subject excluded by identity rather than by its sorted position.  Two
//! boids sharing a point therefore still see each other as neighbors at
//! distance zero, and the subject never appears in its own neighborhood.
//!
//! Implementations must agree bit-for-bit: distances always come from
//! [`Vec3::distance`], so swapping the index never changes a trajectory.

use std::cmp::Ordering;

use boids_core::{BoidId, Vec3};
use boids_flock::Boid;

// ── Neighbor ──────────────────────────────────────────────────────────────────

/// One entry of a neighborhood: a slot in the `previous` buffer and its
/// distance from the subject.  Transient; recomputed every query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    pub distance: f32,
    pub index:    BoidId,
}

/// Ascending distance, then ascending index.
#[inline]
pub fn neighbor_order(a: &Neighbor, b: &Neighbor) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.index.cmp(&b.index))
}

// ── NeighborIndex trait ───────────────────────────────────────────────────────

/// Pluggable neighbor search over the `previous` buffer.
///
/// `boids-sim` calls [`rebuild`](Self::rebuild) once per frame, after the
/// previous frame was published, and then [`find_neighbors`](Self::find_neighbors)
/// once per boid in flock mode.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so queries can run on Rayon
/// workers during the parallel update pass.
pub trait NeighborIndex: Send + Sync {
    /// Refresh any acceleration structure from `previous`.
    fn rebuild(&mut self, previous: &[Boid]);

    /// Write the `k` nearest neighbors of `subject` (at `position`) into
    /// `out`, replacing its contents.
    fn find_neighbors(
        &self,
        subject:  BoidId,
        position: Vec3,
        previous: &[Boid],
        k:        usize,
        out:      &mut Vec<Neighbor>,
    );

    /// Allocating convenience wrapper around
    /// [`find_neighbors`](Self::find_neighbors).
    fn neighbors_of(
        &self,
        subject:  BoidId,
        position: Vec3,
        previous: &[Boid],
        k:        usize,
    ) -> Vec<Neighbor> {
        let mut out = Vec::with_capacity(k);
        self.find_neighbors(subject, position, previous, k, &mut out);
        out
    }
}

// ── LinearScan ────────────────────────────────────────────────────────────────

/// Exhaustive scan: distance to every boid, stable sort, take `k`.
///
/// O(N log N) per query, O(N² log N) per frame.  The right choice at the
/// tens-of-boids scale the simulation targets; no state to rebuild.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearScan;

impl NeighborIndex for LinearScan {
    fn rebuild(&mut self, _previous: &[Boid]) {}

    fn find_neighbors(
        &self,
        subject:  BoidId,
        position: Vec3,
        previous: &[Boid],
        k:        usize,
        out:      &mut Vec<Neighbor>,
    ) {
        debug_assert!(k < previous.len(), "neighborhood must exclude the subject");

        out.clear();
        out.extend(
            previous
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != subject.index())
                .map(|(i, other)| Neighbor {
                    distance: position.distance(other.position),
                    index:    BoidId(i as u32),
                }),
        );
        out.sort_by(neighbor_order);
        out.truncate(k);
    }
}
