//! The double-buffered flock store.
//!
//! # Why two buffers?
//!
//! Neighbor queries must see a world that is not moving underneath them.
//! `previous` is the fully settled result of the last frame and is only
//! ever overwritten wholesale by [`Flock::publish`].  `current` advances
//! slot by slot during the frame.  Reading neighbors from `previous` means
//! the order in which slots are updated never biases the result:
//!
//! ```ignore
//! // boids-sim frame loop (simplified):
//! let (previous, current) = flock.split_for_update();
//! for (i, boid) in current.iter_mut().enumerate() {
//!     *boid = advance(BoidId(i as u32), *boid, previous);
//! }
//! flock.publish();
//! ```

use boids_core::BoidId;

use crate::{Boid, Pose};

/// Fixed-size, insertion-ordered collection of all boids, held twice.
///
/// Both buffers always have the same length; that length never changes
/// after construction.  Create via [`FlockBuilder`][crate::FlockBuilder].
#[derive(Clone, Debug)]
pub struct Flock {
    current:  Vec<Boid>,
    previous: Vec<Boid>,
}

impl Flock {
    /// Wrap `boids` as the current state and publish it once so `previous`
    /// is valid before the first frame.
    pub(crate) fn from_current(boids: Vec<Boid>) -> Self {
        let previous = boids.clone();
        Self { current: boids, previous }
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// The state being advanced this frame; after a frame completes, the
    /// state renderers should draw.
    #[inline]
    pub fn current(&self) -> &[Boid] {
        &self.current
    }

    /// Last frame's settled state.  Read-only reference for neighbor queries.
    #[inline]
    pub fn previous(&self) -> &[Boid] {
        &self.previous
    }

    /// One boid from the current buffer.
    #[inline]
    pub fn get(&self, id: BoidId) -> Option<&Boid> {
        self.current.get(id.index())
    }

    /// Shared borrow of `previous` together with an exclusive borrow of
    /// `current`, for the per-frame update pass.
    #[inline]
    pub fn split_for_update(&mut self) -> (&[Boid], &mut [Boid]) {
        (&self.previous, &mut self.current)
    }

    /// Mutable access to the current buffer between frames (explicit
    /// placement in tests and host tooling).
    ///
    /// Changes become visible to neighbor queries only after the next
    /// [`publish`](Self::publish).
    pub fn current_mut(&mut self) -> &mut [Boid] {
        &mut self.current
    }

    /// Copy `current` into `previous` verbatim.
    pub fn publish(&mut self) {
        self.previous.copy_from_slice(&self.current);
    }

    /// Renderer view of the current buffer.
    pub fn poses(&self) -> impl ExactSizeIterator<Item = Pose> + '_ {
        self.current.iter().map(Boid::pose)
    }
}
