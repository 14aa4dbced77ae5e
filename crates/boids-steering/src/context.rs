//! Read-only frame state passed to every steering call.

use boids_core::{Enclosure, Frame, SteeringConfig};
use boids_flock::Boid;
use boids_spatial::{BoundaryDistances, Neighbor};

/// A read-only snapshot of the frame, shared by every boid update.
///
/// Built once per frame by boids-sim.  `previous` is borrowed from the
/// flock's settled buffer; nothing can write to it while a `FrameContext`
/// is alive.
#[derive(Copy, Clone)]
pub struct FrameContext<'a> {
    /// The frame being computed.
    pub frame: Frame,

    /// Last frame's settled boids, indexed by `BoidId`.  Neighbor lookups
    /// resolve against this slice.
    pub previous: &'a [Boid],

    pub enclosure: &'a Enclosure,

    pub config: &'a SteeringConfig,
}

impl<'a> FrameContext<'a> {
    #[inline]
    pub fn new(
        frame:     Frame,
        previous:  &'a [Boid],
        enclosure: &'a Enclosure,
        config:    &'a SteeringConfig,
    ) -> Self {
        Self { frame, previous, enclosure, config }
    }
}

/// What a boid sensed this frame, tagged by mode.
#[derive(Copy, Clone, Debug)]
pub enum Perception<'a> {
    /// Distances to each face of the enclosure.
    Environment(BoundaryDistances),
    /// The K nearest neighbors, nearest first.
    Flock(&'a [Neighbor]),
}
