//! A steering model that never turns.

use boids_core::Vec3;
use boids_flock::Boid;

use crate::{FrameContext, Perception, SteeringModel};

/// A [`SteeringModel`] that returns the boid's current heading.
///
/// Useful in tests and for physics-only runs where boids should fly
/// straight lines.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopSteering;

impl SteeringModel for NoopSteering {
    fn steer(&self, boid: &Boid, _perception: Perception<'_>, _ctx: &FrameContext<'_>) -> Vec3 {
        boid.direction
    }
}
