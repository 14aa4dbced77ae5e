//! Kinematic integration.

use boids_flock::Boid;

/// Advance `boid` one frame along its heading at constant `speed`.
///
/// There is no velocity or acceleration state: steering changes only the
/// heading, never the speed.
#[inline]
pub fn integrate(boid: Boid, speed: f32) -> Boid {
    Boid {
        position:  boid.position + boid.direction * speed,
        direction: boid.direction,
    }
}
