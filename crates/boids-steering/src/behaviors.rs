//! The four classic steering behaviors as pure functions.
//!
//! Each returns a delta to add to the boid's heading before renormalizing
//! with [`blend`].  Alignment, cohesion and environment return a *unit*
//! target direction (or zero), which the caller scales by the matching
//! strength; separation returns an already-weighted push.  A zero vector
//! always means "no contribution".
//!
//! Inverse-square weights use `strength / (d² + ε)` with
//! `SteeringConfig::softening_epsilon` as ε.

use tracing::warn;

use boids_core::{SteeringConfig, Vec3};
use boids_flock::Boid;
use boids_spatial::{BoundaryDistances, Neighbor};

#[inline]
fn inverse_square(strength: f32, distance: f32, epsilon: f32) -> f32 {
    strength / (distance * distance + epsilon)
}

/// Direction that turns the boid away from every face closer than
/// `environment_trigger`.
///
/// The wall push points back along `-(x, 0, z)`, the floor pushes up and
/// the ceiling pushes down, each weighted by inverse square distance.  The
/// current heading is then subtracted so the result steers *toward* the
/// safe direction instead of merely adding to the old one.
///
/// A heading exactly antiparallel to the combined push (say `-Y` on the
/// floor) yields a target along that same axis, so the boid never turns and
/// keeps flying through the face.
pub fn environment_target(
    boid:      &Boid,
    distances: &BoundaryDistances,
    config:    &SteeringConfig,
) -> Vec3 {
    let trigger = config.environment_trigger;
    let weight = |d: f32| inverse_square(config.environment_strength, d, config.softening_epsilon);
    let mut target = Vec3::ZERO;

    if distances.wall < trigger {
        let s = weight(distances.wall);
        target += Vec3::new(-boid.position.x * s, 0.0, -boid.position.z * s);
    }
    if distances.floor < trigger {
        target += Vec3::Y * weight(distances.floor);
    }
    if distances.ceiling < trigger {
        target -= Vec3::Y * weight(distances.ceiling);
    }

    target -= boid.direction;
    target.try_normalize(config.min_heading_length).unwrap_or(Vec3::ZERO)
}

/// Unit direction from the boid's heading toward the neighbors' mean
/// heading.
pub fn alignment_target(
    boid:      &Boid,
    neighbors: &[Neighbor],
    previous:  &[Boid],
    config:    &SteeringConfig,
) -> Vec3 {
    if neighbors.is_empty() {
        return Vec3::ZERO;
    }
    let sum = neighbors
        .iter()
        .fold(Vec3::ZERO, |acc, n| acc + previous[n.index.index()].direction);
    let mean = sum / neighbors.len() as f32;
    (mean - boid.direction)
        .try_normalize(config.min_heading_length)
        .unwrap_or(Vec3::ZERO)
}

/// Push away from the single nearest neighbor when it is closer than
/// `separation_trigger`.
///
/// Only `neighbors[0]` is considered.  A neighbor at exactly the boid's
/// position has no defined "away" and contributes nothing.
pub fn separation_push(
    boid:      &Boid,
    neighbors: &[Neighbor],
    previous:  &[Boid],
    config:    &SteeringConfig,
) -> Vec3 {
    let Some(nearest) = neighbors.first() else {
        return Vec3::ZERO;
    };
    if nearest.distance >= config.separation_trigger {
        return Vec3::ZERO;
    }
    let other = previous[nearest.index.index()].position;
    let Some(away) = (boid.position - other).try_normalize(0.0) else {
        return Vec3::ZERO;
    };
    away * inverse_square(config.separation_strength, nearest.distance, config.softening_epsilon)
}

/// Unit direction from the boid toward the inverse-square weighted centroid
/// of its neighbors.
pub fn cohesion_target(
    boid:      &Boid,
    neighbors: &[Neighbor],
    previous:  &[Boid],
    config:    &SteeringConfig,
) -> Vec3 {
    let mut total = 0.0f32;
    let mut weighted = Vec3::ZERO;
    for n in neighbors {
        let w = inverse_square(config.cohesion_strength, n.distance, config.softening_epsilon);
        weighted += previous[n.index.index()].position * w;
        total += w;
    }
    if total <= 0.0 {
        return Vec3::ZERO;
    }
    (weighted / total - boid.position)
        .try_normalize(config.min_heading_length)
        .unwrap_or(Vec3::ZERO)
}

/// Add `delta` to a unit `heading` and renormalize.
///
/// A zero `delta` returns `heading` untouched.  If the sum collapses below
/// `min_length` the old heading is kept and a warning is logged; the flock
/// never sees a NaN direction.
pub fn blend(heading: Vec3, delta: Vec3, min_length: f32) -> Vec3 {
    if delta.is_zero() {
        return heading;
    }
    match (heading + delta).try_normalize(min_length) {
        Some(h) => h,
        None => {
            warn!(%heading, %delta, "steering delta cancelled heading; keeping previous heading");
            heading
        }
    }
}
