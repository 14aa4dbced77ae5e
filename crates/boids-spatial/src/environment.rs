//! Distance from a point to each face of the enclosure.
//!
//! The enclosure is implicit: a cylinder of `wall_radius` around the Y axis,
//! a floor plane at `floor_y`, a ceiling plane at `ceiling_y`.  Distances are
//! signed: a point outside a face has a negative distance to it, which
//! always satisfies the trigger.

use boids_core::{Enclosure, Vec3};

/// Per-face distances for one point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryDistances {
    /// `wall_radius - sqrt(x² + z²)`.
    pub wall:    f32,
    /// `y - floor_y`.
    pub floor:   f32,
    /// `ceiling_y - y`.
    pub ceiling: f32,
}

impl BoundaryDistances {
    /// The nearest face.
    #[inline]
    pub fn min(&self) -> f32 {
        self.wall.min(self.floor).min(self.ceiling)
    }
}

/// Answers "how close is this point to the enclosure?" and the binary
/// environment-mode question derived from it.
#[derive(Copy, Clone, Debug)]
pub struct EnvironmentOracle {
    enclosure: Enclosure,
    trigger:   f32,
}

impl EnvironmentOracle {
    /// `trigger` is the distance below which a boid leaves flock mode.
    pub fn new(enclosure: Enclosure, trigger: f32) -> Self {
        Self { enclosure, trigger }
    }

    pub fn enclosure(&self) -> &Enclosure {
        &self.enclosure
    }

    pub fn trigger_distance(&self) -> f32 {
        self.trigger
    }

    pub fn distances(&self, position: Vec3) -> BoundaryDistances {
        let radial = (position.x * position.x + position.z * position.z).sqrt();
        BoundaryDistances {
            wall:    self.enclosure.wall_radius - radial,
            floor:   position.y - self.enclosure.floor_y,
            ceiling: self.enclosure.ceiling_y - position.y,
        }
    }

    #[inline]
    pub fn min_distance_to_boundary(&self, position: Vec3) -> f32 {
        self.distances(position).min()
    }

    /// `true` iff the nearest face is strictly closer than the trigger.
    #[inline]
    pub fn trigger(&self, position: Vec3) -> bool {
        self.min_distance_to_boundary(position) < self.trigger
    }
}
