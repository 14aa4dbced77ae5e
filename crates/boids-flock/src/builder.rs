//! Fluent builder for constructing a [`Flock`].
//!
//! # Usage
//!
//! ```rust
//! use boids_core::SimRng;
//! use boids_flock::FlockBuilder;
//!
//! let mut rng = SimRng::new(42);
//! let flock = FlockBuilder::new(40).initialize(&mut rng);
//!
//! assert_eq!(flock.len(), 40);
//! assert_eq!(flock.current(), flock.previous());
//! ```

use boids_core::{SimRng, SpawnRegion, Vec3};
use tracing::debug;

use crate::{Boid, Flock};

/// Fluent builder for [`Flock`].
pub struct FlockBuilder {
    count: usize,
    spawn: SpawnRegion,
}

impl FlockBuilder {
    /// Create a builder for `count` boids using the default spawn region.
    pub fn new(count: usize) -> Self {
        Self { count, spawn: SpawnRegion::default() }
    }

    /// Override the box the flock is scattered in.
    pub fn spawn_region(mut self, spawn: SpawnRegion) -> Self {
        self.spawn = spawn;
        self
    }

    /// Scatter `count` boids with random positions and headings.
    ///
    /// - X and Z are uniform in `[-half_extent_xz, half_extent_xz]`.
    /// - Y is a whole number uniform in `min_y..=max_y`.
    /// - Each heading component is uniform in `[0, 1)`; a heading too short
    ///   to normalize is redrawn.
    ///
    /// Call exactly once before the first frame.  Both buffers hold the
    /// same initial state on return.
    pub fn initialize(self, rng: &mut SimRng) -> Flock {
        let h = self.spawn.half_extent_xz;
        let boids: Vec<Boid> = (0..self.count)
            .map(|_| {
                let position = Vec3::new(
                    rng.gen_range(-h..=h),
                    rng.gen_range(self.spawn.min_y..=self.spawn.max_y) as f32,
                    rng.gen_range(-h..=h),
                );
                Boid { position, direction: random_heading(rng) }
            })
            .collect();

        debug!(count = self.count, half_extent_xz = h, "flock initialized");
        Flock::from_current(boids)
    }

    /// Build a flock from explicitly placed boids, ignoring `count` and the
    /// spawn region.
    pub fn from_boids(boids: Vec<Boid>) -> Flock {
        Flock::from_current(boids)
    }
}

fn random_heading(rng: &mut SimRng) -> Vec3 {
    loop {
        let raw = Vec3::new(rng.random(), rng.random(), rng.random());
        if let Some(unit) = raw.try_normalize(f32::EPSILON) {
            return unit;
        }
    }
}
