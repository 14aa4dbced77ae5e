//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use boids_core::{BoidId, Frame, SimConfig, SimRng};
use boids_flock::{Boid, FlockBuilder};
use boids_spatial::{EnvironmentOracle, LinearScan, NeighborIndex};
use boids_steering::{ClassicSteering, SteeringMode, SteeringModel};

use crate::{Sim, SimError, SimResult};

/// How far an explicit boid's heading may stray from unit length.
const UNIT_TOLERANCE: f32 = 1e-4;

/// Fluent builder for [`Sim<S, N>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                   |
/// |--------------------------|-------------------------------------------|
/// | `.steering(s)`           | [`ClassicSteering`]                       |
/// | `.neighbor_index(n)`     | [`LinearScan`]                            |
/// | `.boids(v)`              | Seeded scatter over `config.spawn`        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .neighbor_index(RTreeIndex::new())
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<S: SteeringModel = ClassicSteering, N: NeighborIndex = LinearScan> {
    config:   SimConfig,
    steering: S,
    index:    N,
    boids:    Option<Vec<Boid>>,
}

impl SimBuilder {
    /// Start from a configuration with the default steering model and
    /// neighbor index.
    pub fn new(config: SimConfig) -> Self {
        Self { config, steering: ClassicSteering, index: LinearScan, boids: None }
    }
}

impl<S: SteeringModel, N: NeighborIndex> SimBuilder<S, N> {
    /// Replace the steering model.
    pub fn steering<S2: SteeringModel>(self, steering: S2) -> SimBuilder<S2, N> {
        SimBuilder { config: self.config, steering, index: self.index, boids: self.boids }
    }

    /// Replace the neighbor index.
    pub fn neighbor_index<N2: NeighborIndex>(self, index: N2) -> SimBuilder<S, N2> {
        SimBuilder { config: self.config, steering: self.steering, index, boids: self.boids }
    }

    /// Place the flock explicitly instead of scattering it.
    ///
    /// Must be exactly `config.boid_count` long, with finite positions and
    /// unit headings; `build` rejects anything else.
    pub fn boids(mut self, boids: Vec<Boid>) -> Self {
        self.boids = Some(boids);
        self
    }

    /// Validate the configuration, initialize the flock once, and return a
    /// ready-to-run [`Sim`] at frame zero.
    pub fn build(self) -> SimResult<Sim<S, N>> {
        self.config.validate()?;
        let count = self.config.boid_count;

        let flock = match self.boids {
            Some(boids) => {
                if boids.len() != count {
                    return Err(SimError::BoidCountMismatch { expected: count, got: boids.len() });
                }
                check_boids(&boids)?;
                FlockBuilder::from_boids(boids)
            }
            None => FlockBuilder::new(count)
                .spawn_region(self.config.spawn)
                .initialize(&mut SimRng::new(self.config.seed)),
        };

        let oracle = EnvironmentOracle::new(
            self.config.enclosure,
            self.config.steering.environment_trigger,
        );

        info!(
            boids = count,
            seed = self.config.seed,
            neighborhood = self.config.steering.neighborhood_size,
            "simulation built"
        );

        Ok(Sim {
            frame:    Frame::ZERO,
            flock,
            steering: self.steering,
            index:    self.index,
            oracle,
            modes:    vec![SteeringMode::default(); count],
            config:   self.config,
        })
    }
}

fn check_boids(boids: &[Boid]) -> SimResult<()> {
    for (slot, b) in boids.iter().enumerate() {
        let unit = (b.direction.length() - 1.0).abs() <= UNIT_TOLERANCE;
        if !b.position.is_finite() || !b.direction.is_finite() || !unit {
            return Err(SimError::InvalidBoid {
                id:        BoidId(slot as u32),
                position:  b.position,
                direction: b.direction,
            });
        }
    }
    Ok(())
}
