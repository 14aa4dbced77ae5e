//! Simulation configuration.
//!
//! # Design
//!
//! Configuration is plain data with `Default` values matching the reef
//! scene the flock was tuned for: a cylindrical tank of radius 10 whose
//! floor sits at Y = -1 and whose ceiling (the water surface) sits at
//! Y = 10.  Applications construct a `SimConfig` directly or, with the
//! `serde` feature, load a partial JSON document whose missing fields fall
//! back to these defaults.
//!
//! [`SimConfig::validate`] is called once by the simulation builder; nothing
//! downstream re-checks these invariants.

use crate::{BoidsError, BoidsResult};

// ── Enclosure ─────────────────────────────────────────────────────────────────

/// The boundary the flock lives in: a cylinder around the Y axis, closed by
/// a floor plane and a ceiling plane.
///
/// Supplied by the environment collaborator; the simulation only reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Enclosure {
    /// Radius of the cylindrical wall in the XZ plane.
    pub wall_radius: f32,
    /// Y coordinate of the ceiling.
    pub ceiling_y: f32,
    /// Y coordinate of the floor.
    pub floor_y: f32,
}

impl Default for Enclosure {
    fn default() -> Self {
        Self { wall_radius: 10.0, ceiling_y: 10.0, floor_y: -1.0 }
    }
}

// ── SpawnRegion ───────────────────────────────────────────────────────────────

/// Box used to scatter the flock at initialization.
///
/// X and Z are drawn uniformly from `[-half_extent_xz, half_extent_xz]`; Y is
/// drawn as a whole number from `min_y..=max_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnRegion {
    pub half_extent_xz: f32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self { half_extent_xz: 4.0, min_y: 1, max_y: 8 }
    }
}

// ── SteeringConfig ────────────────────────────────────────────────────────────

/// Thresholds and strengths of the four steering behaviors.
///
/// The inverse-square weights all use `softening_epsilon` in the
/// denominator.  Changing it changes the dynamics; keep it at the `1e-6`
/// order of magnitude for reproducible runs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SteeringConfig {
    /// Distance travelled per frame along the heading.
    pub speed: f32,
    /// Number of nearest neighbors (K) each boid considers.
    pub neighborhood_size: usize,
    /// Nearest-neighbor distance below which separation fires.
    pub separation_trigger: f32,
    /// Boundary distance below which a boid switches to environment mode.
    pub environment_trigger: f32,
    pub environment_strength: f32,
    pub separation_strength: f32,
    pub alignment_strength: f32,
    pub cohesion_strength: f32,
    /// Added to every squared distance before inverse-square weighting.
    pub softening_epsilon: f32,
    /// Headings shorter than this are treated as degenerate on normalize.
    pub min_heading_length: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            speed:                0.01,
            neighborhood_size:    6,
            separation_trigger:   1.0,
            environment_trigger:  2.0,
            environment_strength: 0.1,
            separation_strength:  0.005,
            alignment_strength:   0.00125,
            cohesion_strength:    0.002,
            softening_epsilon:    1e-6,
            min_heading_length:   1e-6,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of boids (N).  Fixed for the lifetime of the simulation.
    pub boid_count: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Frames simulated by `Sim::run`.  Hosts that drive `tick()` directly
    /// ignore it.
    pub total_frames: u64,

    /// Observer snapshot every N frames.  0 disables snapshots.
    pub snapshot_interval_frames: u64,

    pub enclosure: Enclosure,
    pub spawn: SpawnRegion,
    pub steering: SteeringConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            boid_count:               40,
            seed:                     0,
            total_frames:             1_000,
            snapshot_interval_frames: 1,
            enclosure:                Enclosure::default(),
            spawn:                    SpawnRegion::default(),
            steering:                 SteeringConfig::default(),
        }
    }
}

impl SimConfig {
    /// Check every invariant the simulation relies on.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> BoidsResult<()> {
        if self.boid_count == 0 {
            return Err(BoidsError::Config("boid_count must be at least 1".into()));
        }
        let k = self.steering.neighborhood_size;
        if k == 0 || k >= self.boid_count {
            return Err(BoidsError::NeighborhoodTooLarge {
                neighborhood: k,
                boids:        self.boid_count,
            });
        }

        let e = &self.enclosure;
        require_positive("enclosure.wall_radius", e.wall_radius)?;
        if !(e.floor_y.is_finite() && e.ceiling_y.is_finite()) || e.ceiling_y <= e.floor_y {
            return Err(BoidsError::Config(format!(
                "enclosure ceiling_y ({}) must lie above floor_y ({})",
                e.ceiling_y, e.floor_y
            )));
        }

        let sp = &self.spawn;
        require_positive("spawn.half_extent_xz", sp.half_extent_xz)?;
        if sp.max_y < sp.min_y {
            return Err(BoidsError::Config(format!(
                "spawn max_y ({}) is below min_y ({})",
                sp.max_y, sp.min_y
            )));
        }

        let s = &self.steering;
        require_positive("steering.speed", s.speed)?;
        require_positive("steering.separation_trigger", s.separation_trigger)?;
        require_positive("steering.environment_trigger", s.environment_trigger)?;
        require_positive("steering.softening_epsilon", s.softening_epsilon)?;
        require_positive("steering.min_heading_length", s.min_heading_length)?;
        require_non_negative("steering.environment_strength", s.environment_strength)?;
        require_non_negative("steering.separation_strength", s.separation_strength)?;
        require_non_negative("steering.alignment_strength", s.alignment_strength)?;
        require_non_negative("steering.cohesion_strength", s.cohesion_strength)?;

        Ok(())
    }
}

fn require_positive(name: &str, value: f32) -> BoidsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BoidsError::Config(format!("{name} must be finite and positive, got {value}")))
    }
}

fn require_non_negative(name: &str, value: f32) -> BoidsResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BoidsError::Config(format!("{name} must be finite and non-negative, got {value}")))
    }
}
