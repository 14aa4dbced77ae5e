//! The per-frame steering mode.

use std::fmt;

use boids_core::Vec3;
use boids_spatial::EnvironmentOracle;

/// Which behavior set drives a boid this frame.
///
/// Chosen fresh every frame from the boundary trigger; a boid carries no
/// memory of last frame's mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SteeringMode {
    /// Near a face of the enclosure: boundary repulsion only.
    Environment,
    /// Alignment, then separation, then cohesion.
    #[default]
    Flock,
}

impl SteeringMode {
    /// The mode for a boid at `position`.
    #[inline]
    pub fn select(oracle: &EnvironmentOracle, position: Vec3) -> Self {
        if oracle.trigger(position) { Self::Environment } else { Self::Flock }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Flock       => "flock",
        }
    }
}

impl fmt::Display for SteeringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
