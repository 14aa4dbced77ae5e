//! Per-frame counts reported by [`Sim::tick`][crate::Sim::tick].

use std::fmt;

use boids_core::Frame;
use boids_steering::SteeringMode;

/// How many boids ran in each mode during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameSummary {
    /// The frame that was computed.
    pub frame:            Frame,
    pub environment_mode: usize,
    pub flock_mode:       usize,
}

impl FrameSummary {
    pub(crate) fn from_modes(frame: Frame, modes: &[SteeringMode]) -> Self {
        let environment_mode = modes
            .iter()
            .filter(|&&m| m == SteeringMode::Environment)
            .count();
        Self { frame, environment_mode, flock_mode: modes.len() - environment_mode }
    }

    pub fn total(&self) -> usize {
        self.environment_mode + self.flock_mode
    }
}

impl fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} environment, {} flock",
            self.frame, self.environment_mode, self.flock_mode
        )
    }
}
