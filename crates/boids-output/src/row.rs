//! Plain data row types written by output backends.

use boids_core::{BoidId, Frame};
use boids_flock::Boid;
use boids_sim::FrameSummary;
use boids_steering::SteeringMode;

/// One boid's pose at a snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseRow {
    pub boid_id:       u32,
    pub frame:         u64,
    pub x:             f32,
    pub y:             f32,
    pub z:             f32,
    pub dir_x:         f32,
    pub dir_y:         f32,
    pub dir_z:         f32,
    pub pitch_degrees: f32,
    pub yaw_degrees:   f32,
    /// `true` if the boid steered away from the enclosure this frame.
    pub environment:   bool,
}

impl PoseRow {
    pub fn new(id: BoidId, frame: Frame, boid: &Boid, mode: SteeringMode) -> Self {
        let pose = boid.pose();
        Self {
            boid_id:       id.0,
            frame:         frame.0,
            x:             pose.position.x,
            y:             pose.position.y,
            z:             pose.position.z,
            dir_x:         pose.direction.x,
            dir_y:         pose.direction.y,
            dir_z:         pose.direction.z,
            pitch_degrees: pose.pitch_degrees,
            yaw_degrees:   pose.yaw_degrees,
            environment:   mode == SteeringMode::Environment,
        }
    }
}

/// Mode counts for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummaryRow {
    pub frame:            u64,
    pub environment_mode: u64,
    pub flock_mode:       u64,
}

impl From<&FrameSummary> for FrameSummaryRow {
    fn from(s: &FrameSummary) -> Self {
        Self {
            frame:            s.frame.0,
            environment_mode: s.environment_mode as u64,
            flock_mode:       s.flock_mode as u64,
        }
    }
}
