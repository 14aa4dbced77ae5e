//! A single boid and the pose handed to renderers.

use boids_core::{BoidsError, BoidsResult, Vec3};

/// One agent: where it is and which way it is heading.
///
/// `direction` is unit length after every mutation.  Constructors normalize
/// it; the steering crate renormalizes after every blend.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boid {
    pub position:  Vec3,
    pub direction: Vec3,
}

impl Boid {
    /// Build a boid, normalizing `heading`.
    ///
    /// Fails with [`BoidsError::DegenerateHeading`] if `heading` is
    /// (numerically) zero.
    pub fn new(position: Vec3, heading: Vec3) -> BoidsResult<Self> {
        let direction = heading
            .try_normalize(f32::EPSILON)
            .ok_or(BoidsError::DegenerateHeading)?;
        Ok(Self { position, direction })
    }

    #[inline]
    pub fn distance_to(&self, other: &Boid) -> f32 {
        self.position.distance(other.position)
    }

    /// Renderer-facing view of this boid.
    pub fn pose(&self) -> Pose {
        Pose {
            position:      self.position,
            direction:     self.direction,
            pitch_degrees: self.direction.pitch_degrees(),
            yaw_degrees:   self.direction.yaw_degrees(),
        }
    }
}

/// What a renderer needs to place and orient one drawable: position plus the
/// heading expressed both as a vector and as pitch/yaw angles.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position:      Vec3,
    pub direction:     Vec3,
    pub pitch_degrees: f32,
    pub yaw_degrees:   f32,
}
