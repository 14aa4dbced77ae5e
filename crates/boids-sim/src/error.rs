use boids_core::{BoidId, BoidsError, Vec3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] BoidsError),

    #[error("{got} explicit boids supplied but config.boid_count is {expected}")]
    BoidCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("explicit boid {id} is malformed: position {position}, direction {direction}")]
    InvalidBoid {
        id:        BoidId,
        position:  Vec3,
        direction: Vec3,
    },
}

pub type SimResult<T> = Result<T, SimError>;
