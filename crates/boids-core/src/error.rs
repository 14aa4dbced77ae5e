//! Framework error type.
//!
//! Downstream crates wrap `BoidsError` as one variant of their own enums
//! (`SimError::Core`, …) rather than re-declaring the same failures.

use thiserror::Error;

/// The top-level error type for `boids-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BoidsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("neighborhood size {neighborhood} must be in 1..{boids} (flock of {boids})")]
    NeighborhoodTooLarge { neighborhood: usize, boids: usize },

    #[error("heading vector has zero length")]
    DegenerateHeading,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `boids-*` crates.
pub type BoidsResult<T> = Result<T, BoidsError>;
