//! `boids-steering`: how a boid turns and how it moves.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`mode`]      | `SteeringMode` (`Environment` / `Flock`)                      |
//! | [`context`]   | `FrameContext<'a>`, `Perception<'a>`                          |
//! | [`behaviors`] | Pure target functions and `blend`                             |
//! | [`model`]     | `SteeringModel` trait, `ClassicSteering`                      |
//! | [`noop`]      | `NoopSteering`, which never turns                             |
//! | [`physics`]   | `integrate`, the constant-speed step                          |
//!
//! # Per-boid pipeline
//!
//! For every slot, `boids-sim` does the following against the `previous`
//! buffer only:
//!
//! 1. Ask the `EnvironmentOracle` whether the boid is near a face and pick
//!    a [`SteeringMode`].
//! 2. Build the matching [`Perception`] (boundary distances, or the K
//!    nearest neighbors).
//! 3. Call [`SteeringModel::steer`] for the new unit heading.
//! 4. Call [`integrate`] to move along it.
//!
//! Models are `Send + Sync` and hold no per-boid state, so step 3 may run
//! on many boids at once.

pub mod behaviors;
pub mod context;
pub mod mode;
pub mod model;
pub mod noop;
pub mod physics;

#[cfg(test)]
mod tests;

pub use behaviors::{alignment_target, blend, cohesion_target, environment_target, separation_push};
pub use context::{FrameContext, Perception};
pub use mode::SteeringMode;
pub use model::{ClassicSteering, SteeringModel};
pub use noop::NoopSteering;
pub use physics::integrate;
