//! `boids-sim`: frame loop orchestrator for the boids simulation.
//!
//! # One frame
//!
//! ```text
//! tick():
//!   ① Rebuild  : NeighborIndex::rebuild(previous)
//!   ② Update   : for every slot i, reading only `previous`:
//!                   mode      = EnvironmentOracle::trigger(position)
//!                   heading   = SteeringModel::steer(boid, perception, ctx)
//!                   current[i] = integrate(boid with heading, speed)
//!                 (parallel with the `parallel` feature)
//!   ③ Publish  : previous ← current
//!   ④ Advance  : frame += 1
//! ```
//!
//! Because step ② never reads `current`, the order in which slots are
//! updated cannot change the result.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the update pass on Rayon's thread pool.           |
//! | `serde`    | Forwards `serde` to the other boids crates.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use boids_core::SimConfig;
//! use boids_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver);
//! for pose in sim.flock.poses() { /* draw */ }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use summary::FrameSummary;
