//! `boids-core`: foundational types for the boids flocking simulation.
//!
//! This crate is a dependency of every other `boids-*` crate.  It has no
//! `boids-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`vec3`]    | `Vec3`, angle conversions, pitch/yaw, triangle normals     |
//! | [`ids`]     | `BoidId`                                                   |
//! | [`frame`]   | `Frame` counter                                            |
//! | [`rng`]     | `SimRng` (seeded `SmallRng`)                               |
//! | [`config`]  | `Enclosure`, `SpawnRegion`, `SteeringConfig`, `SimConfig`  |
//! | [`error`]   | `BoidsError`, `BoidsResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod frame;
pub mod ids;
pub mod rng;
pub mod vec3;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Enclosure, SimConfig, SpawnRegion, SteeringConfig};
pub use error::{BoidsError, BoidsResult};
pub use frame::Frame;
pub use ids::BoidId;
pub use rng::SimRng;
pub use vec3::{Vec3, degrees_to_radians, radians_to_degrees};
