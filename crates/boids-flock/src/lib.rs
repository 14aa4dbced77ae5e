//! `boids-flock`: agent state and the double-buffered flock store.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`boid`]      | `Boid` (position + unit heading), `Pose` render view   |
//! | [`store`]     | `Flock` (`current` / `previous` buffers, `publish`)    |
//! | [`builder`]   | `FlockBuilder` (seeded random or explicit placement)   |
//!
//! # Frame coherence
//!
//! Every agent update in a frame reads the other agents only through
//! `previous` and writes only its own slot of `current`.  [`Flock`] hands
//! out the two buffers through one split borrow so the compiler rejects any
//! update that tries to read `current`.

pub mod boid;
pub mod builder;
pub mod store;


pub use boid::{Boid, Pose};
pub use builder::FlockBuilder;
pub use store::Flock;
