//! `boids-spatial`: boundary proximity and neighbor search.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`environment`] | `EnvironmentOracle`, `BoundaryDistances`                |
//! | [`neighbors`]   | `Neighbor`, `NeighborIndex` trait, `LinearScan`         |
//! | [`rtree`]       | `RTreeIndex` (R-tree via `rstar`)                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod environment;
pub mod neighbors;
pub mod rtree;


pub use environment::{BoundaryDistances, EnvironmentOracle};
pub use neighbors::{LinearScan, Neighbor, NeighborIndex, neighbor_order};
pub use rtree::RTreeIndex;
