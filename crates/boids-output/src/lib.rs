//! `boids-output`: trajectory export for the boids simulation.
//!
//! | Backend | Files created                              |
//! |---------|--------------------------------------------|
//! | CSV     | `boid_poses.csv`, `frame_summaries.csv`    |
//!
//! The writer implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `boids_sim::SimObserver`.  Output
//! is for offline inspection and plotting; nothing here reads it back.
//!
//! # Usage
//!
//! ```rust,ignore
//! use boids_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{FrameSummaryRow, PoseRow};
pub use writer::OutputWriter;
