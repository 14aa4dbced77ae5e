//! Simulation observer trait for progress reporting and data collection.

use boids_core::Frame;
use boids_flock::Boid;
use boids_steering::SteeringMode;

use crate::FrameSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_frames`][crate::Sim::run_frames] at frame boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Every hook fires between frames, after
/// `publish`, so the boid slices are always a settled state.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, summary: &FrameSummary) {
///         if summary.frame.is_on_interval(self.interval) {
///             println!("{summary}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before the index rebuild.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after each frame has been published.
    fn on_frame_end(&mut self, _summary: &FrameSummary) {}

    /// Called every `config.snapshot_interval_frames` frames.
    ///
    /// `boids` is the published state and `modes[i]` the mode boid `i`
    /// steered in during `frame`.
    fn on_snapshot(&mut self, _frame: Frame, _boids: &[Boid], _modes: &[SteeringMode]) {}

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
