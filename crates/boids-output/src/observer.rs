//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use boids_core::{BoidId, Frame};
use boids_flock::Boid;
use boids_sim::{FrameSummary, SimObserver};
use boids_steering::SteeringMode;

use crate::row::{FrameSummaryRow, PoseRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes pose snapshots and frame summaries to any
/// [`OutputWriter`].
///
/// Observer hooks have no return value, so the first write error is stored
/// and later writes are still attempted.  Check it with
/// [`take_error`][Self::take_error] after `sim.run()` returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer without waiting for `on_sim_end`.  Hosts that drive
    /// `run_frames` never receive that hook.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_frame_end(&mut self, summary: &FrameSummary) {
        let result = self.writer.write_frame_summary(&FrameSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Frame, boids: &[Boid], modes: &[SteeringMode]) {
        let rows: Vec<PoseRow> = boids
            .iter()
            .zip(modes)
            .enumerate()
            .map(|(i, (boid, &mode))| PoseRow::new(BoidId(i as u32), frame, boid, mode))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_poses(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_frame: Frame) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
