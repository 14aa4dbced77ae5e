//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `boid_poses.csv`
//! - `frame_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FrameSummaryRow, OutputResult, PoseRow};

pub const POSE_HEADERS: [&str; 11] = [
    "boid_id", "frame", "x", "y", "z", "dir_x", "dir_y", "dir_z",
    "pitch_degrees", "yaw_degrees", "environment",
];

pub const SUMMARY_HEADERS: [&str; 3] = ["frame", "environment_mode", "flock_mode"];

/// Writes trajectory output to two CSV files.
pub struct CsvWriter {
    poses:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (truncating) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut poses = Writer::from_path(dir.join("boid_poses.csv"))?;
        poses.write_record(POSE_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self { poses, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_poses(&mut self, rows: &[PoseRow]) -> OutputResult<()> {
        for row in rows {
            self.poses.write_record(&[
                row.boid_id.to_string(),
                row.frame.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                row.dir_x.to_string(),
                row.dir_y.to_string(),
                row.dir_z.to_string(),
                row.pitch_degrees.to_string(),
                row.yaw_degrees.to_string(),
                (row.environment as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.environment_mode.to_string(),
            row.flock_mode.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.poses.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
