//! headless: drives the boids simulation without a renderer.
//!
//! Plays the host frame driver: builds the flock, ticks it for
//! `total_frames`, writes poses and per-frame mode counts to CSV under
//! `output/headless/`, and prints the final state of the first few boids.
//!
//! ```text
//! headless [config.json]
//! ```
//!
//! The optional JSON file may be partial; missing fields keep their
//! defaults.  Set `RUST_LOG=debug` for per-frame summaries.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use boids_core::{Frame, SimConfig};
use boids_flock::Boid;
use boids_output::{CsvWriter, OutputWriter, SimOutputObserver};
use boids_sim::{FrameSummary, Sim, SimBuilder, SimObserver};
use boids_spatial::{NeighborIndex, RTreeIndex};
use boids_steering::{ClassicSteering, SteeringMode};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:      &str  = "output/headless";
const RTREE_THRESHOLD: usize = 256; // flock size above which the R-tree pays off
const TABLE_ROWS:      usize = 10;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:             SimOutputObserver<W>,
    pose_rows:         usize,
    summary_rows:      usize,
    environment_steps: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, pose_rows: 0, summary_rows: 0, environment_steps: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_frame_end(&mut self, summary: &FrameSummary) {
        self.summary_rows += 1;
        self.environment_steps += summary.environment_mode;
        self.inner.on_frame_end(summary);
    }

    fn on_snapshot(&mut self, frame: Frame, boids: &[Boid], modes: &[SteeringMode]) {
        self.pose_rows += boids.len();
        self.inner.on_snapshot(frame, boids, modes);
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.inner.on_sim_end(final_frame);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimConfig::default());
    };
    let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing config {path}"))
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn run<N: NeighborIndex>(mut sim: Sim<ClassicSteering, N>) -> Result<()> {
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();
    info!(frames = sim.frame.0, secs = elapsed.as_secs_f64(), "run finished");

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    let boid_frames = sim.frame.0 as usize * sim.flock.len();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  boid_poses.csv      : {} rows", obs.pose_rows);
    println!("  frame_summaries.csv : {} rows", obs.summary_rows);
    println!(
        "  environment mode    : {} of {} boid-frames",
        obs.environment_steps, boid_frames
    );
    println!();

    println!(
        "{:<6} {:>8} {:>8} {:>8} {:>8} {:>8} {:<12}",
        "Boid", "x", "y", "z", "pitch", "yaw", "Mode"
    );
    println!("{}", "-".repeat(64));
    for (i, (pose, mode)) in sim.flock.poses().zip(sim.modes()).take(TABLE_ROWS).enumerate() {
        println!(
            "{:<6} {:>8.3} {:>8.3} {:>8.3} {:>8.1} {:>8.1} {:<12}",
            i,
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.pitch_degrees,
            pose.yaw_degrees,
            mode,
        );
    }
    if sim.flock.len() > TABLE_ROWS {
        println!("... {} more", sim.flock.len() - TABLE_ROWS);
    }

    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;

    println!("=== headless: boids flock ===");
    println!(
        "Boids: {}  |  K: {}  |  Frames: {}  |  Seed: {}",
        config.boid_count, config.steering.neighborhood_size, config.total_frames, config.seed
    );
    println!(
        "Enclosure: radius {}  floor {}  ceiling {}",
        config.enclosure.wall_radius, config.enclosure.floor_y, config.enclosure.ceiling_y
    );
    println!();

    if config.boid_count > RTREE_THRESHOLD {
        run(SimBuilder::new(config).neighbor_index(RTreeIndex::new()).build()?)
    } else {
        run(SimBuilder::new(config).build()?)
    }
}
