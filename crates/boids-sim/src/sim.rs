//! The `Sim` struct and its frame loop.

use tracing::{debug, trace};

use boids_core::{BoidId, Frame, SimConfig};
use boids_flock::{Boid, Flock};
use boids_spatial::{EnvironmentOracle, Neighbor, NeighborIndex};
use boids_steering::{FrameContext, Perception, SteeringMode, SteeringModel, integrate};

use crate::{FrameSummary, SimObserver};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S, N>` owns the double-buffered [`Flock`] and drives one frame per
/// [`tick`](Self::tick):
///
/// 1. **Rebuild** the neighbor index from `previous`.
/// 2. **Update** every slot of `current` from `previous` alone (optionally
///    parallel with the `parallel` feature).
/// 3. **Publish** `current` into `previous`.
///
/// Hosts read [`Flock::current`] or [`Flock::poses`] only between ticks.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: SteeringModel, N: NeighborIndex> {
    /// Validated configuration.  Changing it after build is unchecked.
    pub config: SimConfig,

    /// The next frame to be computed.
    pub frame: Frame,

    /// Both boid buffers.  Edits made through `flock.current_mut()` between
    /// frames take effect only after `flock.publish()`.
    pub flock: Flock,

    /// The steering model.  Called once per boid per frame.
    pub steering: S,

    pub(crate) index:  N,
    pub(crate) oracle: EnvironmentOracle,
    /// Mode each boid steered in during the last computed frame.
    pub(crate) modes:  Vec<SteeringMode>,
}

impl<S: SteeringModel, N: NeighborIndex> Sim<S, N> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current frame to `config.total_frames`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.frame.0 < self.config.total_frames {
            self.step_observed(observer);
        }
        observer.on_sim_end(self.frame);
    }

    /// Run exactly `n` frames from the current position (ignores
    /// `total_frames`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_observed(observer);
        }
    }

    /// Compute one frame and publish it.
    pub fn tick(&mut self) -> FrameSummary {
        let frame = self.frame;

        self.index.rebuild(self.flock.previous());

        // Explicit field borrows so the borrow checker sees disjoint access.
        let k        = self.config.steering.neighborhood_size;
        let oracle   = &self.oracle;
        let index    = &self.index;
        let steering = &self.steering;
        let modes    = &mut self.modes;
        let (previous, current) = self.flock.split_for_update();
        let ctx = FrameContext::new(
            frame,
            previous,
            &self.config.enclosure,
            &self.config.steering,
        );

        #[cfg(not(feature = "parallel"))]
        {
            let mut scratch = Vec::with_capacity(k);
            for (i, (slot, mode)) in current.iter_mut().zip(modes.iter_mut()).enumerate() {
                (*slot, *mode) =
                    advance_boid(BoidId(i as u32), &ctx, oracle, index, steering, &mut scratch);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            current
                .par_iter_mut()
                .zip(modes.par_iter_mut())
                .enumerate()
                .for_each_init(
                    || Vec::with_capacity(k),
                    |scratch, (i, (slot, mode))| {
                        (*slot, *mode) =
                            advance_boid(BoidId(i as u32), &ctx, oracle, index, steering, scratch);
                    },
                );
        }

        self.flock.publish();
        self.frame = frame.next();

        let summary = FrameSummary::from_modes(frame, &self.modes);
        debug!(
            frame = frame.0,
            environment = summary.environment_mode,
            flock = summary.flock_mode,
            "frame published"
        );
        summary
    }

    /// Mode each boid steered in during the last computed frame.  All
    /// `Flock` before the first tick.
    pub fn modes(&self) -> &[SteeringMode] {
        &self.modes
    }

    pub fn neighbor_index(&self) -> &N {
        &self.index
    }

    pub fn oracle(&self) -> &EnvironmentOracle {
        &self.oracle
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_frame_start(self.frame);
        let summary = self.tick();
        observer.on_frame_end(&summary);
        if summary.frame.is_on_interval(self.config.snapshot_interval_frames) {
            observer.on_snapshot(summary.frame, self.flock.current(), &self.modes);
        }
    }
}

// ── Per-boid update ───────────────────────────────────────────────────────────

/// Compute one boid's next state from the frame context alone.
///
/// Reads `ctx.previous` and nothing else that changes during a frame, so
/// calling it for any slot in any order (or twice) gives the same result.
/// `scratch` is reused between calls to avoid a per-boid allocation.
pub(crate) fn advance_boid<S: SteeringModel, N: NeighborIndex>(
    id:       BoidId,
    ctx:      &FrameContext<'_>,
    oracle:   &EnvironmentOracle,
    index:    &N,
    steering: &S,
    scratch:  &mut Vec<Neighbor>,
) -> (Boid, SteeringMode) {
    let boid = ctx.previous[id.index()];
    let mode = SteeringMode::select(oracle, boid.position);

    let perception = match mode {
        SteeringMode::Environment => Perception::Environment(oracle.distances(boid.position)),
        SteeringMode::Flock => {
            index.find_neighbors(
                id,
                boid.position,
                ctx.previous,
                ctx.config.neighborhood_size,
                scratch,
            );
            Perception::Flock(scratch.as_slice())
        }
    };

    let direction = steering.steer(&boid, perception, ctx);
    trace!(boid = id.0, %mode, "steered");

    (integrate(Boid { direction, ..boid }, ctx.config.speed), mode)
}
