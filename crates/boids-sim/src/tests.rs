//! Integration tests for boids-sim.

use boids_core::{BoidId, Enclosure, Frame, SimConfig, SteeringConfig, Vec3};
use boids_flock::Boid;
use boids_spatial::{LinearScan, RTreeIndex};
use boids_steering::{NoopSteering, SteeringMode};

use crate::{FrameSummary, NoopObserver, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(boid_count: usize, k: usize) -> SimConfig {
    SimConfig {
        boid_count,
        seed: 42,
        total_frames: 10,
        snapshot_interval_frames: 5,
        steering: SteeringConfig { neighborhood_size: k, ..SteeringConfig::default() },
        ..SimConfig::default()
    }
}

fn boid(p: [f32; 3], d: Vec3) -> Boid {
    Boid::new(Vec3::from(p), d).unwrap()
}

fn bits(boids: &[Boid]) -> Vec<[u32; 6]> {
    boids
        .iter()
        .map(|b| {
            let [px, py, pz] = b.position.to_array().map(f32::to_bits);
            let [dx, dy, dz] = b.direction.to_array().map(f32::to_bits);
            [px, py, pz, dx, dy, dz]
        })
        .collect()
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<Frame>,
    ends:      Vec<FrameSummary>,
    snapshots: Vec<(Frame, usize, usize)>,
    finished:  Option<Frame>,
}

impl SimObserver for Recorder {
    fn on_frame_start(&mut self, frame: Frame) {
        self.starts.push(frame);
    }
    fn on_frame_end(&mut self, summary: &FrameSummary) {
        self.ends.push(*summary);
    }
    fn on_snapshot(&mut self, frame: Frame, boids: &[Boid], modes: &[SteeringMode]) {
        self.snapshots.push((frame, boids.len(), modes.len()));
    }
    fn on_sim_end(&mut self, final_frame: Frame) {
        self.finished = Some(final_frame);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use boids_core::BoidsError;

    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        assert_eq!(sim.flock.len(), 40);
        assert_eq!(sim.frame, Frame::ZERO);
        assert_eq!(sim.flock.current(), sim.flock.previous());
        assert!(sim.modes().iter().all(|&m| m == SteeringMode::Flock));
    }

    #[test]
    fn invalid_config_rejected() {
        let err = SimBuilder::new(test_config(4, 4)).build().err().unwrap();
        assert!(matches!(
            err,
            SimError::Core(BoidsError::NeighborhoodTooLarge { neighborhood: 4, boids: 4 })
        ));
    }

    #[test]
    fn explicit_boid_count_must_match() {
        let err = SimBuilder::new(test_config(3, 1))
            .boids(vec![boid([0.0, 4.0, 0.0], Vec3::Z); 2])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::BoidCountMismatch { expected: 3, got: 2 }));
    }

    #[test]
    fn explicit_boids_are_used_verbatim() {
        let boids = vec![boid([0.0, 4.0, 0.0], Vec3::Z), boid([1.0, 4.0, 0.0], Vec3::X)];
        let sim = SimBuilder::new(test_config(2, 1)).boids(boids.clone()).build().unwrap();
        assert_eq!(sim.flock.current(), boids.as_slice());
    }

    #[test]
    fn explicit_boid_with_non_unit_heading_rejected() {
        let mut config = test_config(2, 1);
        config.steering.cohesion_strength = 0.0;
        let stretched =
            Boid { position: Vec3::new(0.0, 4.0, 0.0), direction: Vec3::new(0.0, 0.0, 2.0) };
        let err = SimBuilder::new(config)
            .boids(vec![boid([1.0, 4.0, 0.0], Vec3::Z), stretched])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::InvalidBoid { id: BoidId(1), .. }));
    }

    #[test]
    fn explicit_boid_with_non_finite_state_rejected() {
        let lost = Boid { position: Vec3::new(f32::NAN, 4.0, 0.0), direction: Vec3::Z };
        let err = SimBuilder::new(test_config(2, 1))
            .boids(vec![lost, boid([1.0, 4.0, 0.0], Vec3::Z)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::InvalidBoid { id: BoidId(0), .. }));

        let spinning = Boid {
            position:  Vec3::new(0.0, 4.0, 0.0),
            direction: Vec3::new(f32::INFINITY, 0.0, 0.0),
        };
        let err = SimBuilder::new(test_config(2, 1))
            .boids(vec![boid([1.0, 4.0, 0.0], Vec3::Z), spinning])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::InvalidBoid { id: BoidId(1), .. }));
    }

    #[test]
    fn oracle_uses_configured_enclosure() {
        let config = SimConfig {
            enclosure: Enclosure { wall_radius: 10.0, ceiling_y: 20.0, floor_y: -20.0 },
            ..SimConfig::default()
        };
        let sim = SimBuilder::new(config).build().unwrap();
        assert_eq!(sim.oracle().min_distance_to_boundary(Vec3::ZERO), 10.0);
        assert!(!sim.oracle().trigger(Vec3::ZERO));
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use boids_spatial::{EnvironmentOracle, NeighborIndex};
    use boids_steering::{ClassicSteering, FrameContext};

    use super::*;
    use crate::sim::advance_boid;

    #[test]
    fn headings_stay_unit_length() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        for _ in 0..300 {
            sim.tick();
            for b in sim.flock.current() {
                assert!((b.direction.length() - 1.0).abs() < 1e-4, "{}", b.direction);
            }
        }
    }

    #[test]
    fn tick_publishes_and_advances() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let summary = sim.tick();
        assert_eq!(summary.frame, Frame(0));
        assert_eq!(summary.total(), 40);
        assert_eq!(sim.frame, Frame(1));
        assert_eq!(sim.flock.previous(), sim.flock.current());
    }

    #[test]
    fn update_order_does_not_matter() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        sim.run_frames(25, &mut NoopObserver);

        // Recompute the next frame slot by slot in reverse order against a
        // snapshot of `previous`.
        let previous = sim.flock.previous().to_vec();
        let config = sim.config.clone();
        let oracle = EnvironmentOracle::new(config.enclosure, config.steering.environment_trigger);
        let mut index = LinearScan;
        index.rebuild(&previous);
        let ctx = FrameContext::new(sim.frame, &previous, &config.enclosure, &config.steering);
        let mut scratch = Vec::new();
        let mut expected = vec![Boid::default(); previous.len()];
        for i in (0..previous.len()).rev() {
            let (next, _) =
                advance_boid(BoidId(i as u32), &ctx, &oracle, &index, &ClassicSteering, &mut scratch);
            expected[i] = next;
        }

        sim.tick();
        assert_eq!(bits(sim.flock.current()), bits(&expected));
    }

    #[test]
    fn same_seed_same_trajectory() {
        let mut a = SimBuilder::new(SimConfig::default()).build().unwrap();
        let mut b = SimBuilder::new(SimConfig::default()).build().unwrap();
        a.run_frames(100, &mut NoopObserver);
        b.run_frames(100, &mut NoopObserver);
        assert_eq!(bits(a.flock.current()), bits(b.flock.current()));
    }

    #[test]
    fn rtree_index_matches_linear_scan() {
        let mut linear = SimBuilder::new(SimConfig::default()).build().unwrap();
        let mut rtree = SimBuilder::new(SimConfig::default())
            .neighbor_index(RTreeIndex::new())
            .build()
            .unwrap();
        for _ in 0..100 {
            assert_eq!(linear.tick(), rtree.tick());
        }
        assert_eq!(bits(linear.flock.current()), bits(rtree.flock.current()));
    }

    #[test]
    fn close_pair_separates() {
        let boids = vec![boid([-0.25, 4.5, 0.0], Vec3::Z), boid([0.25, 4.5, 0.0], Vec3::Z)];
        let mut sim = SimBuilder::new(test_config(2, 1)).boids(boids).build().unwrap();
        let summary = sim.tick();
        assert_eq!(summary.flock_mode, 2);

        let [left, right] = [sim.flock.current()[0], sim.flock.current()[1]];
        assert!(left.direction.x < 0.0);
        assert!(right.direction.x > 0.0);
        assert!(right.position.x - left.position.x > 0.5);
    }

    #[test]
    fn modes_follow_trigger_boundary() {
        let boids = vec![
            boid([8.01, 4.5, 0.0], Vec3::Z),
            boid([7.99, 4.5, 0.0], Vec3::Z),
            boid([0.0, 4.5, 0.0], Vec3::Z),
        ];
        let mut sim = SimBuilder::new(test_config(3, 1)).boids(boids).build().unwrap();
        let summary = sim.tick();
        assert_eq!(
            sim.modes(),
            &[SteeringMode::Environment, SteeringMode::Flock, SteeringMode::Flock]
        );
        assert_eq!(summary.environment_mode, 1);
        assert_eq!(summary.flock_mode, 2);
    }

    #[test]
    fn zero_distances_keep_headings_finite() {
        // Slot 0 sits on the floor; slots 1 and 2 share a position.
        let boids = vec![
            boid([0.0, -1.0, 0.0], Vec3::Z),
            boid([0.0, 4.5, 0.0], Vec3::Z),
            boid([0.0, 4.5, 0.0], Vec3::X),
        ];
        let mut sim = SimBuilder::new(test_config(3, 1)).boids(boids).build().unwrap();
        let summary = sim.tick();
        assert_eq!(
            sim.modes(),
            &[SteeringMode::Environment, SteeringMode::Flock, SteeringMode::Flock]
        );
        assert_eq!(summary.environment_mode, 1);
        assert!(sim.flock.current()[0].direction.y > 0.0);
        for _ in 0..20 {
            for b in sim.flock.current() {
                assert!(b.position.is_finite() && b.direction.is_finite(), "{}", b.direction);
                assert!((b.direction.length() - 1.0).abs() < 1e-4, "{}", b.direction);
            }
            sim.tick();
        }
    }

    #[test]
    fn noop_steering_flies_straight() {
        let boids = vec![boid([0.0, 4.0, 0.0], Vec3::X), boid([0.0, 5.0, 0.0], Vec3::Z)];
        let mut sim = SimBuilder::new(test_config(2, 1))
            .steering(NoopSteering)
            .boids(boids)
            .build()
            .unwrap();
        sim.run_frames(100, &mut NoopObserver);
        let b = sim.flock.current();
        assert_eq!(b[0].direction, Vec3::X);
        assert!((b[0].position.x - 1.0).abs() < 1e-4);
        assert!((b[1].position.z - 1.0).abs() < 1e-4);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn run_invokes_hooks_in_order() {
        let mut sim = SimBuilder::new(test_config(12, 3)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(rec.starts.len(), 10);
        assert_eq!(rec.starts[0], Frame(0));
        assert_eq!(rec.ends.last().map(|s| s.frame), Some(Frame(9)));
        assert_eq!(rec.snapshots, vec![(Frame(0), 12, 12), (Frame(5), 12, 12)]);
        assert_eq!(rec.finished, Some(Frame(10)));
        assert_eq!(sim.frame, Frame(10));
    }

    #[test]
    fn run_frames_ignores_total_and_skips_sim_end() {
        let mut sim = SimBuilder::new(test_config(12, 3)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run_frames(15, &mut rec);
        assert_eq!(rec.ends.len(), 15);
        assert_eq!(rec.snapshots.len(), 3);
        assert!(rec.finished.is_none());
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = SimConfig { snapshot_interval_frames: 0, ..test_config(12, 3) };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert!(rec.snapshots.is_empty());
    }
}
