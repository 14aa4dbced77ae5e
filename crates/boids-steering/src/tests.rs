//! Unit tests for boids-steering.

use boids_core::{BoidId, Enclosure, Frame, SteeringConfig, Vec3};
use boids_flock::Boid;
use boids_spatial::{EnvironmentOracle, LinearScan, Neighbor, NeighborIndex};

use crate::FrameContext;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn boid(p: [f32; 3], d: Vec3) -> Boid {
    Boid::new(Vec3::from(p), d).unwrap()
}

fn context<'a>(
    previous: &'a [Boid],
    enclosure: &'a Enclosure,
    config: &'a SteeringConfig,
) -> FrameContext<'a> {
    FrameContext::new(Frame(1), previous, enclosure, config)
}

fn neighbors_of(previous: &[Boid], subject: u32, k: usize) -> Vec<Neighbor> {
    let id = BoidId(subject);
    LinearScan.neighbors_of(id, previous[id.index()].position, previous, k)
}

/// Two boids half a unit apart on the X axis, both heading +Z.
fn close_pair() -> Vec<Boid> {
    vec![boid([-0.25, 4.5, 0.0], Vec3::Z), boid([0.25, 4.5, 0.0], Vec3::Z)]
}

// ── SteeringMode ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod mode {
    use super::*;
    use crate::SteeringMode;

    #[test]
    fn select_follows_trigger() {
        let oracle = EnvironmentOracle::new(Enclosure::default(), 2.0);
        assert_eq!(SteeringMode::select(&oracle, Vec3::new(7.99, 4.5, 0.0)), SteeringMode::Flock);
        assert_eq!(SteeringMode::select(&oracle, Vec3::new(8.01, 4.5, 0.0)), SteeringMode::Environment);
    }

    #[test]
    fn display() {
        assert_eq!(SteeringMode::Environment.to_string(), "environment");
        assert_eq!(SteeringMode::Flock.to_string(), "flock");
    }
}

// ── Behaviors ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod behaviors {
    use super::*;
    use crate::{alignment_target, blend, cohesion_target, environment_target, separation_push};

    #[test]
    fn aligned_neighbors_give_no_alignment() {
        let previous = close_pair();
        let n = neighbors_of(&previous, 0, 1);
        let t = alignment_target(&previous[0], &n, &previous, &SteeringConfig::default());
        assert_eq!(t, Vec3::ZERO);
    }

    #[test]
    fn alignment_turns_toward_neighbor_heading() {
        let previous = vec![boid([0.0, 4.0, 0.0], Vec3::Z), boid([0.5, 4.0, 0.0], Vec3::X)];
        let n = neighbors_of(&previous, 0, 1);
        let t = alignment_target(&previous[0], &n, &previous, &SteeringConfig::default());
        assert!((t.length() - 1.0).abs() < 1e-5);
        assert!(t.x > 0.0 && t.z < 0.0);
    }

    #[test]
    fn separation_pushes_apart_along_axis() {
        let previous = close_pair();
        let cfg = SteeringConfig::default();
        let left = separation_push(&previous[0], &neighbors_of(&previous, 0, 1), &previous, &cfg);
        let right = separation_push(&previous[1], &neighbors_of(&previous, 1, 1), &previous, &cfg);
        let axis = previous[1].position - previous[0].position;
        assert!(left.dot(axis) < 0.0);
        assert!(right.dot(axis) > 0.0);
        assert!(left.y == 0.0 && left.z == 0.0);
    }

    #[test]
    fn separation_ignores_distant_neighbor() {
        let previous = vec![boid([0.0, 4.0, 0.0], Vec3::Z), boid([3.0, 4.0, 0.0], Vec3::Z)];
        let n = neighbors_of(&previous, 0, 1);
        let push = separation_push(&previous[0], &n, &previous, &SteeringConfig::default());
        assert_eq!(push, Vec3::ZERO);
    }

    #[test]
    fn separation_from_coincident_neighbor_is_zero() {
        let previous = vec![boid([1.0, 4.0, 1.0], Vec3::Z), boid([1.0, 4.0, 1.0], Vec3::X)];
        let n = neighbors_of(&previous, 0, 1);
        let push = separation_push(&previous[0], &n, &previous, &SteeringConfig::default());
        assert_eq!(push, Vec3::ZERO);
    }

    #[test]
    fn cohesion_points_at_weighted_centroid() {
        let previous = vec![
            boid([0.0, 4.0, 0.0], Vec3::Z),
            boid([1.0, 4.0, 0.0], Vec3::Z),
            boid([0.0, 4.0, 3.0], Vec3::Z),
        ];
        let n = neighbors_of(&previous, 0, 2);
        let t = cohesion_target(&previous[0], &n, &previous, &SteeringConfig::default());
        // The near neighbor on +X outweighs the far one on +Z nine to one.
        assert!(t.x > t.z && t.z > 0.0);
        assert!((t.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn wall_target_points_inward() {
        let b = boid([8.5, 4.5, 0.0], Vec3::Z);
        let oracle = EnvironmentOracle::new(Enclosure::default(), 2.0);
        let t = environment_target(&b, &oracle.distances(b.position), &SteeringConfig::default());
        assert!(t.x < 0.0);
        assert_eq!(t.y, 0.0);
    }

    #[test]
    fn floor_target_points_up() {
        let b = boid([0.0, 0.5, 0.0], Vec3::Z);
        let oracle = EnvironmentOracle::new(Enclosure::default(), 2.0);
        let t = environment_target(&b, &oracle.distances(b.position), &SteeringConfig::default());
        assert!(t.y > 0.0);
    }

    #[test]
    fn floor_target_on_the_floor_is_finite() {
        let b = boid([0.0, -1.0, 0.0], Vec3::Z);
        let oracle = EnvironmentOracle::new(Enclosure::default(), 2.0);
        let d = oracle.distances(b.position);
        assert_eq!(d.floor, 0.0);
        let t = environment_target(&b, &d, &SteeringConfig::default());
        assert!(t.is_finite());
        assert!((t.length() - 1.0).abs() < 1e-5);
        assert!(t.y > 0.0);
    }

    #[test]
    fn antiparallel_floor_heading_gets_no_turn() {
        let b = boid([0.0, -0.5, 0.0], -Vec3::Y);
        let oracle = EnvironmentOracle::new(Enclosure::default(), 2.0);
        let config = SteeringConfig::default();
        let t = environment_target(&b, &oracle.distances(b.position), &config);
        assert_eq!(t, Vec3::Y);
        let h = blend(b.direction, t * config.environment_strength, config.min_heading_length);
        assert_eq!(h, -Vec3::Y);
    }

    #[test]
    fn cohesion_with_coincident_neighbor_is_finite() {
        let previous = vec![
            boid([1.0, 4.0, 1.0], Vec3::Z),
            boid([1.0, 4.0, 1.0], Vec3::X),
            boid([2.0, 4.0, 1.0], Vec3::Z),
        ];
        let config = SteeringConfig::default();

        let only = neighbors_of(&previous, 0, 1);
        assert_eq!(only[0].distance, 0.0);
        assert_eq!(cohesion_target(&previous[0], &only, &previous, &config), Vec3::ZERO);

        let both = neighbors_of(&previous, 0, 2);
        let t = cohesion_target(&previous[0], &both, &previous, &config);
        assert!(t.is_finite());
        assert!(t.is_zero() || (t.length() - 1.0).abs() < 1e-4, "{t}");
    }

    #[test]
    fn ceiling_target_points_down() {
        let b = boid([0.0, 9.5, 0.0], Vec3::Z);
        let oracle = EnvironmentOracle::new(Enclosure::default(), 2.0);
        let t = environment_target(&b, &oracle.distances(b.position), &SteeringConfig::default());
        assert!(t.y < 0.0);
    }

    #[test]
    fn blend_zero_delta_is_identity() {
        let h = Vec3::new(0.6, 0.0, 0.8);
        assert_eq!(blend(h, Vec3::ZERO, 1e-6), h);
    }

    #[test]
    fn blend_renormalizes() {
        let h = blend(Vec3::Z, Vec3::new(0.3, 0.0, 0.0), 1e-6);
        assert!((h.length() - 1.0).abs() < 1e-6);
        assert!(h.x > 0.0);
    }

    #[test]
    fn blend_cancelling_delta_keeps_heading() {
        assert_eq!(blend(Vec3::X, -Vec3::X, 1e-6), Vec3::X);
    }
}

// ── Models ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use super::*;
    use crate::{ClassicSteering, NoopSteering, Perception, SteeringModel};

    #[test]
    fn close_pair_turns_apart() {
        let previous = close_pair();
        let enclosure = Enclosure::default();
        let cfg = SteeringConfig { neighborhood_size: 1, ..SteeringConfig::default() };
        let ctx = context(&previous, &enclosure, &cfg);

        let n0 = neighbors_of(&previous, 0, 1);
        let n1 = neighbors_of(&previous, 1, 1);
        let h0 = ClassicSteering.steer(&previous[0], Perception::Flock(&n0), &ctx);
        let h1 = ClassicSteering.steer(&previous[1], Perception::Flock(&n1), &ctx);

        assert!(h0.x < 0.0, "left boid turns left: {h0}");
        assert!(h1.x > 0.0, "right boid turns right: {h1}");
    }

    #[test]
    fn steering_is_deterministic() {
        let previous = vec![
            boid([0.0, 4.0, 0.0], Vec3::new(1.0, 0.2, 0.3)),
            boid([0.4, 4.2, 0.1], Vec3::new(0.1, 0.9, 0.3)),
            boid([-0.7, 3.6, 0.5], Vec3::new(0.5, 0.5, 0.5)),
            boid([1.2, 4.9, -0.8], Vec3::new(0.0, 0.3, 1.0)),
        ];
        let enclosure = Enclosure::default();
        let cfg = SteeringConfig { neighborhood_size: 3, ..SteeringConfig::default() };
        let ctx = context(&previous, &enclosure, &cfg);
        let n = neighbors_of(&previous, 0, 3);

        let a = ClassicSteering.steer(&previous[0], Perception::Flock(&n), &ctx);
        let b = ClassicSteering.steer(&previous[0], Perception::Flock(&n), &ctx);
        assert_eq!(a.to_array().map(f32::to_bits), b.to_array().map(f32::to_bits));
        assert!((a.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn environment_mode_turns_away_from_wall() {
        let previous = vec![boid([8.5, 4.5, 0.0], Vec3::Z)];
        let enclosure = Enclosure::default();
        let cfg = SteeringConfig::default();
        let ctx = context(&previous, &enclosure, &cfg);
        let oracle = EnvironmentOracle::new(enclosure, cfg.environment_trigger);

        let perception = Perception::Environment(oracle.distances(previous[0].position));
        let h = ClassicSteering.steer(&previous[0], perception, &ctx);
        assert!(h.x < 0.0);
        assert!((h.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn noop_keeps_heading() {
        let previous = close_pair();
        let enclosure = Enclosure::default();
        let cfg = SteeringConfig::default();
        let ctx = context(&previous, &enclosure, &cfg);
        let n = neighbors_of(&previous, 0, 1);
        assert_eq!(NoopSteering.steer(&previous[0], Perception::Flock(&n), &ctx), Vec3::Z);
    }
}

// ── Physics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod physics {
    use super::*;
    use crate::integrate;

    #[test]
    fn moves_along_heading_at_speed() {
        let b = boid([1.0, 2.0, 3.0], Vec3::X);
        let moved = integrate(b, 0.01);
        assert!((moved.position.x - 1.01).abs() < 1e-6);
        assert_eq!(moved.position.y, 2.0);
        assert_eq!(moved.direction, Vec3::X);
    }
}
