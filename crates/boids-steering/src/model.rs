//! The `SteeringModel` trait and the classic three-rule implementation.

use boids_core::Vec3;
use boids_flock::Boid;

use crate::behaviors::{alignment_target, blend, cohesion_target, environment_target, separation_push};
use crate::{FrameContext, Perception};

/// Pluggable heading update.
///
/// Given one boid, what it perceived and the frame context, return its new
/// unit heading.  Position is not touched here; boids-sim integrates after.
///
/// # Thread safety
///
/// The update pass may call `steer` for many boids in parallel, so models
/// must be `Send + Sync`.  Everything a model needs arrives through its
/// arguments; a model that kept per-boid state would break
/// frame coherence.
///
/// # Example
///
/// ```rust,ignore
/// struct Spin;
///
/// impl SteeringModel for Spin {
///     fn steer(&self, boid: &Boid, _: Perception<'_>, ctx: &FrameContext<'_>) -> Vec3 {
///         blend(boid.direction, boid.direction.cross(Vec3::Y) * 0.01, ctx.config.min_heading_length)
///     }
/// }
/// ```
pub trait SteeringModel: Send + Sync + 'static {
    fn steer(&self, boid: &Boid, perception: Perception<'_>, ctx: &FrameContext<'_>) -> Vec3;
}

/// Reynolds-style steering with a hard mode switch.
///
/// * **Environment:** one blend toward [`environment_target`], scaled by
///   `environment_strength`.
/// * **Flock:** alignment, then separation, then cohesion.  Each blend
///   renormalizes before the next runs.
#[derive(Copy, Clone, Debug, Default)]
pub struct ClassicSteering;

impl SteeringModel for ClassicSteering {
    fn steer(&self, boid: &Boid, perception: Perception<'_>, ctx: &FrameContext<'_>) -> Vec3 {
        let cfg = ctx.config;
        let min_len = cfg.min_heading_length;

        match perception {
            Perception::Environment(distances) => {
                let target = environment_target(boid, &distances, cfg);
                blend(boid.direction, target * cfg.environment_strength, min_len)
            }
            Perception::Flock(neighbors) => {
                let previous = ctx.previous;

                let align = alignment_target(boid, neighbors, previous, cfg);
                let heading = blend(boid.direction, align * cfg.alignment_strength, min_len);

                let push = separation_push(boid, neighbors, previous, cfg);
                let heading = blend(heading, push, min_len);

                let cohere = cohesion_target(boid, neighbors, previous, cfg);
                blend(heading, cohere * cfg.cohesion_strength, min_len)
            }
        }
    }
}
