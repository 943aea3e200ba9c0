//! Hand-held camera: a look-at rig with procedural sway
//!
//! Two sway terms are layered on the look-at rotation each step. The base
//! sway has a constant amplitude; the tracking sway scales with how fast
//! the look-at follow angles are moving, so the operator "wobbles" more
//! when panning quickly.

use camrig_core::{FrameClock, Transform};
use glam::Vec2;
use noise::{NoiseFn, Perlin};
use tracing::{debug, trace};

use super::config::HandHeldConfig;
use super::follow::CameraBehavior;
use super::look_at::{follow_rotation, LookAtCam, LookAtState};

/// Noise-space offset between the two sway axes
const AXIS_DECORRELATION: f64 = 100.0;

/// Noise row sampled along; kept off the lattice so both corner gradients contribute
const NOISE_ROW: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct HandHeldCam {
    pub config: HandHeldConfig,
    look_at: LookAtCam,
    perlin: Perlin,
}

impl HandHeldCam {
    pub fn new(config: HandHeldConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        debug!("Hand-held sway seeded with {}", seed);
        Self {
            look_at: LookAtCam::new(config.look_at.clone()),
            perlin: Perlin::new(seed),
            config,
        }
    }

    /// Sway as (pitch, yaw) degrees at `time`, for a rig whose follow angles
    /// move at `follow_velocity`. Pitch is positive downward, yaw rightward.
    pub fn sway_offset(&self, time: f32, follow_velocity: Vec2) -> Vec2 {
        let config = &self.config;
        let t = f64::from(time * config.sway_speed);
        let noise = Vec2::new(self.sample(t), self.sample(t + AXIS_DECORRELATION));

        let base = noise * config.base_sway_amount;

        let tracking = noise + Vec2::splat(config.tracking_bias);
        let tracking = Vec2::new(
            tracking.x * -config.tracking_sway_amount * follow_velocity.x,
            tracking.y * config.tracking_sway_amount * follow_velocity.y,
        );

        base + tracking
    }

    /// Coherent noise along one axis, centred on zero
    fn sample(&self, t: f64) -> f32 {
        (self.perlin.get([NOISE_ROW, t]) * 0.5) as f32
    }
}

impl CameraBehavior for HandHeldCam {
    type State = LookAtState;

    fn follow_target(&self, state: &mut LookAtState, target: &Transform, dt: f32, clock: &FrameClock) {
        self.look_at.follow_target(state, target, dt, clock);

        let sway = self.sway_offset(clock.time(), state.follow_velocity);
        trace!("Hand-held sway: {:?}", sway);
        // Positive pitch sway dips the view, so it maps to a negative pitch-up angle
        state.rig.rotate_local(follow_rotation(Vec2::new(-sway.x, sway.y)));
    }
}
