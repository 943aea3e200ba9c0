//! Fixed-position camera that turns to face its target

use camrig_core::{delta_angle, smooth_damp_vec2, FrameClock, Transform};
use glam::{EulerRot, Quat, Vec2};

use super::config::LookAtConfig;
use super::follow::CameraBehavior;

/// Mutable state of a look-at rig
#[derive(Debug, Clone)]
pub struct LookAtState {
    /// Rig transform; only the rotation is driven
    pub rig: Transform,
    /// Rotation the rotation range is centred on
    pub original_rotation: Quat,
    /// Smoothed (pitch, yaw) in degrees relative to the original rotation
    pub follow_angles: Vec2,
    /// Rate of change of the follow angles, in degrees per second
    pub follow_velocity: Vec2,
}

impl LookAtState {
    pub fn new(rig: Transform) -> Self {
        Self {
            rig,
            original_rotation: rig.rotation,
            follow_angles: Vec2::ZERO,
            follow_velocity: Vec2::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LookAtCam {
    pub config: LookAtConfig,
}

impl LookAtCam {
    pub fn new(config: LookAtConfig) -> Self {
        Self { config }
    }
}

impl CameraBehavior for LookAtCam {
    type State = LookAtState;

    fn follow_target(&self, state: &mut LookAtState, target: &Transform, dt: f32, _clock: &FrameClock) {
        let half_range = self.config.rotation_range * 0.5;

        // Yaw is measured from the unrotated rig, pitch from the yawed one
        state.rig.rotation = state.original_rotation;
        let local = state.rig.inverse_transform_point(target.position);
        let yaw = local.x.atan2(-local.z).to_degrees().clamp(-half_range.y, half_range.y);

        state.rig.rotation = state.original_rotation * follow_rotation(Vec2::new(0.0, yaw));
        let local = state.rig.inverse_transform_point(target.position);
        let pitch = local.y.atan2(-local.z).to_degrees().clamp(-half_range.x, half_range.x);

        let current = state.follow_angles;
        let wanted = Vec2::new(
            current.x + delta_angle(current.x, pitch),
            current.y + delta_angle(current.y, yaw),
        );
        state.follow_angles = smooth_damp_vec2(
            current,
            wanted,
            &mut state.follow_velocity,
            self.config.follow_speed,
            dt,
        );

        state.rig.rotation = state.original_rotation * follow_rotation(state.follow_angles);
    }
}

/// Rotation for (pitch up, yaw right) angles in degrees
pub(crate) fn follow_rotation(angles: Vec2) -> Quat {
    Quat::from_euler(EulerRot::YXZ, -angles.y.to_radians(), angles.x.to_radians(), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn clock() -> FrameClock {
        let mut clock = FrameClock::default();
        clock.update(1.0 / 60.0);
        clock
    }

    #[test]
    fn test_turns_toward_target() {
        let cam = LookAtCam::new(LookAtConfig {
            rotation_range: Vec2::new(180.0, 180.0),
            follow_speed: 0.2,
        });
        let mut state = LookAtState::new(Transform::default());
        let target = Transform::from_position(Vec3::new(5.0, 5.0, -5.0));

        for _ in 0..600 {
            cam.follow_target(&mut state, &target, 1.0 / 60.0, &clock());
        }

        let to_target = target.position.normalize();
        assert!((state.rig.forward() - to_target).length() < 1e-2);
        assert!(state.follow_velocity.length() < 1e-2);
    }

    #[test]
    fn test_rotation_range_limits_follow() {
        let cam = LookAtCam::new(LookAtConfig {
            rotation_range: Vec2::new(20.0, 40.0),
            follow_speed: 0.1,
        });
        let mut state = LookAtState::new(Transform::default());
        // Far to the right and above
        let target = Transform::from_position(Vec3::new(100.0, 100.0, -1.0));

        for _ in 0..600 {
            cam.follow_target(&mut state, &target, 1.0 / 60.0, &clock());
        }
        assert!((state.follow_angles.y - 20.0).abs() < 1e-2);
        assert!((state.follow_angles.x - 10.0).abs() < 1e-2);
    }

    #[test]
    fn test_follow_velocity_tracks_motion() {
        let cam = LookAtCam::default();
        let mut state = LookAtState::new(Transform::default());
        let target = Transform::from_position(Vec3::new(3.0, 0.0, -5.0));

        cam.follow_target(&mut state, &target, 1.0 / 60.0, &clock());
        assert!(state.follow_velocity.y > 0.0);
        assert!(state.follow_velocity.x.abs() < 1e-4);
    }
}
