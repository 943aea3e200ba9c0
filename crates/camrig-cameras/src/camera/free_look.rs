//! Free-look orbit camera with mouse look and zoom
//!
//! The rig is three nested parts: a root that yaws and follows the target,
//! a pivot that tilts, and the camera itself sitting `zoom_distance` behind
//! the pivot.

use camrig_core::{lerp_clamped, smooth_damp, wrap_angle, EntityId, FrameClock, Transform};
use glam::{Quat, Vec3};
use tracing::{debug, trace};

use super::config::FreeLookConfig;
use super::follow::CameraBehavior;
use super::registry::CameraRegistry;
use crate::input::LookInput;
use crate::scene::{CursorControl, DistanceOverride};

/// Default distance between pivot and camera for a freshly created rig
pub const DEFAULT_ZOOM_DISTANCE: f32 = 5.0;

/// Mutable state of one free-look rig
#[derive(Debug, Clone)]
pub struct FreeLookState {
    /// Rig root (position follows the target, rotation is the yaw)
    pub rig: Transform,
    /// Pivot rotation relative to the root (the tilt)
    pub pivot_rotation: Quat,
    /// Camera position relative to the pivot
    pub camera_offset: Vec3,
    /// Yaw in degrees, positive turns right, wrapped into (-180, 180]
    pub look_angle: f32,
    /// Tilt in degrees, positive looks down
    pub tilt_angle: f32,
    /// Distance requested by zoom input
    pub target_distance: f32,
    /// Smoothed distance the camera is displayed at
    pub zoom_distance: f32,
    /// Velocity of the zoom smoothing filter
    pub zoom_velocity: f32,
    /// Requested cursor lock; applied on the next update
    pub lock_cursor: bool,
    cursor_applied: Option<bool>,
}

impl FreeLookState {
    /// Create rig state at `rig`, with the camera `distance` behind the pivot
    pub fn new(config: &FreeLookConfig, rig: Transform, distance: f32) -> Self {
        let distance = config.clamp_distance(distance);
        Self {
            rig,
            pivot_rotation: Quat::IDENTITY,
            camera_offset: Vec3::Z * distance,
            look_angle: 0.0,
            tilt_angle: 0.0,
            target_distance: distance,
            zoom_distance: distance,
            zoom_velocity: 0.0,
            lock_cursor: config.lock_cursor,
            cursor_applied: None,
        }
    }

    /// World-space pose of the camera at the end of the rig
    pub fn camera_transform(&self) -> Transform {
        let rotation = self.rig.rotation * self.pivot_rotation;
        Transform::from_position_rotation(self.rig.position + rotation * self.camera_offset, rotation)
    }
}

/// Free-look orbit behavior
#[derive(Debug, Clone, Default)]
pub struct FreeLookCam {
    pub config: FreeLookConfig,
}

impl FreeLookCam {
    pub fn new(config: FreeLookConfig) -> Self {
        Self { config }
    }

    /// Build a rig at the origin, register it, and make it the active camera
    pub fn create(config: FreeLookConfig, registry: &mut CameraRegistry) -> (EntityId, Self, FreeLookState) {
        let id = EntityId::new();
        let state = FreeLookState::new(&config, Transform::default(), DEFAULT_ZOOM_DISTANCE);
        registry.activate(id);
        debug!("Created free-look camera {:?}", id);
        (id, Self::new(config), state)
    }

    /// Input phase: rotation, zoom and cursor lock
    pub fn update(
        &self,
        state: &mut FreeLookState,
        input: &LookInput,
        clock: &FrameClock,
        cursor: &mut dyn CursorControl,
        distance_override: Option<&mut dyn DistanceOverride>,
    ) {
        if self.config.enable_rotation {
            self.handle_rotation(state, input, clock);
        }

        if self.config.enable_zoom {
            self.handle_zoom(state, input, distance_override);
        }

        if state.cursor_applied != Some(state.lock_cursor) {
            cursor.set_cursor_lock(state.lock_cursor);
            state.cursor_applied = Some(state.lock_cursor);
        }
    }

    /// Late phase: ease the displayed distance toward the zoom target.
    /// Does nothing while a distance override owns the camera offset.
    pub fn late_update(
        &self,
        state: &mut FreeLookState,
        clock: &FrameClock,
        distance_override: Option<&mut dyn DistanceOverride>,
    ) {
        if !self.config.enable_zoom || distance_override.is_some() {
            return;
        }

        state.zoom_distance = smooth_damp(
            state.zoom_distance,
            state.target_distance,
            &mut state.zoom_velocity,
            self.config.zoom_move_time,
            clock.delta_time,
        );
        state.camera_offset = Vec3::Z * state.zoom_distance;
    }

    /// Release the cursor when the rig is switched off
    pub fn disable(&self, state: &mut FreeLookState, cursor: &mut dyn CursorControl) {
        cursor.set_cursor_lock(false);
        state.cursor_applied = Some(false);
    }

    fn handle_rotation(&self, state: &mut FreeLookState, input: &LookInput, clock: &FrameClock) {
        if clock.is_frozen() {
            return;
        }

        let config = &self.config;
        state.look_angle = wrap_angle(state.look_angle + input.look_x * config.turn_speed);

        let y = input.look_y;
        state.tilt_angle = if config.vertical_auto_return {
            // Stick-style input maps straight to tilt and springs back on release.
            // Split on sign so the return works with asymmetric limits.
            if y > 0.0 {
                lerp_clamped(0.0, -config.tilt_min, y)
            } else {
                lerp_clamped(0.0, config.tilt_max, -y)
            }
        } else {
            config.clamp_tilt(state.tilt_angle - y * config.turn_speed)
        };

        let rig_target = yaw_rotation(state.look_angle);
        let pivot_target = tilt_rotation(state.tilt_angle);

        if config.turn_smoothing > 0.0 {
            let t = (config.turn_smoothing * clock.delta_time).min(1.0);
            // Repeated small-step slerps drift off unit length
            state.pivot_rotation = state.pivot_rotation.slerp(pivot_target, t).normalize();
            state.rig.rotation = state.rig.rotation.slerp(rig_target, t).normalize();
        } else {
            state.pivot_rotation = pivot_target;
            state.rig.rotation = rig_target;
        }

        trace!(
            "Free-look angles: look={:.2} tilt={:.2}",
            state.look_angle,
            state.tilt_angle
        );
    }

    fn handle_zoom(
        &self,
        state: &mut FreeLookState,
        input: &LookInput,
        distance_override: Option<&mut dyn DistanceOverride>,
    ) {
        let step = input.zoom_scroll * self.config.zoom_speed;
        state.target_distance = self.config.clamp_distance(state.target_distance - step);

        if let Some(protector) = distance_override {
            protector.set_look_distance(state.target_distance);
        }
    }
}

impl CameraBehavior for FreeLookCam {
    type State = FreeLookState;

    fn follow_target(&self, state: &mut FreeLookState, target: &Transform, dt: f32, _clock: &FrameClock) {
        let t = (dt * self.config.move_speed).clamp(0.0, 1.0);
        state.rig.position = state.rig.position.lerp(target.position, t);
    }
}

/// Yaw about +Y; positive degrees turn right
fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(-degrees.to_radians())
}

/// Pitch about +X; positive degrees look down
fn tilt_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_x(-degrees.to_radians())
}
