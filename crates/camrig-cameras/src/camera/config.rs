//! Camera rig configuration

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Frame phase in which a rig follows its target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdatePhase {
    /// Follow in the fixed update (targets moved by physics)
    Fixed,
    /// Follow after all target motion for the frame is resolved
    #[default]
    Late,
    /// Follow only when the host calls `manual_update`
    Manual,
}

/// Which rig behavior a camera uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RigStyle {
    /// Orbit camera driven by look and zoom input
    #[default]
    FreeLook,
    /// Fixed-position camera that turns to face the target
    LookAt,
    /// Look-at camera with procedural hand-held sway
    HandHeld,
    /// Look-at camera that also zooms the field of view to fit the target
    FieldOfView,
}

/// Shared target-follow settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowConfig {
    /// Phase in which the follow step runs
    pub update_phase: UpdatePhase,
    /// Target the player automatically when no target is set or it goes inactive
    pub auto_target_player: bool,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            update_phase: UpdatePhase::Late,
            auto_target_player: true,
        }
    }
}

/// Free-look orbit camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeLookConfig {
    /// How fast the rig moves to keep up with the target's position
    pub move_speed: f32,
    /// Degrees of rotation per unit of look input
    pub turn_speed: f32,
    /// Slerp rate toward the target rotation (0 = snap)
    pub turn_smoothing: f32,
    /// Maximum tilt in degrees (looking down)
    pub tilt_max: f32,
    /// Minimum tilt in degrees, applied as -tilt_min (looking up)
    pub tilt_min: f32,
    /// Closest zoom distance
    pub min_zoom_distance: f32,
    /// Farthest zoom distance
    pub max_zoom_distance: f32,
    /// Distance change per unit of scroll input
    pub zoom_speed: f32,
    /// Smoothing time for the displayed zoom distance, in seconds
    pub zoom_move_time: f32,
    /// Read look input
    pub enable_rotation: bool,
    /// Read zoom input
    pub enable_zoom: bool,
    /// Lock and hide the cursor while the rig is active
    pub lock_cursor: bool,
    /// Map vertical input straight to tilt so it springs back on release
    pub vertical_auto_return: bool,
}

impl Default for FreeLookConfig {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            turn_speed: 1.5,
            turn_smoothing: 0.0,
            tilt_max: 75.0,
            tilt_min: 45.0,
            min_zoom_distance: 2.0,
            max_zoom_distance: 10.0,
            zoom_speed: 2.0,
            zoom_move_time: 0.4,
            enable_rotation: true,
            enable_zoom: true,
            lock_cursor: false,
            vertical_auto_return: false,
        }
    }
}

impl FreeLookConfig {
    /// Clamp a tilt angle into [-tilt_min, tilt_max]
    pub fn clamp_tilt(&self, tilt: f32) -> f32 {
        tilt.clamp(-self.tilt_min, self.tilt_max)
    }

    /// Clamp a zoom distance into [min_zoom_distance, max_zoom_distance]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_zoom_distance, self.max_zoom_distance)
    }

    pub fn validate(&self) -> Result<(), RigError> {
        non_negative("move_speed", self.move_speed)?;
        non_negative("turn_smoothing", self.turn_smoothing)?;
        non_negative("zoom_move_time", self.zoom_move_time)?;
        non_negative("min_zoom_distance", self.min_zoom_distance)?;
        if self.min_zoom_distance > self.max_zoom_distance {
            return Err(RigError::InvalidZoomRange {
                min: self.min_zoom_distance,
                max: self.max_zoom_distance,
            });
        }
        if -self.tilt_min > self.tilt_max {
            return Err(RigError::InvalidTiltRange {
                min: self.tilt_min,
                max: self.tilt_max,
            });
        }
        Ok(())
    }
}

/// Look-at camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookAtConfig {
    /// Total pitch (x) and yaw (y) range in degrees, centred on the original rotation
    pub rotation_range: Vec2,
    /// Smoothing time for the follow angles, in seconds
    pub follow_speed: f32,
}

impl Default for LookAtConfig {
    fn default() -> Self {
        Self {
            rotation_range: Vec2::new(70.0, 70.0),
            follow_speed: 1.0,
        }
    }
}

impl LookAtConfig {
    pub fn validate(&self) -> Result<(), RigError> {
        non_negative("rotation_range.x", self.rotation_range.x)?;
        non_negative("rotation_range.y", self.rotation_range.y)?;
        non_negative("follow_speed", self.follow_speed)
    }
}

/// Hand-held sway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandHeldConfig {
    /// Underlying look-at behavior
    pub look_at: LookAtConfig,
    /// Rate at which the sway noise is sampled
    pub sway_speed: f32,
    /// Amplitude of the constant sway, in degrees
    pub base_sway_amount: f32,
    /// Amplitude of the sway that scales with follow velocity
    pub tracking_sway_amount: f32,
    /// Directional bias added to the tracking sway, in [-1, 1]
    pub tracking_bias: f32,
    /// Noise seed; a random one is picked when unset
    pub seed: Option<u32>,
}

impl Default for HandHeldConfig {
    fn default() -> Self {
        Self {
            look_at: LookAtConfig::default(),
            sway_speed: 0.5,
            base_sway_amount: 0.5,
            tracking_sway_amount: 0.5,
            tracking_bias: 0.0,
            seed: None,
        }
    }
}

impl HandHeldConfig {
    pub fn validate(&self) -> Result<(), RigError> {
        self.look_at.validate()?;
        non_negative("sway_speed", self.sway_speed)?;
        if !(-1.0..=1.0).contains(&self.tracking_bias) {
            return Err(RigError::TrackingBiasOutOfRange(self.tracking_bias));
        }
        Ok(())
    }
}

/// Field-of-view fitter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldOfViewConfig {
    /// Time taken to adjust the current FOV to the required one, in seconds
    pub fov_adjust_time: f32,
    /// Multiplier on the fitted FOV; 2 frames the target twice as wide as needed
    pub zoom_amount_multiplier: f32,
    /// Include trail and particle renderers when sizing the target
    pub include_effects_in_size: bool,
    /// Field of view the camera starts with, in degrees
    pub initial_fov: f32,
}

impl Default for FieldOfViewConfig {
    fn default() -> Self {
        Self {
            fov_adjust_time: 1.0,
            zoom_amount_multiplier: 2.0,
            include_effects_in_size: false,
            initial_fov: 60.0,
        }
    }
}

impl FieldOfViewConfig {
    pub fn validate(&self) -> Result<(), RigError> {
        non_negative("fov_adjust_time", self.fov_adjust_time)?;
        non_negative("zoom_amount_multiplier", self.zoom_amount_multiplier)?;
        non_negative("initial_fov", self.initial_fov)
    }
}

/// Complete configuration for one camera rig
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Behavior selected for this rig
    pub style: RigStyle,
    pub follow: FollowConfig,
    pub free_look: FreeLookConfig,
    /// Look-at base shared by the `LookAt` and `FieldOfView` styles
    pub look_at: LookAtConfig,
    pub hand_held: HandHeldConfig,
    pub field_of_view: FieldOfViewConfig,
}

impl RigConfig {
    /// Validate the section used by the selected style
    pub fn validate(&self) -> Result<(), RigError> {
        match self.style {
            RigStyle::FreeLook => self.free_look.validate(),
            RigStyle::LookAt => self.look_at.validate(),
            RigStyle::HandHeld => self.hand_held.validate(),
            RigStyle::FieldOfView => {
                self.look_at.validate()?;
                self.field_of_view.validate()
            }
        }
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), RigError> {
    if value < 0.0 || value.is_nan() {
        return Err(RigError::NegativeValue { field, value });
    }
    Ok(())
}
