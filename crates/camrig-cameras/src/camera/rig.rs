//! Config-selected camera rig
//!
//! Bundles one behavior's follower with its state so a host can drive any
//! rig style through the same calls.

use camrig_core::{EntityId, FrameClock, Transform};
use tracing::info;

use super::config::{RigConfig, RigStyle};
use super::field_of_view::{FieldOfViewState, TargetFieldOfView};
use super::follow::TargetFollower;
use super::free_look::{FreeLookCam, FreeLookState, DEFAULT_ZOOM_DISTANCE};
use super::hand_held::HandHeldCam;
use super::look_at::{LookAtCam, LookAtState};
use crate::error::RigError;
use crate::input::LookInput;
use crate::scene::{CursorControl, DistanceOverride, Scene};

/// Where the camera is and how wide it sees, for the host to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub transform: Transform,
    /// Field of view in degrees, when the rig drives it
    pub field_of_view: Option<f32>,
}

#[derive(Debug, Clone)]
pub enum CameraRig {
    FreeLook {
        follower: TargetFollower<FreeLookCam>,
        state: FreeLookState,
    },
    LookAt {
        follower: TargetFollower<LookAtCam>,
        state: LookAtState,
    },
    HandHeld {
        follower: TargetFollower<HandHeldCam>,
        state: LookAtState,
    },
    FieldOfView {
        follower: TargetFollower<TargetFieldOfView>,
        state: FieldOfViewState,
    },
}

/// Run `$body` against whichever follower/state pair the rig holds
macro_rules! with_rig {
    ($rig:expr, |$follower:ident, $state:ident| $body:expr) => {
        match $rig {
            CameraRig::FreeLook { follower: $follower, state: $state } => $body,
            CameraRig::LookAt { follower: $follower, state: $state } => $body,
            CameraRig::HandHeld { follower: $follower, state: $state } => $body,
            CameraRig::FieldOfView { follower: $follower, state: $state } => $body,
        }
    };
}

impl CameraRig {
    /// Build the rig selected by `config.style`, placed at `start`
    pub fn from_config(config: &RigConfig, start: Transform) -> Result<Self, RigError> {
        config.validate()?;
        let follow = config.follow.clone();

        let rig = match config.style {
            RigStyle::FreeLook => CameraRig::FreeLook {
                state: FreeLookState::new(&config.free_look, start, DEFAULT_ZOOM_DISTANCE),
                follower: TargetFollower::new(follow, FreeLookCam::new(config.free_look.clone())),
            },
            RigStyle::LookAt => CameraRig::LookAt {
                state: LookAtState::new(start),
                follower: TargetFollower::new(follow, LookAtCam::new(config.look_at.clone())),
            },
            RigStyle::HandHeld => CameraRig::HandHeld {
                state: LookAtState::new(start),
                follower: TargetFollower::new(follow, HandHeldCam::new(config.hand_held.clone())),
            },
            RigStyle::FieldOfView => CameraRig::FieldOfView {
                state: FieldOfViewState::new(start, config.field_of_view.initial_fov),
                follower: TargetFollower::new(
                    follow,
                    TargetFieldOfView::new(config.field_of_view.clone(), config.look_at.clone()),
                ),
            },
        };

        info!("Created {:?} camera rig", config.style);
        Ok(rig)
    }

    pub fn style(&self) -> RigStyle {
        match self {
            CameraRig::FreeLook { .. } => RigStyle::FreeLook,
            CameraRig::LookAt { .. } => RigStyle::LookAt,
            CameraRig::HandHeld { .. } => RigStyle::HandHeld,
            CameraRig::FieldOfView { .. } => RigStyle::FieldOfView,
        }
    }

    pub fn target(&self) -> Option<EntityId> {
        with_rig!(self, |follower, _state| follower.target())
    }

    pub fn set_target(&mut self, scene: &dyn Scene, target: Option<EntityId>) {
        with_rig!(self, |follower, state| follower.set_target(state, scene, target))
    }

    /// Input phase. Only the free-look rig reads input; other styles ignore it.
    pub fn update(
        &mut self,
        input: &LookInput,
        clock: &FrameClock,
        cursor: &mut dyn CursorControl,
        distance_override: Option<&mut dyn DistanceOverride>,
    ) {
        if let CameraRig::FreeLook { follower, state } = self {
            follower.behavior.update(state, input, clock, cursor, distance_override);
        }
    }

    pub fn fixed_update(&mut self, scene: &dyn Scene, clock: &FrameClock) -> bool {
        with_rig!(self, |follower, state| follower.fixed_update(state, scene, clock))
    }

    /// Late phase: follow (if this is the rig's phase), then finalize the
    /// free-look zoom distance.
    pub fn late_update(
        &mut self,
        scene: &dyn Scene,
        clock: &FrameClock,
        distance_override: Option<&mut dyn DistanceOverride>,
    ) -> bool {
        let followed = with_rig!(&mut *self, |follower, state| follower.late_update(state, scene, clock));
        if let CameraRig::FreeLook { follower, state } = self {
            follower.behavior.late_update(state, clock, distance_override);
        }
        followed
    }

    pub fn manual_update(&mut self, scene: &dyn Scene, clock: &FrameClock) -> bool {
        with_rig!(self, |follower, state| follower.manual_update(state, scene, clock))
    }

    /// Release anything the rig holds on the host (the cursor lock)
    pub fn disable(&mut self, cursor: &mut dyn CursorControl) {
        if let CameraRig::FreeLook { follower, state } = self {
            follower.behavior.disable(state, cursor);
        }
    }

    pub fn pose(&self) -> CameraPose {
        match self {
            CameraRig::FreeLook { state, .. } => CameraPose {
                transform: state.camera_transform(),
                field_of_view: None,
            },
            CameraRig::LookAt { state, .. } | CameraRig::HandHeld { state, .. } => CameraPose {
                transform: state.rig,
                field_of_view: None,
            },
            CameraRig::FieldOfView { state, .. } => CameraPose {
                transform: state.look.rig,
                field_of_view: Some(state.fov),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NoCursor, Renderer, RendererKind};
    use crate::test_support::MockScene;
    use camrig_core::Aabb;
    use glam::Vec3;

    fn clock() -> FrameClock {
        let mut clock = FrameClock::default();
        clock.update(1.0 / 60.0);
        clock
    }

    #[test]
    fn test_style_selected_from_config() {
        for style in [
            RigStyle::FreeLook,
            RigStyle::LookAt,
            RigStyle::HandHeld,
            RigStyle::FieldOfView,
        ] {
            let config = RigConfig {
                style,
                ..Default::default()
            };
            let rig = CameraRig::from_config(&config, Transform::default()).unwrap();
            assert_eq!(rig.style(), style);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = RigConfig::default();
        config.free_look.zoom_move_time = -1.0;
        assert!(matches!(
            CameraRig::from_config(&config, Transform::default()),
            Err(RigError::NegativeValue { field: "zoom_move_time", .. })
        ));
    }

    #[test]
    fn test_free_look_rig_frame() {
        let mut scene = MockScene::default();
        let target = scene.add(Transform::from_position(Vec3::new(4.0, 0.0, 0.0)));
        let mut rig = CameraRig::from_config(&RigConfig::default(), Transform::default()).unwrap();
        rig.set_target(&scene, Some(target));

        let clock = clock();
        rig.update(&LookInput::new(2.0, 0.0, -1.0), &clock, &mut NoCursor, None);
        assert!(rig.late_update(&scene, &clock, None));

        let CameraRig::FreeLook { state, .. } = &rig else {
            panic!("expected a free-look rig");
        };
        assert_eq!(state.look_angle, 3.0);
        assert_eq!(state.target_distance, 7.0);
        assert!(state.zoom_distance > 5.0);
        assert!(state.rig.position.x > 0.0 && state.rig.position.x < 4.0);
        assert_eq!(rig.pose().field_of_view, None);
    }

    #[test]
    fn test_field_of_view_rig_reports_fov() {
        let mut scene = MockScene::default();
        let target = scene.add_with_renderers(
            Transform::from_position(Vec3::new(0.0, 0.0, -20.0)),
            vec![Renderer::new(
                RendererKind::Mesh,
                Aabb::from_center_extents(Vec3::ZERO, Vec3::ONE),
            )],
        );
        let config = RigConfig {
            style: RigStyle::FieldOfView,
            ..Default::default()
        };
        let mut rig = CameraRig::from_config(&config, Transform::default()).unwrap();
        rig.set_target(&scene, Some(target));
        assert_eq!(rig.pose().field_of_view, Some(60.0));

        let clock = clock();
        for _ in 0..10 {
            rig.late_update(&scene, &clock, None);
        }
        let fov = rig.pose().field_of_view.unwrap();
        assert!(fov < 60.0 && fov > 0.0);
    }

    #[test]
    fn test_field_of_view_rig_faces_target() {
        let mut scene = MockScene::default();
        let target = scene.add(Transform::from_position(Vec3::new(20.0, 0.0, -5.0)));
        let config = RigConfig {
            style: RigStyle::FieldOfView,
            ..Default::default()
        };
        let mut rig = CameraRig::from_config(&config, Transform::default()).unwrap();
        rig.set_target(&scene, Some(target));

        let clock = clock();
        for _ in 0..600 {
            rig.late_update(&scene, &clock, None);
        }
        // Yaw is held to half the 70 degree rotation range
        let forward = rig.pose().transform.forward();
        let expected = Vec3::new(35f32.to_radians().sin(), 0.0, -35f32.to_radians().cos());
        assert!((forward - expected).length() < 1e-2);
    }

    #[test]
    fn test_field_of_view_narrows_as_target_recedes() {
        let mut scene = MockScene::default();
        let target = scene.add_with_renderers(
            Transform::from_position(Vec3::new(0.0, 0.0, -5.0)),
            vec![Renderer::new(
                RendererKind::Mesh,
                Aabb::from_center_extents(Vec3::ZERO, Vec3::ONE),
            )],
        );
        let config = RigConfig {
            style: RigStyle::FieldOfView,
            ..Default::default()
        };
        let mut rig = CameraRig::from_config(&config, Transform::default()).unwrap();
        rig.set_target(&scene, Some(target));

        let clock = clock();
        for _ in 0..600 {
            rig.late_update(&scene, &clock, None);
        }
        let near = rig.pose().field_of_view.unwrap();

        scene.move_to(target, Transform::from_position(Vec3::new(0.0, 0.0, -40.0)));
        for _ in 0..600 {
            rig.late_update(&scene, &clock, None);
        }
        let far = rig.pose().field_of_view.unwrap();
        assert!(far < near);
        assert!((far - 2.0 * 1f32.atan2(40.0).to_degrees()).abs() < 1e-2);
    }

    #[test]
    fn test_rig_without_target_is_inert() {
        let scene = MockScene::default();
        let config = RigConfig {
            style: RigStyle::HandHeld,
            ..Default::default()
        };
        let mut rig = CameraRig::from_config(&config, Transform::default()).unwrap();
        let before = rig.pose();

        assert!(!rig.late_update(&scene, &clock(), None));
        assert_eq!(rig.pose(), before);
        assert_eq!(rig.target(), None);
    }
}
