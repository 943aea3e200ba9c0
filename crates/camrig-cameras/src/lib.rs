//! camrig cameras - camera rig behaviors for a host engine's frame loop
//!
//! Provides the free-look orbit camera, the hand-held sway camera and the
//! field-of-view fitter, plus the collaborator traits a host implements to
//! drive them.

pub mod camera;
mod error;
pub mod input;
pub mod scene;

#[cfg(test)]
mod test_support;

pub use camera::{
    CameraBehavior, CameraPose, CameraRegistry, CameraRig, FieldOfViewConfig, FollowConfig,
    FreeLookCam, FreeLookConfig, FreeLookState, HandHeldCam, HandHeldConfig, LookAtCam,
    LookAtConfig, RigConfig, RigStyle, TargetFieldOfView, TargetFollower, UpdatePhase,
};
pub use error::RigError;
pub use input::{InputHandler, LookInput};
pub use scene::{CursorControl, DistanceOverride, NoCursor, Renderer, RendererKind, Scene};
