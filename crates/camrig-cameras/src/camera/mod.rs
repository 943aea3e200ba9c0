//! Camera rig module
//!
//! Free-look orbit, look-at, hand-held sway and field-of-view rigs, all
//! built on a shared target follower.

mod config;
mod field_of_view;
mod follow;
mod free_look;
mod hand_held;
mod look_at;
mod registry;
mod rig;

pub use config::{
    FieldOfViewConfig, FollowConfig, FreeLookConfig, HandHeldConfig, LookAtConfig, RigConfig,
    RigStyle, UpdatePhase,
};
pub use field_of_view::{
    max_bounds_extent, required_field_of_view, FieldOfViewState, TargetFieldOfView,
};
pub use follow::{CameraBehavior, TargetFollower};
pub use free_look::{FreeLookCam, FreeLookState, DEFAULT_ZOOM_DISTANCE};
pub use hand_held::HandHeldCam;
pub use look_at::{LookAtCam, LookAtState};
pub use registry::CameraRegistry;
pub use rig::{CameraPose, CameraRig};
