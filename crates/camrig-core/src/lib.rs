//! camrig core - shared types for the camera rigs
//!
//! This crate provides the foundations every rig builds on:
//! - Mathematical primitives (re-exported from glam)
//! - Transforms and bounding boxes
//! - Frame clock with pause and time scale
//! - Critically damped smoothing and angle helpers

pub mod math;
pub mod time;
pub mod types;

pub use glam::{Quat, Vec2, Vec3};
pub use math::{delta_angle, lerp_clamped, smooth_damp, smooth_damp_vec2, wrap_angle};
pub use time::{FrameClock, TimeConfig, TimeConfigError};
pub use types::{Aabb, EntityId, Transform};
