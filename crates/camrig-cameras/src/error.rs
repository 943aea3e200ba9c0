use camrig_core::EntityId;

/// Errors raised while configuring or registering camera rigs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RigError {
    #[error("invalid zoom range: min {min} is greater than max {max}")]
    InvalidZoomRange { min: f32, max: f32 },

    #[error("invalid tilt range: -{min}..{max} is empty")]
    InvalidTiltRange { min: f32, max: f32 },

    #[error("'{field}' must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: f32 },

    #[error("tracking bias {0} is outside [-1, 1]")]
    TrackingBiasOutOfRange(f32),

    #[error("camera {0:?} is not registered")]
    UnknownCamera(EntityId),
}
