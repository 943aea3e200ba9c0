//! Frame clock driving the camera rigs
//!
//! Tracks scaled and unscaled frame deltas, accumulated time, and the
//! fixed timestep used by rigs that follow in the fixed update phase.

use serde::{Deserialize, Serialize};

/// Errors from an unusable clock configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeConfigError {
    #[error("Fixed timestep must be positive (got {0})")]
    NonPositiveFixedTimestep(f32),

    #[error("Maximum delta time must not be negative (got {0})")]
    NegativeMaxDelta(f32),

    #[error("Time scale must not be negative (got {0})")]
    NegativeTimeScale(f32),
}

/// Configuration for the frame clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    /// How many scaled seconds pass per real second (0.0 = frozen)
    pub time_scale: f32,
    /// Fixed timestep for the fixed update phase (in seconds)
    pub fixed_timestep: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_timestep: 1.0 / 50.0,
            max_delta_time: 0.25,
        }
    }
}

impl TimeConfig {
    /// Reject values the clock cannot run with
    pub fn validate(&self) -> Result<(), TimeConfigError> {
        if self.fixed_timestep.is_nan() || self.fixed_timestep <= 0.0 {
            return Err(TimeConfigError::NonPositiveFixedTimestep(self.fixed_timestep));
        }
        if self.max_delta_time.is_nan() || self.max_delta_time < 0.0 {
            return Err(TimeConfigError::NegativeMaxDelta(self.max_delta_time));
        }
        if self.time_scale.is_nan() || self.time_scale < 0.0 {
            return Err(TimeConfigError::NegativeTimeScale(self.time_scale));
        }
        Ok(())
    }
}

/// Per-frame time tracking
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Configuration
    pub config: TimeConfig,
    /// Scaled time since start in seconds
    pub total_time: f64,
    /// Scaled delta time for this frame (clamped)
    pub delta_time: f32,
    /// Unscaled delta time
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Whether the clock is paused
    pub paused: bool,
    /// Accumulated time for fixed timestep
    fixed_accumulator: f32,
}

impl FrameClock {
    /// Create a new frame clock with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance the clock by the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        self.unscaled_delta_time = raw_delta.clamp(0.0, self.config.max_delta_time);
        self.frame_count += 1;

        self.delta_time = self.unscaled_delta_time * self.time_scale();
        self.total_time += self.delta_time as f64;
        self.fixed_accumulator += self.delta_time;
    }

    /// Scaled time since start, narrowed for per-frame math
    pub fn time(&self) -> f32 {
        self.total_time as f32
    }

    /// Effective time scale (0.0 while paused)
    pub fn time_scale(&self) -> f32 {
        if self.paused {
            0.0
        } else {
            self.config.time_scale
        }
    }

    /// True when the effective time scale is too small to integrate against
    pub fn is_frozen(&self) -> bool {
        self.time_scale() < f32::EPSILON
    }

    /// Get the number of fixed timesteps to process this frame
    pub fn fixed_steps(&mut self) -> u32 {
        let mut steps = 0;
        while self.fixed_accumulator >= self.config.fixed_timestep {
            self.fixed_accumulator -= self.config.fixed_timestep;
            steps += 1;
        }
        steps
    }

    /// Pause the clock
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the clock
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal, 2.0 = double speed)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}
