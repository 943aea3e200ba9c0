//! Rig settings with persistence
//!
//! Settings are saved to `~/.config/camrig/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use camrig_cameras::RigConfig;
use camrig_core::TimeConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All simulator settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    pub time: TimeConfig,
    pub rig: RigConfig,
    pub simulation: SimulationSettings,
}

impl RigSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("camrig"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        // Create config directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let path = dir.join("settings.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Scripted target motion for the headless simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Number of frames to simulate
    pub frames: u32,
    /// Simulated frames per second
    pub frame_rate: f32,
    /// Radius of the target's circular path
    pub target_radius: f32,
    /// Angular speed of the target in radians per second
    pub target_speed: f32,
    /// Log the camera pose every this many frames
    pub log_every: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_rate: 60.0,
            target_radius: 8.0,
            target_speed: 0.5,
            log_every: 60,
        }
    }
}

impl SimulationSettings {
    /// Seconds per simulated frame
    pub fn frame_time(&self) -> f32 {
        1.0 / self.frame_rate.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camrig_cameras::RigStyle;

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("camrig-missing").join("settings.toml");
        let settings = RigSettings::load_from(&path);
        assert_eq!(settings.rig.style, RigStyle::FreeLook);
        assert_eq!(settings.simulation.frames, 600);
    }

    #[test]
    fn test_partial_settings_parse() {
        let settings: RigSettings = toml::from_str(
            r#"
            [rig]
            style = "FieldOfView"

            [simulation]
            frames = 10
            frame_rate = 30.0
            target_radius = 2.0
            target_speed = 1.0
            log_every = 5
            "#,
        )
        .unwrap();
        assert_eq!(settings.rig.style, RigStyle::FieldOfView);
        assert_eq!(settings.rig.field_of_view.zoom_amount_multiplier, 2.0);
        assert!((settings.simulation.frame_time() - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_fixed_timestep_fails_validation() {
        let settings: RigSettings = toml::from_str(
            r#"
            [time]
            time_scale = 1.0
            fixed_timestep = 0.0
            max_delta_time = 0.25
            "#,
        )
        .unwrap();
        assert!(settings.time.validate().is_err());
        assert!(RigSettings::default().time.validate().is_ok());
    }
}
