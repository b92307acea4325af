//! Configuration for the orrery.
//!
//! Settings persist as RON. Every section is `#[serde(default)]`, so a file only
//! needs the fields it changes; unknown fields are ignored. CLI flags override
//! whatever the file says.

mod cli;
mod error;

pub use cli::CliArgs;
pub use error::ConfigError;

use std::f32::consts::PI;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::orbits::SceneConfig;
use crate::types::StepMode;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrreryConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub animation: AnimationConfig,
    pub scene: SceneConfig,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            animation: AnimationConfig::default(),
            scene: SceneConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Orrery".to_string(),
        }
    }
}

/// Perspective camera and orbit-control settings.
#[derive(Resource, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial eye position; the camera always looks at the orbit target.
    pub start: [f32; 3],
    /// Fraction of pending rotation/pan applied per frame (0 disables damping).
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Largest polar angle from +Y, in radians.
    pub max_polar_angle: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub enable_pan: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            start: [0.0, 100.0, 150.0],
            damping_factor: 0.05,
            min_distance: 50.0,
            max_distance: 300.0,
            max_polar_angle: PI,
            rotate_speed: 0.5,
            zoom_speed: 1.2,
            enable_pan: true,
        }
    }
}

/// Animation timing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub step_mode: StepMode,
}

// --- Load / Save ---

impl OrreryConfig {
    /// Load config from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::from_ron(&contents)
    }

    /// Parse config from a RON string.
    pub fn from_ron(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(ConfigError::ParseError)
    }

    /// Load from `path` when given, otherwise use the built-in scene.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize to pretty RON.
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(5)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)
    }

    /// Write config to `path` as RON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }
        let serialized = self.to_ron()?;
        std::fs::write(path, serialized).map_err(ConfigError::WriteError)
    }
}

// --- Validation ---

fn invalid(field: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidSetting {
        field,
        value: value.to_string(),
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value))
    }
}

impl CameraConfig {
    /// Reject settings the camera systems cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(invalid("fov_degrees", self.fov_degrees));
        }
        check_positive("near", self.near)?;
        if !(self.far.is_finite() && self.far > self.near) {
            return Err(invalid("far", self.far));
        }
        if !self.start.iter().all(|c| c.is_finite()) {
            return Err(invalid("start", format!("{:?}", self.start)));
        }
        if !(0.0..=1.0).contains(&self.damping_factor) {
            return Err(invalid("damping_factor", self.damping_factor));
        }
        check_positive("min_distance", self.min_distance)?;
        check_positive("max_distance", self.max_distance)?;
        if self.min_distance > self.max_distance {
            return Err(invalid(
                "min_distance",
                format!("{} (above max_distance {})", self.min_distance, self.max_distance),
            ));
        }
        check_positive("max_polar_angle", self.max_polar_angle)?;
        if !self.rotate_speed.is_finite() {
            return Err(invalid("rotate_speed", self.rotate_speed));
        }
        if !self.zoom_speed.is_finite() {
            return Err(invalid("zoom_speed", self.zoom_speed));
        }
        Ok(())
    }
}

impl OrreryConfig {
    /// Check the merged file and CLI settings before anything is built from them.
    ///
    /// The scene table is checked separately when the animator resolves it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 {
            return Err(invalid("width", self.window.width));
        }
        if self.window.height == 0 {
            return Err(invalid("height", self.window.height));
        }
        if let StepMode::FixedRate { reference_hz } = self.animation.step_mode {
            if !(reference_hz.is_finite() && reference_hz > 0.0) {
                return Err(invalid("reference_hz", reference_hz));
            }
        }
        self.camera.validate()
    }
}
