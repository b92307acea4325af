//! Scene table for the orrery: per-body orbit, spin and visual constants.
//!
//! The default table reproduces the classic four-body scene: a spinning sun at
//! the origin, two planets on circular orbits, and a moon circling the inner
//! planet's live position.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Where an orbit is centered.
///
/// `None` in [`OrbitConfig::center`] means the world origin.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Name of the body this orbit is centered on, or `None` for the origin.
    pub center: Option<String>,
    /// Orbit radius in scene units.
    pub radius: f64,
    /// Phase increment per tick (radians).
    pub angular_speed: f64,
    /// Constant vertical offset from the center's y coordinate.
    pub height: f64,
}

impl OrbitConfig {
    /// Orbit around the world origin.
    pub fn around_origin(radius: f64, angular_speed: f64) -> Self {
        Self {
            center: None,
            radius,
            angular_speed,
            height: 0.0,
        }
    }

    /// Orbit around another body's current position.
    pub fn around(center: impl Into<String>, radius: f64, angular_speed: f64) -> Self {
        Self {
            center: Some(center.into()),
            radius,
            angular_speed,
            height: 0.0,
        }
    }
}

/// Surface appearance of a body. Not read by the animator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyVisual {
    /// Asset path of the diffuse texture, relative to the assets directory.
    pub texture: Option<String>,
    /// sRGB tint, multiplied with the texture when one is present.
    pub color: [f32; 3],
    /// Sphere segment count (both sectors and stacks).
    pub segments: u32,
}

impl Default for BodyVisual {
    fn default() -> Self {
        Self {
            texture: None,
            color: [1.0, 1.0, 1.0],
            segments: 32,
        }
    }
}

/// One row of the scene table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Unique identifier, also used as the center reference by other bodies.
    pub name: String,
    /// Sphere radius, geometry only.
    pub radius: f32,
    /// Per-axis rotation increment per tick (radians).
    pub spin: [f64; 3],
    /// Circular orbit, or `None` for a body that stays put.
    pub orbit: Option<OrbitConfig>,
    pub visual: BodyVisual,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            radius: 1.0,
            spin: [0.0; 3],
            orbit: None,
            visual: BodyVisual::default(),
        }
    }
}

/// What a tracker is rendered as.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TrackerKind {
    /// Point light sitting on the target.
    PointLight { intensity: f32, range: f32 },
    /// Flat ring in the target's horizontal plane.
    Ring { radius: f32 },
}

/// An element that copies a body's position every tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub name: String,
    /// Name of the body to follow.
    pub target: String,
    /// Per-axis rotation increment per tick (radians).
    #[serde(default)]
    pub spin: [f64; 3],
    pub kind: TrackerKind,
}

/// The full table of bodies and trackers, enumerated once at startup.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub bodies: Vec<BodyConfig>,
    pub trackers: Vec<TrackerConfig>,
    /// Equirectangular star texture drawn on the inside of a large sphere.
    pub skybox: Option<String>,
    /// Draw circular guides along every orbit.
    pub orbit_paths: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            bodies: default_bodies(),
            trackers: default_trackers(),
            skybox: Some("skybox/stars_skybox.jpg".to_string()),
            orbit_paths: true,
        }
    }
}

impl SceneConfig {
    /// Scene with the given bodies and no trackers, skybox or guides.
    pub fn with_bodies(bodies: Vec<BodyConfig>) -> Self {
        Self {
            bodies,
            trackers: Vec::new(),
            skybox: None,
            orbit_paths: false,
        }
    }
}

/// Grey used for the moon, which has no texture (0xaaaaaa).
const MOON_GREY: f32 = 170.0 / 255.0;

/// The four-body default scene.
pub fn default_bodies() -> Vec<BodyConfig> {
    vec![
        BodyConfig {
            name: "sun".to_string(),
            radius: 15.0,
            spin: [0.01, 0.01, 0.0],
            orbit: None,
            visual: BodyVisual {
                texture: Some("textures/sun_diffuse.jpg".to_string()),
                ..BodyVisual::default()
            },
        },
        BodyConfig {
            name: "earth".to_string(),
            radius: 8.0,
            spin: [0.02, 0.02, 0.0],
            orbit: Some(OrbitConfig::around_origin(50.0, 0.02)),
            visual: BodyVisual {
                texture: Some("textures/earth_diffuse.jpg".to_string()),
                ..BodyVisual::default()
            },
        },
        BodyConfig {
            name: "mercury".to_string(),
            radius: 5.0,
            spin: [0.03, 0.03, 0.0],
            orbit: Some(OrbitConfig::around_origin(30.0, 0.03)),
            visual: BodyVisual {
                texture: Some("textures/mercury_diffuse.jpg".to_string()),
                ..BodyVisual::default()
            },
        },
        BodyConfig {
            name: "moon".to_string(),
            radius: 2.0,
            spin: [0.04, 0.04, 0.0],
            orbit: Some(OrbitConfig::around("mercury", 10.0, 0.05)),
            visual: BodyVisual {
                texture: None,
                color: [MOON_GREY; 3],
                ..BodyVisual::default()
            },
        },
    ]
}

/// Sun light and the decorative ring that rides along with the earth.
pub fn default_trackers() -> Vec<TrackerConfig> {
    vec![
        TrackerConfig {
            name: "sun_light".to_string(),
            target: "sun".to_string(),
            spin: [0.0; 3],
            kind: TrackerKind::PointLight {
                intensity: 1_000_000.0,
                range: 100.0,
            },
        },
        TrackerConfig {
            name: "earth_ring".to_string(),
            target: "earth".to_string(),
            spin: [0.0, 0.04, 0.0],
            kind: TrackerKind::Ring { radius: 15.0 },
        },
    ]
}
