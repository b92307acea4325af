//! Shared types for the orrery: system ordering, step mode and conversions.

use bevy::math::DVec3;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// System sets for the per-frame pipeline, chained in this order in `Update`.
///
/// The animator must finish moving every body before transforms are copied,
/// and guides are drawn from the copied transforms.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrrerySet {
    /// Advance the orbital animator.
    Animate,
    /// Copy animator state into `Transform`s.
    Sync,
    /// Draw orbit guides and tracker rings.
    Draw,
}

/// How much motion one rendered frame produces.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum StepMode {
    /// One fixed increment per frame; speed follows the display refresh rate.
    #[default]
    PerFrame,
    /// Increments scaled by frame time so that `reference_hz` frames per second
    /// match `PerFrame` exactly.
    FixedRate { reference_hz: f64 },
}

impl StepMode {
    /// Number of ticks' worth of motion for a frame lasting `delta_secs`.
    pub fn steps_for(&self, delta_secs: f64) -> f64 {
        match *self {
            StepMode::PerFrame => 1.0,
            StepMode::FixedRate { reference_hz } => delta_secs * reference_hz,
        }
    }
}

/// Convert a scene-space position to render coordinates.
pub fn to_render(position: DVec3) -> Vec3 {
    position.as_vec3()
}

/// Convert accumulated per-axis angles (XYZ order) to a render rotation.
///
/// Angles are wrapped to [0, 2π) before narrowing to f32 so long runs keep
/// full precision.
pub fn euler_to_quat(rotation: DVec3) -> Quat {
    let wrapped = DVec3::new(
        rotation.x.rem_euclid(TAU),
        rotation.y.rem_euclid(TAU),
        rotation.z.rem_euclid(TAU),
    )
    .as_vec3();
    Quat::from_euler(EulerRot::XYZ, wrapped.x, wrapped.y, wrapped.z)
}
