//! Orbit path rendering using Bevy Gizmos.
//!
//! Every orbiting body gets a circular guide centered on its center's *current*
//! position, so a moon's path travels with its planet. Tracker rings are drawn
//! around the body they follow, rotated by the tracker's accumulated spin.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::orbits::{OrbitCenter, OrbitalAnimator, SceneConfig};
use crate::types::{OrrerySet, to_render};

/// Segments per guide circle.
pub const PATH_SEGMENTS: u32 = 64;

/// Guide color (0x444444).
const PATH_COLOR: Color = Color::srgb(0.267, 0.267, 0.267);

/// Flat ring drawn in the local x/z plane of its entity's transform.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitRing {
    pub radius: f32,
}

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (draw_orbit_paths, draw_orbit_rings).in_set(OrrerySet::Draw),
        );
    }
}

/// Closed polyline approximating a circle of `radius` in the x/z plane of
/// `rotation`, centered on `center`. The first point is repeated at the end.
pub fn circle_points(center: Vec3, radius: f32, rotation: Quat, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * TAU;
            center + rotation * Vec3::new(theta.cos() * radius, 0.0, theta.sin() * radius)
        })
        .collect()
}

/// Draw one guide circle per orbiting body.
fn draw_orbit_paths(mut gizmos: Gizmos, scene: Res<SceneConfig>, animator: Res<OrbitalAnimator>) {
    if !scene.orbit_paths {
        return;
    }

    for body in animator.bodies() {
        let Some(orbit) = body.orbit.as_ref() else {
            continue;
        };
        let center = match orbit.center {
            OrbitCenter::Origin => Vec3::ZERO,
            OrbitCenter::Body(handle) => to_render(animator.body(handle).position),
        } + Vec3::Y * orbit.height as f32;

        gizmos.linestrip(
            circle_points(center, orbit.radius as f32, Quat::IDENTITY, PATH_SEGMENTS),
            PATH_COLOR,
        );
    }
}

/// Draw tracker rings at their synced transforms.
fn draw_orbit_rings(mut gizmos: Gizmos, rings: Query<(&OrbitRing, &Transform)>) {
    for (ring, transform) in rings.iter() {
        gizmos.linestrip(
            circle_points(transform.translation, ring.radius, transform.rotation, PATH_SEGMENTS),
            PATH_COLOR,
        );
    }
}
