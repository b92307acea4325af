//! Body and tracker spawning.
//!
//! Each row of the scene table becomes an unlit textured sphere; trackers
//! become point lights or guide rings. Entities are linked back to the
//! animator so the sync systems can move them.

use bevy::prelude::*;

use super::orbits::OrbitRing;
use super::sync::{AnimatedBody, AnimatedTracker};
use super::textures::TextureRegistry;
use crate::orbits::{BodyVisual, OrbitalAnimator, SceneConfig, TrackerKind};
use crate::types::{euler_to_quat, to_render};

/// Plugin providing body and tracker spawning.
pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_bodies, spawn_trackers));
    }
}

/// Unlit material for a body: texture when configured, plain color otherwise.
fn body_material(
    visual: &BodyVisual,
    textures: &mut TextureRegistry,
    asset_server: &AssetServer,
) -> StandardMaterial {
    let [r, g, b] = visual.color;
    StandardMaterial {
        base_color: Color::srgb(r, g, b),
        base_color_texture: visual
            .texture
            .as_deref()
            .map(|path| textures.load(asset_server, path)),
        unlit: true,
        ..default()
    }
}

/// Spawn one sphere per body in the scene table.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut textures: ResMut<TextureRegistry>,
    asset_server: Res<AssetServer>,
    animator: Res<OrbitalAnimator>,
    scene: Res<SceneConfig>,
) {
    for config in &scene.bodies {
        let Some(handle) = animator.handle(&config.name) else {
            warn!("Body {} is missing from the animator, skipping", config.name);
            continue;
        };
        let body = animator.body(handle);

        let segments = config.visual.segments.max(3);
        let mesh = meshes.add(Sphere::new(body.radius).mesh().uv(segments, segments));
        let material = materials.add(body_material(&config.visual, &mut textures, &asset_server));

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(to_render(body.position))
                .with_rotation(euler_to_quat(body.rotation)),
            AnimatedBody(handle),
            Name::new(config.name.clone()),
        ));
    }

    info!("Spawned {} bodies", scene.bodies.len());
}

/// Spawn lights and rings that follow bodies.
fn spawn_trackers(mut commands: Commands, animator: Res<OrbitalAnimator>) {
    for (index, tracker) in animator.trackers().iter().enumerate() {
        let transform = Transform::from_translation(to_render(tracker.position))
            .with_rotation(euler_to_quat(tracker.rotation));
        let name = Name::new(tracker.name.clone());

        match tracker.kind {
            TrackerKind::PointLight { intensity, range } => {
                commands.spawn((
                    PointLight {
                        color: Color::WHITE,
                        intensity,
                        range,
                        shadows_enabled: true,
                        ..default()
                    },
                    transform,
                    AnimatedTracker(index),
                    name,
                ));
            }
            TrackerKind::Ring { radius } => {
                commands.spawn((OrbitRing { radius }, transform, AnimatedTracker(index), name));
            }
        }
    }

    debug!("Spawned {} trackers", animator.trackers().len());
}
