//! Background rendering: a textured star sphere surrounding the scene.

use bevy::prelude::*;

use super::textures::TextureRegistry;
use crate::config::CameraConfig;
use crate::orbits::SceneConfig;

/// Fraction of the camera far plane used as the skybox radius.
///
/// With the default limits (far 1000, max distance 300) the far side of a
/// 600-unit sphere is always within range.
const SKYBOX_FAR_FRACTION: f32 = 0.6;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_skybox);
    }
}

/// Spawn the inward-facing star sphere, if the scene names a skybox texture.
fn spawn_skybox(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut textures: ResMut<TextureRegistry>,
    asset_server: Res<AssetServer>,
    scene: Res<SceneConfig>,
    camera: Res<CameraConfig>,
) {
    let Some(path) = scene.skybox.as_deref() else {
        debug!("No skybox configured");
        return;
    };

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(textures.load(&asset_server, path)),
        unlit: true,
        cull_mode: None,
        double_sided: true,
        ..default()
    });
    let radius = camera.far * SKYBOX_FAR_FRACTION;

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(64, 32))),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Name::new("skybox"),
    ));

    info!("Skybox requested from {}", path);
}
