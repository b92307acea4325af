//! Camera system for the orrery.
//!
//! A perspective camera orbiting a target point: left drag rotates, right or
//! middle drag pans in screen space, the wheel zooms. Input accumulates into
//! pending deltas that are released gradually when damping is enabled.

use std::f32::consts::{PI, TAU};

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
    window::PrimaryWindow,
};

use crate::config::CameraConfig;

/// Keeps the polar angle away from the poles where `looking_at` degenerates.
const POLE_EPSILON: f32 = 1e-4;

/// Base zoom factor per wheel notch, raised to `zoom_speed`.
const ZOOM_BASE: f32 = 0.95;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical camera rig around `target`.
///
/// `theta` is the azimuth around +Y measured from +Z toward +X, `phi` the
/// polar angle from +Y.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_pan: Vec3,
    pending_zoom: f32,
}

impl OrbitCamera {
    /// Rig that places the eye at `eye`, looking at `target`.
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        Self {
            target,
            radius,
            theta: offset.x.atan2(offset.z),
            phi,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_pan: Vec3::ZERO,
            pending_zoom: 1.0,
        }
    }

    /// Current eye position.
    pub fn eye(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.target
            + Vec3::new(
                self.radius * sin_phi * sin_theta,
                self.radius * cos_phi,
                self.radius * sin_phi * cos_theta,
            )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    /// Queue a rotation from a pointer drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32, settings: &CameraConfig) {
        let per_pixel = TAU * settings.rotate_speed / viewport_height.max(1.0);
        self.pending_theta -= delta.x * per_pixel;
        self.pending_phi -= delta.y * per_pixel;
    }

    /// Queue a zoom; positive `scroll` moves the eye closer.
    pub fn zoom(&mut self, scroll: f32, settings: &CameraConfig) {
        if scroll == 0.0 {
            return;
        }
        let scale = ZOOM_BASE.powf(settings.zoom_speed * scroll.abs());
        if scroll > 0.0 {
            self.pending_zoom *= scale;
        } else {
            self.pending_zoom /= scale;
        }
    }

    /// Queue a screen-space pan from a pointer drag of `delta` pixels.
    pub fn pan(
        &mut self,
        delta: Vec2,
        viewport_height: f32,
        fov_radians: f32,
        settings: &CameraConfig,
    ) {
        if !settings.enable_pan {
            return;
        }
        let world_per_pixel = 2.0 * self.radius * (fov_radians * 0.5).tan() / viewport_height.max(1.0);
        let transform = self.transform();
        let right = *transform.right();
        let up = *transform.up();
        self.pending_pan += (-delta.x * right + delta.y * up) * world_per_pixel;
    }

    /// Apply pending input, honoring damping and distance/angle limits.
    pub fn update(&mut self, settings: &CameraConfig) {
        let damping = settings.damping_factor.clamp(0.0, 1.0);
        let (apply, keep) = if damping > 0.0 {
            (damping, 1.0 - damping)
        } else {
            (1.0, 0.0)
        };

        self.theta += self.pending_theta * apply;
        self.phi += self.pending_phi * apply;
        let max_phi = settings.max_polar_angle.min(PI) - POLE_EPSILON;
        self.phi = self.phi.clamp(POLE_EPSILON, max_phi.max(POLE_EPSILON));

        self.radius = (self.radius * self.pending_zoom)
            .clamp(settings.min_distance, settings.max_distance);
        self.pending_zoom = 1.0;

        self.target += self.pending_pan * apply;

        self.pending_theta *= keep;
        self.pending_phi *= keep;
        self.pending_pan *= keep;
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraConfig>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (orbit_camera_input, apply_orbit_camera).chain());
    }
}

/// Spawn the main camera with perspective projection.
fn setup_camera(mut commands: Commands, settings: Res<CameraConfig>) {
    let rig = OrbitCamera::from_eye(Vec3::from_array(settings.start), Vec3::ZERO);
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        rig.transform(),
        rig,
        MainCamera,
    ));
}

/// Translate mouse buttons, motion and wheel into pending camera motion.
fn orbit_camera_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Res<CameraConfig>,
    mut camera_query: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(mut rig) = camera_query.single_mut() else {
        return;
    };
    let viewport_height = window.height();

    if mouse_motion.delta != Vec2::ZERO {
        if mouse_buttons.pressed(MouseButton::Left) {
            rig.rotate(mouse_motion.delta, viewport_height, &settings);
        } else if mouse_buttons.pressed(MouseButton::Right)
            || mouse_buttons.pressed(MouseButton::Middle)
        {
            let fov = settings.fov_degrees.to_radians();
            rig.pan(mouse_motion.delta, viewport_height, fov, &settings);
        }
    }

    rig.zoom(mouse_scroll.delta.y, &settings);
}

/// Move the camera to the rig's current pose.
fn apply_orbit_camera(
    settings: Res<CameraConfig>,
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    for (mut rig, mut transform) in camera_query.iter_mut() {
        rig.update(&settings);
        *transform = rig.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rig() -> OrbitCamera {
        OrbitCamera::from_eye(Vec3::new(0.0, 100.0, 150.0), Vec3::ZERO)
    }

    #[test]
    fn test_from_eye_roundtrip() {
        let rig = rig();
        let eye = rig.eye();
        assert_relative_eq!(eye.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(eye.y, 100.0, epsilon = 1e-3);
        assert_relative_eq!(eye.z, 150.0, epsilon = 1e-3);
        assert_relative_eq!(rig.radius, (100.0f32 * 100.0 + 150.0 * 150.0).sqrt(), epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_clamped_to_distance_limits() {
        let settings = CameraConfig::default();
        let mut rig = rig();
        for _ in 0..200 {
            rig.zoom(1.0, &settings);
            rig.update(&settings);
        }
        assert_relative_eq!(rig.radius, settings.min_distance);

        for _ in 0..200 {
            rig.zoom(-1.0, &settings);
            rig.update(&settings);
        }
        assert_relative_eq!(rig.radius, settings.max_distance);
    }

    #[test]
    fn test_damping_releases_rotation_gradually() {
        let settings = CameraConfig::default();
        let mut rig = rig();
        let start = rig.theta;
        rig.rotate(Vec2::new(-100.0, 0.0), 720.0, &settings);

        rig.update(&settings);
        let first = rig.theta - start;
        rig.update(&settings);
        let second = rig.theta - start - first;

        assert!(first > 0.0);
        assert!(second > 0.0 && second < first);
        assert_relative_eq!(second, first * (1.0 - settings.damping_factor), epsilon = 1e-6);
    }

    #[test]
    fn test_no_damping_applies_immediately() {
        let settings = CameraConfig {
            damping_factor: 0.0,
            ..CameraConfig::default()
        };
        let mut rig = rig();
        let start = rig.theta;
        rig.rotate(Vec2::new(-72.0, 0.0), 720.0, &settings);
        rig.update(&settings);
        let moved = rig.theta - start;
        rig.update(&settings);
        assert_relative_eq!(rig.theta - start, moved);
        assert_relative_eq!(moved, TAU * 0.5 * 0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_polar_angle_stays_off_the_poles() {
        let settings = CameraConfig {
            damping_factor: 0.0,
            ..CameraConfig::default()
        };
        let mut rig = rig();
        rig.rotate(Vec2::new(0.0, 100_000.0), 720.0, &settings);
        rig.update(&settings);
        assert!(rig.phi >= POLE_EPSILON);
        assert!(rig.transform().translation.is_finite());
    }

    #[test]
    fn test_pan_disabled() {
        let settings = CameraConfig {
            enable_pan: false,
            ..CameraConfig::default()
        };
        let mut rig = rig();
        rig.pan(Vec2::new(50.0, 50.0), 720.0, 1.3, &settings);
        rig.update(&settings);
        assert_eq!(rig.target, Vec3::ZERO);
    }

    #[test]
    fn test_pan_moves_target_sideways() {
        let settings = CameraConfig {
            damping_factor: 0.0,
            ..CameraConfig::default()
        };
        let mut rig = rig();
        rig.pan(Vec2::new(-100.0, 0.0), 720.0, 75f32.to_radians(), &settings);
        rig.update(&settings);
        // Camera looks down -z from +z, so dragging left moves the target toward +x.
        assert!(rig.target.x > 0.0);
        assert_relative_eq!(rig.target.y, 0.0, epsilon = 1e-3);
    }
}
