//! Test utilities for orbital animation tests.
//!
//! Provides fixtures for building scene tables and animators, and assertions
//! for checking positions on a circle.

use bevy::math::DVec3;

use crate::orbits::{BodyConfig, OrbitConfig, OrbitalAnimator, SceneConfig};

/// Fixtures for creating test scenes.
pub mod fixtures {
    use super::*;

    /// A spinless body on a circular orbit, around the origin when `center` is `None`.
    pub fn orbiting(name: &str, center: Option<&str>, radius: f64, speed: f64) -> BodyConfig {
        BodyConfig {
            name: name.to_string(),
            orbit: Some(OrbitConfig {
                center: center.map(str::to_string),
                ..OrbitConfig::around_origin(radius, speed)
            }),
            ..BodyConfig::default()
        }
    }

    /// Animator with a single body orbiting the origin.
    pub fn single_orbit_animator(radius: f64, speed: f64) -> OrbitalAnimator {
        let scene = SceneConfig::with_bodies(vec![orbiting("body", None, radius, speed)]);
        OrbitalAnimator::new(&scene).expect("single orbit scene is valid")
    }
}

/// Assertions for circular motion.
pub mod assertions {
    use super::*;

    /// Expected position after `ticks` ticks on a circle starting at phase 0.
    pub fn circle_point(center: DVec3, radius: f64, speed: f64, ticks: u64) -> DVec3 {
        let phase = ticks as f64 * speed;
        center + DVec3::new(radius * phase.cos(), 0.0, radius * phase.sin())
    }

    /// Assert two positions agree component-wise within `tolerance`.
    ///
    /// # Panics
    /// Panics if any component differs by more than `tolerance`.
    pub fn assert_position_near(actual: DVec3, expected: DVec3, tolerance: f64) {
        let diff = (actual - expected).abs().max_element();
        assert!(
            diff <= tolerance,
            "Position mismatch: actual={actual:?}, expected={expected:?}, diff={diff:.3e}, tolerance={tolerance:.3e}"
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    ///
    /// This app uses MinimalPlugins for a lightweight test environment.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_orbiting_fixture_builds_origin_orbit() {
        let body = fixtures::orbiting("a", None, 4.0, 0.25);
        let orbit = body.orbit.unwrap();
        assert!(orbit.center.is_none());
        assert_eq!(orbit.radius, 4.0);
        assert_eq!(orbit.angular_speed, 0.25);
        assert_eq!(body.spin, [0.0; 3]);
    }

    #[test]
    fn test_circle_point_quarter_turn() {
        let p = assertions::circle_point(DVec3::ZERO, 2.0, std::f64::consts::FRAC_PI_2, 1);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_orbit_animator_tracks_circle_point() {
        let mut animator = fixtures::single_orbit_animator(12.0, 0.07);
        for _ in 0..25 {
            animator.tick();
        }
        let expected = assertions::circle_point(DVec3::ZERO, 12.0, 0.07, animator.ticks());
        assertions::assert_position_near(animator.bodies()[0].position, expected, 1e-9);
    }

    #[test]
    fn test_headless_app_updates() {
        let mut app = bevy_test::headless_app();
        app.update();
    }
}
