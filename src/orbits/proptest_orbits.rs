//! Property-based tests for the orbital animator using proptest.
//!
//! These tests check that the per-tick update matches the closed-form circle
//! parametrization across a wide range of radii, speeds and tick counts.

use proptest::prelude::*;

use super::animator::OrbitalAnimator;
use super::data::SceneConfig;
use crate::test_utils::fixtures;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// After k ticks an origin orbit sits at (r cos(ks), y0, r sin(ks)).
    #[test]
    fn prop_origin_orbit_matches_closed_form(
        radius in 0.0f64..500.0,
        speed in -0.5f64..0.5,
        ticks in 0usize..2000,
    ) {
        let mut animator = fixtures::single_orbit_animator(radius, speed);
        for _ in 0..ticks {
            animator.tick();
        }

        let phase = ticks as f64 * speed;
        let pos = animator.bodies()[0].position;
        let tolerance = 1e-9 * (1.0 + radius) * (1.0 + ticks as f64);
        prop_assert!((pos.x - radius * phase.cos()).abs() < tolerance, "x={} phase={}", pos.x, phase);
        prop_assert!((pos.z - radius * phase.sin()).abs() < tolerance, "z={} phase={}", pos.z, phase);
        prop_assert_eq!(pos.y, 0.0);
    }

    /// The body stays on its circle: distance to the center never drifts.
    #[test]
    fn prop_orbit_radius_is_preserved(
        radius in 0.1f64..500.0,
        speed in -1.0f64..1.0,
        ticks in 1usize..500,
    ) {
        let mut animator = fixtures::single_orbit_animator(radius, speed);
        for _ in 0..ticks {
            animator.tick();
            let pos = animator.bodies()[0].position;
            let distance = (pos.x * pos.x + pos.z * pos.z).sqrt();
            prop_assert!((distance - radius).abs() < 1e-9 * radius);
        }
    }

    /// A dependent body is its center's current position plus its own circle offset.
    #[test]
    fn prop_moon_offset_from_live_parent(
        planet_radius in 1.0f64..200.0,
        planet_speed in 0.0f64..0.2,
        moon_radius in 0.1f64..50.0,
        moon_speed in 0.0f64..0.2,
        ticks in 0usize..500,
    ) {
        let scene = SceneConfig::with_bodies(vec![
            fixtures::orbiting("planet", None, planet_radius, planet_speed),
            fixtures::orbiting("moon", Some("planet"), moon_radius, moon_speed),
        ]);
        let mut animator = OrbitalAnimator::new(&scene).unwrap();
        for _ in 0..ticks {
            animator.tick();
        }

        let planet = animator.body_named("planet").unwrap().position;
        let moon = animator.body_named("moon").unwrap().position;
        let phase = ticks as f64 * moon_speed;
        let tolerance = 1e-9 * (1.0 + moon_radius) * (1.0 + ticks as f64);
        prop_assert!((moon.x - (planet.x + moon_radius * phase.cos())).abs() < tolerance);
        prop_assert_eq!(moon.y, planet.y);
        prop_assert!((moon.z - (planet.z + moon_radius * phase.sin())).abs() < tolerance);
    }

    /// Rotation is additive: k ticks of a constant spin give k * spin.
    #[test]
    fn prop_rotation_is_additive(
        spin in prop::array::uniform3(-0.1f64..0.1),
        ticks in 0usize..2000,
    ) {
        let mut body = fixtures::orbiting("spinner", None, 0.0, 0.0);
        body.spin = spin;
        let mut animator = OrbitalAnimator::new(&SceneConfig::with_bodies(vec![body])).unwrap();
        for _ in 0..ticks {
            animator.tick();
        }

        let rotation = animator.bodies()[0].rotation;
        for (axis, expected) in [rotation.x, rotation.y, rotation.z].into_iter().zip(spin) {
            let target = expected * ticks as f64;
            prop_assert!((axis - target).abs() < 1e-12 * (1.0 + ticks as f64));
        }
    }

    /// Two animators built from the same table stay identical tick for tick.
    #[test]
    fn prop_animation_is_deterministic(ticks in 0usize..300) {
        let scene = SceneConfig::default();
        let mut a = OrbitalAnimator::new(&scene).unwrap();
        let mut b = OrbitalAnimator::new(&scene).unwrap();
        for _ in 0..ticks {
            a.tick();
            b.tick();
        }
        prop_assert_eq!(a.state(), b.state());
    }
}
