//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use bevy::prelude::*;
use orrery::orbits::{BodyConfig, OrbitConfig, OrbitalAnimator, SceneConfig};
use orrery::render::{AnimatedBody, AnimatedTracker, SyncPlugin};
use orrery::time::TickPlugin;
use orrery::types::StepMode;

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

/// Expected offset from the center after `ticks` ticks starting at phase 0.
pub fn circle_offset(radius: f64, speed: f64, ticks: u64) -> DVec3 {
    let phase = ticks as f64 * speed;
    DVec3::new(radius * phase.cos(), 0.0, radius * phase.sin())
}

/// Headless app running the animator and transform sync, with one entity per
/// body and tracker.
pub fn headless_orrery(scene: &SceneConfig, step_mode: StepMode) -> App {
    let animator = OrbitalAnimator::new(scene).expect("test scene is valid");

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(step_mode)
        .add_plugins((TickPlugin, SyncPlugin));

    for body in animator.bodies() {
        let handle = animator.handle(&body.name).expect("body was just resolved");
        app.world_mut().spawn((
            Transform::default(),
            AnimatedBody(handle),
            Name::new(body.name.clone()),
        ));
    }
    for (index, tracker) in animator.trackers().iter().enumerate() {
        app.world_mut().spawn((
            Transform::default(),
            AnimatedTracker(index),
            Name::new(tracker.name.clone()),
        ));
    }

    app.insert_resource(animator);
    app
}

/// Translation of the entity carrying `name`.
pub fn translation_of(app: &mut App, name: &str) -> Vec3 {
    let mut query = app.world_mut().query::<(&Name, &Transform)>();
    query
        .iter(app.world())
        .find(|(n, _)| n.as_str() == name)
        .map(|(_, t)| t.translation)
        .unwrap_or_else(|| panic!("no entity named {name}"))
}
