//! Orbital animation model.
//!
//! - `data`: the scene table (per-body radius, speed, spin, center and visuals).
//! - `animator`: resolves the table once and advances positions/rotations each tick.
//!
//! Coordinate frame: y is up, orbits lie in planes parallel to x/z.

pub mod animator;
pub mod data;

#[cfg(test)]
mod proptest_orbits;

pub use animator::{
    Body, BodyHandle, Orbit, OrbitCenter, OrbitalAnimator, SceneError, SimulationState, Tracker,
};
pub use data::{
    BodyConfig, BodyVisual, OrbitConfig, SceneConfig, TrackerConfig, TrackerKind, default_bodies,
    default_trackers,
};
