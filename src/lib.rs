//! Orrery - Procedural Orbital Animation
//!
//! A library crate providing the orbital animator, scene configuration and
//! Bevy plugins for testing and integration purposes.

pub mod camera;
pub mod config;
pub mod orbits;
pub mod render;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;
