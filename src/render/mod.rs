//! Rendering systems for the orrery.
//!
//! Spawns body spheres, trackers and the skybox, keeps their transforms in
//! step with the animator, and draws orbit guides.

mod background;
pub mod bodies;
pub mod orbits;
pub mod sync;
pub mod textures;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::BodyPlugin;
use self::orbits::OrbitPathPlugin;

// Re-export for use in other modules
pub use self::orbits::OrbitRing;
pub use self::sync::{AnimatedBody, AnimatedTracker, SyncPlugin};
pub use self::textures::{TexturePlugin, TextureRegistry, TextureStatus};

/// Plugin aggregating all rendering functionality.
///
/// Ordering within a frame is set up by `TickPlugin`:
/// 1. animate - the animator advances every body
/// 2. sync - transforms are copied from animator state
/// 3. draw - orbit guides and rings use the final positions
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            TexturePlugin,
            BodyPlugin,
            BackgroundPlugin,
            OrbitPathPlugin,
            SyncPlugin,
        ));
    }
}
