//! Frame-driven advancement of the orbital animator.
//!
//! The host render loop is Bevy's `Update` schedule: the animator is ticked
//! once per frame, before any system reads body positions.

use bevy::prelude::*;

use crate::orbits::OrbitalAnimator;
use crate::types::{OrrerySet, StepMode};

/// Plugin providing per-frame animation.
///
/// Expects an [`OrbitalAnimator`] resource; inserts a default [`StepMode`]
/// if none is present.
pub struct TickPlugin;

impl Plugin for TickPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StepMode>()
            .configure_sets(
                Update,
                (OrrerySet::Animate, OrrerySet::Sync, OrrerySet::Draw).chain(),
            )
            .add_systems(Startup, log_animation_start)
            .add_systems(Update, advance_animation.in_set(OrrerySet::Animate));
    }
}

fn log_animation_start(animator: Res<OrbitalAnimator>, step_mode: Res<StepMode>) {
    info!(
        "Animating {} bodies and {} trackers, step mode {:?}",
        animator.bodies().len(),
        animator.trackers().len(),
        *step_mode
    );
}

/// Advance the animator by one frame's worth of motion.
///
/// In `PerFrame` mode each frame is exactly one tick regardless of how long
/// the frame took.
fn advance_animation(
    mut animator: ResMut<OrbitalAnimator>,
    step_mode: Res<StepMode>,
    time: Res<Time>,
) {
    match *step_mode {
        StepMode::PerFrame => animator.tick(),
        mode => animator.advance(mode.steps_for(time.delta_secs_f64())),
    }
}
