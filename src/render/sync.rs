//! Position synchronization between the animator and rendering.
//!
//! Copies animator state (f64 scene units) into Bevy `Transform`s once the
//! animator has finished the frame's tick.

use bevy::prelude::*;

use crate::orbits::{BodyHandle, OrbitalAnimator};
use crate::types::{OrrerySet, euler_to_quat, to_render};

/// Links an entity to a body in the [`OrbitalAnimator`].
#[derive(Component, Clone, Copy, Debug)]
pub struct AnimatedBody(pub BodyHandle);

/// Links an entity to a tracker, by index into [`OrbitalAnimator::trackers`].
#[derive(Component, Clone, Copy, Debug)]
pub struct AnimatedTracker(pub usize);

/// Plugin copying animator state into transforms every frame.
pub struct SyncPlugin;

impl Plugin for SyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (sync_body_transforms, sync_tracker_transforms).in_set(OrrerySet::Sync),
        );
    }
}

/// Sync body render transforms from animator state.
pub fn sync_body_transforms(
    mut query: Query<(&mut Transform, &AnimatedBody)>,
    animator: Res<OrbitalAnimator>,
) {
    for (mut transform, AnimatedBody(handle)) in query.iter_mut() {
        let body = animator.body(*handle);
        transform.translation = to_render(body.position);
        transform.rotation = euler_to_quat(body.rotation);
    }
}

/// Sync tracker transforms (lights, rings) from animator state.
pub fn sync_tracker_transforms(
    mut query: Query<(&mut Transform, &AnimatedTracker)>,
    animator: Res<OrbitalAnimator>,
) {
    for (mut transform, AnimatedTracker(index)) in query.iter_mut() {
        let Some(tracker) = animator.trackers().get(*index) else {
            continue;
        };
        transform.translation = to_render(tracker.position);
        transform.rotation = euler_to_quat(tracker.rotation);
    }
}
