//! Texture loading with failure reporting.
//!
//! Textures are loaded asynchronously by the asset server. Each path is polled
//! until it either loads or fails; a failure is logged once and the body keeps
//! rendering with its plain color. Animation never waits on textures.

use bevy::asset::LoadState;
use bevy::prelude::*;

/// Outcome of a texture load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    Failed,
}

struct TextureEntry {
    path: String,
    handle: Handle<Image>,
    status: TextureStatus,
}

/// Every texture requested by the scene, with its load status.
#[derive(Resource, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    /// Start loading `path`, or return the handle of an earlier request.
    pub fn load(&mut self, asset_server: &AssetServer, path: &str) -> Handle<Image> {
        if let Some(entry) = self.entries.iter().find(|e| e.path == path) {
            return entry.handle.clone();
        }
        let handle = asset_server.load::<Image>(path.to_string());
        self.track(path, handle.clone());
        handle
    }

    fn track(&mut self, path: &str, handle: Handle<Image>) {
        self.entries.push(TextureEntry {
            path: path.to_string(),
            handle,
            status: TextureStatus::Pending,
        });
    }

    pub fn status(&self, path: &str) -> Option<TextureStatus> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.status)
    }

    /// Paths still waiting on the asset server.
    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == TextureStatus::Pending)
            .count()
    }
}

/// Status a pending texture moves to for a given load state, if any.
fn resolve(state: &LoadState) -> Option<TextureStatus> {
    match state {
        LoadState::Loaded => Some(TextureStatus::Loaded),
        LoadState::Failed(_) => Some(TextureStatus::Failed),
        LoadState::NotLoaded | LoadState::Loading => None,
    }
}

/// Plugin providing texture registration and load reporting.
pub struct TexturePlugin;

impl Plugin for TexturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextureRegistry>()
            .add_systems(Update, report_texture_loads);
    }
}

/// Poll pending textures and log each one's outcome exactly once.
fn report_texture_loads(mut registry: ResMut<TextureRegistry>, asset_server: Res<AssetServer>) {
    if registry.pending() == 0 {
        return;
    }

    for entry in registry
        .entries
        .iter_mut()
        .filter(|e| e.status == TextureStatus::Pending)
    {
        let Some(state) = asset_server.get_load_state(entry.handle.id()) else {
            continue;
        };
        let Some(status) = resolve(&state) else {
            continue;
        };

        match &state {
            LoadState::Failed(err) => error!("Error loading texture {}: {}", entry.path, err),
            _ => info!("Texture {} loaded successfully", entry.path),
        }
        entry.status = status;
    }
}
