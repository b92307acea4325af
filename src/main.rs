//! Orrery - Procedural Orbital Animation
//!
//! A desktop application rendering a sun, two planets and a moon moving on
//! procedural circular orbits.

use std::process::ExitCode;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;

use orrery::camera::CameraPlugin;
use orrery::config::{CliArgs, ConfigError, OrreryConfig};
use orrery::orbits::OrbitalAnimator;
use orrery::render::RenderPlugin;
use orrery::time::TickPlugin;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(exit) if exit.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("orrery: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<AppExit, ConfigError> {
    let mut config = OrreryConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(args);
    config.validate()?;

    if let Some(path) = &args.write_default_config {
        config.save(path)?;
        println!("Wrote config to {}", path.display());
        return Ok(AppExit::Success);
    }

    // Resolve the scene before opening a window so table errors fail fast.
    let animator = OrbitalAnimator::new(&config.scene)?;
    let level: Level = config
        .log_level
        .parse()
        .map_err(|_| ConfigError::InvalidLogLevel(config.log_level.clone()))?;

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.window.title.clone(),
                        resolution: (config.window.width, config.window.height).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        // Insert resources before plugins that depend on them
        .insert_resource(animator)
        .insert_resource(config.animation.step_mode)
        .insert_resource(config.camera.clone())
        .insert_resource(config.scene.clone())
        .add_plugins((CameraPlugin, TickPlugin, RenderPlugin))
        .run();

    Ok(exit)
}
