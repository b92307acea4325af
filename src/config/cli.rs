//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use super::OrreryConfig;
use crate::types::StepMode;

/// Animated sun, planets and moon.
///
/// CLI values override settings loaded from the config file.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Procedural orbital animation")]
pub struct CliArgs {
    /// Path to a RON config file (defaults to the built-in scene).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scale motion by frame time so this many frames per second equal one tick each.
    #[arg(long)]
    pub reference_hz: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Write the effective config to this path and exit.
    #[arg(long)]
    pub write_default_config: Option<PathBuf>,
}

impl OrreryConfig {
    /// Apply CLI overrides to a loaded config.
    ///
    /// Values are not range-checked here; call [`OrreryConfig::validate`] on
    /// the merged result.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(hz) = args.reference_hz {
            self.animation.step_mode = StepMode::FixedRate { reference_hz: hz };
        }
        if let Some(ref level) = args.log_level {
            self.log_level = level.clone();
        }
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
    }
}
