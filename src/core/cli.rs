//! Command line arguments for the application

use bevy::prelude::*;
use clap::Parser;

use crate::core::errors::{validate_window_size, MeasureResult};
use crate::core::settings::MAX_LABEL_DECIMALS;
use crate::ui::theme::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// command line arguments for the measuring view
#[derive(Parser, Debug, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// draw gizmos at anchored points and the world origin
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// print the distance with this many decimal places instead of the
    /// shortest exact form
    #[arg(long = "label-decimals")]
    pub label_decimals: Option<usize>,

    /// window width in logical pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: f32,

    /// window height in logical pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: f32,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            debug: false,
            label_decimals: None,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl CliArgs {
    pub fn validate(&self) -> MeasureResult<()> {
        if let Some(decimals) = self.label_decimals {
            anyhow::ensure!(
                decimals <= MAX_LABEL_DECIMALS,
                "--label-decimals must be at most {}, got {}",
                MAX_LABEL_DECIMALS,
                decimals
            );
        }
        validate_window_size(self.width, self.height)?;
        Ok(())
    }
}
