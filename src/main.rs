// Measure distances between two tapped points, made with the Bevy game engine.

use armeasure::core::{create_app, CliArgs};
use armeasure::logger::init_custom_logger;
use bevy::prelude::*;
use clap::Parser;

fn main() {
    init_custom_logger();
    let cli_args = CliArgs::parse();

    match create_app(cli_args) {
        Ok(mut app) => {
            app.run();
        }
        Err(e) => {
            error!("Failed to start: {e:#}");
            std::process::exit(1);
        }
    }
}
