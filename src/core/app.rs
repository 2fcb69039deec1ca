//! Application initialization and configuration

use crate::core::cli::CliArgs;
use crate::core::errors::MeasureResult;
use crate::core::settings::MeasureSettings;
use crate::systems::{configure_default_plugins, MeasureSystems};
use crate::ui::theme::BACKGROUND_COLOR;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Bevy application ready to run
pub fn create_app(cli_args: CliArgs) -> MeasureResult<App> {
    cli_args.validate()?;

    let mut app = App::new();
    configure_app_settings(&mut app, &cli_args);
    app.add_plugins(configure_default_plugins(&cli_args));
    app.insert_resource(cli_args);
    app.add_plugins(MeasureSystems);
    Ok(app)
}

/// Sets up application resources and configuration
fn configure_app_settings(app: &mut App, cli_args: &CliArgs) {
    let settings = MeasureSettings::from(cli_args);
    info!("Starting with {:?}", settings);

    app.insert_resource(settings)
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        // The scene is redrawn continuously, as a camera feed would be
        .insert_resource(WinitSettings::game());
}
