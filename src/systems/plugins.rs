use bevy::prelude::*;

use crate::core::cli::CliArgs;
use crate::core::tracking::TrackingPlugin;
use crate::rendering::{
    CameraPlugin, DebugGizmoPlugin, SceneNodesPlugin, TrackedScenePlugin,
};
use crate::systems::input::MeasureInputPlugin;
use crate::systems::system_sets::MeasureSystemSetsPlugin;
use crate::ui::panes::measure_pane::MeasurePanePlugin;
use crate::ui::theme::WINDOW_TITLE;

/// Configure the default Bevy plugins with custom settings
pub fn configure_default_plugins(
    cli_args: &CliArgs,
) -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (cli_args.width, cli_args.height).into(),
                // Tell wasm to resize the window according to the available canvas
                fit_canvas_to_parent: true,
                // Tells wasm not to override default event handling, like F5, Ctrl+R etc.
                prevent_default_event_handling: false,
                ..default()
            }),
            ..default()
        })
        // Disable Bevy's default LogPlugin since we're using our own custom logger
        .build()
        .disable::<bevy::log::LogPlugin>()
}

/// Plugin to organize the scene the user measures in
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CameraPlugin, TrackedScenePlugin, DebugGizmoPlugin));
    }
}

/// Main application plugin that bundles all internal plugins
pub struct MeasureSystems;

impl Plugin for MeasureSystems {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            MeasureSystemSetsPlugin,
            TrackingPlugin,
            MeasureInputPlugin,
            SceneNodesPlugin,
            ScenePlugin,
            MeasurePanePlugin,
        ));
    }
}
