//! System Sets for the measuring view
//!
//! Each touch is handled to completion in one frame: input mutates the
//! session, the queued scene commands are applied, then labels are laid
//! out on screen.

use bevy::prelude::*;

/// System sets that define the execution order for measurement
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum MeasureSets {
    /// Touches, clicks and keyboard shortcuts
    Input,

    /// Spawn and despawn markers and labels from queued scene commands
    SceneSync,

    /// Position labels and debug drawing
    Layout,
}

/// Plugin to configure system set ordering
pub struct MeasureSystemSetsPlugin;

impl Plugin for MeasureSystemSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                MeasureSets::Input,
                MeasureSets::SceneSync,
                MeasureSets::Layout,
            )
                .chain(),
        );
    }
}
