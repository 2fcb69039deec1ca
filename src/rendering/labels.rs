//! On-screen layout of distance labels
//!
//! Labels are UI text pinned to a world position. Every frame the position
//! is projected through the measuring camera; a label whose point is not
//! in front of the camera is hidden.

use bevy::prelude::*;

use crate::rendering::cameras::MeasureCamera;
use crate::ui::theme::LABEL_BASE_FONT_SIZE;

/// A distance label and where it sits in the world
#[derive(Component, Debug, Clone, Copy)]
pub struct MeasurementLabel {
    pub world_position: Vec3,
}

/// Font size for a label drawn with the given scale
pub fn label_font_size(scale: Vec3) -> f32 {
    LABEL_BASE_FONT_SIZE * scale.y
}

/// Keep every label over its world position
pub fn layout_labels(
    camera_query: Query<(&Camera, &GlobalTransform), With<MeasureCamera>>,
    mut labels: Query<(&MeasurementLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for (label, mut node, mut visibility) in labels.iter_mut() {
        match camera.world_to_viewport(camera_transform, label.world_position) {
            Ok(screen) => {
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y);
                *visibility = Visibility::Inherited;
            }
            Err(_) => *visibility = Visibility::Hidden,
        }
    }
}
