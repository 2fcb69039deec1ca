//! Debug drawing for the tracked scene
//!
//! With `--debug`, a cross is drawn at every anchored point, a line joins
//! a completed pair and axes mark the world origin.

use bevy::gizmos::config::{DefaultGizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

use crate::core::settings::MeasureSettings;
use crate::systems::input::MeasureSession;
use crate::systems::system_sets::MeasureSets;
use crate::ui::theme::{
    GIZMO_LINE_WIDTH, HIT_POINT_GIZMO_COLOR, HIT_POINT_GIZMO_SIZE,
    ORIGIN_GIZMO_LENGTH,
};

pub struct DebugGizmoPlugin;

impl Plugin for DebugGizmoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_gizmos).add_systems(
            Update,
            draw_hit_points
                .run_if(show_hit_points)
                .in_set(MeasureSets::Layout),
        );
    }
}

fn show_hit_points(settings: Res<MeasureSettings>) -> bool {
    settings.show_hit_points
}

/// System to configure gizmo appearance
fn configure_gizmos(mut gizmo_store: ResMut<GizmoConfigStore>) {
    let (config, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = GIZMO_LINE_WIDTH;
}

pub fn draw_hit_points(session: Res<MeasureSession>, mut gizmos: Gizmos) {
    gizmos.axes(Transform::IDENTITY, ORIGIN_GIZMO_LENGTH);

    let points: Vec<Vec3> = session.points().iter().map(|p| p.to_vec3()).collect();
    for point in &points {
        gizmos.cross(
            Isometry3d::from_translation(*point),
            HIT_POINT_GIZMO_SIZE,
            HIT_POINT_GIZMO_COLOR,
        );
    }
    if let [start, end] = points.as_slice() {
        gizmos.line(*start, *end, HIT_POINT_GIZMO_COLOR);
    }
}
