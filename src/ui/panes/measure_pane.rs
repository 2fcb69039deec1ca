//! Measurement Pane Module
//!
//! A small panel in the top-left corner that mirrors the session: how many
//! points are anchored and the last measured distance in meters and feet.

use bevy::prelude::*;
use bevy::ui::UiRect;

use crate::core::tracking::TrackingSession;
use crate::measure::{SelectionSession, SessionPhase};
use crate::systems::input::MeasureSession;
use crate::systems::system_sets::MeasureSets;
use crate::ui::theme::*;

const LABEL_VALUE_SPACING: f32 = 8.0;
const HINT_TEXT: &str = "Click a surface twice to measure. R resets, arrows orbit.";

// ============================================================================
// COMPONENTS
// ============================================================================

/// Component marker for the measurement pane
#[derive(Component, Default)]
pub struct MeasurePane;

/// Which value a text node in the pane shows
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneField {
    Status,
    Meters,
    Feet,
}

/// Texts shown in the pane for a given session
#[derive(Debug, Clone, PartialEq)]
pub struct PaneValues {
    pub status: String,
    pub meters: String,
    pub feet: String,
}

impl PaneValues {
    pub fn from_session(session: &SelectionSession, tracking_running: bool) -> Self {
        let status = if !tracking_running {
            "Paused".to_string()
        } else {
            match session.phase() {
                SessionPhase::Empty => "Select a start point".to_string(),
                SessionPhase::OneSelected => "Select an end point".to_string(),
                SessionPhase::Measured => "Measured".to_string(),
            }
        };

        match session.last_measurement() {
            Some(m) => Self {
                status,
                meters: format!("{:.3} m", m.distance_meters),
                feet: session.placer().format().format_feet(m.distance_feet),
            },
            None => Self {
                status,
                meters: "-".to_string(),
                feet: "-".to_string(),
            },
        }
    }

    pub fn get(&self, field: PaneField) -> &str {
        match field {
            PaneField::Status => &self.status,
            PaneField::Meters => &self.meters,
            PaneField::Feet => &self.feet,
        }
    }
}

// ============================================================================
// PLUGIN
// ============================================================================

pub struct MeasurePanePlugin;

impl Plugin for MeasurePanePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_measure_pane).add_systems(
            Update,
            update_measure_pane.in_set(MeasureSets::Layout),
        );
    }
}

// ============================================================================
// UI CREATION
// ============================================================================

/// Spawns the measurement pane in the top-left corner
pub fn spawn_measure_pane(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(WIDGET_MARGIN),
                top: Val::Px(WIDGET_MARGIN),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(WIDGET_ROW_GAP),
                padding: UiRect::all(Val::Px(WIDGET_PADDING)),
                border: UiRect::all(Val::Px(WIDGET_BORDER_WIDTH)),
                ..default()
            },
            BackgroundColor(WIDGET_BACKGROUND_COLOR),
            BorderColor(WIDGET_BORDER_COLOR),
            MeasurePane,
            Name::new("MeasurePane"),
        ))
        .with_children(|parent| {
            spawn_row(parent, "Status:", PaneField::Status);
            spawn_row(parent, "Meters:", PaneField::Meters);
            spawn_row(parent, "Feet:", PaneField::Feet);
            parent.spawn((
                Text::new(HINT_TEXT),
                TextFont {
                    font_size: WIDGET_TEXT_FONT_SIZE * 0.75,
                    ..default()
                },
                TextColor(SECONDARY_TEXT_COLOR),
            ));
        });
}

fn spawn_row(parent: &mut ChildSpawnerCommands, label: &str, field: PaneField) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Node {
                    margin: UiRect::right(Val::Px(LABEL_VALUE_SPACING)),
                    ..default()
                },
                Text::new(label),
                TextFont {
                    font_size: WIDGET_TEXT_FONT_SIZE,
                    ..default()
                },
                TextColor(SECONDARY_TEXT_COLOR),
            ));
            row.spawn((
                Text::new("-"),
                TextFont {
                    font_size: WIDGET_TEXT_FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                field,
            ));
        });
}

// ============================================================================
// UPDATES
// ============================================================================

pub fn update_measure_pane(
    session: Res<MeasureSession>,
    tracking: Res<TrackingSession>,
    mut fields: Query<(&PaneField, &mut Text)>,
) {
    if !session.is_changed() && !tracking.is_changed() {
        return;
    }

    let values = PaneValues::from_session(&session, tracking.is_running());
    for (field, mut text) in fields.iter_mut() {
        let value = values.get(*field);
        if text.0 != value {
            text.0 = value.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::WorldPoint;
    use crate::measure::{CommandQueue, LabelFormat};

    #[test]
    fn test_values_follow_session() {
        let mut session = SelectionSession::new(LabelFormat::Fixed(2));
        let mut queue = CommandQueue::new();

        let values = PaneValues::from_session(&session, true);
        assert_eq!(values.status, "Select a start point");
        assert_eq!(values.get(PaneField::Meters), "-");

        session.select(WorldPoint::ORIGIN, &mut queue);
        assert_eq!(
            PaneValues::from_session(&session, true).status,
            "Select an end point"
        );

        session.select(WorldPoint::new(0.0, 0.0, 2.0), &mut queue);
        let values = PaneValues::from_session(&session, true);
        assert_eq!(values.status, "Measured");
        assert_eq!(values.meters, "2.000 m");
        assert_eq!(values.feet, "6.56ft");

        assert_eq!(PaneValues::from_session(&session, false).status, "Paused");
    }
}
