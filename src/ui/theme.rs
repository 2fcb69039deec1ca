use bevy::prelude::Color;

// Window Configuration
pub const WINDOW_TITLE: &str = "AR Measure";
pub const WINDOW_WIDTH: f32 = 1024.0;
pub const WINDOW_HEIGHT: f32 = 768.0;

// Background Color
pub const BACKGROUND_COLOR: Color = Color::srgb(0.05, 0.05, 0.05);

// Measurement Nodes
pub const MARKER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const LABEL_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
/// Font size of the on-screen label before the descriptor scale is applied
pub const LABEL_BASE_FONT_SIZE: f32 = 480.0;

// Tracked Surfaces
pub const FLOOR_COLOR: Color = Color::srgb(0.35, 0.35, 0.38);
pub const PROP_COLOR: Color = Color::srgb(0.55, 0.5, 0.45);

// Gizmo Configuration
pub const GIZMO_LINE_WIDTH: f32 = 2.0;
pub const HIT_POINT_GIZMO_COLOR: Color = Color::srgb(1.0, 0.9, 0.0);
pub const HIT_POINT_GIZMO_SIZE: f32 = 0.02;
pub const ORIGIN_GIZMO_LENGTH: f32 = 0.25;

// Measurement Pane
pub const WIDGET_TEXT_FONT_SIZE: f32 = 18.0;
pub const WIDGET_BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.85);
pub const WIDGET_BORDER_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 1.0);
pub const WIDGET_BORDER_WIDTH: f32 = 2.0;
pub const WIDGET_PADDING: f32 = 12.0;
pub const WIDGET_MARGIN: f32 = 16.0;
pub const WIDGET_ROW_GAP: f32 = 4.0;
pub const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub const SECONDARY_TEXT_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);
