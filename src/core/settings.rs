// Settings ///////////////////////////////////////////////////////////////////
// This module contains all the settings for the app.

use bevy::prelude::*;

use crate::core::cli::CliArgs;
use crate::measure::LabelFormat;

// Units //////////////////////////////////////////////////////////////////////

/// Feet per meter used for the displayed distance
pub const METERS_TO_FEET: f64 = 3.281;
/// Appended to the formatted feet value
pub const UNIT_SUFFIX: &str = "ft";

// Markers ////////////////////////////////////////////////////////////////////

/// Radius of the sphere placed on each anchored point, in meters
pub const MARKER_RADIUS: f32 = 0.005;

// Labels /////////////////////////////////////////////////////////////////////

/// Offset from the reference point to the label, in meters
/// The large negative z pushes the label away from the camera
pub const LABEL_OFFSET: (f64, f64, f64) = (0.0, 0.1, -5.0);
/// Uniform scale applied to the label geometry
pub const LABEL_SCALE: f32 = 0.05;
/// Extrusion depth of the label text geometry
pub const LABEL_EXTRUSION_DEPTH: f32 = 1.0;
/// Upper bound for `--label-decimals`
pub const MAX_LABEL_DECIMALS: usize = 10;

/// Runtime settings derived from the command line
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MeasureSettings {
    /// How the distance is printed on the label
    pub label_format: LabelFormat,
    /// Draw gizmos at anchored points
    pub show_hit_points: bool,
}

impl Default for MeasureSettings {
    fn default() -> Self {
        Self {
            label_format: LabelFormat::Shortest,
            show_hit_points: false,
        }
    }
}

impl From<&CliArgs> for MeasureSettings {
    fn from(args: &CliArgs) -> Self {
        Self {
            label_format: args
                .label_decimals
                .map_or(LabelFormat::Shortest, LabelFormat::Fixed),
            show_hit_points: args.debug,
        }
    }
}
