//! Distance between two anchored points

use crate::core::settings::METERS_TO_FEET;
use crate::geometry::{euclidean_norm, subtract, WorldPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub distance_meters: f64,
    pub distance_feet: f64,
    /// Where the label is anchored, the most recent point of the pair
    pub reference_point: WorldPoint,
}

/// Straight-line distance from `start` to `end`
pub fn measure(start: WorldPoint, end: WorldPoint) -> Measurement {
    let distance_meters = euclidean_norm(subtract(end, start));
    Measurement {
        distance_meters,
        distance_feet: distance_meters * METERS_TO_FEET,
        reference_point: end,
    }
}
