//! Distance label placement
//!
//! Turns a [`Measurement`] into a [`LabelDescriptor`] and keeps exactly one
//! label attached to the scene: the previous label is detached before the
//! new one goes in.

use bevy::prelude::*;

use crate::core::settings::{LABEL_OFFSET, LABEL_SCALE, UNIT_SUFFIX};
use crate::measure::engine::Measurement;
use crate::measure::scene::{
    LabelDescriptor, NodeDescriptor, NodeHandle, SceneSurface,
};

/// How the feet value is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelFormat {
    /// Shortest text that round-trips the value at single precision,
    /// e.g. `3.281`. Hit points arrive as `f32`, so digits past that
    /// precision are noise.
    #[default]
    Shortest,
    /// Fixed number of decimal places
    Fixed(usize),
}

impl LabelFormat {
    pub fn format_feet(self, feet: f64) -> String {
        match self {
            LabelFormat::Shortest => {
                format!("{}{UNIT_SUFFIX}", feet as f32)
            }
            LabelFormat::Fixed(decimals) => {
                format!("{feet:.decimals$}{UNIT_SUFFIX}")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct LabelPlacer {
    format: LabelFormat,
    current: Option<NodeHandle>,
}

impl LabelPlacer {
    pub fn new(format: LabelFormat) -> Self {
        Self {
            format,
            current: None,
        }
    }

    pub fn format(&self) -> LabelFormat {
        self.format
    }

    /// Handle of the label currently on display
    pub fn current(&self) -> Option<NodeHandle> {
        self.current
    }

    /// Build the label for `measurement` and swap it in for the old one
    pub fn place(
        &mut self,
        measurement: &Measurement,
        surface: &mut impl SceneSurface,
    ) -> LabelDescriptor {
        let descriptor = self.describe(measurement);

        self.clear(surface);
        let handle =
            surface.attach(NodeDescriptor::Label(descriptor.clone()));
        self.current = Some(handle);

        info!(
            "Measured {:.4} m, showing '{}' at {:?}",
            measurement.distance_meters, descriptor.text, descriptor.position
        );
        descriptor
    }

    /// Text, position and scale for `measurement` without touching the scene
    pub fn describe(&self, measurement: &Measurement) -> LabelDescriptor {
        let (dx, dy, dz) = LABEL_OFFSET;
        LabelDescriptor::new(
            self.format.format_feet(measurement.distance_feet),
            measurement.reference_point.offset(dx, dy, dz),
            Vec3::splat(LABEL_SCALE),
        )
    }

    /// Detach the label on display, if any
    pub fn clear(&mut self, surface: &mut impl SceneSurface) {
        if let Some(previous) = self.current.take() {
            surface.detach(previous);
        }
    }
}
