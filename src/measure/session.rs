//! Selection session
//!
//! Owns everything a measurement needs between touches: the anchored points,
//! their markers and the label on display. One session per view; nothing
//! here is global.

use bevy::prelude::*;

use crate::geometry::WorldPoint;
use crate::measure::engine::{measure, Measurement};
use crate::measure::label::{LabelFormat, LabelPlacer};
use crate::measure::scene::SceneSurface;
use crate::measure::selector::{PointSelector, SelectionOutcome};

/// Resolves a screen coordinate to a point on a tracked surface
pub trait HitTest {
    fn hit_test(&mut self, screen: Vec2) -> Option<WorldPoint>;
}

/// Where the session is in the select/measure cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    OneSelected,
    Measured,
}

#[derive(Debug, Default)]
pub struct SelectionSession {
    selector: PointSelector,
    placer: LabelPlacer,
    last_measurement: Option<Measurement>,
}

impl SelectionSession {
    pub fn new(format: LabelFormat) -> Self {
        Self {
            selector: PointSelector::new(),
            placer: LabelPlacer::new(format),
            last_measurement: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.selector.len() {
            0 => SessionPhase::Empty,
            1 => SessionPhase::OneSelected,
            _ => SessionPhase::Measured,
        }
    }

    pub fn points(&self) -> &[WorldPoint] {
        self.selector.points()
    }

    /// The measurement behind the label currently on display
    pub fn last_measurement(&self) -> Option<&Measurement> {
        self.last_measurement.as_ref()
    }

    pub fn selector(&self) -> &PointSelector {
        &self.selector
    }

    pub fn placer(&self) -> &LabelPlacer {
        &self.placer
    }

    /// Hit-test `screen` and select the resolved point. A miss does nothing.
    pub fn handle_touch(
        &mut self,
        screen: Vec2,
        hit_test: &mut impl HitTest,
        surface: &mut impl SceneSurface,
    ) -> Option<SelectionOutcome> {
        let Some(point) = hit_test.hit_test(screen) else {
            debug!("[handle_touch] No surface under {:?}", screen);
            return None;
        };
        if !point.is_finite() {
            warn!("[handle_touch] Ignoring non-finite hit {:?}", point);
            return None;
        }
        Some(self.select(point, surface))
    }

    /// Anchor `point`; measure and relabel when it completes a pair
    pub fn select(
        &mut self,
        point: WorldPoint,
        surface: &mut impl SceneSurface,
    ) -> SelectionOutcome {
        let outcome = self.selector.select(point, surface);
        debug!("[select] Anchored {:?} -> {:?}", point, outcome);

        if let SelectionOutcome::Pair { start, end } = outcome {
            let measurement = measure(start, end);
            self.placer.place(&measurement, surface);
            self.last_measurement = Some(measurement);
        }
        outcome
    }

    /// Back to an empty session with nothing on screen
    pub fn reset(&mut self, surface: &mut impl SceneSurface) {
        self.selector.reset(surface);
        self.placer.clear(surface);
        self.last_measurement = None;
        info!("Measurement session reset");
    }
}
