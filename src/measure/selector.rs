//! Point selection
//!
//! Keeps the anchor set and the markers shown for it in lockstep: one marker
//! per anchored point, all of them removed together when the set resets.

use bevy::prelude::*;

use crate::geometry::WorldPoint;
use crate::measure::anchor_set::AnchorSet;
use crate::measure::scene::{
    MarkerDescriptor, NodeDescriptor, NodeHandle, SceneSurface,
};

/// What a single selection did to the anchor set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionOutcome {
    /// The set now holds `count` points, not enough to measure
    Anchored { count: usize },
    /// The set is full; points in insertion order
    Pair { start: WorldPoint, end: WorldPoint },
}

impl SelectionOutcome {
    /// Size of the anchor set after the selection
    pub fn count(&self) -> usize {
        match self {
            SelectionOutcome::Anchored { count } => *count,
            SelectionOutcome::Pair { .. } => 2,
        }
    }
}

#[derive(Debug, Default)]
pub struct PointSelector {
    anchors: AnchorSet,
    markers: Vec<NodeHandle>,
}

impl PointSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn points(&self) -> &[WorldPoint] {
        self.anchors.points()
    }

    pub fn markers(&self) -> &[NodeHandle] {
        &self.markers
    }

    /// Anchor `point`, evicting the previous pair first when the set is full
    pub fn select(
        &mut self,
        point: WorldPoint,
        surface: &mut impl SceneSurface,
    ) -> SelectionOutcome {
        let evicted = self.anchors.insert(point);
        if !evicted.is_empty() {
            debug!(
                "[PointSelector::select] Evicting {} anchored points",
                evicted.len()
            );
            self.detach_markers(surface);
        }

        let marker =
            surface.attach(NodeDescriptor::Marker(MarkerDescriptor::at(point)));
        self.markers.push(marker);

        match self.anchors.pair() {
            Some((start, end)) => SelectionOutcome::Pair { start, end },
            None => SelectionOutcome::Anchored {
                count: self.anchors.len(),
            },
        }
    }

    /// Drop every anchored point together with its marker
    pub fn reset(&mut self, surface: &mut impl SceneSurface) {
        self.anchors.clear();
        self.detach_markers(surface);
    }

    fn detach_markers(&mut self, surface: &mut impl SceneSurface) {
        for marker in self.markers.drain(..) {
            surface.detach(marker);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::scene::{CommandQueue, SceneCommand};

    fn attached_markers(commands: &[SceneCommand]) -> usize {
        commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    SceneCommand::Attach {
                        descriptor: NodeDescriptor::Marker(_),
                        ..
                    }
                )
            })
            .count()
    }

    fn detached(commands: &[SceneCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, SceneCommand::Detach { .. }))
            .count()
    }

    #[test]
    fn test_first_two_selections_fill_the_set() {
        let mut selector = PointSelector::new();
        let mut queue = CommandQueue::new();
        let p1 = WorldPoint::new(0.0, 0.0, 0.0);
        let p2 = WorldPoint::new(1.0, 0.0, 0.0);

        assert_eq!(
            selector.select(p1, &mut queue),
            SelectionOutcome::Anchored { count: 1 }
        );
        let outcome = selector.select(p2, &mut queue);
        assert_eq!(outcome, SelectionOutcome::Pair { start: p1, end: p2 });
        assert_eq!(outcome.count(), 2);

        let commands: Vec<_> = queue.drain().collect();
        assert_eq!(attached_markers(&commands), 2);
        assert_eq!(detached(&commands), 0);
        assert_eq!(selector.markers().len(), 2);
    }

    #[test]
    fn test_third_selection_removes_both_markers() {
        let mut selector = PointSelector::new();
        let mut queue = CommandQueue::new();
        selector.select(WorldPoint::new(0.0, 0.0, 0.0), &mut queue);
        selector.select(WorldPoint::new(1.0, 0.0, 0.0), &mut queue);
        let old_markers = selector.markers().to_vec();
        queue.drain().for_each(drop);

        let p3 = WorldPoint::new(0.0, 1.0, 0.0);
        let outcome = selector.select(p3, &mut queue);
        assert_eq!(outcome, SelectionOutcome::Anchored { count: 1 });
        assert_eq!(selector.points(), &[p3]);

        let commands: Vec<_> = queue.drain().collect();
        assert_eq!(
            &commands[..2],
            &[
                SceneCommand::Detach {
                    handle: old_markers[0]
                },
                SceneCommand::Detach {
                    handle: old_markers[1]
                },
            ],
            "old markers should be detached before the new one is attached"
        );
        assert_eq!(attached_markers(&commands), 1);
        assert_eq!(selector.markers().len(), 1);
    }

    #[test]
    fn test_reset_detaches_everything() {
        let mut selector = PointSelector::new();
        let mut queue = CommandQueue::new();
        selector.select(WorldPoint::new(0.0, 0.0, 0.0), &mut queue);
        queue.drain().for_each(drop);

        selector.reset(&mut queue);
        assert!(selector.is_empty());
        assert!(selector.markers().is_empty());
        assert_eq!(queue.len(), 1);
    }
}
