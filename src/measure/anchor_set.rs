//! Fixed capacity buffer of anchored points
//!
//! Holds at most two points. Inserting into a full set clears it first, so
//! once two points exist the set always contains the latest pair.

use crate::geometry::WorldPoint;

/// Number of points a measurement needs
pub const ANCHOR_CAPACITY: usize = 2;

/// Ordered anchor points, oldest first. Length is always 0, 1 or 2.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorSet {
    points: Vec<WorldPoint>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(ANCHOR_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.points.len() == ANCHOR_CAPACITY
    }

    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    /// The `(start, end)` pair when the set is full
    pub fn pair(&self) -> Option<(WorldPoint, WorldPoint)> {
        match self.points.as_slice() {
            [start, end] => Some((*start, *end)),
            _ => None,
        }
    }

    /// Clear-then-insert. Returns the points evicted by this call, which
    /// is either nothing or the whole previous pair.
    pub fn insert(&mut self, point: WorldPoint) -> Vec<WorldPoint> {
        let evicted = if self.is_full() {
            std::mem::take(&mut self.points)
        } else {
            Vec::new()
        };
        self.points.push(point);
        evicted
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
