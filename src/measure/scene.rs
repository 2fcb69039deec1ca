//! Scene surface interface
//!
//! The measurement core never touches the scene graph directly. It describes
//! what should be visible with declarative descriptors and asks a
//! [`SceneSurface`] to attach or detach them. The surface hands back an
//! opaque [`NodeHandle`] for every attached node.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::core::settings::{LABEL_EXTRUSION_DEPTH, MARKER_RADIUS};
use crate::geometry::WorldPoint;
use crate::ui::theme::{LABEL_COLOR, MARKER_COLOR};

/// Opaque id of a node attached through a [`SceneSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub u64);

/// A small sphere placed on an anchored point
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDescriptor {
    pub position: WorldPoint,
    pub radius: f32,
    pub color: Color,
}

impl MarkerDescriptor {
    pub fn at(position: WorldPoint) -> Self {
        Self {
            position,
            radius: MARKER_RADIUS,
            color: MARKER_COLOR,
        }
    }
}

/// Floating distance text
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDescriptor {
    pub text: String,
    pub position: WorldPoint,
    pub scale: Vec3,
    /// Extrusion depth of the text geometry
    pub depth: f32,
    pub color: Color,
}

impl LabelDescriptor {
    pub fn new(text: String, position: WorldPoint, scale: Vec3) -> Self {
        Self {
            text,
            position,
            scale,
            depth: LABEL_EXTRUSION_DEPTH,
            color: LABEL_COLOR,
        }
    }
}

/// Anything the core can put into the scene
#[derive(Debug, Clone, PartialEq)]
pub enum NodeDescriptor {
    Marker(MarkerDescriptor),
    Label(LabelDescriptor),
}

/// The rendering surface as seen by the measurement core.
///
/// Both operations are assumed to succeed while the session is active.
pub trait SceneSurface {
    /// Add a node to the visible scene
    fn attach(&mut self, descriptor: NodeDescriptor) -> NodeHandle;

    /// Remove a previously attached node
    fn detach(&mut self, handle: NodeHandle);
}

/// A single scene mutation issued by the core
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    Attach {
        handle: NodeHandle,
        descriptor: NodeDescriptor,
    },
    Detach {
        handle: NodeHandle,
    },
}

/// A [`SceneSurface`] that records commands in order.
///
/// The Bevy side drains it every frame and turns the commands into entity
/// spawns and despawns.
#[derive(Resource, Debug, Default)]
pub struct CommandQueue {
    next_handle: u64,
    pending: VecDeque<SceneCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Take every pending command, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = SceneCommand> + '_ {
        self.pending.drain(..)
    }
}

impl SceneSurface for CommandQueue {
    fn attach(&mut self, descriptor: NodeDescriptor) -> NodeHandle {
        let handle = NodeHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push_back(SceneCommand::Attach { handle, descriptor });
        handle
    }

    fn detach(&mut self, handle: NodeHandle) {
        self.pending.push_back(SceneCommand::Detach { handle });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique_and_commands_ordered() {
        let mut queue = CommandQueue::new();
        let a = queue.attach(NodeDescriptor::Marker(MarkerDescriptor::at(
            WorldPoint::ORIGIN,
        )));
        let b = queue.attach(NodeDescriptor::Marker(MarkerDescriptor::at(
            WorldPoint::new(1.0, 0.0, 0.0),
        )));
        queue.detach(a);

        assert_ne!(a, b);
        assert_eq!(queue.len(), 3);

        let commands: Vec<_> = queue.drain().collect();
        assert!(matches!(commands[0], SceneCommand::Attach { handle, .. } if handle == a));
        assert!(matches!(commands[1], SceneCommand::Attach { handle, .. } if handle == b));
        assert_eq!(commands[2], SceneCommand::Detach { handle: a });
        assert!(queue.is_empty(), "drain should empty the queue");
    }

    #[test]
    fn test_marker_descriptor_defaults() {
        let marker = MarkerDescriptor::at(WorldPoint::new(0.1, 0.2, 0.3));
        assert_eq!(marker.radius, 0.005);
        assert_eq!(marker.color, Color::srgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_label_descriptor_defaults() {
        let label = LabelDescriptor::new(
            "1ft".to_string(),
            WorldPoint::ORIGIN,
            Vec3::splat(0.05),
        );
        assert_eq!(label.depth, 1.0);
        assert_eq!(label.color, Color::srgb(1.0, 0.0, 0.0));
    }
}
