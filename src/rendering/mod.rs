//! Rendering and Visualization
//!
//! This module contains everything that puts the measurement on screen:
//! - Camera and default lighting for the tracked scene
//! - The tracked surfaces touches are resolved against
//! - Materializing markers and labels from scene commands
//! - Debug visualization tools

pub mod cameras;
pub mod debug;
pub mod labels;
pub mod scene_nodes;
pub mod tracked_scene;

// Re-export commonly used items
pub use cameras::CameraPlugin;
pub use debug::DebugGizmoPlugin;
pub use scene_nodes::SceneNodesPlugin;
pub use tracked_scene::TrackedScenePlugin;
