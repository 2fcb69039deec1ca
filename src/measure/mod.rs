//! Point selection and distance measurement
//!
//! This module holds all of the measuring logic and none of the engine:
//! - `anchor_set`: the two most recent anchored points
//! - `selector`: anchoring points and keeping one marker per point
//! - `engine`: distance in meters and feet
//! - `label`: the single floating distance label
//! - `scene`: descriptors and the attach/detach surface they go through
//! - `session`: ties the above together per view

pub mod anchor_set;
pub mod engine;
pub mod label;
pub mod scene;
pub mod selector;
pub mod session;

pub use anchor_set::{AnchorSet, ANCHOR_CAPACITY};
pub use engine::{measure, Measurement};
pub use label::{LabelFormat, LabelPlacer};
pub use scene::{
    CommandQueue, LabelDescriptor, MarkerDescriptor, NodeDescriptor,
    NodeHandle, SceneCommand, SceneSurface,
};
pub use selector::{PointSelector, SelectionOutcome};
pub use session::{HitTest, SelectionSession, SessionPhase};
