//! Bevy Systems and Plugins
//!
//! This module contains Bevy-specific systems and plugin configurations:
//! - Plugin management and configuration
//! - Touch, mouse and keyboard handling for the measuring view
//! - System ordering

pub mod input;
pub mod plugins;
pub mod system_sets;

// Re-export commonly used items
pub use input::{MeasureInputPlugin, MeasureSession};
pub use plugins::{configure_default_plugins, MeasureSystems};
pub use system_sets::{MeasureSets, MeasureSystemSetsPlugin};
