//! User interface modules for the measuring view

pub mod panes;
pub mod theme;

// Re-export commonly used items
pub use panes::MeasurePanePlugin;
