//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - Settings and CLI handling
//! - Error handling
//! - The tracking session lifecycle

pub mod app;
pub mod cli;
pub mod errors;
pub mod settings;
pub mod tracking;

// Re-export commonly used items
pub use app::create_app;
pub use cli::CliArgs;
pub use settings::MeasureSettings;
pub use tracking::{TrackingSession, TrackingState};
