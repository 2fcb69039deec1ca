//! Tap two points on a 3D surface and see the distance between them.
//!
//! `measure` holds the selection and measurement logic and talks to the
//! scene only through [`measure::SceneSurface`]. Everything else wires it
//! into a Bevy app.

pub mod core;
pub mod geometry;
pub mod logger;
pub mod measure;
pub mod rendering;
pub mod systems;
pub mod ui;
