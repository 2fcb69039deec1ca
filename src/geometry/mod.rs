//! Geometric Primitives and Operations

pub mod world_space;

// Re-export commonly used items
pub use world_space::{euclidean_norm, subtract, WorldPoint, WorldVec};
