//!    Error handling
//!
//! This module provides error handling using anyhow.
//! The measuring core itself cannot fail; errors only come from
//! configuring the application.

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::Result;

/// Result type alias for convenience throughout the application
pub type MeasureResult<T> = Result<T>;

/// Window dimensions must be positive and finite
pub fn validate_window_size(width: f32, height: f32) -> MeasureResult<()> {
    ensure!(
        width.is_finite() && width > 0.0,
        "Window width must be a positive number, got: {}",
        width
    );
    ensure!(
        height.is_finite() && height > 0.0,
        "Window height must be a positive number, got: {}",
        height
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_validation() {
        assert!(validate_window_size(800.0, 600.0).is_ok());
        assert!(validate_window_size(-1.0, 600.0).is_err());
        assert!(validate_window_size(800.0, f32::NAN).is_err());
    }
}
