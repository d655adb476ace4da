//! Error types for floodfill-core
//!
//! Fill operations themselves never fail; the errors here cover the
//! constructive operations on the data model that can.

use thiserror::Error;

/// Floodfill core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate outside the raster
    #[error("pixel out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
