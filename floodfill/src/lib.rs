//! Floodfill - Paint-bucket flood fill for raster images
//!
//! # Overview
//!
//! This crate paints the contiguous same-colored region of a raster
//! around a seed point, the way a paint-bucket editing tool does:
//!
//! - Three interchangeable fill strategies with bit-identical output
//! - An optional mask raster that tints painted pixels inside marked
//!   zones with a brightness-adjusted variant of the fill color
//! - Silent, fail-safe no-ops for invalid geometry (out-of-bounds seed,
//!   seed already the fill color, undersized mask)
//!
//! # Example
//!
//! ```
//! use floodfill::{RasterMut, Rgba, fill};
//!
//! let mut raster = RasterMut::new(32, 32).unwrap();
//! raster.set_all(Rgba::WHITE);
//!
//! fill(&mut raster, 16, 16, Rgba::opaque(30, 120, 220));
//! assert_eq!(raster.get_rgba(0, 0), Some(Rgba::opaque(30, 120, 220)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use floodfill_core::*;

// Re-export the fill engine as a module
pub use floodfill_region as region;

// Surface the crate-level fill operations at the root
pub use floodfill_region::{fill, fill_with_mask, fill_with_mask_color};
