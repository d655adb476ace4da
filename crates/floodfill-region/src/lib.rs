//! floodfill-region - Flood fill strategies
//!
//! This crate paints the contiguous same-colored region of a raster
//! around a seed point, the way a paint-bucket tool does. Three
//! strategies implement the same observable contract:
//!
//! - [`BasicQueueFill`] - breadth-first node queue with a visited grid
//! - [`ScanlineQueueFill`] - breadth-first whole-span queue, no visited
//!   grid
//! - [`ScanlineSpanFill`] - iterative span-scan sweep with an explicit
//!   work list, the cheapest on large regions
//!
//! An optional mask raster marks zones whose painted pixels receive a
//! brightness-adjusted tint of the fill color instead of the color
//! itself (see [`mask`]).
//!
//! Fills never fail: an out-of-bounds seed, a seed already holding the
//! fill color, or a mask smaller than the target all leave the raster
//! untouched.
//!
//! # Examples
//!
//! ```
//! use floodfill_core::{RasterMut, Rgba};
//! use floodfill_region::fill;
//!
//! let mut raster = RasterMut::new(16, 16).unwrap();
//! raster.set_all(Rgba::WHITE);
//!
//! fill(&mut raster, 8, 8, Rgba::opaque(200, 0, 0));
//! assert_eq!(raster.get_rgba(0, 0), Some(Rgba::opaque(200, 0, 0)));
//! ```
//!
//! Picking a strategy explicitly:
//!
//! ```
//! use floodfill_core::{RasterMut, Rgba};
//! use floodfill_region::{BasicQueueFill, FillStrategy};
//!
//! let mut raster = RasterMut::new(4, 4).unwrap();
//! BasicQueueFill.fill(&mut raster, 0, 0, Rgba::BLACK);
//! assert_eq!(raster.get_rgba(3, 3), Some(Rgba::BLACK));
//! ```

pub mod adjust;
pub mod mask;
pub mod queue;
pub mod scanline;
pub mod span;
pub mod strategy;

// Re-export core types
pub use floodfill_core;

pub use adjust::{adjust_brightness, adjust_brightness_dynamic, brightness, is_dark};
pub use mask::{ColorKeyZones, OpaqueZones, Paint, ZonePredicate};
pub use queue::BasicQueueFill;
pub use scanline::ScanlineQueueFill;
pub use span::ScanlineSpanFill;
pub use strategy::FillStrategy;

use floodfill_core::{Raster, RasterMut, Rgba};

/// Fill the region around `(x, y)` with `color`.
///
/// Delegates to [`ScanlineSpanFill`]; use a strategy directly to pick a
/// different algorithm.
pub fn fill(raster: &mut RasterMut, x: i32, y: i32, color: Rgba) {
    ScanlineSpanFill.fill(raster, x, y, color);
}

/// Fill the region around `(x, y)` with `color`, tinting pixels where
/// `mask` is not fully transparent.
pub fn fill_with_mask(raster: &mut RasterMut, x: i32, y: i32, color: Rgba, mask: &Raster) {
    ScanlineSpanFill.fill_with_mask(raster, x, y, color, mask);
}

/// Fill the region around `(x, y)` with `color`, tinting pixels where
/// `mask` equals `mask_color` exactly (alpha included).
pub fn fill_with_mask_color(
    raster: &mut RasterMut,
    x: i32,
    y: i32,
    color: Rgba,
    mask_color: Rgba,
    mask: &Raster,
) {
    ScanlineSpanFill.fill_with_mask_color(raster, x, y, color, mask_color, mask);
}
