//! The fill strategy capability.
//!
//! All strategies share the same observable contract: paint the
//! 4-connected component of the seed's original color, through the
//! per-call paint decision, mutating the raster in place. Invalid
//! geometry never errors; it leaves the raster untouched.

use crate::mask::{ColorKeyZones, OpaqueZones, Paint, mask_covers};
use floodfill_core::{Raster, RasterMut, Rgba, is_bounded};

/// A flood-fill algorithm.
///
/// Implementors provide [`fill_with_paint`](FillStrategy::fill_with_paint);
/// the mask-bearing entry points are layered on top of it and are shared
/// by every strategy.
///
/// All entry points are silent no-ops when the seed is out of bounds or
/// the seed pixel already equals the fill color, and the mask-bearing
/// ones additionally when the mask is smaller than the target raster in
/// either axis.
pub trait FillStrategy {
    /// Paint the component of the seed through an explicit paint decision.
    fn fill_with_paint(&self, raster: &mut RasterMut, x: i32, y: i32, paint: &Paint<'_>);

    /// Fill with a plain color.
    fn fill(&self, raster: &mut RasterMut, x: i32, y: i32, color: Rgba) {
        self.fill_with_paint(raster, x, y, &Paint::solid(color));
    }

    /// Fill, tinting pixels wherever the mask is not fully transparent.
    fn fill_with_mask(&self, raster: &mut RasterMut, x: i32, y: i32, color: Rgba, mask: &Raster) {
        if !mask_covers(mask, raster) {
            return;
        }
        let zones = OpaqueZones::new(mask);
        self.fill_with_paint(raster, x, y, &Paint::zoned(color, &zones));
    }

    /// Fill, tinting pixels wherever the mask equals `mask_color` exactly.
    fn fill_with_mask_color(
        &self,
        raster: &mut RasterMut,
        x: i32,
        y: i32,
        color: Rgba,
        mask_color: Rgba,
        mask: &Raster,
    ) {
        if !mask_covers(mask, raster) {
            return;
        }
        let zones = ColorKeyZones::new(mask, mask_color);
        self.fill_with_paint(raster, x, y, &Paint::zoned(color, &zones));
    }
}

/// Resolve the seed of a fill call.
///
/// Returns the in-bounds seed coordinate and the original packed color
/// at it, or `None` when the call must be a no-op (seed out of bounds,
/// or the seed pixel already equals the fill color).
pub(crate) fn fill_origin(
    raster: &RasterMut,
    x: i32,
    y: i32,
    paint: &Paint<'_>,
) -> Option<(u32, u32, u32)> {
    if !is_bounded(x, y, raster.width(), raster.height()) {
        return None;
    }
    let (sx, sy) = (x as u32, y as u32);
    let original = raster.get_pixel_unchecked(sx, sy);
    if original == paint.fill_color() {
        return None;
    }
    Some((sx, sy, original))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_origin_rejects_out_of_bounds() {
        let raster = RasterMut::new(4, 4).unwrap();
        let paint = Paint::solid(Rgba::BLACK);
        assert!(fill_origin(&raster, -1, 0, &paint).is_none());
        assert!(fill_origin(&raster, 0, -1, &paint).is_none());
        assert!(fill_origin(&raster, 4, 0, &paint).is_none());
        assert!(fill_origin(&raster, 0, 4, &paint).is_none());
    }

    #[test]
    fn test_fill_origin_rejects_same_color_seed() {
        let mut raster = RasterMut::new(4, 4).unwrap();
        raster.set_all(Rgba::WHITE);
        let paint = Paint::solid(Rgba::WHITE);
        assert!(fill_origin(&raster, 2, 2, &paint).is_none());
    }

    #[test]
    fn test_fill_origin_reports_original_color() {
        let mut raster = RasterMut::new(4, 4).unwrap();
        raster.set_all(Rgba::WHITE);
        let paint = Paint::solid(Rgba::BLACK);
        let (sx, sy, original) = fill_origin(&raster, 1, 2, &paint).unwrap();
        assert_eq!((sx, sy), (1, 2));
        assert_eq!(original, Rgba::WHITE.packed());
    }
}
