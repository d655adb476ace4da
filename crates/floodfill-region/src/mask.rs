//! Mask overlay: per-pixel paint decisions driven by a companion raster.
//!
//! A mask raster marks zones of the target image. Pixels painted inside
//! a marked zone receive a brightness-adjusted tint of the fill color;
//! pixels outside receive the fill color unchanged. Two zone predicates
//! exist and are deliberately kept as distinct types: one matches a key
//! color exactly (alpha included), the other treats any non-transparent
//! mask pixel as marked.

use crate::adjust::adjust_brightness_dynamic;
use floodfill_core::{Raster, RasterMut, Rgba, color};

/// Tint factor applied when the fill color is light.
const ZONE_WHEN_LIGHT: f32 = 0.75;
/// Tint factor applied when the fill color is dark.
const ZONE_WHEN_DARK: f32 = 1.5;

/// Per-pixel predicate marking tint zones in a mask raster.
///
/// Implementations may assume the queried coordinate lies inside the
/// mask; callers guarantee this by rejecting masks smaller than the
/// target raster before painting anything.
pub trait ZonePredicate {
    /// Whether the zone is active at (x, y).
    fn is_active(&self, x: u32, y: u32) -> bool;
}

/// Zone predicate matching a key color exactly, alpha included.
pub struct ColorKeyZones<'a> {
    mask: &'a Raster,
    key: u32,
}

impl<'a> ColorKeyZones<'a> {
    /// Create a predicate active where `mask` equals `key` exactly.
    pub fn new(mask: &'a Raster, key: Rgba) -> Self {
        Self {
            mask,
            key: key.packed(),
        }
    }
}

impl ZonePredicate for ColorKeyZones<'_> {
    #[inline]
    fn is_active(&self, x: u32, y: u32) -> bool {
        self.mask.get_pixel_unchecked(x, y) == self.key
    }
}

/// Zone predicate active wherever the mask pixel is not fully
/// transparent (alpha nonzero), whatever its color.
pub struct OpaqueZones<'a> {
    mask: &'a Raster,
}

impl<'a> OpaqueZones<'a> {
    /// Create a predicate active where `mask` has nonzero alpha.
    pub fn new(mask: &'a Raster) -> Self {
        Self { mask }
    }
}

impl ZonePredicate for OpaqueZones<'_> {
    #[inline]
    fn is_active(&self, x: u32, y: u32) -> bool {
        color::alpha(self.mask.get_pixel_unchecked(x, y)) != 0
    }
}

/// The paint decision for one fill call.
///
/// Resolved once from the fill color and an optional zone predicate;
/// every strategy paints exclusively through [`Paint::color_at`]. The
/// tint is derived from the fill color up front, so a masked fill costs
/// one predicate query per painted pixel and nothing more.
pub struct Paint<'a> {
    fill: u32,
    tint: u32,
    zones: Option<&'a dyn ZonePredicate>,
}

impl<'a> Paint<'a> {
    /// A plain fill: every painted pixel receives `color`.
    pub fn solid(color: Rgba) -> Self {
        let fill = color.packed();
        Self {
            fill,
            tint: fill,
            zones: None,
        }
    }

    /// A masked fill: pixels in active zones receive a tint of `color`,
    /// the rest receive `color` itself.
    pub fn zoned(color: Rgba, zones: &'a dyn ZonePredicate) -> Self {
        Self {
            fill: color.packed(),
            tint: adjust_brightness_dynamic(color, ZONE_WHEN_LIGHT, ZONE_WHEN_DARK).packed(),
            zones: Some(zones),
        }
    }

    /// The packed plain fill color (used for the seed no-op test).
    #[inline]
    pub fn fill_color(&self) -> u32 {
        self.fill
    }

    /// The packed color to paint at (x, y).
    #[inline]
    pub fn color_at(&self, x: u32, y: u32) -> u32 {
        match self.zones {
            Some(zones) if zones.is_active(x, y) => self.tint,
            _ => self.fill,
        }
    }
}

/// Whether `mask` is large enough to overlay `target`.
///
/// A mask narrower or shorter than the target cannot be consulted at
/// every target coordinate, so the whole fill call must back out.
pub(crate) fn mask_covers(mask: &Raster, target: &RasterMut) -> bool {
    mask.width() >= target.width() && mask.height() >= target.height()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::adjust_brightness;
    use floodfill_core::RasterMut;

    fn mask_with(pixels: &[(u32, u32, Rgba)]) -> Raster {
        let mut rm = RasterMut::new(4, 4).unwrap();
        for &(x, y, c) in pixels {
            rm.set_rgba(x, y, c).unwrap();
        }
        rm.into()
    }

    #[test]
    fn test_color_key_requires_exact_match() {
        let key = Rgba::new(10, 20, 30, 255);
        let mask = mask_with(&[
            (0, 0, key),
            (1, 0, Rgba::new(10, 20, 30, 254)),
            (2, 0, Rgba::new(10, 20, 31, 255)),
        ]);
        let zones = ColorKeyZones::new(&mask, key);
        assert!(zones.is_active(0, 0));
        assert!(!zones.is_active(1, 0)); // alpha differs
        assert!(!zones.is_active(2, 0)); // blue differs
        assert!(!zones.is_active(3, 3)); // untouched pixel
    }

    #[test]
    fn test_opaque_zones_inspect_alpha_only() {
        let mask = mask_with(&[
            (0, 0, Rgba::new(0, 0, 0, 1)),
            (1, 0, Rgba::new(200, 100, 50, 0)),
        ]);
        let zones = OpaqueZones::new(&mask);
        assert!(zones.is_active(0, 0)); // barely opaque counts
        assert!(!zones.is_active(1, 0)); // colored but transparent does not
        assert!(!zones.is_active(3, 3));
    }

    #[test]
    fn test_solid_paint_is_uniform() {
        let color = Rgba::opaque(1, 2, 3);
        let paint = Paint::solid(color);
        assert_eq!(paint.color_at(0, 0), color.packed());
        assert_eq!(paint.color_at(3, 3), color.packed());
        assert_eq!(paint.fill_color(), color.packed());
    }

    #[test]
    fn test_zoned_paint_tints_active_pixels() {
        let mask = mask_with(&[(1, 1, Rgba::opaque(255, 0, 0))]);
        let zones = OpaqueZones::new(&mask);
        let color = Rgba::opaque(100, 30, 200); // dark, so the tint lightens
        let paint = Paint::zoned(color, &zones);
        assert_eq!(paint.color_at(0, 0), color.packed());
        assert_eq!(
            paint.color_at(1, 1),
            adjust_brightness(color, 1.5).packed()
        );
    }
}
