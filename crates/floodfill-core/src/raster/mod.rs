//! The raster image container.
//!
//! `Raster` is the image type every fill operation works on: a fixed-size
//! 2D grid of 32-bit RGBA pixels with O(1) access by coordinate.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership). To
//! modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`. A fill
//! call borrows a `RasterMut` exclusively for its duration and retains
//! nothing afterwards.

mod access;

use crate::Rgba;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Check whether a signed coordinate lies inside a raster.
///
/// True iff `0 <= x < width` and `0 <= y < height`.
#[inline]
pub fn is_bounded(x: i32, y: i32, width: u32, height: u32) -> bool {
    x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data, one `0xRRGGBBAA` word per pixel, row-major
    data: Vec<u32>,
}

impl RasterData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Immutable raster image.
///
/// Cheap to clone; the pixel data is shared via `Arc`.
///
/// # Examples
///
/// ```
/// use floodfill_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with all pixels fully transparent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![0u32; width as usize * height as usize];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a completely independent copy of this raster.
    ///
    /// Unlike `clone()`, which shares data via `Arc`, this copies the
    /// pixel buffer.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always copies the pixel buffer.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster image.
///
/// Allows modification of pixel data with exclusive access enforced at
/// compile time. Convert back to an immutable [`Raster`] using
/// `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a new mutable raster with all pixels fully transparent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        // Raster::new never shares on creation, so unwrapping cannot fail.
        Ok(Raster::new(width, height)?
            .try_into_mut()
            .unwrap_or_else(|r| r.to_mut()))
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Set every pixel to the given color.
    pub fn set_all(&mut self, color: Rgba) {
        self.inner.data.fill(color.packed());
    }

    /// Reset every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bounded() {
        assert!(is_bounded(0, 0, 10, 5));
        assert!(is_bounded(9, 4, 10, 5));
        assert!(!is_bounded(10, 0, 10, 5));
        assert!(!is_bounded(0, 5, 10, 5));
        assert!(!is_bounded(-1, 0, 10, 5));
        assert!(!is_bounded(0, -1, 10, 5));
    }

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 200).unwrap();
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 200);
        assert_eq!(raster.data().len(), 100 * 200);
        assert!(raster.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_raster_creation_invalid() {
        assert!(Raster::new(0, 100).is_err());
        assert!(Raster::new(100, 0).is_err());
    }

    #[test]
    fn test_clone_shares_data() {
        let r1 = Raster::new(10, 10).unwrap();
        let r2 = r1.clone();
        assert_eq!(r1.ref_count(), 2);
        assert_eq!(r1.data().as_ptr(), r2.data().as_ptr());
    }

    #[test]
    fn test_deep_clone() {
        let r1 = Raster::new(10, 10).unwrap();
        let r2 = r1.deep_clone();
        assert_eq!(r1.ref_count(), 1);
        assert_eq!(r2.ref_count(), 1);
        assert_ne!(r1.data().as_ptr(), r2.data().as_ptr());
    }

    #[test]
    fn test_try_into_mut_requires_unique_owner() {
        let r1 = Raster::new(4, 4).unwrap();
        let r2 = r1.clone();
        let r1 = r1.try_into_mut().unwrap_err();
        drop(r2);
        assert!(r1.try_into_mut().is_ok());
    }

    #[test]
    fn test_mut_roundtrip() {
        let mut rm = RasterMut::new(4, 4).unwrap();
        rm.set_all(Rgba::WHITE);
        let raster: Raster = rm.into();
        assert!(raster.data().iter().all(|&p| p == 0xFFFFFFFF));
    }

    #[test]
    fn test_clear() {
        let mut rm = RasterMut::new(3, 3).unwrap();
        rm.set_all(Rgba::opaque(9, 9, 9));
        rm.clear();
        assert!(rm.data().iter().all(|&p| p == 0));
    }
}
