//! Floodfill Core - Basic data structures for raster fill operations
//!
//! This crate provides the data model shared by the fill strategies:
//!
//! - [`Raster`] / [`RasterMut`] - The 32-bit RGBA image container
//!   (immutable / mutable)
//! - [`Rgba`] - A four-channel color value with packed-word conversions
//! - [`is_bounded`] - The coordinate bounds predicate
//!
//! # Pixel layout
//!
//! - Pixels are stored as 32-bit words, one word per pixel, row-major
//! - Color order is `0xRRGGBBAA` (red in MSB, alpha in LSB)
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via
//! [`Raster::try_into_mut`] or [`Raster::to_mut`], then convert back
//! with `Into<Raster>`.

pub mod color;
pub mod error;
pub mod raster;

pub use color::Rgba;
pub use error::{Error, Result};
pub use raster::{Raster, RasterMut, is_bounded};
