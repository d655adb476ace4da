//! Brightness estimation and channel-scaling color adjustment.
//!
//! The perceptual brightness metric weights the channels by how strongly
//! the eye responds to them; it drives the choice between lightening and
//! darkening when deriving a tint from a base color.

use floodfill_core::Rgba;

/// Brightness at or below this value counts as dark.
const DARK_THRESHOLD: u32 = 130;

/// Perceptual brightness estimate of a color, in `[0, 255]`.
///
/// Computed as `sqrt(0.241 r^2 + 0.691 g^2 + 0.068 b^2)`, truncated to
/// an integer. Alpha does not contribute.
pub fn brightness(c: Rgba) -> u32 {
    let r = c.r as f64;
    let g = c.g as f64;
    let b = c.b as f64;
    (0.241 * (r * r) + 0.691 * (g * g) + 0.068 * (b * b)).sqrt() as u32
}

/// Whether a color reads as dark (brightness at most 130).
pub fn is_dark(c: Rgba) -> bool {
    brightness(c) <= DARK_THRESHOLD
}

/// Scale the color channels of `c` by `factor`.
///
/// Each of red, green, and blue is multiplied by `factor`, rounded to
/// the nearest integer, and clamped to `[0, 255]`. Alpha is unchanged.
pub fn adjust_brightness(c: Rgba, factor: f32) -> Rgba {
    let scale = |v: u8| (v as f32 * factor).round().clamp(0.0, 255.0) as u8;
    Rgba {
        r: scale(c.r),
        g: scale(c.g),
        b: scale(c.b),
        a: c.a,
    }
}

/// Scale `c` by `when_dark` if it is dark, by `when_light` otherwise.
///
/// With a lightening factor for dark colors and a darkening factor for
/// light ones, the result is always visually distinct from the input,
/// deterministically.
pub fn adjust_brightness_dynamic(c: Rgba, when_light: f32, when_dark: f32) -> Rgba {
    if is_dark(c) {
        adjust_brightness(c, when_dark)
    } else {
        adjust_brightness(c, when_light)
    }
}
