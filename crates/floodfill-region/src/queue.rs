//! Breadth-first node-queue fill with an explicit visited grid.

use crate::mask::Paint;
use crate::strategy::{FillStrategy, fill_origin};
use floodfill_core::{RasterMut, is_bounded};
use std::collections::VecDeque;

/// Breadth-first fill that tracks visited pixels in a flat bitmap.
///
/// Every accepted pixel enqueues all four axis neighbors without
/// pre-checking them; stale entries (out of bounds, already visited, or
/// no longer the original color) are filtered on dequeue. That trades
/// queue churn and O(width * height) auxiliary memory for a single
/// acceptance test that is easy to see is correct.
pub struct BasicQueueFill;

impl FillStrategy for BasicQueueFill {
    fn fill_with_paint(&self, raster: &mut RasterMut, x: i32, y: i32, paint: &Paint<'_>) {
        let Some((sx, sy, original)) = fill_origin(raster, x, y, paint) else {
            return;
        };
        let width = raster.width();
        let height = raster.height();

        let mut visited = vec![false; width as usize * height as usize];
        let mut queue: VecDeque<(i32, i32)> = VecDeque::new();
        queue.push_back((sx as i32, sy as i32));

        while let Some((px, py)) = queue.pop_front() {
            if !is_bounded(px, py, width, height) {
                continue;
            }
            let (ux, uy) = (px as u32, py as u32);
            let at = uy as usize * width as usize + ux as usize;
            if visited[at] || raster.get_pixel_unchecked(ux, uy) != original {
                continue;
            }
            visited[at] = true;
            raster.set_pixel_unchecked(ux, uy, paint.color_at(ux, uy));

            queue.push_back((px - 1, py));
            queue.push_back((px + 1, py));
            queue.push_back((px, py - 1));
            queue.push_back((px, py + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodfill_core::Rgba;

    fn white_raster(w: u32, h: u32) -> RasterMut {
        let mut rm = RasterMut::new(w, h).unwrap();
        rm.set_all(Rgba::WHITE);
        rm
    }

    #[test]
    fn test_fills_uniform_raster() {
        let mut rm = white_raster(5, 5);
        BasicQueueFill.fill(&mut rm, 2, 2, Rgba::BLACK);
        assert!(rm.data().iter().all(|&p| p == Rgba::BLACK.packed()));
    }

    #[test]
    fn test_out_of_bounds_seed_is_a_no_op() {
        let mut rm = white_raster(5, 5);
        let before = rm.data().to_vec();
        BasicQueueFill.fill(&mut rm, -1, 2, Rgba::BLACK);
        BasicQueueFill.fill(&mut rm, 2, -1, Rgba::BLACK);
        BasicQueueFill.fill(&mut rm, 5, 2, Rgba::BLACK);
        BasicQueueFill.fill(&mut rm, 2, 5, Rgba::BLACK);
        assert_eq!(rm.data(), &before[..]);
    }

    #[test]
    fn test_seed_already_fill_color_is_a_no_op() {
        let mut rm = white_raster(5, 5);
        let before = rm.data().to_vec();
        BasicQueueFill.fill(&mut rm, 2, 2, Rgba::WHITE);
        assert_eq!(rm.data(), &before[..]);
    }

    #[test]
    fn test_does_not_cross_a_border() {
        // Vertical black line at x = 2 splits the raster in two.
        let mut rm = white_raster(5, 5);
        for y in 0..5 {
            rm.set_rgba(2, y, Rgba::BLACK).unwrap();
        }
        BasicQueueFill.fill(&mut rm, 0, 0, Rgba::opaque(255, 0, 0));
        for y in 0..5 {
            assert_eq!(rm.get_rgba(0, y), Some(Rgba::opaque(255, 0, 0)));
            assert_eq!(rm.get_rgba(1, y), Some(Rgba::opaque(255, 0, 0)));
            assert_eq!(rm.get_rgba(2, y), Some(Rgba::BLACK));
            assert_eq!(rm.get_rgba(3, y), Some(Rgba::WHITE));
            assert_eq!(rm.get_rgba(4, y), Some(Rgba::WHITE));
        }
    }
}
