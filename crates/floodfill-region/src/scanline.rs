//! Breadth-first scanline fill without a visited grid.

use crate::mask::Paint;
use crate::strategy::{FillStrategy, fill_origin};
use floodfill_core::RasterMut;
use std::collections::VecDeque;

/// Queue fill that paints whole horizontal spans per dequeued point.
///
/// Instead of a visited grid, it re-tests the current pixel color: a
/// painted pixel no longer matches the original color, so a stale queue
/// entry falls through on dequeue. For each dequeued point the matching
/// span on its row is located by scanning west and east, painted, and
/// the still-matching pixels directly above and below the span are
/// enqueued. Auxiliary memory is proportional to the number of spans,
/// typically far below a visited grid.
pub struct ScanlineQueueFill;

impl FillStrategy for ScanlineQueueFill {
    fn fill_with_paint(&self, raster: &mut RasterMut, x: i32, y: i32, paint: &Paint<'_>) {
        let Some((sx, sy, original)) = fill_origin(raster, x, y, paint) else {
            return;
        };
        let width = raster.width() as i32;
        let height = raster.height() as i32;

        let mut queue: VecDeque<(i32, i32)> = VecDeque::new();
        queue.push_back((sx as i32, sy as i32));

        while let Some((px, py)) = queue.pop_front() {
            let row = py as u32;
            if raster.get_pixel_unchecked(px as u32, row) != original {
                continue;
            }

            // Exclusive west and east boundaries of the matching span.
            let mut wx = px - 1;
            while wx >= 0 && raster.get_pixel_unchecked(wx as u32, row) == original {
                wx -= 1;
            }
            let mut ex = px + 1;
            while ex < width && raster.get_pixel_unchecked(ex as u32, row) == original {
                ex += 1;
            }

            for ix in (wx + 1)..ex {
                let col = ix as u32;
                raster.set_pixel_unchecked(col, row, paint.color_at(col, row));

                if py > 0 && raster.get_pixel_unchecked(col, row - 1) == original {
                    queue.push_back((ix, py - 1));
                }
                if py + 1 < height && raster.get_pixel_unchecked(col, row + 1) == original {
                    queue.push_back((ix, py + 1));
                }
            }
        }
    }
}
