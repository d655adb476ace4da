//! Scanline span fill: an iterative span-scan state machine.
//!
//! The fill first walks the cursor to a local top-left corner of the
//! matching region, then sweeps rows downward, treating the region as a
//! sequence of row spans. A row that comes up shorter than the one above
//! it (an overhang or a blockage) or longer (a newly exposed pocket)
//! spawns pending start positions on an explicit heap-allocated work
//! list instead of recursing, so native stack depth stays constant even
//! for thin serpentine regions whose sweep count is proportional to an
//! image dimension.
//!
//! There is no visited structure: a pixel is paintable iff it still
//! equals the region's original color, and painting it makes that test
//! fail forever after. Stale work-list entries are discarded the same
//! way when popped.

use crate::mask::Paint;
use crate::strategy::{FillStrategy, fill_origin};
use floodfill_core::{RasterMut, is_bounded};

/// Span-scan fill with an explicit work list and no visited grid.
///
/// The cheapest of the three strategies on large blocky regions: most
/// pixels are painted by straight row scans, and auxiliary memory is
/// bounded by the number of pending start positions rather than the
/// raster area.
pub struct ScanlineSpanFill;

/// A pending unit of work for the sweep loop.
enum Task {
    /// Walk to the region's local top-left corner first, then sweep.
    /// Used wherever unexplored area may extend above or left of the
    /// position.
    Start { x: i32, y: i32 },
    /// Sweep directly from the position; everything above and left of it
    /// is known painted or unpaintable.
    Sweep { x: i32, y: i32 },
}

impl FillStrategy for ScanlineSpanFill {
    fn fill_with_paint(&self, raster: &mut RasterMut, x: i32, y: i32, paint: &Paint<'_>) {
        let Some((sx, sy, original)) = fill_origin(raster, x, y, paint) else {
            return;
        };
        Engine {
            raster,
            original,
            brush: paint,
            pending: vec![Task::Start {
                x: sx as i32,
                y: sy as i32,
            }],
        }
        .run();
    }
}

/// Cursor state shared by the corner walk and the sweep loop.
struct Engine<'a, 'p> {
    raster: &'a mut RasterMut,
    original: u32,
    brush: &'a Paint<'p>,
    pending: Vec<Task>,
}

impl Engine<'_, '_> {
    fn run(&mut self) {
        while let Some(task) = self.pending.pop() {
            match task {
                // A task whose pixel was painted since it was queued is
                // stale: the pass that painted it already took over its
                // neighbor checks.
                Task::Start { x, y } => {
                    if self.matches(x, y) {
                        let (cx, cy) = self.seek_start(x, y);
                        self.sweep(cx, cy);
                    }
                }
                Task::Sweep { x, y } => {
                    if self.matches(x, y) {
                        self.sweep(x, y);
                    }
                }
            }
        }
    }

    /// True when (x, y) is inside the raster and still the original color.
    #[inline]
    fn matches(&self, x: i32, y: i32) -> bool {
        is_bounded(x, y, self.raster.width(), self.raster.height())
            && self.raster.get_pixel_unchecked(x as u32, y as u32) == self.original
    }

    #[inline]
    fn paint(&mut self, x: i32, y: i32) {
        let (ux, uy) = (x as u32, y as u32);
        self.raster.set_pixel_unchecked(ux, uy, self.brush.color_at(ux, uy));
    }

    /// Walk the cursor to a local top-left corner of the matching region:
    /// repeatedly move up while the pixel above matches, then left while
    /// the pixel to the left matches, until a full pass makes no move.
    ///
    /// The sweep assumes nothing above-left of its start is unexplored,
    /// which this walk establishes.
    fn seek_start(&self, mut x: i32, mut y: i32) -> (i32, i32) {
        loop {
            let (px, py) = (x, y);
            while y != 0 && self.matches(x, y - 1) {
                y -= 1;
            }
            while x != 0 && self.matches(x - 1, y) {
                x -= 1;
            }
            if x == px && y == py {
                return (x, y);
            }
        }
    }

    /// Sweep rows downward from a corner position, painting a roughly
    /// rectangular area and queueing a task for every offshoot the
    /// rectangle cannot cover.
    ///
    /// `prev_row_len` is the length of the span painted on the row above;
    /// the invariant between iterations is that `[x, x + prev_row_len)`
    /// on that row is painted.
    fn sweep(&mut self, mut x: i32, mut y: i32) {
        let width = self.raster.width() as i32;
        let height = self.raster.height() as i32;
        let mut prev_row_len: i32 = 0;

        loop {
            let mut row_len: i32 = 0;
            let mut x_start = x;

            if prev_row_len != 0 && !self.matches(x, y) {
                // Overhang: this row starts further right than the row
                // above. Consume the previous row's remaining span one
                // column at a time until a paintable column appears; if
                // the span runs out first, the rectangle is closed.
                loop {
                    prev_row_len -= 1;
                    if prev_row_len == 0 {
                        return;
                    }
                    x += 1;
                    if self.matches(x, y) {
                        break;
                    }
                }
                x_start = x;
            } else {
                // This row reaches further left than the row above.
                // Extend and paint leftward; each newly painted column may
                // expose an unexplored pocket above it, which gets a
                // corner-walk task of its own.
                while x != 0 && self.matches(x - 1, y) {
                    x -= 1;
                    self.paint(x, y);
                    if y != 0 && self.matches(x, y - 1) {
                        self.pending.push(Task::Start { x, y: y - 1 });
                    }
                    row_len += 1;
                    prev_row_len += 1;
                }
            }

            // Paint the row rightward from the start column.
            while x_start < width && self.matches(x_start, y) {
                self.paint(x_start, y);
                row_len += 1;
                x_start += 1;
            }

            if row_len < prev_row_len {
                // The region narrowed: a blockage may split it, with more
                // matching area under the rest of the previous row's span.
                // Probe those columns and queue a sweep at each gap. The
                // area above-left of such gaps is already painted, so no
                // corner walk is needed.
                let prev_row_end = x + prev_row_len;
                let mut ix = x_start + 1;
                while ix < prev_row_end {
                    if self.matches(ix, y) {
                        self.pending.push(Task::Sweep { x: ix, y });
                    }
                    ix += 1;
                }
            } else if row_len > prev_row_len && y != 0 {
                // The region widened past the previous row's end: columns
                // above the extension were never examined and may open
                // into unexplored area.
                let mut ux = x + prev_row_len + 1;
                while ux < x_start {
                    if self.matches(ux, y - 1) {
                        self.pending.push(Task::Start { x: ux, y: y - 1 });
                    }
                    ux += 1;
                }
            }

            prev_row_len = row_len;
            y += 1;
            if prev_row_len == 0 || y >= height {
                return;
            }
        }
    }
}
