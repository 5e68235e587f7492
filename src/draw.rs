// Software drawing on a PixelBuffer: Bresenham lines, a crosshair marker, and the
// freehand pen used by the paint canvas.

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::mapper::CoordinateMapper;
use crate::types::{Color, Point, Size};
use log::trace;
use std::ops::ControlFlow;

/// Walk the integer line from (x0,y0) to (x1,y1), both ends included.
/// `plot` may return `Break` to stop the walk early.
/// Stepping runs in i64 so endpoints anywhere in the i32 range are safe.
pub fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32) -> ControlFlow<()>) {
    let (mut x, mut y) = (i64::from(x0), i64::from(y0));
    let (x1, y1) = (i64::from(x1), i64::from(y1));
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    loop {
        // x and y never leave the endpoints' range, so they fit back into i32
        if plot(x as i32, y as i32).is_break() {
            break;
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw a thin line. Pixels that fall off the buffer are dropped by the buffer itself.
/// Both coordinates move monotonically, so the on-grid pixels form one run: the walk
/// stops once it has left the grid, and lines whose bounding box misses it are skipped.
pub fn draw_line(buf: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let (w, h) = (buf.width() as i64, buf.height() as i64);
    if x0.max(x1) < 0 || y0.max(y1) < 0 || i64::from(x0.min(x1)) >= w || i64::from(y0.min(y1)) >= h {
        return;
    }
    let mut entered = false;
    bresenham(x0, y0, x1, y1, |x, y| {
        if buf.contains(x, y) {
            entered = true;
            buf.set_pixel(x, y, color);
        } else if entered {
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    });
}

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a "+" with a tiny gap around a center dot.
pub fn draw_crosshair(buf: &mut PixelBuffer, cx: i32, cy: i32, size: i32, color: Color) {
    let (near_l, far_l) = (cx.saturating_sub(2), cx.saturating_sub(size));
    let (near_r, far_r) = (cx.saturating_add(2), cx.saturating_add(size));
    let (near_t, far_t) = (cy.saturating_sub(2), cy.saturating_sub(size));
    let (near_b, far_b) = (cy.saturating_add(2), cy.saturating_add(size));
    draw_line(buf, far_l, cy, near_l, cy, color);
    draw_line(buf, near_r, cy, far_r, cy, color);
    draw_line(buf, cx, far_t, cx, near_t, color);
    draw_line(buf, cx, near_b, cx, far_b, color);
    buf.set_pixel(cx, cy, color);
}

/* ------------------------------ freehand pen ------------------------------ */

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenState {
    Idle,
    /// Pen is down; `previous` is the last mapped point, in buffer space.
    Drawing { previous: Point },
}

/// A persistent canvas plus the pen that paints on it.
/// Pointer events arrive in display space together with the current display size.
#[derive(Debug, Clone)]
pub struct RasterDrawer {
    canvas: PixelBuffer,
    ink: Color,        // every stroke pixel
    background: Color, // canvas fill at creation and on clear
    pen: PenState,
}

impl RasterDrawer {
    /// White canvas, black ink.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        Self::with_colors(width, height, Color::BLACK, Color::WHITE)
    }

    pub fn with_colors(width: i64, height: i64, ink: Color, background: Color) -> Result<Self> {
        let canvas = PixelBuffer::filled(width, height, background)?;
        Ok(Self { canvas, ink, background, pen: PenState::Idle })
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    pub fn into_canvas(self) -> PixelBuffer {
        self.canvas
    }

    pub fn pen(&self) -> PenState {
        self.pen
    }

    pub fn ink(&self) -> Color {
        self.ink
    }

    pub fn set_ink(&mut self, ink: Color) {
        self.ink = ink;
    }

    /// Wipe strokes back to the background color. The pen keeps its state.
    pub fn clear(&mut self) {
        self.canvas.fill(self.background);
    }

    fn buffer_size(&self) -> Size {
        Size::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    /// Map a display-space point onto the canvas.
    pub fn map(&self, point: Point, display: Size) -> Result<Point> {
        Ok(CoordinateMapper::new(display, self.buffer_size())?.map_point(point))
    }

    /// Plot one pixel under the pointer and start a stroke there.
    pub fn on_pointer_down(&mut self, point: Point, display: Size) -> Result<Point> {
        let mapped = self.map(point, display)?;
        let (x, y) = mapped.to_pixel();
        self.canvas.set_pixel(x, y, self.ink);
        self.pen = PenState::Drawing { previous: mapped };
        trace!("pen down at ({x},{y})");
        Ok(mapped)
    }

    /// Extend the stroke to the pointer if the pen is down.
    /// Always returns the mapped position so callers can show coordinate feedback.
    pub fn on_pointer_move(&mut self, point: Point, display: Size) -> Result<Point> {
        let mapped = self.map(point, display)?;
        if let PenState::Drawing { previous } = self.pen {
            let (x0, y0) = previous.to_pixel();
            let (x1, y1) = mapped.to_pixel();
            draw_line(&mut self.canvas, x0, y0, x1, y1, self.ink);
            self.pen = PenState::Drawing { previous: mapped };
        }
        Ok(mapped)
    }

    pub fn on_pointer_up(&mut self) {
        if self.pen != PenState::Idle {
            trace!("pen up");
        }
        self.pen = PenState::Idle;
    }
}
