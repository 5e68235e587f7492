// Display space -> buffer space.
// The canvas is shown stretched to whatever size the window gives it, so a pointer position
// has to be scaled by (buffer size / display size) before it lands on a pixel.

use crate::error::{Error, Result};
use crate::types::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    scale_x: f64,
    scale_y: f64,
}

impl CoordinateMapper {
    /// Fails with `DegenerateDisplay` if the display has no area to divide by.
    pub fn new(display: Size, buffer: Size) -> Result<Self> {
        if !usable(display.width) || !usable(display.height) {
            return Err(Error::DegenerateDisplay { width: display.width, height: display.height });
        }
        Ok(Self {
            scale_x: buffer.width / display.width,
            scale_y: buffer.height / display.height,
        })
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    #[inline]
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(p.x * self.scale_x, p.y * self.scale_y)
    }
}

/// One-off mapping for callers that don't keep a mapper around.
pub fn map(point: Point, display: Size, buffer: Size) -> Result<Point> {
    Ok(CoordinateMapper::new(display, buffer)?.map_point(point))
}

fn usable(extent: f64) -> bool {
    extent.is_finite() && extent > 0.0
}
