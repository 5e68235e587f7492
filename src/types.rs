// Small value types shared by the buffer, the mapper and the drawer.

/// One pixel as it sits in memory: blue, green, red, alpha.
/// The field order is the byte order the presentation layer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::bgra(0, 0, 0, 0);
    pub const BLACK: Color = Color::bgra(0, 0, 0, 255);
    pub const WHITE: Color = Color::bgra(255, 255, 255, 255);

    /// Build a color from channels in memory order.
    pub const fn bgra(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Build a color from the more familiar red-first order.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Same value in B, G and R.
    pub const fn gray(v: u8, a: u8) -> Self {
        Self { b: v, g: v, r: v, a }
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    #[inline]
    pub const fn from_bytes(px: [u8; 4]) -> Self {
        Self { b: px[0], g: px[1], r: px[2], a: px[3] }
    }

    /// Packed 0x00RRGGBB, the word format minifb blits.
    #[inline]
    pub const fn to_0rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// A position in either display space or buffer space (fractional).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Truncate toward zero to the pixel the point falls in.
    #[inline]
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// Extent of a display surface or of a buffer, as floating point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_blue_first() {
        let c = Color::rgba(30, 20, 10, 255);
        assert_eq!(c.to_bytes(), [10, 20, 30, 255]);
        assert_eq!(Color::from_bytes([10, 20, 30, 255]), c);
    }

    #[test]
    fn packs_0rgb() {
        assert_eq!(Color::rgba(0x12, 0x34, 0x56, 0x78).to_0rgb(), 0x0012_3456);
    }

    #[test]
    fn to_pixel_truncates() {
        assert_eq!(Point::new(3.9, 7.2).to_pixel(), (3, 7));
        assert_eq!(Point::new(-0.5, 0.5).to_pixel(), (0, 0));
    }
}
