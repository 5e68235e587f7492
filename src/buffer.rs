// The pixel grid every generator and drawer writes into.
// Layout: row-major, 4 bytes per pixel in (B,G,R,A) order, no row padding.

use crate::error::{Error, Result};
use crate::types::Color;
use image::RgbaImage;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,  // pixels per row
    height: usize, // number of rows
    bytes: Vec<u8>, // len = width * height * 4
}

impl PixelBuffer {
    /// Create a zeroed (transparent black) buffer.
    /// Fails with `InvalidDimension` when either side is zero or negative, or when the
    /// byte count does not fit in memory.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let (w, h, len) = checked_dimensions(width, height)?;
        Ok(Self { width: w, height: h, bytes: vec![0u8; len] })
    }

    /// Create a buffer with every pixel set to `color`.
    pub fn filled(width: i64, height: i64, color: Color) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        buf.fill(color);
        Ok(buf)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw bytes, ready for a bitmap-consuming layer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    /// True when (x,y) lies on the grid.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.offset(x, y).is_some()
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * BYTES_PER_PIXEL)
    }

    /// Read one pixel, `None` outside the grid.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.offset(x, y)?;
        let px = &self.bytes[i..i + BYTES_PER_PIXEL];
        Some(Color::from_bytes([px[0], px[1], px[2], px[3]]))
    }

    /// Overwrite the 4 bytes of pixel (x,y).
    /// Coordinates off the grid are ignored: a drag that leaves the canvas just stops painting.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.offset(x, y) {
            self.bytes[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
        }
    }

    pub fn fill(&mut self, color: Color) {
        let px = color.to_bytes();
        for chunk in self.bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Back to all-zero, i.e. fully transparent. Called before each animated frame.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Pack into 0x00RRGGBB words (alpha dropped), reusing `out`'s allocation.
    pub fn write_0rgb(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(
            self.bytes
                .chunks_exact(BYTES_PER_PIXEL)
                .map(|px| Color::from_bytes([px[0], px[1], px[2], px[3]]).to_0rgb()),
        );
    }

    pub fn to_0rgb(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.width * self.height);
        self.write_0rgb(&mut out);
        out
    }

    /// Convert to an `image` RGBA buffer (channel order swapped to R,G,B,A).
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut rgba = Vec::with_capacity(self.bytes.len());
        for px in self.bytes.chunks_exact(BYTES_PER_PIXEL) {
            rgba.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
        // Length is width*height*4 by construction, so the conversion cannot fail.
        RgbaImage::from_raw(self.width as u32, self.height as u32, rgba)
            .unwrap_or_else(|| RgbaImage::new(self.width as u32, self.height as u32))
    }
}

/// Validate signed dimensions and turn them into (width, height, byte length).
/// The byte length must fit in `isize`, the limit for any Rust allocation.
fn checked_dimensions(width: i64, height: i64) -> Result<(usize, usize, usize)> {
    if width <= 0 || height <= 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    let len = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL as i64))
        .filter(|&n| n <= isize::MAX as i64)
        .ok_or(Error::InvalidDimension { width, height })?;
    // each factor is at most `len`, so all three fit in usize
    Ok((width as usize, height as usize, len as usize))
}
