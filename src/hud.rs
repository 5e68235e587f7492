// On-frame heads-up display: a rolling FPS average and a tiny 5x7 bitmap font to print it.

use crate::buffer::PixelBuffer;
use crate::types::Color;
use std::collections::VecDeque;

/// Number of frames the FPS average looks back over.
pub const FPS_HISTORY: usize = 30;

/// Average of the last `FPS_HISTORY` instantaneous frame rates.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    history: VecDeque<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self { history: VecDeque::with_capacity(FPS_HISTORY + 1) }
    }

    /// Record one frame that took `dt` seconds. Non-positive `dt` is skipped.
    pub fn record(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        self.history.push_back(1.0 / dt);
        if self.history.len() > FPS_HISTORY {
            self.history.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        self.history.iter().sum::<f64>() / self.history.len() as f64
    }

    pub fn label(&self) -> String {
        format!("FPS: {:.1}", self.fps())
    }
}

/* ---------- 5x7 bitmap font (ASCII subset for "FPS: 00.0" and "X:000 Y:000") ---------- */

/// Return a 5x7 glyph bitmap for the characters the HUD prints.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // One glyph per line, rows top to bottom
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9 (FPS value, pointer coordinates)
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters for "FPS" and the "X:.. Y:.." pointer readout
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),

        // Punctuation: space, colon, decimal point, minus sign
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        // Anything else is skipped by the caller
        _ => None,
    }
}

fn stamp_glyph(buf: &mut PixelBuffer, x: i32, y: i32, rows: &[u8; 7], color: Color) {
    for (ry, rowbits) in rows.iter().enumerate() {
        for rx in 0..5 {
            if (rowbits & (1 << (4 - rx))) != 0 {
                buf.set_pixel(x + rx, y + ry as i32, color);
            }
        }
    }
}

/// Draw one character with a 1-pixel black shadow for contrast on noisy backgrounds.
fn draw_char_5x7(buf: &mut PixelBuffer, x: i32, y: i32, ch: char, color: Color) {
    if let Some(rows) = glyph5x7(ch) {
        stamp_glyph(buf, x + 1, y + 1, &rows, Color::BLACK);
        stamp_glyph(buf, x, y, &rows, color);
    }
}

/// Unknown characters advance the pen but draw nothing.
pub fn draw_text_5x7(buf: &mut PixelBuffer, mut x: i32, y: i32, text: &str, color: Color) {
    for ch in text.chars() {
        draw_char_5x7(buf, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counter_reports_zero() {
        assert_eq!(FpsCounter::new().fps(), 0.0);
    }

    #[test]
    fn averages_recent_frames() {
        let mut c = FpsCounter::new();
        c.record(0.5);
        c.record(0.25);
        c.record(0.0); // skipped
        assert_eq!(c.fps(), 3.0);
        assert_eq!(c.label(), "FPS: 3.0");
    }

    #[test]
    fn forgets_frames_beyond_history() {
        let mut c = FpsCounter::new();
        for _ in 0..FPS_HISTORY {
            c.record(1.0);
        }
        for _ in 0..FPS_HISTORY {
            c.record(0.1);
        }
        assert!((c.fps() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn text_draws_glyph_and_shadow() {
        let mut buf = PixelBuffer::filled(20, 10, Color::rgba(0, 0, 255, 255)).unwrap();
        draw_text_5x7(&mut buf, 0, 0, "1", Color::WHITE);
        // top row of '1' is a single pixel at column 2, shadowed one down-right
        assert_eq!(buf.pixel(2, 0), Some(Color::WHITE));
        assert_eq!(buf.pixel(3, 1), Some(Color::BLACK));
        assert_eq!(buf.pixel(0, 0), Some(Color::rgba(0, 0, 255, 255)));
    }

    #[test]
    fn unknown_chars_still_advance() {
        let mut a = PixelBuffer::new(30, 10).unwrap();
        let mut b = PixelBuffer::new(30, 10).unwrap();
        draw_text_5x7(&mut a, 0, 0, "?1", Color::WHITE);
        draw_text_5x7(&mut b, 6, 0, "1", Color::WHITE);
        assert_eq!(a, b);
    }
}
