// Window + input glue around minifb.
// Visual: a window that shows whatever PixelBuffer the current scene produced, scaled up.

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};
use crate::scene::PointerEvent;
use crate::types::{Point, Size};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Scale, Window, WindowOptions};

pub struct Presenter {
    window: Window,   // the on-screen window you see
    words: Vec<u32>,  // 0x00RRGGBB staging copy of the frame
    scale: f64,       // window pixels per frame pixel
}

impl Presenter {
    /// Create a window for a `width`x`height` frame shown at `scale`x.
    pub fn new(title: &str, width: usize, height: usize, scale: u32, fps: u32) -> Result<Self> {
        let (scale, factor) = scale_for(scale);
        let opts = WindowOptions { scale, ..WindowOptions::default() };
        let mut window =
            Window::new(title, width, height, opts).map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps as usize);
        Ok(Self { window, words: Vec::with_capacity(width * height), scale: factor })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        frame.write_0rgb(&mut self.words);
        self.window
            .update_with_buffer(&self.words, frame.width(), frame.height())
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// C clears the paint canvas.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Pointer position in window coordinates, `None` when outside the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x as f64, y as f64))
    }

    /// Size the frame is currently displayed at, in the same units as `mouse_pos`.
    /// minifb divides mouse coordinates by the window scale but reports the size undivided.
    pub fn display_size(&self) -> Size {
        let (w, h) = self.window.get_size();
        Size::new(w as f64 / self.scale, h as f64 / self.scale)
    }
}

fn scale_for(factor: u32) -> (Scale, f64) {
    match factor {
        0 | 1 => (Scale::X1, 1.0),
        2 | 3 => (Scale::X2, 2.0),
        4..=7 => (Scale::X4, 4.0),
        _ => (Scale::X8, 8.0),
    }
}

/// Turns polled mouse state into edge-triggered pointer events.
#[derive(Debug, Default)]
pub struct PointerTracker {
    was_down: bool,
    was_inside: bool,
}

impl PointerTracker {
    pub fn update(&mut self, pos: Option<Point>, down: bool) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        match pos {
            Some(p) => {
                self.was_inside = true;
                match (self.was_down, down) {
                    (false, true) => events.push(PointerEvent::Down(p)),
                    (true, false) => {
                        events.push(PointerEvent::Move(p));
                        events.push(PointerEvent::Up);
                    }
                    _ => events.push(PointerEvent::Move(p)),
                }
            }
            None => {
                if self.was_down && !down {
                    events.push(PointerEvent::Up);
                }
                if self.was_inside {
                    events.push(PointerEvent::Leave);
                    self.was_inside = false;
                }
            }
        }
        self.was_down = down;
        events
    }
}
