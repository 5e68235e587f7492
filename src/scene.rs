// Scenes: things that can paint one frame into a PixelBuffer when the window ticks.
// The window loop holds a `Box<dyn FrameSource>` and never cares which demo is running.

use crate::buffer::PixelBuffer;
use crate::draw::{RasterDrawer, draw_crosshair};
use crate::error::Result;
use crate::gradient::GradientField;
use crate::hud::draw_text_5x7;
use crate::noise::{self, NoiseKind};
use crate::types::{Color, Point, Size};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::ThreadRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Per-scene values handed to every `render` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub background: Color, // shows through wherever a scene leaves pixels transparent
    pub alpha: u8,         // alpha of generated noise pixels
    pub overlay: bool,     // draw the crosshair/coordinate overlay
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { background: Color::TRANSPARENT, alpha: 255, overlay: true }
    }
}

/// Pointer input as the window reports it, in display space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

pub trait FrameSource {
    /// Frame size this scene wants, in pixels.
    fn size(&self) -> (usize, usize);

    /// Paint the next frame. `elapsed` is the time since the previous call.
    fn render(&mut self, frame: &mut PixelBuffer, elapsed: Duration, config: &SceneConfig) -> Result<()>;

    /// `display` is the size the frame is currently shown at.
    fn on_pointer(&mut self, _event: PointerEvent, _display: Size) {}

    /// Drop accumulated state (the paint canvas); animated scenes have none.
    fn reset(&mut self) {}
}

/* ------------------------------- noise scene ------------------------------ */

enum SceneRng {
    Thread(ThreadRng),
    Seeded(ChaCha8Rng),
}

/// Regenerates one noise kind every frame.
/// Random kinds flicker like TV static; gradient kinds keep one field for the scene's lifetime.
pub struct NoiseScene {
    kind: NoiseKind,
    width: usize,
    height: usize,
    plus_size: i64,
    field: Option<GradientField>,
    rng: SceneRng,
}

impl NoiseScene {
    pub fn new(kind: NoiseKind, width: i64, height: i64, seed: Option<u64>) -> Result<Self> {
        // validate up front so `render` never sees a bad size
        let probe = PixelBuffer::new(width, height)?;
        let field = kind.gradient_kind().map(|gk| match seed {
            Some(s) => GradientField::new(gk, s),
            None => GradientField::from_entropy(gk),
        });
        let rng = match seed {
            Some(s) => SceneRng::Seeded(ChaCha8Rng::seed_from_u64(s)),
            None => SceneRng::Thread(rand::rng()),
        };
        debug!("noise scene {kind:?} {}x{}", probe.width(), probe.height());
        Ok(Self {
            kind,
            width: probe.width(),
            height: probe.height(),
            plus_size: noise::DEFAULT_PLUS_SIZE,
            field,
            rng,
        })
    }

    pub fn with_plus_size(mut self, plus_size: i64) -> Self {
        self.plus_size = plus_size;
        self
    }

    pub fn kind(&self) -> NoiseKind {
        self.kind
    }

    fn synthesize(&mut self, frame: &mut PixelBuffer, alpha: u8) -> Result<()> {
        let field = self.field.as_ref();
        match &mut self.rng {
            SceneRng::Thread(rng) => noise::fill_kind(frame, self.kind, alpha, self.plus_size, field, rng),
            SceneRng::Seeded(rng) => noise::fill_kind(frame, self.kind, alpha, self.plus_size, field, rng),
        }
    }
}

impl FrameSource for NoiseScene {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn render(&mut self, frame: &mut PixelBuffer, _elapsed: Duration, config: &SceneConfig) -> Result<()> {
        frame.clear();
        self.synthesize(frame, config.alpha)?;
        if config.background != Color::TRANSPARENT {
            fill_transparent(frame, config.background);
        }
        Ok(())
    }
}

/// Replace fully transparent pixels with `color`.
fn fill_transparent(frame: &mut PixelBuffer, color: Color) {
    let px = color.to_bytes();
    for chunk in frame.as_bytes_mut().chunks_exact_mut(4) {
        if chunk[3] == 0 {
            chunk.copy_from_slice(&px);
        }
    }
}

/* ------------------------------- paint scene ------------------------------ */

/// Default paint canvas edge, in pixels.
pub const CANVAS_SIZE: i64 = 560;

/// Freehand canvas. Strokes accumulate until `clear_canvas`.
/// The overlay (crosshair + mapped coordinates) goes on the presented frame, never the canvas.
pub struct PaintScene {
    drawer: RasterDrawer,
    pointer: Option<Point>, // last mapped position, for the overlay
}

impl PaintScene {
    pub fn new(width: i64, height: i64, background: Color) -> Result<Self> {
        let drawer = RasterDrawer::with_colors(width, height, Color::BLACK, background)?;
        Ok(Self { drawer, pointer: None })
    }

    pub fn drawer(&self) -> &RasterDrawer {
        &self.drawer
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn clear_canvas(&mut self) {
        self.drawer.clear();
    }

    /// Mapping failures (window minimised to zero size) drop the event.
    pub fn pointer_down(&mut self, at: Point, display: Size) {
        match self.drawer.on_pointer_down(at, display) {
            Ok(p) => self.pointer = Some(p),
            Err(e) => warn!("pointer down dropped: {e}"),
        }
    }

    pub fn pointer_move(&mut self, at: Point, display: Size) {
        match self.drawer.on_pointer_move(at, display) {
            Ok(p) => self.pointer = Some(p),
            Err(e) => warn!("pointer move dropped: {e}"),
        }
    }

    pub fn pointer_up(&mut self) {
        self.drawer.on_pointer_up();
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }
}

impl FrameSource for PaintScene {
    fn size(&self) -> (usize, usize) {
        let c = self.drawer.canvas();
        (c.width(), c.height())
    }

    fn on_pointer(&mut self, event: PointerEvent, display: Size) {
        match event {
            PointerEvent::Down(at) => self.pointer_down(at, display),
            PointerEvent::Move(at) => self.pointer_move(at, display),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Leave => self.pointer_left(),
        }
    }

    fn reset(&mut self) {
        self.clear_canvas();
    }

    fn render(&mut self, frame: &mut PixelBuffer, _elapsed: Duration, config: &SceneConfig) -> Result<()> {
        frame.clone_from(self.drawer.canvas());
        if !config.overlay {
            return Ok(());
        }
        if let Some(p) = self.pointer {
            let (x, y) = p.to_pixel();
            draw_crosshair(frame, x, y, 8, Color::rgba(0xFF, 0xCC, 0x33, 0xFF));
            let status = format!("X:{} Y:{}", x, y);
            let ty = frame.height() as i32 - 12;
            draw_text_5x7(frame, 8, ty, &status, Color::WHITE);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_for(scene: &dyn FrameSource) -> PixelBuffer {
        let (w, h) = scene.size();
        PixelBuffer::new(w as i64, h as i64).unwrap()
    }

    #[test]
    fn seeded_noise_scenes_repeat() {
        for kind in [NoiseKind::Uniform, NoiseKind::Gaussian, NoiseKind::PlusPattern, NoiseKind::Simplex] {
            let mut a = NoiseScene::new(kind, 40, 20, Some(8)).unwrap();
            let mut b = NoiseScene::new(kind, 40, 20, Some(8)).unwrap();
            let (mut fa, mut fb) = (frame_for(&a), frame_for(&b));
            let cfg = SceneConfig::default();
            a.render(&mut fa, Duration::from_millis(16), &cfg).unwrap();
            b.render(&mut fb, Duration::from_millis(16), &cfg).unwrap();
            assert_eq!(fa, fb, "{kind:?}");
        }
    }

    #[test]
    fn random_scene_changes_between_frames() {
        let mut scene = NoiseScene::new(NoiseKind::Uniform, 16, 16, Some(1)).unwrap();
        let mut frame = frame_for(&scene);
        let cfg = SceneConfig::default();
        scene.render(&mut frame, Duration::ZERO, &cfg).unwrap();
        let first = frame.clone();
        scene.render(&mut frame, Duration::ZERO, &cfg).unwrap();
        assert_ne!(first, frame);
    }

    #[test]
    fn gradient_scene_is_stable_between_frames() {
        let mut scene = NoiseScene::new(NoiseKind::Perlin, 50, 30, None).unwrap();
        let mut frame = frame_for(&scene);
        let cfg = SceneConfig { alpha: 40, ..SceneConfig::default() };
        scene.render(&mut frame, Duration::ZERO, &cfg).unwrap();
        let first = frame.clone();
        scene.render(&mut frame, Duration::ZERO, &cfg).unwrap();
        assert_eq!(first, frame);
        assert!(frame.as_bytes().chunks_exact(4).all(|px| px[3] == 40));
    }

    #[test]
    fn background_shows_through_plus_pattern() {
        let mut scene = NoiseScene::new(NoiseKind::PlusPattern, 30, 30, Some(3)).unwrap();
        let mut frame = frame_for(&scene);
        let bg = Color::rgba(0, 0, 80, 255);
        let cfg = SceneConfig { background: bg, ..SceneConfig::default() };
        scene.render(&mut frame, Duration::ZERO, &cfg).unwrap();
        for px in frame.as_bytes().chunks_exact(4) {
            let c = Color::from_bytes([px[0], px[1], px[2], px[3]]);
            assert!(c == bg || c == Color::WHITE, "{c:?}");
        }
    }

    #[test]
    fn noise_scene_rejects_bad_size() {
        assert!(NoiseScene::new(NoiseKind::Uniform, 0, 10, None).is_err());
    }

    #[test]
    fn paint_scene_overlay_stays_off_canvas() {
        let mut scene = PaintScene::new(40, 40, Color::WHITE).unwrap();
        let display = Size::new(80.0, 80.0);
        scene.pointer_down(Point::new(20.0, 20.0), display);
        scene.pointer_move(Point::new(40.0, 20.0), display);
        scene.pointer_up();
        assert_eq!(scene.pointer(), Some(Point::new(20.0, 10.0)));

        let mut frame = frame_for(&scene);
        scene.render(&mut frame, Duration::ZERO, &SceneConfig::default()).unwrap();
        assert_ne!(&frame, scene.drawer().canvas());
        for x in 10..=20 {
            assert_eq!(scene.drawer().canvas().pixel(x, 10), Some(Color::BLACK));
        }

        let plain = SceneConfig { overlay: false, ..SceneConfig::default() };
        scene.render(&mut frame, Duration::ZERO, &plain).unwrap();
        assert_eq!(&frame, scene.drawer().canvas());
    }

    #[test]
    fn paint_scene_drops_events_on_zero_display() {
        let mut scene = PaintScene::new(10, 10, Color::WHITE).unwrap();
        scene.pointer_down(Point::new(1.0, 1.0), Size::new(0.0, 0.0));
        assert_eq!(scene.pointer(), None);
        assert!(scene.drawer().canvas().as_bytes().iter().all(|&b| b == 255));
    }

    #[test]
    fn pointer_events_drive_the_pen() {
        let mut scene = PaintScene::new(10, 10, Color::WHITE).unwrap();
        let display = Size::new(10.0, 10.0);
        let source: &mut dyn FrameSource = &mut scene;
        source.on_pointer(PointerEvent::Down(Point::new(1.0, 1.0)), display);
        source.on_pointer(PointerEvent::Move(Point::new(3.0, 1.0)), display);
        source.on_pointer(PointerEvent::Up, display);
        source.on_pointer(PointerEvent::Move(Point::new(3.0, 8.0)), display);
        source.on_pointer(PointerEvent::Leave, display);
        assert_eq!(scene.pointer(), None);
        let canvas = scene.drawer().canvas();
        for x in 1..=3 {
            assert_eq!(canvas.pixel(x, 1), Some(Color::BLACK));
        }
        assert_eq!(canvas.pixel(3, 8), Some(Color::WHITE));
    }

    #[test]
    fn noise_scene_ignores_pointer() {
        let mut scene = NoiseScene::new(NoiseKind::Perlin, 8, 8, Some(2)).unwrap();
        scene.on_pointer(PointerEvent::Down(Point::new(1.0, 1.0)), Size::new(8.0, 8.0));
        scene.reset();
        assert_eq!(scene.kind(), NoiseKind::Perlin);
    }

    #[test]
    fn clear_canvas_wipes_strokes() {
        let mut scene = PaintScene::new(10, 10, Color::WHITE).unwrap();
        scene.pointer_down(Point::new(5.0, 5.0), Size::new(10.0, 10.0));
        scene.clear_canvas();
        assert!(scene.drawer().canvas().as_bytes().iter().all(|&b| b == 255));
    }
}
