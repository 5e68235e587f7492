// What you SEE:
// • --scene perlin|simplex|uniform|gaussian|plus|raw: an animated noise texture.
// • --scene paint: a white canvas; hold Left Mouse to draw black strokes.
// • C clears the canvas. ESC quits. FPS shows top-left unless --no-hud.

use bitmap_synth::config::DemoConfig;
use bitmap_synth::error::Error;
use bitmap_synth::hud::{FpsCounter, draw_text_5x7};
use bitmap_synth::scene::{FrameSource, NoiseScene, PaintScene};
use bitmap_synth::types::Color;
use bitmap_synth::window::{PointerTracker, Presenter};
use bitmap_synth::PixelBuffer;
use clap::Parser;
use log::info;
use std::time::Instant;

fn build_scene(cfg: &DemoConfig) -> Result<Box<dyn FrameSource>, Error> {
    let (w, h) = cfg.dimensions();
    match cfg.scene.noise_kind() {
        Some(kind) => Ok(Box::new(NoiseScene::new(kind, w, h, cfg.seed)?.with_plus_size(cfg.plus_size))),
        None => Ok(Box::new(PaintScene::new(w, h, cfg.scene_config().background)?)),
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let cfg = DemoConfig::parse();
    cfg.validate()?;

    /* --- Scene + window setup ---
       Visual: window opens at the scene's frame size, upscaled. */
    let mut scene = build_scene(&cfg)?;
    let scene_cfg = cfg.scene_config();
    let (w, h) = scene.size();
    let title = format!("bitmap-synth: {:?}", cfg.scene);
    let mut presenter = Presenter::new(&title, w, h, cfg.scale, cfg.fps)?;
    info!("{title}: {w}x{h} @ {} fps", cfg.fps);

    /* --- Reusable frame buffer ---
       Visual: this is the image you actually see each frame. */
    let mut frame = PixelBuffer::new(w as i64, h as i64)?;

    let mut pointer = PointerTracker::default();
    let mut fps = FpsCounter::new();
    let mut last_frame_time = Instant::now();

    /* ------------------------------ Main loop ------------------------------ */
    while presenter.is_open() && !presenter.esc_pressed() {
        let now = Instant::now();
        let elapsed = now - last_frame_time;
        last_frame_time = now;
        fps.record(elapsed.as_secs_f64());

        /* 1) Inputs: forward pointer edges to the scene, C resets it. */
        if presenter.c_pressed_once() {
            scene.reset();
        }
        let display = presenter.display_size();
        for event in pointer.update(presenter.mouse_pos(), presenter.left_mouse_down()) {
            scene.on_pointer(event, display);
        }

        /* 2) Let the scene paint this frame. */
        scene.render(&mut frame, elapsed, &scene_cfg)?;

        /* 3) FPS label on top. */
        if scene_cfg.overlay {
            draw_text_5x7(&mut frame, 8, 8, &fps.label(), Color::WHITE);
        }

        /* 4) Present (this is when the on-screen image updates). */
        presenter.present(&frame)?;
    }

    Ok(())
}
