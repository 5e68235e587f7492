// Command-line configuration for the demo binary.

use crate::error::{Error, Result};
use crate::noise::{DEFAULT_PLUS_SIZE, NoiseKind};
use crate::scene::{CANVAS_SIZE, SceneConfig};
use crate::types::Color;
use clap::{Parser, ValueEnum};

/// Frame size of the animated noise scenes when none is given.
pub const DEFAULT_NOISE_SIZE: (i64, i64) = (360, 256);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneChoice {
    Raw,
    Uniform,
    Perlin,
    Simplex,
    Gaussian,
    Plus,
    Paint,
}

impl SceneChoice {
    pub fn noise_kind(self) -> Option<NoiseKind> {
        match self {
            SceneChoice::Raw => Some(NoiseKind::Raw),
            SceneChoice::Uniform => Some(NoiseKind::Uniform),
            SceneChoice::Perlin => Some(NoiseKind::Perlin),
            SceneChoice::Simplex => Some(NoiseKind::Simplex),
            SceneChoice::Gaussian => Some(NoiseKind::Gaussian),
            SceneChoice::Plus => Some(NoiseKind::PlusPattern),
            SceneChoice::Paint => None,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "bitmap-synth")]
#[command(about = "Animated noise textures and a freehand paint canvas")]
pub struct DemoConfig {
    /// Which demo to open
    #[arg(long, value_enum, default_value_t = SceneChoice::Perlin)]
    pub scene: SceneChoice,

    /// Frame width in pixels (default depends on the scene)
    #[arg(long)]
    pub width: Option<i64>,

    /// Frame height in pixels (default depends on the scene)
    #[arg(long)]
    pub height: Option<i64>,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Alpha of generated noise pixels
    #[arg(long, default_value_t = 255)]
    pub alpha: u8,

    /// Seed for reproducible noise
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plus glyph size for the plus pattern
    #[arg(long, default_value_t = DEFAULT_PLUS_SIZE)]
    pub plus_size: i64,

    /// Window upscale factor (1, 2, 4 or 8)
    #[arg(long, default_value_t = 2)]
    pub scale: u32,

    /// Hide the FPS label and pointer overlay
    #[arg(long)]
    pub no_hud: bool,
}

impl DemoConfig {
    /// Width and height, falling back to the scene's default size.
    pub fn dimensions(&self) -> (i64, i64) {
        let (dw, dh) = match self.scene {
            SceneChoice::Paint => (CANVAS_SIZE, CANVAS_SIZE),
            _ => DEFAULT_NOISE_SIZE,
        };
        (self.width.unwrap_or(dw), self.height.unwrap_or(dh))
    }

    pub fn scene_config(&self) -> SceneConfig {
        let background = match self.scene {
            SceneChoice::Paint => Color::WHITE,
            _ => Color::TRANSPARENT,
        };
        SceneConfig { background, alpha: self.alpha, overlay: !self.no_hud }
    }

    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.dimensions();
        if w <= 0 || h <= 0 {
            return Err(Error::InvalidDimension { width: w, height: h });
        }
        if self.fps == 0 {
            return Err(Error::InvalidFrameRate(self.fps));
        }
        if self.plus_size <= 0 {
            return Err(Error::InvalidPlusSize(self.plus_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> DemoConfig {
        DemoConfig::try_parse_from(std::iter::once("bitmap-synth").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]);
        assert_eq!(cfg.scene, SceneChoice::Perlin);
        assert_eq!(cfg.dimensions(), (360, 256));
        assert_eq!(cfg.fps, 60);
        assert_eq!(cfg.scene_config(), SceneConfig::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn paint_uses_white_square_canvas() {
        let cfg = parse(&["--scene", "paint", "--no-hud"]);
        assert_eq!(cfg.dimensions(), (560, 560));
        assert_eq!(cfg.scene_config().background, Color::WHITE);
        assert!(!cfg.scene_config().overlay);
        assert_eq!(cfg.scene.noise_kind(), None);
    }

    #[test]
    fn overrides_and_validation() {
        let cfg = parse(&["--scene", "plus", "--width", "100", "--alpha", "12", "--seed", "9"]);
        assert_eq!(cfg.dimensions(), (100, 256));
        assert_eq!(cfg.scene.noise_kind(), Some(NoiseKind::PlusPattern));
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.scene_config().alpha, 12);

        let bad = parse(&["--height", "0"]);
        assert!(matches!(bad.validate(), Err(Error::InvalidDimension { .. })));
        let bad = parse(&["--fps", "0"]);
        assert_eq!(bad.validate(), Err(Error::InvalidFrameRate(0)));
        assert!(bad.validate().unwrap_err().to_string().contains("fps"));
        let bad = parse(&["--plus-size", "0"]);
        assert_eq!(bad.validate(), Err(Error::InvalidPlusSize(0)));
    }
}
