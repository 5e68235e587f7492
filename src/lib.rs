//! Procedural bitmap synthesis and raster drawing.
//!
//! Noise generators (uniform, Gaussian, Perlin-like, Simplex-like, plus-sign pattern) fill a
//! [`PixelBuffer`] of B,G,R,A bytes; a [`RasterDrawer`] turns pointer strokes into Bresenham
//! lines on a persistent canvas. Scenes implementing [`FrameSource`] package both for a window
//! loop that ticks at a fixed rate.

pub mod buffer;
pub mod config;
pub mod draw;
pub mod error;
pub mod gradient;
pub mod hud;
pub mod mapper;
pub mod noise;
pub mod scene;
pub mod types;
pub mod window;

pub use buffer::PixelBuffer;
pub use draw::{PenState, RasterDrawer};
pub use error::{Error, Result};
pub use gradient::{GradientField, GradientKind};
pub use mapper::CoordinateMapper;
pub use noise::{NoiseKind, NoiseRequest};
pub use scene::{FrameSource, NoiseScene, PaintScene, PointerEvent, SceneConfig};
pub use types::{Color, Point, Size};
