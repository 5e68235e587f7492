// Noise generators that fill a PixelBuffer.
// Every generator has a `fill_*` form that writes into an existing buffer (used once per
// animation frame) and a constructor form that allocates a fresh buffer of the requested size.

use crate::buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::error::{Error, Result};
use crate::gradient::{GradientField, GradientKind};
use crate::types::Color;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Spatial frequency of the gradient kinds: one lattice cell per 100 pixels.
pub const GRADIENT_SCALE: f64 = 100.0;

/// Default edge length of a plus glyph, in pixels.
pub const DEFAULT_PLUS_SIZE: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseKind {
    /// Every byte random, alpha included.
    Raw,
    Uniform,
    Perlin,
    Simplex,
    Gaussian,
    PlusPattern,
}

impl NoiseKind {
    /// The gradient flavour for the lattice kinds, `None` for the random ones.
    pub fn gradient_kind(self) -> Option<GradientKind> {
        match self {
            NoiseKind::Perlin => Some(GradientKind::Perlin),
            NoiseKind::Simplex => Some(GradientKind::Simplex),
            _ => None,
        }
    }
}

/// One-shot description of a noise image.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseRequest {
    pub width: i64,
    pub height: i64,
    pub kind: NoiseKind,
    pub alpha: u8,
    pub seed: Option<u64>, // fixes both the gradient table and the random draws
    pub plus_size: i64,    // only read by PlusPattern
}

impl NoiseRequest {
    pub fn new(width: i64, height: i64, kind: NoiseKind) -> Self {
        Self { width, height, kind, alpha: 255, seed: None, plus_size: DEFAULT_PLUS_SIZE }
    }

    pub fn alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn plus_size(mut self, plus_size: i64) -> Self {
        self.plus_size = plus_size;
        self
    }
}

/// Produce the image a request describes.
pub fn generate(req: &NoiseRequest) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::new(req.width, req.height)?;
    debug!("generate {:?} {}x{} alpha={} seed={:?}", req.kind, req.width, req.height, req.alpha, req.seed);

    let field = req.kind.gradient_kind().map(|kind| match req.seed {
        Some(seed) => GradientField::new(kind, seed),
        None => GradientField::from_entropy(kind),
    });
    let field = field.as_ref();
    match req.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            fill_kind(&mut buf, req.kind, req.alpha, req.plus_size, field, &mut rng)?
        }
        None => fill_kind(&mut buf, req.kind, req.alpha, req.plus_size, field, &mut rand::rng())?,
    }
    Ok(buf)
}

/// Fill `buf` with one kind of noise.
/// Gradient kinds sample `field`, or a field seeded from `rng` when none is given.
pub fn fill_kind<R: Rng + ?Sized>(
    buf: &mut PixelBuffer,
    kind: NoiseKind,
    alpha: u8,
    plus_size: i64,
    field: Option<&GradientField>,
    rng: &mut R,
) -> Result<()> {
    match kind {
        NoiseKind::Raw => fill_raw(buf, rng),
        NoiseKind::Uniform => fill_uniform(buf, alpha, rng),
        NoiseKind::Gaussian => fill_gaussian(buf, alpha, rng),
        NoiseKind::PlusPattern => {
            fill_plus_pattern(buf, alpha, plus_size, rng)?;
        }
        NoiseKind::Perlin => fill_lattice(buf, alpha, GradientKind::Perlin, field, rng),
        NoiseKind::Simplex => fill_lattice(buf, alpha, GradientKind::Simplex, field, rng),
    }
    Ok(())
}

fn fill_lattice<R: Rng + ?Sized>(
    buf: &mut PixelBuffer,
    alpha: u8,
    kind: GradientKind,
    field: Option<&GradientField>,
    rng: &mut R,
) {
    match field {
        Some(field) => fill_gradient(buf, alpha, field),
        None => fill_gradient(buf, alpha, &GradientField::new(kind, rng.random())),
    }
}

/* ------------------------------ random kinds ------------------------------ */

/// Every byte of the buffer drawn uniformly, alpha included.
pub fn raw_noise(width: i64, height: i64) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::new(width, height)?;
    fill_raw(&mut buf, &mut rand::rng());
    Ok(buf)
}

pub fn fill_raw<R: Rng + ?Sized>(buf: &mut PixelBuffer, rng: &mut R) {
    rng.fill(buf.as_bytes_mut());
}

/// B, G and R independently uniform over 0..=255; alpha fixed.
pub fn uniform_random(width: i64, height: i64, alpha: u8) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::new(width, height)?;
    fill_uniform(&mut buf, alpha, &mut rand::rng());
    Ok(buf)
}

pub fn fill_uniform<R: Rng + ?Sized>(buf: &mut PixelBuffer, alpha: u8, rng: &mut R) {
    for px in buf.as_bytes_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
        px[0] = rng.random(); // Blue
        px[1] = rng.random(); // Green
        px[2] = rng.random(); // Red
        px[3] = alpha;
    }
}

/// Gray level from the magnitude of a Box-Muller normal sample.
pub fn gaussian(width: i64, height: i64, alpha: u8) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::new(width, height)?;
    fill_gaussian(&mut buf, alpha, &mut rand::rng());
    Ok(buf)
}

pub fn fill_gaussian<R: Rng + ?Sized>(buf: &mut PixelBuffer, alpha: u8, rng: &mut R) {
    for px in buf.as_bytes_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
        // 1 - [0,1) keeps u1 in (0,1], so ln(u1) is finite
        let u1 = 1.0 - rng.random::<f64>();
        let u2 = 1.0 - rng.random::<f64>();
        let z0 = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        let gray = gaussian_gray(z0);
        px.copy_from_slice(&Color::gray(gray, alpha).to_bytes());
    }
}

/// Truncate |z|*255 to an integer, then keep the low byte.
/// Samples beyond ~1 sigma wrap around instead of saturating.
#[inline]
pub fn gaussian_gray(z: f64) -> u8 {
    (z.abs() * 255.0) as i64 as u8
}

/* ----------------------------- gradient kinds ----------------------------- */

/// Sample `field` at (x/100, y/100) for every pixel and store it as gray.
pub fn gradient(width: i64, height: i64, alpha: u8, field: &GradientField) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::new(width, height)?;
    fill_gradient(&mut buf, alpha, field);
    Ok(buf)
}

/// Rows are sampled in parallel; each worker owns a disjoint row slice.
pub fn fill_gradient(buf: &mut PixelBuffer, alpha: u8, field: &GradientField) {
    let stride = buf.stride();
    buf.as_bytes_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let fy = y as f64 / GRADIENT_SCALE;
            for (x, px) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let value = field.noise(x as f64 / GRADIENT_SCALE, fy);
                px.copy_from_slice(&Color::gray(gradient_gray(value), alpha).to_bytes());
            }
        });
}

/// Map a value in [-1,1] onto 0..=255.
#[inline]
pub fn gradient_gray(value: f64) -> u8 {
    ((value + 1.0) * 0.5 * 255.0).round().clamp(0.0, 255.0) as u8
}

/* ------------------------------ plus pattern ------------------------------ */

/// How many glyphs a `width`x`height` pattern places.
pub fn plus_count(width: usize, height: usize, plus_size: usize) -> usize {
    (width / plus_size) * (height / plus_size)
}

/// White plus signs scattered over a transparent background.
pub fn plus_pattern(width: i64, height: i64, alpha: u8, plus_size: i64) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::new(width, height)?;
    fill_plus_pattern(&mut buf, alpha, plus_size, &mut rand::rng())?;
    Ok(buf)
}

/// Clear `buf` and stamp `plus_count` glyphs at random anchors. Overlaps are allowed.
/// Returns the number of glyphs placed.
pub fn fill_plus_pattern<R: Rng + ?Sized>(
    buf: &mut PixelBuffer,
    alpha: u8,
    plus_size: i64,
    rng: &mut R,
) -> Result<usize> {
    if plus_size <= 0 {
        return Err(Error::InvalidPlusSize(plus_size));
    }
    let size = plus_size as usize;
    let (w, h) = (buf.width(), buf.height());

    buf.clear();
    let count = plus_count(w, h, size);
    for _ in 0..count {
        let x = anchor(rng, w, size);
        let y = anchor(rng, h, size);
        draw_plus(buf, x, y, size, Color::gray(255, alpha));
    }
    Ok(count)
}

/// Uniform in [0, extent - size), or 0 when that range is empty.
fn anchor<R: Rng + ?Sized>(rng: &mut R, extent: usize, size: usize) -> i32 {
    let hi = extent.saturating_sub(size);
    if hi == 0 { 0 } else { rng.random_range(0..hi) as i32 }
}

/// One horizontal run through the middle row and one vertical run through the middle column,
/// both `size` long, starting at the anchor's left edge and top edge.
pub fn draw_plus(buf: &mut PixelBuffer, x: i32, y: i32, size: usize, color: Color) {
    let half = (size / 2) as i32;
    for i in 0..size as i32 {
        buf.set_pixel(x + i, y + half, color);
        buf.set_pixel(x + half, y + i, color);
    }
}
