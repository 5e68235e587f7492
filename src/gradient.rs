// Lattice gradient noise: a shuffled permutation table plus a fixed gradient palette,
// evaluated either as classic Perlin or as a cheaper 4-corner average.

use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Gradient palette. Rows 12..16 repeat earlier directions; only x and y are used in 2D.
const GRAD3: [[f64; 3]; 16] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [0.0, -1.0, 1.0],
    [0.0, -1.0, -1.0],
];

/// How a `GradientField` turns its tables into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientKind {
    /// Faded bilinear blend of the 4 corner dot products.
    Perlin,
    /// Plain mean of the 4 corner dot products. Not a true simplex lattice:
    /// the unweighted average is a deliberate simplification, kept for output parity.
    Simplex,
}

/// Immutable noise tables. Safe to share across threads once built.
#[derive(Debug, Clone)]
pub struct GradientField {
    kind: GradientKind,
    seed: u64,
    perm: [usize; 512], // 256 shuffled entries, then the same 256 again
}

impl GradientField {
    /// Build a field whose permutation is fully determined by `seed`.
    pub fn new(kind: GradientKind, seed: u64) -> Self {
        let mut base: Vec<usize> = (0..256).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        base.shuffle(&mut rng); // Fisher-Yates

        let mut perm = [0usize; 512];
        for (i, &v) in base.iter().enumerate() {
            perm[i] = v;
            perm[i + 256] = v;
        }

        debug!("gradient field built: kind={kind:?} seed={seed:#x}");
        Self { kind, seed, perm }
    }

    /// Build a field from a fresh thread-RNG seed.
    pub fn from_entropy(kind: GradientKind) -> Self {
        Self::new(kind, rand::rng().random())
    }

    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn permutation(&self) -> &[usize; 512] {
        &self.perm
    }

    /// Sample the field at (x,y). Output is roughly in [-1,1].
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        match self.kind {
            GradientKind::Perlin => self.perlin(x, y),
            GradientKind::Simplex => self.simplex(x, y),
        }
    }

    fn perlin(&self, x: f64, y: f64) -> f64 {
        let (x0, y0) = (x.floor(), y.floor());
        let xi = (x0 as i64 & 255) as usize;
        let yi = (y0 as i64 & 255) as usize;
        let (fx, fy) = (x - x0, y - y0);

        let u = fade(fx);
        let v = fade(fy);

        let p = &self.perm;
        let a = p[xi] + yi;
        let b = p[xi + 1] + yi;
        let (aa, ab) = (p[a], p[a + 1]);
        let (ba, bb) = (p[b], p[b + 1]);

        // nXY: corner at (+X, +Y) from the cell origin
        let n00 = dot2(aa, fx, fy);
        let n10 = dot2(ba, fx - 1.0, fy);
        let n01 = dot2(ab, fx, fy - 1.0);
        let n11 = dot2(bb, fx - 1.0, fy - 1.0);

        lerp(lerp(n00, n10, u), lerp(n01, n11, u), v)
    }

    fn simplex(&self, x: f64, y: f64) -> f64 {
        let (x0, y0) = (x.floor(), y.floor());
        // reduce before stepping to the +1 corners; huge inputs saturate the cast
        let (i, j) = ((x0 as i64).rem_euclid(512), (y0 as i64).rem_euclid(512));
        let (f, g) = (x - x0, y - y0);

        let n0 = self.corner(i, j, f, g);
        let n1 = self.corner(i + 1, j, f - 1.0, g);
        let n2 = self.corner(i, j + 1, f, g - 1.0);
        let n3 = self.corner(i + 1, j + 1, f - 1.0, g - 1.0);

        (n0 + n1 + n2 + n3) / 4.0
    }

    #[inline]
    fn corner(&self, ix: i64, iy: i64, dx: f64, dy: f64) -> f64 {
        let p = &self.perm;
        let inner = p[iy.rem_euclid(512) as usize] as i64;
        let hash = p[(ix + inner).rem_euclid(512) as usize] % 16;
        dot2(hash, dx, dy)
    }
}

#[inline]
fn dot2(hash: usize, x: f64, y: f64) -> f64 {
    let g = &GRAD3[hash & 15];
    g[0] * x + g[1] * y
}

/// 6t^5 - 15t^4 + 10t^3
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
