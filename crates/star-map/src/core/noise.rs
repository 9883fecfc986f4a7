//! Seeded coherent value noise.
//!
//! A lattice of random values is filled once from the run seed; samples blend
//! neighbouring lattice cells with a cosine curve and sum four octaves, each
//! half the amplitude of the previous one. Output lies in [0, 0.9375].

use std::f32::consts::PI;

use super::rng::Rng;

const LATTICE_BITS: u32 = 12;
const LATTICE_SIZE: usize = 1 << LATTICE_BITS;
const LATTICE_MASK: u32 = (LATTICE_SIZE as u32) - 1;

/// Lattice stride between neighbouring Y cells.
const Y_STRIDE_BITS: u32 = 4;
const Y_STRIDE: u32 = 1 << Y_STRIDE_BITS;
/// Lattice stride between neighbouring Z cells.
const Z_STRIDE_BITS: u32 = 8;
const Z_STRIDE: u32 = 1 << Z_STRIDE_BITS;

pub const DEFAULT_OCTAVES: u32 = 4;
pub const DEFAULT_FALLOFF: f32 = 0.5;

/// Deterministic 1D/2D/3D noise function, seeded once per run.
#[derive(Debug, Clone)]
pub struct NoiseField {
    lattice: Vec<f32>,
    octaves: u32,
    falloff: f32,
}

impl NoiseField {
    pub fn new(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let lattice = (0..LATTICE_SIZE).map(|_| rng.next_f32()).collect();
        Self {
            lattice,
            octaves: DEFAULT_OCTAVES,
            falloff: DEFAULT_FALLOFF,
        }
    }

    /// Single-channel sample, equivalent to `sample(x, 0, 0)`.
    #[inline]
    pub fn sample1(&self, x: f32) -> f32 {
        self.sample(x, 0.0, 0.0)
    }

    /// Spatial sample, equivalent to `sample(x, y, 0)`.
    #[inline]
    pub fn sample2(&self, x: f32, y: f32) -> f32 {
        self.sample(x, y, 0.0)
    }

    /// Sample the field at (x, y, z). Negative coordinates mirror positive ones.
    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let (mut xi, mut xf) = split(x.abs());
        let (mut yi, mut yf) = split(y.abs());
        let (mut zi, mut zf) = split(z.abs());

        let mut total = 0.0;
        let mut amplitude = self.falloff;

        for _ in 0..self.octaves {
            let base = xi
                .wrapping_add(yi.wrapping_shl(Y_STRIDE_BITS))
                .wrapping_add(zi.wrapping_shl(Z_STRIDE_BITS));

            let sx = cosine_curve(xf);
            let sy = cosine_curve(yf);
            let sz = cosine_curve(zf);

            let near = self.plane(base, sx, sy);
            let far = self.plane(base.wrapping_add(Z_STRIDE), sx, sy);
            total += (near + sz * (far - near)) * amplitude;

            amplitude *= self.falloff;

            (xi, xf) = double(xi, xf);
            (yi, yf) = double(yi, yf);
            (zi, zf) = double(zi, zf);
        }

        total
    }

    /// Bilinear blend of the four lattice values of one Z plane.
    #[inline]
    fn plane(&self, base: u32, sx: f32, sy: f32) -> f32 {
        let a = self.at(base);
        let b = self.at(base.wrapping_add(1));
        let c = self.at(base.wrapping_add(Y_STRIDE));
        let d = self.at(base.wrapping_add(Y_STRIDE + 1));
        let top = a + sx * (b - a);
        let bottom = c + sx * (d - c);
        top + sy * (bottom - top)
    }

    #[inline]
    fn at(&self, index: u32) -> f32 {
        self.lattice[(index & LATTICE_MASK) as usize]
    }
}

#[inline]
fn split(v: f32) -> (u32, f32) {
    let whole = v.floor();
    (whole as u32, v - whole)
}

/// Move to the next octave: double the frequency, carrying the fractional overflow.
#[inline]
fn double(i: u32, f: f32) -> (u32, f32) {
    let mut i = i.wrapping_shl(1);
    let mut f = f * 2.0;
    if f >= 1.0 {
        i = i.wrapping_add(1);
        f -= 1.0;
    }
    (i, f)
}

#[inline]
fn cosine_curve(t: f32) -> f32 {
    0.5 * (1.0 - (t * PI).cos())
}
