use crate::{grid, hash, Grid};

/// Radius of influence of each 2D vertex, squared
const RADIUS_2D: f64 = 0.5;
/// Radius of influence of each 3D or 4D vertex, squared
const RADIUS: f64 = 0.6;

#[derive(Debug, Copy, Clone)]
pub struct Simplex2d;

impl Simplex2d {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    #[inline(always)]
    pub fn sample(&self, point: [f64; 2]) -> f64 {
        let (is, xs) = grid::Simplex.get(point);

        let mut value = 0.0;
        const VERTICES: usize = <grid::Simplex as Grid<2>>::VERTICES;
        for v in 0..VERTICES {
            value += contribution(RADIUS_2D, hash::gradient_2d(is[v]), xs[v]);
        }

        // Scales into roughly [-1, 1]
        const SCALE: f64 = 70.0;
        value * SCALE
    }
}

impl Default for Simplex2d {
    #[inline]
    fn default() -> Self {
        Simplex2d::new()
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Simplex3d;

impl Simplex3d {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    #[inline(always)]
    pub fn sample(&self, point: [f64; 3]) -> f64 {
        let (is, xs) = grid::Simplex.get(point);

        let mut value = 0.0;
        const VERTICES: usize = <grid::Simplex as Grid<3>>::VERTICES;
        for v in 0..VERTICES {
            value += contribution(RADIUS, hash::gradient_3d(is[v]), xs[v]);
        }

        const SCALE: f64 = 32.0;
        value * SCALE
    }
}

impl Default for Simplex3d {
    #[inline]
    fn default() -> Self {
        Simplex3d::new()
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Simplex4d;

impl Simplex4d {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    #[inline(always)]
    pub fn sample(&self, point: [f64; 4]) -> f64 {
        let (is, xs) = grid::Simplex.get(point);

        let mut value = 0.0;
        const VERTICES: usize = <grid::Simplex as Grid<4>>::VERTICES;
        for v in 0..VERTICES {
            value += contribution(RADIUS, hash::gradient_4d(is[v]), xs[v]);
        }

        const SCALE: f64 = 27.0;
        value * SCALE
    }
}

impl Default for Simplex4d {
    #[inline]
    fn default() -> Self {
        Simplex4d::new()
    }
}

/// Contribution of a single vertex: `(radius - |offset|²)⁴ (gradient · offset)`
///
/// Exactly zero once `|offset|²` reaches `radius`.
#[inline(always)]
fn contribution<const DIMENSION: usize>(
    radius: f64,
    gradient: [i8; DIMENSION],
    offset: [f64; DIMENSION],
) -> f64 {
    let mut t = radius;
    for x in offset {
        t -= x * x;
    }
    if t <= 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    let t4 = t2 * t2;
    t4 * dot(gradient, offset)
}

#[inline(always)]
fn dot<const DIMENSION: usize>(gradient: [i8; DIMENSION], v: [f64; DIMENSION]) -> f64 {
    gradient
        .iter()
        .zip(v)
        .fold(0.0, |acc, (&g, x)| acc + f64::from(g) * x)
}
