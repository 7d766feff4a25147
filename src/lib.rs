//! Simplex gradient noise in two, three and four dimensions
//!
//! Outputs match the classic permutation-table formulation of simplex noise exactly, so values
//! computed here can be compared against existing traces of that algorithm.
//!
//! ```
//! let height = gradnoise::noise_2d(0.25, 1.5);
//! assert!((-1.0..=1.0).contains(&height));
//! ```

mod grid;
mod hash;
mod simplex;
#[rustfmt::skip]
mod tables;

pub use grid::{skew_factor, unskew_factor, Grid, Simplex};
pub use simplex::{Simplex2d, Simplex3d, Simplex4d};

/// Check the shared lookup tables ahead of the first sample
///
/// Optional: the tables are built at compile time. Repeated calls are free.
#[inline]
pub fn initialize() {
    let table = hash::permutation();
    log::debug!("permutation lookup table ready ({} entries)", table.len());
}

/// Sample 2D simplex noise at `(x, y)`, in approximately `[-1, 1]`
#[inline]
pub fn noise_2d(x: f64, y: f64) -> f64 {
    Simplex2d::new().sample([x, y])
}

/// Sample 3D simplex noise at `(x, y, z)`, in approximately `[-1, 1]`
#[inline]
pub fn noise_3d(x: f64, y: f64, z: f64) -> f64 {
    Simplex3d::new().sample([x, y, z])
}

/// Sample 4D simplex noise at `(x, y, z, w)`, in approximately `[-1, 1]`
#[inline]
pub fn noise_4d(x: f64, y: f64, z: f64, w: f64) -> f64 {
    Simplex4d::new().sample([x, y, z, w])
}
