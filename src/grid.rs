use std::array;

use crate::tables::{ORDER_3D, TRAVERSAL_4D};

/// A distribution of points across a space
pub trait Grid<const DIMENSION: usize> {
    const VERTICES: usize;

    /// Array containing a `T` per dimension per vertex
    type VertexArray<T>: AsRef<[[T; DIMENSION]]>;

    /// Compute integer coordinates of and vectors to `point` from each vertex in the cell enclosing
    /// `point`, in the order the vertices are visited
    fn get(
        &self,
        point: [f64; DIMENSION],
    ) -> (Self::VertexArray<i64>, Self::VertexArray<f64>);
}

/// A regular grid of simplices, the simplest possible polytope in a given dimension
pub struct Simplex;

const SKEW_2D: f64 = 0.3660254037844386;
const UNSKEW_2D: f64 = 0.21132486540518713;
const SKEW_3D: f64 = 0.3333333333333333;
const UNSKEW_3D: f64 = 0.16666666666666666;
const SKEW_4D: f64 = 0.30901699437494745;
const UNSKEW_4D: f64 = 0.1381966011250105;

impl Grid<2> for Simplex {
    const VERTICES: usize = 3;

    type VertexArray<T> = [[T; 2]; 3];

    #[inline(always)]
    fn get(&self, point: [f64; 2]) -> ([[i64; 2]; 3], [[f64; 2]; 3]) {
        let (cell, offset) = locate(point, SKEW_2D, UNSKEW_2D);
        let [x0, y0] = offset;

        // Lower or upper triangle of the skewed square
        let step = if x0 > y0 { [1, 0] } else { [0, 1] };

        walk(cell, offset, [[0; 2], step, [1; 2]], UNSKEW_2D)
    }
}

impl Grid<3> for Simplex {
    const VERTICES: usize = 4;

    type VertexArray<T> = [[T; 3]; 4];

    #[inline(always)]
    fn get(&self, point: [f64; 3]) -> ([[i64; 3]; 4], [[f64; 3]; 4]) {
        let (cell, offset) = locate(point, SKEW_3D, UNSKEW_3D);
        let [x0, y0, z0] = offset;

        let code = ((x0 >= y0) as usize) << 2 | ((y0 >= z0) as usize) << 1 | (x0 >= z0) as usize;
        let [first, second] = ORDER_3D[code];

        walk(cell, offset, [[0; 3], first, second, [1; 3]], UNSKEW_3D)
    }
}

impl Grid<4> for Simplex {
    const VERTICES: usize = 5;

    type VertexArray<T> = [[T; 4]; 5];

    #[inline(always)]
    fn get(&self, point: [f64; 4]) -> ([[i64; 4]; 5], [[f64; 4]; 5]) {
        let (cell, offset) = locate(point, SKEW_4D, UNSKEW_4D);
        let [x0, y0, z0, w0] = offset;

        let code = ((x0 > y0) as usize) << 5
            | ((x0 > z0) as usize) << 4
            | ((y0 > z0) as usize) << 3
            | ((x0 > w0) as usize) << 2
            | ((y0 > w0) as usize) << 1
            | (z0 > w0) as usize;
        let rank = TRAVERSAL_4D[code];
        // The axis with rank 3 is stepped along first, rank 0 last
        let step = |threshold: u8| rank.map(|r| (r >= threshold) as i64);

        walk(
            cell,
            offset,
            [[0; 4], step(3), step(2), step(1), [1; 4]],
            UNSKEW_4D,
        )
    }
}

/// Find the skewed lattice cell containing `point` and the unskewed vector from the cell's
/// origin to `point`
#[inline(always)]
fn locate<const DIMENSION: usize>(
    point: [f64; DIMENSION],
    skew: f64,
    unskew: f64,
) -> ([i64; DIMENSION], [f64; DIMENSION]) {
    let s = point.iter().sum::<f64>() * skew;
    let cell = point.map(|x| (x + s).floor());
    let t = cell.iter().sum::<f64>() * unskew;
    let offset = array::from_fn(|d| point[d] - (cell[d] - t));
    (cell.map(|x| x as i64), offset)
}

/// Apply cumulative lattice `steps` to `cell`, producing each vertex and the vector from it to the
/// point at `offset` from the cell's origin
///
/// Each step along the lattice moves the unskewed position by `1` on the stepped axes and by
/// `-unskew` on every axis; the `n`th vertex has taken `n` steps in total. Vertices wrap on
/// overflow, since only their low 8 bits reach the hash.
#[inline(always)]
fn walk<const DIMENSION: usize, const VERTICES: usize>(
    cell: [i64; DIMENSION],
    offset: [f64; DIMENSION],
    steps: [[i64; DIMENSION]; VERTICES],
    unskew: f64,
) -> ([[i64; DIMENSION]; VERTICES], [[f64; DIMENSION]; VERTICES]) {
    let vertices = steps.map(|step| array::from_fn(|d| cell[d].wrapping_add(step[d])));
    let vectors = array::from_fn(|v| {
        array::from_fn(|d| offset[d] - steps[v][d] as f64 + v as f64 * unskew)
    });
    (vertices, vectors)
}

/// Factor mapping Euclidean coordinates onto the simplex lattice, `(sqrt(n + 1) - 1) / n`
#[inline(always)]
pub fn skew_factor(dimension: usize) -> f64 {
    (((dimension + 1) as f64).sqrt() - 1.0) / dimension as f64
}

/// Factor mapping simplex lattice coordinates back to Euclidean space, `(1 - 1 / sqrt(n + 1)) / n`
#[inline(always)]
pub fn unskew_factor(dimension: usize) -> f64 {
    (1.0 - 1.0 / ((dimension + 1) as f64).sqrt()) / dimension as f64
}
