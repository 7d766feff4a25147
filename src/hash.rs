use crate::tables::{GRADIENTS_3D, GRADIENTS_4D, PERMUTATION};

/// Repeat `base` twice, so that `table[a + table[b]]` never needs to wrap for `a, b <= 255`
pub const fn expand(base: &[u8; 256]) -> [u8; 512] {
    let mut table = [0; 512];
    let mut i = 0;
    while i < table.len() {
        table[i] = base[i & 255];
        i += 1;
    }
    table
}

/// Expanded at compile time, so it exists before any code can read it
static PERMUTATION_TABLE: [u8; 512] = expand(&PERMUTATION);

#[inline(always)]
pub fn permutation() -> &'static [u8; 512] {
    &PERMUTATION_TABLE
}

/// Chain lookups through the permutation table, innermost axis last
///
/// Coordinates are reduced to `0..=255`, so every index is at most `255 + 255`.
#[inline(always)]
pub fn hash<const DIMENSION: usize>(vertex: [i64; DIMENSION]) -> usize {
    let perm = permutation();
    let mut h = 0;
    for &c in vertex.iter().rev() {
        let index = (c & 255) as usize + h;
        debug_assert!(index < perm.len());
        h = perm[index] as usize;
    }
    h
}

/// Gradient for a 2D lattice point, drawn from the first two components of the 3D set
#[inline(always)]
pub fn gradient_2d(vertex: [i64; 2]) -> [i8; 2] {
    let [gx, gy, _] = GRADIENTS_3D[hash(vertex) % GRADIENTS_3D.len()];
    [gx, gy]
}

#[inline(always)]
pub fn gradient_3d(vertex: [i64; 3]) -> [i8; 3] {
    GRADIENTS_3D[hash(vertex) % GRADIENTS_3D.len()]
}

#[inline(always)]
pub fn gradient_4d(vertex: [i64; 4]) -> [i8; 4] {
    GRADIENTS_4D[hash(vertex) % GRADIENTS_4D.len()]
}
