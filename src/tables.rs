//! Constant data shared by every evaluator
//!
//! Changing any entry changes the output of every noise function.

/// Base permutation of `0..=255` used to hash lattice coordinates
pub const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Vectors from the center of a cube towards the midpoints of its 12 edges
pub const GRADIENTS_3D: [[i8; 3]; 12] = [
    [1, 1, 0], [-1, 1, 0], [1, -1, 0], [-1, -1, 0],
    [1, 0, 1], [-1, 0, 1], [1, 0, -1], [-1, 0, -1],
    [0, 1, 1], [0, -1, 1], [0, 1, -1], [0, -1, -1],
];

/// Vectors from the center of a hypercube towards the midpoints of its 32 edges
pub const GRADIENTS_4D: [[i8; 4]; 32] = [
    [0, 1, 1, 1], [0, 1, 1, -1], [0, 1, -1, 1], [0, 1, -1, -1],
    [0, -1, 1, 1], [0, -1, 1, -1], [0, -1, -1, 1], [0, -1, -1, -1],
    [1, 0, 1, 1], [1, 0, 1, -1], [1, 0, -1, 1], [1, 0, -1, -1],
    [-1, 0, 1, 1], [-1, 0, 1, -1], [-1, 0, -1, 1], [-1, 0, -1, -1],
    [1, 1, 0, 1], [1, 1, 0, -1], [1, -1, 0, 1], [1, -1, 0, -1],
    [-1, 1, 0, 1], [-1, 1, 0, -1], [-1, -1, 0, 1], [-1, -1, 0, -1],
    [1, 1, 1, 0], [1, 1, -1, 0], [1, -1, 1, 0], [1, -1, -1, 0],
    [-1, 1, 1, 0], [-1, 1, -1, 0], [-1, -1, 1, 0], [-1, -1, -1, 0],
];

/// Steps to the second and third corners of a 3D simplex, indexed by the comparison code
/// `[x0 >= y0, y0 >= z0, x0 >= z0]` packed into bits 2, 1 and 0
///
/// Codes 1 and 6 describe impossible orderings and are never produced; they repeat their
/// neighbours.
pub const ORDER_3D: [[[i64; 3]; 2]; 8] = [
    [[0, 0, 1], [0, 1, 1]],
    [[0, 0, 1], [0, 1, 1]],
    [[0, 1, 0], [0, 1, 1]],
    [[0, 1, 0], [1, 1, 0]],
    [[0, 0, 1], [1, 0, 1]],
    [[1, 0, 0], [1, 0, 1]],
    [[1, 0, 0], [1, 1, 0]],
    [[1, 0, 0], [1, 1, 0]],
];

/// Corner visiting order for 4D simplices, indexed by the 6-bit comparison code of a point's
/// offset components
///
/// Each row holds the rank of every axis, from 3 (stepped along first) to 0 (stepped along last).
/// Only the 24 codes produced by a total ordering of four values are reachable; the remaining
/// rows are never read and are left as zeros.
pub const TRAVERSAL_4D: [[u8; 4]; 64] = [
    [0, 1, 2, 3], [0, 1, 3, 2], [0, 0, 0, 0], [0, 2, 3, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 2, 3, 0],
    [0, 2, 1, 3], [0, 0, 0, 0], [0, 3, 1, 2], [0, 3, 2, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 3, 2, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [1, 2, 0, 3], [0, 0, 0, 0], [1, 3, 0, 2], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [2, 3, 0, 1], [2, 3, 1, 0],
    [1, 0, 2, 3], [1, 0, 3, 2], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [2, 0, 3, 1], [0, 0, 0, 0], [2, 1, 3, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [2, 0, 1, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 0, 1, 2], [3, 0, 2, 1], [0, 0, 0, 0], [3, 1, 2, 0],
    [2, 1, 0, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 1, 0, 2], [0, 0, 0, 0], [3, 2, 0, 1], [3, 2, 1, 0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_is_bijection() {
        let mut seen = [false; 256];
        for &v in PERMUTATION.iter() {
            assert!(!seen[v as usize], "{} appears twice", v);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&x| x));
    }

    #[test]
    fn gradient_3d_shape() {
        for g in GRADIENTS_3D {
            assert_eq!(g.iter().filter(|&&c| c != 0).count(), 2, "{:?}", g);
            assert!(g.iter().all(|c| (-1..=1).contains(c)));
        }
    }

    #[test]
    fn gradient_4d_shape() {
        for g in GRADIENTS_4D {
            assert_eq!(g.iter().filter(|&&c| c == 0).count(), 1, "{:?}", g);
            assert!(g.iter().all(|c| (-1..=1).contains(c)));
        }
    }

    /// Every strict ordering of four values must land on a row whose ranks agree with it
    #[test]
    fn traversal_4d_reachable_rows() {
        let mut reachable = 0;
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    for d in 0..4 {
                        let v: [usize; 4] = [a, b, c, d];
                        let mut sorted = v;
                        sorted.sort_unstable();
                        if sorted != [0, 1, 2, 3] {
                            continue;
                        }
                        reachable += 1;
                        let code = ((v[0] > v[1]) as usize) << 5
                            | ((v[0] > v[2]) as usize) << 4
                            | ((v[1] > v[2]) as usize) << 3
                            | ((v[0] > v[3]) as usize) << 2
                            | ((v[1] > v[3]) as usize) << 1
                            | (v[2] > v[3]) as usize;
                        let row = TRAVERSAL_4D[code];
                        for axis in 0..4 {
                            assert_eq!(row[axis] as usize, v[axis], "code {}", code);
                        }
                    }
                }
            }
        }
        assert_eq!(reachable, 24);
    }
}
