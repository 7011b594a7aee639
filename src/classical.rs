// src/classical.rs
//
// Plain 2×2 matrix rotation, kept beside the GA code as the baseline
// the rotor paths are checked and benchmarked against.

use crate::vector::Vec2;

/// Row-major counterclockwise rotation matrix for `theta`.
pub fn rotation_matrix2(theta: f64) -> [f64; 4] {
    let (sin, cos) = theta.sin_cos();
    [cos, -sin, sin, cos]
}

/// Applies a row-major 2×2 matrix to a vector.
pub fn apply_matrix2(m: &[f64; 4], v: Vec2<f64>) -> Vec2<f64> {
    Vec2::new(m[0] * v.x + m[1] * v.y, m[2] * v.x + m[3] * v.y)
}
