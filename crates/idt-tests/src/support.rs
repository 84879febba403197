//! Comparison helpers and seeded generators

use oxidt_core::Matrix3x3;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Relative closeness; falls back to absolute near zero
pub fn rel_close(actual: f64, expected: f64, tolerance: f64) -> bool {
    if expected.abs() < 1e-12 {
        return actual.abs() < tolerance;
    }
    ((actual - expected) / expected).abs() < tolerance
}

/// Assert every element of a matrix within relative tolerance
pub fn assert_matrix_close(actual: &Matrix3x3, expected: &[[f64; 3]; 3], tolerance: f64) {
    for i in 0..3 {
        for j in 0..3 {
            assert!(
                rel_close(actual.m[i][j], expected[i][j], tolerance),
                "[{i}][{j}]: {} vs {} (tol {tolerance})",
                actual.m[i][j],
                expected[i][j]
            );
        }
    }
}

/// Seeded RNG so failures reproduce
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A random diagonally dominant n x n matrix, comfortably invertible
pub fn random_invertible(rng: &mut ChaCha8Rng, n: usize) -> Vec<f64> {
    let mut data = vec![0.0; n * n];
    for (k, v) in data.iter_mut().enumerate() {
        *v = rng.gen_range(-1.0..1.0);
        if k % (n + 1) == 0 {
            *v += n as f64 + 1.0;
        }
    }
    data
}

/// A plausible camera neutral: green at 1, red and blue below
pub fn random_neutral(rng: &mut ChaCha8Rng) -> [f64; 3] {
    [rng.gen_range(0.4..0.9), 1.0, rng.gen_range(0.5..0.95)]
}
