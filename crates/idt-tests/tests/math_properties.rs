//! Randomized properties of the linear algebra layer

use idt_tests::support::{random_invertible, rng};
use oxidt_core::math::linalg::{interp1d_linear, scale_by_reciprocal};
use oxidt_core::{apply_matrix_in_place, Mat, Matrix3x3};
use rand::prelude::*;

#[test]
fn inverse_product_is_identity() {
    let mut rng = rng(0xA11CE);
    for n in 2..=6 {
        for _ in 0..20 {
            let a = Mat::from_vec(n, n, random_invertible(&mut rng, n)).unwrap();
            let inv = a.invert().unwrap();
            assert!(
                a.mul(&inv).unwrap().approx_eq(&Mat::identity(n), 1e-8),
                "size {n}"
            );
        }
    }
}

#[test]
fn solve_agrees_with_explicit_inverse() {
    let mut rng = rng(0xB0B);
    for _ in 0..20 {
        let a = Mat::from_vec(4, 4, random_invertible(&mut rng, 4)).unwrap();
        let b = Mat::from_vec(4, 2, (0..8).map(|_| rng.gen_range(-2.0..2.0)).collect()).unwrap();
        let solved = a.solve(&b).unwrap();
        let via_inverse = a.invert().unwrap().mul(&b).unwrap();
        assert!(solved.approx_eq(&via_inverse, 1e-9));
    }
}

#[test]
fn generic_inverse_matches_adjugate_inverse() {
    let mut rng = rng(0xC0FFEE);
    for _ in 0..50 {
        let data = random_invertible(&mut rng, 3);
        let generic = Mat::from_vec(3, 3, data.clone()).unwrap();
        let fixed = Matrix3x3::new([
            [data[0], data[1], data[2]],
            [data[3], data[4], data[5]],
            [data[6], data[7], data[8]],
        ]);
        let gi = generic.invert().unwrap();
        let fi = fixed.inverse().unwrap();
        let fi_as_mat = Mat::from(&fi);
        assert!(gi.approx_eq(&fi_as_mat, 1e-10));
    }
}

#[test]
fn transpose_reverses_products() {
    let mut rng = rng(0xD0E);
    let a = Mat::from_vec(3, 5, (0..15).map(|_| rng.gen_range(-1.0..1.0)).collect()).unwrap();
    let b = Mat::from_vec(5, 2, (0..10).map(|_| rng.gen_range(-1.0..1.0)).collect()).unwrap();
    let lhs = a.mul(&b).unwrap().transpose();
    let rhs = b.transpose().mul(&a.transpose()).unwrap();
    assert!(lhs.approx_eq(&rhs, 1e-12));
}

#[test]
fn interpolation_reproduces_knots() {
    let mut rng = rng(0xF00D);
    for _ in 0..10 {
        let mut xs: Vec<f64> = (0..12).map(|_| rng.gen_range(0.0..100.0)).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        xs.dedup_by(|a, b| (*a - *b).abs() < 1e-6);
        if xs.len() < 2 {
            continue;
        }
        let ys: Vec<f64> = xs.iter().map(|x| x.sin() * 3.0 + 1.0).collect();
        let out = interp1d_linear(&xs, &xs, &ys).unwrap();
        for (a, b) in out.iter().zip(&ys) {
            assert!((a - b).abs() < 1e-9);
        }
    }
}

#[test]
fn reciprocal_scaling_normalizes_smallest_to_one() {
    let mut rng = rng(0xBEEF);
    for _ in 0..20 {
        let v: Vec<f64> = (0..8).map(|_| rng.gen_range(0.1..10.0)).collect();
        let scaled = scale_by_reciprocal(&v).unwrap();
        let min = scaled.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        assert!((min - 1.0).abs() < 1e-12);
        // Ordering inverts: the largest input maps to the smallest output
        let max_in = v
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap()
            .0;
        assert_eq!(scaled[max_in], min);
    }
}

#[test]
fn batch_apply_matches_per_pixel() {
    let mut rng = rng(0x5EED);
    let m = Matrix3x3::new([
        [0.95, 0.04, 0.01],
        [-0.02, 1.01, 0.01],
        [0.0, 0.05, 0.95],
    ]);
    let pixels: Vec<f64> = (0..3 * 257).map(|_| rng.gen_range(0.0..4.0)).collect();
    let mut batched = pixels.clone();
    apply_matrix_in_place(&mut batched, 3, &m).unwrap();
    for (chunk, out) in pixels.chunks_exact(3).zip(batched.chunks_exact(3)) {
        let expected = m.multiply_vec([chunk[0], chunk[1], chunk[2]]);
        for c in 0..3 {
            assert!((out[c] - expected[c]).abs() < 1e-12);
        }
    }
}
