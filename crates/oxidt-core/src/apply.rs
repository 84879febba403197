//! Batch application of a derived matrix to pixel data
//!
//! Applies a 3x3 transform in place to a flat buffer of interleaved
//! RGB or XYZ triples. Large buffers are split across threads; the
//! per-chunk kernel is compiled per instruction set so the compiler
//! can vectorize the row loop.

use multiversion::multiversion;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::math::Matrix3x3;

/// Pixel count above which the work is split across threads
pub const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Pixels handed to each thread task
const CHUNK_PIXELS: usize = 16 * 1024;

/// Transform a batch of pixels in place
///
/// Matrix elements are hoisted into locals for better register
/// allocation; the loop body then auto-vectorizes.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn transform_rows(matrix: &[[f64; 3]; 3], rows: &mut [[f64; 3]]) {
    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m02 = matrix[0][2];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];
    let m12 = matrix[1][2];
    let m20 = matrix[2][0];
    let m21 = matrix[2][1];
    let m22 = matrix[2][2];

    for px in rows.iter_mut() {
        let r = px[0];
        let g = px[1];
        let b = px[2];

        px[0] = m00 * r + m01 * g + m02 * b;
        px[1] = m10 * r + m11 * g + m12 * b;
        px[2] = m20 * r + m21 * g + m22 * b;
    }
}

/// Apply a 3x3 matrix to every triple of a flat buffer, in place
///
/// `row_width` must be 3 and the buffer length a multiple of it;
/// anything else fails with [`Error::ShapeMismatch`]. Buffers above
/// [`PARALLEL_THRESHOLD`] pixels are processed in parallel.
pub fn apply_matrix_in_place(data: &mut [f64], row_width: usize, m: &Matrix3x3) -> Result<()> {
    if row_width != 3 {
        return Err(Error::ShapeMismatch(format!(
            "row width {row_width} unsupported, expected 3"
        )));
    }
    if data.len() % 3 != 0 {
        return Err(Error::ShapeMismatch(format!(
            "buffer length {} is not a multiple of 3",
            data.len()
        )));
    }

    let rows: &mut [[f64; 3]] = bytemuck::try_cast_slice_mut(data)
        .map_err(|e| Error::ShapeMismatch(format!("buffer not castable to triples: {e}")))?;

    if rows.len() > PARALLEL_THRESHOLD {
        rows.par_chunks_mut(CHUNK_PIXELS)
            .for_each(|chunk| transform_rows(&m.m, chunk));
    } else {
        transform_rows(&m.m, rows);
    }
    Ok(())
}
