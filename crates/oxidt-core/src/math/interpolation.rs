//! Scalar and component-wise linear interpolation

/// Linear interpolation between two values
///
/// `t` is not clamped; values outside [0, 1] extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Component-wise linear interpolation between two 3-vectors
#[inline]
pub fn lerp3(a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
    ]
}
