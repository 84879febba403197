//! CAT02 chromatic adaptation and ACES primaries
//!
//! Builds the von Kries adaptation matrix between two XYZ white points
//! in the CAT02 cone space, and carries the AP0 primary conversions used
//! when assembling the final IDT.

use crate::error::{Error, Result};
use crate::math::Matrix3x3;

/// Cone responses below this magnitude make the adaptation ill-defined
const CONE_RESPONSE_TOLERANCE: f64 = 1e-10;

/// CAT02 forward matrix: XYZ to cone-like LMS
pub const CAT02: Matrix3x3 = Matrix3x3::new([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// CAT02 inverse matrix: LMS back to XYZ
pub const CAT02_INV: Matrix3x3 = Matrix3x3::new([
    [1.096_123_8, -0.278_869_0, 0.182_745_2],
    [0.454_369_0, 0.473_533_2, 0.072_097_8],
    [-0.009_627_6, -0.005_698_0, 1.015_325_6],
]);

/// ACES AP0 RGB to CIE XYZ
pub const AP0_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.952_552_395_9, 0.0, 0.000_093_678_6],
    [0.343_966_449_8, 0.728_166_096_6, -0.072_132_546_4],
    [0.0, 0.0, 1.008_825_184_4],
]);

/// CIE XYZ to ACES AP0 RGB
pub const XYZ_TO_AP0: Matrix3x3 = Matrix3x3::new([
    [1.049_811_017_5, 0.0, -0.000_097_484_5],
    [-0.495_903_023_1, 1.373_313_045_8, 0.098_240_036_1],
    [0.0, 0.0, 0.991_252_018_2],
]);

/// Von Kries adaptation matrix from one XYZ white point to another
///
/// Scales in CAT02 cone space: `CAT02⁻¹ × diag(dst/src) × CAT02`.
/// Fails when either white produces a near-zero cone response.
pub fn adaptation_matrix(src_white: [f64; 3], dst_white: [f64; 3]) -> Result<Matrix3x3> {
    let src_lms = CAT02.multiply_vec(src_white);
    let dst_lms = CAT02.multiply_vec(dst_white);

    let mut gain = [0.0; 3];
    for i in 0..3 {
        if src_lms[i].abs() < CONE_RESPONSE_TOLERANCE {
            return Err(Error::DivideByZero(format!(
                "source white cone response {i} is near zero"
            )));
        }
        gain[i] = dst_lms[i] / src_lms[i];
    }

    let scale = Matrix3x3::diagonal(gain[0], gain[1], gain[2]);
    Ok(CAT02_INV.multiply(&scale).multiply(&CAT02))
}
