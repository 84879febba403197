//! CIE L*a*b* conversion
//!
//! Used to compare derived transforms perceptually. Conversions are
//! relative to an explicit white point rather than a baked-in D50.

use crate::color::Xyz;

/// The CIE threshold δ = 6/29
const DELTA: f64 = 6.0 / 29.0;

/// A color in the CIE L*a*b* color space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (reference white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new L*a*b* color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert XYZ to L*a*b* relative to the given white point
    pub fn from_xyz(xyz: Xyz, white: Xyz) -> Self {
        let fx = lab_f(xyz.x / white.x);
        let fy = lab_f(xyz.y / white.y);
        let fz = lab_f(xyz.z / white.z);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert L*a*b* back to XYZ relative to the given white point
    pub fn to_xyz(&self, white: Xyz) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;
        Xyz::new(
            white.x * lab_f_inv(fx),
            white.y * lab_f_inv(fy),
            white.z * lab_f_inv(fz),
        )
    }

    /// Euclidean distance in L*a*b* (CIE76 ΔE)
    pub fn delta_e(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// The piecewise L*a*b* transfer function
///
/// Cube root above (6/29)³, linear with slope 1/(3δ²) below, so the two
/// pieces join with matching value and derivative.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[inline]
fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// Convert a batch of XYZ rows to L*a*b* against one white point
pub fn xyz_rows_to_lab(rows: &[[f64; 3]], white: Xyz) -> Vec<Lab> {
    rows.iter()
        .map(|&row| Lab::from_xyz(Xyz::from_array(row), white))
        .collect()
}
