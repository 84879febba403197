//! Correlated color temperature estimation
//!
//! Robertson's method: the CIE 1960 chromaticity of a stimulus is
//! located between two isotherm lines from a fixed 31-entry table,
//! and the reciprocal temperature is interpolated from the signed
//! perpendicular distances to each.

use crate::color::Xyz;
use crate::error::{Error, Result};

/// Lowest CCT reported, in Kelvin
pub const CCT_MIN: f64 = 2000.0;

/// Highest CCT reported, in Kelvin
pub const CCT_MAX: f64 = 50000.0;

/// One Robertson isotherm: a point on the Planckian locus in CIE 1960
/// (u, v) plus the slope of the isotherm line through it
#[derive(Debug, Clone, Copy)]
pub struct Isotherm {
    /// Reciprocal temperature in mired (1e6 / K)
    pub mired: f64,
    /// u coordinate on the locus
    pub u: f64,
    /// v coordinate on the locus
    pub v: f64,
    /// Isotherm slope dv/du
    pub slope: f64,
}

const fn iso(mired: f64, u: f64, v: f64, slope: f64) -> Isotherm {
    Isotherm { mired, u, v, slope }
}

/// Robertson (1968) isotherm table, 0 to 600 mired
pub const ROBERTSON_ISOTHERMS: [Isotherm; 31] = [
    iso(0.0, 0.18006, 0.26352, -0.24341),
    iso(10.0, 0.18066, 0.26589, -0.25479),
    iso(20.0, 0.18133, 0.26846, -0.26876),
    iso(30.0, 0.18208, 0.27119, -0.28539),
    iso(40.0, 0.18293, 0.27407, -0.30470),
    iso(50.0, 0.18388, 0.27709, -0.32675),
    iso(60.0, 0.18494, 0.28021, -0.35156),
    iso(70.0, 0.18611, 0.28342, -0.37915),
    iso(80.0, 0.18740, 0.28668, -0.40955),
    iso(90.0, 0.18880, 0.28997, -0.44278),
    iso(100.0, 0.19032, 0.29326, -0.47888),
    iso(125.0, 0.19462, 0.30141, -0.58204),
    iso(150.0, 0.19962, 0.30921, -0.70471),
    iso(175.0, 0.20525, 0.31647, -0.84901),
    iso(200.0, 0.21142, 0.32312, -1.0182),
    iso(225.0, 0.21807, 0.32909, -1.2168),
    iso(250.0, 0.22511, 0.33439, -1.4512),
    iso(275.0, 0.23247, 0.33904, -1.7298),
    iso(300.0, 0.24010, 0.34308, -2.0637),
    iso(325.0, 0.24792, 0.34655, -2.4681),
    iso(350.0, 0.25591, 0.34951, -2.9641),
    iso(375.0, 0.26400, 0.35200, -3.5814),
    iso(400.0, 0.27218, 0.35407, -4.3633),
    iso(425.0, 0.28039, 0.35577, -5.3762),
    iso(450.0, 0.28863, 0.35714, -6.7262),
    iso(475.0, 0.29685, 0.35823, -8.5955),
    iso(500.0, 0.30505, 0.35907, -11.324),
    iso(525.0, 0.31320, 0.35968, -15.628),
    iso(550.0, 0.32129, 0.36011, -23.325),
    iso(575.0, 0.32931, 0.36038, -40.770),
    iso(600.0, 0.33724, 0.36051, -116.45),
];

/// Convert a color temperature in Kelvin to mired
#[inline]
pub fn cct_to_mired(cct: f64) -> f64 {
    1.0e6 / cct
}

/// Convert mired to a color temperature in Kelvin
#[inline]
pub fn mired_to_cct(mired: f64) -> f64 {
    1.0e6 / mired
}

/// Color temperature in Kelvin for an EXIF LightSource tag
///
/// Tags 32768 and above carry the temperature directly, offset by
/// 32768. Unlisted tags below that fail with
/// [`Error::UnknownIlluminant`].
pub fn light_source_to_color_temp(tag: u16) -> Result<f64> {
    if tag >= 32768 {
        return Ok(f64::from(tag - 32768));
    }
    let kelvin = match tag {
        1 => 5500.0,
        2 => 3800.0,
        3 => 3200.0,
        17 => 2856.0,
        18 => 4874.0,
        19 => 6774.0,
        20 => 5500.0,
        21 => 6500.0,
        22 => 7500.0,
        23 => 5000.0,
        _ => return Err(Error::UnknownIlluminant(tag)),
    };
    Ok(kelvin)
}

/// Signed perpendicular distance from a chromaticity to an isotherm
///
/// Positive on the low-mired side of the line, negative on the other.
/// The sign change between consecutive isotherms brackets the stimulus.
pub fn robertson_length(uv: (f64, f64), isotherm: &Isotherm) -> f64 {
    let t = isotherm.slope;
    let sign = if t < 0.0 { -1.0 } else { 1.0 };
    let n0 = -sign / (1.0 + t * t).sqrt();
    let n1 = t * n0;
    n0 * (uv.1 - isotherm.v) - n1 * (uv.0 - isotherm.u)
}

/// Estimate the correlated color temperature of an XYZ stimulus
///
/// Scans the isotherm table for the first non-positive signed distance
/// and interpolates the reciprocal temperature between the bracketing
/// isotherms. The result is clamped to [`CCT_MIN`]..=[`CCT_MAX`]; a
/// stimulus bluer than the first isotherm reports [`CCT_MAX`].
pub fn xyz_to_color_temperature(xyz: Xyz) -> f64 {
    let uv = xyz.uv();

    let mut mired = 0.0;
    let mut prev_distance = 0.0;
    for i in 0..ROBERTSON_ISOTHERMS.len() {
        let distance = robertson_length(uv, &ROBERTSON_ISOTHERMS[i]);
        if distance <= 0.0 {
            if i == 0 {
                break;
            }
            let prev = &ROBERTSON_ISOTHERMS[i - 1];
            let this = &ROBERTSON_ISOTHERMS[i];
            mired = prev.mired
                + prev_distance * (this.mired - prev.mired) / (prev_distance - distance);
            break;
        }
        prev_distance = distance;
        // Past the last isotherm: hold at the table edge
        if i == ROBERTSON_ISOTHERMS.len() - 1 {
            mired = ROBERTSON_ISOTHERMS[i].mired;
        }
    }

    if mired <= 0.0 {
        return CCT_MAX;
    }
    mired_to_cct(mired).clamp(CCT_MIN, CCT_MAX)
}
