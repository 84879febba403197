//! Input Device Transform derivation
//!
//! A camera ships with two XYZ→camera calibration matrices, each tied
//! to a reference illuminant. Given an as-shot neutral in camera space,
//! this module finds the scene illuminant by fixed-point iteration and
//! blends the calibrations into a single transform, then composes the
//! full camera→ACES matrix.

use crate::cct::{cct_to_mired, light_source_to_color_temp, xyz_to_color_temperature};
use crate::color::{Xyz, ACES_WHITE};
use crate::error::{Error, Result};
use crate::math::{adaptation_matrix, lerp, Matrix3x3, XYZ_TO_AP0};

/// The reference illuminant a calibration matrix was measured under
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Illuminant {
    /// An EXIF LightSource tag, resolved through the standard table
    LightSource(u16),
    /// A correlated color temperature in Kelvin, given directly
    Cct(f64),
}

impl Illuminant {
    /// Resolve to a correlated color temperature in Kelvin
    pub fn cct(&self) -> Result<f64> {
        match *self {
            Self::LightSource(tag) => light_source_to_color_temp(tag),
            Self::Cct(kelvin) => Ok(kelvin),
        }
    }
}

/// One camera calibration: an XYZ→camera matrix and the illuminant it
/// was measured under
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    /// Reference illuminant
    pub illuminant: Illuminant,
    /// XYZ to camera-native RGB
    pub xyz_to_camera: Matrix3x3,
}

impl Calibration {
    /// Create a calibration entry
    #[inline]
    pub const fn new(illuminant: Illuminant, xyz_to_camera: Matrix3x3) -> Self {
        Self {
            illuminant,
            xyz_to_camera,
        }
    }
}

/// Convergence controls for the illuminant solver
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Stop when the mired estimate moves less than this between
    /// iterations
    pub mired_tolerance: f64,
    /// Iteration cap; hitting it is not an error, the last estimate is
    /// used
    pub max_iterations: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            mired_tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

/// Derives IDT matrices from a pair of camera calibrations
#[derive(Debug, Clone)]
pub struct IdtBuilder {
    calibration1: Calibration,
    calibration2: Calibration,
    mired1: f64,
    mired2: f64,
    options: SolverOptions,
}

impl IdtBuilder {
    /// Create a builder from two calibrations
    ///
    /// Resolves both illuminants to CCT up front, so an unrecognized
    /// LightSource tag fails here rather than mid-solve.
    pub fn new(calibration1: Calibration, calibration2: Calibration) -> Result<Self> {
        let mired1 = cct_to_mired(calibration1.illuminant.cct()?);
        let mired2 = cct_to_mired(calibration2.illuminant.cct()?);
        Ok(Self {
            calibration1,
            calibration2,
            mired1,
            mired2,
            options: SolverOptions::default(),
        })
    }

    /// Override the solver convergence controls
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Blend the two calibration matrices for a test illuminant
    ///
    /// The weight is the test mired's position between the calibration
    /// mireds, clamped to [0, 1], so temperatures outside the interval
    /// return the nearer calibration matrix unchanged. Identical
    /// calibration mireds always return calibration 1.
    pub fn xyz_to_camera_weighted(&self, mired: f64) -> Matrix3x3 {
        if self.mired1 == self.mired2 {
            return self.calibration1.xyz_to_camera;
        }
        let w = ((self.mired1 - mired) / (self.mired1 - self.mired2)).clamp(0.0, 1.0);
        let m1 = &self.calibration1.xyz_to_camera.m;
        let m2 = &self.calibration2.xyz_to_camera.m;
        let mut out = Matrix3x3::zero();
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = lerp(m1[i][j], m2[i][j], w);
            }
        }
        out
    }

    /// Solve for the XYZ→camera matrix matching an as-shot neutral
    ///
    /// Fixed-point iteration: start midway between the calibration
    /// mireds, map the neutral through the inverse of the current
    /// weighted matrix, re-estimate the CCT of the resulting XYZ, and
    /// repeat until the mired estimate settles. Typically converges in
    /// under five iterations; the cap is a safety net, not a failure.
    pub fn find_xyz_to_camera_matrix(&self, neutral: [f64; 3]) -> Result<Matrix3x3> {
        let mut mired = 0.5 * (self.mired1 + self.mired2);
        for _ in 0..self.options.max_iterations {
            let weighted = self.xyz_to_camera_weighted(mired);
            let xyz = weighted.inverse()?.multiply_vec(neutral);
            let next = cct_to_mired(xyz_to_color_temperature(Xyz::from_array(xyz)));
            let step = (next - mired).abs();
            mired = next;
            if step < self.options.mired_tolerance {
                break;
            }
        }
        Ok(self.xyz_to_camera_weighted(mired))
    }

    /// The solved camera→XYZ matrix for an as-shot neutral
    pub fn camera_to_xyz_matrix(&self, neutral: [f64; 3]) -> Result<Matrix3x3> {
        self.find_xyz_to_camera_matrix(neutral)?.inverse()
    }

    /// The scene white in XYZ implied by an as-shot neutral, Y = 1
    pub fn camera_white_point_xyz(&self, neutral: [f64; 3]) -> Result<Xyz> {
        let camera_to_xyz = self.camera_to_xyz_matrix(neutral)?;
        let white = Xyz::from_array(camera_to_xyz.multiply_vec(neutral));
        Ok(white.normalized_y())
    }

    /// The full camera→ACES AP0 matrix for an as-shot neutral
    ///
    /// Composes XYZ→AP0 with a CAT02 adaptation from the solved scene
    /// white to the ACES white and the solved camera→XYZ matrix, then
    /// scales so the transformed neutral's largest component is 1.
    pub fn aces_idt_matrix(&self, neutral: [f64; 3]) -> Result<Matrix3x3> {
        let camera_to_xyz = self.camera_to_xyz_matrix(neutral)?;
        let white = Xyz::from_array(camera_to_xyz.multiply_vec(neutral)).normalized_y();
        let cat = adaptation_matrix(white.to_array(), ACES_WHITE.to_array())?;
        let idt = XYZ_TO_AP0.multiply(&cat).multiply(&camera_to_xyz);

        let aces_neutral = idt.multiply_vec(neutral);
        let max = aces_neutral.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        if max <= 0.0 {
            return Err(Error::DivideByZero(
                "transformed neutral has no positive component".into(),
            ));
        }
        Ok(idt.scale(1.0 / max))
    }
}
