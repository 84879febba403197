//! Reference fixtures for a dual-illuminant camera characterization
//!
//! The calibration pair below describes a cinema camera characterized
//! under illuminant A (EXIF tag 17) and D65 (tag 21). Expected outputs
//! were computed with an independent reference implementation of the
//! same derivation.

use oxidt_core::{Calibration, IdtBuilder, Illuminant, Matrix3x3};

/// XYZ→camera calibration measured under illuminant A (2856 K)
pub const XYZ_TO_CAMERA_A: Matrix3x3 = Matrix3x3::new([
    [1.4316185537, -0.5849238220, 0.0487192591],
    [-0.3885178355, 1.4810372050, 0.0190466817],
    [0.1190532349, 0.1725475639, 0.8004574517],
]);

/// XYZ→camera calibration measured under D65 (6500 K)
pub const XYZ_TO_CAMERA_D65: Matrix3x3 = Matrix3x3::new([
    [1.0057226295, -0.2712063854, -0.0835512612],
    [-0.4907204714, 1.3433992688, 0.1124256815],
    [-0.0654145474, 0.3311345042, 0.5372372034],
]);

/// As-shot neutral from the camera white balance
pub const AS_SHOT_NEUTRAL: [f64; 3] = [0.6289999865, 1.0, 0.7904000305];

/// Test illuminant for the blending fixture, in mired
pub const TEST_MIRED: f64 = 158.8461538462;

/// Expected blend of the calibration pair at [`TEST_MIRED`]
pub const EXPECTED_WEIGHTED: [[f64; 3]; 3] = [
    [1.0165710542, -0.2791973987, -0.0801820653],
    [-0.4881171650, 1.3469051835, 0.1100471308],
    [-0.0607157824, 0.3270949763, 0.5439419519],
];

/// Expected solved XYZ→camera matrix for [`AS_SHOT_NEUTRAL`]
pub const EXPECTED_SOLVED: [[f64; 3]; 3] = [
    [1.0616656923, -0.3124143737, -0.0661770211],
    [-0.4772957633, 1.3614785395, 0.1001599918],
    [-0.0411839968, 0.3103035015, 0.5718121924],
];

/// XYZ stimulus with a known Robertson CCT
pub const CCT_STIMULUS: [f64; 3] = [0.9731171910, 1.0174927152, 0.9498565880];

/// Expected CCT of [`CCT_STIMULUS`] in Kelvin
pub const EXPECTED_CCT: f64 = 5564.6648479019;

/// Builder over the reference calibration pair
pub fn reference_builder() -> IdtBuilder {
    IdtBuilder::new(
        Calibration::new(Illuminant::LightSource(17), XYZ_TO_CAMERA_A),
        Calibration::new(Illuminant::LightSource(21), XYZ_TO_CAMERA_D65),
    )
    .expect("reference tags resolve")
}
