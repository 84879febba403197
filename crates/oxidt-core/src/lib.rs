//! # oxidt - camera Input Device Transform derivation
//!
//! Derives the matrix that takes camera-native RGB to a standard color
//! space, from the calibration metadata a raw file carries.
//!
//! ## What it does
//!
//! - **CCT estimation**: Robertson's isotherm method over CIE 1960 (u, v)
//! - **Calibration blending**: mired-weighted interpolation between the
//!   two XYZ→camera calibration matrices
//! - **Illuminant solving**: fixed-point iteration from the as-shot
//!   neutral to the scene adopted white
//! - **ACES output**: CAT02 adaptation to the ACES white and conversion
//!   to AP0 primaries
//!
//! ## Quick Start
//!
//! ```no_run
//! use oxidt_core::{Calibration, IdtBuilder, Illuminant, Matrix3x3};
//!
//! // Calibration matrices from raw metadata, one per illuminant
//! let cal_a = Calibration::new(Illuminant::LightSource(17), Matrix3x3::identity());
//! let cal_d65 = Calibration::new(Illuminant::LightSource(21), Matrix3x3::identity());
//!
//! let builder = IdtBuilder::new(cal_a, cal_d65).unwrap();
//!
//! // As-shot neutral from the white balance
//! let neutral = [0.629, 1.0, 0.7904];
//! let idt = builder.aces_idt_matrix(neutral).unwrap();
//!
//! // Apply to interleaved RGB data in place
//! let mut pixels = vec![0.18_f64; 3 * 1024];
//! oxidt_core::apply_matrix_in_place(&mut pixels, 3, &idt).unwrap();
//! ```

pub mod apply;
pub mod cct;
pub mod color;
pub mod error;
pub mod idt;
pub mod math;

pub use apply::apply_matrix_in_place;
pub use cct::{
    cct_to_mired, light_source_to_color_temp, mired_to_cct, robertson_length,
    xyz_to_color_temperature, Isotherm, CCT_MAX, CCT_MIN, ROBERTSON_ISOTHERMS,
};
pub use color::{Lab, Xyz, ACES_WHITE};
pub use error::{Error, Result};
pub use idt::{Calibration, IdtBuilder, Illuminant, SolverOptions};
pub use math::{Mat, Matrix3x3};

/// Version of oxidt
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
