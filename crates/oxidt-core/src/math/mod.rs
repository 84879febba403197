//! Math primitives for IDT derivation

pub mod chromatic_adaptation;
pub mod interpolation;
pub mod linalg;
pub mod matrix;

pub use chromatic_adaptation::{adaptation_matrix, AP0_TO_XYZ, CAT02, CAT02_INV, XYZ_TO_AP0};
pub use interpolation::{lerp, lerp3};
pub use linalg::{
    cross2, div_elements, dot, find_index_interp1, interp1d_linear, mul_elements, reciprocal,
    scale_by_reciprocal, scale_to_max, scale_to_min, Mat,
};
pub use matrix::Matrix3x3;
