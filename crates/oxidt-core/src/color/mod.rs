//! Color space types and reference whites

pub mod lab;
pub mod white_point;
pub mod xyz;

pub use lab::{xyz_rows_to_lab, Lab};
pub use white_point::{A_WHITE, ACES_WHITE, D50_WHITE, D65_WHITE};
pub use xyz::Xyz;
