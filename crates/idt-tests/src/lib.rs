//! # idt-tests
//!
//! Fixture and property tests for oxidt.
//!
//! This crate provides:
//! - Reference fixtures for a dual-illuminant camera characterization
//! - Comparison helpers with relative tolerances
//! - Seeded random generators for property tests
//!
//! ## Test Categories
//!
//! 1. **Derivation pipeline**: weighted blending, illuminant solving,
//!    ACES IDT composition
//! 2. **CCT estimation**: Robertson fixtures and table-edge clamping
//! 3. **Math properties**: randomized inversion, solving, interpolation

pub mod fixtures;
pub mod support;

pub use fixtures::{reference_builder, AS_SHOT_NEUTRAL};
pub use support::{assert_matrix_close, rel_close};
