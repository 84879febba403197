//! Reference white points as XYZ tristimulus values, Y = 1

use crate::color::Xyz;

/// The ACES neutral white, the chromaticity IDT output is adapted to
pub const ACES_WHITE: Xyz = Xyz::new(0.952646074569846, 1.0, 1.00882518435159);

/// CIE standard illuminant A (tungsten, 2856 K)
pub const A_WHITE: Xyz = Xyz::new(1.0985, 1.0, 0.3558);

/// CIE standard illuminant D50
pub const D50_WHITE: Xyz = Xyz::new(0.9642, 1.0, 0.8251);

/// CIE standard illuminant D65
pub const D65_WHITE: Xyz = Xyz::new(0.9505, 1.0, 1.0890);
