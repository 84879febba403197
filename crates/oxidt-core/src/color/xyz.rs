//! CIE XYZ tristimulus values

/// A color in the CIE XYZ color space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X component
    pub x: f64,
    /// Y component (luminance)
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create from a 3-element array
    #[inline]
    pub const fn from_array(v: [f64; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }

    /// Convert to a 3-element array
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// CIE 1960 UCS chromaticity coordinates (u, v)
    ///
    /// The coordinate system Robertson isotherms are defined in. A zero
    /// denominator (the all-zero stimulus) maps to (0, 0).
    pub fn uv(&self) -> (f64, f64) {
        let denom = self.x + 15.0 * self.y + 3.0 * self.z;
        if denom == 0.0 {
            return (0.0, 0.0);
        }
        (4.0 * self.x / denom, 6.0 * self.y / denom)
    }

    /// Scale so Y becomes 1; no-op when Y is zero
    pub fn normalized_y(&self) -> Self {
        if self.y == 0.0 {
            return *self;
        }
        Self {
            x: self.x / self.y,
            y: 1.0,
            z: self.z / self.y,
        }
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(v: [f64; 3]) -> Self {
        Self::from_array(v)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}
