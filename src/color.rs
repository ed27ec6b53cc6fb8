//! Linear RGB color stops for the radial galaxy gradient.

use crate::params::ParamError;

/// RGB triple with components in [0, 1], interpolated component-wise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string, the format the color inputs emit.
    pub fn from_hex(hex: &str) -> Result<Self, ParamError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ParamError::BadColor(hex.to_string()));
        }
        let parse = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ParamError::BadColor(hex.to_string()))
        };
        let r = parse(&digits[0..2])?;
        let g = parse(&digits[2..4])?;
        let b = parse(&digits[4..6])?;
        Ok(Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        ))
    }

    /// Component-wise linear blend; `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Euclidean distance in linear RGB space.
    pub fn distance(self, other: Rgb) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}
