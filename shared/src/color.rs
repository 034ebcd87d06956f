//! # Colors
//!
//! Packed ARGB colors and the color filters that can be applied uniformly to
//! every paint of a wheel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A packed `0xAARRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const RED: Argb = Argb(0xFFFF_0000);
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    /// Translucent light gray used for the rim by default
    pub const RIM_GRAY: Argb = Argb(0xAADD_DDDD);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same color with the alpha channel replaced
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Argb((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Argb(value)
    }
}

/// Color transformation applied to a paint's color at draw time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorFilter {
    /// Replace the RGB channels with the filter color, keeping the paint's alpha
    /// scaled by the filter's alpha
    Tint(Argb),
    /// Multiply every channel by the filter color
    Modulate(Argb),
}

impl ColorFilter {
    pub fn apply(&self, color: Argb) -> Argb {
        match *self {
            ColorFilter::Tint(tint) => {
                let alpha = mul_channel(color.alpha(), tint.alpha());
                tint.with_alpha(alpha)
            }
            ColorFilter::Modulate(factor) => Argb::from_argb(
                mul_channel(color.alpha(), factor.alpha()),
                mul_channel(color.red(), factor.red()),
                mul_channel(color.green(), factor.green()),
                mul_channel(color.blue(), factor.blue()),
            ),
        }
    }
}

fn mul_channel(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let color = Argb(0xAADD_CCBB);
        assert_eq!(color.alpha(), 0xAA);
        assert_eq!(color.red(), 0xDD);
        assert_eq!(color.green(), 0xCC);
        assert_eq!(color.blue(), 0xBB);
        assert_eq!(Argb::from_argb(0xAA, 0xDD, 0xCC, 0xBB), color);
        assert_eq!(color.with_alpha(0x10), Argb(0x10DD_CCBB));
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Argb::RIM_GRAY.to_string(), "#AADDDDDD");
    }

    #[test]
    fn test_tint_keeps_source_alpha() {
        let filter = ColorFilter::Tint(Argb::from_rgb(0, 0, 255));
        assert_eq!(filter.apply(Argb(0x80FF_0000)), Argb(0x8000_00FF));
        assert_eq!(filter.apply(Argb::TRANSPARENT), Argb(0x0000_00FF));
    }

    #[test]
    fn test_modulate_with_white_is_identity() {
        let filter = ColorFilter::Modulate(Argb::WHITE);
        assert_eq!(filter.apply(Argb::RIM_GRAY), Argb::RIM_GRAY);

        let halve = ColorFilter::Modulate(Argb(0xFF80_8080));
        assert_eq!(halve.apply(Argb(0xFFFF_0000)), Argb(0xFF80_0000));
    }
}
