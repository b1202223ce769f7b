//! A [`Color`] holds a value in any of the supported color spaces.

use std::fmt;

use crate::convert::convert;
use crate::error::Error;
use crate::models::{Hsl, Hsv, Lab, Srgb, XyzD65};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all real components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all real components are stored as.
pub type Component = f64;

/// The smallest alpha step that survives a round trip through an 8-bit alpha
/// byte. Used as the natural tolerance when comparing colors.
pub const ALPHA_EPSILON: Component = 1.0 / 255.0;

/// Tags identifying the color spaces a [`Color`] can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// The sRGB color space with 8-bit channels.
    Srgb = 0,
    /// The HSL (hue, saturation, lightness) notation of the sRGB color space.
    Hsl = 1,
    /// The HSV (hue, saturation, value) notation of the sRGB color space.
    Hsv = 2,
    /// The CIE-XYZ color space with a D65 white point.
    XyzD65 = 3,
    /// The CIE-Lab color space with a D50 white point.
    Lab = 4,
}

impl Space {
    /// The lowercase name of the color space.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Srgb => "srgb",
            Space::Hsl => "hsl",
            Space::Hsv => "hsv",
            Space::XyzD65 => "xyz-d65",
            Space::Lab => "lab",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Implemented by every model to tie it to its [`Space`] tag.
pub trait HasSpace {
    /// The space the model is expressed in.
    const SPACE: Space;
}

/// A color in any of the supported color spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// A color in the sRGB color space.
    Srgb(Srgb),
    /// A color in the HSL notation.
    Hsl(Hsl),
    /// A color in the HSV notation.
    Hsv(Hsv),
    /// A color in the CIE-XYZ color space with a D65 white point.
    XyzD65(XyzD65),
    /// A color in the CIE-Lab color space.
    Lab(Lab),
}

impl Color {
    /// Return the space this color is expressed in.
    pub fn space(&self) -> Space {
        match self {
            Color::Srgb(_) => Space::Srgb,
            Color::Hsl(_) => Space::Hsl,
            Color::Hsv(_) => Space::Hsv,
            Color::XyzD65(_) => Space::XyzD65,
            Color::Lab(_) => Space::Lab,
        }
    }

    /// Return the alpha component of the color.
    pub fn alpha(&self) -> Component {
        match self {
            Color::Srgb(c) => c.alpha(),
            Color::Hsl(c) => c.alpha(),
            Color::Hsv(c) => c.alpha(),
            Color::XyzD65(c) => c.alpha(),
            Color::Lab(c) => c.alpha(),
        }
    }

    /// Return the three color components, in the declaration order of the
    /// underlying model. sRGB channels are returned as their byte values.
    pub fn components(&self) -> [Component; 3] {
        match self {
            Color::Srgb(c) => [
                c.red() as Component,
                c.green() as Component,
                c.blue() as Component,
            ],
            Color::Hsl(c) => c.components(),
            Color::Hsv(c) => c.components(),
            Color::XyzD65(c) => c.components(),
            Color::Lab(c) => c.components(),
        }
    }

    /// Convert this color to the specified space using the standard
    /// conversion table.
    pub fn to_space(&self, space: Space) -> Result<Color, Error> {
        convert(self, space)
    }

    /// Return the sRGB model of this color.
    pub fn to_srgb(&self) -> Result<Srgb, Error> {
        match convert(self, Space::Srgb)? {
            Color::Srgb(srgb) => Ok(srgb),
            other => Err(Error::UnsupportedConversion {
                from: other.space(),
                to: Space::Srgb,
            }),
        }
    }

    /// Compare two colors, possibly in different spaces. Both sides are
    /// converted to sRGB, where the channels must match exactly and the alpha
    /// components must be within `tolerance` of each other.
    pub fn approx_eq(&self, other: &Color, tolerance: Component) -> Result<bool, Error> {
        Ok(self.to_srgb()?.approx_eq(&other.to_srgb()?, tolerance))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Srgb(srgb) => fmt::Display::fmt(srgb, f),
            _ => {
                let [c0, c1, c2] = self.components();
                write!(f, "{}({} {} {} / {})", self.space(), c0, c1, c2, self.alpha())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_of_each_variant() {
        let srgb = Srgb::new(1, 2, 3, None).unwrap();
        assert_eq!(Color::from(srgb).space(), Space::Srgb);
        assert_eq!(Color::from(srgb.to_hsl()).space(), Space::Hsl);
        assert_eq!(Color::from(srgb.to_hsv()).space(), Space::Hsv);
        assert_eq!(Color::from(srgb.to_xyz()).space(), Space::XyzD65);
        assert_eq!(Color::from(srgb.to_lab()).space(), Space::Lab);
    }

    #[test]
    fn alpha_is_exposed_for_every_variant() {
        let srgb = Srgb::new(10, 20, 30, Some(0.25)).unwrap();
        assert_eq!(Color::from(srgb).alpha(), 0.25);
        assert_eq!(Color::from(srgb.to_hsl()).alpha(), 0.25);
        assert_eq!(Color::from(srgb.to_hsv()).alpha(), 0.25);
        assert_eq!(Color::from(srgb.to_xyz()).alpha(), 0.25);
        assert_eq!(Color::from(srgb.to_lab()).alpha(), 0.25);
    }

    #[test]
    fn colors_in_different_spaces_compare_after_conversion() {
        let srgb = Srgb::new(150, 192, 98, None).unwrap();
        let hsl = Color::from(srgb.to_hsl());
        assert!(Color::from(srgb).approx_eq(&hsl, ALPHA_EPSILON).unwrap());

        let other = Color::from(Srgb::new(150, 192, 99, None).unwrap());
        assert!(!other.approx_eq(&hsl, ALPHA_EPSILON).unwrap());
    }

    #[test]
    fn models_know_their_space() {
        assert_eq!(<Srgb as HasSpace>::SPACE, Space::Srgb);
        assert_eq!(<Hsl as HasSpace>::SPACE, Space::Hsl);
        assert_eq!(<Hsv as HasSpace>::SPACE, Space::Hsv);
        assert_eq!(<XyzD65 as HasSpace>::SPACE, Space::XyzD65);
        assert_eq!(<Lab as HasSpace>::SPACE, Space::Lab);
    }

    #[test]
    fn space_names() {
        assert_eq!(Space::Srgb.to_string(), "srgb");
        assert_eq!(Space::XyzD65.to_string(), "xyz-d65");
        assert_eq!(Space::Lab.to_string(), "lab");
    }

    #[test]
    fn display_non_srgb_color() {
        let hsl = Hsl::new(120.0, 50.0, 25.0, None).unwrap();
        assert_eq!(Color::from(hsl).to_string(), "hsl(120 50 25 / 1)");
    }
}
