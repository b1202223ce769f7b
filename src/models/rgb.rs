//! Model a color in the sRGB color space with 8-bit channels.

use std::fmt;

use crate::color::{Color, Component, HasSpace, Space};
use crate::error::Error;
use crate::format::{format_srgb, FormatFlags, Style};

/// A color specified in the sRGB color space. Each channel is a byte and the
/// alpha component is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Srgb {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Component,
}

/// Validate an alpha component, using 1.0 when none is given.
pub(crate) fn checked_alpha(alpha: Option<Component>) -> Result<Component, Error> {
    match alpha {
        None => Ok(1.0),
        Some(alpha) if (0.0..=1.0).contains(&alpha) => Ok(alpha),
        Some(alpha) => Err(Error::AlphaOutOfRange(alpha.to_string())),
    }
}

impl Srgb {
    /// Create a new color from its channel bytes. When `alpha` is `None` the
    /// color is fully opaque.
    pub fn new(red: u8, green: u8, blue: u8, alpha: Option<Component>) -> Result<Self, Error> {
        Ok(Self::from_parts(red, green, blue, checked_alpha(alpha)?))
    }

    pub(crate) fn from_parts(red: u8, green: u8, blue: u8, alpha: Component) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque color from an integer packed as `0xRRGGBB`. Bits
    /// above the lowest 24 are ignored.
    pub fn from_u32(packed: u32) -> Self {
        Self::from_parts(
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
            1.0,
        )
    }

    /// Pack the channels into an integer as `0xRRGGBB`. Alpha is dropped.
    pub fn to_u32(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Return the red channel byte.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Return the green channel byte.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Return the blue channel byte.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Return the alpha component.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// Return the alpha component as a byte, rounded half away from zero.
    pub fn alpha_u8(&self) -> u8 {
        crate::math::to_byte(self.alpha)
    }

    /// Return the channels normalized to `[0, 1]`.
    pub fn to_unit(&self) -> [Component; 3] {
        [
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        ]
    }

    /// Build a color from channels normalized to `[0, 1]`.
    pub(crate) fn from_unit([red, green, blue]: [Component; 3], alpha: Component) -> Self {
        use crate::math::to_byte;
        Self::from_parts(to_byte(red), to_byte(green), to_byte(blue), alpha)
    }

    /// Channels must be identical and the alpha components within
    /// `tolerance` of each other.
    pub fn approx_eq(&self, other: &Srgb, tolerance: Component) -> bool {
        self.red == other.red
            && self.green == other.green
            && self.blue == other.blue
            && (self.alpha - other.alpha).abs() <= tolerance
    }
}

impl HasSpace for Srgb {
    const SPACE: Space = Space::Srgb;
}

impl From<Srgb> for Color {
    fn from(value: Srgb) -> Self {
        Color::Srgb(value)
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_srgb(self, Style::LongHex, FormatFlags::empty()))
    }
}
