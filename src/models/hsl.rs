//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;
use crate::error::Error;
use crate::math::{hue_distance, normalize_hue};
use crate::models::{checked_alpha, checked_component, checked_percentage};

tincture_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space. The
    /// hue is in degrees within `[0, 360)`, saturation and lightness are
    /// percentages.
    pub struct Hsl {
        hue: Component,
        saturation: Component,
        lightness: Component,
    }
}

impl Hsl {
    /// Create a new color with HSL components. The hue is reduced into
    /// `[0, 360)`; saturation and lightness must be within `[0, 100]`.
    pub fn new(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Option<Component>,
    ) -> Result<Self, Error> {
        Ok(Self::from_parts(
            normalize_hue(checked_component("hue", hue)?),
            checked_percentage("saturation", saturation)?,
            checked_percentage("lightness", lightness)?,
            checked_alpha(alpha)?,
        ))
    }

    /// Return the hue rounded half away from zero to a whole degree.
    pub fn degrees_hue(&self) -> i32 {
        (self.hue.round() as i32) % 360
    }

    /// Compare each component within `tolerance`. Hues are compared on the
    /// color wheel.
    pub fn approx_eq(&self, other: &Hsl, tolerance: Component) -> bool {
        hue_distance(self.hue, other.hue) <= tolerance
            && (self.saturation - other.saturation).abs() <= tolerance
            && (self.lightness - other.lightness).abs() <= tolerance
            && (self.alpha - other.alpha).abs() <= tolerance
    }
}
