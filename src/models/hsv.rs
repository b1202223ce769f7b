//! Model a color with the HSV notation in the sRGB color space.

use crate::color::Component;
use crate::error::Error;
use crate::math::{hue_distance, normalize_hue};
use crate::models::{checked_alpha, checked_component, checked_percentage};

tincture_macros::gen_model! {
    /// A color specified with the HSV (also called HSB) notation in the sRGB
    /// color space. The hue is in degrees, saturation and value are
    /// percentages.
    pub struct Hsv {
        hue: Component,
        saturation: Component,
        value: Component,
    }
}

impl Hsv {
    /// Create a new color with HSV components. Same rules as [`crate::Hsl::new`].
    pub fn new(
        hue: Component,
        saturation: Component,
        value: Component,
        alpha: Option<Component>,
    ) -> Result<Self, Error> {
        Ok(Self::from_parts(
            normalize_hue(checked_component("hue", hue)?),
            checked_percentage("saturation", saturation)?,
            checked_percentage("value", value)?,
            checked_alpha(alpha)?,
        ))
    }

    /// Compare each component within `tolerance`. Hues are compared on the
    /// color wheel.
    pub fn approx_eq(&self, other: &Hsv, tolerance: Component) -> bool {
        hue_distance(self.hue, other.hue) <= tolerance
            && (self.saturation - other.saturation).abs() <= tolerance
            && (self.value - other.value).abs() <= tolerance
            && (self.alpha - other.alpha).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates() {
        let hsv = Hsv::new(-60.0, 100.0, 100.0, None).unwrap();
        assert_eq!(hsv.hue(), 300.0);
        assert_eq!(hsv.value(), 100.0);
        assert!(matches!(
            Hsv::new(0.0, 0.0, 101.0, None),
            Err(Error::ComponentOutOfRange { component: "value", .. })
        ));
    }
}
