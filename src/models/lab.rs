//! Model a color in the CIE-Lab color space.

use crate::color::Component;
use crate::error::Error;
use crate::models::{checked_alpha, checked_component, checked_percentage};

tincture_macros::gen_model! {
    /// A color in the CIE-Lab color space, relative to a D50 reference white.
    /// Lightness is within `[0, 100]`; `a` and `b` are unbounded.
    pub struct Lab {
        lightness: Component,
        a: Component,
        b: Component,
    }
}

impl Lab {
    /// The D50 reference white Lab is defined against.
    #[allow(clippy::excessive_precision)]
    pub const WHITE_POINT: [Component; 3] = [0.9642956764295677, 1.0, 0.8251046025104602];

    /// Create a new color with Lab components. Lightness must be within
    /// `[0, 100]`; `a` and `b` only have to be finite.
    pub fn new(
        lightness: Component,
        a: Component,
        b: Component,
        alpha: Option<Component>,
    ) -> Result<Self, Error> {
        Ok(Self::from_parts(
            checked_percentage("lightness", lightness)?,
            checked_component("a", a)?,
            checked_component("b", b)?,
            checked_alpha(alpha)?,
        ))
    }

    /// Compare each component within `tolerance`.
    pub fn approx_eq(&self, other: &Lab, tolerance: Component) -> bool {
        (self.lightness - other.lightness).abs() <= tolerance
            && (self.a - other.a).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
            && (self.alpha - other.alpha).abs() <= tolerance
    }
}
