//! Model a color in the CIE-XYZ color space.

use crate::color::Component;
use crate::error::Error;
use crate::models::{checked_alpha, checked_component};

tincture_macros::gen_model! {
    /// A color in the CIE-XYZ color space with a D65 white point reference.
    /// `y` is relative luminance, 1.0 being the white point.
    pub struct XyzD65 {
        x: Component,
        y: Component,
        z: Component,
    }
}

impl XyzD65 {
    /// The D65 reference white.
    #[allow(clippy::excessive_precision)]
    pub const WHITE_POINT: [Component; 3] = [0.9504559270516716, 1.0, 1.0890577507598784];

    /// Create a new color with XYZ components. Components only have to be
    /// finite.
    pub fn new(
        x: Component,
        y: Component,
        z: Component,
        alpha: Option<Component>,
    ) -> Result<Self, Error> {
        Ok(Self::from_parts(
            checked_component("x", x)?,
            checked_component("y", y)?,
            checked_component("z", z)?,
            checked_alpha(alpha)?,
        ))
    }

    /// Compare each component within `tolerance`.
    pub fn approx_eq(&self, other: &XyzD65, tolerance: Component) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
            && (self.alpha - other.alpha).abs() <= tolerance
    }
}
