//! Conversions between color spaces.
//!
//! Every conversion is a plain function registered in a [`Converter`] under
//! its `(source, target)` pair. The standard table ships sRGB to and from
//! HSL, HSV, CIE-XYZ (D65) and CIE-Lab, plus CIE-XYZ to and from CIE-Lab.
//! There is no implicit chaining: a pair that is not registered fails with
//! [`Error::UnsupportedConversion`].
//!
//! Conversions only operate on the 3 color components. Alpha is carried
//! through unchanged.
//!
//! ```rust
//! use tincture::{convert, Color, Space, Srgb};
//! let srgb = Srgb::new(150, 192, 98, None).unwrap();
//! let hsl = convert(&Color::from(srgb), Space::Hsl).unwrap();
//! assert_eq!(hsl.space(), Space::Hsl);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::color::{Color, Component, Space};
use crate::error::Error;
use crate::math::{normalize_hue, transform, transform_3x3, Transform};
use crate::models::{Hsl, Hsv, Lab, Srgb, XyzD65};

/// A conversion from one color to another space. The converter only calls it
/// with a color in the source space it was registered for; implementations
/// may panic on any other input.
pub type ConvertFn = fn(&Color) -> Color;

/// Dispatch table of conversions keyed by `(source, target)` space.
#[derive(Clone, Default)]
pub struct Converter {
    table: HashMap<(Space, Space), ConvertFn>,
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.table.keys()).finish()
    }
}

impl Converter {
    /// Create a converter without any registered conversions. Converting a
    /// color to its own space still succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pair of conversions between `source` and `target`.
    /// Registering a pair again replaces the previous functions.
    pub fn register(
        &mut self,
        source: Space,
        target: Space,
        forward: ConvertFn,
        inverse: ConvertFn,
    ) -> &mut Self {
        self.table.insert((source, target), forward);
        self.table.insert((target, source), inverse);
        self
    }

    /// Return true if converting from `source` to `target` is possible.
    pub fn supports(&self, source: Space, target: Space) -> bool {
        source == target || self.table.contains_key(&(source, target))
    }

    /// Convert `color` to the `target` space.
    pub fn convert(&self, color: &Color, target: Space) -> Result<Color, Error> {
        let source = color.space();
        if source == target {
            return Ok(*color);
        }

        self.table
            .get(&(source, target))
            .map(|f| f(color))
            .ok_or(Error::UnsupportedConversion {
                from: source,
                to: target,
            })
    }

    /// The shared, read-only table of the conversions this crate ships.
    pub fn standard() -> &'static Converter {
        static STANDARD: OnceLock<Converter> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut converter = Converter::new();
            converter
                .register(Space::Srgb, Space::Hsl, srgb_to_hsl, hsl_to_srgb)
                .register(Space::Srgb, Space::Hsv, srgb_to_hsv, hsv_to_srgb)
                .register(Space::Srgb, Space::XyzD65, srgb_to_xyz, xyz_to_srgb)
                .register(Space::XyzD65, Space::Lab, xyz_to_lab, lab_to_xyz)
                .register(Space::Srgb, Space::Lab, srgb_to_lab, lab_to_srgb);
            converter
        })
    }
}

/// Convert `color` to the `target` space with the standard conversions.
pub fn convert(color: &Color, target: Space) -> Result<Color, Error> {
    Converter::standard().convert(color, target)
}

macro_rules! registered {
    ($name:ident, $from:ident => $method:ident) => {
        fn $name(color: &Color) -> Color {
            match color {
                Color::$from(model) => model.$method().into(),
                other => unreachable!(
                    "{} registered for {} but called with {}",
                    stringify!($name),
                    Space::$from,
                    other.space()
                ),
            }
        }
    };
}

registered!(srgb_to_hsl, Srgb => to_hsl);
registered!(hsl_to_srgb, Hsl => to_srgb);
registered!(srgb_to_hsv, Srgb => to_hsv);
registered!(hsv_to_srgb, Hsv => to_srgb);
registered!(srgb_to_xyz, Srgb => to_xyz);
registered!(xyz_to_srgb, XyzD65 => to_srgb);
registered!(xyz_to_lab, XyzD65 => to_lab);
registered!(lab_to_xyz, Lab => to_xyz);
registered!(srgb_to_lab, Srgb => to_lab);
registered!(lab_to_srgb, Lab => to_srgb);

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let [hue, saturation, lightness] = util::rgb_to_hsl(self.to_unit());
        Hsl::from_parts(hue, saturation * 100.0, lightness * 100.0, self.alpha())
    }

    /// Convert a color specified in the sRGB color space to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let [hue, saturation, value] = util::rgb_to_hsv(self.to_unit());
        Hsv::from_parts(hue, saturation * 100.0, value * 100.0, self.alpha())
    }

    /// Convert a color specified in the sRGB color space to CIE-XYZ.
    pub fn to_xyz(&self) -> XyzD65 {
        let [x, y, z] = util::rgb_to_xyz(self.to_unit());
        XyzD65::from_parts(x, y, z, self.alpha())
    }

    /// Convert a color specified in the sRGB color space to CIE-Lab, by way
    /// of CIE-XYZ.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        let rgb = util::hsl_to_rgb([
            self.hue(),
            self.saturation() / 100.0,
            self.lightness() / 100.0,
        ]);
        Srgb::from_unit(rgb, self.alpha())
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        let rgb = util::hsv_to_rgb([
            self.hue(),
            self.saturation() / 100.0,
            self.value() / 100.0,
        ]);
        Srgb::from_unit(rgb, self.alpha())
    }
}

impl XyzD65 {
    /// Convert this color from CIE-XYZ to the sRGB color space. Colors
    /// outside the sRGB gamut are clamped per channel.
    pub fn to_srgb(&self) -> Srgb {
        Srgb::from_unit(util::xyz_to_rgb(self.components()), self.alpha())
    }

    /// Convert this color from CIE-XYZ to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        let [lightness, a, b] = util::xyz_to_lab(self.components());
        Lab::from_parts(lightness, a, b, self.alpha())
    }
}

impl Lab {
    /// Convert this color from CIE-Lab to CIE-XYZ with a D65 white point.
    pub fn to_xyz(&self) -> XyzD65 {
        let [x, y, z] = util::lab_to_xyz(self.components());
        XyzD65::from_parts(x, y, z, self.alpha())
    }

    /// Convert this color from CIE-Lab to the sRGB color space, by way of
    /// CIE-XYZ. Colors outside the sRGB gamut are clamped per channel.
    pub fn to_srgb(&self) -> Srgb {
        self.to_xyz().to_srgb()
    }
}

mod util {
    use super::*;

    /// Calculate the hue in degrees from normalized RGB channels and return it
    /// along with the min and max channel values. The hue is 0 when there is
    /// no chroma.
    fn rgb_to_hue_with_min_max([red, green, blue]: [Component; 3]) -> (Component, Component, Component) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else {
            60.0 * if max == red {
                ((green - blue) / delta).rem_euclid(6.0)
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        };

        (normalize_hue(hue), min, max)
    }

    /// Map a hue and chroma to RGB channels before the lightness offset.
    fn hue_sector(hue: Component, chroma: Component) -> [Component; 3] {
        let h = hue / 60.0;
        let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());

        match h as u32 {
            0 => [chroma, x, 0.0],
            1 => [x, chroma, 0.0],
            2 => [0.0, chroma, x],
            3 => [0.0, x, chroma],
            4 => [x, 0.0, chroma],
            _ => [chroma, 0.0, x],
        }
    }

    /// Convert from RGB notation to HSL notation. Saturation and lightness
    /// are in `[0, 1]`.
    pub fn rgb_to_hsl(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else {
            (delta / (1.0 - (2.0 * lightness - 1.0).abs())).clamp(0.0, 1.0)
        };

        [hue, saturation, lightness]
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb([hue, saturation, lightness]: [Component; 3]) -> [Component; 3] {
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let m = lightness - chroma / 2.0;

        hue_sector(normalize_hue(hue), chroma).map(|v| v + m)
    }

    /// Convert from RGB notation to HSV notation. Saturation and value are in
    /// `[0, 1]`.
    pub fn rgb_to_hsv(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        [hue, saturation, max]
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb([hue, saturation, value]: [Component; 3]) -> [Component; 3] {
        let chroma = value * saturation;
        let m = value - chroma;

        hue_sector(normalize_hue(hue), chroma).map(|v| v + m)
    }

    #[allow(clippy::excessive_precision)]
    #[rustfmt::skip]
    const TO_XYZ: Transform = transform_3x3(
        0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
        0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
        0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
    );

    #[allow(clippy::excessive_precision)]
    #[rustfmt::skip]
    const FROM_XYZ: Transform = transform_3x3(
         3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
        -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
        -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
    );

    fn to_linear_light(value: Component) -> Component {
        let abs = value.abs();

        if abs <= 0.04045 {
            value / 12.92
        } else {
            value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
        }
    }

    fn to_gamma_encoded(value: Component) -> Component {
        let abs = value.abs();

        if abs > 0.0031308 {
            value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
        } else {
            12.92 * value
        }
    }

    /// Convert gamma encoded sRGB to CIE-XYZ with a D65 white point.
    pub fn rgb_to_xyz(from: [Component; 3]) -> [Component; 3] {
        transform(&TO_XYZ, from.map(to_linear_light))
    }

    /// Convert CIE-XYZ with a D65 white point to gamma encoded sRGB.
    pub fn xyz_to_rgb(from: [Component; 3]) -> [Component; 3] {
        transform(&FROM_XYZ, from).map(to_gamma_encoded)
    }

    // Bradford chromatic adaptation between the D65 and D50 white points.
    #[allow(clippy::excessive_precision)]
    #[rustfmt::skip]
    const D65_TO_D50: Transform = transform_3x3(
         1.0479298208405488,    0.029627815688159344, -0.009243058152591178,
         0.022946793341019088,  0.990434484573249,     0.015055144896577895,
        -0.05019222954313557,  -0.01707382502938514,   0.7521316354461029,
    );

    #[allow(clippy::excessive_precision)]
    #[rustfmt::skip]
    const D50_TO_D65: Transform = transform_3x3(
         0.9554734527042182,   -0.028369706963208136,  0.012314001688319899,
        -0.023098536874261423,  1.0099954580058226,   -0.020507696433477912,
         0.0632593086610217,    0.021041398966943008,  1.3303659366080753,
    );

    const KAPPA: Component = 24389.0 / 27.0;
    const EPSILON: Component = 216.0 / 24389.0;

    /// Convert CIE-XYZ with a D65 white point to CIE-Lab.
    pub fn xyz_to_lab(from: [Component; 3]) -> [Component; 3] {
        let [x, y, z] = transform(&D65_TO_D50, from);
        let white = Lab::WHITE_POINT;

        let [f0, f1, f2] = [x / white[0], y / white[1], z / white[2]].map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        [116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2)]
    }

    /// Convert CIE-Lab to CIE-XYZ with a D65 white point.
    pub fn lab_to_xyz([lightness, a, b]: [Component; 3]) -> [Component; 3] {
        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        let white = Lab::WHITE_POINT;
        transform(&D50_TO_D65, [x * white[0], y * white[1], z * white[2]])
    }
}
