use num_traits::Float;

use crate::color::{Color, Component, Space};
use crate::error::Error;
use crate::math::normalize_hue;
use crate::models::{Hsl, Hsv, Lab, Srgb, XyzD65};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Interpolate between two hues in degrees along the shorter arc.
fn lerp_hue(a: Component, b: Component, t: Component) -> Component {
    let mut delta = b - a;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }

    lerp(a, a + delta, t)
}

impl Color {
    /// Linearly interpolate from this color to another in the color space
    /// specified using `t` as the progress between them. `t` is clamped to
    /// `[0, 1]`. Hues travel along the shorter arc and sRGB channels are
    /// rounded to the nearest byte.
    pub fn interpolate(&self, other: &Color, t: Component, space: Space) -> Result<Color, Error> {
        let t = t.clamp(0.0, 1.0);
        let left = self.to_space(space)?;
        let right = other.to_space(space)?;

        let alpha = lerp(left.alpha(), right.alpha(), t);
        let [l0, l1, l2] = left.components();
        let [r0, r1, r2] = right.components();

        let color = match space {
            Space::Srgb => Srgb::from_parts(
                lerp(l0, r0, t).round() as u8,
                lerp(l1, r1, t).round() as u8,
                lerp(l2, r2, t).round() as u8,
                alpha,
            )
            .into(),
            Space::Hsl => Hsl::from_parts(
                normalize_hue(lerp_hue(l0, r0, t)),
                lerp(l1, r1, t),
                lerp(l2, r2, t),
                alpha,
            )
            .into(),
            Space::Hsv => Hsv::from_parts(
                normalize_hue(lerp_hue(l0, r0, t)),
                lerp(l1, r1, t),
                lerp(l2, r2, t),
                alpha,
            )
            .into(),
            Space::XyzD65 => {
                XyzD65::from_parts(lerp(l0, r0, t), lerp(l1, r1, t), lerp(l2, r2, t), alpha)
                    .into()
            }
            Space::Lab => {
                Lab::from_parts(lerp(l0, r0, t), lerp(l1, r1, t), lerp(l2, r2, t), alpha).into()
            }
        };

        Ok(color)
    }
}
