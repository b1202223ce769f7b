//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::Component;

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a 3x3 matrix given in row-vector order, i.e. each
/// row is the contribution of one input component.
#[rustfmt::skip]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0,
        m21, m22, m23, 0.0,
        m31, m32, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, [x, y, z]: [Component; 3]) -> [Component; 3] {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    [x, y, z]
}

/// Reduce an angle in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Convert a normalized `[0, 1]` value to a byte, rounding half away from
/// zero. Values pushed outside the range by floating point error are clamped.
pub fn to_byte(value: Component) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Absolute difference between two angles in degrees, measured on the circle.
pub fn hue_distance(a: Component, b: Component) -> Component {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_normalization() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
    }

    #[test]
    fn bytes_round_half_away_from_zero_and_clamp() {
        assert_eq!(to_byte(0.5), 128);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(1.0001), 255);
        assert_eq!(to_byte(-0.0001), 0);
    }

    #[test]
    fn hue_distance_wraps() {
        crate::assert_component_eq!(hue_distance(359.0, 1.0), 2.0);
        crate::assert_component_eq!(hue_distance(10.0, 40.0), 30.0);
    }

    #[test]
    fn identity_transform() {
        #[rustfmt::skip]
        const IDENTITY: Transform = transform_3x3(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        );
        assert_eq!(transform(&IDENTITY, [0.1, 0.2, 0.3]), [0.1, 0.2, 0.3]);
    }
}
