//! tincture parses textual color notations, converts colors between color
//! spaces and renders them back to text.
//!
//! ```rust
//! use tincture::{format, parse, Color, Space, Style};
//! let color = parse("#9C0C", Space::Srgb).unwrap();
//! assert_eq!(format(&color, Style::ModernRgb).unwrap(), "rgb(153 204 0 / 0.8)");
//!
//! let hsl = parse("rgb(150, 192, 98)", Space::Hsl).unwrap();
//! if let Color::Hsl(hsl) = hsl {
//!     assert_eq!(hsl.degrees_hue(), 87);
//! }
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod format;
mod interpolate;
mod math;
mod models;
mod parse;
#[cfg(test)]
mod test;

pub use color::{Color, Component, HasSpace, Space, ALPHA_EPSILON};
pub use convert::{convert, ConvertFn, Converter};
pub use error::Error;
pub use format::{format, format_srgb, format_with, FormatFlags, Style};
pub use models::{Hsl, Hsv, Lab, Srgb, XyzD65};
pub use parse::{parse, parse_srgb};

#[cfg(test)]
mod tests {
    use super::*;

    fn srgb(red: u8, green: u8, blue: u8, alpha: Option<Component>) -> Color {
        Srgb::new(red, green, blue, alpha).unwrap().into()
    }

    #[test]
    fn primary_conversion() {
        let color = convert(&srgb(150, 192, 98, None), Space::Hsl).unwrap();
        match color {
            Color::Hsl(hsl) => assert_eq!(hsl.degrees_hue(), 87),
            other => panic!("expected an hsl color, got {:?}", other),
        }
    }

    #[test]
    fn long_hex_parsing() {
        let color = parse("#96C062", Space::Srgb).unwrap();
        assert!(color
            .approx_eq(&srgb(150, 192, 98, None), ALPHA_EPSILON)
            .unwrap());
    }

    #[test]
    fn short_hex_parsing() {
        let color = parse("#9C0C", Space::Srgb).unwrap();
        assert!(color
            .approx_eq(&srgb(153, 204, 0, Some(0.8)), ALPHA_EPSILON)
            .unwrap());
    }

    #[test]
    fn rgb_parsing() {
        let color = parse("rgb(150, 192, 98)", Space::Srgb).unwrap();
        assert!(color
            .approx_eq(&srgb(150, 192, 98, None), ALPHA_EPSILON)
            .unwrap());

        let color = parse("rgb(153 204 0 / .8)", Space::Srgb).unwrap();
        assert!(color
            .approx_eq(&srgb(153, 204, 0, Some(0.8)), ALPHA_EPSILON)
            .unwrap());
    }

    #[test]
    fn out_of_range_rejection() {
        assert!(matches!(
            parse("rgb(256, 0, 0)", Space::Srgb),
            Err(Error::ChannelOutOfRange(_))
        ));
        assert!(matches!(
            parse("#12", Space::Srgb),
            Err(Error::InvalidHexLength(_))
        ));
    }

    #[test]
    fn parse_convert_format_pipeline() {
        let hsl = parse("#d2691e", Space::Hsl).unwrap();
        let back = convert(&hsl, Space::Srgb).unwrap();
        assert_eq!(
            format_with(&back, Style::LongHex, FormatFlags::UPPERCASE).unwrap(),
            "#D2691E"
        );
    }
}
