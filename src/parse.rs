//! Parse textual color notations.
//!
//! The allowed formats are:
//! * `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! * `rgb(r, g, b)`, `rgb(r, g, b, a)`
//! * `rgb(r g b)`, `rgb(r g b / a)`
//!
//! `rgba(` is accepted in place of `rgb(` and the function name is case
//! insensitive. Every format produces an sRGB color.

use std::str::FromStr;

use crate::color::{Color, Component, Space};
use crate::convert::convert;
use crate::error::Error;
use crate::models::Srgb;

/// Parse `text` and return the color in the `space` requested. Colors are
/// parsed as sRGB and converted with the standard conversions when another
/// space is requested.
pub fn parse(text: &str, space: Space) -> Result<Color, Error> {
    convert(&Color::Srgb(parse_srgb(text)?), space)
}

/// Parse `text` into an sRGB color.
pub fn parse_srgb(text: &str) -> Result<Srgb, Error> {
    let text = text.trim();

    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(args) = strip_function(text) {
        return parse_rgb_function(args);
    }

    Err(Error::UnsupportedFormat(text.to_string()))
}

/// Return the arguments of an `rgb(...)` or `rgba(...)` function.
fn strip_function(text: &str) -> Option<&str> {
    let open = text.find('(')?;
    let name = &text[..open];
    if !name.eq_ignore_ascii_case("rgb") && !name.eq_ignore_ascii_case("rgba") {
        return None;
    }

    text[open + 1..].strip_suffix(')')
}

fn nibble(c: char) -> Result<u8, Error> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(Error::InvalidHexDigit(c))
}

/// Parse the body of a hex color, without the leading `#`.
fn parse_hex(hex: &str) -> Result<Srgb, Error> {
    let digits = hex.chars().map(nibble);

    let len = hex.chars().count();
    let bytes: Vec<u8> = match len {
        // Short forms duplicate each digit: `d` becomes `dd`.
        3 | 4 => digits
            .map(|d| d.map(|d| d << 4 | d))
            .collect::<Result<Vec<u8>, Error>>()?,
        6 | 8 => {
            let nibbles = digits.collect::<Result<Vec<u8>, Error>>()?;
            nibbles.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect()
        }
        _ => return Err(Error::InvalidHexLength(len)),
    };

    let alpha = bytes
        .get(3)
        .map_or(1.0, |&a| a as Component / 255.0);

    Ok(Srgb::from_parts(bytes[0], bytes[1], bytes[2], alpha))
}

/// Parse the arguments of an `rgb()` function in either the legacy comma
/// separated syntax or the modern space separated syntax.
fn parse_rgb_function(args: &str) -> Result<Srgb, Error> {
    let args = args.trim();

    let (channels, alpha): (Vec<&str>, Option<&str>) = if args.contains(',') {
        if args.contains('/') {
            return Err(Error::InvalidSeparator);
        }

        let tokens: Vec<&str> = args.split(',').map(str::trim).collect();
        if tokens
            .iter()
            .any(|t| t.is_empty() || t.contains(char::is_whitespace))
        {
            return Err(Error::InvalidSeparator);
        }

        match tokens.len() {
            3 => (tokens, None),
            4 => (tokens[..3].to_vec(), Some(tokens[3])),
            n => return Err(Error::InvalidComponentCount(n)),
        }
    } else {
        let (channels, alpha) = match args.split_once('/') {
            Some((channels, alpha)) => {
                let alpha = alpha.trim();
                if alpha.is_empty() || alpha.contains('/') || alpha.contains(char::is_whitespace) {
                    return Err(Error::InvalidSeparator);
                }
                (channels, Some(alpha))
            }
            None => (args, None),
        };

        let channels: Vec<&str> = channels.split_whitespace().collect();
        let count = channels.len() + alpha.map_or(0, |_| 1);
        if channels.len() != 3 {
            return Err(Error::InvalidComponentCount(count));
        }

        (channels, alpha)
    };

    let alpha = alpha.map(parse_alpha).transpose()?.unwrap_or(1.0);

    Ok(Srgb::from_parts(
        parse_channel(channels[0])?,
        parse_channel(channels[1])?,
        parse_channel(channels[2])?,
        alpha,
    ))
}

fn parse_channel(token: &str) -> Result<u8, Error> {
    token
        .parse::<u8>()
        .map_err(|_| Error::ChannelOutOfRange(token.to_string()))
}

/// Alpha is range checked at full precision, so a token just above 1 is not
/// rounded into range by the narrower component type.
fn parse_alpha(token: &str) -> Result<Component, Error> {
    token
        .parse::<f64>()
        .ok()
        .filter(|a| (0.0..=1.0).contains(a))
        .map(|a| a as Component)
        .ok_or_else(|| Error::AlphaOutOfRange(token.to_string()))
}

impl FromStr for Srgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_srgb(s)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_srgb(s).map(Color::Srgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::{format, format_with, FormatFlags, Style, ALPHA_EPSILON};

    fn srgb(red: u8, green: u8, blue: u8, alpha: Option<Component>) -> Srgb {
        Srgb::new(red, green, blue, alpha).unwrap()
    }

    #[test]
    fn long_hex() {
        let color = parse_srgb("#96C062").unwrap();
        assert_eq!(color, srgb(150, 192, 98, None));
        assert_eq!(parse_srgb("#96c062").unwrap(), color);
    }

    #[test]
    fn long_hex_with_alpha() {
        let color = parse_srgb("#96C06280").unwrap();
        assert_eq!((color.red(), color.green(), color.blue()), (150, 192, 98));
        assert_eq!(color.alpha(), 128.0 / 255.0);
    }

    #[test]
    fn short_hex() {
        assert_eq!(parse_srgb("#9C0").unwrap(), srgb(153, 204, 0, None));

        let color = parse_srgb("#9C0C").unwrap();
        assert!(color.approx_eq(&srgb(153, 204, 0, Some(0.8)), ALPHA_EPSILON));
        assert_eq!(color.alpha_u8(), 204);
    }

    #[test]
    fn short_hex_duplicates_every_digit() {
        for d in "0123456789abcdefABCDEF".chars() {
            let value = d.to_digit(16).unwrap() as u8;
            let byte = 16 * value + value;
            let color = parse_srgb(&format!("#{d}{d}{d}{d}")).unwrap();
            assert_eq!((color.red(), color.green(), color.blue()), (byte, byte, byte));
            assert_eq!(color.alpha_u8(), byte);
        }
    }

    #[test]
    fn invalid_hex() {
        assert_eq!(parse_srgb("#12"), Err(Error::InvalidHexLength(2)));
        assert_eq!(parse_srgb("#"), Err(Error::InvalidHexLength(0)));
        assert_eq!(parse_srgb("#12345"), Err(Error::InvalidHexLength(5)));
        assert_eq!(parse_srgb("#123456789"), Err(Error::InvalidHexLength(9)));
        assert_eq!(parse_srgb("#12G"), Err(Error::InvalidHexDigit('G')));
        assert_eq!(parse_srgb("#12345z"), Err(Error::InvalidHexDigit('z')));
        assert_eq!(parse_srgb("#12 4"), Err(Error::InvalidHexDigit(' ')));
    }

    #[test]
    fn legacy_rgb() {
        assert_eq!(
            parse_srgb("rgb(150, 192, 98)").unwrap(),
            srgb(150, 192, 98, None)
        );
        assert_eq!(
            parse_srgb("rgb(150,192,98,0.5)").unwrap(),
            srgb(150, 192, 98, Some(0.5))
        );
        assert_eq!(
            parse_srgb("  RGBA( 1 , 2 , 3 , 1 )  ").unwrap(),
            srgb(1, 2, 3, None)
        );
    }

    #[test]
    fn modern_rgb() {
        assert!(parse_srgb("rgb(153 204 0 / .8)")
            .unwrap()
            .approx_eq(&srgb(153, 204, 0, Some(0.8)), ALPHA_EPSILON));
        assert_eq!(
            parse_srgb("rgb(150   192\t98)").unwrap(),
            srgb(150, 192, 98, None)
        );
        assert_eq!(
            parse_srgb("Rgb(0 0 0/0)").unwrap(),
            srgb(0, 0, 0, Some(0.0))
        );
    }

    #[test]
    fn legacy_and_modern_agree() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (12, 200, 99)] {
            for a in ["0", "0.25", ".5", "1"] {
                let legacy = parse_srgb(&format!("rgb({r}, {g}, {b}, {a})")).unwrap();
                let modern = parse_srgb(&format!("rgb({r} {g} {b} / {a})")).unwrap();
                assert_eq!(legacy, modern);
            }
        }
    }

    #[test]
    fn hex_and_functional_agree() {
        assert_eq!(
            parse("#96C062", Space::Srgb).unwrap(),
            parse("rgb(150, 192, 98)", Space::Srgb).unwrap()
        );
    }

    #[test]
    fn mixed_separators_are_rejected() {
        assert_eq!(parse_srgb("rgb(1, 2, 3 / 1)"), Err(Error::InvalidSeparator));
        assert_eq!(parse_srgb("rgb(1 2 3, 1)"), Err(Error::InvalidSeparator));
        assert_eq!(parse_srgb("rgb(1, 2 3)"), Err(Error::InvalidSeparator));
        assert_eq!(parse_srgb("rgb(1,,2,3)"), Err(Error::InvalidSeparator));
        assert_eq!(parse_srgb("rgb(1 2 3 / 0.5 / 1)"), Err(Error::InvalidSeparator));
    }

    #[test]
    fn wrong_component_counts() {
        assert_eq!(parse_srgb("rgb(1, 2)"), Err(Error::InvalidComponentCount(2)));
        assert_eq!(
            parse_srgb("rgb(1, 2, 3, 4, 5)"),
            Err(Error::InvalidComponentCount(5))
        );
        assert_eq!(parse_srgb("rgb(1 2 3 1)"), Err(Error::InvalidComponentCount(4)));
        assert_eq!(parse_srgb("rgb(1 2 / 1)"), Err(Error::InvalidComponentCount(3)));
        assert_eq!(parse_srgb("rgb()"), Err(Error::InvalidComponentCount(0)));
    }

    #[test]
    fn out_of_range_channels() {
        assert_eq!(
            parse_srgb("rgb(256, 0, 0)"),
            Err(Error::ChannelOutOfRange("256".into()))
        );
        assert_eq!(
            parse_srgb("rgb(-1 0 0)"),
            Err(Error::ChannelOutOfRange("-1".into()))
        );
        assert_eq!(
            parse_srgb("rgb(1.5, 0, 0)"),
            Err(Error::ChannelOutOfRange("1.5".into()))
        );
        assert_eq!(
            parse_srgb("rgb(red 0 0)"),
            Err(Error::ChannelOutOfRange("red".into()))
        );
    }

    #[test]
    fn out_of_range_alpha() {
        assert_eq!(
            parse_srgb("rgb(0, 0, 0, 1.1)"),
            Err(Error::AlphaOutOfRange("1.1".into()))
        );
        assert_eq!(
            parse_srgb("rgb(0 0 0 / -0.1)"),
            Err(Error::AlphaOutOfRange("-0.1".into()))
        );
        assert_eq!(
            parse_srgb("rgb(0 0 0 / NaN)"),
            Err(Error::AlphaOutOfRange("NaN".into()))
        );
        assert_eq!(
            parse_srgb("rgb(0 0 0 / 1.00000001)"),
            Err(Error::AlphaOutOfRange("1.00000001".into()))
        );
        assert_eq!(
            parse_srgb("rgb(0, 0, 0, 1.0000000001)"),
            Err(Error::AlphaOutOfRange("1.0000000001".into()))
        );
        assert_eq!(parse_srgb("rgb(0 0 0 / 1.000)").unwrap().alpha(), 1.0);
        assert_eq!(parse_srgb("rgb(0 0 0 / 0.99999999)").unwrap().alpha_u8(), 255);
    }

    #[test]
    fn unsupported_formats() {
        for text in ["", "96C062", "hsl(0 0% 0%)", "rgb(1, 2, 3", "rgb 1 2 3", "argb(1, 2, 3)"] {
            assert!(
                matches!(parse_srgb(text), Err(Error::UnsupportedFormat(_))),
                "{text:?}"
            );
        }
    }

    #[test]
    fn parse_into_other_spaces() {
        let hsl = parse("rgb(150, 192, 98)", Space::Hsl).unwrap();
        match hsl {
            Color::Hsl(hsl) => assert_eq!(hsl.degrees_hue(), 87),
            other => panic!("expected an hsl color, got {:?}", other),
        }

        let xyz = parse("#fff", Space::XyzD65).unwrap();
        assert_eq!(xyz.space(), Space::XyzD65);

        match parse("rgb(210 105 30)", Space::Lab).unwrap() {
            Color::Lab(lab) => assert_component_eq!(lab.lightness(), 56.6293, 0.01),
            other => panic!("expected a lab color, got {:?}", other),
        }
    }

    #[test]
    fn from_str() {
        let srgb: Srgb = "#010203".parse().unwrap();
        assert_eq!(srgb, Srgb::new(1, 2, 3, None).unwrap());

        let color: Color = "rgb(1 2 3)".parse().unwrap();
        assert_eq!(color, Color::Srgb(srgb));
    }

    #[test]
    fn long_hex_round_trips_in_either_case() {
        for value in (0..=0xff_ffffu32).step_by(0x010101) {
            for packed in [value, value ^ 0x00ff00, value.rotate_left(8) & 0xff_ffff] {
                let lower = format!("#{:06x}", packed);
                let color = parse(&lower, Space::Srgb).unwrap();
                assert_eq!(format(&color, Style::LongHex).unwrap(), lower);

                let upper = format!("#{:06X}", packed);
                let color = parse(&upper, Space::Srgb).unwrap();
                assert_eq!(format(&color, Style::LongHex).unwrap(), lower);
                assert_eq!(
                    format_with(&color, Style::LongHex, FormatFlags::UPPERCASE).unwrap(),
                    upper
                );
            }
        }
    }
}
