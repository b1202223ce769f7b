//! Render colors back to the textual notations accepted by the parser.

use bitflags::bitflags;

use crate::color::{Color, Component};
use crate::error::Error;
use crate::models::Srgb;

/// The textual notation to render a color in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// `#rrggbb`, or `#rrggbbaa` when alpha is emitted.
    #[default]
    LongHex,
    /// `#rgb` or `#rgba` when every byte is a doubled digit, otherwise the
    /// long form.
    ShortHex,
    /// `rgb(r, g, b)` or `rgb(r, g, b, a)`.
    LegacyRgb,
    /// `rgb(r g b)` or `rgb(r g b / a)`.
    ModernRgb,
}

bitflags! {
    /// Options that tune how a [`Style`] is rendered.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FormatFlags : u8 {
        /// Write hex digits in upper case.
        const UPPERCASE = 1 << 0;
        /// Write the alpha component even when the color is fully opaque.
        const ALWAYS_ALPHA = 1 << 1;
    }
}

/// Render `color` in the given style with the default flags. Colors that are
/// not sRGB are converted with the standard conversions first.
pub fn format(color: &Color, style: Style) -> Result<String, Error> {
    format_with(color, style, FormatFlags::empty())
}

/// Render `color` in the given style.
pub fn format_with(color: &Color, style: Style, flags: FormatFlags) -> Result<String, Error> {
    Ok(format_srgb(&color.to_srgb()?, style, flags))
}

/// Render an sRGB color, which never needs a conversion.
pub fn format_srgb(color: &Srgb, style: Style, flags: FormatFlags) -> String {
    let with_alpha = flags.contains(FormatFlags::ALWAYS_ALPHA) || color.alpha() != 1.0;

    match style {
        Style::LongHex => long_hex(color, with_alpha, flags),
        Style::ShortHex => short_hex(color, with_alpha, flags)
            .unwrap_or_else(|| long_hex(color, with_alpha, flags)),
        Style::LegacyRgb => {
            let mut out = format!("rgb({}, {}, {}", color.red(), color.green(), color.blue());
            if with_alpha {
                out.push_str(&format!(", {}", alpha_to_string(color.alpha())));
            }
            out.push(')');
            out
        }
        Style::ModernRgb => {
            let mut out = format!("rgb({} {} {}", color.red(), color.green(), color.blue());
            if with_alpha {
                out.push_str(&format!(" / {}", alpha_to_string(color.alpha())));
            }
            out.push(')');
            out
        }
    }
}

fn bytes(color: &Srgb, with_alpha: bool) -> Vec<u8> {
    let mut bytes = vec![color.red(), color.green(), color.blue()];
    if with_alpha {
        bytes.push(color.alpha_u8());
    }
    bytes
}

fn long_hex(color: &Srgb, with_alpha: bool, flags: FormatFlags) -> String {
    let mut out = String::from("#");
    for byte in bytes(color, with_alpha) {
        if flags.contains(FormatFlags::UPPERCASE) {
            out.push_str(&format!("{:02X}", byte));
        } else {
            out.push_str(&format!("{:02x}", byte));
        }
    }
    out
}

fn short_hex(color: &Srgb, with_alpha: bool, flags: FormatFlags) -> Option<String> {
    let bytes = bytes(color, with_alpha);
    if bytes.iter().any(|b| b >> 4 != b & 0xf) {
        return None;
    }

    let mut out = String::from("#");
    for byte in bytes {
        if flags.contains(FormatFlags::UPPERCASE) {
            out.push_str(&format!("{:X}", byte & 0xf));
        } else {
            out.push_str(&format!("{:x}", byte & 0xf));
        }
    }
    Some(out)
}

/// Write alpha with two decimals, or three when two do not preserve the
/// alpha byte. Trailing zeros are dropped.
fn alpha_to_string(alpha: Component) -> String {
    let byte = crate::math::to_byte(alpha);
    let mut text = format!("{:.2}", alpha);
    if text
        .parse::<Component>()
        .map_or(true, |rounded| crate::math::to_byte(rounded) != byte)
    {
        text = format!("{:.3}", alpha);
    }

    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
