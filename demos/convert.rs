//! Print every argument in all supported notations and spaces.
//!
//! cargo run --example convert -- "#9C0C" "rgb(150, 192, 98)"

use tincture::{format, parse_srgb, Color, Space, Style};

pub fn main() {
    for arg in std::env::args().skip(1) {
        let srgb = match parse_srgb(&arg) {
            Ok(srgb) => srgb,
            Err(err) => {
                eprintln!("{}: {}", arg, err);
                continue;
            }
        };

        println!("{}", arg);
        let color = Color::from(srgb);
        for style in [
            Style::LongHex,
            Style::ShortHex,
            Style::LegacyRgb,
            Style::ModernRgb,
        ] {
            match format(&color, style) {
                Ok(text) => println!("  {:?}: {}", style, text),
                Err(err) => eprintln!("  {:?}: {}", style, err),
            }
        }
        for space in [Space::Hsl, Space::Hsv, Space::XyzD65, Space::Lab] {
            match color.to_space(space) {
                Ok(converted) => println!("  {}", converted),
                Err(err) => eprintln!("  {}: {}", space, err),
            }
        }
    }
}
