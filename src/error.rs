//! Errors reported while constructing, parsing or converting colors.

use std::fmt;

use crate::color::{Component, Space};

/// Every failure the crate can report. None of them are fatal; they are
/// returned to the immediate caller and never corrected silently.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The input does not start with any recognized prefix.
    UnsupportedFormat(String),
    /// The hex body has a digit count other than 3, 4, 6 or 8.
    InvalidHexLength(usize),
    /// The hex body contains a character that is not a hex digit.
    InvalidHexDigit(char),
    /// Functional notation mixes comma and space/slash separators.
    InvalidSeparator,
    /// Functional notation has the wrong number of components.
    InvalidComponentCount(usize),
    /// A channel token is not an integer in `0..=255`.
    ChannelOutOfRange(String),
    /// An alpha token or value is not a number in `0..=1`.
    AlphaOutOfRange(String),
    /// A real component passed to a model constructor is out of range.
    ComponentOutOfRange {
        /// The name of the component.
        component: &'static str,
        /// The rejected value.
        value: Component,
    },
    /// No conversion is registered for the pair of spaces.
    UnsupportedConversion {
        /// The space converted from.
        from: Space,
        /// The space converted to.
        to: Space,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            UnsupportedFormat(input) => write!(f, "unsupported color format: {:?}", input),
            InvalidHexLength(len) => write!(
                f,
                "invalid hex color length {}, expected 3, 4, 6 or 8 digits",
                len
            ),
            InvalidHexDigit(c) => write!(f, "invalid hex digit {:?}", c),
            InvalidSeparator => f.write_str("mixed separators in rgb() function"),
            InvalidComponentCount(count) => write!(
                f,
                "rgb() function takes 3 channels and an optional alpha, found {} components",
                count
            ),
            ChannelOutOfRange(token) => write!(
                f,
                "channel {:?} is not an integer between 0 and 255",
                token
            ),
            AlphaOutOfRange(token) => {
                write!(f, "alpha {:?} is not a number between 0 and 1", token)
            }
            ComponentOutOfRange { component, value } => {
                write!(f, "{} component {} is out of range", component, value)
            }
            UnsupportedConversion { from, to } => {
                write!(f, "conversion from {} to {} is not supported", from, to)
            }
        }
    }
}

impl std::error::Error for Error {}
