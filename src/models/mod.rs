//! Color models, one per supported [`Space`](crate::Space).

use crate::color::Component;
use crate::error::Error;

mod hsl;
mod hsv;
mod lab;
mod rgb;
mod xyz;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::Lab;
pub use rgb::Srgb;
pub use xyz::XyzD65;

pub(crate) use rgb::checked_alpha;

/// Reject non-finite components.
fn checked_component(component: &'static str, value: Component) -> Result<Component, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::ComponentOutOfRange { component, value })
    }
}

/// Components expressed as a percentage must be within `[0, 100]`.
fn checked_percentage(component: &'static str, value: Component) -> Result<Component, Error> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::ComponentOutOfRange { component, value })
    }
}
