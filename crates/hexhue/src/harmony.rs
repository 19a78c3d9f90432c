//! Colors derived by moving around the hue circle.

use crate::convert::{hsl_to_hex, rgb_to_hsl};
use crate::error::Result;
use crate::hex::{HexColor, parse_rgb};
use crate::model::Hsl;

/// Complementary tone: the hue rotated by 180°, rebuilt at full saturation
/// and half lightness.
///
/// The source saturation and lightness are discarded, so grays map to
/// saturated cyan. Use [`complementary_preserving`] to keep them.
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidColorFormat`] for malformed input.
pub fn complementary(hex: &str) -> Result<HexColor> {
    let hsl = rgb_to_hsl(parse_rgb(hex)?);
    let out = hsl_to_hex(Hsl::new(hsl.h + 180.0, 100.0, 50.0));
    tracing::trace!(input = hex, hue = hsl.h, output = %out, "complementary");
    Ok(out)
}

/// The hue rotated by 180° with saturation and lightness kept.
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidColorFormat`] for malformed input.
pub fn complementary_preserving(hex: &str) -> Result<HexColor> {
    rotate_hue(hex, 180.0)
}

/// Rotate the hue by `degrees` (any sign or magnitude), keeping saturation
/// and lightness.
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidColorFormat`] for malformed input.
pub fn rotate_hue(hex: &str, degrees: f64) -> Result<HexColor> {
    let hsl = rgb_to_hsl(parse_rgb(hex)?);
    let out = hsl_to_hex(hsl.rotated(degrees));
    tracing::trace!(input = hex, degrees, output = %out, "rotate_hue");
    Ok(out)
}
