//! Lightness adjustment and blending in RGB space.
//!
//! [`darken`] and [`lighten`] scale every channel by the same factor and
//! floor the result. [`blend`] interpolates channel-wise and rounds.
//! None of these are perceptual or gamma-correct.

use crate::error::Result;
use crate::hex::{HexColor, parse_rgb};
use crate::model::Rgb;

/// Amount used by callers that want the conventional half-step adjustment.
pub const DEFAULT_ADJUST_AMOUNT: f64 = 0.5;

/// Weight used by callers that want an even mix.
pub const DEFAULT_BLEND_WEIGHT: f64 = 0.5;

/// Darken a color by scaling each channel by `1 - amount`.
///
/// `amount` is clamped into `[0, 1]`; NaN counts as 0. An amount of 1 gives
/// black.
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidColorFormat`] for malformed input.
///
/// # Example
///
/// ```
/// assert_eq!(hexhue::darken("#ffffff", 0.5).unwrap(), "#7f7f7f");
/// ```
pub fn darken(hex: &str, amount: f64) -> Result<HexColor> {
    let factor = 1.0 - clamp_amount(amount);
    let out = HexColor::from(parse_rgb(hex)?.map_f64(|c| (c * factor).floor()));
    tracing::trace!(input = hex, amount, output = %out, "darken");
    Ok(out)
}

/// Lighten a color by scaling each channel by `1 + amount`, saturating at 255.
///
/// `amount` is clamped into `[0, 1]`; NaN counts as 0. Black stays black.
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidColorFormat`] for malformed input.
pub fn lighten(hex: &str, amount: f64) -> Result<HexColor> {
    let factor = 1.0 + clamp_amount(amount);
    let out = HexColor::from(parse_rgb(hex)?.map_f64(|c| (c * factor).floor()));
    tracing::trace!(input = hex, amount, output = %out, "lighten");
    Ok(out)
}

/// Mix two colors channel-wise: `round((1 - weight) * a + weight * b)`.
///
/// `weight` is deliberately left unclamped: values outside `[0, 1]`
/// extrapolate past either endpoint, and only the resulting channels are
/// clamped into `0..=255`.
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidColorFormat`] if either input is
/// malformed. `a` is checked first.
///
/// # Example
///
/// ```
/// assert_eq!(hexhue::blend("#000000", "#ffffff", 0.5).unwrap(), "#808080");
/// assert_eq!(hexhue::blend("#404040", "#808080", 2.0).unwrap(), "#c0c0c0");
/// ```
pub fn blend(a: &str, b: &str, weight: f64) -> Result<HexColor> {
    let from = parse_rgb(a)?.into_array();
    let to = parse_rgb(b)?.into_array();

    let mixed: [f64; 3] = std::array::from_fn(|i| {
        ((1.0 - weight) * from[i] as f64 + weight * to[i] as f64).round()
    });
    let out = HexColor::from(Rgb::from_f64(mixed[0], mixed[1], mixed[2]));
    tracing::trace!(a, b, weight, output = %out, "blend");
    Ok(out)
}

#[inline]
fn clamp_amount(amount: f64) -> f64 {
    if amount.is_nan() {
        0.0
    } else {
        amount.clamp(0.0, 1.0)
    }
}
