//! RGB ↔ HSL conversion.
//!
//! HSL output is rounded to whole degrees and whole percentages, so a round
//! trip RGB → HSL → RGB can drift by a few units per channel. Hue rounding
//! dominates for saturated colors.

use crate::error::Result;
use crate::hex::{HexColor, parse_rgb};
use crate::model::{Hsl, Rgb, wrap_hue};

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Convert RGB to HSL with whole-number components.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // achromatic
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: (l * 100.0).round(),
        };
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if r == max {
        (60.0 * ((g - b) / delta)) % 360.0
    } else if g == max {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };
    let h = (h + 360.0) % 360.0;

    Hsl {
        // 359.5 and up rounds onto 360
        h: wrap_hue(h.round()),
        s: (s * 100.0).round(),
        l: (l * 100.0).round(),
    }
}

/// Convert HSL to RGB. The input is normalized first.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl.normalized();
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let channel = |t: f64| (hue_to_channel(p, q, t) * 255.0).round();
    Rgb::from_f64(
        channel(h + ONE_THIRD),
        channel(h),
        channel(h - ONE_THIRD),
    )
}

/// Evaluate one RGB channel at phase `t` of the hue circle.
///
/// `t` is expected within one turn of `[0, 1]`.
#[inline]
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - t) * 6.0
    } else {
        p
    }
}

/// Parse a hex color and convert it to HSL.
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidColorFormat`] for malformed input.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    parse_rgb(hex).map(rgb_to_hsl)
}

/// Convert HSL to a `#rrggbb` string.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    HexColor::from(hsl_to_rgb(hsl))
}

impl Rgb {
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    #[must_use]
    pub fn to_hex(self) -> HexColor {
        HexColor::from(self)
    }
}

impl Hsl {
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    #[must_use]
    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}
