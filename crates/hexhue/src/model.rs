//! RGB and HSL records.
//!
//! Both records are plain `Copy` values. Out-of-range input is folded into
//! range at construction: RGB channels clamp to `0..=255`, saturation and
//! lightness clamp to `0..=100`, and hue wraps into `[0, 360)`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color, clamping each channel into `0..=255`.
    #[must_use]
    pub fn new(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Create a color from floating-point channels.
    ///
    /// Each channel is clamped into `0.0..=255.0` and truncated; NaN becomes 0.
    /// Callers round or floor before calling, depending on their policy.
    #[must_use]
    pub(crate) fn from_f64(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| v.clamp(0.0, 255.0) as u8;
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply `f` to each channel and clamp the results back into range.
    #[must_use]
    pub(crate) fn map_f64(self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_f64(f(self.r as f64), f(self.g as f64), f(self.b as f64))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

#[inline]
fn clamp_channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

/// An HSL color: hue in degrees, saturation and lightness in percent.
///
/// Fields are public so records can be built literally; every conversion
/// normalizes its input with [`Hsl::normalized`] first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a normalized HSL record.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }.normalized()
    }

    /// Wrap hue into `[0, 360)` and clamp saturation and lightness into `[0, 100]`.
    ///
    /// Non-finite components collapse to 0.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            s: clamp_percent(self.s),
            l: clamp_percent(self.l),
        }
    }

    /// Return this color with the hue shifted by `degrees`.
    #[must_use]
    pub fn rotated(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }
}

/// Wrap degrees into `[0, 360)`.
#[inline]
pub(crate) fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can land exactly on 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[inline]
fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}
