//! Hex color strings.
//!
//! Accepted input is `RGB` or `RRGGBB` in hex digits of either case, with an
//! optional leading `#`. Shorthand digits are duplicated (`a` becomes `aa`).
//! Output is always `#rrggbb` in lowercase.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};
use crate::model::{Hsl, Rgb};

/// A normalized `#rrggbb` color string.
///
/// Only produced by the validating parser or the formatter, so the inner
/// string always has exactly seven bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HexColor(String);

impl HexColor {
    /// Parse and normalize a hex color string.
    pub fn parse(input: &str) -> Result<Self> {
        parse_rgb(input).map(Self::from)
    }

    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the channels. Never fails: the string was validated on entry.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        let [_, digits @ ..] = self.0.as_bytes() else {
            return Rgb::default();
        };
        decode_digits(digits).unwrap_or_default()
    }

    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        crate::convert::rgb_to_hsl(self.to_rgb())
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b))
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<HexColor> for &str {
    fn eq(&self, other: &HexColor) -> bool {
        *self == other.0
    }
}

/// Parse a hex color string into RGB channels.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] unless `hex` matches
/// `^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    parse_rgb(hex)
}

/// Format RGB channels as `#rrggbb`, clamping each into `0..=255` first.
#[must_use]
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> HexColor {
    HexColor::from(Rgb::new(r, g, b))
}

/// The single validating parse primitive every public operation goes through.
pub(crate) fn parse_rgb(input: &str) -> Result<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    decode_digits(digits.as_bytes()).ok_or_else(|| ColorError::invalid_format(input))
}

fn decode_digits(digits: &[u8]) -> Option<Rgb> {
    match digits {
        // #RGB
        &[r, g, b] => Some(Rgb {
            r: nibble(r)? * 17,
            g: nibble(g)? * 17,
            b: nibble(b)? * 17,
        }),
        // #RRGGBB
        &[r1, r0, g1, g0, b1, b0] => Some(Rgb {
            r: byte(r1, r0)?,
            g: byte(g1, g0)?,
            b: byte(b1, b0)?,
        }),
        _ => None,
    }
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn byte(hi: u8, lo: u8) -> Option<u8> {
    Some((nibble(hi)? << 4) | nibble(lo)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(hex_to_rgb("#ff0000").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(hex_to_rgb("#1e293b").unwrap(), Rgb::new(30, 41, 59));
    }

    #[test]
    fn leading_hash_is_optional() {
        assert_eq!(hex_to_rgb("00ff00").unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(hex_to_rgb("abc").unwrap(), hex_to_rgb("#abc").unwrap());
    }

    #[test]
    fn shorthand_duplicates_each_digit() {
        assert_eq!(hex_to_rgb("#abc").unwrap(), hex_to_rgb("#aabbcc").unwrap());
        assert_eq!(hex_to_rgb("#f0a").unwrap(), Rgb::new(0xff, 0x00, 0xaa));
    }

    #[test]
    fn mixed_case_is_accepted() {
        assert_eq!(hex_to_rgb("#AbCdEf").unwrap(), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "not-a-color",
            "",
            "#",
            "##fff",
            "#ff",
            "#ffff",
            "#fffff",
            "#fffffff",
            "#ff000080",
            "#gggggg",
            " #ffffff",
            "#ffffff ",
            "rgb(0,0,0)",
            "#ｆｆｆ",
        ] {
            assert_eq!(
                hex_to_rgb(bad),
                Err(ColorError::InvalidColorFormat {
                    input: bad.to_owned()
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn formats_lowercase_zero_padded() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(1, 2, 3), "#010203");
        assert_eq!(rgb_to_hex(171, 205, 239), "#abcdef");
    }

    #[test]
    fn formatting_clamps_channels() {
        assert_eq!(rgb_to_hex(-1, 256, 1000), "#00ffff");
    }

    #[test]
    fn hex_color_normalizes() {
        let hex: HexColor = "ABC".parse().unwrap();
        assert_eq!(hex, "#aabbcc");
        assert_eq!(hex.to_string(), "#aabbcc");
        assert_eq!(hex.to_rgb(), Rgb::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn hex_color_try_from() {
        assert!(HexColor::try_from("#123456").is_ok());
        assert!(HexColor::try_from(String::from("nope")).is_err());
    }

    #[test]
    fn hex_color_hsl() {
        let hsl = HexColor::parse("#ff0000").unwrap().to_hsl();
        assert_eq!(hsl, Hsl::new(0.0, 100.0, 50.0));
    }

    #[test]
    #[traced_test]
    fn rejection_is_logged() {
        let _ = hex_to_rgb("#xyz");
        assert!(logs_contain("rejected color"));
        assert!(logs_contain("#xyz"));
    }
}
