#![forbid(unsafe_code)]

//! Color conversion and adjustment primitives.
//!
//! This crate provides:
//! - [`HexColor`] for validated, normalized `#rrggbb` strings
//! - [`Rgb`] and [`Hsl`] value records with clamping and hue wraparound
//! - Conversions between hex, RGB, and HSL
//! - Derived colors: darken, lighten, blend, complementary, hue rotation
//!
//! Every function is pure. Hex input is validated by a single parser shared
//! by all operations; numeric input is clamped or wrapped, never rejected.
//!
//! # Example
//!
//! ```
//! use hexhue::{blend, complementary, darken, hex_to_rgb, Rgb};
//!
//! assert_eq!(hex_to_rgb("#ff0000").unwrap(), Rgb::new(255, 0, 0));
//! assert_eq!(complementary("#ff0000").unwrap(), "#00ffff");
//! assert_eq!(blend("#000000", "#ffffff", 0.5).unwrap(), "#808080");
//! assert_eq!(darken("#ffffff", 1.0).unwrap(), "#000000");
//! ```

pub mod adjust;
pub mod convert;
pub mod error;
pub mod harmony;
pub mod hex;
pub mod model;

pub use adjust::{DEFAULT_ADJUST_AMOUNT, DEFAULT_BLEND_WEIGHT, blend, darken, lighten};
pub use convert::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, rgb_to_hsl};
pub use error::{ColorError, Result};
pub use harmony::{complementary, complementary_preserving, rotate_hue};
pub use hex::{HexColor, hex_to_rgb, rgb_to_hex};
pub use model::{Hsl, Rgb};
