//! # tinct
//!
//! A small, forgiving color library: parse colors from nearly any CSS-ish
//! notation, convert between RGB/HSL/HSV, derive new colors (lighten, spin,
//! mix, harmonies), check WCAG readability, and generate random colors that
//! are reproducible under a seed.
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct::prelude::*;
//!
//! let c = Color::parse("hsl(251, 100%, 38%)");
//! assert_eq!(c.to_hex_string(false), "#2400c2");
//! assert_eq!(c.lighten(20.0).to_string(), "hsl(251, 100%, 58%)");
//! assert!(is_readable("#2400c2", "#ffffff", Wcag2Options::default()));
//! ```
//!
//! ## Core Concepts
//!
//! - **Color**: An immutable parsed color; every operation returns a new one
//! - **ColorInput**: Anything parseable, from strings to channel records
//! - **Format**: How a color serializes by default, inferred from its input
//! - **Readability**: WCAG 2.0 contrast ratios and AA/AAA checks
//! - **Random**: Constrained, optionally seeded color generation
//!
//! Parsing is total: invalid input yields an opaque black flagged invalid
//! rather than an error, and serializers on it still produce usable output.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

pub mod color;
mod convert;
mod names;
pub mod parse;
pub mod random;
pub mod readability;
mod util;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{equals, mix, Color, Hsl, Hsv, PercentageRgb, Rgb};
    pub use crate::parse::{
        ChannelValue, ColorInput, Format, HslInput, HsvInput, ParseOptions, RgbInput,
    };
    pub use crate::random::{from_random, HueBucket, HueChoice, Luminosity, RandomOptions};
    pub use crate::readability::{
        is_readable, most_readable, readability, MostReadableOptions, Wcag2Level, Wcag2Options,
        Wcag2Size,
    };
}

// Re-export key types at crate root
pub use color::{equals, mix, Color, Hsl, Hsv, PercentageRgb, Rgb};
pub use parse::{
    ChannelValue, ColorInput, Format, FormatParseError, HslInput, HsvInput, ParseOptions, RgbInput,
};
pub use random::{from_random, HueBucket, HueChoice, Luminosity, RandomOptions};
pub use readability::{
    is_readable, most_readable, readability, MostReadableOptions, Wcag2Level, Wcag2Options,
    Wcag2Size,
};
