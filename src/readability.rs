//! WCAG 2.0 contrast analysis: raw contrast ratios, pass/fail checks
//! against the AA/AAA thresholds, and best-candidate selection.
//!
//! # Examples
//!
//! ```
//! use tinct::readability;
//!
//! assert_eq!(readability("#000", "#fff"), 21.0);
//! ```

use crate::color::Color;
use crate::parse::ColorInput;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wcag2Level {
    /// Minimum contrast (level AA).
    #[default]
    Aa,
    /// Enhanced contrast (level AAA).
    Aaa,
}

/// Text size class the thresholds apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wcag2Size {
    /// Body text.
    #[default]
    Small,
    /// Large-scale text (18pt, or 14pt bold).
    Large,
}

/// Level/size pair for [`is_readable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wcag2Options {
    /// Conformance level to test against.
    pub level: Wcag2Level,
    /// Text size class to test against.
    pub size: Wcag2Size,
}

/// Options for [`most_readable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MostReadableOptions {
    /// Fall back to white/black when no candidate passes.
    pub include_fallback_colors: bool,
    /// Conformance level for the pass check.
    pub level: Wcag2Level,
    /// Text size class for the pass check.
    pub size: Wcag2Size,
}

/// Contrast ratio between two colors, from 1 (identical luminance) to 21
/// (black on white).
#[must_use]
pub fn readability(first: impl Into<ColorInput>, second: impl Into<ColorInput>) -> f64 {
    let first = Color::parse(first).luminance();
    let second = Color::parse(second).luminance();
    (first.max(second) + 0.05) / (first.min(second) + 0.05)
}

/// Whether the contrast between two colors meets the WCAG threshold for the
/// given level and size: 4.5 for AA-small and AAA-large, 3 for AA-large,
/// 7 for AAA-small.
///
/// # Examples
///
/// ```
/// use tinct::{is_readable, Wcag2Level, Wcag2Options, Wcag2Size};
///
/// assert!(is_readable("#000", "#fff", Wcag2Options::default()));
/// let aaa = Wcag2Options { level: Wcag2Level::Aaa, size: Wcag2Size::Small };
/// assert!(!is_readable("#777", "#fff", aaa));
/// ```
#[must_use]
pub fn is_readable(
    first: impl Into<ColorInput>,
    second: impl Into<ColorInput>,
    options: Wcag2Options,
) -> bool {
    let ratio = readability(first, second);
    match (options.level, options.size) {
        (Wcag2Level::Aa, Wcag2Size::Small) | (Wcag2Level::Aaa, Wcag2Size::Large) => ratio >= 4.5,
        (Wcag2Level::Aa, Wcag2Size::Large) => ratio >= 3.0,
        (Wcag2Level::Aaa, Wcag2Size::Small) => ratio >= 7.0,
    }
}

/// The candidate with the highest contrast against `base`; ties keep the
/// earliest candidate.
///
/// When no candidate meets the configured threshold and
/// `include_fallback_colors` is set, the search reruns over white and black.
/// An empty candidate list yields `None` unless the fallback kicks in.
///
/// # Examples
///
/// ```
/// use tinct::{most_readable, MostReadableOptions};
///
/// let best = most_readable("#000", ["#f00", "#fff"], MostReadableOptions::default());
/// assert_eq!(best.map(|c| c.to_hex_string(false)), Some("#ffffff".into()));
/// ```
#[must_use]
pub fn most_readable<I>(
    base: impl Into<ColorInput>,
    candidates: I,
    options: MostReadableOptions,
) -> Option<Color>
where
    I: IntoIterator,
    I::Item: Into<ColorInput>,
{
    let base = Color::parse(base);
    let mut best: Option<Color> = None;
    let mut best_score = 0.0;
    for candidate in candidates {
        let candidate = Color::parse(candidate);
        let score = readability(&base, &candidate);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    let wcag2 = Wcag2Options {
        level: options.level,
        size: options.size,
    };
    let readable = best
        .as_ref()
        .is_some_and(|color| is_readable(&base, color, wcag2));
    if readable || !options.include_fallback_colors {
        return best;
    }

    log::debug!("no readable candidate against {base}; retrying with white/black");
    most_readable(
        &base,
        ["#fff", "#000"],
        MostReadableOptions {
            include_fallback_colors: false,
            ..options
        },
    )
}
