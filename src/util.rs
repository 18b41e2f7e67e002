//! Shared numeric helpers for channel normalization.
//!
//! Everything here operates on raw channel tokens before they become part of
//! a [`Color`](crate::Color): clamping, percentage folding, and the loose
//! float parsing the permissive grammar requires.

use std::sync::LazyLock;

use regex::Regex;

use crate::parse::ChannelValue;

/// Leading signed decimal, optionally with an exponent. Mirrors the prefix
/// behavior of C-family `strtod`: trailing junk is ignored.
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(\d+\.?\d*|\.\d+)([eE][-+]?\d+)?").expect("valid regex")
});

/// Parse the longest leading float out of a string.
///
/// Returns `None` when no leading numeric prefix exists at all, so callers
/// can choose their own recovery value.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let m = FLOAT_PREFIX.find(text.trim_start())?;
    m.as_str().parse().ok()
}

/// Whether a token is the "1.0"-style spelling: contains a literal decimal
/// point and parses to exactly 1. Distinguishes the ratio `1.0` (meaning
/// 100%) from the raw channel value `1`.
pub(crate) fn is_one_point_zero(text: &str) -> bool {
    text.contains('.') && parse_float(text) == Some(1.0)
}

/// Whether a token carries a percent sign anywhere.
pub(crate) fn is_percentage(text: &str) -> bool {
    text.contains('%')
}

/// Fold a channel token into a [0, 1] fraction against `max`.
///
/// Percentage tokens are scaled through `trunc(n * max) / 100`; values within
/// 1e-6 of `max` snap to exactly 1; everything else wraps modulo `max`.
/// Unparseable tokens recover to 0.
pub(crate) fn bound01(value: &ChannelValue, max: f64) -> f64 {
    let (raw, percent) = match value {
        ChannelValue::Num(n) => (*n, false),
        ChannelValue::Str(s) if is_one_point_zero(s) => (100.0, true),
        ChannelValue::Str(s) => (
            parse_float(s).unwrap_or(f64::NAN),
            is_percentage(s),
        ),
    };

    let mut n = if raw.is_finite() { raw.clamp(0.0, max) } else { 0.0 };
    if percent {
        n = (n * max).trunc() / 100.0;
    }
    if (n - max).abs() < 1e-6 {
        return 1.0;
    }
    (n % max) / max
}

/// Normalize an optional alpha token into [0, 1].
///
/// Anything unparseable or outside the interval becomes fully opaque; a
/// negative zero collapses to plain zero so serialized output never shows
/// `-0`.
pub(crate) fn bound_alpha(value: Option<&ChannelValue>) -> f64 {
    let Some(value) = value else { return 1.0 };
    let a = match value {
        ChannelValue::Num(n) => *n,
        ChannelValue::Str(s) => parse_float(s).unwrap_or(f64::NAN),
    };
    if (0.0..=1.0).contains(&a) {
        if a == 0.0 { 0.0 } else { a }
    } else {
        1.0
    }
}

/// Clamp into the unit interval.
pub(crate) fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Promote ratio-range values to percentage tokens.
///
/// A value ≤ 1 (numeric, or a string that is numeric in full) becomes
/// `"{n*100}%"`; everything else passes through untouched. String input must
/// parse in full, so `"50%"` and non-numeric text survive unchanged.
pub(crate) fn convert_to_percentage(value: &ChannelValue) -> ChannelValue {
    let n = match value {
        ChannelValue::Num(n) => Some(*n),
        ChannelValue::Str(s) => s.trim().parse::<f64>().ok(),
    };
    match n {
        Some(n) if n <= 1.0 => ChannelValue::Str(format!("{}%", n * 100.0)),
        _ => value.clone(),
    }
}

/// Round with ties toward positive infinity.
///
/// Plain `f64::round` sends -25.5 to -26; the brighten transform needs -25,
/// so every rounding site that can see a negative intermediate goes through
/// this.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
