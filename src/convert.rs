//! Colorspace conversion math.
//!
//! Pure functions between RGB, HSL, HSV, and hex encodings. Inputs pass
//! through [`util::bound01`] so every routine accepts the same loose channel
//! tokens the parser captures; outputs are raw floats, rounded only at the
//! serialization edge.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]

use crate::parse::ChannelValue;
use crate::util::{self, bound01};

fn num(value: f64) -> ChannelValue {
    ChannelValue::Num(value)
}

/// Normalize loose RGB tokens into [0, 255] floats.
pub(crate) fn rgb_to_rgb(
    r: &ChannelValue,
    g: &ChannelValue,
    b: &ChannelValue,
) -> (f64, f64, f64) {
    (
        bound01(r, 255.0) * 255.0,
        bound01(g, 255.0) * 255.0,
        bound01(b, 255.0) * 255.0,
    )
}

/// RGB ([0, 255]) to HSL; hue and saturation/lightness all come back as
/// [0, 1] fractions.
///
/// Hue picks the branch of whichever channel holds the maximum, in r, g, b
/// order, so ties resolve toward red first. Achromatic input pins both hue
/// and saturation to 0.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = bound01(&num(r), 255.0);
    let g = bound01(&num(g), 255.0);
    let b = bound01(&num(b), 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }
    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h / 6.0, s, l)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * (6.0 * t)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSL tokens to RGB floats in [0, 255].
pub(crate) fn hsl_to_rgb(
    h: &ChannelValue,
    s: &ChannelValue,
    l: &ChannelValue,
) -> (f64, f64, f64) {
    let h = bound01(h, 360.0);
    let s = bound01(s, 100.0);
    let l = bound01(l, 100.0);

    if s == 0.0 {
        return (l * 255.0, l * 255.0, l * 255.0);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

/// RGB ([0, 255]) to HSV fractions, same tie-break rules as [`rgb_to_hsl`].
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = bound01(&num(r), 255.0);
    let g = bound01(&num(g), 255.0);
    let b = bound01(&num(b), 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };

    if max == min {
        return (0.0, s, v);
    }
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h / 6.0, s, v)
}

/// HSV tokens to RGB floats in [0, 255], by 60° sector decomposition.
pub(crate) fn hsv_to_rgb(
    h: &ChannelValue,
    s: &ChannelValue,
    v: &ChannelValue,
) -> (f64, f64, f64) {
    let h = bound01(h, 360.0) * 6.0;
    let s = bound01(s, 100.0);
    let v = bound01(v, 100.0);

    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    let sector = (i as usize) % 6;

    let r = [v, q, p, p, t, v][sector];
    let g = [t, v, v, q, p, p][sector];
    let b = [p, p, t, v, v, q][sector];
    (r * 255.0, g * 255.0, b * 255.0)
}

fn channel_hex(value: f64) -> String {
    format!("{:02x}", value.round() as u32)
}

fn alpha_hex(alpha: f64) -> String {
    format!("{:02x}", (alpha * 255.0).round() as u32)
}

fn is_doubled(pair: &str) -> bool {
    let bytes = pair.as_bytes();
    bytes.len() == 2 && bytes[0] == bytes[1]
}

/// Encode rounded channels as bare 6-digit hex; the 3-digit shorthand is
/// used only when allowed and every pair is a doubled digit.
pub(crate) fn rgb_to_hex(r: f64, g: f64, b: f64, allow3: bool) -> String {
    let hex = [channel_hex(r), channel_hex(g), channel_hex(b)];
    if allow3 && hex.iter().all(|pair| is_doubled(pair)) {
        return hex.iter().map(|pair| &pair[..1]).collect();
    }
    hex.concat()
}

/// Encode as RGBA hex (alpha last); 4-digit shorthand under the same
/// doubling rule across all four pairs.
pub(crate) fn rgba_to_hex(r: f64, g: f64, b: f64, a: f64, allow4: bool) -> String {
    let hex = [channel_hex(r), channel_hex(g), channel_hex(b), alpha_hex(a)];
    if allow4 && hex.iter().all(|pair| is_doubled(pair)) {
        return hex.iter().map(|pair| &pair[..1]).collect();
    }
    hex.concat()
}

/// Encode as ARGB hex (alpha first), the channel order the legacy filter
/// string requires. Never shortened.
pub(crate) fn rgba_to_argb_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    [alpha_hex(a), channel_hex(r), channel_hex(g), channel_hex(b)].concat()
}

/// Decode a 1-2 digit hex token into [0, 255]. Non-hex input recovers to 0;
/// the grammar only ever hands over validated digits.
pub(crate) fn parse_hex_pair(token: &str) -> f64 {
    u32::from_str_radix(token, 16).map_or(0.0, f64::from)
}

/// Decode a hex alpha pair into a [0, 1] fraction.
pub(crate) fn hex_pair_to_alpha(token: &str) -> f64 {
    parse_hex_pair(token) / 255.0
}
