//! Input model and the permissive color grammar.
//!
//! Parsing here is deliberately forgiving: functional notations accept
//! mismatched parentheses, comma or whitespace separators, and surrounding
//! junk (`"xxrgb(1, 2, 3)"` parses). Only the fixed-digit hex forms are
//! anchored. Nothing in this module fails loudly; an input no matcher claims
//! resolves to an invalid record and the caller degrades it to black.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use regex::Regex;

use crate::color::Color;
use crate::convert;
use crate::names;
use crate::util;

/// One channel token: raw number or still-unparsed text such as `"50%"`.
///
/// The grammar keeps captured text verbatim; range folding happens later in
/// the conversion layer, so `"120"`, `120`, and `"47.06%"` all describe the
/// same red channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelValue {
    /// A plain numeric channel.
    Num(f64),
    /// An unparsed token, possibly percentage-suffixed.
    Str(String),
}

impl Default for ChannelValue {
    fn default() -> Self {
        ChannelValue::Num(0.0)
    }
}

impl From<f64> for ChannelValue {
    fn from(value: f64) -> Self {
        ChannelValue::Num(value)
    }
}

impl From<i32> for ChannelValue {
    fn from(value: i32) -> Self {
        ChannelValue::Num(f64::from(value))
    }
}

impl From<&str> for ChannelValue {
    fn from(value: &str) -> Self {
        ChannelValue::Str(value.to_string())
    }
}

impl From<String> for ChannelValue {
    fn from(value: String) -> Self {
        ChannelValue::Str(value)
    }
}

impl ChannelValue {
    /// Syntactic validity: is this token a CSS unit (signed integer or
    /// decimal, optional `%`)? Numeric values only need to be finite; range
    /// violations are corrected later, never rejected here.
    pub(crate) fn is_css_unit(&self) -> bool {
        match self {
            ChannelValue::Num(n) => n.is_finite(),
            ChannelValue::Str(s) => MATCHERS.css_unit.is_match(s),
        }
    }

    fn is_percent_str(&self) -> bool {
        matches!(self, ChannelValue::Str(s) if s.ends_with('%'))
    }
}

/// The textual family a color value came from. Selects the default
/// serialization in [`Color::to_string_format`](crate::Color::to_string_format)
/// and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `rgb(...)` / `rgba(...)` functional notation.
    Rgb,
    /// Percentage rgb, `rgb(40%, 20%, 60%)`.
    Prgb,
    /// Generic hex; serializes as 6-digit.
    Hex,
    /// 3-digit shorthand hex.
    Hex3,
    /// 4-digit shorthand hex with alpha.
    Hex4,
    /// Explicit 6-digit hex.
    Hex6,
    /// 8-digit hex with alpha.
    Hex8,
    /// A CSS color keyword.
    Name,
    /// `hsl(...)` / `hsla(...)`.
    Hsl,
    /// `hsv(...)` / `hsva(...)`.
    Hsv,
}

impl Format {
    /// Formats whose default serialization cannot carry alpha, forcing the
    /// rgba fallback when a translucent color is displayed.
    pub(crate) fn is_hex_or_name(self) -> bool {
        matches!(
            self,
            Format::Hex
                | Format::Hex3
                | Format::Hex4
                | Format::Hex6
                | Format::Hex8
                | Format::Name
        )
    }

    fn tag(self) -> &'static str {
        match self {
            Format::Rgb => "rgb",
            Format::Prgb => "prgb",
            Format::Hex => "hex",
            Format::Hex3 => "hex3",
            Format::Hex4 => "hex4",
            Format::Hex6 => "hex6",
            Format::Hex8 => "hex8",
            Format::Name => "name",
            Format::Hsl => "hsl",
            Format::Hsv => "hsv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a format tag string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatParseError {
    /// The tag matched none of the known format names.
    Unrecognized(String),
}

impl fmt::Display for FormatParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatParseError::Unrecognized(tag) => {
                write!(f, "unrecognized color format '{tag}'")
            }
        }
    }
}

impl std::error::Error for FormatParseError {}

impl FromStr for Format {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rgb" => Ok(Format::Rgb),
            "prgb" => Ok(Format::Prgb),
            "hex" => Ok(Format::Hex),
            "hex3" => Ok(Format::Hex3),
            "hex4" => Ok(Format::Hex4),
            "hex6" => Ok(Format::Hex6),
            "hex8" => Ok(Format::Hex8),
            "name" => Ok(Format::Name),
            "hsl" => Ok(Format::Hsl),
            "hsv" => Ok(Format::Hsv),
            other => Err(FormatParseError::Unrecognized(other.to_string())),
        }
    }
}

/// Structured RGB input. Channels live in [0, 255] or are percentage
/// strings; ratios in [0, 1] need [`Color::from_ratio`](crate::Color::from_ratio).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RgbInput {
    /// Red channel token.
    pub r: ChannelValue,
    /// Green channel token.
    pub g: ChannelValue,
    /// Blue channel token.
    pub b: ChannelValue,
    /// Optional alpha token; absent means opaque.
    pub a: Option<ChannelValue>,
    /// Optional override for the inferred format tag.
    pub format: Option<Format>,
}

/// Structured HSL input: hue in degrees, saturation/lightness as percents,
/// percent strings, or [0, 1] fractions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HslInput {
    /// Hue token, degrees.
    pub h: ChannelValue,
    /// Saturation token.
    pub s: ChannelValue,
    /// Lightness token.
    pub l: ChannelValue,
    /// Optional alpha token.
    pub a: Option<ChannelValue>,
    /// Optional format override.
    pub format: Option<Format>,
}

/// Structured HSV input, same channel conventions as [`HslInput`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HsvInput {
    /// Hue token, degrees.
    pub h: ChannelValue,
    /// Saturation token.
    pub s: ChannelValue,
    /// Value token.
    pub v: ChannelValue,
    /// Optional alpha token.
    pub a: Option<ChannelValue>,
    /// Optional format override.
    pub format: Option<Format>,
}

/// Anything [`Color::parse`](crate::Color::parse) accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// A color string in any supported notation.
    Str(String),
    /// A structured RGB record.
    Rgb(RgbInput),
    /// A structured HSL record.
    Hsl(HslInput),
    /// A structured HSV record.
    Hsv(HsvInput),
    /// An already-built color; parsing is the identity.
    Existing(Box<Color>),
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        ColorInput::Str(value.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        ColorInput::Str(value)
    }
}

impl From<RgbInput> for ColorInput {
    fn from(value: RgbInput) -> Self {
        ColorInput::Rgb(value)
    }
}

impl From<HslInput> for ColorInput {
    fn from(value: HslInput) -> Self {
        ColorInput::Hsl(value)
    }
}

impl From<HsvInput> for ColorInput {
    fn from(value: HsvInput) -> Self {
        ColorInput::Hsv(value)
    }
}

impl From<Color> for ColorInput {
    fn from(value: Color) -> Self {
        ColorInput::Existing(Box::new(value))
    }
}

impl From<&Color> for ColorInput {
    fn from(value: &Color) -> Self {
        ColorInput::Existing(Box::new(value.clone()))
    }
}

/// Options for [`Color::parse_with`](crate::Color::parse_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Overrides the inferred format tag.
    pub format: Option<Format>,
    /// Switches the legacy filter serializer to gradient mode.
    pub gradient_type: bool,
}

// Grammar fragments, combined below. `CSS_UNIT` itself is matched
// unanchored, exactly as permissively as the functional notations.
const CSS_INTEGER: &str = r"[-\+]?\d+%?";
const CSS_NUMBER: &str = r"[-\+]?\d*\.\d+%?";

struct Matchers {
    css_unit: Regex,
    rgb: Regex,
    rgba: Regex,
    hsl: Regex,
    hsla: Regex,
    hsv: Regex,
    hsva: Regex,
    hex3: Regex,
    hex4: Regex,
    hex6: Regex,
    hex8: Regex,
}

static MATCHERS: LazyLock<Matchers> = LazyLock::new(|| {
    let unit = format!("(?:{CSS_NUMBER})|(?:{CSS_INTEGER})");
    let match3 = format!(r"[\s|\(]+({unit})[,|\s]+({unit})[,|\s]+({unit})\s*\)?");
    let match4 =
        format!(r"[\s|\(]+({unit})[,|\s]+({unit})[,|\s]+({unit})[,|\s]+({unit})\s*\)?");
    let re = |pattern: &str| Regex::new(pattern).expect("valid regex");
    Matchers {
        css_unit: re(&unit),
        rgb: re(&format!("rgb{match3}")),
        rgba: re(&format!("rgba{match4}")),
        hsl: re(&format!("hsl{match3}")),
        hsla: re(&format!("hsla{match4}")),
        hsv: re(&format!("hsv{match3}")),
        hsva: re(&format!("hsva{match4}")),
        hex3: re("^#?([0-9a-fA-F])([0-9a-fA-F])([0-9a-fA-F])$"),
        hex4: re("^#?([0-9a-fA-F])([0-9a-fA-F])([0-9a-fA-F])([0-9a-fA-F])$"),
        hex6: re("^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$"),
        hex8: re("^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$"),
    }
});

/// A parsed component record, still carrying raw channel tokens.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ComponentRecord {
    Rgb(RgbInput),
    Hsl(HslInput),
    Hsv(HsvInput),
}

/// Match a color string into a component record.
///
/// Attempts, in order: name-table substitution (plus the `transparent`
/// literal), the six functional notations, then hex8/hex6/hex4/hex3.
/// Returns `None` when nothing matches.
pub(crate) fn string_to_components(input: &str) -> Option<ComponentRecord> {
    let mut color = input.trim().to_lowercase();
    if color.is_empty() {
        return None;
    }

    let mut named = false;
    if let Some(hex) = names::hex_for_name(&color) {
        color = hex.to_string();
        named = true;
    } else if color == "transparent" {
        return Some(ComponentRecord::Rgb(RgbInput {
            r: ChannelValue::Num(0.0),
            g: ChannelValue::Num(0.0),
            b: ChannelValue::Num(0.0),
            a: Some(ChannelValue::Num(0.0)),
            format: Some(Format::Name),
        }));
    }

    let token = |c: &regex::Captures<'_>, i: usize| ChannelValue::Str(c[i].to_string());

    if let Some(c) = MATCHERS.rgb.captures(&color) {
        return Some(ComponentRecord::Rgb(RgbInput {
            r: token(&c, 1),
            g: token(&c, 2),
            b: token(&c, 3),
            a: None,
            format: None,
        }));
    }
    if let Some(c) = MATCHERS.rgba.captures(&color) {
        return Some(ComponentRecord::Rgb(RgbInput {
            r: token(&c, 1),
            g: token(&c, 2),
            b: token(&c, 3),
            a: Some(token(&c, 4)),
            format: None,
        }));
    }
    if let Some(c) = MATCHERS.hsl.captures(&color) {
        return Some(ComponentRecord::Hsl(HslInput {
            h: token(&c, 1),
            s: token(&c, 2),
            l: token(&c, 3),
            a: None,
            format: None,
        }));
    }
    if let Some(c) = MATCHERS.hsla.captures(&color) {
        return Some(ComponentRecord::Hsl(HslInput {
            h: token(&c, 1),
            s: token(&c, 2),
            l: token(&c, 3),
            a: Some(token(&c, 4)),
            format: None,
        }));
    }
    if let Some(c) = MATCHERS.hsv.captures(&color) {
        return Some(ComponentRecord::Hsv(HsvInput {
            h: token(&c, 1),
            s: token(&c, 2),
            v: token(&c, 3),
            a: None,
            format: None,
        }));
    }
    if let Some(c) = MATCHERS.hsva.captures(&color) {
        return Some(ComponentRecord::Hsv(HsvInput {
            h: token(&c, 1),
            s: token(&c, 2),
            v: token(&c, 3),
            a: Some(token(&c, 4)),
            format: None,
        }));
    }

    let pair = |c: &regex::Captures<'_>, i: usize| {
        ChannelValue::Num(convert::parse_hex_pair(&c[i]))
    };
    let doubled = |c: &regex::Captures<'_>, i: usize| {
        ChannelValue::Num(convert::parse_hex_pair(&format!("{0}{0}", &c[i])))
    };

    if let Some(c) = MATCHERS.hex8.captures(&color) {
        return Some(ComponentRecord::Rgb(RgbInput {
            r: pair(&c, 1),
            g: pair(&c, 2),
            b: pair(&c, 3),
            a: Some(ChannelValue::Num(convert::hex_pair_to_alpha(&c[4]))),
            format: Some(if named { Format::Name } else { Format::Hex8 }),
        }));
    }
    if let Some(c) = MATCHERS.hex6.captures(&color) {
        return Some(ComponentRecord::Rgb(RgbInput {
            r: pair(&c, 1),
            g: pair(&c, 2),
            b: pair(&c, 3),
            a: None,
            format: Some(if named { Format::Name } else { Format::Hex }),
        }));
    }
    if let Some(c) = MATCHERS.hex4.captures(&color) {
        return Some(ComponentRecord::Rgb(RgbInput {
            r: doubled(&c, 1),
            g: doubled(&c, 2),
            b: doubled(&c, 3),
            a: Some(ChannelValue::Num(convert::hex_pair_to_alpha(&format!(
                "{0}{0}",
                &c[4]
            )))),
            format: Some(if named { Format::Name } else { Format::Hex8 }),
        }));
    }
    if let Some(c) = MATCHERS.hex3.captures(&color) {
        return Some(ComponentRecord::Rgb(RgbInput {
            r: doubled(&c, 1),
            g: doubled(&c, 2),
            b: doubled(&c, 3),
            a: None,
            format: Some(if named { Format::Name } else { Format::Hex }),
        }));
    }

    None
}

/// A fully resolved color: normalized channels plus parse metadata. This is
/// what the [`Color`] constructor consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Resolved {
    pub ok: bool,
    pub format: Option<Format>,
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Resolved {
    fn invalid(a: f64) -> Self {
        Resolved {
            ok: false,
            format: None,
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a,
        }
    }
}

static RESOLVE_CACHE: LazyLock<Mutex<LruCache<String, Resolved>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(1024).expect("non-zero"))));

/// Resolve any input into normalized RGB channels.
///
/// Never fails: inputs nothing can interpret come back as opaque black with
/// `ok == false`. An `Existing` color projects its channels straight
/// through (the parse entry point short-circuits before this, keeping the
/// identity exact).
pub(crate) fn resolve(input: &ColorInput) -> Resolved {
    match input {
        ColorInput::Str(s) => resolve_str(s),
        ColorInput::Rgb(rec) => resolve_rgb(rec),
        ColorInput::Hsl(rec) => resolve_hsl(rec),
        ColorInput::Hsv(rec) => resolve_hsv(rec),
        ColorInput::Existing(color) => Resolved {
            ok: color.is_valid(),
            format: Some(color.format()),
            r: color.red(),
            g: color.green(),
            b: color.blue(),
            a: color.alpha(),
        },
    }
}

/// String resolution, LRU-cached on the trimmed lowercase input.
fn resolve_str(input: &str) -> Resolved {
    let key = input.trim().to_lowercase();

    if let Ok(mut cache) = RESOLVE_CACHE.lock()
        && let Some(hit) = cache.get(&key)
    {
        return *hit;
    }
    log::trace!("color parse cache miss for {key:?}");

    let resolved = match string_to_components(&key) {
        Some(ComponentRecord::Rgb(rec)) => resolve_rgb(&rec),
        Some(ComponentRecord::Hsl(rec)) => resolve_hsl(&rec),
        Some(ComponentRecord::Hsv(rec)) => resolve_hsv(&rec),
        None => {
            log::trace!("no color grammar matched {key:?}");
            Resolved::invalid(1.0)
        }
    };

    if let Ok(mut cache) = RESOLVE_CACHE.lock() {
        cache.put(key, resolved);
    }
    resolved
}

fn resolve_rgb(rec: &RgbInput) -> Resolved {
    let a = util::bound_alpha(rec.a.as_ref());
    if !(rec.r.is_css_unit() && rec.g.is_css_unit() && rec.b.is_css_unit()) {
        return Resolved {
            format: rec.format,
            ..Resolved::invalid(a)
        };
    }
    let (r, g, b) = convert::rgb_to_rgb(&rec.r, &rec.g, &rec.b);
    let inferred = if rec.r.is_percent_str() {
        Format::Prgb
    } else {
        Format::Rgb
    };
    Resolved {
        ok: true,
        format: Some(rec.format.unwrap_or(inferred)),
        r: r.clamp(0.0, 255.0),
        g: g.clamp(0.0, 255.0),
        b: b.clamp(0.0, 255.0),
        a,
    }
}

fn resolve_hsl(rec: &HslInput) -> Resolved {
    let a = util::bound_alpha(rec.a.as_ref());
    if !(rec.h.is_css_unit() && rec.s.is_css_unit() && rec.l.is_css_unit()) {
        return Resolved {
            format: rec.format,
            ..Resolved::invalid(a)
        };
    }
    let s = util::convert_to_percentage(&rec.s);
    let l = util::convert_to_percentage(&rec.l);
    let (r, g, b) = convert::hsl_to_rgb(&rec.h, &s, &l);
    Resolved {
        ok: true,
        format: Some(rec.format.unwrap_or(Format::Hsl)),
        r: r.clamp(0.0, 255.0),
        g: g.clamp(0.0, 255.0),
        b: b.clamp(0.0, 255.0),
        a,
    }
}

fn resolve_hsv(rec: &HsvInput) -> Resolved {
    let a = util::bound_alpha(rec.a.as_ref());
    if !(rec.h.is_css_unit() && rec.s.is_css_unit() && rec.v.is_css_unit()) {
        return Resolved {
            format: rec.format,
            ..Resolved::invalid(a)
        };
    }
    let s = util::convert_to_percentage(&rec.s);
    let v = util::convert_to_percentage(&rec.v);
    let (r, g, b) = convert::hsv_to_rgb(&rec.h, &s, &v);
    Resolved {
        ok: true,
        format: Some(rec.format.unwrap_or(Format::Hsv)),
        r: r.clamp(0.0, 255.0),
        g: g.clamp(0.0, 255.0),
        b: b.clamp(0.0, 255.0),
        a,
    }
}
