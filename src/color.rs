//! The `Color` value type: parsing entry points, accessors, serializers,
//! and every derived-color operation.
//!
//! A `Color` is an immutable value. Parsing never fails; an input nothing
//! understands produces an opaque black whose [`Color::is_valid`] reports
//! `false`, and every serializer on it still returns a well-formed string.
//!
//! # Examples
//!
//! ```
//! use tinct::Color;
//!
//! let c = Color::parse("#2400c2");
//! assert_eq!(c.to_rgb_string(), "rgb(36, 0, 194)");
//! assert_eq!(c.to_hsl_string(), "hsl(251, 100%, 38%)");
//! ```

use std::fmt;

use crate::convert;
use crate::names;
use crate::parse::{
    self, ChannelValue, ColorInput, Format, HslInput, HsvInput, ParseOptions, RgbInput,
};
use crate::util;

/// RGB projection of a color: channels rounded to [0, 255] integers plus the
/// exact alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red, 0-255.
    pub r: f64,
    /// Green, 0-255.
    pub g: f64,
    /// Blue, 0-255.
    pub b: f64,
    /// Alpha, 0-1.
    pub a: f64,
}

/// HSL projection: hue in degrees, saturation/lightness as [0, 1] fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, [0, 360).
    pub h: f64,
    /// Saturation fraction.
    pub s: f64,
    /// Lightness fraction.
    pub l: f64,
    /// Alpha, 0-1.
    pub a: f64,
}

/// HSV projection: hue in degrees, saturation/value as [0, 1] fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, [0, 360).
    pub h: f64,
    /// Saturation fraction.
    pub s: f64,
    /// Value fraction.
    pub v: f64,
    /// Alpha, 0-1.
    pub a: f64,
}

/// Percentage RGB projection; channels are rendered `"NN%"` strings.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageRgb {
    /// Red as a percent token.
    pub r: String,
    /// Green as a percent token.
    pub g: String,
    /// Blue as a percent token.
    pub b: String,
    /// Alpha, 0-1.
    pub a: f64,
}

impl From<Rgb> for ColorInput {
    fn from(value: Rgb) -> Self {
        ColorInput::Rgb(RgbInput {
            r: value.r.into(),
            g: value.g.into(),
            b: value.b.into(),
            a: Some(value.a.into()),
            format: None,
        })
    }
}

impl From<Hsl> for ColorInput {
    fn from(value: Hsl) -> Self {
        ColorInput::Hsl(HslInput {
            h: value.h.into(),
            s: value.s.into(),
            l: value.l.into(),
            a: Some(value.a.into()),
            format: None,
        })
    }
}

impl From<Hsv> for ColorInput {
    fn from(value: Hsv) -> Self {
        ColorInput::Hsv(HsvInput {
            h: value.h.into(),
            s: value.s.into(),
            v: value.v.into(),
            a: Some(value.a.into()),
            format: None,
        })
    }
}

impl From<PercentageRgb> for ColorInput {
    fn from(value: PercentageRgb) -> Self {
        ColorInput::Rgb(RgbInput {
            r: value.r.into(),
            g: value.g.into(),
            b: value.b.into(),
            a: Some(value.a.into()),
            format: None,
        })
    }
}

/// A parsed color: normalized RGB channels in [0, 255], alpha in [0, 1],
/// plus the metadata needed to serialize it back the way it came in.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
    round_a: f64,
    format: Format,
    gradient_type: bool,
    ok: bool,
    original_input: ColorInput,
}

impl Color {
    /// Parse any supported input into a `Color`.
    ///
    /// Accepts strings in every notation the crate knows, the structured
    /// input records, the structured projections, and existing `Color`
    /// values (identity).
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::Color;
    ///
    /// assert_eq!(Color::parse("red").to_hex(false), "ff0000");
    /// assert_eq!(Color::parse("rgb 255 0 0").to_hex_string(false), "#ff0000");
    /// assert!(!Color::parse("this is not a color").is_valid());
    /// ```
    #[must_use]
    pub fn parse(input: impl Into<ColorInput>) -> Color {
        Color::parse_with(input, ParseOptions::default())
    }

    /// Parse with explicit options; `options.format` overrides the inferred
    /// format tag and `options.gradient_type` switches the filter serializer
    /// into gradient mode.
    #[must_use]
    pub fn parse_with(input: impl Into<ColorInput>, options: ParseOptions) -> Color {
        let input = input.into();
        if let ColorInput::Existing(color) = input {
            return *color;
        }

        let resolved = parse::resolve(&input);
        // A channel below 1 is rounded away: it was a stray fraction, not a
        // ratio of the full range.
        let snap = |x: f64| if x < 1.0 { x.round() } else { x };
        Color {
            r: snap(resolved.r),
            g: snap(resolved.g),
            b: snap(resolved.b),
            a: resolved.a,
            round_a: (100.0 * resolved.a).round() / 100.0,
            format: options.format.or(resolved.format).unwrap_or(Format::Hex),
            gradient_type: options.gradient_type,
            ok: resolved.ok,
            original_input: input,
        }
    }

    /// Parse after promoting [0, 1] ratio channels to percentages, so
    /// `{r: 1, g: 0, b: 0}` means full red rather than `rgb(1, 0, 0)`.
    /// Alpha is never promoted; string inputs pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::{Color, RgbInput};
    ///
    /// let c = Color::from_ratio(RgbInput {
    ///     r: 1.0.into(),
    ///     g: 0.0.into(),
    ///     b: 0.0.into(),
    ///     a: Some(0.5.into()),
    ///     ..Default::default()
    /// });
    /// assert_eq!(c.to_rgb_string(), "rgba(255, 0, 0, 0.5)");
    /// ```
    #[must_use]
    pub fn from_ratio(input: impl Into<ColorInput>) -> Color {
        let pct = util::convert_to_percentage;
        let input = match input.into() {
            ColorInput::Rgb(rec) => ColorInput::Rgb(RgbInput {
                r: pct(&rec.r),
                g: pct(&rec.g),
                b: pct(&rec.b),
                a: rec.a,
                format: rec.format,
            }),
            ColorInput::Hsl(rec) => ColorInput::Hsl(HslInput {
                h: pct(&rec.h),
                s: pct(&rec.s),
                l: pct(&rec.l),
                a: rec.a,
                format: rec.format,
            }),
            ColorInput::Hsv(rec) => ColorInput::Hsv(HsvInput {
                h: pct(&rec.h),
                s: pct(&rec.s),
                v: pct(&rec.v),
                a: rec.a,
                format: rec.format,
            }),
            other => other,
        };
        Color::parse(input)
    }

    /// One color from three uniform random unit ratios. The constrained
    /// generator lives in [`from_random`](crate::random::from_random).
    #[must_use]
    pub fn random() -> Color {
        Color::from_ratio(RgbInput {
            r: fastrand::f64().into(),
            g: fastrand::f64().into(),
            b: fastrand::f64().into(),
            a: None,
            format: None,
        })
    }

    /// Whether parsing succeeded. Invalid colors are opaque black.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.ok
    }

    /// The format tag serialization defaults to.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// The exact alpha value, 0-1.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// The input this color was parsed from, verbatim.
    #[must_use]
    pub fn original_input(&self) -> &ColorInput {
        &self.original_input
    }

    /// Whether the filter serializer renders in gradient mode.
    #[must_use]
    pub fn gradient_type(&self) -> bool {
        self.gradient_type
    }

    pub(crate) fn red(&self) -> f64 {
        self.r
    }

    pub(crate) fn green(&self) -> f64 {
        self.g
    }

    pub(crate) fn blue(&self) -> f64 {
        self.b
    }

    /// Perceived brightness, 0-255, per the AERT color-contrast formula.
    #[must_use]
    pub fn brightness(&self) -> f64 {
        let rgb = self.to_rgb();
        (rgb.r * 299.0 + rgb.g * 587.0 + rgb.b * 114.0) / 1000.0
    }

    /// Whether the color reads as dark (brightness below 128).
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.brightness() < 128.0
    }

    /// Whether the color reads as light.
    #[must_use]
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// WCAG relative luminance, 0-1: channels gamma-linearized then weighted
    /// 0.2126 / 0.7152 / 0.0722.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        let rgb = self.to_rgb();
        let linear = |channel: f64| {
            let srgb = channel / 255.0;
            if srgb <= 0.03928 {
                srgb / 12.92
            } else {
                ((srgb + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(rgb.r) + 0.7152 * linear(rgb.g) + 0.0722 * linear(rgb.b)
    }

    /// Rounded RGB channels plus exact alpha.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        Rgb {
            r: self.r.round(),
            g: self.g.round(),
            b: self.b.round(),
            a: self.a,
        }
    }

    /// `rgb(r, g, b)`, or `rgba(r, g, b, a)` when translucent.
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        let rgb = self.to_rgb();
        if self.a == 1.0 {
            format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
        } else {
            format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, self.round_a)
        }
    }

    fn percent_channel(value: f64) -> f64 {
        (util::bound01(&ChannelValue::Num(value), 255.0) * 100.0).round()
    }

    /// Channels as rounded percentage tokens plus exact alpha.
    #[must_use]
    pub fn to_percentage_rgb(&self) -> PercentageRgb {
        PercentageRgb {
            r: format!("{}%", Color::percent_channel(self.r)),
            g: format!("{}%", Color::percent_channel(self.g)),
            b: format!("{}%", Color::percent_channel(self.b)),
            a: self.a,
        }
    }

    /// `rgb(r%, g%, b%)`, or the rgba form when translucent.
    #[must_use]
    pub fn to_percentage_rgb_string(&self) -> String {
        let r = Color::percent_channel(self.r);
        let g = Color::percent_channel(self.g);
        let b = Color::percent_channel(self.b);
        if self.a == 1.0 {
            format!("rgb({r}%, {g}%, {b}%)")
        } else {
            format!("rgba({r}%, {g}%, {b}%, {})", self.round_a)
        }
    }

    /// HSL projection with hue scaled to degrees.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let (h, s, l) = convert::rgb_to_hsl(self.r, self.g, self.b);
        Hsl {
            h: h * 360.0,
            s,
            l,
            a: self.a,
        }
    }

    /// `hsl(h, s%, l%)`, or the hsla form when translucent.
    #[must_use]
    pub fn to_hsl_string(&self) -> String {
        let (h, s, l) = convert::rgb_to_hsl(self.r, self.g, self.b);
        let h = (h * 360.0).round();
        let s = (s * 100.0).round();
        let l = (l * 100.0).round();
        if self.a == 1.0 {
            format!("hsl({h}, {s}%, {l}%)")
        } else {
            format!("hsla({h}, {s}%, {l}%, {})", self.round_a)
        }
    }

    /// HSV projection with hue scaled to degrees.
    #[must_use]
    pub fn to_hsv(&self) -> Hsv {
        let (h, s, v) = convert::rgb_to_hsv(self.r, self.g, self.b);
        Hsv {
            h: h * 360.0,
            s,
            v,
            a: self.a,
        }
    }

    /// `hsv(h, s%, v%)`, or the hsva form when translucent.
    #[must_use]
    pub fn to_hsv_string(&self) -> String {
        let (h, s, v) = convert::rgb_to_hsv(self.r, self.g, self.b);
        let h = (h * 360.0).round();
        let s = (s * 100.0).round();
        let v = (v * 100.0).round();
        if self.a == 1.0 {
            format!("hsv({h}, {s}%, {v}%)")
        } else {
            format!("hsva({h}, {s}%, {v}%, {})", self.round_a)
        }
    }

    /// Bare hex digits; `allow3` permits the 3-digit shorthand when every
    /// channel pair is doubled.
    #[must_use]
    pub fn to_hex(&self, allow3: bool) -> String {
        convert::rgb_to_hex(self.r, self.g, self.b, allow3)
    }

    /// `#`-prefixed hex string.
    #[must_use]
    pub fn to_hex_string(&self, allow3: bool) -> String {
        format!("#{}", self.to_hex(allow3))
    }

    /// Bare RGBA hex digits, alpha last; `allow4` permits the shorthand.
    #[must_use]
    pub fn to_hex8(&self, allow4: bool) -> String {
        convert::rgba_to_hex(self.r, self.g, self.b, self.a, allow4)
    }

    /// `#`-prefixed RGBA hex string.
    #[must_use]
    pub fn to_hex8_string(&self, allow4: bool) -> String {
        format!("#{}", self.to_hex8(allow4))
    }

    /// The CSS keyword for this exact color, if one exists.
    ///
    /// Full transparency is always `"transparent"`; any other translucency
    /// has no name. Ambiguous hexes resolve to the alphabetically first
    /// keyword (`aqua`, not `cyan`).
    #[must_use]
    pub fn to_name(&self) -> Option<&'static str> {
        if self.a == 0.0 {
            return Some("transparent");
        }
        if self.a < 1.0 {
            return None;
        }
        names::name_for_hex(&convert::rgb_to_hex(self.r, self.g, self.b, false))
    }

    /// The legacy Microsoft filter string, ARGB hex channel order. The end
    /// color defaults to the receiver when `second` is `None`.
    #[must_use]
    pub fn to_filter_string(&self, second: Option<ColorInput>) -> String {
        let start = format!(
            "#{}",
            convert::rgba_to_argb_hex(self.r, self.g, self.b, self.a)
        );
        let end = match second {
            Some(input) => {
                let c = Color::parse(input);
                format!("#{}", convert::rgba_to_argb_hex(c.r, c.g, c.b, c.a))
            }
            None => start.clone(),
        };
        let gradient = if self.gradient_type {
            "GradientType = 1, "
        } else {
            ""
        };
        format!(
            "progid:DXImageTransform.Microsoft.gradient({gradient}startColorstr={start},endColorstr={end})"
        )
    }

    /// Serialize in the requested format, or the stored default when `None`.
    ///
    /// With no explicit format, a translucent color whose default is a hex
    /// family or `name` falls back to the rgba string, except full
    /// transparency in `name` format, which stays literal `"transparent"`.
    /// A requested `name` with no keyword match falls back to the hex
    /// string.
    #[must_use]
    pub fn to_string_format(&self, format: Option<Format>) -> String {
        let format_set = format.is_some();
        let format = format.unwrap_or(self.format);

        let has_alpha = self.a < 1.0 && self.a >= 0.0;
        if !format_set && has_alpha && format.is_hex_or_name() {
            if format == Format::Name && self.a == 0.0 {
                return "transparent".to_string();
            }
            return self.to_rgb_string();
        }

        let formatted = match format {
            Format::Rgb => Some(self.to_rgb_string()),
            Format::Prgb => Some(self.to_percentage_rgb_string()),
            Format::Hex | Format::Hex6 => Some(self.to_hex_string(false)),
            Format::Hex3 => Some(self.to_hex_string(true)),
            Format::Hex4 => Some(self.to_hex8_string(true)),
            Format::Hex8 => Some(self.to_hex8_string(false)),
            Format::Name => self.to_name().map(str::to_string),
            Format::Hsl => Some(self.to_hsl_string()),
            Format::Hsv => Some(self.to_hsv_string()),
        };
        formatted.unwrap_or_else(|| self.to_hex_string(false))
    }

    /// A copy with a different alpha; everything else, the original input
    /// included, is untouched. Out-of-range alpha normalizes to opaque.
    #[must_use]
    pub fn with_alpha(&self, alpha: f64) -> Color {
        let a = util::bound_alpha(Some(&ChannelValue::Num(alpha)));
        Color {
            a,
            round_a: (100.0 * a).round() / 100.0,
            ..self.clone()
        }
    }

    /// Lighten by adding `amount` percentage points of HSL lightness.
    /// Conventional amount: 10.
    #[must_use]
    pub fn lighten(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsl();
        hsl.l = util::clamp01(hsl.l + amount / 100.0);
        Color::parse(hsl)
    }

    /// Darken by removing HSL lightness.
    #[must_use]
    pub fn darken(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsl();
        hsl.l = util::clamp01(hsl.l - amount / 100.0);
        Color::parse(hsl)
    }

    /// Increase HSL saturation.
    #[must_use]
    pub fn saturate(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsl();
        hsl.s = util::clamp01(hsl.s + amount / 100.0);
        Color::parse(hsl)
    }

    /// Decrease HSL saturation.
    #[must_use]
    pub fn desaturate(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsl();
        hsl.s = util::clamp01(hsl.s - amount / 100.0);
        Color::parse(hsl)
    }

    /// Fully desaturate.
    #[must_use]
    pub fn greyscale(&self) -> Color {
        self.desaturate(100.0)
    }

    /// Brighten on raw RGB channels. Not the same operation as
    /// [`lighten`](Color::lighten): each channel moves by
    /// `-round(255 * -(amount/100))` and clamps, so saturated channels stay
    /// pinned instead of washing the hue out.
    #[must_use]
    pub fn brighten(&self, amount: f64) -> Color {
        let rgb = self.to_rgb();
        let adjust = util::round_half_up(255.0 * -(amount / 100.0));
        let channel = |x: f64| (x - adjust).clamp(0.0, 255.0);
        Color::parse(Rgb {
            r: channel(rgb.r),
            g: channel(rgb.g),
            b: channel(rgb.b),
            a: rgb.a,
        })
    }

    /// Rotate the hue by `amount` degrees, wrapping into [0, 360).
    #[must_use]
    pub fn spin(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsl();
        let hue = (hsl.h + amount) % 360.0;
        hsl.h = if hue < 0.0 { 360.0 + hue } else { hue };
        Color::parse(hsl)
    }

    /// The hue 180° away.
    #[must_use]
    pub fn complement(&self) -> Color {
        let mut hsl = self.to_hsl();
        hsl.h = (hsl.h + 180.0) % 360.0;
        Color::parse(hsl)
    }

    /// Harmony companions are rebuilt from bare hue/saturation/lightness,
    /// so they come out opaque regardless of the receiver's alpha.
    fn rotated(&self, hsl: Hsl, offset: f64) -> Color {
        Color::parse(HslInput {
            h: ((hsl.h + offset) % 360.0).into(),
            s: hsl.s.into(),
            l: hsl.l.into(),
            a: None,
            format: None,
        })
    }

    /// The receiver plus its two triadic companions (+120°, +240°).
    #[must_use]
    pub fn triad(&self) -> Vec<Color> {
        let hsl = self.to_hsl();
        vec![
            self.clone(),
            self.rotated(hsl, 120.0),
            self.rotated(hsl, 240.0),
        ]
    }

    /// The receiver plus its three tetradic companions (+90°, +180°, +270°).
    #[must_use]
    pub fn tetrad(&self) -> Vec<Color> {
        let hsl = self.to_hsl();
        vec![
            self.clone(),
            self.rotated(hsl, 90.0),
            self.rotated(hsl, 180.0),
            self.rotated(hsl, 270.0),
        ]
    }

    /// The receiver plus its split-complement companions (+72°, +216°).
    #[must_use]
    pub fn split_complement(&self) -> Vec<Color> {
        let hsl = self.to_hsl();
        vec![
            self.clone(),
            self.rotated(hsl, 72.0),
            self.rotated(hsl, 216.0),
        ]
    }

    /// `results` analogous colors including the receiver, stepping the hue
    /// in `360/slices`-degree increments centered near the original.
    /// Conventional call: `analogous(6, 30)`.
    #[must_use]
    pub fn analogous(&self, results: usize, slices: usize) -> Vec<Color> {
        let mut hsl = self.to_hsl();
        let part = 360.0 / slices as f64;
        let mut colors = vec![self.clone()];

        let back = f64::from(((part * results as f64) as i32) >> 1);
        hsl.h = (hsl.h - back + 720.0) % 360.0;
        for _ in 1..results {
            hsl.h = (hsl.h + part) % 360.0;
            colors.push(Color::parse(hsl));
        }
        colors
    }

    /// `results` colors walking HSV value upward in `1/results` steps,
    /// wrapping past full brightness. The receiver leads the list, rebuilt
    /// from its own HSV projection. Conventional call: `monochromatic(6)`.
    #[must_use]
    pub fn monochromatic(&self, results: usize) -> Vec<Color> {
        let hsv = self.to_hsv();
        let (h, s) = (hsv.h, hsv.s);
        let mut v = hsv.v;
        let modification = 1.0 / results as f64;

        let mut colors = Vec::with_capacity(results);
        for _ in 0..results {
            colors.push(Color::parse(HsvInput {
                h: h.into(),
                s: s.into(),
                v: v.into(),
                a: None,
                format: None,
            }));
            v = (v + modification) % 1.0;
        }
        colors
    }

    /// Blend toward `other` by `amount` percent: 0 keeps the receiver, 100
    /// lands on `other`, 50 meets in the middle. Every RGBA channel lerps
    /// independently.
    #[must_use]
    pub fn mix(&self, other: impl Into<ColorInput>, amount: f64) -> Color {
        let rgb1 = self.to_rgb();
        let rgb2 = Color::parse(other).to_rgb();
        let p = amount / 100.0;
        Color::parse(Rgb {
            r: (rgb2.r - rgb1.r) * p + rgb1.r,
            g: (rgb2.g - rgb1.g) * p + rgb1.g,
            b: (rgb2.b - rgb1.b) * p + rgb1.b,
            a: (rgb2.a - rgb1.a) * p + rgb1.a,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_format(None))
    }
}

/// Blend two colors; see [`Color::mix`].
#[must_use]
pub fn mix(first: impl Into<ColorInput>, second: impl Into<ColorInput>, amount: f64) -> Color {
    Color::parse(first).mix(second, amount)
}

/// Whether two inputs parse validly and serialize to the same RGBA string.
///
/// Equality deliberately goes through serialization, inheriting its channel
/// rounding: `rgb(255.4, 0, 0)` equals `#ff0000`.
#[must_use]
pub fn equals(first: impl Into<ColorInput>, second: impl Into<ColorInput>) -> bool {
    let first = Color::parse(first);
    let second = Color::parse(second);
    first.is_valid() && second.is_valid() && first.to_rgb_string() == second.to_rgb_string()
}
