//! Constrained random color generation.
//!
//! Colors are sampled in HSV space against a table of per-hue-bucket
//! saturation/brightness envelopes, so unconstrained picks still land on
//! colors people would call attractive rather than uniform RGB noise.
//! A seed makes the output a pure function of the options.
//!
//! # Examples
//!
//! ```
//! use tinct::{from_random, RandomOptions};
//!
//! let seeded = RandomOptions { seed: Some(11100), ..Default::default() };
//! assert_eq!(from_random(seeded.clone())[0].to_hex_string(false), "#a02be3");
//! assert_eq!(from_random(seeded.clone()), from_random(seeded));
//! ```

use crate::color::Color;
use crate::parse::{ChannelValue, HsvInput};

/// Hue family a random pick can be pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HueBucket {
    /// Greys only; saturation is forced to zero.
    Monochrome,
    /// Reds, including the wrap across 0°.
    Red,
    /// Oranges.
    Orange,
    /// Yellows.
    Yellow,
    /// Greens.
    Green,
    /// Blues.
    Blue,
    /// Purples.
    Purple,
    /// Pinks.
    Pink,
}

impl HueBucket {
    fn from_name(name: &str) -> Option<HueBucket> {
        match name {
            "monochrome" => Some(HueBucket::Monochrome),
            "red" => Some(HueBucket::Red),
            "orange" => Some(HueBucket::Orange),
            "yellow" => Some(HueBucket::Yellow),
            "green" => Some(HueBucket::Green),
            "blue" => Some(HueBucket::Blue),
            "purple" => Some(HueBucket::Purple),
            "pink" => Some(HueBucket::Pink),
            _ => None,
        }
    }
}

/// Hue constraint for [`from_random`].
///
/// Strings resolve the way a stylesheet author would expect: a leading
/// integer is an exact hue, a bucket name selects that bucket, and anything
/// else is parsed as a color whose hue is taken. Unusable values (hues
/// outside (0, 360), unparseable colors) fall back to the full wheel.
#[derive(Debug, Clone, PartialEq)]
pub enum HueChoice {
    /// An exact hue in degrees; fractions are truncated.
    Degrees(f64),
    /// A named hue family.
    Bucket(HueBucket),
    /// Any parseable color input; its HSV hue is used exactly.
    Color(String),
}

impl From<f64> for HueChoice {
    fn from(value: f64) -> Self {
        HueChoice::Degrees(value)
    }
}

impl From<i32> for HueChoice {
    fn from(value: i32) -> Self {
        HueChoice::Degrees(f64::from(value))
    }
}

impl From<HueBucket> for HueChoice {
    fn from(value: HueBucket) -> Self {
        HueChoice::Bucket(value)
    }
}

impl From<&str> for HueChoice {
    fn from(value: &str) -> Self {
        let trimmed = value.trim_start();
        let bytes = trimmed.as_bytes();
        let digits_start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let mut end = digits_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start
            && let Ok(n) = trimmed[..end].parse::<f64>()
        {
            return HueChoice::Degrees(n);
        }
        if let Some(bucket) = HueBucket::from_name(trimmed) {
            return HueChoice::Bucket(bucket);
        }
        HueChoice::Color(value.to_string())
    }
}

impl From<String> for HueChoice {
    fn from(value: String) -> Self {
        HueChoice::from(value.as_str())
    }
}

/// Overall lightness register for [`from_random`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Luminosity {
    /// Ignore the envelopes; saturation and brightness are uniform.
    Random,
    /// Vivid colors: saturation at least 55.
    Bright,
    /// Dark colors: saturation near its maximum, brightness capped low.
    Dark,
    /// Pale colors: saturation at most 55, brightness in the upper half.
    Light,
}

/// Options for [`from_random`]. `Default` means one unconstrained,
/// unseeded, opaque color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RandomOptions {
    /// Seed for reproducible output; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Number of colors to generate; `None` means one.
    pub count: Option<usize>,
    /// Hue constraint.
    pub hue: Option<HueChoice>,
    /// Lightness register.
    pub luminosity: Option<Luminosity>,
    /// Alpha for the generated colors; `None` leaves them opaque.
    pub alpha: Option<f64>,
}

/// Per-bucket envelope: the hue span and the lowest acceptable brightness
/// for each saturation, as (saturation, brightness) breakpoints.
struct ColorBound {
    bucket: HueBucket,
    hue_range: Option<(f64, f64)>,
    lower_bounds: &'static [(f64, f64)],
}

/// Red spans the 0° wrap, expressed with negative degrees so its range
/// stays a single interval. `Monochrome` has no hue range; it never
/// classifies a hue and only pins saturation.
static BOUNDS: &[ColorBound] = &[
    ColorBound {
        bucket: HueBucket::Monochrome,
        hue_range: None,
        lower_bounds: &[(0.0, 0.0), (100.0, 0.0)],
    },
    ColorBound {
        bucket: HueBucket::Red,
        hue_range: Some((-26.0, 18.0)),
        lower_bounds: &[
            (20.0, 100.0),
            (30.0, 92.0),
            (40.0, 89.0),
            (50.0, 85.0),
            (60.0, 78.0),
            (70.0, 70.0),
            (80.0, 60.0),
            (90.0, 55.0),
            (100.0, 50.0),
        ],
    },
    ColorBound {
        bucket: HueBucket::Orange,
        hue_range: Some((19.0, 46.0)),
        lower_bounds: &[
            (20.0, 100.0),
            (30.0, 93.0),
            (40.0, 88.0),
            (50.0, 86.0),
            (60.0, 85.0),
            (70.0, 70.0),
            (100.0, 70.0),
        ],
    },
    ColorBound {
        bucket: HueBucket::Yellow,
        hue_range: Some((47.0, 62.0)),
        lower_bounds: &[
            (25.0, 100.0),
            (40.0, 94.0),
            (50.0, 89.0),
            (60.0, 86.0),
            (70.0, 84.0),
            (80.0, 82.0),
            (90.0, 80.0),
            (100.0, 75.0),
        ],
    },
    ColorBound {
        bucket: HueBucket::Green,
        hue_range: Some((63.0, 178.0)),
        lower_bounds: &[
            (30.0, 100.0),
            (40.0, 90.0),
            (50.0, 85.0),
            (60.0, 81.0),
            (70.0, 74.0),
            (80.0, 64.0),
            (90.0, 50.0),
            (100.0, 40.0),
        ],
    },
    ColorBound {
        bucket: HueBucket::Blue,
        hue_range: Some((179.0, 257.0)),
        lower_bounds: &[
            (20.0, 100.0),
            (30.0, 86.0),
            (40.0, 80.0),
            (50.0, 74.0),
            (60.0, 60.0),
            (70.0, 52.0),
            (80.0, 44.0),
            (90.0, 39.0),
            (100.0, 35.0),
        ],
    },
    ColorBound {
        bucket: HueBucket::Purple,
        hue_range: Some((258.0, 282.0)),
        lower_bounds: &[
            (20.0, 100.0),
            (30.0, 87.0),
            (40.0, 79.0),
            (50.0, 70.0),
            (60.0, 65.0),
            (70.0, 59.0),
            (80.0, 52.0),
            (90.0, 45.0),
            (100.0, 42.0),
        ],
    },
    ColorBound {
        bucket: HueBucket::Pink,
        hue_range: Some((283.0, 334.0)),
        lower_bounds: &[
            (20.0, 100.0),
            (30.0, 90.0),
            (40.0, 86.0),
            (60.0, 84.0),
            (80.0, 80.0),
            (90.0, 75.0),
            (100.0, 73.0),
        ],
    },
];

impl ColorBound {
    fn saturation_range(&self) -> (f64, f64) {
        let first = self.lower_bounds[0].0;
        let last = self.lower_bounds[self.lower_bounds.len() - 1].0;
        (first, last)
    }
}

fn bucket_bound(bucket: HueBucket) -> &'static ColorBound {
    BOUNDS
        .iter()
        .find(|bound| bound.bucket == bucket)
        .expect("every bucket has a bounds entry")
}

/// Classify a picked hue into its envelope. Hues in [334, 360] are shifted
/// down by a full turn first so they land in red's negative span.
fn color_info(hue: f64) -> &'static ColorBound {
    let hue = if (334.0..=360.0).contains(&hue) {
        hue - 360.0
    } else {
        hue
    };
    BOUNDS
        .iter()
        .find(|bound| {
            bound
                .hue_range
                .is_some_and(|(lo, hi)| hue >= lo && hue <= hi)
        })
        .expect("integer hues in [0, 360] always classify")
}

/// One draw in `[lo, hi]`. Seeded draws run one LCG step and never advance
/// the seed, so the hue, saturation, and brightness picks of a single color
/// share one underlying value.
fn random_within(range: (f64, f64), seed: Option<u64>) -> f64 {
    let (lo, hi) = range;
    match seed {
        None => (lo + fastrand::f64() * (hi + 1.0 - lo)).floor(),
        Some(seed) => {
            let next = seed.wrapping_mul(9301).wrapping_add(49297) % 233280;
            let t = next as f64 / 233280.0;
            (lo + t * (hi - lo)).floor()
        }
    }
}

fn hue_range(choice: Option<&HueChoice>) -> (f64, f64) {
    match choice {
        Some(HueChoice::Degrees(n)) => {
            let n = n.trunc();
            if n > 0.0 && n < 360.0 {
                (n, n)
            } else {
                (0.0, 360.0)
            }
        }
        Some(HueChoice::Bucket(bucket)) => {
            bucket_bound(*bucket).hue_range.unwrap_or((0.0, 360.0))
        }
        Some(HueChoice::Color(text)) => {
            let parsed = Color::parse(text.as_str());
            if parsed.is_valid() {
                let hue = parsed.to_hsv().h;
                (hue, hue)
            } else {
                log::debug!("hue constraint {text:?} did not parse; using the full wheel");
                (0.0, 360.0)
            }
        }
        None => (0.0, 360.0),
    }
}

fn pick_hue(options: &RandomOptions) -> f64 {
    let picked = random_within(hue_range(options.hue.as_ref()), options.seed);
    // Red's range extends below zero; fold negative picks back onto the
    // wheel.
    if picked < 0.0 { 360.0 + picked } else { picked }
}

fn pick_saturation(hue: f64, options: &RandomOptions) -> f64 {
    if options.hue == Some(HueChoice::Bucket(HueBucket::Monochrome)) {
        return 0.0;
    }
    if options.luminosity == Some(Luminosity::Random) {
        return random_within((0.0, 100.0), options.seed);
    }

    let (mut s_min, mut s_max) = color_info(hue).saturation_range();
    match options.luminosity {
        Some(Luminosity::Bright) => s_min = 55.0,
        Some(Luminosity::Dark) => s_min = s_max - 10.0,
        Some(Luminosity::Light) => s_max = 55.0,
        _ => {}
    }
    random_within((s_min, s_max), options.seed)
}

fn pick_brightness(hue: f64, saturation: f64, options: &RandomOptions) -> f64 {
    let mut b_min = minimum_brightness(hue, saturation);
    let mut b_max = 100.0;
    match options.luminosity {
        Some(Luminosity::Dark) => b_max = b_min + 20.0,
        Some(Luminosity::Light) => b_min = (b_max + b_min) / 2.0,
        Some(Luminosity::Random) => {
            b_min = 0.0;
            b_max = 100.0;
        }
        _ => {}
    }
    random_within((b_min, b_max), options.seed)
}

/// Interpolate the envelope's brightness floor at `saturation`. Saturations
/// outside every breakpoint segment (possible under `Luminosity::Random`
/// and for monochrome picks) have no floor.
fn minimum_brightness(hue: f64, saturation: f64) -> f64 {
    let lower_bounds = color_info(hue).lower_bounds;
    for pair in lower_bounds.windows(2) {
        let (s1, v1) = pair[0];
        let (s2, v2) = pair[1];
        if saturation >= s1 && saturation <= s2 {
            let m = (v2 - v1) / (s2 - s1);
            let b = v1 - m * s1;
            return m * saturation + b;
        }
    }
    0.0
}

/// Generate `options.count` colors (one when unset).
///
/// Seeded batches bump the seed before every color, the first included, so
/// a batch never repeats one color and stays reproducible end to end. A
/// zero seed is used as-is and is the one seed a batch cannot advance.
///
/// # Examples
///
/// ```
/// use tinct::{from_random, HueBucket, Luminosity, RandomOptions};
///
/// let options = RandomOptions {
///     seed: Some(42),
///     hue: Some(HueBucket::Blue.into()),
///     luminosity: Some(Luminosity::Bright),
///     ..Default::default()
/// };
/// let colors = from_random(options);
/// assert_eq!(colors.len(), 1);
/// assert!(colors[0].is_valid());
/// ```
#[must_use]
pub fn from_random(options: RandomOptions) -> Vec<Color> {
    if let Some(count) = options.count {
        let mut options = RandomOptions {
            count: None,
            ..options
        };
        let mut colors = Vec::with_capacity(count);
        while colors.len() < count {
            if let Some(seed) = options.seed
                && seed != 0
            {
                options.seed = Some(seed.wrapping_add(1));
            }
            colors.extend(from_random(options.clone()));
        }
        log::debug!("generated {count} random colors");
        return colors;
    }

    let h = pick_hue(&options);
    let s = pick_saturation(h, &options);
    let v = pick_brightness(h, s, &options);
    vec![Color::parse(HsvInput {
        h: h.into(),
        s: s.into(),
        v: v.into(),
        a: options.alpha.map(ChannelValue::from),
        format: None,
    })]
}
