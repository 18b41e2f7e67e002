//! End-to-end tests for constrained random color generation.
//!
//! Seeded draws are fully deterministic, so these tests pin exact output;
//! unseeded draws are checked against their envelopes instead.
//!
//! # Running Tests
//!
//! ```bash
//! # Run all random-generation tests
//! cargo test --test e2e_random
//!
//! # Run with output
//! cargo test --test e2e_random -- --nocapture
//! ```

use tinct::prelude::*;

fn seeded(seed: u64) -> RandomOptions {
    RandomOptions {
        seed: Some(seed),
        ..Default::default()
    }
}

fn single(options: RandomOptions) -> Color {
    let mut colors = from_random(options);
    assert_eq!(colors.len(), 1, "one color expected when count is unset");
    colors.remove(0)
}

// =============================================================================
// Seeded Determinism
// =============================================================================

#[test]
fn seeded_draws_are_reproducible() {
    let first = from_random(seeded(11100));
    let second = from_random(seeded(11100));
    assert_eq!(first, second);
    assert_eq!(first[0].to_hex_string(false), "#a02be3");
}

#[test]
fn known_seeds_pin_exact_colors() {
    assert_eq!(single(seeded(42)).to_hex_string(false), "#f719b5");
    assert_eq!(single(seeded(1)).to_hex_string(false), "#aee378");
    assert_eq!(single(seeded(123_456_789)).to_hex_string(false), "#97e374");
}

#[test]
fn zero_seed_is_a_seed_like_any_other() {
    assert_eq!(single(seeded(0)).to_hex_string(false), "#cbe681");
    // Zero never advances between batch members, so the batch repeats.
    let batch = from_random(RandomOptions {
        seed: Some(0),
        count: Some(2),
        ..Default::default()
    });
    assert_eq!(batch[0].to_hex_string(false), "#cbe681");
    assert_eq!(batch[0], batch[1]);
}

// =============================================================================
// Batches
// =============================================================================

#[test]
fn batches_advance_the_seed_before_every_color() {
    let batch = from_random(RandomOptions {
        seed: Some(11100),
        count: Some(3),
        ..Default::default()
    });
    let hexes: Vec<String> = batch.iter().map(|c| c.to_hex_string(false)).collect();
    assert_eq!(hexes, ["#da24f2", "#f51ddc", "#f716a9"]);
}

#[test]
fn seeded_purple_batch_pins_the_documented_sequence() {
    let batch = from_random(RandomOptions {
        seed: Some(11100),
        count: Some(3),
        hue: Some(HueBucket::Purple.into()),
        ..Default::default()
    });
    let hexes: Vec<String> = batch.iter().map(|c| c.to_hex_string(false)).collect();
    assert_eq!(hexes, ["#9b22e6", "#9f1ceb", "#a316f0"]);
}

#[test]
fn count_zero_yields_an_empty_batch() {
    assert!(from_random(RandomOptions {
        count: Some(0),
        ..Default::default()
    })
    .is_empty());
}

#[test]
fn unseeded_batches_respect_count() {
    let batch = from_random(RandomOptions {
        count: Some(25),
        ..Default::default()
    });
    assert_eq!(batch.len(), 25);
    assert!(batch.iter().all(Color::is_valid));
}

// =============================================================================
// Hue Constraints
// =============================================================================

#[test]
fn bucket_constraints_stay_inside_their_hue_span() {
    let purple = single(RandomOptions {
        seed: Some(2026),
        hue: Some(HueBucket::Purple.into()),
        ..Default::default()
    });
    assert_eq!(purple.to_hex_string(false), "#ad03fc");
    let hue = purple.to_hsv().h.round();
    assert!((258.0..=282.0).contains(&hue), "hue {hue} outside purple");

    assert_eq!(
        single(RandomOptions {
            seed: Some(7),
            hue: Some(HueBucket::Blue.into()),
            ..Default::default()
        })
        .to_hex_string(false),
        "#5482cc"
    );
}

#[test]
fn degree_constraints_pin_the_hue_exactly() {
    let color = single(RandomOptions {
        seed: Some(314_159),
        hue: Some(200.into()),
        ..Default::default()
    });
    assert_eq!(color.to_hex_string(false), "#13a4ed");
    assert_eq!(color.to_hsv().h.round(), 200.0);

    // Fractional degrees truncate.
    assert_eq!(
        single(RandomOptions {
            seed: Some(314_159),
            hue: Some(200.9.into()),
            ..Default::default()
        })
        .to_hex_string(false),
        "#13a4ed"
    );
}

#[test]
fn out_of_range_degrees_fall_back_to_the_full_wheel() {
    let unconstrained = single(seeded(1)).to_hex_string(false);
    for degrees in [0, 360, -5, 720] {
        let color = single(RandomOptions {
            seed: Some(1),
            hue: Some(degrees.into()),
            ..Default::default()
        });
        assert_eq!(
            color.to_hex_string(false),
            unconstrained,
            "degrees {degrees} should be ignored"
        );
    }
}

#[test]
fn color_valued_hues_pin_to_that_hue() {
    assert_eq!(
        single(RandomOptions {
            seed: Some(1),
            hue: Some("hotpink".into()),
            ..Default::default()
        })
        .to_hex_string(false),
        "#e388b6"
    );
    assert_eq!(
        single(RandomOptions {
            seed: Some(777),
            hue: Some("goldenrod".into()),
            ..Default::default()
        })
        .to_hex_string(false),
        "#ebd298"
    );
    // Unparseable hue strings mean no constraint at all.
    assert_eq!(
        single(RandomOptions {
            seed: Some(1),
            hue: Some("notacolor".into()),
            ..Default::default()
        })
        .to_hex_string(false),
        single(seeded(1)).to_hex_string(false)
    );
}

#[test]
fn hue_strings_resolve_by_kind() {
    assert_eq!(HueChoice::from("200"), HueChoice::Degrees(200.0));
    assert_eq!(HueChoice::from(" 42abc"), HueChoice::Degrees(42.0));
    assert_eq!(HueChoice::from("purple"), HueChoice::Bucket(HueBucket::Purple));
    // Bucket names are matched verbatim; anything else is a color lookup.
    assert_eq!(HueChoice::from("Red"), HueChoice::Color("Red".to_string()));
    assert_eq!(
        HueChoice::from("#ff0000"),
        HueChoice::Color("#ff0000".to_string())
    );
}

// =============================================================================
// Luminosity Constraints
// =============================================================================

#[test]
fn luminosity_registers_pin_exact_seeded_output() {
    let with_luminosity = |luminosity| {
        single(RandomOptions {
            seed: Some(42),
            luminosity: Some(luminosity),
            ..Default::default()
        })
        .to_hex_string(false)
    };
    assert_eq!(with_luminosity(Luminosity::Bright), "#f70fb2");
    assert_eq!(with_luminosity(Luminosity::Dark), "#e805a4");
    assert_eq!(with_luminosity(Luminosity::Light), "#fc7cd6");
    assert_eq!(with_luminosity(Luminosity::Random), "#e01ba5");
}

#[test]
fn dark_caps_brightness_and_light_raises_it() {
    let dark = single(RandomOptions {
        seed: Some(2026),
        hue: Some(HueBucket::Purple.into()),
        luminosity: Some(Luminosity::Dark),
        ..Default::default()
    });
    assert_eq!(dark.to_hex_string(false), "#6d029e");
    let light_batch = from_random(RandomOptions {
        seed: Some(500),
        count: Some(4),
        luminosity: Some(Luminosity::Light),
        ..Default::default()
    });
    let hexes: Vec<String> = light_batch.iter().map(|c| c.to_hex_string(false)).collect();
    assert_eq!(hexes, ["#f0faa5", "#dbfaa2", "#c3f79e", "#abf79c"]);
    for color in &light_batch {
        assert!(
            color.to_hsv().v > dark.to_hsv().v,
            "light colors sit above dark ones"
        );
    }
}

#[test]
fn monochrome_bucket_is_grey() {
    let grey = single(RandomOptions {
        seed: Some(42),
        hue: Some(HueBucket::Monochrome.into()),
        ..Default::default()
    });
    assert_eq!(grey.to_hex_string(false), "#e0e0e0");
    assert_eq!(grey.to_hsv().s, 0.0);
}

#[test]
fn bright_yellow_combination() {
    assert_eq!(
        single(RandomOptions {
            seed: Some(777),
            hue: Some(HueBucket::Yellow.into()),
            luminosity: Some(Luminosity::Bright),
            ..Default::default()
        })
        .to_hex_string(false),
        "#e0c653"
    );
}

// =============================================================================
// Alpha
// =============================================================================

#[test]
fn alpha_option_carries_into_every_color() {
    assert_eq!(
        single(RandomOptions {
            seed: Some(42),
            alpha: Some(0.25),
            ..Default::default()
        })
        .to_rgb_string(),
        "rgba(247, 25, 181, 0.25)"
    );

    let batch = from_random(RandomOptions {
        seed: Some(8),
        count: Some(2),
        hue: Some(HueBucket::Green.into()),
        alpha: Some(0.5),
        ..Default::default()
    });
    let rgbas: Vec<String> = batch.iter().map(Color::to_rgb_string).collect();
    assert_eq!(rgbas, ["rgba(70, 227, 91, 0.5)", "rgba(64, 227, 99, 0.5)"]);
}

// =============================================================================
// Unseeded Envelopes
// =============================================================================

#[test]
fn unseeded_draws_respect_the_constraint_envelopes() {
    for _ in 0..50 {
        let bright = single(RandomOptions {
            luminosity: Some(Luminosity::Bright),
            ..Default::default()
        });
        assert!(bright.is_valid());
        let s = (bright.to_hsv().s * 100.0).round();
        assert!(s >= 55.0, "bright saturation {s} below the floor");

        let blue = single(RandomOptions {
            hue: Some(HueBucket::Blue.into()),
            ..Default::default()
        });
        let hue = blue.to_hsv().h.round();
        assert!((179.0..=257.0).contains(&hue), "hue {hue} outside blue");
    }
}

#[test]
fn color_random_yields_a_valid_opaque_color() {
    for _ in 0..20 {
        let color = Color::random();
        assert!(color.is_valid());
        assert_eq!(color.alpha(), 1.0);
    }
}
