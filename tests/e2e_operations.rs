//! End-to-end tests for color operations: transforms, harmonies, blending,
//! and the WCAG2 readability helpers.
//!
//! # Running Tests
//!
//! ```bash
//! # Run all operation tests
//! cargo test --test e2e_operations
//!
//! # Run with output
//! cargo test --test e2e_operations -- --nocapture
//! ```

use tinct::prelude::*;

// =============================================================================
// Lightness and Saturation Transforms
// =============================================================================

#[test]
fn lighten_and_darken_move_hsl_lightness() {
    let red = Color::parse("red");
    assert_eq!(red.lighten(10.0).to_hex_string(false), "#ff3333");
    assert_eq!(red.darken(10.0).to_hex_string(false), "#cc0000");
    // Amounts clamp at the ends of the lightness scale.
    assert_eq!(red.lighten(100.0).to_hex_string(false), "#ffffff");
    assert_eq!(red.darken(100.0).to_hex_string(false), "#000000");
}

#[test]
fn saturate_and_desaturate_move_hsl_saturation() {
    let base = Color::parse("hsl(0, 50%, 50%)");
    assert_eq!(base.saturate(10.0).to_hsl_string(), "hsl(0, 60%, 50%)");
    assert_eq!(base.desaturate(10.0).to_hsl_string(), "hsl(0, 40%, 50%)");
    assert_eq!(
        Color::parse("red").desaturate(20.0).to_hex_string(false),
        "#e61919"
    );
}

#[test]
fn greyscale_removes_all_saturation() {
    let grey = Color::parse("red").greyscale();
    assert_eq!(grey.to_hex_string(false), "#808080");
    assert_eq!(grey.to_hsl().s, 0.0);
    assert_eq!(
        Color::parse("hsl(251, 100%, 38%)").greyscale().to_hex_string(false),
        "#616161"
    );
}

#[test]
fn transforms_keep_alpha_and_adopt_the_hsl_format() {
    let result = Color::parse("rgba(255, 0, 0, 0.5)").lighten(10.0);
    assert_eq!(result.to_rgb_string(), "rgba(255, 51, 51, 0.5)");
    assert_eq!(result.format(), Format::Hsl);
}

// =============================================================================
// Brighten
// =============================================================================

#[test]
fn brighten_shifts_raw_rgb_channels() {
    let red = Color::parse("red");
    // The saturated channel pins at 255 while the others rise.
    assert_eq!(red.brighten(50.0).to_hex_string(false), "#ff7f7f");
    // Negative amounts darken; the tie in 127.5 resolves upward, leaving 7f.
    assert_eq!(red.brighten(-50.0).to_hex_string(false), "#7f0000");

    assert_eq!(
        Color::parse("#123").brighten(10.0).to_hex_string(false),
        "#2a3b4c"
    );
    assert_eq!(
        Color::parse("black").brighten(10.0).to_hex_string(false),
        "#191919"
    );
    assert_eq!(
        Color::parse("white").brighten(10.0).to_hex_string(false),
        "#ffffff"
    );
}

// =============================================================================
// Hue Rotation
// =============================================================================

#[test]
fn spin_rotates_the_hue_in_degrees() {
    let red = Color::parse("red");
    assert_eq!(red.spin(90.0).to_hex_string(false), "#80ff00");
    assert_eq!(red.spin(-90.0).to_hex_string(false), "#7f00ff");
    assert_eq!(red.spin(360.0).to_hex_string(false), "#ff0000");
    assert_eq!(red.spin(0.0).to_hex_string(false), "#ff0000");
}

#[test]
fn spin_preserves_alpha() {
    assert_eq!(
        Color::parse("rgba(255, 0, 0, 0.5)").spin(90.0).to_rgb_string(),
        "rgba(128, 255, 0, 0.5)"
    );
}

#[test]
fn complement_sits_across_the_wheel() {
    assert_eq!(Color::parse("red").complement().to_hex_string(false), "#00ffff");
    assert_eq!(
        Color::parse("#008080").complement().to_hex_string(false),
        "#800000"
    );
    // Two complements land back on the original.
    assert!(equals(Color::parse("red").complement().complement(), "red"));
}

// =============================================================================
// Harmonies
// =============================================================================

fn hexes(colors: &[Color]) -> Vec<String> {
    colors.iter().map(|c| c.to_hex_string(false)).collect()
}

#[test]
fn triad_steps_the_wheel_in_thirds() {
    assert_eq!(
        hexes(&Color::parse("red").triad()),
        ["#ff0000", "#00ff00", "#0000ff"]
    );
    assert_eq!(
        hexes(&Color::parse("#9b59b6").triad()),
        ["#9b59b6", "#b69b59", "#59b69b"]
    );
}

#[test]
fn tetrad_steps_the_wheel_in_quarters() {
    assert_eq!(
        hexes(&Color::parse("red").tetrad()),
        ["#ff0000", "#80ff00", "#00ffff", "#7f00ff"]
    );
}

#[test]
fn split_complement_flanks_the_opposite_hue() {
    assert_eq!(
        hexes(&Color::parse("red").split_complement()),
        ["#ff0000", "#ccff00", "#0066ff"]
    );
}

#[test]
fn analogous_walks_neighboring_hues() {
    // The walk starts half the span back from the base hue; wrapping can
    // revisit the base itself, and that duplicate is kept.
    assert_eq!(
        hexes(&Color::parse("red").analogous(6, 30)),
        ["#ff0000", "#ff0066", "#ff0033", "#ff0000", "#ff3300", "#ff6600"]
    );
    assert_eq!(
        hexes(&Color::parse("#2400c2").analogous(6, 30)),
        ["#2400c2", "#002ac2", "#0003c2", "#2400c2", "#4b00c2", "#7200c2"]
    );
}

#[test]
fn monochromatic_walks_value_and_wraps() {
    assert_eq!(
        hexes(&Color::parse("red").monochromatic(6)),
        ["#ff0000", "#2a0000", "#550000", "#800000", "#aa0000", "#d40000"]
    );
    assert_eq!(
        hexes(&Color::parse("#2400c2").monochromatic(6)),
        ["#2400c2", "#2c00ec", "#040018", "#0c0042", "#14006d", "#1c0097"]
    );
}

#[test]
fn harmony_alpha_handling_differs_by_family() {
    let translucent = Color::parse("rgba(255, 0, 0, 0.5)");

    // Wheel harmonies rebuild companions opaque; the receiver keeps its
    // alpha because it is cloned, not rebuilt.
    let triad = translucent.triad();
    assert_eq!(triad[0].to_rgb_string(), "rgba(255, 0, 0, 0.5)");
    assert_eq!(triad[1].to_rgb_string(), "rgb(0, 255, 0)");
    assert_eq!(triad[2].to_rgb_string(), "rgb(0, 0, 255)");

    // Analogous mutates the receiver's own projection, so alpha rides along.
    let analogous = translucent.analogous(3, 30);
    assert!(analogous.iter().all(|c| c.alpha() == 0.5));

    // Monochromatic rebuilds every member, the receiver included.
    let mono = translucent.monochromatic(3);
    assert!(mono.iter().all(|c| c.alpha() == 1.0));
}

// =============================================================================
// Mix
// =============================================================================

#[test]
fn mix_lerps_every_rgb_channel() {
    let red = Color::parse("red");
    assert_eq!(red.mix("blue", 50.0).to_hex_string(false), "#800080");
    assert_eq!(red.mix("blue", 25.0).to_hex_string(false), "#bf0040");
    assert_eq!(
        Color::parse("white").mix("black", 50.0).to_hex_string(false),
        "#808080"
    );
}

#[test]
fn mix_endpoints_reproduce_the_inputs() {
    let red = Color::parse("red");
    assert_eq!(red.mix("blue", 0.0).to_hex_string(false), "#ff0000");
    assert_eq!(red.mix("blue", 100.0).to_hex_string(false), "#0000ff");
}

#[test]
fn mix_lerps_alpha_too() {
    let result = mix("rgba(255, 0, 0, 0)", "rgba(0, 0, 255, 1)", 50.0);
    assert_eq!(result.alpha(), 0.5);
    assert_eq!(result.to_rgb_string(), "rgba(128, 0, 128, 0.5)");
}

#[test]
fn free_function_mix_matches_the_method() {
    assert_eq!(
        mix("red", "blue", 30.0).to_hex_string(false),
        Color::parse("red").mix("blue", 30.0).to_hex_string(false)
    );
}

// =============================================================================
// Alpha Adjustment
// =============================================================================

#[test]
fn with_alpha_replaces_only_the_alpha() {
    let half = Color::parse("red").with_alpha(0.5);
    assert_eq!(half.to_rgb_string(), "rgba(255, 0, 0, 0.5)");
    // Named format plus translucency falls back to the rgba string.
    assert_eq!(half.to_string(), "rgba(255, 0, 0, 0.5)");
    assert_eq!(half.format(), Format::Name);

    // A named color faded to nothing displays as the transparent keyword.
    assert_eq!(Color::parse("red").with_alpha(0.0).to_string(), "transparent");

    // Out-of-range values normalize to opaque.
    assert_eq!(
        Color::parse("red").with_alpha(5.0).to_rgb_string(),
        "rgb(255, 0, 0)"
    );
    assert_eq!(
        Color::parse("#ff000080").with_alpha(1.0).to_rgb_string(),
        "rgb(255, 0, 0)"
    );
}

// =============================================================================
// Filter Strings
// =============================================================================

#[test]
fn filter_string_uses_argb_hex() {
    let red = Color::parse("red");
    assert_eq!(
        red.to_filter_string(None),
        "progid:DXImageTransform.Microsoft.gradient(startColorstr=#ffff0000,endColorstr=#ffff0000)"
    );
    assert_eq!(
        red.to_filter_string(Some("blue".into())),
        "progid:DXImageTransform.Microsoft.gradient(startColorstr=#ffff0000,endColorstr=#ff0000ff)"
    );
    assert_eq!(
        Color::parse("rgba(0, 0, 255, 0.5)").to_filter_string(None),
        "progid:DXImageTransform.Microsoft.gradient(startColorstr=#800000ff,endColorstr=#800000ff)"
    );
}

#[test]
fn gradient_option_switches_the_filter_mode() {
    let color = Color::parse_with(
        "red",
        ParseOptions {
            gradient_type: true,
            ..Default::default()
        },
    );
    assert_eq!(
        color.to_filter_string(None),
        "progid:DXImageTransform.Microsoft.gradient(GradientType = 1, startColorstr=#ffff0000,endColorstr=#ffff0000)"
    );
}

// =============================================================================
// Brightness and Luminance
// =============================================================================

#[test]
fn brightness_follows_the_aert_weights() {
    assert_eq!(Color::parse("white").brightness(), 255.0);
    assert_eq!(Color::parse("black").brightness(), 0.0);
    assert!((Color::parse("red").brightness() - 76.245).abs() < 1e-9);
    assert!((Color::parse("#2400c2").brightness() - 32.88).abs() < 1e-9);
}

#[test]
fn dark_and_light_split_at_the_brightness_midpoint() {
    assert!(Color::parse("red").is_dark());
    assert!(Color::parse("#2400c2").is_dark());
    assert!(Color::parse("yellow").is_light());
    assert!(Color::parse("white").is_light());
    assert!(Color::parse("black").is_dark());
}

#[test]
fn luminance_is_gamma_linearized() {
    assert_eq!(Color::parse("white").luminance(), 1.0);
    assert_eq!(Color::parse("black").luminance(), 0.0);
    // A fully saturated primary contributes exactly its weight.
    assert!((Color::parse("red").luminance() - 0.2126).abs() < 1e-12);
    assert!((Color::parse("#2400c2").luminance() - 0.042_701_098_630_904_6).abs() < 1e-12);
}

// =============================================================================
// Readability
// =============================================================================

#[test]
fn contrast_ratio_hits_the_wcag_extremes() {
    assert_eq!(readability("black", "white"), 21.0);
    assert_eq!(readability("white", "white"), 1.0);
    assert_eq!(readability("white", "black"), readability("black", "white"));
}

#[test]
fn known_contrast_pairs() {
    assert!((readability("#777777", "#ffffff") - 4.478_089_453_577_214).abs() < 1e-9);
    assert!((readability("#ff0088", "#5c1a72") - 3.037_984_379_315_746).abs() < 1e-9);
    assert!((readability("#123456", "#ffffff") - 12.717_304_079_982_272).abs() < 1e-9);
}

#[test]
fn is_readable_applies_the_level_and_size_thresholds() {
    // #777777 on white sits at 4.478: below AA small (4.5), above AA large
    // (3), below AAA large (4.5 exactly is the bar, 4.478 misses it).
    let pair = ("#777777", "#ffffff");
    let check = |level, size| {
        is_readable(pair.0, pair.1, Wcag2Options { level, size })
    };
    assert!(!check(Wcag2Level::Aa, Wcag2Size::Small));
    assert!(check(Wcag2Level::Aa, Wcag2Size::Large));
    assert!(!check(Wcag2Level::Aaa, Wcag2Size::Small));
    assert!(!check(Wcag2Level::Aaa, Wcag2Size::Large));

    assert!(is_readable("black", "white", Wcag2Options::default()));
    assert!(!is_readable("red", "white", Wcag2Options::default()));
}

#[test]
fn most_readable_picks_the_highest_contrast_candidate() {
    let best = most_readable(
        "#000",
        ["#f00", "#0f0", "#00f"],
        MostReadableOptions::default(),
    )
    .expect("candidates were given");
    assert_eq!(best.to_hex_string(false), "#00ff00");
}

#[test]
fn most_readable_falls_back_to_white_or_black() {
    // Both candidates are hopeless against #123456; white wins the retry.
    let options = MostReadableOptions {
        include_fallback_colors: true,
        ..Default::default()
    };
    let best = most_readable("#123456", ["#123a5b", "#2a4a66"], options)
        .expect("fallback always yields a color");
    assert_eq!(best.to_hex_string(false), "#ffffff");

    // Without the fallback the best of the bad bunch is returned.
    let best = most_readable(
        "#123456",
        ["#123a5b", "#2a4a66"],
        MostReadableOptions::default(),
    )
    .expect("candidates were given");
    assert_eq!(best.to_hex_string(false), "#2a4a66");
}

#[test]
fn most_readable_with_no_candidates() {
    assert!(most_readable("#123456", Vec::<&str>::new(), MostReadableOptions::default()).is_none());
    let fallback = most_readable(
        "#123456",
        Vec::<&str>::new(),
        MostReadableOptions {
            include_fallback_colors: true,
            ..Default::default()
        },
    )
    .expect("fallback always yields a color");
    assert_eq!(fallback.to_hex_string(false), "#ffffff");
}
