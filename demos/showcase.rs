//! Tour of the tinct API: parsing, serialization, transforms, and palettes.
//!
//! Run with: `cargo run --example showcase`

use tinct::prelude::*;

fn main() {
    // ========================================================================
    // Parsing
    // ========================================================================
    println!("\n=== Parsing ===\n");

    for input in [
        "rebeccapurple",
        "#1e90ff",
        "f09",
        "rgb(255, 99, 71)",
        "rgba 36 0 194 .8",
        "hsl(120, 60%, 70%)",
        "hsv(251, 89%, 92%)",
        "not a color",
    ] {
        let color = Color::parse(input);
        if color.is_valid() {
            println!("{input:<22} -> {:<22} {:?}", color.to_rgb_string(), color.format());
        } else {
            println!("{input:<22} -> (invalid)");
        }
    }

    // ========================================================================
    // Serializers
    // ========================================================================
    println!("\n=== Serializers ===\n");

    let color = Color::parse("rgba(64, 191, 191, 0.5)");
    println!("hex    {}", color.to_hex_string(false));
    println!("hex8   {}", color.to_hex8_string(false));
    println!("rgb    {}", color.to_rgb_string());
    println!("prgb   {}", color.to_percentage_rgb_string());
    println!("hsl    {}", color.to_hsl_string());
    println!("hsv    {}", color.to_hsv_string());
    println!("filter {}", color.to_filter_string(None));

    // ========================================================================
    // Transforms
    // ========================================================================
    println!("\n=== Transforms ===\n");

    let base = Color::parse("#1e90ff");
    println!("base          {}", base.to_hex_string(false));
    println!("lighten 20    {}", base.lighten(20.0).to_hex_string(false));
    println!("darken 20     {}", base.darken(20.0).to_hex_string(false));
    println!("desaturate 30 {}", base.desaturate(30.0).to_hex_string(false));
    println!("greyscale     {}", base.greyscale().to_hex_string(false));
    println!("spin 120      {}", base.spin(120.0).to_hex_string(false));
    println!("complement    {}", base.complement().to_hex_string(false));
    println!("mix tomato    {}", base.mix("tomato", 50.0).to_hex_string(false));

    // ========================================================================
    // Harmonies
    // ========================================================================
    println!("\n=== Harmonies ===\n");

    let seed_color = Color::parse("#9b59b6");
    print_palette("triad", &seed_color.triad());
    print_palette("tetrad", &seed_color.tetrad());
    print_palette("split", &seed_color.split_complement());
    print_palette("analogous", &seed_color.analogous(6, 30));
    print_palette("monochromatic", &seed_color.monochromatic(6));

    // ========================================================================
    // Readability
    // ========================================================================
    println!("\n=== Readability ===\n");

    for (text, background) in [("#ffffff", "#2400c2"), ("#777777", "#ffffff"), ("#000000", "#9b59b6")] {
        let ratio = readability(text, background);
        let passes = is_readable(text, background, Wcag2Options::default());
        println!("{text} on {background}: contrast {ratio:.2}, AA small {passes}");
    }

    let best = most_readable(
        "#123456",
        ["#2e2e2e", "#999999", "#f4f4f4"],
        MostReadableOptions::default(),
    );
    if let Some(best) = best {
        println!("best on #123456: {}", best.to_hex_string(false));
    }

    // ========================================================================
    // Random Palettes
    // ========================================================================
    println!("\n=== Random Palettes ===\n");

    let seeded = from_random(RandomOptions {
        seed: Some(9000),
        count: Some(5),
        luminosity: Some(Luminosity::Bright),
        ..RandomOptions::default()
    });
    print_palette("seeded bright", &seeded);

    let blues = from_random(RandomOptions {
        count: Some(5),
        hue: Some(HueBucket::Blue.into()),
        luminosity: Some(Luminosity::Light),
        ..RandomOptions::default()
    });
    print_palette("light blues", &blues);

    println!("one-off       {}", Color::random().to_hex_string(false));
}

fn print_palette(label: &str, colors: &[Color]) {
    let joined = colors
        .iter()
        .map(|color| color.to_hex_string(false))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{label:<14}{joined}");
}
