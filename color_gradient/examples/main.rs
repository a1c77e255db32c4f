// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_color_gradient::{ColorSpace, ColorTarget, DirectGradient, Gradient,
                          GradientSegment, Interpolation, JoinedGradient, NamedColor,
                          html, term};

fn main() {
    tracing_subscriber::fmt::init();

    // Color a string uniformly.
    {
        let gold = NamedColor::Gold.as_color();
        println!(
            "{}",
            term::uniform("> Uniform gold foreground.", &gold, ColorTarget::Foreground)
        );
        println!(
            "{}",
            term::uniform("> Uniform navy background.", &NamedColor::Navy.as_color(), ColorTarget::Background)
        );
    }

    // Sweep a two-endpoint gradient across a string, in a few color spaces.
    {
        let start = NamedColor::Red.as_color();
        let end = NamedColor::Blue.as_color();
        for space in [ColorSpace::Rgb, ColorSpace::Hsv, ColorSpace::Hsl] {
            let gradient = DirectGradient::new(start, end).with_space(space);
            println!(
                "{}",
                term::gradient(
                    &format!("> Red to blue, sampled in {space}."),
                    &gradient,
                    ColorTarget::Foreground
                )
            );
        }
    }

    // The long way around the hue wheel, eased with a cubic.
    {
        let scenic = DirectGradient::new(
            NamedColor::Red.as_color(),
            NamedColor::Blue.as_color(),
        )
        .with_space(ColorSpace::Hsv)
        .with_interpolation(Interpolation::Cubic)
        .with_long_route(true);
        println!(
            "{}",
            term::gradient(
                "> Red to blue the long way: through green, not magenta.",
                &scenic,
                ColorTarget::Foreground
            )
        );
    }

    // A joined gradient with per-segment configuration.
    {
        let joined = JoinedGradient::new(
            NamedColor::Crimson.as_color(),
            &[
                GradientSegment::new(NamedColor::Gold.as_color()).with_length(1.0),
                GradientSegment::new(NamedColor::Teal.as_color())
                    .with_length(2.0)
                    .with_space(ColorSpace::Hsv),
                GradientSegment::new(NamedColor::Orchid.as_color()).with_length(1.0),
            ],
        );
        println!(
            "{}",
            term::gradient(
                "> Crimson, gold, teal, orchid: one parameter, three segments.",
                &joined,
                ColorTarget::Foreground
            )
        );
    }

    // Cycle a small palette through the text in fixed-size runs.
    {
        let palette = [
            NamedColor::Tomato.as_color(),
            NamedColor::Gold.as_color(),
            NamedColor::MediumSeaGreen.as_color(),
        ];
        println!(
            "{}",
            term::cyclic_uniform(
                "> Three colors cycling in runs of four characters.",
                4,
                ColorTarget::Foreground,
                &palette
            )
        );
    }

    // The same colors as HTML span markup.
    {
        let markup = html::uniform(
            "Uniform tomato text.",
            &NamedColor::Tomato.as_color(),
            ColorTarget::Foreground,
        )
        .expect("input has no child markup");
        println!("\n> HTML output: {markup}");
    }
}
