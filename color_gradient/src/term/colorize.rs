// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color strings of text for the console with ANSI truecolor escape sequences.
//!
//! All functions here tolerate pre-existing escape sequences embedded in the input:
//! anything from `ESC` through the terminating `m` is copied through verbatim and
//! never recolored. A reset token already present in the input is stripped up front
//! so it cannot cut a freshly applied color short.

use super::SgrCode;
use crate::{color::Color, gradient::Gradient};

/// Constant for resetting the console color.
pub const RESET_TOKEN: &str = "\x1b[0m";

const ESC: char = '\u{1b}';

/// Whether a color applies to the text or to the cell behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Foreground,
    Background,
}

impl ColorTarget {
    /// The escape-sequence token that applies `color` to this target, using 8-bit
    /// channel values.
    #[must_use]
    pub fn token(&self, color: &Color) -> String {
        match self {
            ColorTarget::Foreground => {
                SgrCode::ForegroundRGB(color.red_u8(), color.green_u8(), color.blue_u8())
                    .to_string()
            }
            ColorTarget::Background => {
                SgrCode::BackgroundRGB(color.red_u8(), color.green_u8(), color.blue_u8())
                    .to_string()
            }
        }
    }
}

/// Generates the token used in a console message to color the message text.
#[must_use]
pub fn color_fg_token(color: &Color) -> String {
    ColorTarget::Foreground.token(color)
}

/// Generates the token used in a console message to color the background.
#[must_use]
pub fn color_bg_token(color: &Color) -> String {
    ColorTarget::Background.token(color)
}

/// Strip the first pre-existing reset token so re-coloring cannot be cut short.
fn strip_reset(text: &str) -> String { text.replacen(RESET_TOKEN, "", 1) }

/// The number of characters within the given string that may be colored, ie:
/// everything outside embedded escape sequences.
fn colorable_count(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == ESC {
            for esc_ch in chars.by_ref() {
                if esc_ch == 'm' {
                    break;
                }
            }
        } else {
            count += 1;
        }
    }
    count
}

/// Copy an embedded escape sequence (already started by `esc`) through verbatim.
fn pass_through_escape(
    result: &mut String,
    esc: char,
    chars: &mut std::str::Chars<'_>,
) {
    result.push(esc);
    for esc_ch in chars.by_ref() {
        result.push(esc_ch);
        if esc_ch == 'm' {
            break;
        }
    }
}

/// Color a given string of text a given color.
#[must_use]
pub fn uniform(text: &str, color: &Color, target: ColorTarget) -> String {
    let text = strip_reset(text);
    let mut result = target.token(color);
    result.push_str(&text);
    result.push_str(RESET_TOKEN);
    result
}

/// Color a given string a given sequence of colors in a cyclical order, one palette
/// entry per run of `segment_length` visible characters. The palette must not be
/// empty.
#[must_use]
pub fn cyclic_uniform(
    text: &str,
    segment_length: usize,
    target: ColorTarget,
    colors: &[Color],
) -> String {
    let text = strip_reset(text);
    let mut result = String::new();
    let mut visible = 0;

    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == ESC {
            pass_through_escape(&mut result, ch, &mut chars);
            continue;
        }
        let color = &colors[(visible / segment_length) % colors.len()];
        result.push_str(&target.token(color));
        result.push(ch);
        visible += 1;
    }

    result.push_str(RESET_TOKEN);
    result
}

/// Color a given string according to a given gradient, sampled left to right across
/// the visible characters.
#[must_use]
pub fn gradient(text: &str, gradient: &dyn Gradient, target: ColorTarget) -> String {
    tracing::debug!(len = text.len(), "applying gradient to console text");
    let text = strip_reset(text);
    let colorable = colorable_count(&text);
    let mut result = String::new();
    let mut visible = 0;

    // Walk through the message, skipping any already existing color modifiers.
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == ESC {
            pass_through_escape(&mut result, ch, &mut chars);
            continue;
        }
        let color = gradient.get_at(visible as f64 / colorable as f64);
        result.push_str(&target.token(&color));
        result.push(ch);
        visible += 1;
    }

    result.push_str(RESET_TOKEN);
    result
}

/// Color a given string a given sequence of gradients in a cyclical order: each run
/// of `segment_length` visible characters sweeps one gradient end to end. The list
/// must not be empty.
#[must_use]
pub fn cyclic_gradient(
    text: &str,
    segment_length: usize,
    target: ColorTarget,
    gradients: &[&dyn Gradient],
) -> String {
    let text = strip_reset(text);
    let mut result = String::new();
    let mut visible = 0;

    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == ESC {
            pass_through_escape(&mut result, ch, &mut chars);
            continue;
        }
        let index = (visible / segment_length) % gradients.len();
        let local_t = (visible % segment_length) as f64 / segment_length as f64;
        result.push_str(&target.token(&gradients[index].get_at(local_t)));
        result.push(ch);
        visible += 1;
    }

    result.push_str(RESET_TOKEN);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::{Color, NamedColor},
                gradient::DirectGradient};
    use pretty_assertions::assert_eq;

    #[test]
    fn uniform_wraps_with_token_and_reset() {
        let blue = NamedColor::Blue.as_color();
        let result = uniform("hello", &blue, ColorTarget::Foreground);
        assert_eq!(result, "\x1b[38;2;0;0;255mhello\x1b[0m");
    }

    #[test]
    fn uniform_background_uses_the_48_code() {
        let red = NamedColor::Red.as_color();
        let result = uniform("x", &red, ColorTarget::Background);
        assert_eq!(result, "\x1b[48;2;255;0;0mx\x1b[0m");
    }

    #[test]
    fn uniform_strips_embedded_reset_but_keeps_other_sequences() {
        let blue = NamedColor::Blue.as_color();
        let result = uniform("\x1b[31mRED\x1b[0m", &blue, ColorTarget::Foreground);
        assert_eq!(result, "\x1b[38;2;0;0;255m\x1b[31mRED\x1b[0m");
    }

    #[test]
    fn cyclic_uniform_cycles_through_the_palette() {
        let palette = [NamedColor::Red.as_color(), NamedColor::Blue.as_color()];
        let result = cyclic_uniform("abcd", 1, ColorTarget::Foreground, &palette);
        assert_eq!(
            result,
            "\x1b[38;2;255;0;0ma\x1b[38;2;0;0;255mb\
             \x1b[38;2;255;0;0mc\x1b[38;2;0;0;255md\x1b[0m"
        );
    }

    #[test]
    fn cyclic_uniform_honors_segment_length() {
        let palette = [NamedColor::Red.as_color(), NamedColor::Blue.as_color()];
        let result = cyclic_uniform("abcd", 2, ColorTarget::Foreground, &palette);
        assert_eq!(
            result,
            "\x1b[38;2;255;0;0ma\x1b[38;2;255;0;0mb\
             \x1b[38;2;0;0;255mc\x1b[38;2;0;0;255md\x1b[0m"
        );
    }

    #[test]
    fn gradient_samples_left_to_right() {
        let ramp = DirectGradient::new(
            Color::from_u8(0, 0, 0),
            Color::from_u8(200, 0, 0),
        );
        let result = gradient("ab", &ramp, ColorTarget::Foreground);
        // Two visible chars sample at t = 0 and t = 0.5.
        assert_eq!(result, "\x1b[38;2;0;0;0ma\x1b[38;2;100;0;0mb\x1b[0m");
    }

    #[test]
    fn gradient_passes_embedded_sequences_through_uncolored() {
        let ramp = DirectGradient::new(
            Color::from_u8(0, 0, 0),
            Color::from_u8(200, 0, 0),
        );
        let result = gradient("a\x1b[1mb", &ramp, ColorTarget::Foreground);
        assert_eq!(
            result,
            "\x1b[38;2;0;0;0ma\x1b[1m\x1b[38;2;100;0;0mb\x1b[0m"
        );
    }

    #[test]
    fn cyclic_gradient_sweeps_each_gradient_per_segment() {
        let ramp = DirectGradient::new(
            Color::from_u8(0, 0, 0),
            Color::from_u8(200, 0, 0),
        );
        let gradients: [&dyn Gradient; 1] = [&ramp];
        let result = cyclic_gradient("abcd", 2, ColorTarget::Foreground, &gradients);
        // Each 2-char segment restarts the sweep: t = 0, 0.5, 0, 0.5.
        assert_eq!(
            result,
            "\x1b[38;2;0;0;0ma\x1b[38;2;100;0;0mb\
             \x1b[38;2;0;0;0mc\x1b[38;2;100;0;0md\x1b[0m"
        );
    }
}
