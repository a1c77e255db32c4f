// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HTML/CSS rendering: inline `rgba(...)` style declarations and styled `<span>`
//! markup for colors and gradients.
//!
//! There is no DOM here. Each function takes the target element's current inner HTML
//! and returns the replacement markup. Coloring requires the element to hold plain
//! text only: an input that already contains child markup (any `<`) fails with
//! [`CommonErrorType::ContainerNotEmpty`] before anything is emitted, and the caller
//! must clear the element first.

use crate::{color::Color,
            common::{CommonError, CommonErrorType, CommonResult},
            gradient::Gradient,
            term::ColorTarget};

/// Generates the inline CSS declaration that applies `color` to the given target,
/// using 8-bit channels and a float alpha, eg: `color: rgba(0, 0, 255, 1);`.
#[must_use]
pub fn style_decl(color: &Color, target: ColorTarget) -> String {
    let property = match target {
        ColorTarget::Foreground => "color",
        ColorTarget::Background => "background-color",
    };
    format!(
        "{property}: rgba({}, {}, {}, {});",
        color.red_u8(),
        color.green_u8(),
        color.blue_u8(),
        color.alpha()
    )
}

/// Fail when the container already holds child markup.
fn ensure_empty_container(inner_html: &str) -> CommonResult<()> {
    if inner_html.contains('<') {
        return CommonError::new_error_result(
            CommonErrorType::ContainerNotEmpty,
            "element must be empty before coloring",
        );
    }
    Ok(())
}

/// Minimal text escaping for re-emission inside a span. `<` cannot occur (the
/// container check rejects it), so only `&` and `>` need rewriting.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('>', "&gt;")
}

fn span(style: &str, text: &str) -> String {
    format!("<span style=\"{style}\">{text}</span>")
}

/// Wrap the element's text in a single styled span.
///
/// # Errors
///
/// Returns [`CommonErrorType::ContainerNotEmpty`] when the input already contains
/// child markup.
pub fn uniform(
    inner_html: &str,
    color: &Color,
    target: ColorTarget,
) -> CommonResult<String> {
    ensure_empty_container(inner_html)?;
    Ok(span(&style_decl(color, target), &escape_text(inner_html)))
}

/// Replace the element's text with one styled span per character, cycling through
/// the palette one entry per run of `segment_length` characters. The palette must
/// not be empty.
///
/// # Errors
///
/// Returns [`CommonErrorType::ContainerNotEmpty`] when the input already contains
/// child markup.
pub fn cyclic_uniform(
    inner_html: &str,
    segment_length: usize,
    target: ColorTarget,
    colors: &[Color],
) -> CommonResult<String> {
    ensure_empty_container(inner_html)?;
    let mut result = String::new();
    for (i, ch) in inner_html.chars().enumerate() {
        let color = &colors[(i / segment_length) % colors.len()];
        result.push_str(&span(
            &style_decl(color, target),
            &escape_text(&ch.to_string()),
        ));
    }
    Ok(result)
}

/// Replace the element's text with one styled span per character, sampling the
/// gradient left to right.
///
/// # Errors
///
/// Returns [`CommonErrorType::ContainerNotEmpty`] when the input already contains
/// child markup.
pub fn gradient(
    inner_html: &str,
    gradient: &dyn Gradient,
    target: ColorTarget,
) -> CommonResult<String> {
    ensure_empty_container(inner_html)?;
    tracing::debug!(len = inner_html.len(), "applying gradient to element text");
    let char_count = inner_html.chars().count();
    let mut result = String::new();
    for (i, ch) in inner_html.chars().enumerate() {
        let color = gradient.get_at(i as f64 / char_count as f64);
        result.push_str(&span(
            &style_decl(&color, target),
            &escape_text(&ch.to_string()),
        ));
    }
    Ok(result)
}

/// Replace the element's text with one styled span per character, cycling through
/// the gradients: each run of `segment_length` characters sweeps one gradient end to
/// end. The list must not be empty.
///
/// # Errors
///
/// Returns [`CommonErrorType::ContainerNotEmpty`] when the input already contains
/// child markup.
pub fn cyclic_gradient(
    inner_html: &str,
    segment_length: usize,
    target: ColorTarget,
    gradients: &[&dyn Gradient],
) -> CommonResult<String> {
    ensure_empty_container(inner_html)?;
    let mut result = String::new();
    for (i, ch) in inner_html.chars().enumerate() {
        let index = (i / segment_length) % gradients.len();
        let local_t = (i % segment_length) as f64 / segment_length as f64;
        result.push_str(&span(
            &style_decl(&gradients[index].get_at(local_t), target),
            &escape_text(&ch.to_string()),
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::NamedColor, gradient::DirectGradient};
    use pretty_assertions::assert_eq;

    #[test]
    fn style_decl_formats_rgba_with_float_alpha() {
        let color = NamedColor::Blue.as_color().with_alpha(0.5);
        assert_eq!(
            style_decl(&color, ColorTarget::Foreground),
            "color: rgba(0, 0, 255, 0.5);"
        );
        assert_eq!(
            style_decl(&color, ColorTarget::Background),
            "background-color: rgba(0, 0, 255, 0.5);"
        );
    }

    #[test]
    fn uniform_wraps_text_in_one_span() {
        let result =
            uniform("hi", &NamedColor::Red.as_color(), ColorTarget::Foreground)
                .unwrap();
        assert_eq!(
            result,
            "<span style=\"color: rgba(255, 0, 0, 1);\">hi</span>"
        );
    }

    #[test]
    fn non_empty_container_fails() {
        let result = uniform(
            "<span>already colored</span>",
            &NamedColor::Red.as_color(),
            ColorTarget::Foreground,
        );
        assert!(result.is_err());
    }

    #[test]
    fn text_is_escaped_on_reemission() {
        let result =
            uniform("a & b", &NamedColor::Red.as_color(), ColorTarget::Foreground)
                .unwrap();
        assert!(result.contains("a &amp; b"));
    }

    #[test]
    fn cyclic_uniform_emits_one_span_per_character() {
        let palette = [NamedColor::Red.as_color(), NamedColor::Blue.as_color()];
        let result =
            cyclic_uniform("ab", 1, ColorTarget::Foreground, &palette).unwrap();
        assert_eq!(
            result,
            "<span style=\"color: rgba(255, 0, 0, 1);\">a</span>\
             <span style=\"color: rgba(0, 0, 255, 1);\">b</span>"
        );
    }

    #[test]
    fn gradient_samples_across_the_character_count() {
        let ramp = DirectGradient::new(
            crate::color::Color::from_u8(0, 0, 0),
            crate::color::Color::from_u8(200, 0, 0),
        );
        let result = gradient("ab", &ramp, ColorTarget::Background).unwrap();
        assert_eq!(
            result,
            "<span style=\"background-color: rgba(0, 0, 0, 1);\">a</span>\
             <span style=\"background-color: rgba(100, 0, 0, 1);\">b</span>"
        );
    }

    #[test]
    fn cyclic_gradient_restarts_each_segment() {
        let ramp = DirectGradient::new(
            crate::color::Color::from_u8(0, 0, 0),
            crate::color::Color::from_u8(200, 0, 0),
        );
        let gradients: [&dyn Gradient; 1] = [&ramp];
        let result =
            cyclic_gradient("abcd", 2, ColorTarget::Foreground, &gradients).unwrap();
        assert!(result.matches("rgba(0, 0, 0, 1)").count() == 2);
        assert!(result.matches("rgba(100, 0, 0, 1)").count() == 2);
    }
}
