// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A smooth gradient between two colors in a single color space.

use std::fmt::{Display, Formatter, Result};

use super::{ColorSpace, Gradient, Interpolation};
use crate::color::Color;

/// A two-endpoint gradient with one fixed color space and interpolation method.
///
/// The endpoints are stored pre-decomposed into the configured space's
/// three-component form, not as [`Color`] values, so per-sample work is just three
/// scalar interpolations and one reassembly. Reconfiguring the space re-derives the
/// stored triples from the current effective endpoint colors, so the visual endpoints
/// never drift.
///
/// ```
/// use r3bl_color_gradient::{ColorSpace, DirectGradient, Gradient, Interpolation,
///                           NamedColor};
///
/// let gradient = DirectGradient::new(
///     NamedColor::Red.as_color(),
///     NamedColor::Blue.as_color(),
/// )
/// .with_space(ColorSpace::Hsv)
/// .with_interpolation(Interpolation::Linear)
/// .with_long_route(true);
///
/// let midpoint = gradient.get_at(0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DirectGradient {
    // Start and end colors in easy-to-interpolate form.
    start: [f64; 3],
    end: [f64; 3],
    space: ColorSpace,
    interpolation: Interpolation,
    long_route: bool,
    cycles: u32,
}

impl DirectGradient {
    /// Create a gradient between two colors, sampling linearly in RGB. Use the
    /// `with_*` methods to reconfigure.
    #[must_use]
    pub fn new(start_color: Color, end_color: Color) -> Self {
        let space = ColorSpace::default();
        Self {
            start: space.decompose(&start_color),
            end: space.decompose(&end_color),
            space,
            interpolation: Interpolation::default(),
            long_route: false,
            cycles: 0,
        }
    }

    #[must_use]
    pub fn with_space(mut self, space: ColorSpace) -> Self {
        self.set_space(space);
        self
    }

    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.set_interpolation(interpolation);
        self
    }

    #[must_use]
    pub fn with_long_route(mut self, long_route: bool) -> Self {
        self.set_long_route(long_route);
        self
    }

    #[must_use]
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.set_cycles(cycles);
        self
    }

    /// The start color, reassembled from its stored component form.
    #[must_use]
    pub fn start_color(&self) -> Color { self.space.compose(self.start) }

    /// The end color, reassembled from its stored component form.
    #[must_use]
    pub fn end_color(&self) -> Color { self.space.compose(self.end) }

    pub fn set_start_color(&mut self, color: Color) {
        self.start = self.space.decompose(&color);
    }

    pub fn set_end_color(&mut self, color: Color) {
        self.end = self.space.decompose(&color);
    }

    #[must_use]
    pub fn space(&self) -> ColorSpace { self.space }

    /// Switch the color space, preserving the visual endpoints: the stored triples
    /// are re-derived from the current effective colors through [`Color`].
    pub fn set_space(&mut self, space: ColorSpace) {
        let start_color = self.start_color();
        let end_color = self.end_color();
        tracing::debug!(%space, "re-deriving gradient endpoints for new color space");
        self.space = space;
        self.start = space.decompose(&start_color);
        self.end = space.decompose(&end_color);
    }

    #[must_use]
    pub fn interpolation(&self) -> Interpolation { self.interpolation }

    /// Only affects future [`Gradient::get_at`] calls; the stored endpoints are
    /// space-dependent, not method-dependent.
    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    #[must_use]
    pub fn long_route(&self) -> bool { self.long_route }

    pub fn set_long_route(&mut self, long_route: bool) { self.long_route = long_route; }

    #[must_use]
    pub fn cycles(&self) -> u32 { self.cycles }

    pub fn set_cycles(&mut self, cycles: u32) { self.cycles = cycles; }
}

impl Gradient for DirectGradient {
    fn get_at(&self, t: f64) -> Color {
        let mask = self.space.cyclic_mask();
        let cycles = f64::from(self.cycles);
        let mut components = [0.0; 3];
        for (index, component) in components.iter_mut().enumerate() {
            let (a, b) = (self.start[index], self.end[index]);
            *component = if mask & (0b100 >> index) == 0 {
                self.interpolation.interp(t, a, b)
            } else {
                self.interpolation
                    .cyclic_interp(t, a, b, self.long_route, cycles)
            };
        }
        self.space.compose(components)
    }
}

impl Display for DirectGradient {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "DirectGradient({}, {})",
            self.start_color(),
            self.end_color()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn assert_color_approx(left: &Color, right: &Color) {
        for (l, r) in left.to_rgb().iter().zip(right.to_rgb()) {
            assert!((l - r).abs() < 1e-9, "expected {left} ≈ {right}");
        }
    }

    #[test]
    fn endpoints_are_preserved_for_every_space_and_method() {
        let start = Color::from_f64(0.9, 0.1, 0.2);
        let end = Color::from_f64(0.2, 0.5, 0.8);
        for space in ColorSpace::iter() {
            for method in Interpolation::iter() {
                let gradient = DirectGradient::new(start, end)
                    .with_space(space)
                    .with_interpolation(method);
                assert_color_approx(&gradient.get_at(0.0), &start);
                assert_color_approx(&gradient.get_at(1.0), &end);
            }
        }
    }

    #[test]
    fn rgb_linear_midpoint_is_the_channel_mean() {
        let gradient = DirectGradient::new(
            Color::from_f64(0.0, 0.0, 0.0),
            Color::from_f64(1.0, 0.5, 0.0),
        );
        let midpoint = gradient.get_at(0.5);
        assert!((midpoint.red() - 0.5).abs() < 1e-9);
        assert!((midpoint.green() - 0.25).abs() < 1e-9);
        assert!((midpoint.blue() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn changing_space_preserves_visual_endpoints() {
        let start = Color::from_f64(0.8, 0.3, 0.1);
        let end = Color::from_f64(0.1, 0.2, 0.9);
        let mut gradient = DirectGradient::new(start, end);
        gradient.set_space(ColorSpace::Hsl);
        assert_color_approx(&gradient.start_color(), &start);
        assert_color_approx(&gradient.end_color(), &end);
        gradient.set_space(ColorSpace::Hsi);
        assert_color_approx(&gradient.start_color(), &start);
        assert_color_approx(&gradient.end_color(), &end);
    }

    #[test]
    fn long_route_goes_the_other_way_around_the_hue_wheel() {
        let start = Color::from_hsv(0.1, 1.0, 1.0);
        let end = Color::from_hsv(0.9, 1.0, 1.0);
        let short = DirectGradient::new(start, end).with_space(ColorSpace::Hsv);
        let long = short.with_long_route(true);

        // diff = 0.8 wraps, so the short way crosses hue 0 and the long way crosses
        // hue 0.5.
        let short_hue = short.get_at(0.5).hue();
        let long_hue = long.get_at(0.5).hue();
        assert!((short_hue - 0.0).abs() < 1e-9 || (short_hue - 1.0).abs() < 1e-9);
        assert!((long_hue - 0.5).abs() < 1e-9);
    }

    #[test]
    fn extra_cycles_only_affect_interior_samples() {
        let start = Color::from_hsv(0.0, 1.0, 1.0);
        let end = Color::from_hsv(0.4, 1.0, 1.0);
        let spun = DirectGradient::new(start, end)
            .with_space(ColorSpace::Hsv)
            .with_cycles(1);
        assert_color_approx(&spun.get_at(0.0), &start);
        assert_color_approx(&spun.get_at(1.0), &end);
        // Halfway in, the extra revolution has already carried hue past the direct
        // path's endpoint: (0.4 + 1.0) * 0.5 = 0.7.
        assert!((spun.get_at(0.5).hue() - 0.7).abs() < 1e-9);
    }
}
