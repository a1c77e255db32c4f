// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color-space and interpolation-method dispatch for gradient sampling.
//!
//! An unsupported space or method would be a programmer error, not a runtime
//! condition; both are closed enums, so an unsupported variant cannot be expressed
//! and the exhaustive `match`es below are the whole dispatch story.

use strum_macros::{Display, EnumIter};

use crate::{color::{Color, convert},
            interpolate};

/// The available color spaces supported by the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum ColorSpace {
    #[default]
    Rgb,
    Hsv,
    Hsl,
    Hsi,
}

impl ColorSpace {
    /// Decompose a color into this space's three-component form, in interpolation
    /// order.
    #[must_use]
    pub fn decompose(&self, color: &Color) -> [f64; 3] {
        match self {
            ColorSpace::Rgb => color.to_rgb(),
            ColorSpace::Hsv => color.to_hsv(),
            ColorSpace::Hsl => color.to_hsl(),
            ColorSpace::Hsi => color.to_hsi(),
        }
    }

    /// Reassemble a color from this space's three-component form.
    #[must_use]
    pub fn compose(&self, [c1, c2, c3]: [f64; 3]) -> Color {
        match self {
            ColorSpace::Rgb => Color::from_f64(c1, c2, c3),
            ColorSpace::Hsv => {
                let (r, g, b) = convert::hsv_to_rgb(c1, c2, c3);
                Color::from_f64(r, g, b)
            }
            ColorSpace::Hsl => {
                let (r, g, b) = convert::hsl_to_rgb(c1, c2, c3);
                Color::from_f64(r, g, b)
            }
            ColorSpace::Hsi => {
                let (r, g, b) = convert::hsi_to_rgb(c1, c2, c3);
                Color::from_f64(r, g, b)
            }
        }
    }

    /// Bitmask indicating which of the three components wrap on the `[0, 1)` circle,
    /// component 1 in the top bit. Only hue is cyclic, and only the hue-based spaces
    /// have one.
    #[must_use]
    pub fn cyclic_mask(&self) -> u8 {
        match self {
            ColorSpace::Rgb => 0b000,
            ColorSpace::Hsv | ColorSpace::Hsl | ColorSpace::Hsi => 0b100,
        }
    }
}

/// The available interpolation methods supported by the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Interpolation {
    #[default]
    Linear,
    /// Quadratic with zero derivative at the start.
    IncQuadratic,
    /// Quadratic with zero derivative at the end.
    DecQuadratic,
    /// Hermite cubic with zero derivatives at both ends.
    Cubic,
}

impl Interpolation {
    /// Interpolate a non-cyclic component.
    #[must_use]
    pub fn interp(&self, t: f64, a: f64, b: f64) -> f64 {
        match self {
            Interpolation::Linear => interpolate::lerp(t, a, b),
            Interpolation::IncQuadratic => interpolate::qerp_0(t, a, b),
            Interpolation::DecQuadratic => interpolate::qerp_1(t, a, b),
            Interpolation::Cubic => interpolate::cubic_interp_deriv(t, a, b, 0.0, 0.0),
        }
    }

    /// Interpolate a cyclic (hue) component, taking the short or long way around the
    /// circle plus `cycles` extra full revolutions.
    #[must_use]
    pub fn cyclic_interp(
        &self,
        t: f64,
        a: f64,
        b: f64,
        long_route: bool,
        cycles: f64,
    ) -> f64 {
        match (self, long_route) {
            (Interpolation::Linear, false) => interpolate::cyclic_lerp_short(t, a, b, cycles),
            (Interpolation::Linear, true) => interpolate::cyclic_lerp_long(t, a, b, cycles),
            (Interpolation::IncQuadratic, false) => {
                interpolate::cyclic_qerp_0_short(t, a, b, cycles)
            }
            (Interpolation::IncQuadratic, true) => {
                interpolate::cyclic_qerp_0_long(t, a, b, cycles)
            }
            (Interpolation::DecQuadratic, false) => {
                interpolate::cyclic_qerp_1_short(t, a, b, cycles)
            }
            (Interpolation::DecQuadratic, true) => {
                interpolate::cyclic_qerp_1_long(t, a, b, cycles)
            }
            (Interpolation::Cubic, false) => {
                interpolate::cyclic_cubic_interp_deriv_short(t, a, b, 0.0, 0.0, cycles)
            }
            (Interpolation::Cubic, true) => {
                interpolate::cyclic_cubic_interp_deriv_long(t, a, b, 0.0, 0.0, cycles)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn decompose_compose_round_trip_in_every_space() {
        let color = Color::from_f64(0.7, 0.2, 0.5);
        for space in ColorSpace::iter() {
            let rebuilt = space.compose(space.decompose(&color));
            for (l, r) in rebuilt.to_rgb().iter().zip(color.to_rgb()) {
                assert!((l - r).abs() < 1e-9, "{space} failed to round trip");
            }
        }
    }

    #[test]
    fn only_hue_based_spaces_have_a_cyclic_component() {
        assert_eq!(ColorSpace::Rgb.cyclic_mask(), 0b000);
        assert_eq!(ColorSpace::Hsv.cyclic_mask(), 0b100);
        assert_eq!(ColorSpace::Hsl.cyclic_mask(), 0b100);
        assert_eq!(ColorSpace::Hsi.cyclic_mask(), 0b100);
    }

    #[test]
    fn every_method_interpolates_between_the_endpoints() {
        for method in Interpolation::iter() {
            assert!((method.interp(0.0, 2.0, 8.0) - 2.0).abs() < 1e-9);
            assert!((method.interp(1.0, 2.0, 8.0) - 8.0).abs() < 1e-9);
        }
    }
}
