// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`Color`] entity: an RGBA store with computed cross-space views.

use std::fmt::{Display, Formatter, Result};

use super::{convert, hex::parse_hex_color};
use crate::common::{CommonError, CommonErrorType, CommonResult};

/// A digital presentable color.
///
/// The backing store is always four `f64` channels — red, green, blue, alpha — each
/// clamped to `[0, 1]` on every write. Every other representation (HSV, HSL, HSI,
/// 8-bit channels, hex) is a computed projection: reading converts out of RGB, writing
/// converts back into RGB and overwrites the store. There is no "current color space"
/// flag; a [`Color`] is simultaneously valid in all spaces.
///
/// [`Color`] is `Copy` with value semantics. Mutating one copy never affects another,
/// which also keeps the [`super::NamedColor`] registry immune to caller mutation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

fn clamp_unit(value: f64) -> f64 { value.clamp(0.0, 1.0) }

impl Color {
    /// Create a color from normalized `[0, 1]` channels; out-of-range input is
    /// clamped. Alpha defaults to fully opaque.
    #[must_use]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::from_f64_with_alpha(r, g, b, 1.0)
    }

    #[must_use]
    pub fn from_f64_with_alpha(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Create a color from 8-bit channels.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_u8_with_alpha(r, g, b, 255)
    }

    #[must_use]
    pub fn from_u8_with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_f64_with_alpha(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Create a color from a hex string, optionally prefixed `#` or `0x`. The digit
    /// count selects the channel packing; see [`parse_hex_color`] for the packing
    /// table.
    ///
    /// # Errors
    ///
    /// Returns [`CommonErrorType::InvalidHexColorFormat`] when the input has no hex
    /// digits or a digit count outside {2, 3, 4, 6, 9, 12}.
    pub fn try_from_hex(input: &str) -> CommonResult<Color> {
        match parse_hex_color(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => CommonError::new_error_result_with_only_type(
                CommonErrorType::InvalidHexColorFormat,
            ),
        }
    }

    /// Create a color from HSV components, all normalized to `[0, 1]`.
    #[must_use]
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let (r, g, b) = convert::hsv_to_rgb(hue, saturation, value);
        Self::from_f64(r, g, b)
    }

    /// Create a color from HSL components, all normalized to `[0, 1]`.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let (r, g, b) = convert::hsl_to_rgb(hue, saturation, lightness);
        Self::from_f64(r, g, b)
    }

    /// Create a color from HSI components, all normalized to `[0, 1]`.
    #[must_use]
    pub fn from_hsi(hue: f64, saturation: f64, intensity: f64) -> Self {
        let (r, g, b) = convert::hsi_to_rgb(hue, saturation, intensity);
        Self::from_f64(r, g, b)
    }

    /// Builder-style alpha override, eg: `Color::from_hsv(h, s, v).with_alpha(0.5)`.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.a = clamp_unit(alpha);
        self
    }
}

mod accessors {
    use super::{Color, clamp_unit, convert};

    impl Color {
        /// The red component in RGB format.
        #[must_use]
        pub fn red(&self) -> f64 { self.r }

        pub fn set_red(&mut self, r: f64) { self.r = clamp_unit(r); }

        /// The green component in RGB format.
        #[must_use]
        pub fn green(&self) -> f64 { self.g }

        pub fn set_green(&mut self, g: f64) { self.g = clamp_unit(g); }

        /// The blue component in RGB format.
        #[must_use]
        pub fn blue(&self) -> f64 { self.b }

        pub fn set_blue(&mut self, b: f64) { self.b = clamp_unit(b); }

        /// The alpha channel. No other setter touches this.
        #[must_use]
        pub fn alpha(&self) -> f64 { self.a }

        pub fn set_alpha(&mut self, a: f64) { self.a = clamp_unit(a); }

        #[must_use]
        pub fn red_u8(&self) -> u8 { (self.r * 255.0).round() as u8 }

        #[must_use]
        pub fn green_u8(&self) -> u8 { (self.g * 255.0).round() as u8 }

        #[must_use]
        pub fn blue_u8(&self) -> u8 { (self.b * 255.0).round() as u8 }

        #[must_use]
        pub fn alpha_u8(&self) -> u8 { (self.a * 255.0).round() as u8 }

        /// The chroma: spread between the largest and smallest channel.
        #[must_use]
        pub fn chroma(&self) -> f64 { convert::rgb_to_chroma(self.r, self.g, self.b) }

        /// Rescale the channels around the current intensity to hit the target
        /// chroma. When the current chroma is 0 there is no direction to scale in,
        /// so the call is a no-op.
        pub fn set_chroma(&mut self, chroma: f64) {
            let chroma = chroma.max(0.0);
            let old_chroma = self.chroma();
            if old_chroma == 0.0 {
                return;
            }
            let intensity = self.intensity();
            self.r = clamp_unit((self.r - intensity) * chroma / old_chroma + intensity);
            self.g = clamp_unit((self.g - intensity) * chroma / old_chroma + intensity);
            self.b = clamp_unit((self.b - intensity) * chroma / old_chroma + intensity);
        }

        /// The hue, normalized to `[0, 1)`; 0 when achromatic.
        #[must_use]
        pub fn hue(&self) -> f64 { convert::rgb_to_hue(self.r, self.g, self.b) }

        pub fn set_hue(&mut self, hue: f64) {
            self.store_rgb(convert::hsv_to_rgb(hue, self.saturation_hsv(), self.value()));
        }

        /// The brightness in HSV format: the largest channel.
        #[must_use]
        pub fn value(&self) -> f64 { self.r.max(self.g).max(self.b) }

        pub fn set_value(&mut self, value: f64) {
            self.store_rgb(convert::hsv_to_rgb(self.hue(), self.saturation_hsv(), value));
        }

        /// The brightness in HSI format: the channel mean.
        #[must_use]
        pub fn intensity(&self) -> f64 {
            crate::interpolate::avg(&[self.r, self.g, self.b])
        }

        pub fn set_intensity(&mut self, intensity: f64) {
            self.store_rgb(convert::hsi_to_rgb(
                self.hue(),
                self.saturation_hsi(),
                intensity,
            ));
        }

        /// The brightness in HSL format: the midpoint of the channel extremes.
        #[must_use]
        pub fn lightness(&self) -> f64 {
            crate::interpolate::mid(&[self.r, self.g, self.b])
        }

        pub fn set_lightness(&mut self, lightness: f64) {
            self.store_rgb(convert::hsl_to_rgb(
                self.hue(),
                self.saturation_hsl(),
                lightness,
            ));
        }

        /// The saturation in HSV format; 0 when value is 0.
        #[must_use]
        pub fn saturation_hsv(&self) -> f64 {
            let (_, saturation, _) = convert::rgb_to_hsv(self.r, self.g, self.b);
            saturation
        }

        pub fn set_saturation_hsv(&mut self, saturation: f64) {
            self.store_rgb(convert::hsv_to_rgb(self.hue(), saturation, self.value()));
        }

        /// The saturation in HSL format; 0 when lightness is 0 or 1.
        #[must_use]
        pub fn saturation_hsl(&self) -> f64 {
            let (_, saturation, _) = convert::rgb_to_hsl(self.r, self.g, self.b);
            saturation
        }

        pub fn set_saturation_hsl(&mut self, saturation: f64) {
            self.store_rgb(convert::hsl_to_rgb(self.hue(), saturation, self.lightness()));
        }

        /// The saturation in HSI format; 0 when intensity is 0.
        #[must_use]
        pub fn saturation_hsi(&self) -> f64 {
            let (_, saturation, _) = convert::rgb_to_hsi(self.r, self.g, self.b);
            saturation
        }

        pub fn set_saturation_hsi(&mut self, saturation: f64) {
            self.store_rgb(convert::hsi_to_rgb(self.hue(), saturation, self.intensity()));
        }

        /// Overwrite the RGB triple, leaving alpha untouched. Every space setter
        /// funnels through here.
        pub(super) fn store_rgb(&mut self, (r, g, b): (f64, f64, f64)) {
            self.r = clamp_unit(r);
            self.g = clamp_unit(g);
            self.b = clamp_unit(b);
        }
    }
}

mod exports {
    use super::{Color, convert};

    impl Color {
        /// Export into RGB format.
        #[must_use]
        pub fn to_rgb(&self) -> [f64; 3] { [self.r, self.g, self.b] }

        /// Export into RGBA format.
        #[must_use]
        pub fn to_rgba(&self) -> [f64; 4] { [self.r, self.g, self.b, self.a] }

        /// Export into 24-bit RGB.
        #[must_use]
        pub fn to_24_bit_rgb(&self) -> [u8; 3] {
            [self.red_u8(), self.green_u8(), self.blue_u8()]
        }

        /// Export into 32-bit RGBA.
        #[must_use]
        pub fn to_32_bit_rgba(&self) -> [u8; 4] {
            [self.red_u8(), self.green_u8(), self.blue_u8(), self.alpha_u8()]
        }

        /// Export into HSV format.
        #[must_use]
        pub fn to_hsv(&self) -> [f64; 3] {
            let (h, s, v) = convert::rgb_to_hsv(self.r, self.g, self.b);
            [h, s, v]
        }

        /// Export into HSL format.
        #[must_use]
        pub fn to_hsl(&self) -> [f64; 3] {
            let (h, s, l) = convert::rgb_to_hsl(self.r, self.g, self.b);
            [h, s, l]
        }

        /// Export into HSI format.
        #[must_use]
        pub fn to_hsi(&self) -> [f64; 3] {
            let (h, s, i) = convert::rgb_to_hsi(self.r, self.g, self.b);
            [h, s, i]
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Color(r: {}, g: {}, b: {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn assert_approx(left: f64, right: f64) {
        assert!((left - right).abs() < 1e-9, "expected {left} ≈ {right}");
    }

    #[test]
    fn construction_clamps_channels() {
        let color = Color::from_f64(1.5, -0.2, 0.5);
        assert_eq!(color.red(), 1.0);
        assert_eq!(color.green(), 0.0);
        assert_eq!(color.blue(), 0.5);
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn from_u8_divides_by_255() {
        let color = Color::from_u8(255, 128, 0);
        assert_approx(color.red(), 1.0);
        assert_approx(color.green(), 128.0 / 255.0);
        assert_approx(color.blue(), 0.0);
    }

    #[test]
    fn eight_bit_views_round() {
        let color = Color::try_from_hex("#FF8000").unwrap();
        assert_eq!(color.red_u8(), 255);
        assert_eq!(color.green_u8(), 128);
        assert_eq!(color.blue_u8(), 0);
        assert_eq!(color.to_24_bit_rgb(), [255, 128, 0]);
        assert_eq!(color.to_32_bit_rgba(), [255, 128, 0, 255]);
    }

    #[test_case(0.8, 0.3, 0.5; "magenta leaning")]
    #[test_case(0.2, 0.9, 0.1; "green leaning")]
    #[test_case(0.05, 0.4, 1.0; "blue leaning")]
    fn hsv_hsl_hsi_round_trips(r: f64, g: f64, b: f64) {
        let color = Color::from_f64(r, g, b);

        let [h, s, v] = color.to_hsv();
        let back = Color::from_hsv(h, s, v);
        assert_approx(back.red(), r);
        assert_approx(back.green(), g);
        assert_approx(back.blue(), b);

        let [h, s, l] = color.to_hsl();
        let back = Color::from_hsl(h, s, l);
        assert_approx(back.red(), r);
        assert_approx(back.green(), g);
        assert_approx(back.blue(), b);

        let [h, s, i] = color.to_hsi();
        let back = Color::from_hsi(h, s, i);
        assert_approx(back.red(), r);
        assert_approx(back.green(), g);
        assert_approx(back.blue(), b);
    }

    #[test]
    fn achromatic_round_trip_ignores_hue() {
        let gray = Color::from_f64(0.5, 0.5, 0.5);
        let [h, s, v] = gray.to_hsv();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        let back = Color::from_hsv(h, s, v);
        assert_approx(back.red(), 0.5);
        assert_approx(back.green(), 0.5);
        assert_approx(back.blue(), 0.5);
    }

    #[test]
    fn space_setters_hold_other_dimensions_fixed() {
        let mut color = Color::from_hsv(0.25, 0.8, 0.6);
        color.set_hue(0.75);
        let [h, s, v] = color.to_hsv();
        assert_approx(h, 0.75);
        assert_approx(s, 0.8);
        assert_approx(v, 0.6);

        let mut color = Color::from_hsl(0.1, 0.5, 0.4);
        color.set_lightness(0.7);
        let [h, s, l] = color.to_hsl();
        assert_approx(h, 0.1);
        assert_approx(s, 0.5);
        assert_approx(l, 0.7);
    }

    #[test]
    fn setters_leave_alpha_alone() {
        let mut color = Color::from_f64_with_alpha(0.9, 0.2, 0.4, 0.3);
        color.set_hue(0.5);
        color.set_value(0.8);
        color.set_saturation_hsl(0.6);
        assert_eq!(color.alpha(), 0.3);
        color.set_alpha(0.9);
        assert_eq!(color.alpha(), 0.9);
    }

    #[test]
    fn chroma_setter_rescales_around_intensity() {
        let mut color = Color::from_f64(0.8, 0.4, 0.4);
        let intensity_before = color.intensity();
        color.set_chroma(0.2);
        assert_approx(color.chroma(), 0.2);
        assert_approx(color.intensity(), intensity_before);
    }

    #[test]
    fn chroma_setter_is_a_no_op_when_achromatic() {
        let mut gray = Color::from_f64(0.5, 0.5, 0.5);
        gray.set_chroma(0.4);
        assert_eq!(gray.to_rgb(), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn display_uses_normalized_floats() {
        let color = Color::from_f64(1.0, 0.5, 0.0);
        assert_eq!(color.to_string(), "Color(r: 1, g: 0.5, b: 0)");
    }
}
