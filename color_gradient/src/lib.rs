// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color_gradient
//!
//! This crate builds smooth or cyclical color gradients across multiple color spaces
//! and renders them as ANSI truecolor escape sequences or HTML/CSS span markup.
//!
//! - [`Color`] stores red, green, blue, and alpha as normalized `[0, 1]` floats and
//!   exposes every other representation — HSV, HSL, HSI, 8-bit channels, hex — as
//!   computed views whose setters all funnel back to the RGB store.
//! - [`DirectGradient`] interpolates between two colors in one color space with one
//!   interpolation method, optionally taking the long way around the hue wheel or
//!   spinning extra revolutions.
//! - [`JoinedGradient`] chains direct gradients through shared endpoint colors, each
//!   segment independently configured and proportionally sized.
//! - [`mod@term`] colors console text (tolerating pre-existing escape sequences);
//!   [`mod@html`] emits `rgba(...)`-styled spans for the web.
//!
//! ## Example usage:
//!
//! ```rust
//! use r3bl_color_gradient::{ColorSpace, ColorTarget, DirectGradient, Gradient,
//!                           NamedColor, term};
//!
//! // A hue-wheel sweep from red to blue, the long way around.
//! let gradient = DirectGradient::new(
//!     NamedColor::Red.as_color(),
//!     NamedColor::Blue.as_color(),
//! )
//! .with_space(ColorSpace::Hsv)
//! .with_long_route(true);
//!
//! let midpoint = gradient.get_at(0.5);
//! println!("{}", term::uniform("hello", &midpoint, ColorTarget::Foreground));
//! println!("{}", term::gradient("hello", &gradient, ColorTarget::Foreground));
//! ```
//!
//! The core is synchronous and free of shared mutable state: every operation is a
//! pure computation over values owned by the caller.

// Attach sources.
pub mod color;
pub mod common;
pub mod gradient;
pub mod html;
pub mod interpolate;
pub mod term;

pub use color::*;
pub use common::*;
pub use gradient::*;
// `term` and `html` mirror each other's function names (`uniform`, `gradient`, ...),
// so they are re-exported as modules rather than globbed into the crate root. The
// shared `ColorTarget` lives in `term` and is flattened here for convenience.
pub use term::ColorTarget;
