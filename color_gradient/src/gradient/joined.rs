// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A gradient between many colors, travelling an abstract route through color space.

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

use super::{ColorSpace, DirectGradient, Gradient, Interpolation};
use crate::{color::Color, interpolate};

pub mod sizing {
    use super::{Color, ColorSpace, Interpolation, SmallVec};

    /// Joined gradients rarely have more than a handful of segments; beyond this the
    /// storage spills to the heap.
    pub const MAX_INLINE_SEGMENTS: usize = 8;

    pub type InlineVecColors = SmallVec<[Color; MAX_INLINE_SEGMENTS]>;
    pub type InlineVecSpaces = SmallVec<[ColorSpace; MAX_INLINE_SEGMENTS]>;
    pub type InlineVecInterps = SmallVec<[Interpolation; MAX_INLINE_SEGMENTS]>;
    pub type InlineVecBools = SmallVec<[bool; MAX_INLINE_SEGMENTS]>;
    pub type InlineVecCycles = SmallVec<[u32; MAX_INLINE_SEGMENTS]>;
    pub type InlineVecLengths = SmallVec<[f64; MAX_INLINE_SEGMENTS]>;
}

/// Configuration for one segment of a [`JoinedGradient`]: the segment's end color
/// plus its sampling setup and relative length.
///
/// ```
/// use r3bl_color_gradient::{ColorSpace, GradientSegment, NamedColor};
///
/// let segment = GradientSegment::new(NamedColor::Gold.as_color())
///     .with_space(ColorSpace::Hsv)
///     .with_length(2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GradientSegment {
    pub color: Color,
    pub length: f64,
    pub space: ColorSpace,
    pub interpolation: Interpolation,
    pub long_route: bool,
    pub cycles: u32,
}

impl GradientSegment {
    /// A segment ending at `color`, one length unit long, sampled linearly in RGB.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            length: 1.0,
            space: ColorSpace::default(),
            interpolation: Interpolation::default(),
            long_route: false,
            cycles: 0,
        }
    }

    #[must_use]
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn with_space(mut self, space: ColorSpace) -> Self {
        self.space = space;
        self
    }

    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    #[must_use]
    pub fn with_long_route(mut self, long_route: bool) -> Self {
        self.long_route = long_route;
        self
    }

    #[must_use]
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles;
        self
    }
}

/// An ordered chain of [`DirectGradient`]s sharing endpoints, addressed by a single
/// normalized parameter.
///
/// `N` segments span `N + 1` colors; segment `i` runs from color `i` to color
/// `i + 1` with its own space, method, direction, and cycle count. Segment lengths
/// are normalized to sum to 1 internally; the original (unnormalized) units stay
/// recoverable through the stored scale factor.
#[derive(Debug, Clone)]
pub struct JoinedGradient {
    colors: sizing::InlineVecColors,
    spaces: sizing::InlineVecSpaces,
    interpolations: sizing::InlineVecInterps,
    long_routes: sizing::InlineVecBools,
    cycles: sizing::InlineVecCycles,
    /// Normalized: sums to 1 at all times.
    lengths: sizing::InlineVecLengths,
    /// Scale factor back to the caller's original length units.
    factor: f64,
}

impl JoinedGradient {
    /// Create a joined gradient starting at `start_color` and passing through each
    /// segment's color in order. Segment lengths must be positive.
    #[must_use]
    pub fn new(start_color: Color, segments: &[GradientSegment]) -> Self {
        debug_assert!(!segments.is_empty(), "a joined gradient needs at least one segment");

        let mut colors = sizing::InlineVecColors::new();
        colors.push(start_color);
        let mut spaces = sizing::InlineVecSpaces::new();
        let mut interpolations = sizing::InlineVecInterps::new();
        let mut long_routes = sizing::InlineVecBools::new();
        let mut cycles = sizing::InlineVecCycles::new();
        let mut raw_lengths = sizing::InlineVecLengths::new();

        for segment in segments {
            colors.push(segment.color);
            spaces.push(segment.space);
            interpolations.push(segment.interpolation);
            long_routes.push(segment.long_route);
            cycles.push(segment.cycles);
            raw_lengths.push(segment.length);
        }

        let factor = interpolate::sum(&raw_lengths);
        let lengths = interpolate::normalize_1d(&raw_lengths).into_iter().collect();

        Self {
            colors,
            spaces,
            interpolations,
            long_routes,
            cycles,
            lengths,
            factor,
        }
    }

    /// The number of segments (one fewer than the number of colors).
    #[must_use]
    pub fn segment_count(&self) -> usize { self.lengths.len() }

    /// Reconstruct the contained gradient at index `i` from the per-segment arrays.
    #[must_use]
    pub fn get_gradient(&self, i: usize) -> DirectGradient {
        DirectGradient::new(self.colors[i], self.colors[i + 1])
            .with_space(self.spaces[i])
            .with_interpolation(self.interpolations[i])
            .with_long_route(self.long_routes[i])
            .with_cycles(self.cycles[i])
    }

    /// Decompose the given gradient back into the per-segment arrays at index `i`.
    /// Round-trips with [`JoinedGradient::get_gradient`].
    pub fn set_gradient(&mut self, i: usize, gradient: &DirectGradient) {
        self.colors[i] = gradient.start_color();
        self.colors[i + 1] = gradient.end_color();
        self.spaces[i] = gradient.space();
        self.interpolations[i] = gradient.interpolation();
        self.long_routes[i] = gradient.long_route();
        self.cycles[i] = gradient.cycles();
    }

    /// The length of the contained gradient at index `i`, in the caller's original
    /// (unnormalized) units.
    #[must_use]
    pub fn get_gradient_length(&self, i: usize) -> f64 { self.lengths[i] * self.factor }

    /// Set the length of the contained gradient at index `i` in original units. All
    /// stored lengths are de-normalized, the target overwritten, and the whole list
    /// re-normalized against the new total.
    pub fn set_gradient_length(&mut self, i: usize, length: f64) {
        tracing::debug!(segment = i, length, "rewriting joined gradient segment length");
        let mut original_lengths: sizing::InlineVecLengths =
            self.lengths.iter().map(|norm| norm * self.factor).collect();
        original_lengths[i] = length;
        self.factor = interpolate::sum(&original_lengths);
        self.lengths = interpolate::normalize_1d(&original_lengths)
            .into_iter()
            .collect();
    }
}

impl Gradient for JoinedGradient {
    fn get_at(&self, t: f64) -> Color {
        // Walk the normalized lengths until the remaining parameter falls inside the
        // current segment. Out-of-range t stays clamped to the outermost segments so
        // extrapolation cannot index past the arrays.
        let mut local_t = t;
        let mut i = 0;
        while i < self.lengths.len() - 1 && local_t > self.lengths[i] {
            local_t -= self.lengths[i];
            i += 1;
        }
        local_t /= self.lengths[i];
        self.get_gradient(i).get_at(local_t)
    }
}

impl Display for JoinedGradient {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "JoinedGradient({}, {})",
            self.colors[0],
            self.colors[self.colors.len() - 1]
        )
    }
}
