// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure interpolation math used to drive gradient sampling.
//!
//! ## Organization:
//! - Plain interpolation: [`lerp`], [`qerp_0`], [`qerp_1`], [`cubic_interp_deriv`],
//!   [`cubic_interp_pt`].
//! - Cyclic interpolation over the `[0, 1)` wrapping circle (used for hue):
//!   `cyclic_*_short` / `cyclic_*_long` pairs, with optional extra full revolutions.
//! - Small numeric helpers: [`sum`], [`avg`], [`mid`], [`normalize_1d`].
//!
//! `t` is expected in `[0, 1]` but is deliberately not clamped; extrapolation is the
//! caller's responsibility.

/// Linear interpolation from `a` to `b`.
#[must_use]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 { (b - a) * t + a }

/// Quadratic interpolation which starts at its turning point (zero derivative at
/// `t = 0`).
#[must_use]
pub fn qerp_0(t: f64, a: f64, b: f64) -> f64 { (b - a) * t * t + a }

/// Quadratic interpolation which ends at its turning point (zero derivative at
/// `t = 1`).
#[must_use]
pub fn qerp_1(t: f64, a: f64, b: f64) -> f64 { (b - a) * (2.0 - t) * t + a }

/// Hermite cubic through `(0, a)` and `(1, b)` with the given endpoint derivatives.
#[must_use]
pub fn cubic_interp_deriv(t: f64, a: f64, b: f64, a_prime: f64, b_prime: f64) -> f64 {
    (2.0 * a - 2.0 * b + a_prime + b_prime) * t * t * t
        + (3.0 * b - 3.0 * a - 2.0 * a_prime - b_prime) * t * t
        + a_prime * t
        + a
}

/// Catmull-Rom style cubic through 4 control points, evaluating the segment between
/// `p1` and `p2`.
#[must_use]
pub fn cubic_interp_pt(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    (-0.5 * p0 + 1.5 * p1 - 1.5 * p2 + 0.5 * p3) * t * t * t
        + (p0 - 2.5 * p1 + 2.0 * p2 - 0.5 * p3) * t * t
        + (0.5 * p2 - 0.5 * p0) * t
        + p1
}

/// Effective delta and pre-wrap offset for travel from `a` towards `b` on the `[0, 1)`
/// circle, taking the shorter of the two immediate paths plus `cycles` extra full
/// revolutions in that direction.
///
/// The four branches are mutually exclusive and ordered: `diff > 0.5`, `diff < -0.5`,
/// `diff > 0`, else (zero or negative non-crossing).
fn wrap_delta_short(diff: f64, cycles: f64) -> (f64, f64) {
    if diff > 0.5 {
        (diff - 1.0 - cycles, 1.0 + cycles)
    } else if diff < -0.5 {
        (diff + 1.0 + cycles, 0.0)
    } else if diff > 0.0 {
        (diff + cycles, 0.0)
    } else {
        (diff - cycles, cycles)
    }
}

/// Same as [`wrap_delta_short`] but taking the longer of the two immediate paths.
fn wrap_delta_long(diff: f64, cycles: f64) -> (f64, f64) {
    if diff > 0.5 {
        (diff + cycles, 0.0)
    } else if diff < -0.5 {
        (diff - cycles, cycles)
    } else if diff > 0.0 {
        (diff - 1.0 - cycles, 1.0 + cycles)
    } else {
        (diff + 1.0 + cycles, 0.0)
    }
}

/// Cyclical linear interpolation using the shorter of the two immediate paths.
#[must_use]
pub fn cyclic_lerp_short(t: f64, a: f64, b: f64, cycles: f64) -> f64 {
    let (delta, offset) = wrap_delta_short(b - a, cycles);
    (delta * t + a + offset) % 1.0
}

/// Cyclical linear interpolation using the longer of the two immediate paths.
#[must_use]
pub fn cyclic_lerp_long(t: f64, a: f64, b: f64, cycles: f64) -> f64 {
    let (delta, offset) = wrap_delta_long(b - a, cycles);
    (delta * t + a + offset) % 1.0
}

/// Cyclical quadratic interpolation which starts at its turning point, shorter path.
#[must_use]
pub fn cyclic_qerp_0_short(t: f64, a: f64, b: f64, cycles: f64) -> f64 {
    let (delta, offset) = wrap_delta_short(b - a, cycles);
    (delta * t * t + a + offset) % 1.0
}

/// Cyclical quadratic interpolation which starts at its turning point, longer path.
#[must_use]
pub fn cyclic_qerp_0_long(t: f64, a: f64, b: f64, cycles: f64) -> f64 {
    let (delta, offset) = wrap_delta_long(b - a, cycles);
    (delta * t * t + a + offset) % 1.0
}

/// Cyclical quadratic interpolation which ends at its turning point, shorter path.
#[must_use]
pub fn cyclic_qerp_1_short(t: f64, a: f64, b: f64, cycles: f64) -> f64 {
    let (delta, offset) = wrap_delta_short(b - a, cycles);
    (delta * (2.0 - t) * t + a + offset) % 1.0
}

/// Cyclical quadratic interpolation which ends at its turning point, longer path.
#[must_use]
pub fn cyclic_qerp_1_long(t: f64, a: f64, b: f64, cycles: f64) -> f64 {
    let (delta, offset) = wrap_delta_long(b - a, cycles);
    (delta * (2.0 - t) * t + a + offset) % 1.0
}

/// Cyclical Hermite cubic interpolation with endpoint derivatives, shorter path.
#[must_use]
pub fn cyclic_cubic_interp_deriv_short(
    t: f64,
    a: f64,
    b: f64,
    a_prime: f64,
    b_prime: f64,
    cycles: f64,
) -> f64 {
    let (delta, offset) = wrap_delta_short(b - a, cycles);
    (cyclic_cubic_poly(t, a, delta, a_prime, b_prime) + offset) % 1.0
}

/// Cyclical Hermite cubic interpolation with endpoint derivatives, longer path.
#[must_use]
pub fn cyclic_cubic_interp_deriv_long(
    t: f64,
    a: f64,
    b: f64,
    a_prime: f64,
    b_prime: f64,
    cycles: f64,
) -> f64 {
    let (delta, offset) = wrap_delta_long(b - a, cycles);
    (cyclic_cubic_poly(t, a, delta, a_prime, b_prime) + offset) % 1.0
}

/// Hermite cubic with the endpoint difference replaced by the wrap-adjusted delta.
fn cyclic_cubic_poly(t: f64, a: f64, delta: f64, a_prime: f64, b_prime: f64) -> f64 {
    (-2.0 * delta + a_prime + b_prime) * t * t * t
        + (3.0 * delta - 2.0 * a_prime - b_prime) * t * t
        + a_prime * t
        + a
}

/// Calculates the sum of a set of values.
#[must_use]
pub fn sum(values: &[f64]) -> f64 { values.iter().sum() }

/// Calculates the mean of a set of values.
#[must_use]
pub fn avg(values: &[f64]) -> f64 { sum(values) / values.len() as f64 }

/// Calculates the midpoint of the maximum and minimum of a set of values.
#[must_use]
pub fn mid(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    (max + min) / 2.0
}

/// Scales a set of values so that it sums to 1.
///
/// A zero total is a caller contract violation (segment lengths must be positive).
#[must_use]
pub fn normalize_1d(values: &[f64]) -> Vec<f64> {
    let total = sum(values);
    debug_assert!(total != 0.0, "normalize_1d requires a non-zero total");
    values.iter().map(|value| value / total).collect()
}
