// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`Color`].
//!
//! The digit count selects how the bits are split between the channels:
//!
//! | digits | bits | split              |
//! |--------|------|--------------------|
//! | 2      | 8    | 3/3/2              |
//! | 3      | 12   | 4/4/4              |
//! | 4      | 16   | 5/6/5 (16-bit color) |
//! | 6      | 24   | 8/8/8              |
//! | 9      | 36   | 12/12/12           |
//! | 12     | 48   | 16/16/16           |
//!
//! Each masked field is divided by its own maximum so the channels normalize to
//! `[0, 1]` regardless of bit width. Alpha is never encoded in hex and defaults to
//! fully opaque. Any other digit count fails to parse.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while1},
          combinator::opt,
          error::{Error, ErrorKind}};

use super::Color;

/// Parse function that generates a [`Color`] from a valid hex color string, with an
/// optional `#` or `0x` prefix. Trailing non-hex input is left in the remainder.
///
/// # Errors
///
/// Returns a nom error when the input has no leading hex digits, or a digit count
/// outside {2, 3, 4, 6, 9, 12}.
pub fn parse_hex_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = opt(alt((tag("0x"), tag("#")))).parse(input)?;
    let (input, digits) =
        take_while1(helper_fns::match_is_hex_digit).parse(input)?;
    match helper_fns::unpack_digits(digits) {
        Some((r, g, b)) => Ok((input, Color::from_f64(r, g, b))),
        None => Err(nom::Err::Error(Error::new(input, ErrorKind::Verify))),
    }
}

/// Helper functions to match and unpack hex digits. These are not [`Parser`]
/// implementations.
mod helper_fns {
    /// This function is used by [`nom::bytes::complete::take_while1`]; as long as it
    /// returns `true` items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// Channel masks for each supported digit count, widest channel first.
    fn channel_masks(digit_count: usize) -> Option<(u64, u64, u64)> {
        match digit_count {
            // 8-bit color: 3/3/2.
            2 => Some((0b1110_0000, 0b0001_1100, 0b0000_0011)),
            // 12-bit color: one nibble per channel.
            3 => Some((0xF00, 0x0F0, 0x00F)),
            // 16-bit color: 5/6/5.
            4 => Some((0xF800, 0x07E0, 0x001F)),
            // 24-bit color.
            6 => Some((0xFF0000, 0x00FF00, 0x0000FF)),
            // 36-bit color.
            9 => Some((0xFFF000000, 0x000FFF000, 0x000000FFF)),
            // 48-bit color.
            12 => Some((0xFFFF00000000, 0x0000FFFF0000, 0x00000000FFFF)),
            _ => None,
        }
    }

    /// Extract a masked field and normalize it by its own maximum.
    fn field(value: u64, mask: u64) -> f64 { (value & mask) as f64 / mask as f64 }

    pub fn unpack_digits(digits: &str) -> Option<(f64, f64, f64)> {
        let (r_mask, g_mask, b_mask) = channel_masks(digits.len())?;
        // Supported digit counts are at most 12, so this cannot overflow u64.
        let value = u64::from_str_radix(digits, 16).ok()?;
        Some((
            field(value, r_mask),
            field(value, g_mask),
            field(value, b_mask),
        ))
    }
}
