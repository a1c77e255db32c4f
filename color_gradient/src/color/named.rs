// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The registry of named constant colors (the 148 CSS extended color keywords).
//!
//! Each access mints a fresh [`Color`] value, so no caller can corrupt the registry:
//! mutating a color obtained here never affects another lookup, and the definitions
//! themselves are baked into the match below.
//!
//! More info: <https://www.w3.org/TR/css-color-4/#named-colors>

use strum_macros::{Display, EnumIter, EnumString};

use super::Color;

/// A CSS extended color keyword. Use [`NamedColor::as_color`] (or the `From` impl) to
/// obtain the color value; `FromStr` accepts the keyword case-insensitively, eg:
/// `"rebeccapurple".parse::<NamedColor>()`.
///
/// The `Gray`/`Grey` spelling pairs are distinct keywords that map to the same value,
/// exactly as CSS defines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum NamedColor {
    AliceBlue,
    AntiqueWhite,
    Aqua,
    Aquamarine,
    Azure,
    Beige,
    Bisque,
    Black,
    BlanchedAlmond,
    Blue,
    BlueViolet,
    Brown,
    BurlyWood,
    CadetBlue,
    Chartreuse,
    Chocolate,
    Coral,
    CornflowerBlue,
    Cornsilk,
    Crimson,
    Cyan,
    DarkBlue,
    DarkCyan,
    DarkGoldenrod,
    DarkGray,
    DarkGrey,
    DarkGreen,
    DarkKhaki,
    DarkMagenta,
    DarkOliveGreen,
    DarkOrange,
    DarkOrchid,
    DarkRed,
    DarkSalmon,
    DarkSeaGreen,
    DarkSlateBlue,
    DarkSlateGray,
    DarkSlateGrey,
    DarkTurquoise,
    DarkViolet,
    DeepPink,
    DeepSkyBlue,
    DimGray,
    DimGrey,
    DodgerBlue,
    FireBrick,
    FloralWhite,
    ForestGreen,
    Fuchsia,
    Gainsboro,
    GhostWhite,
    Gold,
    Goldenrod,
    Gray,
    Grey,
    Green,
    GreenYellow,
    HoneyDew,
    HotPink,
    IndianRed,
    Indigo,
    Ivory,
    Khaki,
    Lavender,
    LavenderBlush,
    LawnGreen,
    LemonChiffon,
    LightBlue,
    LightCoral,
    LightCyan,
    LightGoldenrodYellow,
    LightGray,
    LightGrey,
    LightGreen,
    LightPink,
    LightSalmon,
    LightSeaGreen,
    LightSkyBlue,
    LightSlateGray,
    LightSlateGrey,
    LightSteelBlue,
    LightYellow,
    Lime,
    LimeGreen,
    Linen,
    Magenta,
    Maroon,
    MediumAquamarine,
    MediumBlue,
    MediumOrchid,
    MediumPurple,
    MediumSeaGreen,
    MediumSlateBlue,
    MediumSpringGreen,
    MediumTurquoise,
    MediumVioletRed,
    MidnightBlue,
    MintCream,
    MistyRose,
    Moccasin,
    NavajoWhite,
    Navy,
    OldLace,
    Olive,
    OliveDrab,
    Orange,
    OrangeRed,
    Orchid,
    PaleGoldenrod,
    PaleGreen,
    PaleTurquoise,
    PaleVioletRed,
    PapayaWhip,
    PeachPuff,
    Peru,
    Pink,
    Plum,
    PowderBlue,
    Purple,
    RebeccaPurple,
    Red,
    RosyBrown,
    RoyalBlue,
    SaddleBrown,
    Salmon,
    SandyBrown,
    SeaGreen,
    Seashell,
    Sienna,
    Silver,
    SkyBlue,
    SlateBlue,
    SlateGray,
    SlateGrey,
    Snow,
    SpringGreen,
    SteelBlue,
    Tan,
    Teal,
    Thistle,
    Tomato,
    Turquoise,
    Violet,
    Wheat,
    White,
    WhiteSmoke,
    Yellow,
    YellowGreen,
}

impl NamedColor {
    /// The color value for this keyword.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_color(&self) -> Color {
        match self {
            NamedColor::AliceBlue => Color::from_u8(240, 248, 255),
            NamedColor::AntiqueWhite => Color::from_u8(250, 235, 215),
            NamedColor::Aqua => Color::from_u8(0, 255, 255),
            NamedColor::Aquamarine => Color::from_u8(127, 255, 212),
            NamedColor::Azure => Color::from_u8(240, 255, 255),
            NamedColor::Beige => Color::from_u8(245, 245, 220),
            NamedColor::Bisque => Color::from_u8(255, 228, 196),
            NamedColor::Black => Color::from_u8(0, 0, 0),
            NamedColor::BlanchedAlmond => Color::from_u8(255, 235, 205),
            NamedColor::Blue => Color::from_u8(0, 0, 255),
            NamedColor::BlueViolet => Color::from_u8(138, 43, 226),
            NamedColor::Brown => Color::from_u8(165, 42, 42),
            NamedColor::BurlyWood => Color::from_u8(222, 184, 135),
            NamedColor::CadetBlue => Color::from_u8(95, 158, 160),
            NamedColor::Chartreuse => Color::from_u8(127, 255, 0),
            NamedColor::Chocolate => Color::from_u8(210, 105, 30),
            NamedColor::Coral => Color::from_u8(255, 127, 80),
            NamedColor::CornflowerBlue => Color::from_u8(100, 149, 237),
            NamedColor::Cornsilk => Color::from_u8(255, 248, 220),
            NamedColor::Crimson => Color::from_u8(220, 20, 60),
            NamedColor::Cyan => Color::from_u8(0, 255, 255),
            NamedColor::DarkBlue => Color::from_u8(0, 0, 139),
            NamedColor::DarkCyan => Color::from_u8(0, 139, 139),
            NamedColor::DarkGoldenrod => Color::from_u8(184, 134, 11),
            NamedColor::DarkGray => Color::from_u8(169, 169, 169),
            NamedColor::DarkGrey => Color::from_u8(169, 169, 169),
            NamedColor::DarkGreen => Color::from_u8(0, 100, 0),
            NamedColor::DarkKhaki => Color::from_u8(189, 183, 107),
            NamedColor::DarkMagenta => Color::from_u8(139, 0, 139),
            NamedColor::DarkOliveGreen => Color::from_u8(85, 107, 47),
            NamedColor::DarkOrange => Color::from_u8(255, 140, 0),
            NamedColor::DarkOrchid => Color::from_u8(153, 50, 204),
            NamedColor::DarkRed => Color::from_u8(139, 0, 0),
            NamedColor::DarkSalmon => Color::from_u8(233, 150, 122),
            NamedColor::DarkSeaGreen => Color::from_u8(143, 188, 143),
            NamedColor::DarkSlateBlue => Color::from_u8(72, 61, 139),
            NamedColor::DarkSlateGray => Color::from_u8(47, 79, 79),
            NamedColor::DarkSlateGrey => Color::from_u8(47, 79, 79),
            NamedColor::DarkTurquoise => Color::from_u8(0, 206, 209),
            NamedColor::DarkViolet => Color::from_u8(148, 0, 211),
            NamedColor::DeepPink => Color::from_u8(255, 20, 147),
            NamedColor::DeepSkyBlue => Color::from_u8(0, 191, 255),
            NamedColor::DimGray => Color::from_u8(105, 105, 105),
            NamedColor::DimGrey => Color::from_u8(105, 105, 105),
            NamedColor::DodgerBlue => Color::from_u8(30, 144, 255),
            NamedColor::FireBrick => Color::from_u8(178, 34, 34),
            NamedColor::FloralWhite => Color::from_u8(255, 250, 240),
            NamedColor::ForestGreen => Color::from_u8(34, 139, 34),
            NamedColor::Fuchsia => Color::from_u8(255, 0, 255),
            NamedColor::Gainsboro => Color::from_u8(220, 220, 220),
            NamedColor::GhostWhite => Color::from_u8(248, 248, 255),
            NamedColor::Gold => Color::from_u8(255, 215, 0),
            NamedColor::Goldenrod => Color::from_u8(218, 165, 32),
            NamedColor::Gray => Color::from_u8(128, 128, 128),
            NamedColor::Grey => Color::from_u8(128, 128, 128),
            NamedColor::Green => Color::from_u8(0, 128, 0),
            NamedColor::GreenYellow => Color::from_u8(173, 255, 47),
            NamedColor::HoneyDew => Color::from_u8(240, 255, 240),
            NamedColor::HotPink => Color::from_u8(255, 105, 180),
            NamedColor::IndianRed => Color::from_u8(205, 92, 92),
            NamedColor::Indigo => Color::from_u8(75, 0, 130),
            NamedColor::Ivory => Color::from_u8(255, 255, 240),
            NamedColor::Khaki => Color::from_u8(240, 230, 140),
            NamedColor::Lavender => Color::from_u8(230, 230, 250),
            NamedColor::LavenderBlush => Color::from_u8(255, 240, 245),
            NamedColor::LawnGreen => Color::from_u8(124, 252, 0),
            NamedColor::LemonChiffon => Color::from_u8(255, 250, 205),
            NamedColor::LightBlue => Color::from_u8(173, 216, 230),
            NamedColor::LightCoral => Color::from_u8(240, 128, 128),
            NamedColor::LightCyan => Color::from_u8(224, 255, 255),
            NamedColor::LightGoldenrodYellow => Color::from_u8(250, 250, 210),
            NamedColor::LightGray => Color::from_u8(211, 211, 211),
            NamedColor::LightGrey => Color::from_u8(211, 211, 211),
            NamedColor::LightGreen => Color::from_u8(144, 238, 144),
            NamedColor::LightPink => Color::from_u8(255, 182, 193),
            NamedColor::LightSalmon => Color::from_u8(255, 160, 122),
            NamedColor::LightSeaGreen => Color::from_u8(32, 178, 170),
            NamedColor::LightSkyBlue => Color::from_u8(135, 206, 250),
            NamedColor::LightSlateGray => Color::from_u8(119, 136, 153),
            NamedColor::LightSlateGrey => Color::from_u8(119, 136, 153),
            NamedColor::LightSteelBlue => Color::from_u8(176, 196, 222),
            NamedColor::LightYellow => Color::from_u8(255, 255, 224),
            NamedColor::Lime => Color::from_u8(0, 255, 0),
            NamedColor::LimeGreen => Color::from_u8(50, 205, 50),
            NamedColor::Linen => Color::from_u8(250, 240, 230),
            NamedColor::Magenta => Color::from_u8(255, 0, 255),
            NamedColor::Maroon => Color::from_u8(128, 0, 0),
            NamedColor::MediumAquamarine => Color::from_u8(102, 205, 170),
            NamedColor::MediumBlue => Color::from_u8(0, 0, 205),
            NamedColor::MediumOrchid => Color::from_u8(186, 85, 211),
            NamedColor::MediumPurple => Color::from_u8(147, 112, 219),
            NamedColor::MediumSeaGreen => Color::from_u8(60, 179, 113),
            NamedColor::MediumSlateBlue => Color::from_u8(123, 104, 238),
            NamedColor::MediumSpringGreen => Color::from_u8(0, 250, 154),
            NamedColor::MediumTurquoise => Color::from_u8(72, 209, 204),
            NamedColor::MediumVioletRed => Color::from_u8(199, 21, 133),
            NamedColor::MidnightBlue => Color::from_u8(25, 25, 112),
            NamedColor::MintCream => Color::from_u8(245, 255, 250),
            NamedColor::MistyRose => Color::from_u8(255, 228, 225),
            NamedColor::Moccasin => Color::from_u8(255, 228, 181),
            NamedColor::NavajoWhite => Color::from_u8(255, 222, 173),
            NamedColor::Navy => Color::from_u8(0, 0, 128),
            NamedColor::OldLace => Color::from_u8(253, 245, 230),
            NamedColor::Olive => Color::from_u8(128, 128, 0),
            NamedColor::OliveDrab => Color::from_u8(107, 142, 35),
            NamedColor::Orange => Color::from_u8(255, 165, 0),
            NamedColor::OrangeRed => Color::from_u8(255, 69, 0),
            NamedColor::Orchid => Color::from_u8(218, 112, 214),
            NamedColor::PaleGoldenrod => Color::from_u8(238, 232, 170),
            NamedColor::PaleGreen => Color::from_u8(152, 251, 152),
            NamedColor::PaleTurquoise => Color::from_u8(175, 238, 238),
            NamedColor::PaleVioletRed => Color::from_u8(219, 112, 147),
            NamedColor::PapayaWhip => Color::from_u8(255, 239, 213),
            NamedColor::PeachPuff => Color::from_u8(255, 218, 185),
            NamedColor::Peru => Color::from_u8(205, 133, 63),
            NamedColor::Pink => Color::from_u8(255, 192, 203),
            NamedColor::Plum => Color::from_u8(221, 160, 221),
            NamedColor::PowderBlue => Color::from_u8(176, 224, 230),
            NamedColor::Purple => Color::from_u8(128, 0, 128),
            NamedColor::RebeccaPurple => Color::from_u8(102, 51, 153),
            NamedColor::Red => Color::from_u8(255, 0, 0),
            NamedColor::RosyBrown => Color::from_u8(188, 143, 143),
            NamedColor::RoyalBlue => Color::from_u8(65, 105, 225),
            NamedColor::SaddleBrown => Color::from_u8(139, 69, 19),
            NamedColor::Salmon => Color::from_u8(250, 128, 114),
            NamedColor::SandyBrown => Color::from_u8(244, 164, 96),
            NamedColor::SeaGreen => Color::from_u8(46, 139, 87),
            NamedColor::Seashell => Color::from_u8(255, 245, 238),
            NamedColor::Sienna => Color::from_u8(160, 82, 45),
            NamedColor::Silver => Color::from_u8(192, 192, 192),
            NamedColor::SkyBlue => Color::from_u8(135, 206, 235),
            NamedColor::SlateBlue => Color::from_u8(106, 90, 205),
            NamedColor::SlateGray => Color::from_u8(112, 128, 144),
            NamedColor::SlateGrey => Color::from_u8(112, 128, 144),
            NamedColor::Snow => Color::from_u8(255, 250, 250),
            NamedColor::SpringGreen => Color::from_u8(0, 255, 127),
            NamedColor::SteelBlue => Color::from_u8(70, 130, 180),
            NamedColor::Tan => Color::from_u8(210, 180, 140),
            NamedColor::Teal => Color::from_u8(0, 128, 128),
            NamedColor::Thistle => Color::from_u8(216, 191, 216),
            NamedColor::Tomato => Color::from_u8(255, 99, 71),
            NamedColor::Turquoise => Color::from_u8(64, 224, 208),
            NamedColor::Violet => Color::from_u8(238, 130, 238),
            NamedColor::Wheat => Color::from_u8(245, 222, 179),
            NamedColor::White => Color::from_u8(255, 255, 255),
            NamedColor::WhiteSmoke => Color::from_u8(245, 245, 245),
            NamedColor::Yellow => Color::from_u8(255, 255, 0),
            NamedColor::YellowGreen => Color::from_u8(154, 205, 50),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(name: NamedColor) -> Self { name.as_color() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn registry_has_all_148_keywords() {
        assert_eq!(NamedColor::iter().count(), 148);
    }

    #[test]
    fn primaries_decode_to_full_channels() {
        assert_eq!(NamedColor::Red.as_color().to_24_bit_rgb(), [255, 0, 0]);
        assert_eq!(NamedColor::Blue.as_color().to_24_bit_rgb(), [0, 0, 255]);
        assert_eq!(NamedColor::Lime.as_color().to_24_bit_rgb(), [0, 255, 0]);
        assert_eq!(NamedColor::White.as_color().to_24_bit_rgb(), [255, 255, 255]);
    }

    #[test]
    fn gray_and_grey_spellings_agree() {
        assert_eq!(
            NamedColor::DarkGray.as_color().to_24_bit_rgb(),
            NamedColor::DarkGrey.as_color().to_24_bit_rgb()
        );
    }

    #[test]
    fn lookup_by_keyword_is_case_insensitive() {
        let color: NamedColor = "REBECCAPURPLE".parse().unwrap();
        assert_eq!(color, NamedColor::RebeccaPurple);
        assert!("notacolor".parse::<NamedColor>().is_err());
    }

    #[test]
    fn every_keyword_is_opaque() {
        for name in NamedColor::iter() {
            assert_eq!(name.as_color().alpha(), 1.0);
        }
    }

    #[test]
    fn mutating_a_lookup_does_not_corrupt_the_registry() {
        let mut tinted = NamedColor::Tomato.as_color();
        tinted.set_hue(0.5);
        assert_eq!(NamedColor::Tomato.as_color().to_24_bit_rgb(), [255, 99, 71]);
    }
}
