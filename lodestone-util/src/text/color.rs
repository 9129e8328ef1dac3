use std::str::FromStr;

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq)]
pub struct ParseNamedColorError;

/// The 16 chat colors plus the reset marker.
///
/// The serde form is the wire name used by the game (`dark_blue`,
/// `light_purple`, ...); [`NamedColor::code`] is the legacy one-character
/// formatting code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Reset,
}

impl NamedColor {
    pub const ALL: [NamedColor; 17] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
        Self::Reset,
    ];

    /// Legacy section-sign formatting code.
    pub const fn code(&self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
            Self::Reset => 'r',
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Reset => "reset",
        }
    }

    /// Wraps `text` in this color's legacy code, terminated by a reset, so
    /// the surrounding text keeps its own formatting.
    pub fn paint(&self, text: &str) -> String {
        format!("\u{a7}{}{}\u{a7}r", self.code(), text)
    }

    /// Approximates this chat color on an ANSI terminal, for console
    /// previews of in-game text.
    pub fn console_color(&self, text: &str) -> ColoredString {
        let (r, g, b) = match self {
            Self::Black => (0x00, 0x00, 0x00),
            Self::DarkBlue => (0x00, 0x00, 0xaa),
            Self::DarkGreen => (0x00, 0xaa, 0x00),
            Self::DarkAqua => (0x00, 0xaa, 0xaa),
            Self::DarkRed => (0xaa, 0x00, 0x00),
            Self::DarkPurple => (0xaa, 0x00, 0xaa),
            Self::Gold => (0xff, 0xaa, 0x00),
            Self::Gray => (0xaa, 0xaa, 0xaa),
            Self::DarkGray => (0x55, 0x55, 0x55),
            Self::Blue => (0x55, 0x55, 0xff),
            Self::Green => (0x55, 0xff, 0x55),
            Self::Aqua => (0x55, 0xff, 0xff),
            Self::Red => (0xff, 0x55, 0x55),
            Self::LightPurple => (0xff, 0x55, 0xff),
            Self::Yellow => (0xff, 0xff, 0x55),
            Self::White => (0xff, 0xff, 0xff),
            Self::Reset => return text.clear(),
        };
        text.truecolor(r, g, b)
    }
}

impl FromStr for NamedColor {
    type Err = ParseNamedColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|color| color.name() == s)
            .copied()
            .ok_or(ParseNamedColorError)
    }
}
