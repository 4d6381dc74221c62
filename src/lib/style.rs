use super::error::ParseColorError;
use std::fmt;
use std::str::FromStr;

/// The fixed named palette offered at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
    White,
    Black,
    Yellow,
    Cyan,
    Magenta,
}

pub const PALETTE: [Color; 8] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::White,
    Color::Black,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
];

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::White => "white",
            Color::Black => "black",
            Color::Yellow => "yellow",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
        }
    }

    /// Fully opaque KML color in aabbggrr hex notation.
    pub fn kml(&self) -> &'static str {
        match self {
            Color::Red => "ff0000ff",
            Color::Green => "ff00ff00",
            Color::Blue => "ffff0000",
            Color::White => "ffffffff",
            Color::Black => "ff000000",
            Color::Yellow => "ff00ffff",
            Color::Cyan => "ffffff00",
            Color::Magenta => "ffff00ff",
        }
    }

    /// KML color with the alpha channel scaled by `opacity` in [0, 1].
    pub fn kml_with_opacity(&self, opacity: f64) -> String {
        let alpha = (opacity * 255.0).round() as u8;
        format!("{:02x}{}", alpha, &self.kml()[2..])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PALETTE
            .iter()
            .find(|color| color.name() == s.to_lowercase())
            .copied()
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Visual treatment of a rendered polygon. Values are validated at the
/// input boundary; this is a plain carrier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonStyle {
    pub fill: Color,
    pub fill_opacity: f64,
    pub outline: Color,
    pub outline_width: f64,
    pub height: f64,
}
