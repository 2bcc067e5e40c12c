use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorParseError;

/// A 24-bit RGB cell color.
///
/// The canonical text form is lowercase `#rrggbb`, which is also how colors
/// are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Upper-case `#RRGGBB`, as shown next to the color swatch
    pub fn to_upper_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            parse_rgb_function(body)
        } else {
            None
        };
        parsed.ok_or_else(|| ColorParseError(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => Some(Color::rgb(
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            let mut channels = [0u8; 3];
            for (channel, digit) in channels.iter_mut().zip(hex.chars()) {
                let value = u8::try_from(digit.to_digit(16)?).ok()?;
                *channel = value * 0x11;
            }
            Some(Color::rgb(channels[0], channels[1], channels[2]))
        }
        _ => None,
    }
}

/// The body of a CSS `rgb(r, g, b)` value
fn parse_rgb_function(body: &str) -> Option<Color> {
    let mut channels = body.split(',').map(|part| part.trim().parse::<u8>());
    let r = channels.next()?.ok()?;
    let g = channels.next()?.ok()?;
    let b = channels.next()?.ok()?;
    if channels.next().is_some() {
        return None;
    }
    Some(Color::rgb(r, g, b))
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgb(color.r, color.g, color.b)
    }
}

impl From<Color32> for Color {
    fn from(color: Color32) -> Self {
        Color::rgb(color.r(), color.g(), color.b())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Color::rgb(0xff, 0x00, 0x6e).to_string(), "#ff006e");
        assert_eq!(Color::rgb(0xff, 0x00, 0x6e).to_upper_hex(), "#FF006E");
    }

    #[test]
    fn test_parse_forms() {
        let expected = Color::rgb(0x3a, 0x86, 0xff);
        assert_eq!("#3a86ff".parse::<Color>().unwrap(), expected);
        assert_eq!("#3A86FF".parse::<Color>().unwrap(), expected);
        assert_eq!("rgb(58, 134, 255)".parse::<Color>().unwrap(), expected);
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "#12345", "ff006e", "#gg0000", "rgb(1, 2)", "rgb(1, 2, 300)", "#ééé"] {
            assert!(text.parse::<Color>().is_err(), "{text:?} should not parse");
        }
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str("\"#00F5FF\"").unwrap();
        assert_eq!(back, Color::rgb(0x00, 0xf5, 0xff));
    }

    #[test]
    fn test_color32_conversion() {
        let color = Color::rgb(10, 20, 30);
        let converted: Color32 = color.into();
        assert_eq!(Color::from(converted), color);
    }
}
