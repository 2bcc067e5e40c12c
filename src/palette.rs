use crate::color::Color;

/// A named set of swatches offered next to the color picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [Color; 8],
}

const fn hex(value: u32) -> Color {
    Color::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

pub const PALETTES: [Palette; 6] = [
    Palette {
        name: "Neon Nights",
        colors: [
            hex(0xff006e),
            hex(0x00f5ff),
            hex(0x9d4edd),
            hex(0x3a86ff),
            hex(0xffbe0b),
            hex(0x0a0e27),
            hex(0xff006e),
            hex(0x00f5ff),
        ],
    },
    Palette {
        name: "Matrix Code",
        colors: [
            hex(0x000000),
            hex(0x003b00),
            hex(0x008f11),
            hex(0x00ff41),
            hex(0x39ff14),
            hex(0x00ff00),
            hex(0x003b00),
            hex(0x000000),
        ],
    },
    Palette {
        name: "Vaporwave",
        colors: [
            hex(0xff71ce),
            hex(0x01cdfe),
            hex(0x05ffa1),
            hex(0xb967ff),
            hex(0xfffb96),
            hex(0xff006e),
            hex(0xf72585),
            hex(0x7209b7),
        ],
    },
    Palette {
        name: "Outrun",
        colors: [
            hex(0xff006e),
            hex(0xfb5607),
            hex(0xffbe0b),
            hex(0x8338ec),
            hex(0x3a86ff),
            hex(0xff006e),
            hex(0xfb5607),
            hex(0xffbe0b),
        ],
    },
    Palette {
        name: "Blade Runner",
        colors: [
            hex(0xff0040),
            hex(0xff8c00),
            hex(0x00f0ff),
            hex(0x001eff),
            hex(0x8000ff),
            hex(0xff0040),
            hex(0x001eff),
            hex(0x000000),
        ],
    },
    Palette {
        name: "Ghost Protocol",
        colors: [
            hex(0x00ffff),
            hex(0x0080ff),
            hex(0x8000ff),
            hex(0xff00ff),
            hex(0xff0080),
            hex(0xff0000),
            hex(0x000000),
            hex(0xffffff),
        ],
    },
];

impl Palette {
    /// Swatches with repeats removed, in first-seen order
    pub fn unique_colors(&self) -> Vec<Color> {
        let mut unique = Vec::with_capacity(self.colors.len());
        for color in self.colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }
        unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_constants() {
        assert_eq!(PALETTES[0].colors[0].to_string(), "#ff006e");
        assert_eq!(PALETTES[5].colors[7], Color::WHITE);
    }

    #[test]
    fn test_unique_colors_drops_repeats() {
        let neon = PALETTES[0].unique_colors();
        assert_eq!(neon.len(), 6);
        assert_eq!(neon[0], hex(0xff006e));
    }
}
