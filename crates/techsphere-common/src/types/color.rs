use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color, as used for tile backgrounds and category accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(Self::from_rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Self::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_long_form() {
        assert_eq!(Color::from_hex("#dee2e6"), Some(Color::from_rgb(222, 226, 230)));
    }

    #[test]
    fn from_hex_short_form_expands() {
        assert_eq!(Color::from_hex("#fff"), Some(Color::from_rgb(255, 255, 255)));
        assert_eq!(Color::from_hex("#0a0"), Some(Color::from_rgb(0, 170, 0)));
    }

    #[test]
    fn from_hex_with_alpha() {
        let c = Color::from_hex("ff880080").unwrap();
        assert_eq!(c.a, 128);
        assert_eq!(c.r, 255);
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
        assert!(Color::from_hex("#abcd").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn to_hex_roundtrip() {
        let c = Color::from_rgb(97, 218, 251);
        assert_eq!(c.to_hex(), "#61dafb");
        assert_eq!(Color::from_hex(&c.to_hex()), Some(c));
    }

    #[test]
    fn color_serialization() {
        let c = Color::from_rgb(1, 2, 3);
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
