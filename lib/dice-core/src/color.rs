use crate::{DiceError, DiceResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`. Hex digits may be upper or lower case.
    pub fn from_hex(text: &str) -> DiceResult<Self> {
        let invalid = || DiceError::InvalidColorFormat(text.to_string());

        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Blends towards `other`: `ratio == 0.0` is `self`, `ratio == 1.0` is `other`.
    /// Each channel is rounded to the nearest integer.
    pub fn lerp(self, other: Color, ratio: f64) -> Self {
        let mix = |a: u8, b: u8| {
            let v = (1.0 - ratio) * f64::from(a) + ratio * f64::from(b);
            v.round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl FromStr for Color {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() -> anyhow::Result<()> {
        assert_eq!(Color::from_hex("#FFB6C1")?, Color::new(0xff, 0xb6, 0xc1));
        assert_eq!(Color::from_hex("#0000ff")?, Color::new(0, 0, 255));
        assert_eq!("#b19cd9".parse::<Color>()?, Color::new(0xb1, 0x9c, 0xd9));
        Ok(())
    }

    #[test]
    fn test_from_hex_invalid() {
        for text in ["", "#", "FFB6C1", "#FFB6C", "#FFB6C1F", "#GGGGGG", "#+1+2+3", "#ffb6c١"] {
            assert!(
                matches!(Color::from_hex(text), Err(DiceError::InvalidColorFormat(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(0xff, 0xb6, 0xc1).to_string(), "#ffb6c1");
        assert_eq!(Color::new(0, 0, 5).to_string(), "#000005");
    }

    #[test]
    fn test_lerp() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(255, 255, 255);

        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        // 127.5 rounds away from zero
        assert_eq!(black.lerp(white, 0.5), Color::new(128, 128, 128));
    }
}
