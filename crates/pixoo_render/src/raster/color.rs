use std::str::FromStr;

use crate::PixooError;

/// An RGB triple as the display consumes it, one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB`, `#RRGGBB`, or either form without the leading `#`.
    /// Three-digit shorthand duplicates each nibble before parsing.
    pub fn from_hex(hex: &str) -> Result<Self, PixooError> {
        let trimmed = hex.strip_prefix('#').unwrap_or(hex);

        // Reject non-hex characters up front; the length check and the
        // channel slicing below assume single-byte digits.
        if !trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PixooError::InvalidColor(hex.to_string()));
        }

        let expanded: String = match trimmed.len() {
            3 => trimmed.chars().flat_map(|c| [c, c]).collect(),
            6 => trimmed.to_string(),
            _ => return Err(PixooError::InvalidColor(hex.to_string())),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|_| PixooError::InvalidColor(hex.to_string()))
        };

        Ok(Self { r: channel(0..2)?, g: channel(2..4)?, b: channel(4..6)? })
    }

    /// Builds a color from an explicit channel triple. Wrong arity and
    /// out-of-range channels are rejected rather than clamped.
    pub fn from_triple(channels: &[i32]) -> Result<Self, PixooError> {
        let &[r, g, b] = channels else {
            return Err(PixooError::InvalidColor(format!("{channels:?}")));
        };

        let check = |value: i32| {
            u8::try_from(value).map_err(|_| PixooError::InvalidColor(format!("{channels:?}")))
        };

        Ok(Self { r: check(r)?, g: check(g)?, b: check(b)? })
    }
}

impl FromStr for Color {
    type Err = PixooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::from_hex("336699").unwrap(), Color::new(51, 102, 153));
        assert_eq!(Color::from_hex("#ffffff").unwrap(), Color::WHITE);
    }

    #[test]
    fn parses_shorthand_hex() {
        assert_eq!(Color::from_hex("#0F0").unwrap(), Color::new(0, 255, 0));
        assert_eq!(Color::from_hex("abc").unwrap(), Color::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("zzz").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn rejects_non_ascii_hex_without_panicking() {
        // Multibyte characters can add up to a plausible byte length; they
        // must still come back as an error, not a slicing panic.
        assert!(matches!(Color::from_hex("€€"), Err(PixooError::InvalidColor(_))));
        assert!(matches!(Color::from_hex("#€€"), Err(PixooError::InvalidColor(_))));
        assert!(matches!(Color::from_hex("fffff€"), Err(PixooError::InvalidColor(_))));
    }

    #[test]
    fn triple_requires_three_in_range_channels() {
        assert_eq!(Color::from_triple(&[0, 128, 255]).unwrap(), Color::new(0, 128, 255));
        assert!(Color::from_triple(&[300, -5, 10]).is_err());
        assert!(Color::from_triple(&[1, 2]).is_err());
        assert!(Color::from_triple(&[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn from_str_matches_from_hex() {
        let parsed: Color = "#336699".parse().unwrap();
        assert_eq!(parsed, Color::new(51, 102, 153));
    }
}
