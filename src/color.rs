use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::ParseHexError;

/// Squared Euclidean distance between two colors in RGB space.
#[inline(always)]
pub fn distance_squared(a: Srgb<u8>, b: Srgb<u8>) -> u32 {
    let dr = a.red as i32 - b.red as i32;
    let dg = a.green as i32 - b.green as i32;
    let db = a.blue as i32 - b.blue as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (any case) into a color.
pub fn parse_hex(s: &str) -> Result<Srgb<u8>, ParseHexError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ParseHexError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    match nibbles[..] {
        [r, g, b] => Ok(Srgb::new(r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => Ok(Srgb::new((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0)),
        _ => Err(ParseHexError::InvalidLength(nibbles.len())),
    }
}

/// Canonical `#rrggbb` form of a color: lowercase, zero-padded, 7 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexCode(String);

impl HexCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_rgb(&self) -> Srgb<u8> {
        // Only ever constructed from a color, so the digits are valid.
        let byte = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or_default();
        Srgb::new(byte(1), byte(3), byte(5))
    }
}

impl From<Srgb<u8>> for HexCode {
    fn from(c: Srgb<u8>) -> Self {
        HexCode(format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue))
    }
}

impl FromStr for HexCode {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(HexCode::from)
    }
}

impl fmt::Display for HexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
