use std::fmt;

use serde::{Deserialize, Serialize};

/// An sRGB color stored as `0xRRGGBB`, serialized as `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color(u32);

impl Color {
    /// Creates a color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    /// Returns the packed `0xRRGGBB` value.
    #[must_use]
    pub const fn hex(self) -> u32 {
        self.0
    }

    /// Returns the channels as `0.0..=1.0` floats.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_rgb(self) -> [f32; 3] {
        let channel = |shift: u32| f32::from(((self.0 >> shift) & 0xff) as u8) / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let digits = value.strip_prefix('#').unwrap_or(&value);
        if digits.len() != 6 {
            return Err(format!("expected #rrggbb, got {value:?}"));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|e| format!("invalid color {value:?}: {e}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_lowercase_hex() {
        assert_eq!(Color::from_hex(0x00A1FF).to_string(), "#00a1ff");
    }

    #[test]
    fn rgb_channels_are_normalized() {
        let [r, g, b] = Color::from_hex(0xff8000).to_rgb();
        assert!((r - 1.0).abs() < f32::EPSILON);
        assert!((g - 128.0 / 255.0).abs() < f32::EPSILON);
        assert!(b.abs() < f32::EPSILON);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::from_hex(0x1e88e5)).unwrap();
        assert_eq!(json, "\"#1e88e5\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::from_hex(0x1e88e5));
        assert!(serde_json::from_str::<Color>("\"#12\"").is_err());
    }
}
