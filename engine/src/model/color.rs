use crate::common::LookError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated sRGB color.
///
/// Parsed from `RGB` or `RRGGBB` hex digits with an optional leading `#`,
/// case-insensitive. The canonical text form is `#RRGGBB` in uppercase, which
/// is also how the color is serialized.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    /// Six uppercase hex digits without the leading `#`, the form the color
    /// scheme service expects as a seed.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for HexColor {
    type Err = LookError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LookError::invalid_color(value));
        }

        let nibble = |b: u8| -> u8 {
            match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                _ => b - b'A' + 10,
            }
        };
        let bytes = digits.as_bytes();

        match bytes.len() {
            3 => Ok(Self([
                nibble(bytes[0]) * 17,
                nibble(bytes[1]) * 17,
                nibble(bytes[2]) * 17,
            ])),
            6 => Ok(Self([
                nibble(bytes[0]) << 4 | nibble(bytes[1]),
                nibble(bytes[2]) << 4 | nibble(bytes[3]),
                nibble(bytes[4]) << 4 | nibble(bytes[5]),
            ])),
            _ => Err(LookError::invalid_color(value)),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor(#{})", self.hex())
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    #[test]
    fn test_parses_accepted_forms() {
        let expected = HexColor::from_rgb(0xB9, 0x1C, 0x1C);
        assert_eq!(assert_ok!("B91C1C".parse::<HexColor>()), expected);
        assert_eq!(assert_ok!("#b91c1c".parse::<HexColor>()), expected);
        assert_eq!(
            assert_ok!("#f0a".parse::<HexColor>()),
            HexColor::from_rgb(0xFF, 0x00, 0xAA)
        );
    }

    #[test]
    fn test_rejects_malformed_values() {
        for value in ["", "#", "B91C1", "#B91C1C1C", "GG0000", " B91C1C", "##B91C1C", "#B9 1C1"] {
            let err = assert_err!(value.parse::<HexColor>(), "{value:?} should be rejected");
            assert_eq!(err, LookError::invalid_color(value));
        }
    }

    #[test]
    fn test_canonical_text_form() {
        let color = HexColor::from_rgb(0x3B, 0x3B, 0x58);
        assert_eq!(color.hex(), "3B3B58");
        assert_eq!(color.to_string(), "#3B3B58");
    }

    #[test]
    fn test_serde_uses_hash_prefixed_form() {
        let color = HexColor::from_rgb(0xF4, 0xC2, 0xC2);
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#F4C2C2\"");

        let clean: HexColor = serde_json::from_str("\"f4c2c2\"").unwrap();
        assert_eq!(clean, color);
        assert_err!(serde_json::from_str::<HexColor>("\"pink\""));
    }
}
