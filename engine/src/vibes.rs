use crate::common::{LookError, LookResult};
use crate::model::HexColor;

/// A named aesthetic style and the seed color its palettes derive from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vibe {
    pub key: &'static str,
    pub label: &'static str,
    pub seed: HexColor,
}

const VIBES: [Vibe; 5] = [
    Vibe {
        key: "soft-glam",
        label: "Soft Glam",
        seed: HexColor::from_rgb(0xF4, 0xC2, 0xC2),
    },
    Vibe {
        key: "clean-girl",
        label: "Clean Girl",
        seed: HexColor::from_rgb(0xF9, 0xF5, 0xEB),
    },
    Vibe {
        key: "coquette",
        label: "Coquette",
        seed: HexColor::from_rgb(0xFE, 0xC5, 0xE5),
    },
    Vibe {
        key: "bold",
        label: "Bold",
        seed: HexColor::from_rgb(0xB9, 0x1C, 0x1C),
    },
    Vibe {
        key: "grunge",
        label: "Grunge",
        seed: HexColor::from_rgb(0x3B, 0x3B, 0x58),
    },
];

/// Static lookup of the supported vibes.
pub struct VibeCatalog;

impl VibeCatalog {
    pub fn lookup(key: &str) -> LookResult<&'static Vibe> {
        VIBES
            .iter()
            .find(|vibe| vibe.key == key)
            .ok_or_else(|| LookError::not_found("vibe", key))
    }

    pub fn all() -> &'static [Vibe] {
        &VIBES
    }
}
