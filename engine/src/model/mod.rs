mod color;
mod occasion;
mod product;

pub use color::HexColor;
pub use occasion::Occasion;
pub use product::{Category, Product, ProductSet};

use crate::common::LookError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

/// Identifier of a look.
///
/// Generated ids are UUID v4 strings. Older favorites were keyed by numeric
/// timestamps, so a JSON number is accepted as well and kept as its decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LookId(String);

impl LookId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LookId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for LookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LookId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => LookId(text),
            RawId::Number(number) => LookId(number.to_string()),
        })
    }
}

/// A generated recommendation: mood, optional occasion, a five color palette
/// and categorized product suggestions.
///
/// `palette` is the editable copy; `original_palette` is the snapshot taken at
/// generation and never changes afterwards. Both always hold
/// [`PALETTE_SIZE`] colors. Editing goes through the methods in
/// [`crate::palette`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredLook")]
pub struct Look {
    id: LookId,
    mood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    occasion: Option<Occasion>,
    pub(crate) palette: Vec<HexColor>,
    original_palette: Vec<HexColor>,
    products: ProductSet,
}

impl Look {
    /// Builds a freshly generated look with a new id. The original palette is
    /// an independent copy of `palette`.
    pub(crate) fn generated(
        mood: impl Into<String>,
        occasion: Option<Occasion>,
        palette: [HexColor; PALETTE_SIZE],
        products: ProductSet,
    ) -> Self {
        Self {
            id: LookId::generate(),
            mood: mood.into(),
            occasion,
            palette: palette.to_vec(),
            original_palette: palette.to_vec(),
            products,
        }
    }

    pub fn id(&self) -> &LookId {
        &self.id
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn occasion(&self) -> Option<Occasion> {
        self.occasion
    }

    pub fn palette(&self) -> &[HexColor] {
        &self.palette
    }

    pub fn original_palette(&self) -> &[HexColor] {
        &self.original_palette
    }

    pub fn products(&self) -> &ProductSet {
        &self.products
    }
}

/// A look as found in persisted favorites, before migration.
///
/// Records written by older versions lack `originalPalette`; they may also
/// carry numeric ids or an empty occasion string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredLook {
    id: LookId,
    #[serde(default)]
    mood: String,
    #[serde(default, deserialize_with = "lenient_occasion")]
    occasion: Option<Occasion>,
    palette: Vec<HexColor>,
    #[serde(default)]
    original_palette: Option<Vec<HexColor>>,
    #[serde(default)]
    products: ProductSet,
}

impl StoredLook {
    pub(crate) fn needs_migration(&self) -> bool {
        self.original_palette.is_none()
    }
}

impl TryFrom<StoredLook> for Look {
    type Error = LookError;

    fn try_from(stored: StoredLook) -> Result<Self, Self::Error> {
        let original_palette = stored
            .original_palette
            .unwrap_or_else(|| stored.palette.clone());

        for (field, colors) in [
            ("palette", &stored.palette),
            ("originalPalette", &original_palette),
        ] {
            if colors.len() != PALETTE_SIZE {
                return Err(LookError::storage_corrupt(
                    format!("look {}", stored.id),
                    format!(
                        "{field} has {} colors, expected {PALETTE_SIZE}",
                        colors.len()
                    ),
                ));
            }
        }

        Ok(Self {
            id: stored.id,
            mood: stored.mood,
            occasion: stored.occasion,
            palette: stored.palette,
            original_palette,
            products: stored.products,
        })
    }
}

/// Empty strings and unknown occasions from older records read as no occasion.
fn lenient_occasion<'de, D>(deserializer: D) -> Result<Option<Occasion>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => match value.parse() {
            Ok(occasion) => Some(occasion),
            Err(_) => {
                log::warn!("Ignoring unknown occasion {value:?} in stored look");
                None
            }
        },
    })
}
