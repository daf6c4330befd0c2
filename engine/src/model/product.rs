use serde::{Deserialize, Serialize};
use std::fmt;

/// A product suggestion passed through from the catalog service.
///
/// Every field is optional because catalog records are frequently incomplete.
/// The record carries no category; that comes from the fetch that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "image_link", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "product_link", skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
}

impl Product {
    /// `"Brand Name"`, whichever parts are present.
    pub fn display_name(&self) -> String {
        match (self.brand.as_deref(), self.name.as_deref()) {
            (Some(brand), Some(name)) => format!("{} {}", brand.trim(), name.trim()),
            (Some(only), None) | (None, Some(only)) => only.trim().to_string(),
            (None, None) => "Unnamed product".to_string(),
        }
    }
}

/// The three areas a look suggests products for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Face,
    Eyes,
    Lips,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Face, Category::Eyes, Category::Lips];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Face => "face",
            Category::Eyes => "eyes",
            Category::Lips => "lips",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Products of a look grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSet {
    #[serde(default)]
    pub face: Vec<Product>,
    #[serde(default)]
    pub eyes: Vec<Product>,
    #[serde(default)]
    pub lips: Vec<Product>,
}

impl ProductSet {
    pub fn get(&self, category: Category) -> &[Product] {
        match category {
            Category::Face => &self.face,
            Category::Eyes => &self.eyes,
            Category::Lips => &self.lips,
        }
    }

    pub fn set(&mut self, category: Category, products: Vec<Product>) {
        match category {
            Category::Face => self.face = products,
            Category::Eyes => self.eyes = products,
            Category::Lips => self.lips = products,
        }
    }

    pub fn total(&self) -> usize {
        self.face.len() + self.eyes.len() + self.lips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
