use super::get_json;
use crate::common::{LookError, LookResult};
use crate::model::{Category, Product};
use async_trait::async_trait;
use rand::Rng;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

const SERVICE: &str = "product catalog service";

/// Upper bound of products kept per category.
pub const MAX_PRODUCTS_PER_CATEGORY: usize = 2;

/// Product types requested from the catalog, one per look category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryTag {
    Lipstick,
    Blush,
    Eyeshadow,
}

impl CategoryTag {
    pub const ALL: [CategoryTag; 3] = [
        CategoryTag::Lipstick,
        CategoryTag::Blush,
        CategoryTag::Eyeshadow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryTag::Lipstick => "lipstick",
            CategoryTag::Blush => "blush",
            CategoryTag::Eyeshadow => "eyeshadow",
        }
    }

    /// The look category products of this type are shown under.
    pub fn category(&self) -> Category {
        match self {
            CategoryTag::Lipstick => Category::Lips,
            CategoryTag::Blush => Category::Face,
            CategoryTag::Eyeshadow => Category::Eyes,
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can list the products of one type.
#[async_trait]
pub trait ProductCatalogSource: Send + Sync {
    /// Returns the complete catalog for `tag`, which may be large.
    async fn fetch_category(&self, tag: CategoryTag) -> LookResult<Vec<Product>>;
}

/// HTTP client for the makeup API `products.json` endpoint.
#[derive(Debug, Clone)]
pub struct MakeupApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl MakeupApiClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ProductCatalogSource for MakeupApiClient {
    async fn fetch_category(&self, tag: CategoryTag) -> LookResult<Vec<Product>> {
        let url = format!("{}/api/v1/products.json", self.base_url);
        let request = self.client.get(&url).query(&[("product_type", tag.as_str())]);

        let products: Vec<Product> = get_json(request, SERVICE).await?;
        log::debug!("Catalog returned {} {tag} products", products.len());
        Ok(products)
    }
}

/// Category fetching with failure isolation and local subsampling.
#[derive(Clone)]
pub struct ProductCatalogService {
    source: Arc<dyn ProductCatalogSource>,
    timeout: Duration,
}

impl ProductCatalogService {
    pub fn new(source: Arc<dyn ProductCatalogSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Fetches the catalog for `tag`.
    ///
    /// Catalogs are independent of each other, so a failing one (transport,
    /// status, timeout or body) degrades to an empty list and is only logged.
    pub async fn fetch_category(&self, tag: CategoryTag) -> Vec<Product> {
        let result = tokio::time::timeout(self.timeout, self.source.fetch_category(tag))
            .await
            .unwrap_or_else(|_| Err(LookError::timeout(SERVICE, self.timeout)));

        match result {
            Ok(products) => products,
            Err(e) => {
                log::warn!("No {tag} suggestions, category degraded to empty: {e}");
                Vec::new()
            }
        }
    }

    /// Picks one or two products uniformly without replacement.
    ///
    /// The count is drawn first (1 or 2 with equal chance) and clamped to the
    /// catalog size. Picked products keep their catalog order.
    pub fn sample<R>(catalog: &[Product], rng: &mut R) -> Vec<Product>
    where
        R: Rng + ?Sized,
    {
        if catalog.is_empty() {
            return Vec::new();
        }

        let wanted = if rng.gen_bool(0.5) {
            MAX_PRODUCTS_PER_CATEGORY
        } else {
            1
        };
        let amount = wanted.min(catalog.len());

        let mut picked = rand::seq::index::sample(rng, catalog.len(), amount).into_vec();
        picked.sort_unstable();
        picked.into_iter().map(|i| catalog[i].clone()).collect()
    }
}
