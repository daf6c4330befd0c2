use crate::common::{LookError, LookResult};
use crate::config::ServicesConfig;
use crate::model::{Look, Occasion, ProductSet};
use crate::services::{
    self, CategoryTag, ColorApiClient, ColorSchemeService, MakeupApiClient, ProductCatalogService,
};
use crate::vibes::VibeCatalog;
use rand::Rng;
use std::sync::Arc;

/// Builds looks from the color scheme and product catalog services.
///
/// The four requests of a generation (one palette, three categories) run
/// concurrently and are joined; nothing is assembled before every branch has
/// finished or degraded. A palette failure aborts the generation, a category
/// failure only empties that category.
#[derive(Clone)]
pub struct LookGenerator {
    palettes: ColorSchemeService,
    products: ProductCatalogService,
}

impl LookGenerator {
    pub fn new(palettes: ColorSchemeService, products: ProductCatalogService) -> Self {
        Self { palettes, products }
    }

    /// Generator talking to the configured HTTP services.
    pub fn from_config(config: &ServicesConfig) -> LookResult<Self> {
        let client = services::http_client(config)?;
        let timeout = config.request_timeout();

        let palettes = ColorSchemeService::new(
            Arc::new(ColorApiClient::new(client.clone(), config.color_api_url())),
            config.harmony_mode(),
            timeout,
        );
        let products = ProductCatalogService::new(
            Arc::new(MakeupApiClient::new(client, config.product_api_url())),
            timeout,
        );

        log::info!(
            "Look generator using {} ({}) and {}",
            config.color_api_url(),
            config.harmony_mode(),
            config.product_api_url()
        );
        Ok(Self::new(palettes, products))
    }

    /// Generates a look for `vibe_key`.
    ///
    /// # Errors
    ///
    /// - [`LookError::NotFound`] for an unknown vibe, before any request is made
    /// - [`LookError::GenerationFailed`] when the palette cannot be fetched
    pub async fn generate<R>(
        &self,
        vibe_key: &str,
        occasion: Option<Occasion>,
        rng: &mut R,
    ) -> LookResult<Look>
    where
        R: Rng + ?Sized,
    {
        let vibe = VibeCatalog::lookup(vibe_key)?;
        log::info!(
            "Generating {} look with {} palette (occasion: {occasion:?})",
            vibe.label,
            self.palettes.mode()
        );

        let (palette, lips, face, eyes) = tokio::join!(
            self.palettes.fetch_palette(vibe.seed),
            self.products.fetch_category(CategoryTag::Lipstick),
            self.products.fetch_category(CategoryTag::Blush),
            self.products.fetch_category(CategoryTag::Eyeshadow),
        );

        let palette = palette.map_err(|e| {
            log::error!("Palette fetch for {} failed: {e}", vibe.key);
            LookError::generation_failed(e)
        })?;

        let mut products = ProductSet::default();
        for (tag, catalog) in [
            (CategoryTag::Lipstick, lips),
            (CategoryTag::Blush, face),
            (CategoryTag::Eyeshadow, eyes),
        ] {
            products.set(tag.category(), ProductCatalogService::sample(&catalog, rng));
        }

        let look = Look::generated(vibe.label, occasion, palette, products);
        log::debug!(
            "Generated look {} with {} products",
            look.id(),
            look.products().total()
        );
        Ok(look)
    }
}
