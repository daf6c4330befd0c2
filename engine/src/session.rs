use crate::common::{LookError, LookResult};
use crate::favorites::FavoritesStore;
use crate::generator::LookGenerator;
use crate::model::{Look, LookId, Occasion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Application state for one user session.
///
/// Holds the generator, the favorites store and at most one current look.
/// The view layer owns a session and calls the operations below; each returns
/// the updated look or collection, or a typed rejection.
pub struct LookSession<R = StdRng> {
    generator: LookGenerator,
    favorites: FavoritesStore,
    current: Option<Look>,
    rng: R,
}

impl LookSession<StdRng> {
    pub fn new(generator: LookGenerator, favorites: FavoritesStore) -> Self {
        Self::with_rng(generator, favorites, StdRng::from_entropy())
    }
}

impl<R> LookSession<R>
where
    R: Rng,
{
    /// Session sampling products with `rng`, for reproducible runs.
    pub fn with_rng(generator: LookGenerator, favorites: FavoritesStore, rng: R) -> Self {
        Self {
            generator,
            favorites,
            current: None,
            rng,
        }
    }

    pub fn current(&self) -> Option<&Look> {
        self.current.as_ref()
    }

    /// Generates a new current look, discarding the previous one.
    ///
    /// On failure the previous current look is kept.
    pub async fn generate(
        &mut self,
        vibe_key: &str,
        occasion: Option<Occasion>,
    ) -> LookResult<&Look> {
        let look = self
            .generator
            .generate(vibe_key, occasion, &mut self.rng)
            .await?;
        Ok(&*self.current.insert(look))
    }

    pub fn set_color(&mut self, index: usize, value: &str) -> LookResult<&Look> {
        let look = self.current.as_mut().ok_or(LookError::NoCurrentLook)?;
        look.set_color(index, value)?;
        Ok(&*look)
    }

    pub fn reset_palette(&mut self) -> LookResult<&Look> {
        let look = self.current.as_mut().ok_or(LookError::NoCurrentLook)?;
        look.reset();
        Ok(&*look)
    }

    /// Saves the current look, palette edits included.
    pub fn save_favorite(&mut self) -> LookResult<&[Look]> {
        let look = self.current.as_ref().ok_or(LookError::NoCurrentLook)?;
        self.favorites.save(look)?;
        Ok(self.favorites.list())
    }

    /// Removes a favorite. Unknown ids are ignored.
    pub fn remove_favorite(&mut self, id: &LookId) -> LookResult<&[Look]> {
        self.favorites.remove(id)?;
        Ok(self.favorites.list())
    }

    pub fn list_favorites(&self) -> &[Look] {
        self.favorites.list()
    }

    /// Makes a copy of a favorite the current look so it can be edited and
    /// saved again under the same id.
    pub fn restore_favorite(&mut self, id: &LookId) -> LookResult<&Look> {
        let look = self
            .favorites
            .get(id)
            .cloned()
            .ok_or_else(|| LookError::not_found("favorite", id.as_str()))?;
        Ok(&*self.current.insert(look))
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }
}
