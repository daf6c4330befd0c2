use super::storage::FavoritesStorage;
use crate::common::{LookError, LookResult};
use crate::model::{Look, LookId, StoredLook};
use std::collections::HashSet;

/// Outcome of reading the persisted favorites.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadReport {
    pub looks: Vec<Look>,
    /// Entries that had no original palette and were back-filled.
    pub migrated: usize,
    /// Set when the stored content could not be used and was discarded.
    pub recovered: Option<LookError>,
}

/// The durable collection of favorite looks.
///
/// Every mutation is written through to storage before the in-memory list
/// changes, so a failed write leaves both untouched.
pub struct FavoritesStore {
    storage: Box<dyn FavoritesStorage>,
    looks: Vec<Look>,
    recovered: Option<LookError>,
}

impl FavoritesStore {
    /// Opens the store and loads whatever is persisted.
    pub fn open<S>(storage: S) -> Self
    where
        S: FavoritesStorage + 'static,
    {
        let mut store = Self {
            storage: Box::new(storage),
            looks: Vec::new(),
            recovered: None,
        };
        store.load();
        store
    }

    pub fn location(&self) -> String {
        self.storage.location()
    }

    /// Re-reads storage, replacing the in-memory collection.
    ///
    /// Never fails: missing storage is an empty collection and unusable
    /// content is discarded (see [`FavoritesStore::load_report`]).
    pub fn load(&mut self) -> &[Look] {
        let report = self.load_report();
        self.looks = report.looks;
        self.recovered = report.recovered;
        &self.looks
    }

    /// Why the last load discarded the stored content, if it did.
    pub fn last_recovery(&self) -> Option<&LookError> {
        self.recovered.as_ref()
    }

    /// Reads and migrates the persisted favorites without touching the
    /// in-memory collection.
    pub fn load_report(&self) -> LoadReport {
        let location = self.storage.location();

        let raw = match self.storage.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No favorites stored at {location}");
                return LoadReport::default();
            }
            Err(e) => {
                log::error!("Could not read favorites, starting empty: {e}");
                return LoadReport {
                    recovered: Some(e),
                    ..LoadReport::default()
                };
            }
        };

        match parse_favorites(&raw, &location) {
            Ok(report) => {
                if report.migrated > 0 {
                    log::info!(
                        "Back-filled original palette for {} legacy favorite(s)",
                        report.migrated
                    );
                }
                report
            }
            Err(e) => {
                log::warn!("Discarding stored favorites: {e}");
                LoadReport {
                    recovered: Some(e),
                    ..LoadReport::default()
                }
            }
        }
    }

    /// Saves a copy of `look`.
    ///
    /// A look whose id is already stored replaces that entry in place;
    /// otherwise it is appended.
    pub fn save(&mut self, look: &Look) -> LookResult<()> {
        let mut next = self.looks.clone();
        match next.iter_mut().find(|stored| stored.id() == look.id()) {
            Some(stored) => *stored = look.clone(),
            None => next.push(look.clone()),
        }

        self.persist(next)?;
        log::info!("Saved look {} ({} favorites)", look.id(), self.looks.len());
        Ok(())
    }

    /// Removes the favorite with `id`.
    ///
    /// Returns `Ok(false)` without writing when no such favorite exists.
    pub fn remove(&mut self, id: &LookId) -> LookResult<bool> {
        if !self.looks.iter().any(|look| look.id() == id) {
            log::debug!("Remove of unknown favorite {id} ignored");
            return Ok(false);
        }

        let next: Vec<Look> = self
            .looks
            .iter()
            .filter(|look| look.id() != id)
            .cloned()
            .collect();

        self.persist(next)?;
        log::info!("Removed look {id} ({} favorites)", self.looks.len());
        Ok(true)
    }

    pub fn list(&self) -> &[Look] {
        &self.looks
    }

    pub fn get(&self, id: &LookId) -> Option<&Look> {
        self.looks.iter().find(|look| look.id() == id)
    }

    pub fn len(&self) -> usize {
        self.looks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.looks.is_empty()
    }

    fn persist(&mut self, next: Vec<Look>) -> LookResult<()> {
        let contents = serde_json::to_string_pretty(&next)
            .map_err(|e| LookError::storage(self.storage.location(), e))?;
        self.storage.write(&contents)?;
        self.looks = next;
        Ok(())
    }
}

fn parse_favorites(raw: &str, location: &str) -> LookResult<LoadReport> {
    if raw.trim().is_empty() {
        return Ok(LoadReport::default());
    }

    let stored: Option<Vec<StoredLook>> =
        serde_json::from_str(raw).map_err(|e| LookError::storage_corrupt(location, e))?;
    let stored = stored.unwrap_or_default();

    let migrated = stored.iter().filter(|s| s.needs_migration()).count();
    let mut seen = HashSet::new();
    let mut looks = Vec::with_capacity(stored.len());

    for record in stored {
        let look = Look::try_from(record).map_err(|e| match e {
            LookError::StorageCorrupt {
                location: record,
                reason,
            } => LookError::storage_corrupt(location, format!("{record}: {reason}")),
            other => other,
        })?;
        if seen.insert(look.id().clone()) {
            looks.push(look);
        } else {
            log::warn!("Dropping duplicate favorite {}", look.id());
        }
    }

    Ok(LoadReport {
        looks,
        migrated,
        recovered: None,
    })
}
