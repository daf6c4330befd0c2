use crate::common::{LookError, LookResult};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// One durable key holding the serialized favorites collection.
pub trait FavoritesStorage: Send {
    /// Human readable location used in reports.
    fn location(&self) -> String;

    /// Current contents, `None` when nothing has been stored yet.
    fn read(&self) -> LookResult<Option<String>>;

    /// Replaces the contents.
    ///
    /// Must be atomic: afterwards either `contents` is durable or the previous
    /// contents are still in place.
    fn write(&mut self, contents: &str) -> LookResult<()>;
}

/// Favorites kept in a JSON file.
///
/// Writes go to a sibling temp file that is synced and then renamed over the
/// target, so a crash mid-write never leaves a truncated collection behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "favorites.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl FavoritesStorage for FileStorage {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> LookResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Err(LookError::storage_corrupt(self.location(), e))
            }
            Err(e) => Err(LookError::storage(self.location(), e)),
        }
    }

    fn write(&mut self, contents: &str) -> LookResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LookError::storage(self.location(), format!("creating {}: {e}", parent.display()))
            })?;
        }

        let temp_path = self.temp_path();
        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(LookError::storage(self.location(), e));
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(LookError::storage(self.location(), e));
        }

        log::debug!("Wrote {} bytes to {}", contents.len(), self.location());
        Ok(())
    }
}

/// In-memory storage for ephemeral sessions and tests.
///
/// Clones share the same contents, so a handle kept outside the store can
/// observe what was written. A read-only storage rejects every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Arc<Mutex<Option<String>>>,
    read_only: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.replace(Some(contents.into()));
        storage
    }

    pub fn contents(&self) -> Option<String> {
        match self.contents.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn replace(&self, contents: Option<String>) {
        match self.contents.lock() {
            Ok(mut guard) => *guard = contents,
            Err(poisoned) => *poisoned.into_inner() = contents,
        }
    }
}

impl FavoritesStorage for MemoryStorage {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn read(&self) -> LookResult<Option<String>> {
        Ok(self.contents())
    }

    fn write(&mut self, contents: &str) -> LookResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(LookError::storage(self.location(), "storage is read-only"));
        }
        self.replace(Some(contents.to_string()));
        Ok(())
    }
}
