use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "vibelook";
const CONFIG_FILE: &str = "config.toml";
const FAVORITES_FILE: &str = "favorites.json";

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to determine {0} directory")]
    DirUnavailable(&'static str),
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Directory holding the user's Vibelook configuration
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    dirs::config_dir()
        .map(|path| path.join(APP_DIR))
        .ok_or(SetupError::DirUnavailable("config"))
}

/// Directory holding Vibelook data such as favorites
pub fn get_data_dir() -> Result<PathBuf, SetupError> {
    dirs::data_dir()
        .map(|path| path.join(APP_DIR))
        .ok_or(SetupError::DirUnavailable("data"))
}

/// Default location of the favorites file
pub fn default_favorites_path() -> Result<PathBuf, SetupError> {
    Ok(get_data_dir()?.join(FAVORITES_FILE))
}

/// Make sure the directory that will hold `path` exists
pub fn ensure_parent_dir(path: &Path) -> Result<(), SetupError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|source| SetupError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            log::info!("Created directory {}", parent.display());
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Find config file using discovery priority
pub fn find_config_file() -> Option<PathBuf> {
    // 1. ./config.toml
    // 2. Standard OS config directory
    let current_dir_config = PathBuf::from(CONFIG_FILE);
    if current_dir_config.exists() {
        return Some(current_dir_config);
    }

    match get_config_dir() {
        Ok(dir) if dir.join(CONFIG_FILE).exists() => Some(dir.join(CONFIG_FILE)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_favorites_path_is_under_app_dir() {
        // dirs has no data dir on some minimal CI images
        if let Ok(path) = default_favorites_path() {
            assert!(path.ends_with(Path::new(APP_DIR).join(FAVORITES_FILE)));
        }
    }

    #[test]
    fn test_ensure_parent_dir_creates_missing_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join(FAVORITES_FILE);

        ensure_parent_dir(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
        // Already present is fine.
        ensure_parent_dir(&path).unwrap();
    }

    #[test]
    fn test_ensure_parent_dir_accepts_bare_file_name() {
        assert!(ensure_parent_dir(Path::new(FAVORITES_FILE)).is_ok());
    }
}
