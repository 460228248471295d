//! Persistence port for the site configuration.
//!
//! The store is constructed once at startup and injected into the commands
//! that need it; the merge/order logic never touches the filesystem.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{AppConfig, SiteConfig};
use crate::log;

/// Errors from loading or saving a site configuration.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed site config in `{0}`")]
    Malformed(PathBuf, #[source] serde_json::Error),
}

/// Load/save boundary for the site configuration.
pub trait ConfigStore {
    /// Load the persisted configuration, `None` when nothing is persisted.
    fn load(&self) -> Result<Option<SiteConfig>, StoreError>;

    /// Persist the configuration.
    fn save(&self, config: &SiteConfig) -> Result<(), StoreError>;
}

/// Load the persisted configuration, falling back to the starter template
/// when nothing is persisted or the persisted JSON is malformed. Malformed
/// input never fails the session.
pub fn load_or_starter(store: &dyn ConfigStore) -> Result<SiteConfig, StoreError> {
    match store.load() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(SiteConfig::starter()),
        Err(StoreError::Malformed(path, source)) => {
            log!("warning"; "malformed site config in `{}` ({source}), using starter defaults", path.display());
            Ok(SiteConfig::starter())
        }
        Err(err) => Err(err),
    }
}

// ============================================================================
// JsonFileStore
// ============================================================================

/// JSON-file store with a write-enabled primary path and a fallback state
/// path used when writes to the primary are disabled.
pub struct JsonFileStore {
    primary: PathBuf,
    fallback: PathBuf,
    write_enabled: bool,
}

impl JsonFileStore {
    pub fn new(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>, write_enabled: bool) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            write_enabled,
        }
    }

    pub fn from_app(app: &AppConfig) -> Self {
        Self::new(&app.site.file, &app.site.fallback, app.site.write_enabled)
    }

    /// Path saves currently go to.
    pub fn save_path(&self) -> &Path {
        if self.write_enabled {
            &self.primary
        } else {
            &self.fallback
        }
    }

    fn read(path: &Path) -> Result<Option<SiteConfig>, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(path.to_path_buf(), err)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Malformed(path.to_path_buf(), source))
    }
}

impl ConfigStore for JsonFileStore {
    /// The path saves go to wins, so edits made in write-disabled mode are
    /// seen again on the next load even when the primary file exists. The
    /// other path is only consulted when that one does not exist.
    fn load(&self) -> Result<Option<SiteConfig>, StoreError> {
        if let Some(config) = Self::read(self.save_path())? {
            return Ok(Some(config));
        }
        let other = if self.write_enabled {
            &self.fallback
        } else {
            &self.primary
        };
        Self::read(other)
    }

    fn save(&self, config: &SiteConfig) -> Result<(), StoreError> {
        let path = self.save_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| StoreError::Io(parent.to_path_buf(), err))?;
        }
        let content = serde_json::to_string_pretty(config)
            .map_err(|source| StoreError::Malformed(path.to_path_buf(), source))?;
        std::fs::write(path, content).map_err(|err| StoreError::Io(path.to_path_buf(), err))
    }
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    config: std::sync::Mutex<Option<SiteConfig>>,
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<Option<SiteConfig>, StoreError> {
        Ok(self.config.lock().expect("store lock poisoned").clone())
    }

    fn save(&self, config: &SiteConfig) -> Result<(), StoreError> {
        *self.config.lock().expect("store lock poisoned") = Some(config.clone());
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
