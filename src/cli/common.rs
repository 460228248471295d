//! Shared helpers for CLI commands.

use anyhow::Result;

use crate::config::{AppConfig, ConfigPatch, SiteConfig};
use crate::log;
use crate::store::{ConfigStore, JsonFileStore, load_or_starter};

/// Open the configured store and load the current site configuration.
pub fn load_site(app: &AppConfig) -> Result<(JsonFileStore, SiteConfig)> {
    let store = JsonFileStore::from_app(app);
    let config = load_or_starter(&store)?;
    Ok((store, config))
}

/// Merge a patch into the live configuration, validate and persist.
///
/// Validation failure leaves the persisted state untouched.
pub fn apply_and_save(store: &JsonFileStore, base: &SiteConfig, patch: &ConfigPatch) -> Result<()> {
    let merged = base.merged(patch);
    merged.validate()?;
    store.save(&merged)?;
    log!("save"; "site config written to `{}`", store.save_path().display());
    Ok(())
}
