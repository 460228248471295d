//! Patch command: merge a JSON patch file into the site configuration.

use std::path::Path;

use anyhow::{Context, Result};

use super::common::{apply_and_save, load_site};
use crate::config::{AppConfig, ConfigPatch};
use crate::debug;

/// Execute patch command
pub fn patch_site(app: &AppConfig, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read patch file `{}`", file.display()))?;
    let patch: ConfigPatch = serde_json::from_str(&content)
        .with_context(|| format!("malformed patch in `{}`", file.display()))?;

    debug!("patch"; "parsed patch from `{}`", file.display());

    let (store, config) = load_site(app)?;
    apply_and_save(&store, &config, &patch)
}
