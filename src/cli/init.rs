//! Site initialization: scaffold `sitewright.toml` and a starter site.json.

use anyhow::{Result, bail};

use crate::config::{AppConfig, SiteConfig};
use crate::log;
use crate::store::{ConfigStore, JsonFileStore};

/// Create a new site with the starter configuration.
///
/// If `dry_run` is true, only prints the app-config template to stdout.
pub fn new_site(app: &AppConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", AppConfig::template());
        return Ok(());
    }

    let root = &app.root;

    if app.config_path.exists() {
        bail!(
            "`{}` already exists - refusing to overwrite an existing site",
            app.config_path.display()
        );
    }
    if has_name && root.exists() && root.read_dir()?.next().is_some() {
        bail!("target directory `{}` is not empty", root.display());
    }

    std::fs::create_dir_all(root)?;
    std::fs::write(&app.config_path, AppConfig::template())?;

    let store = JsonFileStore::from_app(app);
    store.save(&SiteConfig::starter())?;

    log!("init"; "created `{}`", app.config_path.display());
    log!("init"; "created `{}`", app.site.file.display());
    log!("init"; "run `sitewright show` to inspect the starter sections");
    Ok(())
}
