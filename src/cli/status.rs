//! Status command: integration availability flags.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::AppConfig;
use crate::debug;
use crate::secrets::{EnvFlags, FileSecrets, compute_status};

/// Execute status command
pub fn show_status(app: &AppConfig) -> Result<()> {
    let secrets = match &app.secrets.file {
        Some(path) => {
            debug!("status"; "loading secrets from `{}`", path.display());
            FileSecrets::load(path)?
        }
        None => FileSecrets::default(),
    };

    let status = compute_status(EnvFlags::from_env(), &secrets);

    println!("{}", "integrations:".bold());
    print_flag("ga4", status.ga4);
    print_flag("openai", status.openai);
    Ok(())
}

fn print_flag(name: &str, available: bool) {
    if available {
        println!("  {} {}", "✓".green(), name);
    } else {
        println!("  {} {}", "✗".red(), name.dimmed());
    }
}
