//! App configuration management for `sitewright.toml`.
//!
//! Holds deployment concerns the site model stays agnostic of: where the
//! site JSON lives, whether writes to it are enabled, the remote endpoint
//! base URL and the secrets file location.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::types::ConfigError;
use crate::cli::{Cli, Commands};
use crate::log;

// ============================================================================
// root app configuration
// ============================================================================

/// Root structure representing sitewright.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site file settings
    pub site: SiteFileConfig,

    /// Remote endpoint settings
    pub remote: RemoteConfig,

    /// Plan file settings
    pub plan: PlanFileConfig,

    /// Secrets file settings
    pub secrets: SecretsFileConfig,
}

/// `[site]` - where the site configuration is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteFileConfig {
    /// Site configuration file (relative to project root).
    pub file: PathBuf,
    /// Whether writes to `file` are enabled. When false, saves go to
    /// `fallback` instead, leaving the primary file untouched.
    pub write_enabled: bool,
    /// Fallback state file used when writes are disabled.
    pub fallback: PathBuf,
}

impl Default for SiteFileConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("site.json"),
            write_enabled: true,
            fallback: PathBuf::from(".sitewright/site.json"),
        }
    }
}

/// `[remote]` - plan generation / validation endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the plan service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8787".to_string(),
            timeout_secs: 30,
        }
    }
}

/// `[plan]` - where the editor-session plan document lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlanFileConfig {
    /// Plan document file (relative to project root).
    pub file: PathBuf,
}

impl Default for PlanFileConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("plan.json"),
        }
    }
}

/// `[secrets]` - opaque key-value secrets store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecretsFileConfig {
    /// JSON file holding integration secrets. Tilde-expanded; relative
    /// paths resolve against the project root. Absent means env-only.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file. The project root is the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'sitewright init' to create a new project.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir()?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Finalize configuration after loading: resolve all paths.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.site.file = root.join(&self.site.file);
        self.site.fallback = root.join(&self.site.fallback);
        self.plan.file = root.join(&self.plan.file);
        if let Some(file) = self.secrets.file.take() {
            self.secrets.file = Some(expand_secrets_path(&file, &root));
        }
        self.root = root;
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
        eprintln!();
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.remote.base_url.trim().is_empty() {
            return Err(ConfigError::Validation("remote.base_url must not be empty".into()).into());
        }
        if self.remote.timeout_secs == 0 {
            return Err(ConfigError::Validation("remote.timeout_secs must be positive".into()).into());
        }
        Ok(())
    }

    /// TOML template written by `init` (and printed by `init --dry`).
    pub fn template() -> &'static str {
        TEMPLATE
    }
}

/// Expand tilde and resolve relative secrets paths against the root.
fn expand_secrets_path(path: &Path, root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(path.to_str().unwrap_or_default()).into_owned();
    let path = PathBuf::from(expanded);
    if path.is_relative() { root.join(path) } else { path }
}

/// Find config file by searching upward from the current directory.
fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

const TEMPLATE: &str = r#"# sitewright.toml

[site]
# Site configuration file (relative to project root)
file = "site.json"
# Write directly to `file`; when false, saves go to `fallback`
write_enabled = true
fallback = ".sitewright/site.json"

[remote]
# Plan generation / validation service
base_url = "http://127.0.0.1:8787"
timeout_secs = 30

[plan]
# Editor-session plan document
file = "plan.json"

[secrets]
# Integration secrets (JSON key-value file), env-only when unset
# file = "~/.config/sitewright/secrets.json"
"#;

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.site.file, PathBuf::from("site.json"));
        assert!(config.site.write_enabled);
        assert_eq!(config.remote.timeout_secs, 30);
        assert_eq!(config.plan.file, PathBuf::from("plan.json"));
        assert!(config.secrets.file.is_none());
    }

    #[test]
    fn test_template_parses_with_no_unknown_fields() {
        let (config, ignored) = AppConfig::parse_with_ignored(AppConfig::template()).unwrap();
        assert!(ignored.is_empty(), "template has unknown fields: {ignored:?}");
        assert_eq!(config.remote.base_url, "http://127.0.0.1:8787");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nfile = \"site.json\"\n[unknown_section]\nfield = \"value\"";
        let (_, ignored) = AppConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = AppConfig::from_str("[remote]\ntimeout_secs = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = AppConfig::from_str("[site\nfile = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_secrets_path_relative() {
        let root = Path::new("/srv/site");
        let expanded = expand_secrets_path(Path::new("secrets.json"), root);
        assert_eq!(expanded, PathBuf::from("/srv/site/secrets.json"));
    }
}
