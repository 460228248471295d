//! Site configuration model for `site.json`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Section definitions
//! │   ├── key        # SectionKey (closed enum)
//! │   ├── entry      # SectionEntry + SectionPatch
//! │   ├── theme      # Theme tokens
//! │   ├── header     # Header settings
//! │   └── footer     # Footer settings
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── app            # AppConfig (sitewright.toml)
//! ├── merge          # ConfigPatch + merge()
//! ├── order          # resolve_order()
//! └── mod.rs         # SiteConfig (this file)
//! ```

pub mod app;
pub mod merge;
pub mod order;
pub mod section;
pub mod types;

pub use app::AppConfig;
pub use merge::{ConfigPatch, JsonMap, merge};
pub use order::resolve_order;
pub use section::{
    FooterSettings, HeaderSettings, NavLink, SectionEntry, SectionKey, Theme,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::json;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration for a rendered site.
///
/// Created once from the starter template, loaded from persisted JSON at
/// session start, mutated in memory through [`merge`] during an editing
/// session, and explicitly persisted on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Per-section state; iteration order is insertion order and breaks
    /// position ties during order resolution.
    pub sections: IndexMap<SectionKey, SectionEntry>,

    /// Global visual tokens.
    pub theme: Theme,

    /// Per-section default copy, used when a section's `content` override
    /// is absent.
    pub content: IndexMap<SectionKey, JsonMap>,

    /// Named image slots (slot → URL).
    pub images: IndexMap<String, String>,

    /// Header settings.
    pub header: HeaderSettings,

    /// Footer settings.
    pub footer: FooterSettings,

    /// Opaque advanced settings, merged by overlay like any other mapping.
    pub advanced: JsonMap,
}

impl SiteConfig {
    pub const FIELD_IMAGES: FieldPath = FieldPath::new("images");
    pub const FIELD_SECTIONS: FieldPath = FieldPath::new("sections");

    /// The default configuration a new site starts from.
    pub fn starter() -> Self {
        let mut config = Self::default();

        for (i, key) in [
            SectionKey::Header,
            SectionKey::Hero,
            SectionKey::Features,
            SectionKey::Services,
            SectionKey::Cta,
            SectionKey::Footer,
        ]
        .into_iter()
        .enumerate()
        {
            config.sections.insert(
                key,
                SectionEntry {
                    enabled: true,
                    position: Some(i as u32),
                    content: None,
                    style: None,
                },
            );
        }

        config.theme.colors.insert("primary".into(), "#336699".into());
        config.theme.colors.insert("accent".into(), "#ff8800".into());
        config.theme.colors.insert("background".into(), "#ffffff".into());

        let content_defaults = [
            (SectionKey::Hero, json!({"title": "Welcome", "subtitle": "Tell visitors what you do"})),
            (SectionKey::Features, json!({"title": "What we offer", "items": []})),
            (SectionKey::Services, json!({"title": "Services", "items": []})),
            (SectionKey::Cta, json!({"title": "Get in touch", "buttonLabel": "Contact us"})),
        ];
        for (key, block) in content_defaults {
            if let serde_json::Value::Object(map) = block {
                config.content.insert(key, map);
            }
        }

        config.header.links.push(NavLink {
            label: "Home".into(),
            href: "/".into(),
        });
        config.footer.text = "Built with sitewright".into();

        config
    }

    /// Return a copy with `patch` merged in. See [`merge`].
    pub fn merged(&self, patch: &ConfigPatch) -> Self {
        merge(self, patch)
    }

    /// Render order of enabled sections. See [`resolve_order`].
    pub fn render_order(&self) -> Vec<SectionKey> {
        resolve_order(&self.sections)
    }

    /// Effective copy for a section: site-wide defaults overlaid with the
    /// section's own `content` override.
    pub fn effective_content(&self, key: SectionKey) -> JsonMap {
        let defaults = self.content.get(&key);
        let override_block = self
            .sections
            .get(&key)
            .and_then(|entry| entry.content.as_ref());
        match override_block {
            Some(block) => merge::overlay(defaults, block),
            None => defaults.cloned().unwrap_or_default(),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration, collecting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.theme.validate(&mut diag);
        self.header.validate(&mut diag);

        for (slot, url) in &self.images {
            if url.trim().is_empty() {
                diag.error(
                    Self::FIELD_IMAGES,
                    format!("image slot `{slot}` has an empty URL"),
                );
            }
        }

        self.check_duplicate_positions(&mut diag);

        diag.print_hints();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Duplicate positions among enabled sections are legal (ties break by
    /// insertion order) but usually unintended; surface them as hints.
    fn check_duplicate_positions(&self, diag: &mut ConfigDiagnostics) {
        let mut seen: IndexMap<u32, SectionKey> = IndexMap::new();
        for (key, entry) in &self.sections {
            if !entry.enabled {
                continue;
            }
            if let Some(position) = entry.position {
                if let Some(first) = seen.get(&position) {
                    diag.hint(
                        Self::FIELD_SECTIONS,
                        format!("`{key}` and `{first}` share position {position}"),
                    );
                } else {
                    seen.insert(position, *key);
                }
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
