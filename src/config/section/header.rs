//! Header settings: logo, navigation links and CTA visibility.

use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// Settings for the fixed page header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderSettings {
    /// Logo image URL (from the images mapping or an absolute URL).
    pub logo: Option<String>,
    /// Navigation links, rendered in order.
    pub links: Vec<NavLink>,
    /// Keep the header pinned while scrolling.
    pub sticky: bool,
    /// Show the call-to-action button in the header.
    pub show_cta: bool,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            logo: None,
            links: Vec::new(),
            sticky: true,
            show_cta: true,
        }
    }
}

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Partial update to [`HeaderSettings`].
///
/// `links` is an array and replaces wholesale when supplied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct HeaderPatch {
    pub logo: Option<String>,
    pub links: Option<Vec<NavLink>>,
    pub sticky: Option<bool>,
    pub show_cta: Option<bool>,
}

impl HeaderSettings {
    pub const FIELD_LINKS: FieldPath = FieldPath::new("header.links");

    /// Return a copy with `patch` applied.
    pub fn patched(&self, patch: &HeaderPatch) -> Self {
        Self {
            logo: patch.logo.clone().or_else(|| self.logo.clone()),
            links: patch.links.clone().unwrap_or_else(|| self.links.clone()),
            sticky: patch.sticky.unwrap_or(self.sticky),
            show_cta: patch.show_cta.unwrap_or(self.show_cta),
        }
    }

    /// Validate navigation links have non-empty targets.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for link in &self.links {
            if link.href.trim().is_empty() {
                diag.error(
                    Self::FIELD_LINKS,
                    format!("link `{}` has an empty href", link.label),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(label: &str, href: &str) -> NavLink {
        NavLink {
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn test_links_replace_wholesale() {
        let header = HeaderSettings {
            links: vec![nav("Home", "/"), nav("About", "/about")],
            ..HeaderSettings::default()
        };
        let patch = HeaderPatch {
            links: Some(vec![nav("Blog", "/blog")]),
            ..HeaderPatch::default()
        };

        let result = header.patched(&patch);
        assert_eq!(result.links, vec![nav("Blog", "/blog")]);
        assert!(result.sticky);
    }

    #[test]
    fn test_validate_flags_empty_href() {
        let header = HeaderSettings {
            links: vec![nav("Broken", "  ")],
            ..HeaderSettings::default()
        };
        let mut diag = ConfigDiagnostics::new();
        header.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
