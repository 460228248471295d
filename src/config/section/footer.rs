//! Footer settings: copyright text, links and social handles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::header::NavLink;

/// Settings for the page footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterSettings {
    /// Copyright / tagline text.
    pub text: String,
    /// Footer links, rendered in order.
    pub links: Vec<NavLink>,
    /// Social handles (network name → profile URL). Overlays key-by-key.
    pub social: IndexMap<String, String>,
}

/// Partial update to [`FooterSettings`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FooterPatch {
    pub text: Option<String>,
    pub links: Option<Vec<NavLink>>,
    pub social: Option<IndexMap<String, String>>,
}

impl FooterSettings {
    /// Return a copy with `patch` applied.
    pub fn patched(&self, patch: &FooterPatch) -> Self {
        let mut social = self.social.clone();
        if let Some(patch_social) = &patch.social {
            for (name, url) in patch_social {
                social.insert(name.clone(), url.clone());
            }
        }
        Self {
            text: patch.text.clone().unwrap_or_else(|| self.text.clone()),
            links: patch.links.clone().unwrap_or_else(|| self.links.clone()),
            social,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_overlays_by_key() {
        let footer = FooterSettings {
            text: "© Acme".into(),
            social: IndexMap::from([
                ("instagram".to_string(), "https://ig.example/acme".to_string()),
                ("x".to_string(), "https://x.example/acme".to_string()),
            ]),
            ..FooterSettings::default()
        };
        let patch = FooterPatch {
            social: Some(IndexMap::from([(
                "x".to_string(),
                "https://x.example/acme-hq".to_string(),
            )])),
            ..FooterPatch::default()
        };

        let result = footer.patched(&patch);
        assert_eq!(result.social["x"], "https://x.example/acme-hq");
        assert_eq!(result.social["instagram"], "https://ig.example/acme");
        assert_eq!(result.text, "© Acme");
    }
}
