//! Per-section state: toggle, ordering hint and partial overlays.

use serde::{Deserialize, Serialize};

use crate::config::merge::{JsonMap, overlay_optional};

/// State of a single section in the site configuration.
///
/// `content` and `style` are partial overlays on top of the site-wide
/// defaults; absent keys fall through to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionEntry {
    /// Whether the section is rendered at all.
    pub enabled: bool,

    /// Ordering hint among non-header/footer sections.
    /// Not guaranteed unique; missing sorts after all present values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// Copy overrides layered on top of the site-wide content defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<JsonMap>,

    /// Visual styling overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<JsonMap>,
}

/// Partial update to a [`SectionEntry`].
///
/// `content`/`style` overlay key-by-key; `enabled`/`position` replace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionPatch {
    pub enabled: Option<bool>,
    pub position: Option<u32>,
    pub content: Option<JsonMap>,
    pub style: Option<JsonMap>,
}

impl SectionEntry {
    /// Return a copy of this entry with `patch` applied.
    ///
    /// Fields the patch does not supply are preserved; overlay maps never
    /// drop base keys absent from the patch.
    pub fn patched(&self, patch: &SectionPatch) -> Self {
        Self {
            enabled: patch.enabled.unwrap_or(self.enabled),
            position: patch.position.or(self.position),
            content: overlay_optional(self.content.as_ref(), patch.content.as_ref()),
            style: overlay_optional(self.style.as_ref(), patch.style.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: serde_json::Value) -> JsonMap {
        match value {
            serde_json::Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_patched_preserves_untouched_fields() {
        let entry = SectionEntry {
            enabled: true,
            position: Some(2),
            content: Some(map(json!({"title": "Welcome", "subtitle": "Hi"}))),
            style: None,
        };
        let patch = SectionPatch {
            content: Some(map(json!({"title": "Hello"}))),
            ..SectionPatch::default()
        };

        let result = entry.patched(&patch);
        assert!(result.enabled);
        assert_eq!(result.position, Some(2));
        let content = result.content.unwrap();
        assert_eq!(content["title"], json!("Hello"));
        assert_eq!(content["subtitle"], json!("Hi"));
    }

    #[test]
    fn test_patched_creates_content_when_absent() {
        let entry = SectionEntry::default();
        let patch = SectionPatch {
            enabled: Some(true),
            content: Some(map(json!({"title": "New"}))),
            ..SectionPatch::default()
        };

        let result = entry.patched(&patch);
        assert!(result.enabled);
        assert_eq!(result.content.unwrap()["title"], json!("New"));
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result: Result<SectionPatch, _> =
            serde_json::from_value(json!({"enabled": true, "visible": false}));
        assert!(result.is_err());
    }
}
