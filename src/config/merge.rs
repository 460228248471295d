//! Pure merge of partial patches into a full site configuration.
//!
//! Merge walks the typed patch structure: mapping-typed values overlay one
//! level deep per nesting level (patch keys overwrite, base keys absent from
//! the patch are preserved), while arrays and primitives replace wholesale.
//! Patching one entry of a list therefore requires resending the whole list;
//! element-wise merge would need identity keys the data model does not define.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::SiteConfig;
use super::section::{FooterPatch, HeaderPatch, SectionKey, SectionPatch, ThemePatch};

/// Insertion-ordered JSON object, the shape of opaque content/style blocks.
pub type JsonMap = serde_json::Map<String, Value>;

// ============================================================================
// ConfigPatch
// ============================================================================

/// A partial update to a [`SiteConfig`].
///
/// Every top-level key is optional; unknown keys are rejected at
/// deserialization with a descriptive error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ConfigPatch {
    /// Per-section updates; keys absent from the base are inserted.
    pub sections: Option<IndexMap<SectionKey, SectionPatch>>,
    pub theme: Option<ThemePatch>,
    /// Per-section default copy; each block overlays key-by-key.
    pub content: Option<IndexMap<SectionKey, JsonMap>>,
    /// Named image slots; overlays key-by-key.
    pub images: Option<IndexMap<String, String>>,
    pub header: Option<HeaderPatch>,
    pub footer: Option<FooterPatch>,
    /// Opaque advanced settings; overlays key-by-key.
    pub advanced: Option<JsonMap>,
}

// ============================================================================
// merge
// ============================================================================

/// Merge `patch` into `base`, returning a new configuration.
///
/// Pure: neither argument is mutated. Repeating the same patch is a no-op:
/// `merge(&merge(base, patch), patch) == merge(base, patch)`.
pub fn merge(base: &SiteConfig, patch: &ConfigPatch) -> SiteConfig {
    let mut result = base.clone();

    if let Some(section_patches) = &patch.sections {
        for (key, section_patch) in section_patches {
            let entry = result.sections.get(key).cloned().unwrap_or_default();
            result.sections.insert(*key, entry.patched(section_patch));
        }
    }

    if let Some(theme_patch) = &patch.theme {
        result.theme = result.theme.patched(theme_patch);
    }

    if let Some(content_patches) = &patch.content {
        for (key, block) in content_patches {
            let merged = overlay(result.content.get(key), block);
            result.content.insert(*key, merged);
        }
    }

    if let Some(image_patches) = &patch.images {
        for (slot, url) in image_patches {
            result.images.insert(slot.clone(), url.clone());
        }
    }

    if let Some(header_patch) = &patch.header {
        result.header = result.header.patched(header_patch);
    }

    if let Some(footer_patch) = &patch.footer {
        result.footer = result.footer.patched(footer_patch);
    }

    if let Some(advanced_patch) = &patch.advanced {
        result.advanced = overlay(Some(&result.advanced), advanced_patch);
    }

    result
}

// ============================================================================
// overlay helpers
// ============================================================================

/// Overlay `patch` onto `base` one level deep.
///
/// Patch keys overwrite base keys wholesale (arrays included); base keys
/// absent from the patch are preserved.
pub fn overlay(base: Option<&JsonMap>, patch: &JsonMap) -> JsonMap {
    let mut result = base.cloned().unwrap_or_default();
    for (key, value) in patch {
        result.insert(key.clone(), value.clone());
    }
    result
}

/// Overlay for optional maps: `None` patch keeps the base untouched.
pub fn overlay_optional(base: Option<&JsonMap>, patch: Option<&JsonMap>) -> Option<JsonMap> {
    match patch {
        Some(patch) => Some(overlay(base, patch)),
        None => base.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::SectionEntry;
    use serde_json::json;

    fn map(value: Value) -> JsonMap {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    fn base_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.sections.insert(
            SectionKey::Hero,
            SectionEntry {
                enabled: true,
                position: Some(1),
                content: Some(map(json!({"title": "Welcome", "subtitle": "Hi"}))),
                style: Some(map(json!({"background": "#fff"}))),
            },
        );
        config.sections.insert(
            SectionKey::Features,
            SectionEntry {
                enabled: true,
                position: Some(2),
                ..SectionEntry::default()
            },
        );
        config.content.insert(
            SectionKey::Features,
            map(json!({"title": "Features", "items": ["fast", "simple"]})),
        );
        config
    }

    fn parse_patch(value: Value) -> ConfigPatch {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_merge_preserves_untouched_siblings() {
        let base = base_config();
        let patch = parse_patch(json!({
            "sections": {"hero": {"content": {"title": "Hello"}}}
        }));

        let result = merge(&base, &patch);

        let hero = &result.sections[&SectionKey::Hero];
        assert!(hero.enabled);
        assert_eq!(hero.position, Some(1));
        assert_eq!(hero.content.as_ref().unwrap()["title"], json!("Hello"));
        assert_eq!(hero.content.as_ref().unwrap()["subtitle"], json!("Hi"));
        assert_eq!(hero.style.as_ref().unwrap()["background"], json!("#fff"));
        // Sibling section untouched
        assert_eq!(result.sections[&SectionKey::Features], base.sections[&SectionKey::Features]);
    }

    #[test]
    fn test_merge_is_pure() {
        let base = base_config();
        let snapshot = base.clone();
        let patch = parse_patch(json!({
            "sections": {"hero": {"enabled": false}}
        }));

        let _ = merge(&base, &patch);
        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_merge_idempotent_on_repeat() {
        let base = base_config();
        let patch = parse_patch(json!({
            "sections": {"hero": {"content": {"title": "Hello"}, "position": 4}},
            "theme": {"colors": {"primary": "#123456"}},
            "images": {"logo": "https://cdn.example/logo.png"}
        }));

        let once = merge(&base, &patch);
        let twice = merge(&once, &patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_inserts_missing_section_key() {
        let base = base_config();
        let patch = parse_patch(json!({
            "sections": {"stats": {"enabled": true, "position": 7}}
        }));

        let result = merge(&base, &patch);
        let stats = &result.sections[&SectionKey::Stats];
        assert!(stats.enabled);
        assert_eq!(stats.position, Some(7));
    }

    #[test]
    fn test_arrays_replace_wholesale() {
        let base = base_config();
        let patch = parse_patch(json!({
            "content": {"features": {"items": ["fast"]}}
        }));

        let result = merge(&base, &patch);
        let features = &result.content[&SectionKey::Features];
        assert_eq!(features["items"], json!(["fast"]));
        // Sibling key in the same block is preserved
        assert_eq!(features["title"], json!("Features"));
    }

    #[test]
    fn test_merge_rejects_unknown_top_level_key() {
        let result: Result<ConfigPatch, _> =
            serde_json::from_value(json!({"seo": {"title": "x"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_overlay_empty_base() {
        let patch = map(json!({"a": 1}));
        let result = overlay(None, &patch);
        assert_eq!(result["a"], json!(1));
    }
}
