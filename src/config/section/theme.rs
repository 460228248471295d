//! Global visual tokens: colors, font family and font scale.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// Theme tokens shared by every rendered section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    /// Named color tokens (name → `#rgb`/`#rrggbb` hex).
    pub colors: IndexMap<String, String>,
    /// Font family applied to the whole page.
    pub font_family: String,
    /// Multiplier over the base font-size scale.
    pub font_scale: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: IndexMap::new(),
            font_family: "Inter".to_string(),
            font_scale: 1.0,
        }
    }
}

/// Partial update to [`Theme`]. Colors overlay key-by-key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ThemePatch {
    pub colors: Option<IndexMap<String, String>>,
    pub font_family: Option<String>,
    pub font_scale: Option<f32>,
}

impl Theme {
    pub const FIELD_COLORS: FieldPath = FieldPath::new("theme.colors");
    pub const FIELD_FONT_SCALE: FieldPath = FieldPath::new("theme.fontScale");

    /// Return a copy with `patch` applied.
    pub fn patched(&self, patch: &ThemePatch) -> Self {
        let mut colors = self.colors.clone();
        if let Some(patch_colors) = &patch.colors {
            for (name, value) in patch_colors {
                colors.insert(name.clone(), value.clone());
            }
        }
        Self {
            colors,
            font_family: patch
                .font_family
                .clone()
                .unwrap_or_else(|| self.font_family.clone()),
            font_scale: patch.font_scale.unwrap_or(self.font_scale),
        }
    }

    /// Validate color tokens and font scale.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (name, value) in &self.colors {
            if !is_hex_color(value) {
                diag.error_with_hint(
                    Self::FIELD_COLORS,
                    format!("color `{name}` is not a valid hex color: `{value}`"),
                    "use `#rgb` or `#rrggbb` notation",
                );
            }
        }
        if !(self.font_scale.is_finite() && self.font_scale > 0.0) {
            diag.error(
                Self::FIELD_FONT_SCALE,
                format!("font scale must be positive, got {}", self.font_scale),
            );
        }
    }
}

/// Check `#rgb` / `#rrggbb` hex notation.
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patched_overlays_colors() {
        let mut theme = Theme::default();
        theme.colors.insert("primary".into(), "#336699".into());
        theme.colors.insert("accent".into(), "#fff".into());

        let patch = ThemePatch {
            colors: Some(IndexMap::from([("primary".to_string(), "#000".to_string())])),
            ..ThemePatch::default()
        };

        let result = theme.patched(&patch);
        assert_eq!(result.colors["primary"], "#000");
        assert_eq!(result.colors["accent"], "#fff");
        assert_eq!(result.font_family, "Inter");
    }

    #[test]
    fn test_validate_rejects_bad_hex() {
        let mut theme = Theme::default();
        theme.colors.insert("primary".into(), "navy".into());

        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_rejects_non_positive_scale() {
        let theme = Theme {
            font_scale: 0.0,
            ..Theme::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#1A2b3C"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#ggg"));
    }
}
