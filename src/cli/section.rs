//! Section command: convenience patches for toggling and repositioning.

use anyhow::Result;
use indexmap::IndexMap;

use super::SectionAction;
use super::common::{apply_and_save, load_site};
use crate::config::section::SectionPatch;
use crate::config::{AppConfig, ConfigPatch, SectionKey};
use crate::log;

/// Execute section command
pub fn run_section(app: &AppConfig, action: &SectionAction) -> Result<()> {
    let (key, patch, verb) = match action {
        SectionAction::Enable { key } => (
            *key,
            SectionPatch {
                enabled: Some(true),
                ..SectionPatch::default()
            },
            "enabled",
        ),
        SectionAction::Disable { key } => (
            *key,
            SectionPatch {
                enabled: Some(false),
                ..SectionPatch::default()
            },
            "disabled",
        ),
        SectionAction::Move { key, position } => (
            *key,
            SectionPatch {
                position: Some(*position),
                ..SectionPatch::default()
            },
            "moved",
        ),
    };

    let (store, config) = load_site(app)?;
    apply_and_save(&store, &config, &section_patch(key, patch))?;
    log!("section"; "{verb} `{key}`");
    Ok(())
}

/// Wrap a single-section patch in a full config patch.
fn section_patch(key: SectionKey, patch: SectionPatch) -> ConfigPatch {
    ConfigPatch {
        sections: Some(IndexMap::from([(key, patch)])),
        ..ConfigPatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_section_patch_only_touches_target() {
        let base = SiteConfig::starter();
        let patch = section_patch(
            SectionKey::Blog,
            SectionPatch {
                enabled: Some(true),
                position: Some(10),
                ..SectionPatch::default()
            },
        );

        let merged = base.merged(&patch);
        assert!(merged.sections[&SectionKey::Blog].enabled);
        assert_eq!(merged.sections[&SectionKey::Hero], base.sections[&SectionKey::Hero]);
    }
}
