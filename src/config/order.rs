//! Render-order resolution for enabled sections.

use indexmap::IndexMap;

use super::section::{SectionEntry, SectionKey};

/// Resolve the render order of enabled sections.
///
/// Sorted by `position` ascending; entries without a position sort after
/// all entries that have one, and ties keep the mapping's insertion order
/// (stable sort). `header` is then pinned to the front and `footer` to the
/// back, regardless of their positions.
///
/// Deterministic and side-effect-free.
pub fn resolve_order(sections: &IndexMap<SectionKey, SectionEntry>) -> Vec<SectionKey> {
    let mut keys: Vec<SectionKey> = sections
        .iter()
        .filter(|(_, entry)| entry.enabled)
        .map(|(key, _)| *key)
        .collect();

    // Missing position sorts last; stable sort keeps insertion order on ties.
    keys.sort_by_key(|key| {
        sections
            .get(key)
            .and_then(|entry| entry.position)
            .map_or(u64::MAX, u64::from)
    });

    if let Some(i) = keys.iter().position(|key| *key == SectionKey::Header) {
        let header = keys.remove(i);
        keys.insert(0, header);
    }
    if let Some(i) = keys.iter().position(|key| *key == SectionKey::Footer) {
        let footer = keys.remove(i);
        keys.push(footer);
    }

    keys
}
