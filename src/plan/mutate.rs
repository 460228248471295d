//! Pure mutations over a plan's ordered section list.
//!
//! None of these mutate their input; all return new sequences with the
//! `order` field re-derived from index (0-based, contiguous).
//!
//! Out-of-range indices addressing an existing entry (`move_section`,
//! `update_section_props`) are rejected with [`PlanError::IndexOutOfRange`].
//! `add_section` clamps its insertion point to `[0, len]` since any point
//! in that range is a valid place to insert.

use thiserror::Error;

use super::PlanSection;
use crate::config::JsonMap;
use crate::config::merge::overlay;

/// Errors from plan mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("section index {index} out of range (plan has {len} sections)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Re-derive every entry's `order` from its index.
pub fn reindex(sections: &mut [PlanSection]) {
    for (i, section) in sections.iter_mut().enumerate() {
        section.order = i;
    }
}

/// Remove the entry at `from` and reinsert it at `to`.
pub fn move_section(
    sections: &[PlanSection],
    from: usize,
    to: usize,
) -> Result<Vec<PlanSection>, PlanError> {
    let len = sections.len();
    let check = |index: usize| {
        if index < len {
            Ok(())
        } else {
            Err(PlanError::IndexOutOfRange { index, len })
        }
    };
    check(from)?;
    check(to)?;

    let mut result = sections.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    reindex(&mut result);
    Ok(result)
}

/// Insert `section` at `at` (clamped to `[0, len]`), or append when `at`
/// is absent.
pub fn add_section(
    sections: &[PlanSection],
    section: PlanSection,
    at: Option<usize>,
) -> Vec<PlanSection> {
    let mut result = sections.to_vec();
    let at = at.unwrap_or(result.len()).min(result.len());
    result.insert(at, section);
    reindex(&mut result);
    result
}

/// Shallow-merge `patch` into the props of the entry at `idx`.
pub fn update_section_props(
    sections: &[PlanSection],
    idx: usize,
    patch: &JsonMap,
) -> Result<Vec<PlanSection>, PlanError> {
    if idx >= sections.len() {
        return Err(PlanError::IndexOutOfRange {
            index: idx,
            len: sections.len(),
        });
    }

    let mut result = sections.to_vec();
    result[idx].props = overlay(Some(&result[idx].props), patch);
    reindex(&mut result);
    Ok(result)
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

    fn plan_sections(keys: &[&str]) -> Vec<PlanSection> {
        let mut sections: Vec<PlanSection> =
            keys.iter().map(|k| PlanSection::new(*k)).collect();
        reindex(&mut sections);
        sections
    }

    fn keys(sections: &[PlanSection]) -> Vec<&str> {
        sections.iter().map(|s| s.component_key.as_str()).collect()
    }

    fn assert_reindexed(sections: &[PlanSection]) {
        for (i, section) in sections.iter().enumerate() {
            assert_eq!(section.order, i);
        }
    }

    #[test]
    fn test_move_section() {
        let sections = plan_sections(&["A", "B", "C"]);
        let moved = move_section(&sections, 0, 2).unwrap();
        assert_eq!(keys(&moved), vec!["B", "C", "A"]);
        assert_reindexed(&moved);
        // Input untouched
        assert_eq!(keys(&sections), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_move_section_round_trip() {
        let sections = plan_sections(&["A", "B", "C", "D"]);
        let there = move_section(&sections, 1, 3).unwrap();
        let back = move_section(&there, 3, 1).unwrap();
        assert_eq!(back, sections);
    }

    #[test]
    fn test_move_section_out_of_range() {
        let sections = plan_sections(&["A", "B"]);
        assert_eq!(
            move_section(&sections, 0, 2),
            Err(PlanError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            move_section(&sections, 5, 0),
            Err(PlanError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_add_section_at_front() {
        let sections = plan_sections(&["A"]);
        let added = add_section(&sections, PlanSection::new("B"), Some(0));
        assert_eq!(keys(&added), vec!["B", "A"]);
        assert_reindexed(&added);
    }

    #[test]
    fn test_add_section_appends_by_default() {
        let sections = plan_sections(&["A", "B"]);
        let added = add_section(&sections, PlanSection::new("C"), None);
        assert_eq!(keys(&added), vec!["A", "B", "C"]);
        assert_reindexed(&added);
    }

    #[test]
    fn test_add_section_clamps_insertion_point() {
        let sections = plan_sections(&["A"]);
        let added = add_section(&sections, PlanSection::new("B"), Some(99));
        assert_eq!(keys(&added), vec!["A", "B"]);
        assert_reindexed(&added);
    }

    #[test]
    fn test_update_section_props_merges_shallow() {
        let mut sections = plan_sections(&["Hero"]);
        sections[0].props = map(json!({"title": "Hi", "variant": "wide"}));

        let updated =
            update_section_props(&sections, 0, &map(json!({"title": "Hello"}))).unwrap();
        assert_eq!(updated[0].props["title"], json!("Hello"));
        assert_eq!(updated[0].props["variant"], json!("wide"));
        assert_reindexed(&updated);
        // Input untouched
        assert_eq!(sections[0].props["title"], json!("Hi"));
    }

    #[test]
    fn test_update_section_props_creates_props() {
        let sections = plan_sections(&["Hero"]);
        let updated = update_section_props(&sections, 0, &map(json!({"x": 1}))).unwrap();
        assert_eq!(updated[0].props["x"], json!(1));
    }

    #[test]
    fn test_update_section_props_out_of_range() {
        let sections = plan_sections(&["Hero"]);
        assert_eq!(
            update_section_props(&sections, 3, &JsonMap::new()),
            Err(PlanError::IndexOutOfRange { index: 3, len: 1 })
        );
    }
}
