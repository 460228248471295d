//! Plan documents produced by the AI-editor surface.
//!
//! A plan is an ordered list of component placements, distinct from the
//! live site configuration. It is mutated in memory during an editor
//! session and only takes effect after an explicit, validated apply.

pub mod mutate;
pub mod session;

pub use mutate::{add_section, move_section, update_section_props};
pub use session::{PlanFile, apply_plan};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::JsonMap;

/// A plan document, as returned by the generation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub layout: Layout,
}

/// Layout part of a plan: ordered sections plus opaque pass-through data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub sections: Vec<PlanSection>,
    /// Opaque theme data, passed through untouched.
    pub theme: Value,
    /// Opaque CTA data, passed through untouched.
    pub ctas: Value,
}

/// One component placement in a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanSection {
    pub component_key: String,
    pub props: JsonMap,
    /// Always equals the section's index after any mutation.
    pub order: usize,
}

impl PlanSection {
    pub fn new(component_key: impl Into<String>) -> Self {
        Self {
            component_key: component_key.into(),
            props: JsonMap::new(),
            order: 0,
        }
    }
}

impl Plan {
    /// Defensive copy of the layout sections.
    pub fn sections(&self) -> Vec<PlanSection> {
        self.layout.sections.clone()
    }

    /// New plan with `sections` replacing the layout, `order` re-derived
    /// from index. Opaque layout data is carried over.
    pub fn with_sections(&self, mut sections: Vec<PlanSection>) -> Self {
        mutate::reindex(&mut sections);
        Self {
            layout: Layout {
                sections,
                theme: self.layout.theme.clone(),
                ctas: self.layout.ctas.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format_is_camel_case() {
        let plan = Plan::default().with_sections(vec![PlanSection::new("Hero")]);
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["layout"]["sections"][0]["componentKey"], json!("Hero"));
    }

    #[test]
    fn test_missing_layout_defaults_to_empty() {
        let plan: Plan = serde_json::from_value(json!({})).unwrap();
        assert!(plan.sections().is_empty());
        assert_eq!(plan.layout.theme, Value::Null);
    }

    #[test]
    fn test_with_sections_reindexes() {
        let mut a = PlanSection::new("A");
        a.order = 9;
        let mut b = PlanSection::new("B");
        b.order = 9;

        let plan = Plan::default().with_sections(vec![a, b]);
        let orders: Vec<usize> = plan.sections().iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }

    #[test]
    fn test_with_sections_keeps_opaque_data() {
        let plan: Plan = serde_json::from_value(json!({
            "layout": {"sections": [], "theme": {"mode": "dark"}, "ctas": ["book"]}
        }))
        .unwrap();

        let updated = plan.with_sections(vec![PlanSection::new("Hero")]);
        assert_eq!(updated.layout.theme, json!({"mode": "dark"}));
        assert_eq!(updated.layout.ctas, json!(["book"]));
    }
}
