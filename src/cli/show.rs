//! Show command: resolved render order and per-section state.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;

use super::common::load_site;
use crate::config::{AppConfig, SectionKey, SiteConfig};

/// Machine-readable summary for `show --json`.
#[derive(Debug, Serialize)]
struct ShowResult {
    order: Vec<SectionKey>,
    sections: Vec<SectionSummary>,
}

#[derive(Debug, Serialize)]
struct SectionSummary {
    key: SectionKey,
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

/// Execute show command
pub fn show_site(app: &AppConfig, json: bool) -> Result<()> {
    let (_, config) = load_site(app)?;
    let result = summarize(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", "render order:".bold());
    for (i, key) in result.order.iter().enumerate() {
        let title = result
            .sections
            .iter()
            .find(|s| s.key == *key)
            .and_then(|s| s.title.as_deref())
            .unwrap_or("-");
        println!("  {} {}  {}", format!("{i:>2}.").dimmed(), key.green(), title.dimmed());
    }

    let disabled: Vec<&SectionSummary> =
        result.sections.iter().filter(|s| !s.enabled).collect();
    if !disabled.is_empty() {
        println!("\n{}", "disabled:".bold());
        for section in disabled {
            println!("  {}", section.key.to_string().dimmed());
        }
    }
    Ok(())
}

fn summarize(config: &SiteConfig) -> ShowResult {
    let sections = config
        .sections
        .iter()
        .map(|(key, entry)| SectionSummary {
            key: *key,
            enabled: entry.enabled,
            position: entry.position,
            title: config
                .effective_content(*key)
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
        .collect();

    ShowResult {
        order: config.render_order(),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_starter() {
        let config = SiteConfig::starter();
        let result = summarize(&config);

        assert_eq!(result.order.first(), Some(&SectionKey::Header));
        assert_eq!(result.order.last(), Some(&SectionKey::Footer));

        let hero = result
            .sections
            .iter()
            .find(|s| s.key == SectionKey::Hero)
            .unwrap();
        assert!(hero.enabled);
        assert_eq!(hero.title.as_deref(), Some("Welcome"));
    }
}
