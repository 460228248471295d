//! Plan command: the AI-editor session over a file-backed plan document.

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;

use super::PlanAction;
use crate::config::{AppConfig, JsonMap};
use crate::plan::{
    PlanFile, PlanSection, add_section, apply_plan, move_section, update_section_props,
};
use crate::remote::{HttpPlanService, PlanService};
use crate::{debug, log};

/// Execute plan command
pub fn run_plan(app: &AppConfig, action: &PlanAction) -> Result<()> {
    let file = PlanFile::new(&app.plan.file);

    match action {
        PlanAction::Generate { prompt } => generate(app, &file, prompt),
        PlanAction::Show => show(&file),
        PlanAction::Move { from, to } => {
            let plan = file.load()?;
            let sections = move_section(&plan.sections(), *from, *to)?;
            file.save(&plan.with_sections(sections))?;
            log!("plan"; "moved section {from} to {to}");
            Ok(())
        }
        PlanAction::Add { component, at, props } => add(app, &file, component, *at, props.as_deref()),
        PlanAction::SetProps { index, props } => {
            let plan = file.load()?;
            let patch = parse_props(props)?;
            let sections = update_section_props(&plan.sections(), *index, &patch)?;
            file.save(&plan.with_sections(sections))?;
            log!("plan"; "updated props of section {index}");
            Ok(())
        }
        PlanAction::Apply => apply(app, &file),
    }
}

fn service(app: &AppConfig) -> Result<HttpPlanService> {
    HttpPlanService::new(&app.remote.base_url, app.remote.timeout_secs)
        .context("failed to build HTTP client")
}

fn generate(app: &AppConfig, file: &PlanFile, prompt: &str) -> Result<()> {
    let service = service(app)?;
    let plan = service.generate(prompt)?;
    // Normalize: generated order fields must equal their index
    let plan = plan.with_sections(plan.sections());

    file.save(&plan)?;
    log!(
        "plan";
        "generated plan with {} section(s), saved to `{}`",
        plan.sections().len(),
        file.path().display()
    );
    Ok(())
}

fn show(file: &PlanFile) -> Result<()> {
    let plan = file.load()?;
    let sections = plan.sections();
    if sections.is_empty() {
        log!("plan"; "plan is empty");
        return Ok(());
    }
    for section in &sections {
        println!(
            "  {} {}",
            format!("{:>2}.", section.order).dimmed(),
            section.component_key.green()
        );
    }
    Ok(())
}

fn add(
    app: &AppConfig,
    file: &PlanFile,
    component: &str,
    at: Option<usize>,
    props: Option<&str>,
) -> Result<()> {
    let plan = file.load()?;

    let props = match props {
        Some(inline) => parse_props(inline)?,
        None => default_props(app, component),
    };

    let mut section = PlanSection::new(component);
    section.props = props;

    let sections = add_section(&plan.sections(), section, at);
    file.save(&plan.with_sections(sections))?;
    log!("plan"; "added `{component}`");
    Ok(())
}

/// Seed props from the components-map endpoint; an unreachable endpoint
/// degrades to empty props with a warning.
fn default_props(app: &AppConfig, component: &str) -> JsonMap {
    let map = service(app)
        .and_then(|service| service.components_map().map_err(anyhow::Error::from));
    match map {
        Ok(mut map) => map.shift_remove(component).unwrap_or_default(),
        Err(err) => {
            log!("warning"; "components map unavailable ({err}), using empty props");
            JsonMap::new()
        }
    }
}

fn apply(app: &AppConfig, file: &PlanFile) -> Result<()> {
    let plan = file.load()?;
    let service = service(app)?;

    debug!("plan"; "dry-running plan from `{}`", file.path().display());
    apply_plan(&service, &plan)?;
    log!("plan"; "plan accepted and applied");
    Ok(())
}

fn parse_props(inline: &str) -> Result<JsonMap> {
    let value: serde_json::Value =
        serde_json::from_str(inline).context("props must be valid JSON")?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => bail!("props must be a JSON object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_props_object() {
        let props = parse_props(r#"{"title": "Hi"}"#).unwrap();
        assert_eq!(props["title"], serde_json::json!("Hi"));
    }

    #[test]
    fn test_parse_props_rejects_non_object() {
        assert!(parse_props("[1, 2]").is_err());
        assert!(parse_props("not json").is_err());
    }
}
