//! Plan editor session: file-backed plan document plus the apply workflow.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Plan;
use crate::remote::{PlanService, RemoteError};

/// Dry-run first; submit for real only when the dry run accepts.
///
/// A rejected dry run returns the diagnostic body as the error and
/// changes nothing.
pub fn apply_plan(service: &dyn PlanService, plan: &Plan) -> Result<(), RemoteError> {
    let report = service.dry_run(plan)?;
    if !report.accepted {
        return Err(RemoteError::Rejected(
            report
                .message
                .unwrap_or_else(|| "no diagnostic provided".to_string()),
        ));
    }
    service.apply(plan)
}

/// File-backed plan document for one editor session.
pub struct PlanFile {
    path: PathBuf,
}

impl PlanFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session plan. A missing file is an error here: every
    /// mutation verb requires a prior `plan generate`.
    pub fn load(&self) -> Result<Plan> {
        let content = std::fs::read_to_string(&self.path).with_context(|| {
            format!(
                "no plan at `{}` - run `sitewright plan generate` first",
                self.path.display()
            )
        })?;
        serde_json::from_str(&content)
            .with_context(|| format!("malformed plan in `{}`", self.path.display()))
    }

    pub fn save(&self, plan: &Plan) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(plan)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write plan to `{}`", self.path.display()))
    }
}
