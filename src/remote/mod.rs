//! Opaque HTTP collaborators: plan generation, dry-run validation and the
//! components map.
//!
//! Requests are fire-and-forget with simple success/error handling - no
//! retry, no backoff. A failed request surfaces an error and leaves all
//! in-memory state untouched.

pub mod http;

pub use http::HttpPlanService;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::config::JsonMap;
use crate::plan::Plan;

/// Result of a dry-run validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DryRunReport {
    /// Whether the plan was accepted.
    pub accepted: bool,
    /// Diagnostic body on rejection.
    pub message: Option<String>,
}

/// The plan service surface the console talks to.
pub trait PlanService {
    /// Generate a plan from a natural-language prompt.
    fn generate(&self, prompt: &str) -> Result<Plan, RemoteError>;

    /// Validation-only submission; reports acceptance without persisting.
    fn dry_run(&self, plan: &Plan) -> Result<DryRunReport, RemoteError>;

    /// Submit a plan for real.
    fn apply(&self, plan: &Plan) -> Result<(), RemoteError>;

    /// Component key → example props, used to seed `props` for
    /// interactively added sections.
    fn components_map(&self) -> Result<IndexMap<String, JsonMap>, RemoteError>;
}

/// Errors from the remote endpoints.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to `{endpoint}` failed")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("`{endpoint}` returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("malformed response from `{endpoint}`")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("plan rejected by dry-run: {0}")]
    Rejected(String),
}
