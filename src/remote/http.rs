//! Blocking HTTP implementation of [`PlanService`].

use std::time::Duration;

use indexmap::IndexMap;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{DryRunReport, PlanService, RemoteError};
use crate::config::JsonMap;
use crate::debug;
use crate::plan::Plan;

/// Plan service backed by JSON-over-HTTP endpoints under one base URL.
pub struct HttpPlanService {
    base_url: String,
    client: Client,
}

impl HttpPlanService {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, RemoteError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        debug!("remote"; "POST {}", endpoint);
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .map_err(|source| RemoteError::Http {
                endpoint: endpoint.to_string(),
                source,
            })?;
        decode(endpoint, response)
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, RemoteError> {
        debug!("remote"; "GET {}", endpoint);
        let response =
            self.client
                .get(self.url(endpoint))
                .send()
                .map_err(|source| RemoteError::Http {
                    endpoint: endpoint.to_string(),
                    source,
                })?;
        decode(endpoint, response)
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T, RemoteError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(RemoteError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        });
    }
    response.json().map_err(|source| RemoteError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

impl PlanService for HttpPlanService {
    fn generate(&self, prompt: &str) -> Result<Plan, RemoteError> {
        self.post_json("/api/plan/generate", &json!({ "prompt": prompt }))
    }

    fn dry_run(&self, plan: &Plan) -> Result<DryRunReport, RemoteError> {
        self.post_json("/api/plan/dry-run", plan)
    }

    fn apply(&self, plan: &Plan) -> Result<(), RemoteError> {
        // Response body is ignored; only the status matters.
        let endpoint = "/api/plan/apply";
        debug!("remote"; "POST {}", endpoint);
        let response = self
            .client
            .post(self.url(endpoint))
            .json(plan)
            .send()
            .map_err(|source| RemoteError::Http {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }
        Ok(())
    }

    fn components_map(&self) -> Result<IndexMap<String, JsonMap>, RemoteError> {
        self.get_json("/api/components-map")
    }
}
