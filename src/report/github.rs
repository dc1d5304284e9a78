//! GitHub check-run API client.

use crate::context::RunContext;
use crate::error::{AnnotateError, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use serde::Deserialize;

use super::publisher::ChecksApi;
use super::types::{CheckRunId, CreateCheckRun, UpdateCheckRun};

const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Deserialize)]
struct CheckRunResponse {
    id: CheckRunId,
}

/// Blocking client for `/repos/{owner}/{repo}/check-runs`.
pub struct GitHubChecks {
    client: Client,
    api_url: String,
    token: String,
}

impl std::fmt::Debug for GitHubChecks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubChecks")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl GitHubChecks {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("mypy-annotate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AnnotateError::ReportError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn check_runs_url(&self, ctx: &RunContext) -> String {
        format!(
            "{}/repos/{}/{}/check-runs",
            self.api_url, ctx.owner, ctx.repo
        )
    }

    fn check_run_url(&self, ctx: &RunContext, id: CheckRunId) -> String {
        format!("{}/{}", self.check_runs_url(ctx), id)
    }
}

/// Turn a non-2xx response into a `ReportError` carrying status and body.
fn ensure_success(resp: Response, action: &str) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status();
    let body = resp.text().unwrap_or_default();
    Err(AnnotateError::ReportError(format!(
        "{} failed ({}): {}",
        action, status, body
    )))
}

impl ChecksApi for GitHubChecks {
    fn create_check_run(
        &mut self,
        ctx: &RunContext,
        request: &CreateCheckRun,
    ) -> Result<CheckRunId> {
        let resp = self
            .client
            .post(self.check_runs_url(ctx))
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .header(API_VERSION_HEADER, API_VERSION)
            .json(request)
            .send()
            .map_err(|e| AnnotateError::ReportError(format!("create check run: {}", e)))?;

        let created: CheckRunResponse = ensure_success(resp, "create check run")?
            .json()
            .map_err(|e| {
                AnnotateError::ReportError(format!("create check run: invalid response: {}", e))
            })?;

        Ok(created.id)
    }

    fn update_check_run(
        &mut self,
        ctx: &RunContext,
        id: CheckRunId,
        request: &UpdateCheckRun,
    ) -> Result<()> {
        let resp = self
            .client
            .patch(self.check_run_url(ctx, id))
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .header(API_VERSION_HEADER, API_VERSION)
            .json(request)
            .send()
            .map_err(|e| AnnotateError::ReportError(format!("update check run {}: {}", id, e)))?;

        ensure_success(resp, &format!("update check run {}", id))?;
        Ok(())
    }
}
