//! Batched publishing of annotations.

use crate::annotate::{Annotation, RunVerdict};
use crate::context::RunContext;
use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};

use super::types::{CheckRunId, CheckRunOutput, CreateCheckRun, UpdateCheckRun};

/// The reporting boundary: create a check run, then update it by id.
pub trait ChecksApi {
    fn create_check_run(&mut self, ctx: &RunContext, request: &CreateCheckRun)
    -> Result<CheckRunId>;

    fn update_check_run(
        &mut self,
        ctx: &RunContext,
        id: CheckRunId,
        request: &UpdateCheckRun,
    ) -> Result<()>;
}

impl<T: ChecksApi + ?Sized> ChecksApi for &mut T {
    fn create_check_run(
        &mut self,
        ctx: &RunContext,
        request: &CreateCheckRun,
    ) -> Result<CheckRunId> {
        (**self).create_check_run(ctx, request)
    }

    fn update_check_run(
        &mut self,
        ctx: &RunContext,
        id: CheckRunId,
        request: &UpdateCheckRun,
    ) -> Result<()> {
        (**self).update_check_run(ctx, id, request)
    }
}

/// Naming and batching for published check runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSettings {
    /// Check-run name, also used as the output title.
    pub name: String,
    /// Lowercase tool label used in the summary.
    pub label: String,
    /// Annotations per request.
    pub batch_size: usize,
}

/// What a successful publish did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishReport {
    pub check_run_id: CheckRunId,
    /// Total create + update calls issued.
    pub requests: usize,
}

/// Publishes a verdict and its annotations in fixed-size batches.
pub struct BatchPublisher<A> {
    api: A,
    settings: PublishSettings,
}

impl<A: ChecksApi> BatchPublisher<A> {
    pub fn new(api: A, settings: PublishSettings) -> Self {
        Self { api, settings }
    }

    /// Publish `annotations` against the revision in `ctx`.
    ///
    /// Batch `i` holds annotations `[i * batch_size, (i + 1) * batch_size)`.
    /// The first batch (possibly empty) goes with the create call; each
    /// later batch is sent as an update, one after another. Calls are not
    /// retried; the first failure is returned and later batches are skipped.
    pub fn publish(
        &mut self,
        ctx: &RunContext,
        verdict: &RunVerdict,
        annotations: &[Annotation],
        completed_at: DateTime<Utc>,
    ) -> Result<PublishReport> {
        let batch_size = self.settings.batch_size.max(1);
        let mut batches = annotations.chunks(batch_size);

        let first = batches.next().unwrap_or(&[]);
        let create = CreateCheckRun {
            name: self.settings.name.clone(),
            head_sha: ctx.head_sha.clone(),
            completed_at: completed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            conclusion: verdict.conclusion,
            output: self.output(verdict, first),
        };

        let check_run_id = self.api.create_check_run(ctx, &create)?;
        tracing::info!(
            id = %check_run_id,
            conclusion = %verdict.conclusion,
            annotations = first.len(),
            "created check run"
        );

        let mut requests = 1;
        for batch in batches {
            let update = UpdateCheckRun {
                output: self.output(verdict, batch),
            };
            self.api.update_check_run(ctx, check_run_id, &update)?;
            requests += 1;
            tracing::info!(id = %check_run_id, annotations = batch.len(), "updated check run");
        }

        Ok(PublishReport {
            check_run_id,
            requests,
        })
    }

    fn output(&self, verdict: &RunVerdict, batch: &[Annotation]) -> CheckRunOutput {
        CheckRunOutput {
            title: self.settings.name.clone(),
            summary: verdict.summary(&self.settings.label),
            annotations: batch.to_vec(),
        }
    }
}
