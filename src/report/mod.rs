//! Check-run publishing for mypy-annotate.
//!
//! The verdict and annotations are published as one check run: a create call
//! carrying the first batch, then one update call per further batch. The
//! transport sits behind the `ChecksApi` trait; [`GitHubChecks`] is the
//! HTTP implementation.

mod github;
mod publisher;
mod types;

// Re-export public API
pub use github::GitHubChecks;
pub use publisher::{BatchPublisher, PublishSettings};
