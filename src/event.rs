//! Pull request event payload structures
//!
//! The Actions runner writes the webhook payload that triggered the job to
//! the file named by `GITHUB_EVENT_PATH`. Only the fields the linking flow
//! needs are modeled; everything else in the payload is ignored.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{LinkError, Result};
use crate::utils::{FieldValue, validate_fields};

#[derive(Debug, Deserialize)]
pub struct PullRequestEvent {
    pub pull_request: Option<PullRequest>,
    pub repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub head: Option<Head>,
    pub html_url: Option<String>,
    pub number: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Head {
    #[serde(rename = "ref")]
    pub ref_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub full_name: Option<String>,
}

/// Reads and parses the event payload from the file named by
/// `GITHUB_EVENT_PATH`.
pub fn load_event() -> Result<PullRequestEvent> {
    let path = std::env::var("GITHUB_EVENT_PATH")
        .map_err(|_| LinkError::Event("GITHUB_EVENT_PATH is not set".to_string()))?;
    load_event_from(Path::new(&path))
}

/// Reads and parses an event payload file.
pub fn load_event_from(path: &Path) -> Result<PullRequestEvent> {
    let raw = fs::read_to_string(path).map_err(|e| {
        LinkError::Event(format!("Failed to read event payload {:?}: {}", path, e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        LinkError::Event(format!("Failed to parse event payload {:?}: {}", path, e))
    })
}

/// The set of values from the trigger payload needed to run the linking
/// sequence. Constructed once per run and handed through the pipeline.
#[derive(Debug, Clone)]
pub struct TriggerContext {
    pub branch_ref: String,
    pub pr_url: String,
    pub issue_number: u64,
    pub full_name: String,
}

impl TriggerContext {
    /// Pulls the trigger fields out of a parsed event payload and validates
    /// them. Absent payload sections collapse to empty values so that every
    /// missing field is reported together in a single error.
    pub fn from_event(event: &PullRequestEvent) -> Result<Self> {
        let pr = event.pull_request.as_ref();
        let ctx = Self {
            branch_ref: pr
                .and_then(|p| p.head.as_ref())
                .and_then(|h| h.ref_name.clone())
                .unwrap_or_default(),
            pr_url: pr.and_then(|p| p.html_url.clone()).unwrap_or_default(),
            issue_number: pr.and_then(|p| p.number).unwrap_or_default(),
            full_name: event
                .repository
                .as_ref()
                .and_then(|r| r.full_name.clone())
                .unwrap_or_default(),
        };
        debug!(
            "Trigger details: ref='{}' url='{}' number={} repo='{}'",
            ctx.branch_ref, ctx.pr_url, ctx.issue_number, ctx.full_name
        );
        ctx.validate()?;
        Ok(ctx)
    }

    fn validate(&self) -> Result<()> {
        validate_fields(&[
            ("pr ref", FieldValue::Text(&self.branch_ref)),
            ("pr url", FieldValue::Text(&self.pr_url)),
            ("issue number", FieldValue::Number(self.issue_number)),
            ("repo name", FieldValue::Text(&self.full_name)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkError;

    fn parse(json: &str) -> PullRequestEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn context_from_full_payload() {
        let event = parse(
            r#"{
                "pull_request": {
                    "head": { "ref": "feature/42" },
                    "html_url": "https://github.com/o/r/pull/7",
                    "number": 7
                },
                "repository": { "full_name": "o/r" }
            }"#,
        );
        let ctx = TriggerContext::from_event(&event).unwrap();
        assert_eq!(ctx.branch_ref, "feature/42");
        assert_eq!(ctx.pr_url, "https://github.com/o/r/pull/7");
        assert_eq!(ctx.issue_number, 7);
        assert_eq!(ctx.full_name, "o/r");
    }

    #[test]
    fn missing_fields_are_all_named() {
        let event = parse(
            r#"{
                "pull_request": {
                    "head": { "ref": "feature/42" },
                    "number": 0
                }
            }"#,
        );
        let err = TriggerContext::from_event(&event).unwrap_err();
        assert!(
            matches!(err, LinkError::MissingFields(names) if names == "pr url, issue number, repo name")
        );
    }

    #[test]
    fn empty_payload_reports_every_field() {
        let event = parse("{}");
        let err = TriggerContext::from_event(&event).unwrap_err();
        assert!(
            matches!(err, LinkError::MissingFields(names) if names == "pr ref, pr url, issue number, repo name")
        );
    }

    #[test]
    fn unknown_payload_fields_are_ignored() {
        let event = parse(
            r#"{
                "action": "opened",
                "pull_request": {
                    "head": { "ref": "fix/9", "sha": "abc123" },
                    "html_url": "https://github.com/o/r/pull/1",
                    "number": 1,
                    "draft": false
                },
                "repository": { "full_name": "o/r", "private": true }
            }"#,
        );
        assert!(TriggerContext::from_event(&event).is_ok());
    }
}
