//! GitHub API client
//!
//! Only one capability is needed here: creating a comment on an issue or
//! pull request (the issues API covers both).

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::error::{LinkError, Result};

/// GitHub rejects API requests without a User-Agent header.
const USER_AGENT: &str = concat!("pr_asana_link/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub REST API.
pub struct GithubClient {
    client: Client,
    base_url: Url,
    token: SecretString,
}

impl GithubClient {
    pub fn new(token: SecretString, base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    /// Creates a comment on an issue or pull request.
    pub async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<()> {
        let url = self
            .base_url
            .join(&format!(
                "repos/{}/{}/issues/{}/comments",
                owner, repo, issue_number
            ))
            .map_err(|e| LinkError::Config(format!("Invalid URL join: {}", e)))?;
        debug!("POST {}", url);

        let res = self
            .client
            .post(url)
            .bearer_auth(self.token.expose_secret())
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .json(&json!({ "body": body }))
            .send()
            .await?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(LinkError::from_response("GitHub", res).await)
        }
    }
}
