//! Asana API client
//!
//! Covers the two task operations the linking flow needs: reading a task
//! and appending a story (comment) to it. The client is passed explicitly
//! wherever it is used so tests can point it at a mock server.

use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{LinkError, Result};

/// A task as returned by `GET /tasks/{gid}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub gid: String,
    pub permalink_url: Option<String>,
}

/// Asana wraps every response payload in a `data` envelope.
#[derive(Debug, Deserialize)]
struct TaskEnvelope {
    data: Option<Task>,
}

/// Client for the Asana REST API.
pub struct AsanaClient {
    client: Client,
    base_url: Url,
    token: SecretString,
}

impl AsanaClient {
    pub fn new(token: SecretString, base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    /// Fetches a task by gid.
    /// A 404, or a 200 whose `data` is null, means there is no such task.
    pub async fn get_task(&self, gid: &str) -> Result<Task> {
        let url = self.join(&format!("tasks/{}", gid))?;
        debug!("GET {}", url);

        let res = self
            .client
            .get(url)
            .bearer_auth(self.token.expose_secret())
            .header("Accept", "application/json")
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => {
                let envelope: TaskEnvelope = res.json().await?;
                envelope
                    .data
                    .ok_or_else(|| LinkError::TaskNotFound(gid.to_string()))
            }
            StatusCode::NOT_FOUND => Err(LinkError::TaskNotFound(gid.to_string())),
            _ => Err(LinkError::from_response("Asana", res).await),
        }
    }

    /// Fetches the task's permalink URL, failing if the task has none.
    pub async fn task_permalink(&self, gid: &str) -> Result<String> {
        let task = self.get_task(gid).await?;
        task.permalink_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| LinkError::MissingPermalink(gid.to_string()))
    }

    /// Posts a story (comment) with the given text on the task.
    /// The response body is not inspected beyond the status.
    pub async fn add_story(&self, gid: &str, text: &str) -> Result<()> {
        let url = self.join(&format!("tasks/{}/stories", gid))?;
        debug!("POST {}", url);

        let res = self
            .client
            .post(url)
            .bearer_auth(self.token.expose_secret())
            .json(&json!({ "data": { "text": text } }))
            .send()
            .await?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(LinkError::from_response("Asana", res).await)
        }
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| LinkError::Config(format!("Invalid URL join: {}", e)))
    }
}
