use std::io;

/// Custom error type for pr_asana_link operations
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Could not find slash in ref: {0}")]
    MalformedRef(String),

    #[error("Cannot find the following properties: {0}")]
    MissingFields(String),

    #[error("Repository full name is not 'owner/repo': {0}")]
    MalformedRepoName(String),

    #[error("Task not found with gid: {0}")]
    TaskNotFound(String),

    #[error("Task URL not found for gid: {0}")]
    MissingPermalink(String),

    #[error("{service} API error: HTTP {status}: {message}")]
    Api {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Event payload error: {0}")]
    Event(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl LinkError {
    /// Maps a non-success HTTP response into an `Api` error carrying the
    /// status code and whatever the service put in the body.
    pub async fn from_response(service: &'static str, res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let message = res.text().await.unwrap_or_default();
        Self::Api {
            service,
            status,
            message,
        }
    }
}

/// Helper type for Results that use LinkError
pub type Result<T> = std::result::Result<T, LinkError>;
