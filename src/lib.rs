pub mod asana;
pub mod error;
pub mod event;
pub mod github;
pub mod linker;
pub mod outputs;
pub mod utils;

use reqwest::Url;
use secrecy::SecretString;

use crate::error::{LinkError, Result};

pub const DEFAULT_ASANA_BASE_URL: &str = "https://app.asana.com/api/1.0/";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com/";

/// Runtime configuration for a single run, read from the environment.
/// Tokens are kept in `SecretString` so they never show up in Debug output.
#[derive(Debug)]
pub struct ActionConfig {
    pub asana_token: SecretString,
    pub github_token: SecretString,
    pub asana_base_url: Url,
    pub github_api_url: Url,
}

impl ActionConfig {
    /// Loads tokens and API base URLs from the environment.
    /// The runner exports action inputs as `INPUT_<NAME>` variables;
    /// `GITHUB_API_URL` is also set by the runner and points at the
    /// Enterprise host when there is one.
    pub fn from_env() -> Result<Self> {
        let asana_token = required_input("INPUT_ASANA-TOKEN")?;
        let github_token = required_input("INPUT_GITHUB-TOKEN")?;
        let asana_base_url = base_url_from_env("ASANA_BASE_URL", DEFAULT_ASANA_BASE_URL)?;
        let github_api_url = base_url_from_env("GITHUB_API_URL", DEFAULT_GITHUB_API_URL)?;

        Ok(Self {
            asana_token: SecretString::new(asana_token.into()),
            github_token: SecretString::new(github_token.into()),
            asana_base_url,
            github_api_url,
        })
    }
}

fn required_input(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(LinkError::Config(format!(
            "Missing required input '{}'",
            name
        ))),
    }
}

fn base_url_from_env(name: &str, default: &str) -> Result<Url> {
    let raw = std::env::var(name).unwrap_or_else(|_| default.to_string());
    parse_base_url(&raw)
}

/// Parses a base URL, appending a trailing `/` when absent.
/// `Url::join` discards the last path segment of a base without one.
fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized)
        .map_err(|e| LinkError::Config(format!("Invalid base URL '{}': {}", normalized, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let url = parse_base_url("https://github.example.com/api/v3").unwrap();
        assert_eq!(url.as_str(), "https://github.example.com/api/v3/");
        assert_eq!(
            url.join("repos/o/r/issues/1/comments").unwrap().path(),
            "/api/v3/repos/o/r/issues/1/comments"
        );
    }

    #[test]
    fn base_url_with_slash_is_unchanged() {
        let url = parse_base_url(DEFAULT_ASANA_BASE_URL).unwrap();
        assert_eq!(url.as_str(), DEFAULT_ASANA_BASE_URL);
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(LinkError::Config(_))
        ));
    }
}
