// API client module: contains a small blocking HTTP client that lists the
// authenticated user's repositories from the GitHub REST API. It is
// intentionally small and synchronous; the whole tool is one sequential
// pass with a single network call.

use crate::creds::Credentials;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;
use std::fmt;

/// Simple API client that holds a reqwest blocking client and the base
/// URL of the API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// One repository row from the list response. Only the three fields the
/// tool uses are kept; everything else in the response object is ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub clone_url: String,
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Repo {} | id: {}", self.name, self.id)
    }
}

impl ApiClient {
    /// Create an ApiClient configured from the environment variable
    /// `GITPICK_API_URL` or fallback to the public GitHub API. The
    /// override exists so the lister can be pointed at a local server.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("GITPICK_API_URL").unwrap_or_else(|_| "https://api.github.com".into());

        // GitHub rejects requests without a User-Agent, and the v3 media
        // type is pinned via the Accept header on every request.
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        let client = Client::builder()
            .user_agent("gitpick")
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(ApiClient { client, base_url })
    }

    /// List the user's repositories with one authenticated GET.
    ///
    /// A non-success status is printed as the raw status code and yields
    /// an empty list; only transport-level failures become errors.
    pub fn list_repos(&self, creds: &Credentials) -> Result<Vec<Repo>> {
        let url = format!("{}/user/repos", &self.base_url);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        spinner.set_message("Fetching repositories...");

        let res = self
            .client
            .get(&url)
            .basic_auth(&creds.username, Some(&creds.token))
            .send()
            .context("Failed to send repository list request")?;
        spinner.finish_and_clear();

        if !res.status().is_success() {
            println!("{}", res.status().as_u16());
            return Ok(Vec::new());
        }

        let repos: Vec<Repo> = res.json().context("Parsing repository list json")?;
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_response_objects_in_order() {
        let body = r#"[
            {"id": 10, "name": "first", "clone_url": "https://github.com/u/first.git"},
            {"id": 20, "name": "second", "clone_url": "https://github.com/u/second.git"},
            {"id": 30, "name": "third", "clone_url": "https://github.com/u/third.git"}
        ]"#;

        let repos: Vec<Repo> = serde_json::from_str(body).unwrap();
        assert_eq!(repos.len(), 3);
        assert_eq!(repos[0].id, 10);
        assert_eq!(repos[0].name, "first");
        assert_eq!(repos[0].clone_url, "https://github.com/u/first.git");
        assert_eq!(repos[1].name, "second");
        assert_eq!(repos[2].name, "third");
    }

    #[test]
    fn ignores_unknown_response_fields() {
        // Real responses carry dozens of fields beyond the three we map.
        let body = r#"[{
            "id": 1,
            "name": "repo",
            "clone_url": "https://github.com/u/repo.git",
            "private": true,
            "owner": {"login": "u"}
        }]"#;

        let repos: Vec<Repo> = serde_json::from_str(body).unwrap();
        assert_eq!(repos[0].name, "repo");
    }

    #[test]
    fn display_shows_name_and_id() {
        let repo = Repo {
            id: 42,
            name: "demo".into(),
            clone_url: "https://github.com/u/demo.git".into(),
        };
        assert_eq!(repo.to_string(), "Repo demo | id: 42");
    }
}
