//! GitHub REST client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GitHubApiConfig, RepoSlug};
use crate::ports::{CreatedIssue, IssueTracker, NewIssue};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const AGENT: &str = concat!("issuesmith/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the repository's label and issue endpoints.
#[derive(Clone)]
pub struct HttpGitHubClient {
    token: String,
    api_url: Url,
    repo: RepoSlug,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("repo", &self.repo)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitHubClient {
    /// Create a new HTTP client for the given repository.
    pub fn new(token: String, repo: RepoSlug, config: &GitHubApiConfig) -> Result<Self, AppError> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| AppError::config_error(format!("Invalid GitHub API URL: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token, api_url, repo, client })
    }

    /// URL for a repo endpoint; trailing segments are percent-encoded.
    fn repo_url(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| AppError::config_error("GitHub API URL cannot be a base"))?;
            path.pop_if_empty();
            path.extend(["repos", self.repo.owner.as_str(), self.repo.name.as_str()]);
            path.extend(segments);
        }
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<reqwest::blocking::Response, reqwest::Error> {
        self.client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(USER_AGENT, AGENT)
            .send()
    }

    fn post<B: Serialize>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<reqwest::blocking::Response, reqwest::Error> {
        self.client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(USER_AGENT, AGENT)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
    }
}

#[derive(Debug, Serialize)]
struct CreateLabelRequest<'a> {
    name: &'a str,
    color: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateIssueRequest<'a> {
    title: &'a str,
    body: &'a str,
    labels: &'a [String],
}

#[derive(Debug, Deserialize)]
struct IssueResponse {
    number: u64,
    #[serde(default)]
    html_url: Option<String>,
}

impl IssueTracker for HttpGitHubClient {
    fn label_exists(&self, name: &str) -> Result<bool, AppError> {
        let url = self.repo_url(&["labels", name])?;
        let response = self.get(url).map_err(|e| AppError::LabelOperation {
            label: name.to_string(),
            details: format!("HTTP request failed: {}", e),
        })?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(AppError::LabelOperation {
                label: name.to_string(),
                details: format!("lookup returned status {}", status.as_u16()),
            }),
        }
    }

    fn create_label(&self, name: &str, color: &str) -> Result<(), AppError> {
        let url = self.repo_url(&["labels"])?;
        let response = self
            .post(url, &CreateLabelRequest { name, color })
            .map_err(|e| AppError::LabelOperation {
                label: name.to_string(),
                details: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
        Err(AppError::LabelOperation {
            label: name.to_string(),
            details: format!("create returned status {}: {}", status.as_u16(), error_text),
        })
    }

    fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, AppError> {
        let url = self.repo_url(&["issues"])?;
        let request =
            CreateIssueRequest { title: &issue.title, body: &issue.body, labels: &issue.labels };

        let response = self
            .post(url, &request)
            .map_err(|e| AppError::IssueCreation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::IssueCreation(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let created: IssueResponse = response
            .json()
            .map_err(|e| AppError::IssueCreation(format!("Failed to parse response: {}", e)))?;

        Ok(CreatedIssue { number: created.number, url: created.html_url.unwrap_or_default() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(server: &mockito::Server) -> HttpGitHubClient {
        let config = GitHubApiConfig { api_url: server.url(), timeout_secs: 1 };
        let repo = RepoSlug { owner: "octocat".into(), name: "playground".into() };
        HttpGitHubClient::new("fake-token".to_string(), repo, &config).unwrap()
    }

    #[test]
    fn label_exists_on_200() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/repos/octocat/playground/labels/easy")
            .match_header("authorization", "Bearer fake-token")
            .with_status(200)
            .with_body(r#"{"name":"easy","color":"00ff00"}"#)
            .create();

        assert!(client(&server).label_exists("easy").unwrap());
        mock.assert();
    }

    #[test]
    fn label_missing_on_404() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/repos/octocat/playground/labels/rust")
            .with_status(404)
            .create();

        assert!(!client(&server).label_exists("rust").unwrap());
    }

    #[test]
    fn label_lookup_server_error_is_label_operation_failure() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/repos/octocat/playground/labels/rust")
            .with_status(500)
            .create();

        let err = client(&server).label_exists("rust").unwrap_err();
        assert!(matches!(err, AppError::LabelOperation { .. }));
    }

    #[test]
    fn create_label_posts_name_and_color() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/repos/octocat/playground/labels")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"name": "rust", "color": "1f2e3d"}),
            ))
            .with_status(201)
            .create();

        client(&server).create_label("rust", "1f2e3d").unwrap();
        mock.assert();
    }

    #[test]
    fn create_label_conflict_is_label_operation_failure() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/repos/octocat/playground/labels")
            .with_status(422)
            .with_body(r#"{"message":"Validation Failed"}"#)
            .create();

        let err = client(&server).create_label("rust", "1f2e3d").unwrap_err();
        assert!(matches!(err, AppError::LabelOperation { .. }));
    }

    #[test]
    fn create_issue_returns_number_and_url() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/repos/octocat/playground/issues")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "title": "T",
                "body": "B",
                "labels": ["rust", "easy"],
            })))
            .with_status(201)
            .with_body(r#"{"number":17,"html_url":"https://github.com/octocat/playground/issues/17"}"#)
            .create();

        let issue = NewIssue {
            title: "T".into(),
            body: "B".into(),
            labels: vec!["rust".into(), "easy".into()],
        };
        let created = client(&server).create_issue(&issue).unwrap();
        assert_eq!(created.number, 17);
        assert_eq!(created.url, "https://github.com/octocat/playground/issues/17");
        mock.assert();
    }

    #[test]
    fn create_issue_failure_is_fatal() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/repos/octocat/playground/issues")
            .with_status(403)
            .with_body(r#"{"message":"Forbidden"}"#)
            .create();

        let issue = NewIssue { title: "T".into(), body: "".into(), labels: vec![] };
        let err = client(&server).create_issue(&issue).unwrap_err();
        assert!(matches!(err, AppError::IssueCreation(_)));
    }

    #[test]
    fn debug_redacts_the_token() {
        let server = mockito::Server::new();
        let debug = format!("{:?}", client(&server));
        assert!(!debug.contains("fake-token"));
        assert!(debug.contains("[REDACTED]"));
    }
}
