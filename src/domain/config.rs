//! Run configuration domain models.

use crate::domain::AppError;
use crate::domain::challenge::ResponseFormat;

/// Raw action inputs, exactly as the CI runner supplies them.
#[derive(Debug, Clone)]
pub struct RunInputs {
    /// Gemini API key (secret).
    pub gemini_api_key: String,
    /// Repository-scoped access token (secret).
    pub token: String,
    /// Comma-separated library names.
    pub libs: String,
    /// Comma-separated difficulty names.
    pub difficulties: String,
    /// Optional free-text instruction appended to the prompt.
    pub custom_additions: Option<String>,
    /// Response format name: "json" or "delimited".
    pub response_format: String,
    /// Repository slug, `owner/name`.
    pub repo: String,
}

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub libraries: Vec<String>,
    pub difficulties: Vec<String>,
    pub custom_additions: Option<String>,
    pub format: ResponseFormat,
    pub repo: RepoSlug,
}

/// `owner/name` pair identifying the target repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn parse(slug: &str) -> Result<Self, AppError> {
        match slug.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self { owner: owner.to_string(), name: name.to_string() })
            }
            _ => Err(AppError::config_error(format!(
                "Repository must be 'owner/name', got '{}'",
                slug
            ))),
        }
    }
}

impl RunConfig {
    /// Validate raw inputs into a run configuration.
    ///
    /// Lists must be non-empty after splitting; empty entries are dropped.
    pub fn from_inputs(inputs: &RunInputs) -> Result<Self, AppError> {
        let libraries = split_list(&inputs.libs);
        if libraries.is_empty() {
            return Err(AppError::InvalidInput("libs must contain at least one entry".into()));
        }

        let difficulties = split_list(&inputs.difficulties);
        if difficulties.is_empty() {
            return Err(AppError::InvalidInput(
                "difficulties must contain at least one entry".into(),
            ));
        }

        let format = ResponseFormat::parse(&inputs.response_format)?;
        let repo = RepoSlug::parse(&inputs.repo)?;

        let custom_additions =
            inputs.custom_additions.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(String::from);

        Ok(Self { libraries, difficulties, custom_additions, format, repo })
    }
}

/// Split a comma-joined input string, trimming entries and dropping empties.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiApiConfig {
    /// Full `generateContent` endpoint URL.
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_gemini_url(), timeout_secs: default_timeout() }
    }
}

impl GeminiApiConfig {
    /// Default configuration with the endpoint overridable via `GEMINI_API_URL`.
    pub fn from_env() -> Self {
        let api_url = std::env::var("GEMINI_API_URL").unwrap_or_else(|_| default_gemini_url());
        Self { api_url, ..Self::default() }
    }
}

/// GitHub REST API configuration.
#[derive(Debug, Clone)]
pub struct GitHubApiConfig {
    /// API base URL, no trailing slash.
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self { api_url: default_github_url(), timeout_secs: default_timeout() }
    }
}

impl GitHubApiConfig {
    /// Default configuration with the base URL overridable via `GITHUB_API_URL`.
    ///
    /// Actions runners set `GITHUB_API_URL` for GHES compatibility.
    pub fn from_env() -> Self {
        let api_url = std::env::var("GITHUB_API_URL").unwrap_or_else(|_| default_github_url());
        Self { api_url: api_url.trim_end_matches('/').to_string(), ..Self::default() }
    }
}

fn default_gemini_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent".to_string()
}

fn default_github_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout() -> u64 {
    30
}
