//! issuesmith: post an LLM-generated programming challenge as a GitHub issue.
//!
//! One run picks a random library/difficulty pair from caller-supplied
//! lists, asks Gemini for a challenge in a strict output format, ensures the
//! matching repository labels exist, and creates exactly one issue.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use domain::{GeminiApiConfig, GitHubApiConfig, RunConfig};
use services::{HttpGeminiClient, HttpGitHubClient};

pub use app::{EnsuredLabel, RunReport};
pub use domain::{AppError, RunInputs};

/// Execute one run against the real Gemini and GitHub APIs.
///
/// Endpoint URLs honor the `GEMINI_API_URL` and `GITHUB_API_URL` environment
/// overrides; everything else comes from `inputs`.
pub fn run(inputs: RunInputs) -> Result<RunReport, AppError> {
    let config = RunConfig::from_inputs(&inputs)?;

    let model = HttpGeminiClient::new(inputs.gemini_api_key.clone(), &GeminiApiConfig::from_env())?;
    let tracker = HttpGitHubClient::new(
        inputs.token.clone(),
        config.repo.clone(),
        &GitHubApiConfig::from_env(),
    )?;

    let mut rng = rand::thread_rng();
    app::pipeline::execute(&model, &tracker, &config, &mut rng)
}
