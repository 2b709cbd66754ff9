pub mod challenge;
pub mod config;
pub mod error;
pub mod prompt;
pub mod selection;

pub use challenge::{ChallengeContent, ResponseFormat, default_title};
pub use config::{GeminiApiConfig, GitHubApiConfig, RepoSlug, RunConfig, RunInputs};
pub use error::AppError;
pub use selection::SelectionResult;
