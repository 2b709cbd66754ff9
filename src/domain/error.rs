use thiserror::Error;

/// Library-wide error type for issuesmith operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Caller-supplied input is unusable (e.g. an empty selection list).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The generative model call failed at the network or service level.
    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    /// The model response did not match the requested output format.
    #[error("Failed to parse model response: {details}\nraw response: {raw}")]
    ResponseParse { details: String, raw: String },

    /// A label lookup or creation failed. Absorbed by the pipeline.
    #[error("Label operation failed for '{label}': {details}")]
    LabelOperation { label: String, details: String },

    /// The issue-creation call failed. Fatal for the run.
    #[error("Issue creation failed: {0}")]
    IssueCreation(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
