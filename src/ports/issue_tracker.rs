//! Issue-tracker port definition.

use crate::domain::AppError;

/// Payload for issue creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    /// Label names attached to the issue.
    pub labels: Vec<String>,
}

/// The issue as reported back by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub number: u64,
    pub url: String,
}

/// Port for repository label and issue operations.
///
/// Implementations must be `Sync`: the pipeline ensures labels from
/// concurrent scoped threads sharing one tracker reference.
pub trait IssueTracker: Sync {
    /// Whether a label with this name already exists on the repository.
    fn label_exists(&self, name: &str) -> Result<bool, AppError>;

    /// Create a label with the given six-hex-digit color (no `#` prefix).
    fn create_label(&self, name: &str, color: &str) -> Result<(), AppError>;

    /// Create one issue.
    fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, AppError>;
}
