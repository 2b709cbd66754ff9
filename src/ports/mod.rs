pub mod issue_tracker;
pub mod text_model;

pub use issue_tracker::{CreatedIssue, IssueTracker, NewIssue};
pub use text_model::TextModel;
