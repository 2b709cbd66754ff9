use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CreatedIssue, IssueTracker, NewIssue};

/// One recorded tracker call, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerEvent {
    LabelLookup { name: String },
    LabelCreate { name: String, color: String },
    IssueCreate { issue: NewIssue },
}

/// In-memory tracker recording all calls for assertions.
#[derive(Default)]
pub struct FakeTracker {
    existing_labels: HashSet<String>,
    fail_labels: bool,
    fail_issues: bool,
    events: Mutex<Vec<TrackerEvent>>,
}

impl FakeTracker {
    pub fn with_existing_labels(names: &[&str]) -> Self {
        Self {
            existing_labels: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Make every label lookup/create fail.
    pub fn failing_labels(mut self) -> Self {
        self.fail_labels = true;
        self
    }

    /// Make issue creation fail.
    pub fn failing_issues(mut self) -> Self {
        self.fail_issues = true;
        self
    }

    pub fn events(&self) -> Vec<TrackerEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn created_issues(&self) -> Vec<NewIssue> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                TrackerEvent::IssueCreate { issue } => Some(issue),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: TrackerEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl IssueTracker for FakeTracker {
    fn label_exists(&self, name: &str) -> Result<bool, AppError> {
        self.record(TrackerEvent::LabelLookup { name: name.to_string() });
        if self.fail_labels {
            return Err(AppError::LabelOperation {
                label: name.to_string(),
                details: "fake lookup failure".into(),
            });
        }
        Ok(self.existing_labels.contains(name))
    }

    fn create_label(&self, name: &str, color: &str) -> Result<(), AppError> {
        self.record(TrackerEvent::LabelCreate { name: name.to_string(), color: color.to_string() });
        if self.fail_labels {
            return Err(AppError::LabelOperation {
                label: name.to_string(),
                details: "fake create failure".into(),
            });
        }
        Ok(())
    }

    fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, AppError> {
        self.record(TrackerEvent::IssueCreate { issue: issue.clone() });
        if self.fail_issues {
            return Err(AppError::IssueCreation("fake issue failure".into()));
        }
        Ok(CreatedIssue { number: 1, url: "https://example.com/issues/1".into() })
    }
}
