//! The run pipeline: select, generate, parse, label, create.

use std::thread;

use rand::Rng;

use crate::app::workflow_log;
use crate::domain::{AppError, ChallengeContent, RunConfig, SelectionResult, default_title, prompt};
use crate::ports::{CreatedIssue, IssueTracker, NewIssue, TextModel};

/// Outcome of one label-ensure operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsuredLabel {
    pub name: String,
    /// False when the lookup/create round trip failed; never fatal.
    pub ensured: bool,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub selection: SelectionResult,
    pub issue: CreatedIssue,
    pub labels: Vec<EnsuredLabel>,
}

/// Execute one run end to end.
///
/// Strictly forward: select parameters, build the prompt, invoke the model
/// once, parse, ensure both labels, create one issue. Label failures are
/// absorbed as warnings; everything else propagates.
pub fn execute<M, T, R>(
    model: &M,
    tracker: &T,
    config: &RunConfig,
    rng: &mut R,
) -> Result<RunReport, AppError>
where
    M: TextModel,
    T: IssueTracker,
    R: Rng,
{
    let selection = SelectionResult {
        library: crate::domain::selection::pick(rng, &config.libraries)?.clone(),
        difficulty: crate::domain::selection::pick(rng, &config.difficulties)?.clone(),
    };
    workflow_log::notice(&format!(
        "Selected library '{}' at difficulty '{}'",
        selection.library, selection.difficulty
    ));

    let prompt = prompt::build(
        &selection.library,
        &selection.difficulty,
        config.custom_additions.as_deref(),
        config.format,
    );
    workflow_log::debug(&format!("Prompt: {}", prompt));

    let raw = model.generate(&prompt)?;
    let content = ChallengeContent::parse(&raw, config.format)?;

    // Colors come from the caller's rng before the threads start, so a
    // seeded rng keeps runs reproducible.
    let label_names = [selection.library.clone(), selection.difficulty.clone()];
    let colors =
        [crate::domain::selection::label_color(rng), crate::domain::selection::label_color(rng)];

    // Both ensures run concurrently and are joined before the issue call;
    // the issue payload must not reference a label still in flight.
    let labels = thread::scope(|scope| {
        let handles: Vec<_> = label_names
            .iter()
            .zip(&colors)
            .map(|(name, color)| scope.spawn(move || ensure_label(tracker, name, color)))
            .collect();

        handles
            .into_iter()
            .zip(&label_names)
            .map(|(handle, name)| {
                let result = match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                };
                let ensured = match result {
                    Ok(()) => true,
                    Err(e) => {
                        workflow_log::warning(&e.to_string());
                        false
                    }
                };
                EnsuredLabel { name: name.clone(), ensured }
            })
            .collect::<Vec<_>>()
    });

    let issue = NewIssue {
        title: content.title.unwrap_or_else(|| default_title(&selection.library)),
        body: content.body.unwrap_or_default(),
        labels: label_names.to_vec(),
    };
    let created = tracker.create_issue(&issue)?;
    workflow_log::notice(&format!("Created issue #{}: {}", created.number, created.url));

    Ok(RunReport { selection, issue: created, labels })
}

/// Check-then-create: skip creation when the label already exists.
fn ensure_label<T: IssueTracker + ?Sized>(
    tracker: &T,
    name: &str,
    color: &str,
) -> Result<(), AppError> {
    if tracker.label_exists(name)? {
        return Ok(());
    }
    tracker.create_label(name, color)
}
