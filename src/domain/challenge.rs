//! Challenge content parsed from the model response.

use serde::Deserialize;

use crate::domain::AppError;

/// Output format the model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Single-line JSON object with `title` and `body` keys.
    #[default]
    Json,
    /// Single line of `TITLE ||| BODY`.
    Delimited,
}

impl ResponseFormat {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "delimited" => Ok(ResponseFormat::Delimited),
            other => Err(AppError::InvalidInput(format!(
                "response format must be 'json' or 'delimited', got '{}'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Delimited => "delimited",
        }
    }
}

const TITLE_BODY_DELIMITER: &str = "|||";

/// Serde shape for the JSON response format.
///
/// `description` is accepted as a body alias because some models answer with
/// that key when asked for an issue payload.
#[derive(Debug, Deserialize)]
struct ChallengeJson {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, alias = "description")]
    body: Option<String>,
}

/// Title and body extracted from the raw model response.
///
/// Fields stay `None` when the response did not supply them; defaults are
/// substituted at issue-creation time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeContent {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl ChallengeContent {
    /// Parse the raw response in the given format.
    pub fn parse(raw: &str, format: ResponseFormat) -> Result<Self, AppError> {
        match format {
            ResponseFormat::Json => Self::from_json(raw),
            ResponseFormat::Delimited => Ok(Self::from_delimited(raw)),
        }
    }

    /// Split `TITLE ||| BODY` on the literal delimiter.
    ///
    /// Missing delimiter leaves the body `None`; an empty response leaves
    /// both fields `None`. This format never fails.
    pub fn from_delimited(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        match trimmed.split_once(TITLE_BODY_DELIMITER) {
            Some((title, body)) => Self {
                title: non_empty(title),
                body: non_empty(body),
            },
            None => Self { title: Some(trimmed.to_string()), body: None },
        }
    }

    /// Parse a JSON object with optional `title` and `body` fields.
    ///
    /// Malformed JSON surfaces as `ResponseParse` with the raw text attached
    /// for diagnostics; it is never silently degraded to defaults.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        let parsed: ChallengeJson =
            serde_json::from_str(trimmed).map_err(|e| AppError::ResponseParse {
                details: e.to_string(),
                raw: trimmed.to_string(),
            })?;

        Ok(Self { title: parsed.title, body: parsed.body })
    }
}

/// Default issue title when the model supplied none.
pub fn default_title(library: &str) -> String {
    format!("Create me project for '{}'", library)
}

fn non_empty(segment: &str) -> Option<String> {
    let trimmed = segment.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
