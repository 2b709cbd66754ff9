//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeminiApiConfig};
use crate::ports::TextModel;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";

/// HTTP client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| AppError::config_error(format!("Invalid Gemini API URL: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url, client })
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl TextModel for HttpGeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::ModelInvocation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ModelInvocation(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let api_response: GenerateResponse = response
            .json()
            .map_err(|e| AppError::ModelInvocation(format!("Failed to parse response: {}", e)))?;

        api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| AppError::ModelInvocation("No completion text in response".into()))
    }
}
