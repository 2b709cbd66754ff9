//! Generative model port definition.

use crate::domain::AppError;

/// Port for the text-generation service.
pub trait TextModel {
    /// Send one prompt and return the raw completion text.
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
