use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::TextModel;

/// Canned-reply model that records every prompt it receives.
pub struct FakeModel {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    pub fn replying(reply: &str) -> Self {
        Self { reply: reply.to_string(), prompts: Mutex::new(Vec::new()) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl TextModel for FakeModel {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}
