pub mod gemini_http;
pub mod github_http;

pub use gemini_http::HttpGeminiClient;
pub use github_http::HttpGitHubClient;
