use clap::Parser;
use issuesmith::{AppError, RunInputs, app::workflow_log};

/// Post an LLM-generated programming challenge as a GitHub issue.
///
/// Every flag falls back to the environment variable the Actions runner
/// sets for the corresponding action input.
#[derive(Parser)]
#[command(name = "issuesmith")]
#[command(version)]
#[command(about = "Create a GitHub issue with a generated programming challenge", long_about = None)]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "INPUT_GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: String,

    /// Repository-scoped access token
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    token: String,

    /// Comma-separated library names to choose from
    #[arg(long, env = "INPUT_LIBS")]
    libs: String,

    /// Comma-separated difficulty names to choose from
    #[arg(long, env = "INPUT_DIFFICULTIES")]
    difficulties: String,

    /// Free-text instruction appended to the prompt
    #[arg(long, env = "INPUT_CUSTOM_ADDITIONS")]
    custom_additions: Option<String>,

    /// Model output format: json or delimited
    #[arg(long, env = "INPUT_RESPONSE_FORMAT", default_value = "json")]
    response_format: String,

    /// Target repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repo: String,
}

fn main() {
    let cli = Cli::parse();

    let inputs = RunInputs {
        gemini_api_key: cli.gemini_api_key,
        token: cli.token,
        libs: cli.libs,
        difficulties: cli.difficulties,
        custom_additions: cli.custom_additions,
        response_format: cli.response_format,
        repo: cli.repo,
    };

    let result: Result<(), AppError> = issuesmith::run(inputs).map(|report| {
        println!(
            "✅ Created issue #{} for '{}' ({})",
            report.issue.number, report.selection.library, report.selection.difficulty
        );
    });

    if let Err(e) = result {
        workflow_log::error(&e.to_string());
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
