//! GitHub Actions workflow-command logging.
//!
//! The Actions runner picks `::notice::`, `::warning::`, `::error::` and
//! `::debug::` lines off stdout and surfaces them as annotations.

/// Emit a notice annotation.
pub fn notice(message: &str) {
    command("notice", message);
}

/// Emit a warning annotation.
pub fn warning(message: &str) {
    command("warning", message);
}

/// Emit a debug line (only shown when step debugging is enabled).
pub fn debug(message: &str) {
    command("debug", message);
}

/// Emit an error annotation. The failure signal itself is the exit code.
pub fn error(message: &str) {
    command("error", message);
}

fn command(kind: &str, message: &str) {
    println!("::{}::{}", kind, escape(message));
}

/// Workflow-command data escaping: `%`, CR and LF would otherwise
/// terminate or corrupt the command line.
fn escape(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
