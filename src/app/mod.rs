pub mod pipeline;
pub mod workflow_log;

pub use pipeline::{EnsuredLabel, RunReport};
