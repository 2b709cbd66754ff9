pub mod fake_model;
pub mod fake_tracker;

pub use fake_model::FakeModel;
pub use fake_tracker::{FakeTracker, TrackerEvent};
