//! Application use cases. Orchestrate domain logic via ports.

pub mod progress_reporter;

pub use progress_reporter::ProgressReporter;
