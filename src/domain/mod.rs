//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod filename;
pub mod job;

// Re-export common types
pub use config::AppConfig;
pub use error::ConfigError;
pub use job::{Job, JobList, JobStatus, DONE_TOKEN, TITLE_PLACEHOLDER};
