//! Job store port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::job::JobList;

/// Job store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Job file not found: {0}")]
    NotFound(String),

    #[error("Job file contains no jobs: {0}")]
    Empty(String),

    #[error("Malformed job file: {0}")]
    MalformedSchema(String),

    #[error("Failed to read job file: {0}")]
    ReadFailed(String),

    #[error("Failed to write job file: {0}")]
    WriteFailed(String),
}

/// Port for the persisted job list.
///
/// `load` and `save` never create the file; the only creating path is
/// `append`, used when a URL is first logged.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Load the header and ordered job list from `path`.
    ///
    /// Rows written by the older 2-column schema are padded with an empty
    /// title; a header without the title column gets one appended in
    /// memory.
    async fn load(&self, path: &Path) -> Result<JobList, StoreError>;

    /// Rewrite the entire file: header first, then every job row in
    /// original order, three columns each.
    async fn save(&self, path: &Path, list: &JobList) -> Result<(), StoreError>;

    /// Append one freshly-logged URL, creating the file with its header
    /// if it does not exist yet.
    async fn append(&self, path: &Path, url: &str) -> Result<(), StoreError>;
}
