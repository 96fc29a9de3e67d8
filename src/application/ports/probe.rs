//! Media probe port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Media probe errors
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Unreadable audio header: {0}")]
    InvalidHeader(String),
}

/// Port for checking whether an audio file has a readable header
#[async_trait]
pub trait MediaProbe: Send + Sync {
    /// Probe a file; `Ok(())` means the header parsed cleanly.
    async fn probe(&self, path: &Path) -> Result<(), ProbeError>;
}
