//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),
}

/// Port for reading the system clipboard
#[async_trait]
pub trait ClipboardReader: Send + Sync {
    /// Read the current clipboard text, or `None` if the clipboard holds
    /// no text content.
    async fn read_text(&self) -> Result<Option<String>, ClipboardError>;
}
