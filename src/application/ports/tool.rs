//! External audio tool port interface

use async_trait::async_trait;
use thiserror::Error;

/// External tool errors
#[derive(Debug, Clone, Error)]
pub enum ToolError {
    #[error("Audio tool not found: {0}")]
    Missing(String),

    #[error("Failed to launch audio tool: {0}")]
    LaunchFailed(String),

    #[error("Audio tool exited with status {code}")]
    NonZeroExit { code: i32, output: String },
}

impl ToolError {
    /// Launch-level failures abort the whole run; a non-zero exit is a
    /// per-item outcome.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ToolError::Missing(_) | ToolError::LaunchFailed(_))
    }
}

/// Result of one extraction invocation. The raw exit code is returned
/// rather than mapped to an error so the caller owns the success policy.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub exit_code: i32,
    /// Combined stdout + stderr, decoded permissively (the tool's output
    /// is not guaranteed to be valid UTF-8).
    pub output: String,
}

impl Extraction {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Port for the external audio-extraction tool
#[async_trait]
pub trait AudioTool: Send + Sync {
    /// Fetch the display title for a URL (metadata-only mode).
    ///
    /// Fails with `NonZeroExit` when the tool runs but cannot report a
    /// title; that failure is non-fatal to a batch run.
    async fn fetch_title(&self, url: &str) -> Result<String, ToolError>;

    /// Extract audio from a URL. The tool writes its output file(s) to
    /// the working directory under its own naming convention; only the
    /// exit code and captured output are reported back.
    async fn extract_audio(&self, url: &str) -> Result<Extraction, ToolError>;
}
