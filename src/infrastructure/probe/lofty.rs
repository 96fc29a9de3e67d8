//! MP3 header probe backed by `lofty`

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lofty::config::{ParseOptions, ParsingMode};
use lofty::probe::Probe;

use crate::application::ports::{MediaProbe, ProbeError};

/// Header-validity probe using lofty's strict parser.
pub struct LoftyProbe;

impl LoftyProbe {
    pub fn new() -> Self {
        Self
    }

    fn probe_blocking(path: &Path) -> Result<(), ProbeError> {
        let probe = Probe::open(path)
            .map_err(|e| ProbeError::OpenFailed(e.to_string()))?
            .options(ParseOptions::new().parsing_mode(ParsingMode::Strict));

        // Detect the format from content, not the extension, then parse
        // the header; either step failing means the file is unreadable.
        probe
            .guess_file_type()
            .map_err(|e| ProbeError::InvalidHeader(e.to_string()))?
            .read()
            .map_err(|e| ProbeError::InvalidHeader(e.to_string()))?;

        Ok(())
    }
}

impl Default for LoftyProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaProbe for LoftyProbe {
    async fn probe(&self, path: &Path) -> Result<(), ProbeError> {
        let path = PathBuf::from(path);

        // lofty reads are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || Self::probe_blocking(&path))
            .await
            .map_err(|e| ProbeError::OpenFailed(format!("Task join error: {}", e)))?
    }
}
