//! Filename cleanup use case - strip bracketed ids from downloaded MP3s

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::filename::{cleaned_name, numbered_name};

/// Errors that abort a cleanup pass
#[derive(Debug, Clone, Error)]
pub enum CleanError {
    #[error("Directory not found: {0}")]
    DirectoryMissing(String),

    #[error("Failed to read directory: {0}")]
    ReadFailed(String),
}

/// Results of one cleanup pass.
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    /// Successful renames as `(old name, new name)`.
    pub renamed: Vec<(String, String)>,
    /// Renames that failed, with the OS error message.
    pub failures: Vec<(String, String)>,
}

/// Renames every `*.mp3` with a trailing bracketed segment, resolving
/// collisions with numbered suffixes.
pub fn clean_directory(dir: &Path) -> Result<CleanReport, CleanError> {
    if !dir.is_dir() {
        return Err(CleanError::DirectoryMissing(dir.display().to_string()));
    }

    let mut names: Vec<String> = fs::read_dir(dir)
        .map_err(|e| CleanError::ReadFailed(e.to_string()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    let mut report = CleanReport::default();

    for name in names {
        let Some(cleaned) = cleaned_name(&name) else {
            continue;
        };

        let mut target = cleaned.clone();
        let mut counter = 1;
        while dir.join(&target).exists() {
            target = numbered_name(&cleaned, counter);
            counter += 1;
        }

        match fs::rename(dir.join(&name), dir.join(&target)) {
            Ok(()) => report.renamed.push((name, target)),
            Err(e) => report.failures.push((name, e.to_string())),
        }
    }

    Ok(report)
}
