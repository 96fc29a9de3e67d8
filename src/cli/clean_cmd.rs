//! Filename cleanup command runner

use std::path::Path;
use std::process::ExitCode;

use crate::application::clean_directory;

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::presenter::Presenter;

/// Strip bracketed ids from MP3 filenames in a directory
pub fn run_clean(dir: &Path) -> ExitCode {
    let presenter = Presenter::new();
    presenter.info(&format!("Cleaning filenames in '{}'", dir.display()));

    let report = match clean_directory(dir) {
        Ok(report) => report,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    for (old, new) in &report.renamed {
        presenter.success(&format!("Renamed: '{}' -> '{}'", old, new));
    }
    for (name, error) in &report.failures {
        presenter.warn(&format!("Could not rename '{}': {}", name, error));
    }

    if report.renamed.is_empty() && report.failures.is_empty() {
        presenter.info("Nothing to clean.");
    }

    ExitCode::from(EXIT_SUCCESS)
}
