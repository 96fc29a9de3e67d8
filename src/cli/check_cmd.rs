//! MP3 header check command runner

use std::path::Path;
use std::process::ExitCode;

use crate::application::ScanLibraryUseCase;
use crate::infrastructure::LoftyProbe;

use super::app::{EXIT_ERROR, EXIT_PARTIAL, EXIT_SUCCESS};
use super::presenter::Presenter;

/// Scan a directory for MP3s with unreadable headers
pub async fn run_check(dir: &Path) -> ExitCode {
    let mut presenter = Presenter::new();
    presenter.start_spinner(&format!("Scanning '{}'...", dir.display()));

    let use_case = ScanLibraryUseCase::new(LoftyProbe::new());
    let report = match use_case.execute(dir).await {
        Ok(report) => report,
        Err(e) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.stop_spinner();

    for check in &report.checks {
        match &check.error {
            None => presenter.success(&check.path.display().to_string()),
            Some(error) => presenter.error(&format!("{}: {}", check.path.display(), error)),
        }
    }

    presenter.info(&format!(
        "{} file(s) checked: {} valid, {} corrupted",
        report.checks.len(),
        report.valid(),
        report.corrupted()
    ));

    if report.corrupted() > 0 {
        ExitCode::from(EXIT_PARTIAL)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
