//! Main app runner for the batch download command

use std::path::Path;
use std::process::ExitCode;

use colored::*;

use crate::application::ports::{ConfigStore, StoreError};
use crate::application::{BatchCallbacks, BatchError, RunBatchUseCase};
use crate::domain::config::AppConfig;
use crate::infrastructure::{CsvJobStore, XdgConfigStore, YtDlpTool};

use super::presenter::Presenter;

/// Exit codes (clap itself exits 2 on usage errors)
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
/// The run finished, but at least one job failed and stays pending.
pub const EXIT_PARTIAL: u8 = 3;

/// Merge the config file layer under CLI/environment values.
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    match store.load().await {
        Ok(file_config) => file_config.merge(cli_config),
        Err(e) => {
            Presenter::new().warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty().merge(cli_config)
        }
    }
}

/// Whether the configured tool value names a concrete path, as opposed
/// to a bare program name resolved on PATH.
fn looks_like_path(tool: &str) -> bool {
    tool.contains(std::path::MAIN_SEPARATOR) || tool.contains('/')
}

/// Run the batch download over a job file
pub async fn run_batch(file: &Path, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let tool_path = config.tool_or_default();

    // An explicitly configured tool path that doesn't exist is an
    // environment problem; fail before the store is even opened.
    if config.has_explicit_tool() && looks_like_path(tool_path) && !Path::new(tool_path).exists() {
        presenter.error(&format!("yt-dlp executable not found at '{}'", tool_path));
        presenter.info("Check the tool path and try again.");
        return ExitCode::from(EXIT_ERROR);
    }

    let store = CsvJobStore::new();
    let tool = YtDlpTool::new(tool_path, config.audio_format_or_default());
    let use_case = RunBatchUseCase::new(store, tool);

    presenter.info(&format!(
        "Starting bulk audio download from '{}'",
        file.display()
    ));
    presenter.separator();

    let callbacks = BatchCallbacks {
        on_skip: Some(Box::new(|index, total, url| {
            eprintln!(
                "{} Skipping: {} (already downloaded)",
                format!("[{}/{}]", index + 1, total).bold(),
                url
            );
        })),
        on_job_start: Some(Box::new(|index, total, url| {
            eprintln!(
                "{} Processing: {}",
                format!("[{}/{}]", index + 1, total).bold(),
                url
            );
        })),
        on_title: Some(Box::new(|title| {
            eprintln!("{} Found title: {}", "ℹ".cyan(), title);
        })),
        on_title_failed: Some(Box::new(|url| {
            eprintln!(
                "{} Could not fetch title for {}. It may be private or deleted.",
                "⚠".yellow(),
                url
            );
        })),
        on_job_done: Some(Box::new(|url, _title| {
            eprintln!("{} Downloaded audio from {}", "✓".green(), url);
            eprintln!("{}", "-".repeat(40).dimmed());
        })),
        on_job_failed: Some(Box::new(|url, code, output| {
            eprintln!(
                "{} Download failed for {} (exit code {})",
                "✗".red(),
                url,
                code
            );
            for line in output.lines().filter(|line| !line.trim().is_empty()) {
                eprintln!("  {}", line.dimmed());
            }
            eprintln!("{}", "-".repeat(40).dimmed());
        })),
        on_persist_failed: Some(Box::new(|e| {
            eprintln!("{} Could not update the job file: {}", "⚠".yellow(), e);
        })),
    };

    match use_case.execute(file, callbacks).await {
        Ok(summary) => {
            presenter.info(&format!(
                "{} completed, {} skipped, {} failed (of {})",
                summary.completed, summary.skipped, summary.failed, summary.total
            ));
            if summary.failed > 0 {
                presenter.warn("Failed jobs stay pending; run again to retry them.");
                ExitCode::from(EXIT_PARTIAL)
            } else {
                presenter.success("All downloads completed.");
                ExitCode::from(EXIT_SUCCESS)
            }
        }
        Err(BatchError::Store(StoreError::Empty(path))) => {
            presenter.error(&format!("'{}' contains no URLs. Add some URLs to it.", path));
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
