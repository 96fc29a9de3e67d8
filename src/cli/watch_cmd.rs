//! Clipboard watcher command runner

use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::Ordering;
use std::time::Duration;

use colored::*;

use crate::application::{WatchCallbacks, WatchClipboardUseCase, EXIT_SENTINEL};
use crate::domain::config::AppConfig;
use crate::infrastructure::{ArboardClipboard, CsvJobStore};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::presenter::Presenter;

/// Run the clipboard watcher until interrupted
pub async fn run_watch(file: &Path, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    presenter.info(&format!(
        "Monitoring clipboard for URLs. Logging to '{}'.",
        file.display()
    ));
    presenter.info(&format!(
        "Copy the text \"{}\" or press Ctrl-C to stop.",
        EXIT_SENTINEL
    ));

    let use_case = WatchClipboardUseCase::new(
        CsvJobStore::new(),
        ArboardClipboard::new(),
        Duration::from_secs(config.poll_interval_or_default()),
    );

    // Ctrl-C raises the stop flag; the loop notices on its next tick.
    let stop_flag = use_case.stop_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop_flag.store(true, Ordering::SeqCst);
        }
    });

    let callbacks = WatchCallbacks {
        on_logged: Some(Box::new(|url, history| {
            eprintln!("{} Logged: {}", "✓".green(), url);
            eprintln!("{}", "Recent URLs (newest first):".dimmed());
            for (position, entry) in history.iter().enumerate() {
                eprintln!("{}", format!("  {}. {}", position + 1, entry).dimmed());
            }
        })),
    };

    match use_case.execute(file, callbacks).await {
        Ok(summary) => {
            presenter.success(&format!("Stopped. Logged {} URL(s).", summary.logged));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
