//! Batch download use case - the resumable per-job state machine

use std::path::Path;

use thiserror::Error;

use crate::domain::job::TITLE_PLACEHOLDER;

use super::ports::{AudioTool, JobStore, StoreError, ToolError};

/// Errors that abort a batch run.
///
/// Per-item failures (a non-zero tool exit, a failed title fetch) never
/// surface here; they are contained inside the loop and reported through
/// the callbacks and the summary.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The tool binary could not be located or launched. This is an
    /// environment problem, not a per-item one, so the run stops.
    #[error("{0}")]
    Tool(ToolError),
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub skipped: usize,
    pub completed: usize,
    pub failed: usize,
}

/// Callbacks for per-job progress reporting.
///
/// Arguments carrying a position are `(index, total)` with `index`
/// zero-based; presenters render them one-based.
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct BatchCallbacks {
    /// A job was already Done and is being skipped.
    pub on_skip: Option<Box<dyn Fn(usize, usize, &str) + Send + Sync>>,
    /// A pending job is about to be processed.
    pub on_job_start: Option<Box<dyn Fn(usize, usize, &str) + Send + Sync>>,
    /// The title was fetched successfully.
    pub on_title: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// The title could not be fetched; a placeholder is used.
    pub on_title_failed: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Extraction succeeded and the job was marked Done.
    pub on_job_done: Option<Box<dyn Fn(&str, &str) + Send + Sync>>,
    /// Extraction exited non-zero; the job stays Pending for a retry.
    pub on_job_failed: Option<Box<dyn Fn(&str, i32, &str) + Send + Sync>>,
    /// The store rewrite after a Done transition failed (non-fatal).
    pub on_persist_failed: Option<Box<dyn Fn(&StoreError) + Send + Sync>>,
}

/// Sequential batch processor over the persisted job list.
///
/// Jobs are handled strictly in file order, one tool invocation in
/// flight at a time. After every Done transition the full list is
/// rewritten before the next job starts, so a crash after job *k* loses
/// at most the in-flight item, never earlier completions.
pub struct RunBatchUseCase<S, T>
where
    S: JobStore,
    T: AudioTool,
{
    store: S,
    tool: T,
}

impl<S, T> RunBatchUseCase<S, T>
where
    S: JobStore,
    T: AudioTool,
{
    pub fn new(store: S, tool: T) -> Self {
        Self { store, tool }
    }

    /// Process every pending job in the store at `path`.
    pub async fn execute(
        &self,
        path: &Path,
        callbacks: BatchCallbacks,
    ) -> Result<BatchSummary, BatchError> {
        let mut list = self.store.load(path).await?;
        let total = list.len();

        let mut summary = BatchSummary {
            total,
            ..Default::default()
        };

        for index in 0..total {
            let url = list.job(index).url.clone();

            // Resume guarantee: Done is terminal.
            if list.job(index).status.is_done() {
                summary.skipped += 1;
                if let Some(ref cb) = callbacks.on_skip {
                    cb(index, total, &url);
                }
                continue;
            }

            if let Some(ref cb) = callbacks.on_job_start {
                cb(index, total, &url);
            }

            // Title fetch is best-effort; only a launch failure is fatal.
            let title = match self.tool.fetch_title(&url).await {
                Ok(title) if !title.trim().is_empty() => {
                    let title = title.trim().to_string();
                    if let Some(ref cb) = callbacks.on_title {
                        cb(&title);
                    }
                    title
                }
                Ok(_) => TITLE_PLACEHOLDER.to_string(),
                Err(e) if e.is_fatal() => return Err(BatchError::Tool(e)),
                Err(_) => {
                    if let Some(ref cb) = callbacks.on_title_failed {
                        cb(&url);
                    }
                    TITLE_PLACEHOLDER.to_string()
                }
            };

            let extraction = self
                .tool
                .extract_audio(&url)
                .await
                .map_err(BatchError::Tool)?;

            if extraction.succeeded() {
                list.job_mut(index).complete(title);
                summary.completed += 1;
                if let Some(ref cb) = callbacks.on_job_done {
                    cb(&url, &list.job(index).title);
                }

                // Persist before touching the next job. On failure the
                // in-memory state stays Done, so a later save (or a
                // future run) can still record the completion.
                if let Err(e) = self.store.save(path, &list).await {
                    if let Some(ref cb) = callbacks.on_persist_failed {
                        cb(&e);
                    }
                }
            } else {
                // Canonical policy: non-zero exit leaves the job Pending
                // so the next run retries it.
                summary.failed += 1;
                if let Some(ref cb) = callbacks.on_job_failed {
                    cb(&url, extraction.exit_code, &extraction.output);
                }
            }
        }

        Ok(summary)
    }
}
