//! Clipboard watch use case - log copied URLs into the job store

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use super::ports::{ClipboardError, ClipboardReader, JobStore, StoreError};

/// Copying this exact text stops the watcher.
pub const EXIT_SENTINEL: &str = "$EXIT";

/// How many recently-logged URLs are replayed to the observer.
pub const HISTORY_SIZE: usize = 5;

/// Errors that stop the watcher
#[derive(Debug, Error)]
pub enum WatchError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Counters for one watch session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub logged: usize,
}

/// Callbacks for watcher progress reporting.
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct WatchCallbacks {
    /// A URL was logged; the slice holds the recent history, newest first.
    pub on_logged: Option<Box<dyn Fn(&str, &[String]) + Send + Sync>>,
}

/// Syntactic URL check: scheme and host shape only, nothing semantic.
pub fn is_probable_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https" | "ftp" | "ftps") && url.has_host()
        }
        Err(_) => false,
    }
}

/// Polls the clipboard and appends every newly-copied URL to the store.
///
/// This is the only path that creates the store file; the batch runner
/// never fabricates rows.
pub struct WatchClipboardUseCase<S, C>
where
    S: JobStore,
    C: ClipboardReader,
{
    store: S,
    clipboard: C,
    poll_interval: Duration,
    stop_flag: Arc<AtomicBool>,
}

impl<S, C> WatchClipboardUseCase<S, C>
where
    S: JobStore,
    C: ClipboardReader,
{
    pub fn new(store: S, clipboard: C, poll_interval: Duration) -> Self {
        Self {
            store,
            clipboard,
            poll_interval,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the stop flag for external signal handling
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_flag)
    }

    /// Watch the clipboard until the exit sentinel is copied or the stop
    /// flag is raised.
    pub async fn execute(
        &self,
        path: &std::path::Path,
        callbacks: WatchCallbacks,
    ) -> Result<WatchSummary, WatchError> {
        let mut history: Vec<String> = Vec::new();
        let mut last_seen = String::new();
        let mut summary = WatchSummary::default();

        while !self.stop_flag.load(Ordering::SeqCst) {
            if let Some(content) = self.clipboard.read_text().await? {
                if content == EXIT_SENTINEL {
                    break;
                }

                if !content.is_empty() && content != last_seen && is_probable_url(&content) {
                    self.store.append(path, &content).await?;

                    history.insert(0, content.clone());
                    history.truncate(HISTORY_SIZE);
                    summary.logged += 1;

                    if let Some(ref cb) = callbacks.on_logged {
                        cb(&content, &history);
                    }

                    last_seen = content;
                }
            }

            tokio::time::sleep(self.poll_interval).await;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::JobList;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    struct MockStore {
        appends: Mutex<Vec<String>>,
    }

    impl MockStore {
        fn new() -> Self {
            Self {
                appends: Mutex::new(Vec::new()),
            }
        }

        fn appends(&self) -> Vec<String> {
            self.appends.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl JobStore for MockStore {
        async fn load(&self, _path: &Path) -> Result<JobList, StoreError> {
            unimplemented!("not used by the watcher")
        }

        async fn save(&self, _path: &Path, _list: &JobList) -> Result<(), StoreError> {
            unimplemented!("not used by the watcher")
        }

        async fn append(&self, _path: &Path, url: &str) -> Result<(), StoreError> {
            self.appends.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    /// Clipboard scripted with a fixed sequence of reads; once drained it
    /// returns the exit sentinel so tests terminate.
    struct ScriptedClipboard {
        reads: Mutex<VecDeque<Option<String>>>,
    }

    impl ScriptedClipboard {
        fn new(reads: Vec<Option<&str>>) -> Self {
            Self {
                reads: Mutex::new(
                    reads
                        .into_iter()
                        .map(|r| r.map(|s| s.to_string()))
                        .collect(),
                ),
            }
        }
    }

    #[async_trait]
    impl ClipboardReader for ScriptedClipboard {
        async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
            Ok(self
                .reads
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Some(EXIT_SENTINEL.to_string())))
        }
    }

    fn log_path() -> PathBuf {
        PathBuf::from("url_log.csv")
    }

    fn watcher(
        reads: Vec<Option<&str>>,
    ) -> WatchClipboardUseCase<MockStore, ScriptedClipboard> {
        WatchClipboardUseCase::new(
            MockStore::new(),
            ScriptedClipboard::new(reads),
            Duration::from_millis(1),
        )
    }

    #[test]
    fn url_shape_check() {
        assert!(is_probable_url("https://example.com/watch?v=abc"));
        assert!(is_probable_url("http://localhost:8080/x"));
        assert!(is_probable_url("ftp://files.example.com/a.mp3"));
        assert!(!is_probable_url("just some text"));
        assert!(!is_probable_url("file:///etc/passwd"));
        assert!(!is_probable_url(""));
    }

    #[tokio::test]
    async fn logs_urls_and_skips_non_urls() {
        let use_case = watcher(vec![
            Some("https://a.example/1"),
            Some("not a url"),
            Some("https://b.example/2"),
        ]);

        let summary = use_case
            .execute(&log_path(), WatchCallbacks::default())
            .await
            .unwrap();

        assert_eq!(summary.logged, 2);
        assert_eq!(
            use_case.store.appends(),
            vec!["https://a.example/1", "https://b.example/2"]
        );
    }

    #[tokio::test]
    async fn ignores_repeated_clipboard_content() {
        let use_case = watcher(vec![
            Some("https://a.example/1"),
            Some("https://a.example/1"),
            Some("https://a.example/1"),
        ]);

        let summary = use_case
            .execute(&log_path(), WatchCallbacks::default())
            .await
            .unwrap();

        assert_eq!(summary.logged, 1);
    }

    #[tokio::test]
    async fn exit_sentinel_stops_the_watcher() {
        let use_case = watcher(vec![
            Some("https://a.example/1"),
            Some(EXIT_SENTINEL),
            Some("https://b.example/2"),
        ]);

        let summary = use_case
            .execute(&log_path(), WatchCallbacks::default())
            .await
            .unwrap();

        assert_eq!(summary.logged, 1);
        assert_eq!(use_case.store.appends(), vec!["https://a.example/1"]);
    }

    #[tokio::test]
    async fn history_is_bounded_and_newest_first() {
        let reads: Vec<Option<&str>> = vec![
            Some("https://e.example/1"),
            Some("https://e.example/2"),
            Some("https://e.example/3"),
            Some("https://e.example/4"),
            Some("https://e.example/5"),
            Some("https://e.example/6"),
        ];
        let use_case = watcher(reads);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let callbacks = WatchCallbacks {
            on_logged: Some(Box::new(move |_url, history| {
                seen_clone.lock().unwrap().push(history.to_vec());
            })),
        };

        use_case.execute(&log_path(), callbacks).await.unwrap();

        let snapshots = seen.lock().unwrap();
        let last = snapshots.last().unwrap();
        assert_eq!(last.len(), HISTORY_SIZE);
        assert_eq!(last[0], "https://e.example/6");
        assert_eq!(last[HISTORY_SIZE - 1], "https://e.example/2");
    }
}
