//! Library scan use case - find MP3s with unreadable headers

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ports::{MediaProbe, ProbeError};

/// Errors that abort a scan
#[derive(Debug, Clone, Error)]
pub enum ScanError {
    #[error("Directory not found: {0}")]
    DirectoryMissing(String),

    #[error("Failed to read directory: {0}")]
    ReadFailed(String),
}

/// Outcome for one file.
#[derive(Debug, Clone)]
pub struct FileCheck {
    pub path: PathBuf,
    /// `None` when the header parsed cleanly.
    pub error: Option<ProbeError>,
}

/// Results of one scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub checks: Vec<FileCheck>,
}

impl ScanReport {
    pub fn valid(&self) -> usize {
        self.checks.iter().filter(|c| c.error.is_none()).count()
    }

    pub fn corrupted(&self) -> usize {
        self.checks.len() - self.valid()
    }
}

/// Probes every `*.mp3` under a directory, descending into
/// subdirectories.
pub struct ScanLibraryUseCase<P>
where
    P: MediaProbe,
{
    probe: P,
}

impl<P> ScanLibraryUseCase<P>
where
    P: MediaProbe,
{
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    pub async fn execute(&self, dir: &Path) -> Result<ScanReport, ScanError> {
        if !dir.is_dir() {
            return Err(ScanError::DirectoryMissing(dir.display().to_string()));
        }

        // Iterative walk; tokio::fs::read_dir does not recurse and an
        // async fn cannot recurse without boxing.
        let mut files = Vec::new();
        let mut pending = vec![dir.to_path_buf()];
        while let Some(current) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&current)
                .await
                .map_err(|e| ScanError::ReadFailed(e.to_string()))?;
            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| ScanError::ReadFailed(e.to_string()))?
            {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                    continue;
                }
                let is_mp3 = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"));
                if path.is_file() && is_mp3 {
                    files.push(path);
                }
            }
        }

        // Stable report order regardless of directory iteration order.
        files.sort();

        let mut report = ScanReport::default();
        for path in files {
            let error = self.probe.probe(&path).await.err();
            report.checks.push(FileCheck { path, error });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Probe that fails for any path containing "bad".
    struct NameBasedProbe;

    #[async_trait]
    impl MediaProbe for NameBasedProbe {
        async fn probe(&self, path: &Path) -> Result<(), ProbeError> {
            if path.to_string_lossy().contains("bad") {
                Err(ProbeError::InvalidHeader("can't sync to MPEG frame".into()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn scans_only_mp3_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.mp3"), b"x").unwrap();
        std::fs::write(dir.path().join("bad.mp3"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::write(dir.path().join("upper.MP3"), b"x").unwrap();

        let use_case = ScanLibraryUseCase::new(NameBasedProbe);
        let report = use_case.execute(dir.path()).await.unwrap();

        assert_eq!(report.checks.len(), 3);
        assert_eq!(report.valid(), 2);
        assert_eq!(report.corrupted(), 1);
    }

    #[tokio::test]
    async fn descends_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let album = dir.path().join("artist").join("album");
        std::fs::create_dir_all(&album).unwrap();
        std::fs::write(dir.path().join("top.mp3"), b"x").unwrap();
        std::fs::write(album.join("nested.mp3"), b"x").unwrap();
        std::fs::write(album.join("bad-nested.mp3"), b"x").unwrap();

        let use_case = ScanLibraryUseCase::new(NameBasedProbe);
        let report = use_case.execute(dir.path()).await.unwrap();

        assert_eq!(report.checks.len(), 3);
        assert_eq!(report.corrupted(), 1);
        assert!(report
            .checks
            .iter()
            .any(|c| c.path == album.join("nested.mp3")));
    }

    #[tokio::test]
    async fn missing_directory_is_fatal() {
        let use_case = ScanLibraryUseCase::new(NameBasedProbe);
        let result = use_case.execute(Path::new("/no/such/dir")).await;
        assert!(matches!(result, Err(ScanError::DirectoryMissing(_))));
    }

    #[tokio::test]
    async fn empty_directory_yields_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = ScanLibraryUseCase::new(NameBasedProbe);
        let report = use_case.execute(dir.path()).await.unwrap();
        assert!(report.checks.is_empty());
    }
}
