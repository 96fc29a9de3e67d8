//! CSV job store adapter
//!
//! One header row plus one row per job, three columns: flag token, URL,
//! title. Files written by the older two-column schema (no title) are
//! accepted and upgraded in memory; the three-column shape is what gets
//! written back.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{JobStore, StoreError};
use crate::domain::job::{Job, JobList, JobStatus};

/// Name of the column the migration appends.
const TITLE_COLUMN: &str = "Title";

/// Header written when the log file is first created.
const DEFAULT_HEADER: [&str; 3] = ["Timestamp", "URL", "Title"];

/// Columns in the current schema.
const COLUMNS: usize = 3;

/// CSV-backed job store
pub struct CsvJobStore;

impl CsvJobStore {
    pub fn new() -> Self {
        Self
    }

    fn parse(content: &str, label: &str) -> Result<JobList, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| StoreError::MalformedSchema(e.to_string()))?
            .clone();
        let mut header: Vec<String> = headers.iter().map(str::to_string).collect();

        // Backward-compat with the two-column schema.
        if !header.iter().any(|name| name == TITLE_COLUMN) {
            header.push(TITLE_COLUMN.to_string());
        }
        if header.len() != COLUMNS {
            return Err(StoreError::MalformedSchema(format!(
                "expected {} columns after migration, header has {}",
                COLUMNS,
                header.len()
            )));
        }

        let mut jobs = Vec::new();
        for (index, record) in reader.records().enumerate() {
            // Header is line 1, data starts at line 2.
            let line = index + 2;
            let record =
                record.map_err(|e| StoreError::MalformedSchema(format!("line {}: {}", line, e)))?;
            if record.len() > COLUMNS {
                return Err(StoreError::MalformedSchema(format!(
                    "line {} has {} fields, expected at most {}",
                    line,
                    record.len(),
                    COLUMNS
                )));
            }

            // Short rows are padded with empty fields at read time.
            jobs.push(Job {
                status: JobStatus::from_token(record.get(0).unwrap_or("")),
                url: record.get(1).unwrap_or("").to_string(),
                title: record.get(2).unwrap_or("").to_string(),
            });
        }

        if jobs.is_empty() {
            return Err(StoreError::Empty(label.to_string()));
        }

        Ok(JobList::new(header, jobs))
    }

    fn serialize(list: &JobList) -> Result<Vec<u8>, StoreError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(list.header())
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        for job in list.jobs() {
            writer
                .write_record([job.status.token(), job.url.as_str(), job.title.as_str()])
                .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }
        writer
            .into_inner()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Default for CsvJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStore for CsvJobStore {
    async fn load(&self, path: &Path) -> Result<JobList, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        if content.trim().is_empty() {
            return Err(StoreError::Empty(path.display().to_string()));
        }

        Self::parse(&content, &path.display().to_string())
    }

    async fn save(&self, path: &Path, list: &JobList) -> Result<(), StoreError> {
        let bytes = Self::serialize(list)?;

        // Write a sibling temp file, then rename over the store so a
        // crash mid-write never leaves a truncated file behind.
        let temp = Self::temp_path(path);
        fs::write(&temp, &bytes)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        fs::rename(&temp, path)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(())
    }

    async fn append(&self, path: &Path, url: &str) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
        if !path.exists() {
            writer
                .write_record(DEFAULT_HEADER)
                .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        writer
            .write_record([timestamp.as_str(), url, ""])
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}
