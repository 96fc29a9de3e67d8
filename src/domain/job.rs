//! Job entities - the persisted unit of work

/// Flag token that marks a job as completed in the store.
pub const DONE_TOKEN: &str = "1";

/// Placeholder recorded when the tool cannot report a title.
pub const TITLE_PLACEHOLDER: &str = "Title not found";

/// Completion state of a job.
///
/// The flag column does double duty: the clipboard logger writes a
/// timestamp there when a URL is first captured, and the runner overwrites
/// it with `"1"` once the download completes. `Pending` therefore keeps
/// the raw token it was read with, so a rewrite never destroys the
/// capture timestamp of a job that has not finished yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Not yet downloaded; carries the original flag-column token.
    Pending(String),
    /// Downloaded; terminal, excluded from future runs.
    Done,
}

impl JobStatus {
    /// Parse a flag-column token. `"1"` is Done, anything else is Pending.
    pub fn from_token(token: &str) -> Self {
        if token == DONE_TOKEN {
            JobStatus::Done
        } else {
            JobStatus::Pending(token.to_string())
        }
    }

    /// The token to write back into the flag column.
    pub fn token(&self) -> &str {
        match self {
            JobStatus::Done => DONE_TOKEN,
            JobStatus::Pending(raw) => raw,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, JobStatus::Done)
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Pending(String::new())
    }
}

/// One row of work: a source URL plus its completion state and title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub status: JobStatus,
    pub url: String,
    pub title: String,
}

impl Job {
    /// Create a fresh pending job with no title.
    pub fn pending(url: impl Into<String>) -> Self {
        Self {
            status: JobStatus::default(),
            url: url.into(),
            title: String::new(),
        }
    }

    /// Mark the job completed and record its display title.
    pub fn complete(&mut self, title: impl Into<String>) {
        self.status = JobStatus::Done;
        self.title = title.into();
    }
}

/// Ordered list of jobs plus the store's column header.
///
/// Order is insertion order from the source file and is preserved across
/// rewrites; progress reporting relies on stable positional indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobList {
    header: Vec<String>,
    jobs: Vec<Job>,
}

impl JobList {
    pub fn new(header: Vec<String>, jobs: Vec<Job>) -> Self {
        Self { header, jobs }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, index: usize) -> &Job {
        &self.jobs[index]
    }

    pub fn job_mut(&mut self, index: usize) -> &mut Job {
        &mut self.jobs[index]
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_token_parses_as_done() {
        assert_eq!(JobStatus::from_token("1"), JobStatus::Done);
        assert!(JobStatus::from_token("1").is_done());
    }

    #[test]
    fn any_other_token_is_pending() {
        assert!(!JobStatus::from_token("").is_done());
        assert!(!JobStatus::from_token("0").is_done());
        assert!(!JobStatus::from_token("2025-01-01 10:00:00").is_done());
    }

    #[test]
    fn pending_preserves_raw_token() {
        let status = JobStatus::from_token("2025-01-01 10:00:00");
        assert_eq!(status.token(), "2025-01-01 10:00:00");
    }

    #[test]
    fn done_writes_sentinel_token() {
        assert_eq!(JobStatus::Done.token(), "1");
    }

    #[test]
    fn complete_flips_status_and_sets_title() {
        let mut job = Job::pending("https://example.com/a");
        job.complete("Song A");
        assert!(job.status.is_done());
        assert_eq!(job.title, "Song A");
    }

    #[test]
    fn job_list_keeps_order() {
        let list = JobList::new(
            vec!["Timestamp".into(), "URL".into(), "Title".into()],
            vec![Job::pending("https://a"), Job::pending("https://b")],
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list.job(0).url, "https://a");
        assert_eq!(list.job(1).url, "https://b");
    }
}
