//! yt-dlp adapter for the audio tool port

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioTool, Extraction, ToolError};

/// Audio tool adapter that shells out to yt-dlp.
///
/// Invocations block until the child exits; no timeout is enforced, so a
/// stuck download stalls the batch until the operator intervenes.
pub struct YtDlpTool {
    program: PathBuf,
    audio_format: String,
}

impl YtDlpTool {
    /// Create an adapter for the given binary path (or bare name, to be
    /// resolved on PATH) and target audio format.
    pub fn new(program: impl Into<PathBuf>, audio_format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            audio_format: audio_format.into(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    fn map_spawn_error(&self, error: std::io::Error) -> ToolError {
        if error.kind() == std::io::ErrorKind::NotFound {
            ToolError::Missing(self.program.display().to_string())
        } else {
            ToolError::LaunchFailed(error.to_string())
        }
    }

    /// Decode captured output permissively; yt-dlp is known to emit
    /// non-UTF-8 bytes for some titles and sites.
    fn lossy(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

#[async_trait]
impl AudioTool for YtDlpTool {
    async fn fetch_title(&self, url: &str) -> Result<String, ToolError> {
        let output = self
            .command()
            .args(["--print", "%(title)s", url])
            .output()
            .await
            .map_err(|e| self.map_spawn_error(e))?;

        if !output.status.success() {
            return Err(ToolError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                output: Self::lossy(&output.stderr),
            });
        }

        Ok(Self::lossy(&output.stdout).trim().to_string())
    }

    async fn extract_audio(&self, url: &str) -> Result<Extraction, ToolError> {
        // The tool writes its output file(s) into the working directory
        // under its own naming template; we only report the exit code.
        let output = self
            .command()
            .args(["-x", "--audio-format", &self.audio_format, url])
            .output()
            .await
            .map_err(|e| self.map_spawn_error(e))?;

        let mut combined = Self::lossy(&output.stdout);
        let stderr = Self::lossy(&output.stderr);
        if !stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&stderr);
        }

        Ok(Extraction {
            exit_code: output.status.code().unwrap_or(-1),
            output: combined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_maps_to_missing() {
        let tool = YtDlpTool::new("/no/such/yt-dlp", "mp3");
        let result = tool.fetch_title("https://example.com").await;
        assert!(matches!(result, Err(ToolError::Missing(_))));

        let result = tool.extract_audio("https://example.com").await;
        assert!(matches!(result, Err(ToolError::Missing(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn fetch_title_trims_stdout() {
        // `echo` stands in for the metadata-mode invocation; it ignores
        // the arguments and prints a line with a trailing newline.
        let tool = YtDlpTool::new("/bin/echo", "mp3");
        let title = tool.fetch_title("https://example.com").await.unwrap();
        assert_eq!(title, "--print %(title)s https://example.com");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn extract_reports_non_zero_exit_without_error() {
        let tool = YtDlpTool::new("/bin/false", "mp3");
        let extraction = tool.extract_audio("https://example.com").await.unwrap();
        assert!(!extraction.succeeded());
        assert_ne!(extraction.exit_code, 0);
    }
}
