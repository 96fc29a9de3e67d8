//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default external tool resolved on PATH.
pub const DEFAULT_TOOL: &str = "yt-dlp";

/// Default target format for extraction.
pub const DEFAULT_AUDIO_FORMAT: &str = "mp3";

/// Default clipboard poll interval for the watcher, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path or name of the yt-dlp binary.
    pub tool: Option<String>,
    /// Target format passed to `--audio-format`.
    pub audio_format: Option<String>,
    /// Clipboard poll interval for `watch`, in seconds.
    pub poll_interval_secs: Option<u64>,
}

impl AppConfig {
    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            tool: other.tool.or(self.tool),
            audio_format: other.audio_format.or(self.audio_format),
            poll_interval_secs: other.poll_interval_secs.or(self.poll_interval_secs),
        }
    }

    /// Get the tool path, or the PATH-discoverable default if not set.
    pub fn tool_or_default(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Whether a tool path was configured explicitly (as opposed to
    /// falling back to PATH discovery).
    pub fn has_explicit_tool(&self) -> bool {
        self.tool.is_some()
    }

    /// Get the audio format, or "mp3" if not set.
    pub fn audio_format_or_default(&self) -> &str {
        self.audio_format.as_deref().unwrap_or(DEFAULT_AUDIO_FORMAT)
    }

    /// Get the watcher poll interval, or one second if not set.
    pub fn poll_interval_or_default(&self) -> u64 {
        self.poll_interval_secs
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS)
            .max(1)
    }
}
