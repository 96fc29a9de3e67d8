//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::config::AppConfig;

/// Grabtune - resumable batch audio downloads via yt-dlp
#[derive(Parser, Debug)]
#[command(name = "grabtune")]
#[command(version)]
#[command(about = "Resumable batch audio downloader and clipboard URL logger built around yt-dlp")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to the yt-dlp binary (default: resolved on PATH)
    #[arg(short = 't', long, value_name = "PATH", env = "GRABTUNE_TOOL")]
    pub tool: Option<String>,

    /// Audio format passed to the tool's extraction mode
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub audio_format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download every pending URL in a job file as audio
    Run {
        /// Path to the job CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Watch the clipboard and log copied URLs into a job file
    Watch {
        /// Path to the job CSV file to append to (created if missing)
        #[arg(value_name = "FILE", default_value = "url_log.csv")]
        file: PathBuf,
    },
    /// Check MP3 files in a directory tree for unreadable headers
    Check {
        /// Directory to scan (including subdirectories)
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
    /// Strip trailing bracketed ids from MP3 filenames in a directory
    Clean {
        /// Directory to clean
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

impl Cli {
    /// Config layer contributed by command-line flags and environment.
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            tool: self.tool.clone(),
            audio_format: self.audio_format.clone(),
            poll_interval_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_run() {
        let cli = Cli::parse_from(["grabtune", "run", "jobs.csv"]);
        assert!(matches!(cli.command, Commands::Run { ref file } if file == &PathBuf::from("jobs.csv")));
        assert!(cli.tool.is_none());
        assert!(cli.audio_format.is_none());
    }

    #[test]
    fn cli_parses_tool_flag() {
        let cli = Cli::parse_from(["grabtune", "--tool", "/opt/yt-dlp", "run", "jobs.csv"]);
        assert_eq!(cli.tool.as_deref(), Some("/opt/yt-dlp"));
    }

    #[test]
    fn cli_parses_audio_format() {
        let cli = Cli::parse_from(["grabtune", "-f", "opus", "run", "jobs.csv"]);
        assert_eq!(cli.audio_format.as_deref(), Some("opus"));
    }

    #[test]
    fn cli_parses_watch_with_default_file() {
        let cli = Cli::parse_from(["grabtune", "watch"]);
        assert!(
            matches!(cli.command, Commands::Watch { ref file } if file == &PathBuf::from("url_log.csv"))
        );
    }

    #[test]
    fn cli_parses_check_and_clean_defaults() {
        let cli = Cli::parse_from(["grabtune", "check"]);
        assert!(matches!(cli.command, Commands::Check { ref dir } if dir == &PathBuf::from(".")));

        let cli = Cli::parse_from(["grabtune", "clean"]);
        assert!(matches!(cli.command, Commands::Clean { ref dir } if dir == &PathBuf::from(".")));
    }

    #[test]
    fn to_config_carries_flags() {
        let cli = Cli::parse_from(["grabtune", "-t", "/opt/yt-dlp", "-f", "opus", "run", "x.csv"]);
        let config = cli.to_config();
        assert_eq!(config.tool.as_deref(), Some("/opt/yt-dlp"));
        assert_eq!(config.audio_format.as_deref(), Some("opus"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
