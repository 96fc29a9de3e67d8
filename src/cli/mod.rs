//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the
//! per-subcommand application runners.

pub mod app;
pub mod args;
pub mod check_cmd;
pub mod clean_cmd;
pub mod presenter;
pub mod watch_cmd;

// Re-export commonly used types
pub use app::{load_merged_config, run_batch, EXIT_ERROR, EXIT_PARTIAL, EXIT_SUCCESS};
pub use args::{Cli, Commands};
pub use check_cmd::run_check;
pub use clean_cmd::run_clean;
pub use presenter::Presenter;
pub use watch_cmd::run_watch;
