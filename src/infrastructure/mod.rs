//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like yt-dlp, the filesystem,
//! and the OS clipboard.

pub mod clipboard;
pub mod config;
pub mod probe;
pub mod store;
pub mod tool;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use probe::LoftyProbe;
pub use store::CsvJobStore;
pub use tool::YtDlpTool;
