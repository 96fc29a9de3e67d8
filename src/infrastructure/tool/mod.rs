//! External audio tool adapters

pub mod yt_dlp;

pub use yt_dlp::YtDlpTool;
