//! Grabtune - resumable batch audio downloader built around yt-dlp
//!
//! This crate drives yt-dlp over a persisted list of URLs, tolerating
//! partial failure of any item without losing progress on the others:
//! completion is recorded in the job file immediately after each
//! download, so an interrupted run can be restarted without re-doing
//! finished work.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Jobs, the job list, config values, and filename rules
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (CSV store, yt-dlp,
//!   clipboard, config file, media probe)
//! - **CLI**: Command-line interface, argument parsing, and presentation

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
