//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod clean;
pub mod ports;
pub mod run_batch;
pub mod scan;
pub mod watch;

// Re-export use cases
pub use clean::{clean_directory, CleanError, CleanReport};
pub use run_batch::{BatchCallbacks, BatchError, BatchSummary, RunBatchUseCase};
pub use scan::{ScanError, ScanLibraryUseCase, ScanReport};
pub use watch::{WatchCallbacks, WatchClipboardUseCase, WatchError, WatchSummary, EXIT_SENTINEL};
