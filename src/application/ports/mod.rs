//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod probe;
pub mod store;
pub mod tool;

// Re-export common types
pub use clipboard::{ClipboardError, ClipboardReader};
pub use config::ConfigStore;
pub use probe::{MediaProbe, ProbeError};
pub use store::{JobStore, StoreError};
pub use tool::{AudioTool, Extraction, ToolError};
