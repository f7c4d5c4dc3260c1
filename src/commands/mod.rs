//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use analyze::{analyze, execute_analyze, resolve_presentation, validate_args};
pub use models::AnalyzeArgs;
pub use utils::{display_presets, display_usage, usage};
