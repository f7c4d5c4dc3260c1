use crate::presentation::Preset;
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the JTL sample log
    pub input: PathBuf,

    /// Built-in presentation preset
    pub preset: Preset,

    /// Presentation TOML file, replaces the preset when set
    pub mapping: Option<PathBuf>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            preset: Preset::Latency,
            mapping: None,
            output_json: None,
        }
    }
}
