use crate::presentation::Preset;
use crate::utils::config::{REQUIRED_COLUMNS, SCHEMA_VERSION};

/// Usage line printed when no input file is given
pub fn usage() -> String {
    format!("Usage: {} <jtl_file>", env!("CARGO_PKG_NAME"))
}

/// Display usage information
pub fn display_usage() {
    println!("{}", usage());
}

/// List built-in presentation presets
pub fn display_presets() {
    println!("Built-in presets:");
    for preset in Preset::ALL {
        let presentation = preset.presentation();
        println!("  {:<8} {}", preset.name(), presentation.title);
    }
    println!();
    println!("Required JTL columns: {}", REQUIRED_COLUMNS.join(", "));
    println!("JSON report schema: v{}", SCHEMA_VERSION);
}
