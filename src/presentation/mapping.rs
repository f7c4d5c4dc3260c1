//! Label to display-name lookup table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder substituted with the raw label in fallback templates
pub const LABEL_PLACEHOLDER: &str = "{label}";

/// Maps JMeter labels to report display names
///
/// Labels without an entry use `fallback` (with `{label}` substituted),
/// or the label itself when no fallback is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelMapping {
    #[serde(default)]
    pub entries: HashMap<String, String>,

    #[serde(default)]
    pub fallback: Option<String>,
}

impl LabelMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, label: impl Into<String>, display: impl Into<String>) -> Self {
        self.entries.insert(label.into(), display.into());
        self
    }

    pub fn with_fallback(mut self, template: impl Into<String>) -> Self {
        self.fallback = Some(template.into());
        self
    }

    pub fn display_name(&self, label: &str) -> String {
        if let Some(name) = self.entries.get(label) {
            return name.clone();
        }

        match &self.fallback {
            Some(template) => template.replace(LABEL_PLACEHOLDER, label),
            None => label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_entry() {
        let mapping = LabelMapping::new().with_entry("Energy Submit", "STEP 1");
        assert_eq!(mapping.display_name("Energy Submit"), "STEP 1");
    }

    #[test]
    fn test_display_name_without_fallback() {
        let mapping = LabelMapping::new();
        assert_eq!(mapping.display_name("Login"), "Login");
    }

    #[test]
    fn test_display_name_fallback_template() {
        let mapping = LabelMapping::new().with_fallback("🔧 {label}");
        assert_eq!(mapping.display_name("Login"), "🔧 Login");

        let constant = LabelMapping::new().with_fallback("🔧 SYSTEM");
        assert_eq!(constant.display_name("Login"), "🔧 SYSTEM");
    }

    #[test]
    fn test_lookup_is_exact() {
        let mapping = LabelMapping::new().with_entry("Energy Query", "STEP 3");
        assert_eq!(mapping.display_name("energy query"), "energy query");
    }
}
