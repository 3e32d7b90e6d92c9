//! Scorer configuration.
//!
//! Defines the schema for optional revisar.yaml configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Dimensions to skip entirely (matched against the dimension name).
    /// A skipped dimension contributes neither score nor max to the total.
    #[serde(default)]
    pub disabled_dimensions: Vec<String>,

    /// Content markers that identify a cross-validation script when no
    /// script is found by filename. Detection is substring-based; the
    /// first marker list entry that matches wins.
    #[serde(default = "default_crossval_markers")]
    pub crossval_markers: Vec<String>,
}

fn default_crossval_markers() -> Vec<String> {
    vec!["pyfixest".to_string(), "cross".to_string()]
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            disabled_dimensions: Vec::new(),
            crossval_markers: default_crossval_markers(),
        }
    }
}

impl ScoreConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
