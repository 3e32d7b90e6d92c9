//! Research Quality Scoring Engine
//!
//! Scores a version directory on six weighted dimensions (100 points):
//! code conventions (15), log cleanliness (15), output completeness (15),
//! cross-validation (15), documentation (15), method diagnostics (25).
//!
//! The engine is read-only over the target tree: every run is idempotent
//! and side-effect free.

pub mod config;
pub mod dimension;
pub mod report;
pub mod scanners;
pub mod version_dir;

pub use config::ScoreConfig;
pub use dimension::{DimensionResult, DimensionScanner, MethodScore, MethodTag};
pub use report::{ReportFormat, ScoreReport, Status};
pub use version_dir::VersionDir;

use anyhow::bail;
use std::path::Path;
use tracing::{debug, info};

/// Quality scoring engine
///
/// Orchestrates the dimension scanners over a version directory.
#[derive(Debug)]
pub struct ScoreEngine {
    config: ScoreConfig,
    scanners: Vec<Box<dyn DimensionScanner>>,
}

impl ScoreEngine {
    /// Create an engine with the default dimension scanners.
    pub fn new(config: ScoreConfig) -> Self {
        let crossval_markers = config.crossval_markers.clone();
        let mut engine = Self {
            config,
            scanners: Vec::new(),
        };

        engine.register_scanner(Box::new(scanners::ConventionsScanner::new()));
        engine.register_scanner(Box::new(scanners::LogCleanlinessScanner::new()));
        engine.register_scanner(Box::new(scanners::OutputCompletenessScanner::new()));
        engine.register_scanner(Box::new(scanners::CrossValidationScanner::new(
            crossval_markers,
        )));
        engine.register_scanner(Box::new(scanners::DocumentationScanner::new()));
        engine.register_scanner(Box::new(scanners::MethodDiagnosticsScanner::new()));

        engine
    }

    /// Register an additional dimension scanner.
    pub fn register_scanner(&mut self, scanner: Box<dyn DimensionScanner>) {
        self.scanners.push(scanner);
    }

    /// Score a version directory across all enabled dimensions.
    ///
    /// A missing target directory is the only fatal error; everything
    /// else degrades to findings inside the report.
    pub fn score(&self, target: &Path) -> anyhow::Result<ScoreReport> {
        if !target.is_dir() {
            bail!("directory '{}' does not exist", target.display());
        }

        info!("Scoring version directory {}", target.display());
        let dir = VersionDir::new(target);
        let mut report = ScoreReport::new(target.display().to_string());

        for scanner in &self.scanners {
            if !self.is_dimension_enabled(scanner.name()) {
                debug!("Skipping disabled dimension {}", scanner.name());
                continue;
            }
            let result = scanner.scan(&dir);
            debug!(
                "{}: {}/{} ({} findings)",
                scanner.name(),
                result.score,
                result.max,
                result.findings.len()
            );
            report.add_dimension(scanner.name(), result);
        }

        report.finalize();
        info!("Total {}/{}: {}", report.total, report.max_total, report.status);
        Ok(report)
    }

    /// List registered dimensions with their maximum points.
    pub fn available_dimensions(&self) -> Vec<(&str, u32)> {
        self.scanners
            .iter()
            .map(|s| (s.name(), s.max_points()))
            .collect()
    }

    fn is_dimension_enabled(&self, name: &str) -> bool {
        !self
            .config
            .disabled_dimensions
            .iter()
            .any(|d| d.eq_ignore_ascii_case(name))
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(ScoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_registers_six_dimensions() {
        let engine = ScoreEngine::default();
        let dims = engine.available_dimensions();
        assert_eq!(dims.len(), 6);
        assert_eq!(dims.iter().map(|(_, max)| max).sum::<u32>(), 100);
        assert_eq!(dims[0].0, "Code Conventions");
        assert_eq!(dims[5].0, "Method Diagnostics");
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let engine = ScoreEngine::default();
        let err = engine.score(Path::new("/no/such/version/dir")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_empty_directory_scores_zero_total() {
        let tempdir = tempfile::tempdir().unwrap();
        let engine = ScoreEngine::default();
        let report = engine.score(tempdir.path()).unwrap();

        assert_eq!(report.total, 0);
        assert_eq!(report.max_total, 100);
        assert_eq!(report.status, Status::Redo);
        assert_eq!(report.dimensions.len(), 6);
        for dim in report.dimensions.values() {
            assert!(dim.score <= dim.max);
        }
    }

    #[test]
    fn test_disabled_dimension_omitted_from_total() {
        let tempdir = tempfile::tempdir().unwrap();
        let mut config = ScoreConfig::default();
        config
            .disabled_dimensions
            .push("Method Diagnostics".to_string());

        let engine = ScoreEngine::new(config);
        let report = engine.score(tempdir.path()).unwrap();
        assert_eq!(report.dimensions.len(), 5);
        assert_eq!(report.max_total, 75);
        assert!(!report.dimensions.contains_key("Method Diagnostics"));
    }

    #[test]
    fn test_dimension_enabled_check_is_case_insensitive() {
        let mut config = ScoreConfig::default();
        config.disabled_dimensions.push("documentation".to_string());
        let engine = ScoreEngine::new(config);
        assert!(!engine.is_dimension_enabled("Documentation"));
        assert!(engine.is_dimension_enabled("Code Conventions"));
    }
}
