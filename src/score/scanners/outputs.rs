//! Output Completeness dimension (15 pts)
//!
//! Tables, figures, and logs each contribute 5 points. Logs that exist
//! somewhere in the tree but not under output/logs/ earn partial credit.

use std::path::Path;

use crate::score::dimension::{DimensionResult, DimensionScanner};
use crate::score::version_dir::VersionDir;

const MAX_POINTS: u32 = 15;
const SUBCHECK_POINTS: u32 = 5;
const STRAY_LOG_POINTS: u32 = 3;

/// Generated artifact scanner
#[derive(Debug, Default)]
pub struct OutputCompletenessScanner;

impl OutputCompletenessScanner {
    pub fn new() -> Self {
        Self
    }

    fn non_empty(path: &Path) -> bool {
        std::fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
    }
}

impl DimensionScanner for OutputCompletenessScanner {
    fn name(&self) -> &'static str {
        "Output Completeness"
    }

    fn max_points(&self) -> u32 {
        MAX_POINTS
    }

    fn scan(&self, dir: &VersionDir) -> DimensionResult {
        let tables_dir = dir.join("output/tables");
        let figures_dir = dir.join("output/figures");
        let logs_dir = dir.join("output/logs");

        let mut score = 0;
        let mut findings = Vec::new();

        if tables_dir.is_dir() {
            let has_tables = VersionDir::files_under(&tables_dir, "tex")
                .iter()
                .any(|f| Self::non_empty(f));
            if has_tables {
                score += SUBCHECK_POINTS;
            } else {
                findings.push("No non-empty .tex files in output/tables/".to_string());
            }
        } else {
            findings.push("output/tables/ directory not found".to_string());
        }

        if figures_dir.is_dir() {
            let mut figures = VersionDir::files_under(&figures_dir, "pdf");
            figures.extend(VersionDir::files_under(&figures_dir, "png"));
            if !figures.is_empty() {
                score += SUBCHECK_POINTS;
            } else {
                findings.push("No .pdf/.png files in output/figures/".to_string());
            }
        } else {
            findings.push("output/figures/ directory not found".to_string());
        }

        if logs_dir.is_dir() {
            if !VersionDir::files_under(&logs_dir, "log").is_empty() {
                score += SUBCHECK_POINTS;
            } else {
                findings.push("No .log files in output/logs/".to_string());
            }
        } else if !dir.files_with_extension("log").is_empty() {
            // Stata writes logs into the working directory by default.
            score += STRAY_LOG_POINTS;
            findings.push("Logs found in root but not in output/logs/".to_string());
        } else {
            findings.push("No log files found".to_string());
        }

        DimensionResult::new(score, MAX_POINTS).with_findings(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(files: &[(&str, &str)]) -> DimensionResult {
        let tempdir = tempfile::tempdir().unwrap();
        for (rel, content) in files {
            let path = tempdir.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        OutputCompletenessScanner::new().scan(&VersionDir::new(tempdir.path()))
    }

    #[test]
    fn test_complete_outputs_score_full() {
        let result = scan(&[
            ("output/tables/main.tex", "\\begin{table}"),
            ("output/figures/event_study.pdf", "%PDF"),
            ("output/logs/01_main.log", "done"),
        ]);
        assert_eq!(result.score, 15);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_empty_tree_scores_zero_with_findings() {
        let result = scan(&[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.findings.len(), 3);
    }

    #[test]
    fn test_empty_tex_file_earns_nothing() {
        let result = scan(&[("output/tables/main.tex", "")]);
        assert_eq!(result.score, 0);
        assert!(result
            .findings
            .contains(&"No non-empty .tex files in output/tables/".to_string()));
    }

    #[test]
    fn test_png_counts_as_figure() {
        let result = scan(&[("output/figures/rd_plot.png", "png-bytes")]);
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_root_logs_earn_partial_credit() {
        let result = scan(&[("01_main.log", "done")]);
        assert_eq!(result.score, 3);
        assert!(result
            .findings
            .contains(&"Logs found in root but not in output/logs/".to_string()));
    }

    #[test]
    fn test_logs_dir_present_but_empty() {
        let tempdir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tempdir.path().join("output/logs")).unwrap();
        let result = OutputCompletenessScanner::new().scan(&VersionDir::new(tempdir.path()));
        assert_eq!(result.score, 0);
        assert!(result
            .findings
            .contains(&"No .log files in output/logs/".to_string()));
    }
}
