//! Code Conventions dimension (15 pts)
//!
//! Five independent checks over every analysis script: header metadata,
//! seeded randomness, numbered file naming, paired log open/close, and
//! clustered standard errors wherever a regression command appears.

use regex_lite::Regex;

use crate::score::dimension::{DimensionResult, DimensionScanner};
use crate::score::version_dir::VersionDir;

const MAX_POINTS: u32 = 15;
const POINTS_PER_CHECK: f64 = 3.0;

/// Pass/fail tally for one convention check.
#[derive(Debug, Default)]
struct CheckTally {
    pass: u32,
    fail: u32,
    findings: Vec<String>,
}

impl CheckTally {
    fn record(&mut self, passed: bool, finding: impl FnOnce() -> String) {
        if passed {
            self.pass += 1;
        } else {
            self.fail += 1;
            self.findings.push(finding());
        }
    }

    /// Points for this check: 3 x pass rate, one decimal. A check that
    /// examined no files passes vacuously at full points.
    fn points(&self) -> f64 {
        let total = self.pass + self.fail;
        if total == 0 {
            return POINTS_PER_CHECK;
        }
        let rate = self.pass as f64 / total as f64;
        (rate * POINTS_PER_CHECK * 10.0).round() / 10.0
    }
}

/// Script convention scanner
#[derive(Debug)]
pub struct ConventionsScanner {
    numbered_name: Regex,
    regression_cmd: Regex,
}

impl Default for ConventionsScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ConventionsScanner {
    pub fn new() -> Self {
        Self {
            numbered_name: Regex::new(r"^\d{2}_").expect("valid naming pattern"),
            regression_cmd: Regex::new(r"(reghdfe|regress|xtreg|ivreghdfe|ivreg2)")
                .expect("valid regression pattern"),
        }
    }
}

impl DimensionScanner for ConventionsScanner {
    fn name(&self) -> &'static str {
        "Code Conventions"
    }

    fn max_points(&self) -> u32 {
        MAX_POINTS
    }

    fn scan(&self, dir: &VersionDir) -> DimensionResult {
        let do_files = dir.files_with_extension("do");
        let py_files = VersionDir::files_under(&dir.join("code"), "py");

        if do_files.is_empty() && py_files.is_empty() {
            return DimensionResult::empty(MAX_POINTS, "No code files found");
        }

        let mut headers = CheckTally::default();
        let mut seed = CheckTally::default();
        let mut naming = CheckTally::default();
        let mut log_pair = CheckTally::default();
        let mut clustering = CheckTally::default();

        for file in &do_files {
            let content = VersionDir::read_text(file);
            let lower = content.to_lowercase();
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            headers.record(
                content.contains("Project:") && content.contains("Purpose:"),
                || format!("Missing header: {}", name),
            );

            seed.record(lower.contains("set seed"), || {
                format!("No set seed: {}", name)
            });

            naming.record(
                self.numbered_name.is_match(&name) || name == "master.do",
                || format!("Not numbered: {}", name),
            );

            let has_log_close =
                content.contains("cap log close") || content.contains("capture log close");
            log_pair.record(has_log_close && content.contains("log using"), || {
                format!("Missing log pattern: {}", name)
            });

            // A file with zero regression commands passes vacuously.
            let clustered = content.contains("vce(cluster") || content.contains("vce(cl ");
            let passed = clustered || !self.regression_cmd.is_match(&content);
            clustering.record(passed, || {
                format!("Regression without vce(cluster): {}", name)
            });
        }

        let tallies = [headers, seed, naming, log_pair, clustering];
        let total: f64 = tallies.iter().map(CheckTally::points).sum();
        let score = (total.round() as u32).min(MAX_POINTS);

        let findings: Vec<String> = tallies.into_iter().flat_map(|t| t.findings).collect();
        DimensionResult::new(score, MAX_POINTS).with_findings(findings)
    }
}
