//! Log Cleanliness dimension (15 pts)
//!
//! A log is clean when none of the error-pattern families match. The score
//! is the clean fraction scaled to 15 points.

use regex_lite::Regex;

use crate::score::dimension::{DimensionResult, DimensionScanner};
use crate::score::version_dir::VersionDir;

const MAX_POINTS: u32 = 15;

/// Execution log scanner
#[derive(Debug)]
pub struct LogCleanlinessScanner {
    error_patterns: Vec<(Regex, &'static str)>,
}

impl Default for LogCleanlinessScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl LogCleanlinessScanner {
    pub fn new() -> Self {
        let patterns = [
            (r"r\(\d+\)", "Stata error"),
            (r"variable .+ not found", "Variable not found"),
            (r"command .+ is unrecognized", "Command not recognized"),
            (r"no observations", "No observations"),
        ];
        Self {
            error_patterns: patterns
                .into_iter()
                .map(|(p, label)| (Regex::new(p).expect("valid error pattern"), label))
                .collect(),
        }
    }
}

impl DimensionScanner for LogCleanlinessScanner {
    fn name(&self) -> &'static str {
        "Log Cleanliness"
    }

    fn max_points(&self) -> u32 {
        MAX_POINTS
    }

    fn scan(&self, dir: &VersionDir) -> DimensionResult {
        let log_files = dir.files_with_extension("log");

        if log_files.is_empty() {
            return DimensionResult::empty(MAX_POINTS, "No .log files found");
        }

        let mut clean_logs = 0u32;
        let mut findings = Vec::new();

        for file in &log_files {
            let content = VersionDir::read_text(file);
            let errors: Vec<String> = self
                .error_patterns
                .iter()
                .filter_map(|(pattern, label)| {
                    let count = pattern.find_iter(&content).count();
                    (count > 0).then(|| format!("{}: {} occurrence(s)", label, count))
                })
                .collect();

            if errors.is_empty() {
                clean_logs += 1;
            } else {
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                findings.push(format!("{}: {}", name, errors.join("; ")));
            }
        }

        let rate = clean_logs as f64 / log_files.len() as f64;
        let score = (rate * MAX_POINTS as f64).round() as u32;
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
        LogCleanlinessScanner::new().scan(&VersionDir::new(tempdir.path()))
    }

    #[test]
    fn test_no_logs_scores_zero() {
        let result = scan(&[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.findings, vec!["No .log files found"]);
    }

    #[test]
    fn test_all_clean_logs_scores_full() {
        let result = scan(&[
            ("output/logs/01_clean.log", "regression completed\n"),
            ("output/logs/02_main.log", "estimates stored\n"),
            ("output/logs/03_robust.log", "done\n"),
        ]);
        assert_eq!(result.score, 15);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_stata_error_token_flags_log() {
        let result = scan(&[("run.log", "something failed r(111)\n")]);
        assert_eq!(result.score, 0);
        assert_eq!(result.findings, vec!["run.log: Stata error: 1 occurrence(s)"]);
    }

    #[test]
    fn test_multiple_error_families_joined() {
        let result = scan(&[(
            "run.log",
            "variable price not found\nr(111)\nr(198)\n",
        )]);
        assert_eq!(result.score, 0);
        assert_eq!(
            result.findings,
            vec!["run.log: Stata error: 2 occurrence(s); Variable not found: 1 occurrence(s)"]
        );
    }

    #[test]
    fn test_half_clean_rounds_to_eight() {
        let result = scan(&[
            ("a.log", "fine\n"),
            ("b.log", "no observations\n"),
        ]);
        // 1/2 clean: 7.5 rounds to 8
        assert_eq!(result.score, 8);
        assert_eq!(result.findings.len(), 1);
    }

    #[test]
    fn test_command_unrecognized_pattern() {
        let result = scan(&[("run.log", "command csdid is unrecognized\n")]);
        assert_eq!(result.score, 0);
        assert!(result.findings[0].contains("Command not recognized"));
    }
}
