//! Cross-Validation dimension (15 pts)
//!
//! Looks for a script that re-estimates results in an independent engine:
//! +5 for the script, +5 for comparison vocabulary, +5 for an explicit
//! tolerance or PASS/FAIL verdict.

use std::path::PathBuf;

use crate::score::dimension::{DimensionResult, DimensionScanner};
use crate::score::version_dir::VersionDir;

const MAX_POINTS: u32 = 15;
const NAME_KEYWORDS: [&str; 3] = ["cross", "crossval", "validate"];
const COMPARISON_KEYWORDS: [&str; 3] = ["diff", "compare", "match"];
const TOLERANCE_TOKENS: [&str; 4] = ["0.1", "0.001", "PASS", "FAIL"];

/// Cross-validation script scanner
#[derive(Debug)]
pub struct CrossValidationScanner {
    /// Content markers for the fallback search (configurable allow-list)
    content_markers: Vec<String>,
}

impl CrossValidationScanner {
    pub fn new(content_markers: Vec<String>) -> Self {
        Self { content_markers }
    }

    /// First script that looks like a cross-validation entry point, by
    /// filename under code/python/ or by content marker anywhere.
    fn find_script(&self, dir: &VersionDir) -> Option<PathBuf> {
        let named = VersionDir::files_under(&dir.join("code/python"), "py")
            .into_iter()
            .find(|f| {
                let name = f
                    .file_name()
                    .map(|n| n.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                NAME_KEYWORDS.iter().any(|kw| name.contains(kw))
            });
        if named.is_some() {
            return named;
        }

        dir.files_with_extension("py").into_iter().find(|f| {
            let content = VersionDir::read_text(f);
            let lower = content.to_lowercase();
            self.content_markers
                .iter()
                .any(|marker| content.contains(marker) || lower.contains(&marker.to_lowercase()))
        })
    }
}

impl DimensionScanner for CrossValidationScanner {
    fn name(&self) -> &'static str {
        "Cross-Validation"
    }

    fn max_points(&self) -> u32 {
        MAX_POINTS
    }

    fn scan(&self, dir: &VersionDir) -> DimensionResult {
        let Some(script) = self.find_script(dir) else {
            return DimensionResult::empty(MAX_POINTS, "No Python cross-validation script found");
        };

        let mut score = 5;
        let mut findings = Vec::new();

        let content = VersionDir::read_text(&script);
        let lower = content.to_lowercase();

        if COMPARISON_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            score += 5;
        } else {
            findings.push(
                "Cross-validation script found but no comparison logic detected".to_string(),
            );
        }

        if TOLERANCE_TOKENS.iter().any(|tok| content.contains(tok)) {
            score += 5;
        } else {
            findings.push("No pass/fail threshold found in cross-validation script".to_string());
        }

        DimensionResult::new(score, MAX_POINTS).with_findings(findings)
    }
}
