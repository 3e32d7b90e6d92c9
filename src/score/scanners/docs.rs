//! Documentation dimension (15 pts)
//!
//! Replication notes, version info, and data-source documentation.

use crate::score::dimension::{DimensionResult, DimensionScanner};
use crate::score::version_dir::VersionDir;

const MAX_POINTS: u32 = 15;
const TEMPLATE_PLACEHOLDER: &str = "[Dataset 1]";

/// Project documentation scanner
#[derive(Debug, Default)]
pub struct DocumentationScanner;

impl DocumentationScanner {
    pub fn new() -> Self {
        Self
    }
}

impl DimensionScanner for DocumentationScanner {
    fn name(&self) -> &'static str {
        "Documentation"
    }

    fn max_points(&self) -> u32 {
        MAX_POINTS
    }

    fn scan(&self, dir: &VersionDir) -> DimensionResult {
        let mut score = 0;
        let mut findings = Vec::new();

        let repl_path = dir.join("REPLICATION.md");
        let repl = repl_path
            .is_file()
            .then(|| VersionDir::read_text(&repl_path));
        match &repl {
            Some(content) => {
                if content.len() > 200 && !content.contains(TEMPLATE_PLACEHOLDER) {
                    score += 6;
                } else if content.len() > 100 {
                    score += 3;
                    findings.push("REPLICATION.md has template placeholders".to_string());
                } else {
                    score += 1;
                    findings.push("REPLICATION.md exists but is mostly empty".to_string());
                }
            }
            None => findings.push("REPLICATION.md not found".to_string()),
        }

        let vinfo_path = dir.join("_VERSION_INFO.md");
        if vinfo_path.is_file() {
            let content = VersionDir::read_text(&vinfo_path);
            if content.len() > 50 {
                score += 5;
            } else {
                score += 2;
                findings.push("_VERSION_INFO.md exists but is sparse".to_string());
            }
        } else {
            findings.push("_VERSION_INFO.md not found".to_string());
        }

        let repl_mentions_sources = repl.as_deref().is_some_and(|content| {
            let lower = content.to_lowercase();
            content.contains("Source") && (lower.contains("raw") || lower.contains("data"))
        });
        let docs_dir = dir.join("docs");
        let has_docs_dir =
            docs_dir.is_dir() && !VersionDir::files_under(&docs_dir, "md").is_empty();

        if repl_mentions_sources || has_docs_dir {
            score += 4;
        } else {
            findings.push("No data source documentation found".to_string());
        }

        DimensionResult::new(score.min(MAX_POINTS), MAX_POINTS).with_findings(findings)
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
        DocumentationScanner::new().scan(&VersionDir::new(tempdir.path()))
    }

    fn full_replication_notes() -> String {
        format!(
            "# Replication\n\nSource: county panel from the state archive.\n{}\n",
            "Raw data live under data/raw/ and are never modified. ".repeat(4)
        )
    }

    #[test]
    fn test_no_documentation_scores_zero() {
        let result = scan(&[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.findings.len(), 3);
        assert!(result
            .findings
            .contains(&"REPLICATION.md not found".to_string()));
    }

    #[test]
    fn test_complete_documentation_scores_full() {
        let result = scan(&[
            ("REPLICATION.md", &full_replication_notes()),
            (
                "_VERSION_INFO.md",
                "Version 3: added wild cluster bootstrap and CS-DiD estimates.",
            ),
        ]);
        assert_eq!(result.score, 15);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_template_placeholder_caps_replication_credit() {
        let padded = format!("[Dataset 1] {}", "x".repeat(200));
        let result = scan(&[("REPLICATION.md", padded.as_str())]);
        // 3 for placeholder notes, no version info, no data docs
        // ("Source" is absent despite the length).
        assert_eq!(result.score, 3);
        assert!(result
            .findings
            .contains(&"REPLICATION.md has template placeholders".to_string()));
    }

    #[test]
    fn test_short_replication_notes_minimal_credit() {
        let result = scan(&[("REPLICATION.md", "TODO")]);
        assert_eq!(result.score, 1);
        assert!(result
            .findings
            .contains(&"REPLICATION.md exists but is mostly empty".to_string()));
    }

    #[test]
    fn test_sparse_version_info_partial_credit() {
        let result = scan(&[("_VERSION_INFO.md", "v2")]);
        assert_eq!(result.score, 2);
        assert!(result
            .findings
            .contains(&"_VERSION_INFO.md exists but is sparse".to_string()));
    }

    #[test]
    fn test_docs_directory_counts_as_data_documentation() {
        let result = scan(&[("docs/data_sources.md", "County panel, 2000-2020")]);
        assert_eq!(result.score, 4);
    }
}
