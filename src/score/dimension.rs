//! Dimension scanner trait and result types.
//!
//! Each quality dimension is scored by an independent scanner over the
//! version directory snapshot. Scanners never fail: missing files and
//! directories degrade to a zero sub-score plus a finding string.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::score::version_dir::VersionDir;

/// Result of scoring one quality dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionResult {
    /// Points earned, `0 <= score <= max`
    pub score: u32,
    /// Maximum points for this dimension
    pub max: u32,
    /// Human-readable findings explaining lost points
    pub findings: Vec<String>,
    /// Detected method families (method-diagnostics dimension only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodTag>,
    /// Per-family sub-scores (method-diagnostics dimension only)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub method_scores: IndexMap<String, MethodScore>,
}

impl DimensionResult {
    /// Create a result with no findings.
    pub fn new(score: u32, max: u32) -> Self {
        debug_assert!(score <= max);
        Self {
            score,
            max,
            findings: Vec::new(),
            methods: Vec::new(),
            method_scores: IndexMap::new(),
        }
    }

    /// Zero score with a single finding.
    pub fn empty(max: u32, finding: impl Into<String>) -> Self {
        Self::new(0, max).with_finding(finding)
    }

    /// Append a finding.
    pub fn with_finding(mut self, finding: impl Into<String>) -> Self {
        self.findings.push(finding.into());
        self
    }

    /// Append several findings, preserving order.
    pub fn with_findings(mut self, findings: Vec<String>) -> Self {
        self.findings.extend(findings);
        self
    }

    /// Attach detected methods and their sub-scores.
    pub fn with_methods(
        mut self,
        methods: Vec<MethodTag>,
        method_scores: IndexMap<String, MethodScore>,
    ) -> Self {
        self.methods = methods;
        self.method_scores = method_scores;
        self
    }
}

/// Raw score for one method family's diagnostic rubric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MethodScore {
    pub score: u32,
    pub max: u32,
}

/// Econometric method family, auto-detected from script keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MethodTag {
    #[serde(rename = "DID")]
    Did,
    #[serde(rename = "IV")]
    Iv,
    #[serde(rename = "RDD")]
    Rdd,
    #[serde(rename = "Panel")]
    Panel,
}

impl MethodTag {
    pub fn label(&self) -> &'static str {
        match self {
            MethodTag::Did => "DID",
            MethodTag::Iv => "IV",
            MethodTag::Rdd => "RDD",
            MethodTag::Panel => "Panel",
        }
    }
}

impl fmt::Display for MethodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trait for quality dimension scanners.
///
/// Implement this trait to add a scoring dimension. Scanners are pure
/// functions of the filesystem snapshot and must not mutate the tree.
pub trait DimensionScanner: Send + Sync + fmt::Debug {
    /// Display name, also the key in reports (e.g. "Code Conventions")
    fn name(&self) -> &'static str;

    /// Maximum points this dimension can award
    fn max_points(&self) -> u32;

    /// Score the version directory.
    fn scan(&self, dir: &VersionDir) -> DimensionResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_builders() {
        let result = DimensionResult::new(10, 15)
            .with_finding("first")
            .with_findings(vec!["second".to_string()]);
        assert_eq!(result.score, 10);
        assert_eq!(result.max, 15);
        assert_eq!(result.findings, vec!["first", "second"]);
        assert!(result.methods.is_empty());
    }

    #[test]
    fn test_empty_result() {
        let result = DimensionResult::empty(15, "No code files found");
        assert_eq!(result.score, 0);
        assert_eq!(result.findings, vec!["No code files found"]);
    }

    #[test]
    fn test_method_tag_labels() {
        assert_eq!(MethodTag::Did.label(), "DID");
        assert_eq!(MethodTag::Iv.label(), "IV");
        assert_eq!(MethodTag::Rdd.label(), "RDD");
        assert_eq!(MethodTag::Panel.label(), "Panel");
    }

    #[test]
    fn test_method_tag_serde() {
        let json = serde_json::to_string(&MethodTag::Panel).unwrap();
        assert_eq!(json, "\"Panel\"");
        let tag: MethodTag = serde_json::from_str("\"DID\"").unwrap();
        assert_eq!(tag, MethodTag::Did);
    }

    #[test]
    fn test_result_skips_empty_methods_in_json() {
        let result = DimensionResult::new(5, 15);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("methods"));
        assert!(!json.contains("method_scores"));
    }
}
