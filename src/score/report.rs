//! Score report generation.
//!
//! Aggregates dimension results into a total score, derives the status
//! label, and renders Text or JSON output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as FmtWrite;

use crate::score::dimension::DimensionResult;

const BAR_WIDTH: usize = 15;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Derived verdict for a version directory, a pure function of the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "PUBLICATION READY")]
    PublicationReady,
    #[serde(rename = "MINOR REVISIONS")]
    MinorRevisions,
    #[serde(rename = "MAJOR REVISIONS")]
    MajorRevisions,
    #[serde(rename = "REDO")]
    Redo,
}

impl Status {
    pub fn from_total(total: u32) -> Self {
        match total {
            95.. => Status::PublicationReady,
            90..=94 => Status::MinorRevisions,
            80..=89 => Status::MajorRevisions,
            _ => Status::Redo,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::PublicationReady => write!(f, "PUBLICATION READY"),
            Status::MinorRevisions => write!(f, "MINOR REVISIONS"),
            Status::MajorRevisions => write!(f, "MAJOR REVISIONS"),
            Status::Redo => write!(f, "REDO"),
        }
    }
}

/// Quality score report for one version directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Directory that was scored
    pub target: String,
    /// Dimension results in scanner registration order
    pub dimensions: IndexMap<String, DimensionResult>,
    /// Sum of dimension scores
    pub total: u32,
    /// Sum of dimension maxima (100 with all dimensions enabled)
    pub max_total: u32,
    /// Verdict derived from the total
    pub status: Status,
    /// Whether totals have been computed
    #[serde(skip)]
    finalized: bool,
}

impl ScoreReport {
    /// Create an empty report for a target directory.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            dimensions: IndexMap::new(),
            total: 0,
            max_total: 0,
            status: Status::Redo,
            finalized: false,
        }
    }

    /// Add a dimension result. Order of insertion is preserved in output.
    pub fn add_dimension(&mut self, name: &str, result: DimensionResult) {
        self.dimensions.insert(name.to_string(), result);
    }

    /// Compute total, max and status. Idempotent.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.total = self.dimensions.values().map(|d| d.score).sum();
        self.max_total = self.dimensions.values().map(|d| d.max).sum();
        self.status = Status::from_total(self.total);
        self.finalized = true;
    }

    /// Render in the requested format.
    pub fn format(&self, format: ReportFormat, verbose: bool) -> String {
        match format {
            ReportFormat::Text => self.format_text(verbose),
            ReportFormat::Json => self.format_json(),
        }
    }

    /// Pretty-printed JSON, dimension order preserved.
    pub fn format_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Human-readable report with per-dimension progress bars.
    pub fn format_text(&self, verbose: bool) -> String {
        let mut out = String::new();

        writeln!(out, "\nQuality Score Report for {}", self.target).unwrap();
        writeln!(out, "{}\n", "=".repeat(50)).unwrap();

        for (name, dim) in &self.dimensions {
            writeln!(
                out,
                "  {:<22} {:>2}/{:<2}  [{}]",
                name,
                dim.score,
                dim.max,
                progress_bar(dim.score, dim.max)
            )
            .unwrap();

            if verbose {
                for finding in &dim.findings {
                    writeln!(out, "    - {}", finding).unwrap();
                }
            }

            if !dim.methods.is_empty() {
                let labels: Vec<&str> = dim.methods.iter().map(|m| m.label()).collect();
                writeln!(out, "    Methods detected: {}", labels.join(", ")).unwrap();
                if verbose {
                    for (method, ms) in &dim.method_scores {
                        writeln!(out, "      {}: {}/{}", method, ms.score, ms.max).unwrap();
                    }
                }
            }
        }

        writeln!(out).unwrap();
        writeln!(out, "  {:<22} {:>2}/{}", "TOTAL", self.total, self.max_total).unwrap();
        writeln!(out).unwrap();
        writeln!(out, "  Status: {}", self.status).unwrap();

        if self.total < 80 {
            let needs_attention: Vec<_> = self
                .dimensions
                .iter()
                .filter(|(_, dim)| (dim.score as f64) < (dim.max as f64) * 0.6)
                .collect();
            if !needs_attention.is_empty() {
                writeln!(out).unwrap();
                writeln!(out, "  Priority fixes:").unwrap();
                for (name, dim) in needs_attention {
                    writeln!(
                        out,
                        "    [{}] Score {}/{} - needs attention",
                        name, dim.score, dim.max
                    )
                    .unwrap();
                    for finding in dim.findings.iter().take(3) {
                        writeln!(out, "      - {}", finding).unwrap();
                    }
                }
            }
        }

        writeln!(out).unwrap();
        out
    }
}

fn progress_bar(score: u32, max: u32) -> String {
    let filled = if max > 0 {
        ((score as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
