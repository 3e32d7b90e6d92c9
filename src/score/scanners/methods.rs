//! Method Diagnostics dimension (25 pts)
//!
//! Auto-detects econometric method families from script text, then scores
//! each detected family against its diagnostic rubric. The rubric is a
//! constant table (family -> ordered checks) so it can be audited and
//! tested independently of file I/O.
//!
//! Multi-family aggregation renormalizes by summed max, not by averaging
//! per-family scores: `round(sum(scores) / sum(maxes) * 25)`. A directory
//! that legitimately uses two methods is scored on average diagnostic
//! completeness, not on satisfying two 25-point rubrics at once.

use indexmap::IndexMap;

use crate::score::dimension::{DimensionResult, DimensionScanner, MethodScore, MethodTag};
use crate::score::version_dir::VersionDir;

const MAX_POINTS: u32 = 25;

/// How a diagnostic check matches against the combined script+log text.
#[derive(Debug)]
enum CheckRule {
    /// Any one of these substrings present
    AnyOf(&'static [&'static str]),
    /// At least one substring from each group present
    AllGroups(&'static [&'static [&'static str]]),
    /// Count distinct keywords present; full credit at `full_at`, partial
    /// credit for at least one
    Tiered {
        keywords: &'static [&'static str],
        full_at: usize,
        partial_points: u32,
        partial_finding: &'static str,
    },
}

/// One named diagnostic check within a family rubric.
#[derive(Debug)]
struct DiagnosticCheck {
    name: &'static str,
    points: u32,
    rule: CheckRule,
    missing_finding: &'static str,
}

impl DiagnosticCheck {
    /// Points earned plus an optional finding for missed or partial credit.
    fn evaluate(&self, text: &str) -> (u32, Option<String>) {
        match &self.rule {
            CheckRule::AnyOf(keywords) => {
                if keywords.iter().any(|kw| text.contains(kw)) {
                    (self.points, None)
                } else {
                    (0, Some(self.missing_finding.to_string()))
                }
            }
            CheckRule::AllGroups(groups) => {
                let all = groups
                    .iter()
                    .all(|group| group.iter().any(|kw| text.contains(kw)));
                if all {
                    (self.points, None)
                } else {
                    (0, Some(self.missing_finding.to_string()))
                }
            }
            CheckRule::Tiered {
                keywords,
                full_at,
                partial_points,
                partial_finding,
            } => {
                let count = keywords.iter().filter(|kw| text.contains(*kw)).count();
                if count >= *full_at {
                    (self.points, None)
                } else if count >= 1 {
                    (*partial_points, Some(partial_finding.to_string()))
                } else {
                    (0, Some(self.missing_finding.to_string()))
                }
            }
        }
    }
}

/// Detection keywords and diagnostic rubric for one method family.
#[derive(Debug)]
struct FamilySpec {
    tag: MethodTag,
    detect_keywords: &'static [&'static str],
    checks: &'static [DiagnosticCheck],
}

impl FamilySpec {
    fn max(&self) -> u32 {
        self.checks.iter().map(|c| c.points).sum()
    }
}

static FAMILIES: &[FamilySpec] = &[
    FamilySpec {
        tag: MethodTag::Did,
        detect_keywords: &[
            "csdid",
            "did_multiplegt",
            "did_imputation",
            "bacondecomp",
            "event_study",
            "eventstudyinteract",
            "parallel trend",
        ],
        checks: &[
            DiagnosticCheck {
                name: "pre-trend test",
                points: 5,
                rule: CheckRule::AnyOf(&["testparm", "pre-trend", "pretrend"]),
                missing_finding: "DID: No pre-trend F-test found",
            },
            DiagnosticCheck {
                name: "event study plot",
                points: 5,
                rule: CheckRule::AllGroups(&[
                    &["event"],
                    &["coefplot", "csdid_plot", "event_plot"],
                ]),
                missing_finding: "DID: No event study plot found",
            },
            DiagnosticCheck {
                name: "robust estimator",
                points: 5,
                rule: CheckRule::AnyOf(&["csdid", "did_multiplegt", "did_imputation"]),
                missing_finding:
                    "DID: No robust DID estimator (CS-DiD, dCDH, BJS) found alongside TWFE",
            },
            DiagnosticCheck {
                name: "Goodman-Bacon decomposition",
                points: 5,
                rule: CheckRule::AnyOf(&["bacondecomp"]),
                missing_finding: "DID: No Goodman-Bacon decomposition found",
            },
            DiagnosticCheck {
                name: "sensitivity or bootstrap",
                points: 5,
                rule: CheckRule::AnyOf(&["honestdid", "boottest"]),
                missing_finding: "DID: No HonestDiD sensitivity or wild cluster bootstrap found",
            },
        ],
    },
    FamilySpec {
        tag: MethodTag::Iv,
        detect_keywords: &[
            "ivreghdfe",
            "ivreg2",
            "2sls",
            "instrument",
            "first.stage",
            "first stage",
            "endogenous",
        ],
        checks: &[
            DiagnosticCheck {
                name: "first-stage F",
                points: 6,
                rule: CheckRule::AllGroups(&[
                    &["first"],
                    &["f(", "f =", "f-stat", "f stat"],
                ]),
                missing_finding: "IV: First-stage F-statistic not clearly reported",
            },
            DiagnosticCheck {
                name: "Kleibergen-Paap F",
                points: 5,
                rule: CheckRule::AnyOf(&["kleibergen", "kp"]),
                missing_finding: "IV: Kleibergen-Paap F not reported",
            },
            DiagnosticCheck {
                name: "LIML comparison",
                points: 5,
                rule: CheckRule::AnyOf(&["liml"]),
                missing_finding: "IV: No LIML comparison found",
            },
            DiagnosticCheck {
                name: "exclusion restriction",
                points: 4,
                rule: CheckRule::AnyOf(&["exclusion", "instrument validity"]),
                missing_finding: "IV: No exclusion restriction discussion found",
            },
            DiagnosticCheck {
                name: "overidentification or weak-IV robust test",
                points: 5,
                rule: CheckRule::AnyOf(&["hansen", "sargan", "anderson-rubin", "weakiv"]),
                missing_finding: "IV: No over-identification or weak-IV robust test found",
            },
        ],
    },
    FamilySpec {
        tag: MethodTag::Rdd,
        detect_keywords: &[
            "rdrobust",
            "rddensity",
            "rdplot",
            "cutoff",
            "bandwidth",
            "discontinuity",
        ],
        checks: &[
            DiagnosticCheck {
                name: "density test",
                points: 6,
                rule: CheckRule::AnyOf(&["rddensity", "mccrary"]),
                missing_finding: "RDD: No density test (CJM/McCrary) found",
            },
            DiagnosticCheck {
                name: "bandwidth sensitivity",
                points: 6,
                rule: CheckRule::Tiered {
                    keywords: &["0.5", "0.75", "1.25", "1.5", "2.0", "bwselect"],
                    full_at: 3,
                    partial_points: 3,
                    partial_finding: "RDD: Limited bandwidth sensitivity analysis",
                },
                missing_finding: "RDD: No bandwidth sensitivity analysis found",
            },
            DiagnosticCheck {
                name: "polynomial sensitivity",
                points: 5,
                rule: CheckRule::AnyOf(&["p(1)", "p(2)", "p(3)"]),
                missing_finding: "RDD: No polynomial order sensitivity found",
            },
            DiagnosticCheck {
                name: "placebo cutoffs",
                points: 4,
                rule: CheckRule::AnyOf(&["placebo", "fake"]),
                missing_finding: "RDD: No placebo cutoff tests found",
            },
            DiagnosticCheck {
                name: "covariate balance",
                points: 4,
                rule: CheckRule::AnyOf(&["balance", "covariate"]),
                missing_finding: "RDD: No covariate balance test at cutoff found",
            },
        ],
    },
    FamilySpec {
        tag: MethodTag::Panel,
        detect_keywords: &["xtset", "xtreg", "xtabond2", "hausman", "panel"],
        checks: &[
            DiagnosticCheck {
                name: "Hausman test",
                points: 7,
                rule: CheckRule::AnyOf(&["hausman"]),
                missing_finding: "Panel: No Hausman test found",
            },
            DiagnosticCheck {
                name: "serial correlation test",
                points: 6,
                rule: CheckRule::AnyOf(&["xtserial", "wooldridge", "serial"]),
                missing_finding: "Panel: No serial correlation test found",
            },
            DiagnosticCheck {
                name: "clustered standard errors",
                points: 6,
                rule: CheckRule::AnyOf(&["vce(cluster", "cluster("]),
                missing_finding: "Panel: No clustered standard errors found",
            },
            DiagnosticCheck {
                name: "within R-squared or dynamic panel",
                points: 6,
                rule: CheckRule::AnyOf(&["r2_within", "within r", "xtabond2"]),
                missing_finding:
                    "Panel: No within R-squared reported or dynamic panel considered",
            },
        ],
    },
];

/// Econometric diagnostics scanner
#[derive(Debug, Default)]
pub struct MethodDiagnosticsScanner;

impl MethodDiagnosticsScanner {
    pub fn new() -> Self {
        Self
    }

    /// Families whose detection keywords appear in the case-folded script
    /// text, sorted by label.
    fn detect(script_text: &str) -> Vec<MethodTag> {
        let mut tags: Vec<MethodTag> = FAMILIES
            .iter()
            .filter(|family| {
                family
                    .detect_keywords
                    .iter()
                    .any(|kw| script_text.contains(kw))
            })
            .map(|family| family.tag)
            .collect();
        tags.sort_by_key(|t| t.label());
        tags
    }
}

impl DimensionScanner for MethodDiagnosticsScanner {
    fn name(&self) -> &'static str {
        "Method Diagnostics"
    }

    fn max_points(&self) -> u32 {
        MAX_POINTS
    }

    fn scan(&self, dir: &VersionDir) -> DimensionResult {
        let do_files = dir.files_with_extension("do");
        let script_text = VersionDir::concat_text(&do_files).to_lowercase();

        let detected = Self::detect(&script_text);
        if detected.is_empty() {
            return DimensionResult::empty(
                MAX_POINTS,
                "No econometric methods detected in .do files",
            );
        }

        let log_files = dir.files_with_extension("log");
        let log_text = VersionDir::concat_text(&log_files).to_lowercase();
        let combined = format!("{}\n{}", script_text, log_text);

        let mut findings = Vec::new();
        let mut method_scores: IndexMap<String, MethodScore> = IndexMap::new();

        for family in FAMILIES {
            if !detected.contains(&family.tag) {
                continue;
            }
            let mut raw = 0;
            for check in family.checks {
                let (earned, finding) = check.evaluate(&combined);
                raw += earned;
                if let Some(finding) = finding {
                    findings.push(finding);
                }
            }
            method_scores.insert(
                family.tag.label().to_string(),
                MethodScore {
                    score: raw,
                    max: family.max(),
                },
            );
        }

        // Renormalize by summed max, never by averaging per-family scores.
        let raw_total: u32 = method_scores.values().map(|m| m.score).sum();
        let max_total: u32 = method_scores.values().map(|m| m.max).sum();
        let score = if max_total > 0 {
            (raw_total as f64 / max_total as f64 * MAX_POINTS as f64).round() as u32
        } else {
            0
        };

        DimensionResult::new(score, MAX_POINTS)
            .with_findings(findings)
            .with_methods(detected, method_scores)
    }
}

#[cfg(test)]
#[path = "methods_tests.rs"]
mod tests;
