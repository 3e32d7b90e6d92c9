// Library exports for the revisar research-quality scorer
pub mod score;

// Re-export key types for convenience
pub use score::{
    DimensionResult, DimensionScanner, MethodScore, MethodTag, ReportFormat, ScoreConfig,
    ScoreEngine, ScoreReport, Status, VersionDir,
};
