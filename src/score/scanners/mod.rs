//! Quality dimension scanners

mod conventions;
mod crossval;
mod docs;
mod logs;
mod methods;
mod outputs;

pub use conventions::ConventionsScanner;
pub use crossval::CrossValidationScanner;
pub use docs::DocumentationScanner;
pub use logs::LogCleanlinessScanner;
pub use methods::MethodDiagnosticsScanner;
pub use outputs::OutputCompletenessScanner;
